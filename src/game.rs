use crate::config::GameConfig;
use crate::error::GameError;
use crate::level::{LevelLoader, Levels};
use crate::screen::ScreenManager;
use crate::ui::UiContainer;
use std::rc::{Rc, Weak};

/// TABLE
/// ┌──────────────────────── Game Shell Overview ────────────────────────┐
/// │                                                                     │
/// │   page load ──► Game::start                                         │
/// │                  ├─► Levels::render_selector  (buttons "1".."N")    │
/// │                  ├─► ScreenManager::hide_all                        │
/// │                  └─► ScreenManager::show(start screen)              │
/// │                                                                     │
/// │   click "k" ──► Game::select("k")                                   │
/// │                  ├─► ScreenManager::hide(level select screen)       │
/// │                  └─► Levels::load(k - 1) ──► LevelLoader            │
/// │                                                                     │
/// └─────────────────────────────────────────────────────────────────────┘
/// The one root object of the page. Buttons hold a `Weak<Game>` so the
/// handlers never keep the game alive on their own.
pub struct Game<C: UiContainer> {
    screens: ScreenManager<C>,
    levels: Levels,
    loader: Box<dyn LevelLoader>,
    config: GameConfig,
}

impl<C: UiContainer + 'static> Game<C> {
    /// Build the game, render the level selector and show the start screen
    pub fn start(
        container: C,
        config: GameConfig,
        loader: Box<dyn LevelLoader>,
    ) -> Result<Rc<Self>, GameError> {
        let game = Rc::new(Game {
            screens: ScreenManager::new(container, config.layer_class.as_str()),
            levels: Levels::new(&config.levels),
            loader,
            config,
        });

        let weak = Rc::downgrade(&game);
        game.levels.render_selector(
            game.screens.container(),
            &game.config.level_select_screen,
            |label| Self::select_handler(weak.clone(), label),
        )?;

        game.screens.hide_all()?;
        game.screens.show(&game.config.start_screen)?;
        log::info!("game ready with {} levels", game.levels.len());

        Ok(game)
    }

    // ELI5: the handler owns exactly what it needs, a weak game and its label
    fn select_handler(game: Weak<Self>, label: String) -> Box<dyn FnMut()> {
        Box::new(move || {
            if let Some(game) = game.upgrade() {
                if let Err(err) = game.select(&label) {
                    log::error!("level button '{}' : {}", label, err);
                }
            }
        })
    }

    /// What a level button does: hide the selector and load level `label - 1`
    pub fn select(&self, label: &str) -> Result<(), GameError> {
        let index = self.levels.index_for(label)?;
        self.screens.hide(&self.config.level_select_screen)?;
        self.load(index)
    }

    pub fn load(&self, index: usize) -> Result<(), GameError> {
        self.levels.load(index, self.loader.as_ref())
    }

    pub fn screens(&self) -> &ScreenManager<C> {
        &self.screens
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }
}
