// ==================== Imports ====================
use config::GameConfig;
use engine::Renderer;
use game::Game;
use level::PendingLoader;
use primer::Lesson;
use std::fmt::Display;
use std::rc::Rc;
use ui::DomContainer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{HtmlAudioElement, HtmlImageElement};

pub mod assets;
pub mod browser;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod level;
pub mod primer;
pub mod screen;
pub mod ui;

// ==================== Constants ====================
const PRIMER_IMAGE: &str = "images/spaceship.png";
const ALL_LESSONS: &str = "all";

fn to_js(err: impl Display) -> JsValue {
    JsValue::from_str(&format!("{:#}", err))
}

// ==================== Main Functions ====================
/// Main entry for Webassembly module
/// - better panic messages
/// - `log` macros routed to the browser console
#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // only fails if a logger is already installed, which is fine
    let _ = console_log::init_with_level(log::Level::Debug);
    Ok(())
}

/// Draw one lesson by name (or "all") on `#canvas`, and again whenever the
/// window is resized
#[wasm_bindgen]
pub fn run_primer(lesson: &str) -> Result<(), JsValue> {
    let lessons: Vec<Lesson> = if lesson == ALL_LESSONS {
        Lesson::ALL.to_vec()
    } else {
        let lesson = Lesson::from_name(lesson)
            .ok_or_else(|| to_js(format!("Unknown lesson '{}'", lesson)))?;
        vec![lesson]
    };
    let canvas = browser::canvas().map_err(to_js)?;
    let renderer = Rc::new(Renderer::new(browser::context().map_err(to_js)?));

    // spawns a new asynchronous task in local thread, for web assembly
    // environment, using wasm_bindgen_futures
    browser::spawn_local(async move {
        let image = if lessons.iter().any(Lesson::needs_image) {
            match assets::load_image(PRIMER_IMAGE, assets::DEFAULT_TIMEOUT_MS).await {
                Ok(image) => Some(image),
                Err(err) => {
                    log::error!("{}", err);
                    None
                }
            }
        } else {
            None
        };

        let draw = move || -> anyhow::Result<()> {
            browser::fit_canvas_to_window(&canvas)?;
            primer::run_lessons(renderer.as_ref(), &lessons, image.as_ref())
        };
        if let Err(err) = draw() {
            log::error!("primer : {:#}", err);
        }
        let resized = browser::on_window_resize(move || {
            if let Err(err) = draw() {
                log::error!("primer : {:#}", err);
            }
        });
        if let Err(err) = resized {
            log::warn!("primer will not redraw on resize : {:#}", err);
        }
    });

    Ok(())
}

/// The running game, owned by the page script. Dropping it disables the
/// level buttons.
#[wasm_bindgen]
pub struct GameHandle {
    game: Rc<Game<DomContainer>>,
}

#[wasm_bindgen]
impl GameHandle {
    pub fn show(&self, id: &str) -> Result<(), JsValue> {
        self.game.screens().show(id).map_err(to_js)
    }

    pub fn hide(&self, id: &str) -> Result<(), JsValue> {
        self.game.screens().hide(id).map_err(to_js)
    }

    #[wasm_bindgen(js_name = hideAll)]
    pub fn hide_all(&self) -> Result<usize, JsValue> {
        self.game.screens().hide_all().map_err(to_js)
    }

    /// Same as clicking the level button labeled `label`
    pub fn select(&self, label: &str) -> Result<(), JsValue> {
        self.game.select(label).map_err(to_js)
    }

    #[wasm_bindgen(js_name = levelCount)]
    pub fn level_count(&self) -> usize {
        self.game.levels().len()
    }
}

/// Read `levels.json` (defaults if it is missing), render the level
/// selector and show the start screen
#[wasm_bindgen(js_name = startGame)]
pub async fn start_game() -> Result<GameHandle, JsValue> {
    let config = match GameConfig::fetch(GameConfig::PATH).await {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{:#}; using built-in levels", err);
            GameConfig::default()
        }
    };
    let container = DomContainer::new().map_err(to_js)?;
    let game = Game::start(container, config, Box::new(PendingLoader)).map_err(to_js)?;
    Ok(GameHandle { game })
}

/// Load `{base}.mp3` or `{base}.ogg`, whichever this browser can play
#[wasm_bindgen(js_name = loadSound)]
pub async fn load_sound(base: String) -> Result<HtmlAudioElement, JsValue> {
    let extension = assets::audio_extension().map_err(to_js)?;
    let url = format!("{}.{}", base, extension);
    assets::load_audio(&url, assets::DEFAULT_TIMEOUT_MS)
        .await
        .map_err(to_js)
}

/// Load an image for page scripts, failing instead of hanging on a bad URL
#[wasm_bindgen(js_name = loadImage)]
pub async fn load_image(url: String) -> Result<HtmlImageElement, JsValue> {
    assets::load_image(&url, assets::DEFAULT_TIMEOUT_MS)
        .await
        .map_err(to_js)
}
