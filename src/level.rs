use crate::error::GameError;
use crate::ui::{Handler, UiContainer};
use serde::{Deserialize, Serialize};

/// Static level data as it appears in `levels.json`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDescriptor {
    pub foreground: String,
    pub background: String,
}

/// Something placed in a level. Levels do not carry any yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity;

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    foreground: String,
    background: String,
    entities: Vec<Entity>,
}

impl Level {
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Level {
            foreground: foreground.into(),
            background: background.into(),
            entities: Vec::new(),
        }
    }

    pub fn foreground(&self) -> &str {
        &self.foreground
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

impl From<&LevelDescriptor> for Level {
    fn from(descriptor: &LevelDescriptor) -> Self {
        Level::new(descriptor.foreground.as_str(), descriptor.background.as_str())
    }
}

/// Starts loading a level's assets and data.
///
/// This is the seam where level loading will live. The only implementation
/// today is [`PendingLoader`].
pub trait LevelLoader {
    /// Begin loading `level`, which sits at 0-based `index` in the registry
    fn load(&self, index: usize, level: &Level) -> Result<(), GameError>;
}

/// Level loading is not implemented yet: acknowledges the request, loads
/// nothing and always succeeds.
pub struct PendingLoader;

impl LevelLoader for PendingLoader {
    fn load(&self, index: usize, level: &Level) -> Result<(), GameError> {
        log::info!(
            "level {} requested ({} over {}); level loading is not implemented",
            index,
            level.foreground(),
            level.background()
        );
        Ok(())
    }
}

/// Ordered, fixed list of levels. Selector labels are 1-based, indices 0-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Levels {
    data: Vec<Level>,
}

impl Levels {
    pub fn new(descriptors: &[LevelDescriptor]) -> Self {
        Levels {
            data: descriptors.iter().map(Level::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.data.get(index)
    }

    /// "1", "2", ... one per level
    pub fn labels(&self) -> impl Iterator<Item = String> {
        (1..=self.data.len()).map(|number| number.to_string())
    }

    /// 0-based index for a selector label
    pub fn index_for(&self, label: &str) -> Result<usize, GameError> {
        match label.trim().parse::<usize>() {
            Ok(number) if (1..=self.data.len()).contains(&number) => Ok(number - 1),
            _ => Err(GameError::InvalidLevelIndex(label.to_string())),
        }
    }

    /// Append one button per level to `container_id`, in order.
    /// `handler_for` builds the click handler for each label.
    pub fn render_selector<C: UiContainer>(
        &self,
        container: &C,
        container_id: &str,
        mut handler_for: impl FnMut(String) -> Handler,
    ) -> Result<(), GameError> {
        for label in self.labels() {
            container.append_button(container_id, &label, handler_for(label.clone()))?;
        }
        log::debug!("rendered {} level buttons into '{}'", self.len(), container_id);
        Ok(())
    }

    pub fn load(&self, index: usize, loader: &dyn LevelLoader) -> Result<(), GameError> {
        let level = self
            .get(index)
            .ok_or_else(|| GameError::InvalidLevelIndex((index + 1).to_string()))?;
        loader.load(index, level)
    }
}
