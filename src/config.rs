use crate::browser;
use crate::level::LevelDescriptor;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Page layout and level data. Every field has a default so a partial
/// `levels.json` only overrides what it names.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub layer_class: String,
    pub start_screen: String,
    pub level_select_screen: String,
    pub levels: Vec<LevelDescriptor>,
}

impl GameConfig {
    pub const PATH: &'static str = "levels.json";

    pub async fn fetch(path: &str) -> Result<Self> {
        browser::fetch_json::<GameConfig>(path)
            .await
            .with_context(|| format!("Failed to load game config from : {}", path))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        // Both levels point at the same art; kept as data until real levels exist
        let placeholder = LevelDescriptor {
            foreground: "desert-foreground".to_string(),
            background: "clouds-background".to_string(),
        };
        GameConfig {
            layer_class: "gamelayer".to_string(),
            start_screen: "gamestartscreen".to_string(),
            level_select_screen: "levelselectscreen".to_string(),
            levels: vec![placeholder.clone(), placeholder],
        }
    }
}
