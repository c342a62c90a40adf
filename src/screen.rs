use crate::error::GameError;
use crate::ui::UiContainer;

/// Shows and hides the page's game layers. There is no transition table:
/// any layer may be shown or hidden at any time, and both are idempotent.
pub struct ScreenManager<C: UiContainer> {
    container: C,
    layer_class: String,
}

impl<C: UiContainer> ScreenManager<C> {
    pub fn new(container: C, layer_class: impl Into<String>) -> Self {
        ScreenManager {
            container,
            layer_class: layer_class.into(),
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Hide every game layer, returns how many were hidden
    pub fn hide_all(&self) -> Result<usize, GameError> {
        let count = self.container.set_class_visible(&self.layer_class, false)?;
        log::trace!("hid {} '{}' layers", count, self.layer_class);
        Ok(count)
    }

    pub fn hide(&self, id: &str) -> Result<(), GameError> {
        self.container.set_visible(id, false)
    }

    pub fn show(&self, id: &str) -> Result<(), GameError> {
        self.container.set_visible(id, true)
    }

    pub fn is_visible(&self, id: &str) -> Result<bool, GameError> {
        self.container.is_visible(id)
    }
}
