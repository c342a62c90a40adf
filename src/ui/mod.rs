// TABLE:
// ┌───────────────────────────────────────────────────────────────┐
// │                 UI container implementations                  │
// ├──────────────┬────────────────────────────────────────────────┤
// │ dom.rs       │ the page: web_sys::Document, style.display     │
// │ memory.rs    │ test double: elements in a map, clickable      │
// └──────────────┴────────────────────────────────────────────────┘
use crate::error::GameError;

pub mod dom;
#[cfg(test)]
pub mod memory;

pub use dom::DomContainer;

/// Click handler attached to a selector control
pub type Handler = Box<dyn FnMut()>;

/// The page as the screen manager and level selector see it: elements
/// addressed by id or by a shared class, each shown or hidden.
///
/// Every method takes `&self`; the browser owns the elements and wasm is
/// single threaded, so implementations use interior mutability.
pub trait UiContainer {
    /// `Err(ElementNotFound)` when no element has `id`
    fn set_visible(&self, id: &str, visible: bool) -> Result<(), GameError>;

    fn is_visible(&self, id: &str) -> Result<bool, GameError>;

    /// Applies to every element carrying `class`, returns how many there were
    fn set_class_visible(&self, class: &str, visible: bool) -> Result<usize, GameError>;

    /// Append a button labeled `label` to `container_id` and call `on_click`
    /// each time it is activated
    fn append_button(
        &self,
        container_id: &str,
        label: &str,
        on_click: Handler,
    ) -> Result<(), GameError>;
}
