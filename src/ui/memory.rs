use super::{Handler, UiContainer};
use crate::error::GameError;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

struct Element {
    class: Option<String>,
    visible: bool,
}

struct Button {
    container_id: String,
    label: String,
    on_click: Rc<RefCell<Handler>>,
}

#[derive(Default)]
struct Page {
    elements: BTreeMap<String, Element>,
    buttons: Vec<Button>,
}

/// In-memory page. Clones share the same elements, so a test can keep a
/// handle while the game owns another.
#[derive(Clone, Default)]
pub struct MemoryContainer {
    page: Rc<RefCell<Page>>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visible element with an optional class
    pub fn with(self, id: &str, class: Option<&str>) -> Self {
        self.page.borrow_mut().elements.insert(
            id.to_string(),
            Element {
                class: class.map(str::to_string),
                visible: true,
            },
        );
        self
    }

    /// The page layout the game expects
    pub fn game_page() -> Self {
        MemoryContainer::new()
            .with("gamestartscreen", Some("gamelayer"))
            .with("levelselectscreen", Some("gamelayer"))
            .with("loadingscreen", Some("gamelayer"))
            .with("gamecanvas", Some("gamelayer"))
    }

    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.page
            .borrow()
            .elements
            .iter()
            .filter(|(_, element)| element.class.as_deref() == Some(class))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Labels of the buttons in `container_id`, in insertion order
    pub fn button_labels(&self, container_id: &str) -> Vec<String> {
        self.page
            .borrow()
            .buttons
            .iter()
            .filter(|button| button.container_id == container_id)
            .map(|button| button.label.clone())
            .collect()
    }

    /// Activate the first button with `label`. Panics if there is none.
    pub fn click(&self, label: &str) {
        let on_click = self
            .page
            .borrow()
            .buttons
            .iter()
            .find(|button| button.label == label)
            .map(|button| button.on_click.clone())
            .unwrap_or_else(|| panic!("no button labeled {}", label));
        // page borrow is released here; the handler may touch the page again
        let mut handler = on_click.borrow_mut();
        (*handler)();
    }
}

impl UiContainer for MemoryContainer {
    fn set_visible(&self, id: &str, visible: bool) -> Result<(), GameError> {
        let mut page = self.page.borrow_mut();
        let element = page
            .elements
            .get_mut(id)
            .ok_or_else(|| GameError::ElementNotFound(id.to_string()))?;
        element.visible = visible;
        Ok(())
    }

    fn is_visible(&self, id: &str) -> Result<bool, GameError> {
        self.page
            .borrow()
            .elements
            .get(id)
            .map(|element| element.visible)
            .ok_or_else(|| GameError::ElementNotFound(id.to_string()))
    }

    fn set_class_visible(&self, class: &str, visible: bool) -> Result<usize, GameError> {
        let mut page = self.page.borrow_mut();
        let mut count = 0;
        for element in page
            .elements
            .values_mut()
            .filter(|element| element.class.as_deref() == Some(class))
        {
            element.visible = visible;
            count += 1;
        }
        Ok(count)
    }

    fn append_button(
        &self,
        container_id: &str,
        label: &str,
        on_click: Handler,
    ) -> Result<(), GameError> {
        let mut page = self.page.borrow_mut();
        if !page.elements.contains_key(container_id) {
            return Err(GameError::ElementNotFound(container_id.to_string()));
        }
        page.buttons.push(Button {
            container_id: container_id.to_string(),
            label: label.to_string(),
            on_click: Rc::new(RefCell::new(on_click)),
        });
        Ok(())
    }
}
