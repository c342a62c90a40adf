use super::{Handler, UiContainer};
use crate::browser::{self, html};
use crate::error::GameError;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const DISPLAY: &str = "display";
const SHOWN: &str = "block";
const HIDDEN: &str = "none";

pub struct DomContainer {
    document: Document,
}

impl DomContainer {
    pub fn new() -> anyhow::Result<Self> {
        Ok(DomContainer {
            document: browser::document()?,
        })
    }

    fn element(&self, id: &str) -> Result<HtmlElement, GameError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| GameError::ElementNotFound(id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|element| GameError::Js(format!("{:#?} is not an HtmlElement", element)))
    }
}

fn set_display(element: &HtmlElement, visible: bool) -> Result<(), GameError> {
    let value = if visible { SHOWN } else { HIDDEN };
    element
        .style()
        .set_property(DISPLAY, value)
        .map_err(|err| GameError::Js(format!("{:#?}", err)))
}

impl UiContainer for DomContainer {
    fn set_visible(&self, id: &str, visible: bool) -> Result<(), GameError> {
        set_display(&self.element(id)?, visible)
    }

    /// Reads the computed style, so a layer hidden by a stylesheet rule
    /// reports hidden even before anything sets its inline `display`
    fn is_visible(&self, id: &str) -> Result<bool, GameError> {
        let element = self.element(id)?;
        let style = browser::window()
            .map_err(|err| GameError::Js(err.to_string()))?
            .get_computed_style(&element)
            .map_err(|err| GameError::Js(format!("{:#?}", err)))?
            .ok_or_else(|| GameError::Js(format!("no computed style for {}", id)))?;
        let display = style
            .get_property_value(DISPLAY)
            .map_err(|err| GameError::Js(format!("{:#?}", err)))?;
        Ok(display != HIDDEN)
    }

    /// Elements with `class` that are not HTML (an `<svg>`, say) have no
    /// `style` to set and are left out of the count
    fn set_class_visible(&self, class: &str, visible: bool) -> Result<usize, GameError> {
        let layers = self.document.get_elements_by_class_name(class);
        let mut changed = 0;
        // the collection is live; walk it backwards
        for index in (0..layers.length()).rev() {
            if let Some(layer) = layers
                .item(index)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            {
                set_display(&layer, visible)?;
                changed += 1;
            }
        }
        Ok(changed)
    }

    fn append_button(
        &self,
        container_id: &str,
        label: &str,
        on_click: Handler,
    ) -> Result<(), GameError> {
        let container = self.element(container_id)?;
        let button = browser::new_button(label).map_err(|err| GameError::Js(err.to_string()))?;
        let callback = browser::event_closure(on_click);
        button
            .add_event_listener_with_callback(html::CLICK, callback.as_ref().unchecked_ref())
            .map_err(|err| GameError::Js(format!("{:#?}", err)))?;
        // the button lives as long as the page
        callback.forget();
        container
            .append_child(&button)
            .map_err(|err| GameError::Js(format!("{:#?}", err)))?;
        Ok(())
    }
}
