//! Focus handles and small DOM lookups.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser every lookup reports "nothing there" and focus moves
//! are no-ops, which keeps the modal and page logic testable natively.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use atlas::consts::{OPEN_GALLERY_ATTR, OPEN_GALLERY_CLASS};

/// Element to give focus back to when the modal closes.
#[derive(Clone, Debug)]
pub struct FocusReturn {
    #[cfg(feature = "csr")]
    element: web_sys::HtmlElement,
}

impl FocusReturn {
    /// Capture the currently focused element, if it can take focus.
    pub fn capture() -> Option<Self> {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            let active = web_sys::window()?.document()?.active_element()?;
            let element = active.dyn_into::<web_sys::HtmlElement>().ok()?;
            Some(Self { element })
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    pub fn restore(&self) {
        #[cfg(feature = "csr")]
        {
            if let Err(e) = self.element.focus() {
                log::warn!("could not restore focus: {e:?}");
            }
        }
    }
}

/// `location.search` of the current page, empty outside the browser.
pub fn location_search() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().search().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// CSS selector matching every open-gallery control.
pub fn open_gallery_selector() -> String {
    format!(".{OPEN_GALLERY_CLASS}[{OPEN_GALLERY_ATTR}]")
}

/// Entity name carried by the open-gallery control a click landed on.
///
/// Popup markup is injected by the map library, so clicks are resolved by
/// walking up from the event target rather than through component handlers.
#[cfg(feature = "csr")]
pub fn open_gallery_target(ev: &web_sys::Event) -> Option<String> {
    use wasm_bindgen::JsCast;
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let control = target.closest(&open_gallery_selector()).ok()??;
    entity_name(control.get_attribute(OPEN_GALLERY_ATTR))
}

/// Normalize a `data-nome` value: trimmed, `None` when blank.
pub fn entity_name(raw: Option<String>) -> Option<String> {
    let name = raw?;
    let trimmed = name.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
