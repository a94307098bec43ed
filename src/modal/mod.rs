use crate::error::{PageError, PageResult};
use wasm_bindgen::prelude::*;

pub(crate) const DELETE_MODAL_ID: &str = "deleteModal";
/// Fired by Bootstrap on the modal element once it is fully hidden.
pub(crate) const MODAL_HIDDEN_EVENT: &str = "hidden.bs.modal";

/// A dialog owned by the UI toolkit. The binder only opens it; closing is
/// driven by the user and reported back through `mark_hidden`.
pub trait Modal {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_shown(&self) -> bool;
    /// The toolkit closed the dialog on its own (cancel, backdrop, Esc).
    fn mark_hidden(&mut self);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    type BsModal;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Modal")]
    fn new(element: &web_sys::Element) -> Result<BsModal, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &BsModal);

    #[wasm_bindgen(method)]
    fn hide(this: &BsModal);
}

/// `bootstrap.Modal` constructed once over the `#deleteModal` container.
pub struct BootstrapModal {
    inner: BsModal,
    shown: bool,
}

impl BootstrapModal {
    pub fn attach(document: &web_sys::Document, container_id: &str) -> PageResult<Self> {
        let element = document
            .get_element_by_id(container_id)
            .ok_or_else(|| PageError::missing_element(container_id))?;
        let inner = BsModal::new(&element).map_err(|e| {
            PageError::toolkit(
                "bootstrap.Modal",
                e.as_string().unwrap_or_else(|| format!("{e:?}")),
            )
        })?;
        Ok(Self {
            inner,
            shown: false,
        })
    }
}

impl Modal for BootstrapModal {
    fn show(&mut self) {
        self.inner.show();
        self.shown = true;
    }

    fn hide(&mut self) {
        self.inner.hide();
        self.shown = false;
    }

    fn is_shown(&self) -> bool {
        self.shown
    }

    fn mark_hidden(&mut self) {
        self.shown = false;
    }
}

/// In-memory modal for tests: records visibility and how often it was opened.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct RecordingModal {
    pub shown: bool,
    pub show_calls: usize,
}

#[cfg(test)]
impl Modal for RecordingModal {
    fn show(&mut self) {
        self.shown = true;
        self.show_calls += 1;
    }

    fn hide(&mut self) {
        self.shown = false;
    }

    fn is_shown(&self) -> bool {
        self.shown
    }

    fn mark_hidden(&mut self) {
        self.shown = false;
    }
}
