use crate::binder::{CardBinder, CardPage};
use crate::config::PageConfig;
use crate::error::{PageError, PageResult};
use crate::modal::{BootstrapModal, Modal, DELETE_MODAL_ID, MODAL_HIDDEN_EVENT};
use crate::models::{Trigger, TriggerKind};
use crate::routes::CardRoutes;
use crate::state::FormState;
use leptos::ev;
use leptos::logging::{error, log};
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub(crate) const CARD_ID_ATTR: &str = "data-card-id";

pub(crate) const FORM_BODY_ID: &str = "form-body";
pub(crate) const FORM_ID: &str = "card-form";
pub(crate) const FORM_TITLE_ID: &str = "form-title";
pub(crate) const TITLE_INPUT_ID: &str = "id_title";
pub(crate) const CONTENT_INPUT_ID: &str = "id_content";
pub(crate) const SUBMIT_BUTTON_ID: &str = "submit-btn";
pub(crate) const DELETE_CONFIRM_ID: &str = "deleteConfirm";

pub(crate) const HIGHLIGHT_CLASS: &str = "focus";

/// The live document, looked up by element id on every access.
#[derive(Clone)]
pub struct DomPage {
    document: web_sys::Document,
}

impl DomPage {
    pub fn new() -> PageResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(PageError::no_document)?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    fn element(&self, id: &str) -> PageResult<web_sys::Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::missing_element(id))
    }

    fn html_element(&self, id: &str) -> PageResult<web_sys::HtmlElement> {
        self.element(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| PageError::wrong_element(id, "an HTML element"))
    }

    /// Accepts both `<input>` and `<textarea>` fields.
    fn field(&self, id: &str) -> PageResult<FormField> {
        let el = self.element(id)?;
        match el.dyn_into::<web_sys::HtmlInputElement>() {
            Ok(input) => Ok(FormField::Input(input)),
            Err(el) => el
                .dyn_into::<web_sys::HtmlTextAreaElement>()
                .map(FormField::TextArea)
                .map_err(|_| PageError::wrong_element(id, "an input or textarea")),
        }
    }

    fn set_attr(&self, id: &str, name: &str, value: &str) -> PageResult<()> {
        set_attr(&self.element(id)?, id, name, value)
    }
}

fn set_attr(el: &web_sys::Element, id: &str, name: &str, value: &str) -> PageResult<()> {
    el.set_attribute(name, value)
        .map_err(|e| PageError::toolkit(&format!("set {name} on #{id}"), format!("{e:?}")))
}

enum FormField {
    Input(web_sys::HtmlInputElement),
    TextArea(web_sys::HtmlTextAreaElement),
}

impl FormField {
    fn set_value(&self, value: &str) {
        match self {
            FormField::Input(input) => input.set_value(value),
            FormField::TextArea(area) => area.set_value(value),
        }
    }
}

impl CardPage for DomPage {
    fn read_text(&self, element_id: &str) -> PageResult<String> {
        Ok(self.html_element(element_id)?.inner_text())
    }

    fn render_form(&self, form: &FormState) -> PageResult<()> {
        // Resolve and type-check every target first so a bad page writes nothing.
        let form_body = self.element(FORM_BODY_ID)?;
        let form_title = self.html_element(FORM_TITLE_ID)?;
        let title_input = self.field(TITLE_INPUT_ID)?;
        let content_input = self.field(CONTENT_INPUT_ID)?;
        let submit = self.html_element(SUBMIT_BUTTON_ID)?;
        let form_el = self.element(FORM_ID)?;

        set_attr(&form_el, FORM_ID, "action", &form.action)?;
        title_input.set_value(&form.title);
        content_input.set_value(&form.content);
        form_title.set_inner_text(&form.title_label);
        submit.set_inner_text(&form.submit_label);

        let classes = form_body.class_list();
        let toggled = if form.highlighted {
            classes.add_1(HIGHLIGHT_CLASS)
        } else {
            classes.remove_1(HIGHLIGHT_CLASS)
        };
        toggled.map_err(|e| PageError::toolkit("form-body classList", format!("{e:?}")))
    }

    fn focus_title(&self) -> PageResult<()> {
        self.html_element(TITLE_INPUT_ID)?
            .focus()
            .map_err(|e| PageError::toolkit("focus #id_title", format!("{e:?}")))
    }

    fn set_confirm_target(&self, href: &str) -> PageResult<()> {
        self.set_attr(DELETE_CONFIRM_ID, "href", href)
    }
}

/// Finds the trigger a click belongs to.
///
/// `None` means the click did not land on (or inside) a trigger.
pub(crate) fn trigger_from_event(ev: &web_sys::Event) -> Option<PageResult<Trigger>> {
    let target = ev.target()?;
    let el = match target.dyn_into::<web_sys::Element>() {
        Ok(el) => el,
        // text node: start from its parent
        Err(target) => target.dyn_into::<web_sys::Node>().ok()?.parent_element()?,
    };
    let trigger_el = el.closest(&TriggerKind::selector()).ok().flatten()?;

    let classes = trigger_el.class_list();
    let kind = TriggerKind::from_classes(|c| classes.contains(c))?;
    let raw_id = trigger_el.get_attribute(CARD_ID_ATTR);
    Some(Trigger::from_parts(kind, raw_id.as_deref()))
}

pub(crate) type SharedBinder<P, M> = Rc<RefCell<CardBinder<P, M>>>;

/// Delegated listeners for one binder. Dropping this does not unbind; call `remove`.
pub struct CardPageHandle {
    click: WindowListenerHandle,
    modal_hidden: Option<(web_sys::Element, Closure<dyn FnMut(web_sys::Event)>)>,
}

impl CardPageHandle {
    pub fn remove(self) {
        self.click.remove();
        if let Some((el, cb)) = self.modal_hidden {
            let removed = el
                .remove_event_listener_with_callback(MODAL_HIDDEN_EVENT, cb.as_ref().unchecked_ref());
            if let Err(e) = removed {
                error!("could not unbind {MODAL_HIDDEN_EVENT}: {e:?}");
            }
        }
    }

    /// Keeps the listeners for the lifetime of the page.
    pub fn forget(self) {
        if let Some((_, cb)) = self.modal_hidden {
            cb.forget();
        }
    }
}

/// Installs one `click` listener on `window` that serves every present and
/// future trigger on the page.
pub(crate) fn install_click_listener<P, M>(binder: SharedBinder<P, M>) -> WindowListenerHandle
where
    P: CardPage + 'static,
    M: Modal + 'static,
{
    window_event_listener(ev::click, move |ev: web_sys::MouseEvent| {
        let Some(trigger) = trigger_from_event(&ev) else {
            return;
        };
        let result = trigger.and_then(|t| binder.borrow_mut().handle(&t));
        if let Err(e) = result {
            error!("card click ignored: {e}");
        }
    })
}

/// Tracks the toolkit closing the modal so the delete flow returns to idle.
pub(crate) fn install_modal_hidden_listener<P, M>(
    binder: SharedBinder<P, M>,
    modal_el: &web_sys::Element,
) -> PageResult<Closure<dyn FnMut(web_sys::Event)>>
where
    P: CardPage + 'static,
    M: Modal + 'static,
{
    let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        binder.borrow_mut().modal_hidden();
    }) as Box<dyn FnMut(web_sys::Event)>);

    modal_el
        .add_event_listener_with_callback(MODAL_HIDDEN_EVENT, cb.as_ref().unchecked_ref())
        .map_err(|e| PageError::toolkit("listen hidden.bs.modal", format!("{e:?}")))?;
    Ok(cb)
}

/// Shares the binder between the click and modal-hidden listeners.
pub(crate) fn bind_with<P, M>(
    binder: CardBinder<P, M>,
    modal_el: Option<&web_sys::Element>,
) -> PageResult<CardPageHandle>
where
    P: CardPage + 'static,
    M: Modal + 'static,
{
    let shared: SharedBinder<P, M> = Rc::new(RefCell::new(binder));
    let modal_hidden = match modal_el {
        Some(el) => Some((
            el.clone(),
            install_modal_hidden_listener(shared.clone(), el)?,
        )),
        None => None,
    };
    let click = install_click_listener(shared);
    Ok(CardPageHandle {
        click,
        modal_hidden,
    })
}

/// Wires the edit and delete flows onto the current document.
pub fn bind_card_page(config: &PageConfig) -> PageResult<CardPageHandle> {
    let page = DomPage::new()?;
    let modal = BootstrapModal::attach(page.document(), DELETE_MODAL_ID)?;
    let modal_el = page
        .document()
        .get_element_by_id(DELETE_MODAL_ID)
        .ok_or_else(|| PageError::missing_element(DELETE_MODAL_ID))?;

    let routes = CardRoutes::new(&config.base_path);
    log!("card page bound (base path {:?})", routes.base_path());
    bind_with(CardBinder::new(page, modal, routes), Some(&modal_el))
}
