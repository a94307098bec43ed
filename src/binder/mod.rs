use crate::error::PageResult;
use crate::modal::Modal;
use crate::models::{CardId, CardSnapshot, Trigger, TriggerKind};
use crate::routes::{card_content_element_id, card_title_element_id, CardRoutes};
use crate::state::{DeleteFlow, EditFlow, FormState};

/// The parts of the card page the binder reads from and writes to.
pub trait CardPage {
    /// Displayed text of the element with this id.
    fn read_text(&self, element_id: &str) -> PageResult<String>;
    fn render_form(&self, form: &FormState) -> PageResult<()>;
    fn focus_title(&self) -> PageResult<()>;
    fn set_confirm_target(&self, href: &str) -> PageResult<()>;
}

/// Owns both flows and applies them to the page.
pub struct CardBinder<P, M> {
    page: P,
    modal: M,
    routes: CardRoutes,
    edit: EditFlow,
    delete: DeleteFlow,
}

impl<P: CardPage, M: Modal> CardBinder<P, M> {
    pub fn new(page: P, modal: M, routes: CardRoutes) -> Self {
        let edit = EditFlow::new(&routes);
        Self {
            page,
            modal,
            routes,
            edit,
            delete: DeleteFlow::new(),
        }
    }

    pub fn handle(&mut self, trigger: &Trigger) -> PageResult<()> {
        match trigger.kind {
            TriggerKind::Edit => self.edit_card(&trigger.card_id),
            TriggerKind::Delete => self.delete_card(&trigger.card_id),
        }
    }

    /// Loads the card into the shared form and switches it to update mode.
    ///
    /// The card is read and the form rendered before the edit flow changes,
    /// so any failure leaves both the page and the flow as they were.
    pub fn edit_card(&mut self, id: &CardId) -> PageResult<()> {
        let snapshot = CardSnapshot {
            title: self.page.read_text(&card_title_element_id(id))?,
            content: self.page.read_text(&card_content_element_id(id))?,
        };
        let mut next = self.edit.clone();
        self.page.render_form(next.arm(&self.routes, id, snapshot))?;
        self.edit = next;
        self.page.focus_title()
    }

    pub fn delete_card(&mut self, id: &CardId) -> PageResult<()> {
        let href = self.routes.delete_card(id);
        self.page.set_confirm_target(&href)?;
        self.delete.arm(&self.routes, id);
        self.modal.show();
        Ok(())
    }

    pub fn modal_hidden(&mut self) {
        self.modal.mark_hidden();
        self.delete.disarm();
    }

    pub fn edit_flow(&self) -> &EditFlow {
        &self.edit
    }

    pub fn delete_flow(&self) -> &DeleteFlow {
        &self.delete
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn modal(&self) -> &M {
        &self.modal
    }

    pub fn routes(&self) -> &CardRoutes {
        &self.routes
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use crate::error::PageError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Page double: a map of element texts plus a record of every write.
    #[derive(Default)]
    pub(crate) struct FakePage {
        pub texts: HashMap<String, String>,
        pub rendered: RefCell<Option<FormState>>,
        pub render_calls: RefCell<usize>,
        pub title_focused: RefCell<bool>,
        pub confirm_href: RefCell<Option<String>>,
        /// Returned from `render_form` instead of writing.
        pub render_error: Option<PageError>,
        /// Returned from `set_confirm_target` instead of writing.
        pub confirm_error: Option<PageError>,
    }

    impl FakePage {
        pub fn with_card(mut self, id: &str, title: &str, content: &str) -> Self {
            self.texts
                .insert(format!("card-title{id}"), title.to_string());
            self.texts
                .insert(format!("card-content{id}"), content.to_string());
            self
        }
    }

    impl CardPage for FakePage {
        fn read_text(&self, element_id: &str) -> PageResult<String> {
            self.texts
                .get(element_id)
                .cloned()
                .ok_or_else(|| PageError::missing_element(element_id))
        }

        fn render_form(&self, form: &FormState) -> PageResult<()> {
            if let Some(e) = &self.render_error {
                return Err(e.clone());
            }
            *self.rendered.borrow_mut() = Some(form.clone());
            *self.render_calls.borrow_mut() += 1;
            Ok(())
        }

        fn focus_title(&self) -> PageResult<()> {
            *self.title_focused.borrow_mut() = true;
            Ok(())
        }

        fn set_confirm_target(&self, href: &str) -> PageResult<()> {
            if let Some(e) = &self.confirm_error {
                return Err(e.clone());
            }
            *self.confirm_href.borrow_mut() = Some(href.to_string());
            Ok(())
        }
    }
}
