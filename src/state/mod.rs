use crate::models::{CardId, CardSnapshot};
use crate::routes::CardRoutes;

pub(crate) const CREATE_FORM_TITLE: &str = "Create Card";
pub(crate) const CREATE_SUBMIT_LABEL: &str = "Submit";
pub(crate) const EDIT_FORM_TITLE: &str = "Edit Card";
pub(crate) const UPDATE_SUBMIT_LABEL: &str = "Update Card";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Armed,
}

/// What the shared card form currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub title_label: String,
    pub title: String,
    pub content: String,
    pub action: String,
    pub submit_label: String,
    /// Whether the container carries the `focus` highlight class.
    pub highlighted: bool,
}

impl FormState {
    /// Create mode, as the server renders the form on page load.
    pub fn create(routes: &CardRoutes) -> Self {
        Self {
            title_label: CREATE_FORM_TITLE.to_string(),
            title: String::new(),
            content: String::new(),
            action: routes.card_list(),
            submit_label: CREATE_SUBMIT_LABEL.to_string(),
            highlighted: false,
        }
    }

    fn bind_card(&mut self, routes: &CardRoutes, id: &CardId, snapshot: CardSnapshot) {
        self.title_label = EDIT_FORM_TITLE.to_string();
        self.title = snapshot.title;
        self.content = snapshot.content;
        self.action = routes.edit_card(id);
        self.submit_label = UPDATE_SUBMIT_LABEL.to_string();
        self.highlighted = true;
    }
}

/// The edit flow: one reusable form, bound to at most one card.
#[derive(Clone, Debug)]
pub struct EditFlow {
    form: FormState,
    card: Option<CardId>,
}

impl EditFlow {
    pub fn new(routes: &CardRoutes) -> Self {
        Self {
            form: FormState::create(routes),
            card: None,
        }
    }

    /// Rebinds the form to `id`. Previous card values are overwritten, never merged.
    pub fn arm(&mut self, routes: &CardRoutes, id: &CardId, snapshot: CardSnapshot) -> &FormState {
        self.form.bind_card(routes, id, snapshot);
        self.card = Some(id.clone());
        &self.form
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn card(&self) -> Option<&CardId> {
        self.card.as_ref()
    }

    pub fn state(&self) -> FlowState {
        if self.card.is_some() {
            FlowState::Armed
        } else {
            FlowState::Idle
        }
    }
}

/// The delete flow: the confirm link target plus the card awaiting confirmation.
#[derive(Clone, Debug, Default)]
pub struct DeleteFlow {
    target: Option<String>,
    card: Option<CardId>,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, routes: &CardRoutes, id: &CardId) -> &str {
        self.card = Some(id.clone());
        self.target.insert(routes.delete_card(id)).as_str()
    }

    /// Modal closed without navigating. The stale target stays until the next arm.
    pub fn disarm(&mut self) {
        self.card = None;
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn card(&self) -> Option<&CardId> {
        self.card.as_ref()
    }

    pub fn state(&self) -> FlowState {
        if self.card.is_some() {
            FlowState::Armed
        } else {
            FlowState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> CardId {
        CardId::parse(raw).expect("valid card id")
    }

    fn snap(title: &str, content: &str) -> CardSnapshot {
        CardSnapshot {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_form_starts_in_create_mode() {
        let routes = CardRoutes::default();
        let flow = EditFlow::new(&routes);
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(flow.form().title_label, "Create Card");
        assert_eq!(flow.form().submit_label, "Submit");
        assert_eq!(flow.form().action, "/my-cards/");
        assert!(!flow.form().highlighted);
    }

    #[test]
    fn test_arm_binds_card_into_form() {
        let routes = CardRoutes::default();
        let mut flow = EditFlow::new(&routes);
        let form = flow.arm(&routes, &id("42"), snap("Groceries", "Milk, eggs")).clone();

        assert_eq!(form.title, "Groceries");
        assert_eq!(form.content, "Milk, eggs");
        assert_eq!(form.title_label, "Edit Card");
        assert_eq!(form.submit_label, "Update Card");
        assert_eq!(form.action, "/my-cards/edit_card/42/");
        assert!(form.highlighted);
        assert_eq!(flow.state(), FlowState::Armed);
        assert_eq!(flow.card(), Some(&id("42")));
    }

    #[test]
    fn test_second_arm_overwrites_first() {
        let routes = CardRoutes::default();
        let mut flow = EditFlow::new(&routes);
        flow.arm(&routes, &id("1"), snap("First", "one"));
        flow.arm(&routes, &id("2"), snap("Second", ""));

        assert_eq!(flow.form().title, "Second");
        assert_eq!(flow.form().content, "");
        assert_eq!(flow.form().action, "/my-cards/edit_card/2/");
        assert_eq!(flow.card(), Some(&id("2")));
    }

    #[test]
    fn test_delete_flow_arm_and_disarm() {
        let routes = CardRoutes::default();
        let mut flow = DeleteFlow::new();
        assert_eq!(flow.state(), FlowState::Idle);
        assert!(flow.target().is_none());

        assert_eq!(flow.arm(&routes, &id("5")), "/my-cards/delete-card/5/");
        assert_eq!(flow.state(), FlowState::Armed);

        flow.disarm();
        assert_eq!(flow.state(), FlowState::Idle);
        assert!(flow.card().is_none());
        // stale but inert
        assert_eq!(flow.target(), Some("/my-cards/delete-card/5/"));

        flow.arm(&routes, &id("6"));
        assert_eq!(flow.target(), Some("/my-cards/delete-card/6/"));
    }
}
