use crate::models::CardId;

pub(crate) const DEFAULT_BASE_PATH: &str = "/my-cards";

/// Server-side URL templates for the card list page.
///
/// The card id is substituted verbatim; the server owns the id format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRoutes {
    base: String,
}

impl CardRoutes {
    pub fn new(base_path: &str) -> Self {
        Self {
            base: normalize_base_path(base_path),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base
    }

    /// Where the create form posts to when no card is being edited.
    pub fn card_list(&self) -> String {
        format!("{}/", self.base)
    }

    pub fn edit_card(&self, id: &CardId) -> String {
        format!("{}/edit_card/{}/", self.base, id)
    }

    pub fn delete_card(&self, id: &CardId) -> String {
        format!("{}/delete-card/{}/", self.base, id)
    }
}

impl Default for CardRoutes {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}

/// "/x", "x", "x/" and "/x//" all become "/x"; "" and "/" become "".
pub(crate) fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    format!("/{trimmed}")
}

pub(crate) fn card_title_element_id(id: &CardId) -> String {
    format!("card-title{id}")
}

pub(crate) fn card_content_element_id(id: &CardId) -> String {
    format!("card-content{id}")
}
