#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageErrorKind {
    /// A trigger was clicked but carried no usable `data-card-id`.
    MissingCardId,
    MissingElement,
    /// The element exists but is not the kind the flow writes to.
    WrongElement,
    /// The UI toolkit (Bootstrap) is not available or refused the call.
    Toolkit,
    NoDocument,
}

#[derive(Clone, Debug)]
pub struct PageError {
    pub kind: PageErrorKind,
    pub message: String,
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PageError {}

impl PageError {
    pub(crate) fn missing_card_id(trigger_class: &str) -> Self {
        Self {
            kind: PageErrorKind::MissingCardId,
            message: format!(".{trigger_class} trigger has no data-card-id"),
        }
    }

    pub(crate) fn missing_element(id: &str) -> Self {
        Self {
            kind: PageErrorKind::MissingElement,
            message: format!("element #{id} not found"),
        }
    }

    pub(crate) fn wrong_element(id: &str, expected: &str) -> Self {
        Self {
            kind: PageErrorKind::WrongElement,
            message: format!("element #{id} is not {expected}"),
        }
    }

    pub(crate) fn toolkit(ctx: &str, detail: impl std::fmt::Display) -> Self {
        Self {
            kind: PageErrorKind::Toolkit,
            message: format!("{ctx}: {detail}"),
        }
    }

    pub(crate) fn no_document() -> Self {
        Self {
            kind: PageErrorKind::NoDocument,
            message: "no window.document available".to_string(),
        }
    }
}

pub type PageResult<T> = Result<T, PageError>;
