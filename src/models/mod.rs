use crate::error::{PageError, PageResult};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Card identifier as rendered by the server into `data-card-id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Rejects blank ids; anything else is kept exactly as rendered.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Title and content text read from a card at click time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSnapshot {
    pub title: String,
    pub content: String,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::IntoStaticStr, strum::EnumIter,
)]
pub enum TriggerKind {
    #[strum(serialize = "edit-btn")]
    Edit,
    #[strum(serialize = "delete-btn")]
    Delete,
}

impl TriggerKind {
    pub fn class_name(self) -> &'static str {
        self.into()
    }

    /// CSS selector matching any trigger, e.g. `.edit-btn, .delete-btn`.
    pub fn selector() -> String {
        TriggerKind::iter()
            .map(|k| format!(".{}", k.class_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// First kind whose class is present, in declaration order.
    pub fn from_classes(mut has_class: impl FnMut(&str) -> bool) -> Option<Self> {
        TriggerKind::iter().find(|k| has_class(k.class_name()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trigger {
    pub kind: TriggerKind,
    pub card_id: CardId,
}

impl Trigger {
    pub fn from_parts(kind: TriggerKind, raw_card_id: Option<&str>) -> PageResult<Self> {
        let card_id = raw_card_id
            .and_then(CardId::parse)
            .ok_or_else(|| PageError::missing_card_id(kind.class_name()))?;
        Ok(Self { kind, card_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageErrorKind;

    #[test]
    fn test_card_id_rejects_blank() {
        assert!(CardId::parse("").is_none());
        assert!(CardId::parse("   ").is_none());
    }

    #[test]
    fn test_card_id_kept_verbatim() {
        let id = CardId::parse("42").expect("valid");
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_card_id_serializes_as_plain_string() {
        let id = CardId::parse("42").expect("valid");
        let v = serde_json::to_value(&id).expect("should serialize");
        assert_eq!(v, serde_json::json!("42"));
    }

    #[test]
    fn test_trigger_selector() {
        assert_eq!(TriggerKind::selector(), ".edit-btn, .delete-btn");
    }

    #[test]
    fn test_trigger_kind_display_matches_class() {
        for kind in TriggerKind::iter() {
            assert_eq!(kind.to_string(), kind.class_name());
        }
    }

    #[test]
    fn test_trigger_kind_from_classes() {
        let classes = ["btn", "btn-sm", "delete-btn"];
        let kind = TriggerKind::from_classes(|c| classes.iter().any(|x| *x == c));
        assert_eq!(kind, Some(TriggerKind::Delete));

        let none = TriggerKind::from_classes(|c| c == "btn");
        assert!(none.is_none());
    }

    #[test]
    fn test_trigger_from_parts_missing_id() {
        let err = Trigger::from_parts(TriggerKind::Edit, None).unwrap_err();
        assert_eq!(err.kind, PageErrorKind::MissingCardId);
        assert_eq!(err.message, ".edit-btn trigger has no data-card-id");

        let err = Trigger::from_parts(TriggerKind::Delete, Some(" ")).unwrap_err();
        assert_eq!(err.kind, PageErrorKind::MissingCardId);
    }

    #[test]
    fn test_trigger_from_parts_ok() {
        let t = Trigger::from_parts(TriggerKind::Delete, Some("9")).expect("valid trigger");
        assert_eq!(t.kind, TriggerKind::Delete);
        assert_eq!(t.card_id.as_str(), "9");
    }
}
