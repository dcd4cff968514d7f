//! Card style declarations: CSS-like property/value overrides.

/// The value of a style declaration.
///
/// Stored as two nullable columns with a CHECK constraint; in Rust the tagged
/// variant makes the dual-set and dual-null states unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    Flag(bool),
}

impl StyleValue {
    /// Reassembles a value from the two storage columns.
    ///
    /// Returns `None` when the row violates the one-value invariant (both
    /// columns set or both null), which the CHECK constraint should prevent.
    pub fn from_columns(value: Option<String>, bool_value: Option<bool>) -> Option<Self> {
        match (value, bool_value) {
            (Some(v), None) => Some(Self::Text(v)),
            (None, Some(b)) => Some(Self::Flag(b)),
            _ => None,
        }
    }

    /// Splits the value into its storage columns.
    pub fn into_columns(self) -> (Option<String>, Option<bool>) {
        match self {
            Self::Text(v) => (Some(v), None),
            Self::Flag(b) => (None, Some(b)),
        }
    }
}

/// A single style declaration attached to a card.
///
/// `property` is unique per card.
#[derive(Debug, Clone)]
pub struct StyleDeclaration {
    pub id: i64,
    pub card_id: i64,
    pub property: String,
    pub value: StyleValue,
}

/// Input for creating or upserting a style declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStyle {
    pub property: String,
    pub value: StyleValue,
}
