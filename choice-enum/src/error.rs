use thiserror::Error;

/// Reasons a choice enumeration cannot be derived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{group}: member name `{name}` is reserved for a derived collection")]
    ReservedName { group: String, name: String },

    #[error("{group}: only one default option allowed (both `{first}` and `{second}` are marked default)")]
    MultipleDefaults {
        group: String,
        first: String,
        second: String,
    },
}
