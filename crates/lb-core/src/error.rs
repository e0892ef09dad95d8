//! Error types for drawing and editing tables.

/// Why a draw could not produce a result.
///
/// Every variant is recoverable; the collection is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    /// The table at the current hop has no entries or does not exist.
    #[error("table \"{0}\" is empty or does not exist")]
    EmptyOrMissingTable(String),

    /// A reference points back to a table already on the current path.
    #[error("reference loop detected at table \"{0}\"")]
    CycleDetected(String),

    /// A reference targets a table absent from the collection.
    #[error("referenced table \"{0}\" not found")]
    TableNotFound(String),

    /// The depth bound ran out before a plain entry was reached.
    #[error("maximum reference depth reached: possible loop or overly complex tables")]
    MaxDepthExceeded,
}

impl DrawError {
    /// The table this failure names, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::EmptyOrMissingTable(name)
            | Self::CycleDetected(name)
            | Self::TableNotFound(name) => Some(name),
            Self::MaxDepthExceeded => None,
        }
    }
}

/// A table's entries reference a table that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The first reference whose target is neither the table itself nor an
    /// existing table.
    #[error("referenced table \"{missing_target}\" does not exist")]
    InvalidReference {
        /// The unresolved target name.
        missing_target: String,
    },
}

/// Alias for `Result<T, CollectionError>`.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Errors from create/edit/delete operations on a collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// The table name is empty after trimming.
    #[error("table name is required")]
    EmptyName,

    /// A table with the same name already exists.
    #[error("table already exists: \"{0}\"")]
    DuplicateName(String),

    /// The named table is not in the collection.
    #[error("table not found: \"{0}\"")]
    UnknownTable(String),

    /// The new entries reference a missing table.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_names_the_table() {
        assert_eq!(DrawError::CycleDetected("X".into()).detail(), Some("X"));
        assert_eq!(DrawError::TableNotFound("Ghost".into()).detail(), Some("Ghost"));
        assert_eq!(DrawError::MaxDepthExceeded.detail(), None);
    }

    #[test]
    fn messages() {
        assert_eq!(
            DrawError::EmptyOrMissingTable("Loot".into()).to_string(),
            "table \"Loot\" is empty or does not exist"
        );
        let err = CollectionError::from(ValidationError::InvalidReference {
            missing_target: "Ghost".into(),
        });
        assert_eq!(err.to_string(), "referenced table \"Ghost\" does not exist");
    }
}
