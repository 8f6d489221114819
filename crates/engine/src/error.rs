use thiserror::Error;

/// Every way building or driving the navigation view-model can fail.
///
/// None of these ever cross the host boundary; the host adapter reports them
/// and keeps the last good view-model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Two pages in one input share an id.
    #[error("duplicate page id '{id}'")]
    DuplicateId { id: String },
    /// A child reference names a page that was never declared.
    #[error("page '{parent_id}' references unknown child '{child_id}'")]
    DanglingChild { parent_id: String, child_id: String },
    /// A page is claimed as a child more than once.
    #[error("page '{child_id}' is a child of both '{first_parent_id}' and '{second_parent_id}'")]
    SharedChild {
        child_id: String,
        first_parent_id: String,
        second_parent_id: String,
    },
    /// Child references loop back on themselves, leaving pages unreachable.
    #[error("page '{id}' is part of a reference cycle")]
    CyclicReference { id: String },
    /// The id is not present in the current tree.
    #[error("unknown page '{id}'")]
    UnknownPage { id: String },
    /// Host data could not be coerced into page records.
    #[error("host data has an unexpected shape: {reason}")]
    HostDataShape { reason: String },
}

impl NavigationError {
    /// Stable short name used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateId { .. } => "duplicate_id",
            Self::DanglingChild { .. } => "dangling_child",
            Self::SharedChild { .. } => "shared_child",
            Self::CyclicReference { .. } => "cyclic_reference",
            Self::UnknownPage { .. } => "unknown_page",
            Self::HostDataShape { .. } => "host_data_shape",
        }
    }

    /// Whether the error was raised while validating a page tree.
    pub fn is_tree_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateId { .. } | Self::DanglingChild { .. } | Self::SharedChild { .. } | Self::CyclicReference { .. }
        )
    }
}
