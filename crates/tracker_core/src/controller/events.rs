//! UI events consumed by the orchestrator and error modeling for display.

use shared::error::{ErrorCode, ErrorNotice, TrackerError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    AddRequested,
    EditRequested { element_id: String },
    CommitEditRequested,
    DeleteRequested,
    CancelEditRequested,
    ClearAllRequested,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddRequested => "add",
            Self::EditRequested { .. } => "edit",
            Self::CommitEditRequested => "commit_edit",
            Self::DeleteRequested => "delete",
            Self::CancelEditRequested => "cancel_edit",
            Self::ClearAllRequested => "clear_all",
        }
    }

    fn context(&self) -> UiErrorContext {
        match self {
            Self::AddRequested => UiErrorContext::AddItem,
            Self::EditRequested { .. } => UiErrorContext::BeginEdit,
            Self::CommitEditRequested => UiErrorContext::CommitEdit,
            Self::DeleteRequested => UiErrorContext::DeleteItem,
            Self::CancelEditRequested | Self::ClearAllRequested => UiErrorContext::General,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    AddItem,
    BeginEdit,
    CommitEdit,
    DeleteItem,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    context: UiErrorContext,
    source: TrackerError,
}

impl UiError {
    pub fn for_event(event: &UiEvent, source: TrackerError) -> Self {
        Self {
            context: event.context(),
            source,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.source.code() == ErrorCode::Validation
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn error(&self) -> &TrackerError {
        &self.source
    }

    pub fn into_error(self) -> TrackerError {
        self.source
    }

    pub fn notice(&self) -> ErrorNotice {
        ErrorNotice::from(&self.source)
    }
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let action = match self.context {
            UiErrorContext::AddItem => "add item",
            UiErrorContext::BeginEdit => "edit item",
            UiErrorContext::CommitEdit => "update item",
            UiErrorContext::DeleteItem => "delete item",
            UiErrorContext::General => "tracker",
        };
        write!(f, "{action}: {}", self.source)
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
