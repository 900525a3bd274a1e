//! Blocking acknowledgments.
//!
//! An acknowledgment is a modal message the user must dismiss before the
//! canvas accepts input again. Copying the markup reports its outcome this
//! way, with success and failure kept visually distinct.

use crate::constants::COPY_SUCCESS_MESSAGE;
use crate::error::GridError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcknowledgmentKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgment {
    pub kind: AcknowledgmentKind,
    pub message: String,
}

impl Acknowledgment {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AcknowledgmentKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: AcknowledgmentKind::Failure,
            message: message.into(),
        }
    }

    /// Acknowledgment for the result of a clipboard export
    pub fn for_export(result: &Result<(), GridError>) -> Self {
        match result {
            Ok(()) => Self::success(COPY_SUCCESS_MESSAGE),
            Err(e) => Self::failure(format!("Copy failed: {}", e)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == AcknowledgmentKind::Success
    }

    /// Modal heading
    pub fn title(&self) -> &'static str {
        match self.kind {
            AcknowledgmentKind::Success => "Copied",
            AcknowledgmentKind::Failure => "Copy failed",
        }
    }
}
