//! Submission form state management
//!
//! A single-field submission machine shared by thread creation and post
//! creation: idle → submitting → success/error. It validates locally before
//! any network traffic and never touches the paired list itself; on success
//! the update layer resets the list so the re-fetched page 0 replaces the
//! accumulated items.

use crossterm::event::KeyEvent;

use crate::domain::forum::Collection;
use crate::domain::ui::CursorPosition;

/// Validation failure for an empty submission; never reaches the network
pub const EMPTY_SUBMISSION: &str = "Please enter some text.";
/// Shown for any failed write, regardless of the underlying cause
pub const SUBMIT_FAILED: &str = "Failed to submit. Please try again.";
const THREAD_CREATED: &str = "Thread created!";
const POST_CREATED: &str = "Posted!";

/// Complete state of the composer's text area
///
/// Encapsulates the mutable state that is preserved across TextArea
/// recreation in the stateless processing approach.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAreaState {
    /// The complete text content
    pub content: String,
    /// Current cursor position within the text
    pub cursor: CursorPosition,
}

impl TextAreaState {
    pub fn new(content: String, cursor: CursorPosition) -> Self {
        Self { content, cursor }
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// What a `submit()` call decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not composing, or a submission is already in flight
    Ignored,
    /// Empty after trimming; a validation error was set
    Invalid,
    /// A write request must be dispatched
    Request {
        collection: Collection,
        payload: String,
    },
}

/// Submission form state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposerState {
    pub textarea: TextAreaState,
    target: Option<Collection>,
    submitting: bool,
    error: Option<String>,
    success: Option<String>,
    /// Queue for stateless TextArea processing
    pub pending_input_keys: Vec<KeyEvent>,
}

impl ComposerState {
    pub fn is_composing(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&Collection> {
        self.target.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Open the form for a collection, starting from an empty field
    pub fn open(&mut self, collection: Collection) {
        if self.submitting {
            return;
        }
        self.target = Some(collection);
        self.textarea = TextAreaState::default();
        self.pending_input_keys.clear();
        self.error = None;
        self.success = None;
    }

    /// Close the form, discarding the field content
    ///
    /// Ignored while a submission is in flight; the target must survive
    /// until the result comes back.
    pub fn cancel(&mut self) {
        if self.submitting {
            return;
        }
        self.target = None;
        self.textarea = TextAreaState::default();
        self.pending_input_keys.clear();
        self.error = None;
    }

    /// Validate and hand out the write request
    ///
    /// An empty field (after trimming) fails fast with a validation error
    /// and no request; the field itself is left untouched.
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(collection) = self.target.clone() else {
            return SubmitOutcome::Ignored;
        };
        if self.submitting {
            return SubmitOutcome::Ignored;
        }

        let payload = self.textarea.content.trim();
        if payload.is_empty() {
            self.error = Some(EMPTY_SUBMISSION.to_string());
            return SubmitOutcome::Invalid;
        }

        self.submitting = true;
        self.error = None;
        self.success = None;
        SubmitOutcome::Request {
            collection,
            payload: payload.to_string(),
        }
    }

    /// Apply a successful write: clear the field, close the form, keep a
    /// success notice for the owning view. Returns the collection whose
    /// list must be reset and reloaded.
    pub fn submit_succeeded(&mut self) -> Option<Collection> {
        if !self.submitting {
            return None;
        }
        self.submitting = false;
        let collection = self.target.take()?;
        self.textarea = TextAreaState::default();
        self.pending_input_keys.clear();
        self.success = Some(
            if collection.is_threads() {
                THREAD_CREATED
            } else {
                POST_CREATED
            }
            .to_string(),
        );
        Some(collection)
    }

    /// Apply a failed write: generic message, field preserved so the user
    /// can retry without retyping
    pub fn submit_failed(&mut self) {
        if !self.submitting {
            return;
        }
        self.submitting = false;
        self.error = Some(SUBMIT_FAILED.to_string());
    }
}
