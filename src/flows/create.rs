//! Link creation flow.
//!
//! Idle -> Validating -> Submitting -> Success | FieldError | ToastError.
//! Validation failures never reach the network. A conflict on the requested
//! code comes back as field-scoped feedback; everything else is a toast.
//! Failed attempts keep the entered values so the user can retry.

use std::sync::Arc;

use tracing::debug;

use crate::client::{CreateLinkRequest, LinkRegistry};
use crate::flows::collection::LinkCollection;
use crate::flows::{Notifier, Severity};
use crate::utils::validator::{validate_link_fields, Field, FieldErrorKind, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field errors attached, no request made
    Invalid,
    /// Link created, form cleared, collection reloaded
    Created,
    /// Requested code already taken; error on the code field only
    CodeTaken,
    /// Transport/server failure surfaced as a toast
    Failed,
    /// A submit was already in flight; nothing happened
    AlreadySubmitting,
}

pub struct CreateLinkFlow {
    registry: Arc<dyn LinkRegistry>,
    target_url: String,
    custom_code: String,
    errors: ValidationErrors,
    submitting: bool,
    open: bool,
}

impl CreateLinkFlow {
    pub fn new(registry: Arc<dyn LinkRegistry>) -> Self {
        CreateLinkFlow {
            registry,
            target_url: String::new(),
            custom_code: String::new(),
            errors: ValidationErrors::default(),
            submitting: false,
            open: false,
        }
    }

    /// Open the creation surface with a clean form.
    pub fn open(&mut self) {
        self.open = true;
        self.clear_form();
    }

    /// Close without submitting; entered values are discarded.
    pub fn cancel(&mut self) {
        if self.submitting {
            return;
        }
        self.open = false;
        self.clear_form();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    pub fn custom_code(&self) -> &str {
        &self.custom_code
    }

    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.errors.message(field)
    }

    /// Append a character to a field. Editing a field clears its error,
    /// mirroring per-keystroke feedback.
    pub fn type_char(&mut self, field: Field, c: char) {
        if self.submitting {
            return;
        }
        match field {
            Field::TargetUrl => self.target_url.push(c),
            Field::CustomCode => self.custom_code.push(c),
        }
        self.errors.clear(field);
    }

    pub fn backspace(&mut self, field: Field) {
        if self.submitting {
            return;
        }
        match field {
            Field::TargetUrl => {
                self.target_url.pop();
            }
            Field::CustomCode => {
                self.custom_code.pop();
            }
        }
        self.errors.clear(field);
    }

    /// Replace a field's content wholesale (CLI path).
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::TargetUrl => self.target_url = value.into(),
            Field::CustomCode => self.custom_code = value.into(),
        }
        self.errors.clear(field);
    }

    fn clear_form(&mut self) {
        self.target_url.clear();
        self.custom_code.clear();
        self.errors = ValidationErrors::default();
        self.submitting = false;
    }

    /// Validate and submit. On success the collection is reloaded exactly
    /// once, strictly after the create has completed.
    pub async fn submit(
        &mut self,
        collection: &mut LinkCollection,
        notifier: &dyn Notifier,
    ) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::AlreadySubmitting;
        }

        self.errors = validate_link_fields(&self.target_url, &self.custom_code);
        if !self.errors.is_empty() {
            return SubmitOutcome::Invalid;
        }

        self.submitting = true;
        let code = {
            let trimmed = self.custom_code.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        let request = CreateLinkRequest {
            target_url: self.target_url.trim().to_string(),
            code,
        };

        let result = self.registry.create(request).await;
        self.submitting = false;

        match result {
            Ok(link) => {
                debug!(code = %link.code, "link created");
                notifier.notify(Severity::Success, "Success", "Link created successfully");
                self.open = false;
                self.clear_form();
                collection.reload().await;
                SubmitOutcome::Created
            }
            Err(err) if err.is_conflict() => {
                self.errors.set(
                    Field::CustomCode,
                    FieldErrorKind::InvalidFormat,
                    "This code is already taken",
                );
                SubmitOutcome::CodeTaken
            }
            Err(err) => {
                notifier.notify(Severity::Error, "Error", err.message());
                SubmitOutcome::Failed
            }
        }
    }
}
