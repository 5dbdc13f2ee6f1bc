//! Contact form state machine.
//!
//! Pure logic, no DOM: the component feeds keystrokes and submit attempts in
//! and schedules timers for the two delayed transitions. Submission is a
//! local simulation: the draft is serialized for the log and discarded,
//! never transmitted.

use serde::Serialize;
use thiserror::Error;

/// How long the fake transport "takes".
pub const SUBMIT_DELAY_MILLIS: f64 = 1500.0;
/// How long the success banner stays up before the form returns to idle.
pub const SUCCESS_VISIBLE_MILLIS: f64 = 5000.0;
/// Message length cap, enforced by the textarea and mirrored in the counter.
pub const MESSAGE_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Structural `local@domain.tld` check, the same shape the classic
/// `\S+@\S+\.\S+` pattern accepts.
pub fn is_valid_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let has_space = |s: &str| s.chars().any(char::is_whitespace);
    !local.is_empty()
        && !host.is_empty()
        && !tld.is_empty()
        && !has_space(local)
        && !has_space(domain)
}

fn validate(draft: &FormDraft) -> FormErrors {
    let mut errors = FormErrors::default();
    if draft.name.trim().is_empty() {
        errors.name = Some(FieldError::NameRequired);
    }
    let email = draft.email.trim();
    if email.is_empty() {
        errors.email = Some(FieldError::EmailRequired);
    } else if !is_valid_email(email) {
        errors.email = Some(FieldError::EmailInvalid);
    }
    if draft.message.trim().is_empty() {
        errors.message = Some(FieldError::MessageRequired);
    }
    errors
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub draft: FormDraft,
    pub errors: FormErrors,
    pub status: FormStatus,
}

impl ContactForm {
    /// Record a keystroke. A field's error clears as soon as it is edited.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => {
                self.draft.name = value;
                self.errors.name = None;
            }
            Field::Email => {
                self.draft.email = value;
                self.errors.email = None;
            }
            Field::Message => {
                self.draft.message = value;
                self.errors.message = None;
            }
        }
    }

    /// Validate and, if clean, enter `Submitting`. Returns whether the
    /// caller should start the submission timer.
    pub fn try_submit(&mut self) -> bool {
        if self.status != FormStatus::Idle {
            return false;
        }
        self.errors = validate(&self.draft);
        if self.errors.is_empty() {
            self.status = FormStatus::Submitting;
            true
        } else {
            false
        }
    }

    /// The simulated transport finished: show success and drop the draft.
    pub fn finish_submit(&mut self) {
        if self.status == FormStatus::Submitting {
            self.status = FormStatus::Submitted;
            self.draft = FormDraft::default();
        }
    }

    /// Success banner timed out; back to an empty idle form.
    pub fn acknowledge(&mut self) {
        if self.status == FormStatus::Submitted {
            self.status = FormStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_count(errors: &FormErrors) -> usize {
        [
            errors.name.is_some(),
            errors.email.is_some(),
            errors.message.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    fn valid_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Ada Lovelace".to_string());
        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Message, "Hello there".to_string());
        form
    }

    #[test]
    fn empty_name_yields_exactly_one_error_and_no_timer() {
        let mut form = valid_form();
        form.set_field(Field::Name, String::new());

        assert!(!form.try_submit());
        assert_eq!(form.errors.name, Some(FieldError::NameRequired));
        assert_eq!(error_count(&form.errors), 1);
        assert_eq!(form.status, FormStatus::Idle);
    }

    #[test]
    fn email_pattern_check() {
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("@bar.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(is_valid_email("a@b.com"));

        let mut form = valid_form();
        form.set_field(Field::Email, "foo".to_string());
        assert!(!form.try_submit());
        assert_eq!(form.errors.email, Some(FieldError::EmailInvalid));
    }

    #[test]
    fn valid_submission_walks_the_full_cycle() {
        let mut form = valid_form();

        assert!(form.try_submit());
        assert_eq!(form.status, FormStatus::Submitting);
        // the draft survives until the simulated transport completes
        assert_eq!(form.draft.name, "Ada Lovelace");

        form.finish_submit();
        assert_eq!(form.status, FormStatus::Submitted);
        assert_eq!(form.draft.name, "");
        assert_eq!(form.draft.email, "");
        assert_eq!(form.draft.message, "");

        form.acknowledge();
        assert_eq!(form.status, FormStatus::Idle);
        assert_eq!(form.draft.message, "");
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = ContactForm::default();
        assert!(!form.try_submit());
        assert_eq!(error_count(&form.errors), 3);

        form.set_field(Field::Email, "ada@example.com".to_string());
        assert!(form.errors.email.is_none());
        assert_eq!(error_count(&form.errors), 2);
    }

    #[test]
    fn resubmit_is_ignored_while_in_flight() {
        let mut form = valid_form();
        assert!(form.try_submit());
        assert!(!form.try_submit());
        assert_eq!(form.status, FormStatus::Submitting);
    }

    #[test]
    fn stray_timer_events_are_harmless() {
        let mut form = valid_form();
        // finish without a submit in flight
        form.finish_submit();
        assert_eq!(form.status, FormStatus::Idle);
        assert_eq!(form.draft.name, "Ada Lovelace");

        form.acknowledge();
        assert_eq!(form.status, FormStatus::Idle);
    }
}
