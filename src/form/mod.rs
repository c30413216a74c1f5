//! Contact form: field rules, the phone mask, validation state and the
//! simulated submission.
//!
//! ```text
//! keystroke → ContactForm::input (phone re-masked)
//!   → validate_field / validate_form (presentation + submit control)
//!   → ContactForm::submit (re-validate → transport → reset)
//! ```

pub mod phone;
pub mod rules;
pub mod submission;
pub mod validator;

pub use phone::{format_phone, phone_digits};
pub use rules::{check_field, is_phone_required, ContactMethod, FieldId, FieldRule, FIELD_RULES};
pub use submission::{
    ContactSubmission, SimulatedTransport, SubmissionReceipt, SubmissionTransport, SubmitOutcome,
};
pub use validator::{ContactForm, FieldPresentation, SuccessNotice};
