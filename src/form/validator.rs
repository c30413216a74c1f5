//! Stateful contact form: field values plus what the page shows for them.
//!
//! Validity is never stored. Each pass recomputes it from the current values
//! and updates the per-field presentation (invalid marker, error text,
//! confirmation) and the submit control.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::phone::format_phone;
use super::rules::{is_phone_required, FieldId};
use crate::error::{Result, SiteError};

/// What the page displays for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPresentation {
    /// The field group carries the invalid marker.
    pub invalid: bool,
    /// The error text is displayed.
    pub error_visible: bool,
    /// The "confirmed" indicator is displayed.
    pub confirmed: bool,
    /// Error text bound to the field, set on the first validation.
    pub error_text: Option<String>,
}

impl FieldPresentation {
    /// Drop every visible state without touching the bound error text.
    pub fn clear(&mut self) {
        self.invalid = false;
        self.error_visible = false;
        self.confirmed = false;
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct FieldState {
    pub(crate) value: String,
    pub(crate) view: FieldPresentation,
}

/// Success modal shown after a submission went through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessNotice {
    pub submitted_at: String,
}

/// The contact form of one page session.
///
/// A field missing from the form models a page where that element is absent.
#[derive(Debug, Clone, Serialize)]
pub struct ContactForm {
    pub(crate) fields: BTreeMap<FieldId, FieldState>,
    /// Whether the submit control is enabled.
    pub submit_enabled: bool,
    /// Whether the spinner is shown (a submission is in flight).
    pub submitting: bool,
    /// Success modal, if shown.
    pub success: Option<SuccessNotice>,
    /// Blocking alert raised by a failed submission.
    pub alert: Option<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// A form with all seven fields present and empty.
    pub fn new() -> Self {
        Self::with_fields(FieldId::ALL)
    }

    /// A form carrying only the given fields.
    pub fn with_fields(fields: impl IntoIterator<Item = FieldId>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|field| (field, FieldState::default()))
                .collect(),
            submit_enabled: false,
            submitting: false,
            success: None,
            alert: None,
        }
    }

    /// A form whose present fields are exactly the keys of `values`.
    pub fn from_values(values: BTreeMap<FieldId, String>) -> Self {
        let mut form = Self::with_fields(values.keys().copied());
        for (field, value) in values {
            if let Some(state) = form.fields.get_mut(&field) {
                state.value = value;
            }
        }
        form
    }

    /// Whether the field's element exists.
    pub fn has_field(&self, field: FieldId) -> bool {
        self.fields.contains_key(&field)
    }

    /// Current raw value of a field.
    pub fn value(&self, field: FieldId) -> Option<&str> {
        self.fields.get(&field).map(|state| state.value.as_str())
    }

    /// Current presentation of a field.
    pub fn presentation(&self, field: FieldId) -> Option<&FieldPresentation> {
        self.fields.get(&field).map(|state| &state.view)
    }

    /// Snapshot of every present field's presentation.
    pub fn presentations(&self) -> BTreeMap<FieldId, FieldPresentation> {
        self.fields
            .iter()
            .map(|(field, state)| (*field, state.view.clone()))
            .collect()
    }

    /// Overwrite a field's raw value.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) -> Result<()> {
        let state = self.fields.get_mut(&field).ok_or_else(|| {
            log::error!("Element for field {} not found", field);
            SiteError::MissingElement(field.to_string())
        })?;
        state.value = value.into();
        Ok(())
    }

    /// Store typed input. The phone field is re-masked on every keystroke.
    pub fn input(&mut self, field: FieldId, raw: &str) -> Result<()> {
        let value = match field {
            FieldId::Phone => format_phone(raw),
            _ => raw.to_string(),
        };
        self.set_value(field, value)
    }

    /// Effective requirement of a field under the current form values.
    pub fn is_required(&self, field: FieldId) -> bool {
        match field {
            FieldId::Phone => is_phone_required(self.value(FieldId::ContactMethod).unwrap_or("")),
            _ => field.rule().required,
        }
    }

    /// Validate `value` against the field's rule and update its presentation.
    ///
    /// With `show_errors` unset a failing field is only cleared, never marked.
    pub fn validate_field(&mut self, field: FieldId, value: &str, show_errors: bool) -> bool {
        let required = self.is_required(field);
        let rule = field.rule();

        let Some(state) = self.fields.get_mut(&field) else {
            log::error!("Elements for field {} not found", field);
            return false;
        };

        let view = &mut state.view;
        view.confirmed = false;
        view.error_text = Some(rule.error.to_string());

        let valid = rule.is_valid(value, required);
        if valid {
            view.invalid = false;
            view.error_visible = false;
            view.confirmed = true;
        } else if show_errors {
            view.invalid = true;
            view.error_visible = true;
        } else {
            view.invalid = false;
            view.error_visible = false;
        }

        if !valid {
            log::debug!("Field {} failed validation", field);
        }
        valid
    }

    /// Validate every required or filled field and update the submit control.
    ///
    /// Optional empty fields are cleared without validation. A missing
    /// element fails the form only when its field is required.
    pub fn validate_form(&mut self, show_errors: bool) -> bool {
        let mut valid = true;

        for field in FieldId::ALL {
            let required = self.is_required(field);
            let Some(state) = self.fields.get_mut(&field) else {
                log::warn!("Form field \"{}\" not found", field);
                if required {
                    valid = false;
                }
                continue;
            };

            if required || !state.value.trim().is_empty() {
                let value = state.value.clone();
                if !self.validate_field(field, &value, show_errors) {
                    valid = false;
                }
            } else {
                state.view.clear();
            }
        }

        self.submit_enabled = valid;
        valid
    }

    /// Empty every present field and clear its visible state.
    pub fn reset(&mut self) {
        for state in self.fields.values_mut() {
            state.value.clear();
        }
        self.validate_form(false);
    }

    /// Hide the success modal. The submit control stays disabled until the
    /// next valid input.
    pub fn dismiss_success(&mut self) {
        self.success = None;
        self.submit_enabled = false;
    }
}
