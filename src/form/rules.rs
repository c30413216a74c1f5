//! Field identifiers and the per-field rule table.
//!
//! Every rule carries descriptive metadata (required flag, lengths, pattern,
//! expected value) and a predicate. The predicate is the only thing that
//! decides validity; the metadata documents what it checks.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::phone::phone_digits;
use crate::error::SiteError;

/// The value the captcha field must match after trimming and uppercasing.
pub const CAPTCHA_TOKEN: &str = "WISDOM";

/// Maximum accepted length of an e-mail address, in characters.
pub const MAX_EMAIL_LENGTH: usize = 100;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE_PATTERN: &str = r"^\d{10,11}$";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).unwrap());

/// The seven fields of the contact form, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    Company,
    Email,
    Phone,
    ContactMethod,
    Message,
    Captcha,
}

impl FieldId {
    /// All fields in the order the form validates them.
    pub const ALL: [FieldId; 7] = [
        FieldId::Name,
        FieldId::Company,
        FieldId::Email,
        FieldId::Phone,
        FieldId::ContactMethod,
        FieldId::Message,
        FieldId::Captcha,
    ];

    /// The identifier used on the page and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Company => "company",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::ContactMethod => "contactMethod",
            FieldId::Message => "message",
            FieldId::Captcha => "captcha",
        }
    }

    /// The rule governing this field.
    pub fn rule(&self) -> &'static FieldRule {
        &FIELD_RULES[*self as usize]
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| SiteError::UnknownField(s.to_string()))
    }
}

/// Preferred contact channel selected in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Phone,
    Both,
}

impl ContactMethod {
    /// Parse the raw select value. Anything outside the enumerated set is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "email" => Some(ContactMethod::Email),
            "phone" => Some(ContactMethod::Phone),
            "both" => Some(ContactMethod::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
            ContactMethod::Both => "both",
        }
    }
}

/// Whether the phone field is mandatory for the given contact method value.
pub fn is_phone_required(contact_method: &str) -> bool {
    matches!(
        ContactMethod::parse(contact_method),
        Some(ContactMethod::Phone | ContactMethod::Both)
    )
}

/// Validation rule for a single form field.
#[derive(Debug)]
pub struct FieldRule {
    pub id: FieldId,
    /// Static requirement. The phone rule is `false` here; its effective
    /// requirement comes from [`is_phone_required`].
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static str>,
    pub expected_value: Option<&'static str>,
    /// Error text shown under the field.
    pub error: &'static str,
    pub predicate: fn(&str) -> bool,
}

impl FieldRule {
    /// Apply the rule: empty-but-required fails, otherwise the predicate decides.
    pub fn is_valid(&self, value: &str, required: bool) -> bool {
        if required && value.trim().is_empty() {
            return false;
        }
        (self.predicate)(value)
    }
}

/// The rule table, indexed by `FieldId as usize`.
pub static FIELD_RULES: [FieldRule; 7] = [
    FieldRule {
        id: FieldId::Name,
        required: true,
        min_length: Some(2),
        max_length: None,
        pattern: None,
        expected_value: None,
        error: "Por favor, insira seu nome completo (mínimo 2 caracteres).",
        predicate: valid_name,
    },
    FieldRule {
        id: FieldId::Company,
        required: false,
        min_length: Some(2),
        max_length: None,
        pattern: None,
        expected_value: None,
        error: "Por favor, insira o nome da empresa (mínimo 2 caracteres).",
        predicate: valid_company,
    },
    FieldRule {
        id: FieldId::Email,
        required: true,
        min_length: None,
        max_length: Some(MAX_EMAIL_LENGTH),
        pattern: Some(EMAIL_PATTERN),
        expected_value: None,
        error: "Por favor, insira um e-mail válido.",
        predicate: valid_email,
    },
    FieldRule {
        id: FieldId::Phone,
        required: false,
        min_length: None,
        max_length: None,
        pattern: Some(PHONE_PATTERN),
        expected_value: None,
        error: "Por favor, insira um telefone válido com 10 ou 11 dígitos (ex: 21998408406 ou (21) 99840-8406).",
        predicate: valid_phone,
    },
    FieldRule {
        id: FieldId::ContactMethod,
        required: true,
        min_length: None,
        max_length: None,
        pattern: None,
        expected_value: None,
        error: "Por favor, selecione um método de contato.",
        predicate: valid_contact_method,
    },
    FieldRule {
        id: FieldId::Message,
        required: true,
        min_length: Some(10),
        max_length: Some(500),
        pattern: None,
        expected_value: None,
        error: "Por favor, insira uma mensagem entre 10 e 500 caracteres.",
        predicate: valid_message,
    },
    FieldRule {
        id: FieldId::Captcha,
        required: true,
        min_length: None,
        max_length: None,
        pattern: None,
        expected_value: Some(CAPTCHA_TOKEN),
        error: "Por favor, insira o código correto (\"WISDOM\").",
        predicate: valid_captcha,
    },
];

/// Validate a single value without any presentation state.
///
/// `contact_method` only matters for the phone field.
pub fn check_field(field: FieldId, value: &str, contact_method: &str) -> bool {
    let rule = field.rule();
    let required = match field {
        FieldId::Phone => is_phone_required(contact_method),
        _ => rule.required,
    };
    rule.is_valid(value, required)
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

// Splits on single spaces, so "Ana  Silva" yields three pieces.
fn valid_name(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.split(' ').count() >= 2 && char_len(trimmed) >= 2
}

fn valid_company(value: &str) -> bool {
    value.is_empty() || char_len(value.trim()) >= 2
}

fn valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value) && char_len(value) <= MAX_EMAIL_LENGTH
}

fn valid_phone(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    matches!(phone_digits(value).len(), 10 | 11)
}

fn valid_contact_method(value: &str) -> bool {
    ContactMethod::parse(value).is_some()
}

fn valid_message(value: &str) -> bool {
    (10..=500).contains(&char_len(value.trim()))
}

fn valid_captcha(value: &str) -> bool {
    value.trim().to_uppercase() == CAPTCHA_TOKEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_is_indexed_by_field() {
        for field in FieldId::ALL {
            assert_eq!(field.rule().id, field);
        }
    }

    #[test]
    fn test_field_id_round_trips_through_str() {
        assert_eq!("contactMethod".parse::<FieldId>().unwrap(), FieldId::ContactMethod);
        assert_eq!(FieldId::ContactMethod.to_string(), "contactMethod");
        assert!(matches!(
            "contact_method".parse::<FieldId>(),
            Err(SiteError::UnknownField(_))
        ));
    }

    #[test]
    fn test_empty_value_follows_required_flag() {
        for field in FieldId::ALL {
            if field == FieldId::Phone {
                continue;
            }
            let expected = !field.rule().required;
            assert_eq!(check_field(field, "", "email"), expected, "field {}", field);
        }
    }

    #[test]
    fn test_empty_phone_depends_on_contact_method() {
        assert!(check_field(FieldId::Phone, "", "email"));
        assert!(check_field(FieldId::Phone, "", ""));
        assert!(!check_field(FieldId::Phone, "", "phone"));
        assert!(!check_field(FieldId::Phone, "", "both"));
    }

    #[test]
    fn test_name_needs_two_tokens() {
        assert!(!check_field(FieldId::Name, "Ana", ""));
        assert!(check_field(FieldId::Name, "Ana Silva", ""));
        assert!(check_field(FieldId::Name, "  Ana Silva  ", ""));
        assert!(!check_field(FieldId::Name, "   ", ""));
    }

    #[test]
    fn test_company_optional_but_min_length() {
        assert!(check_field(FieldId::Company, "", ""));
        assert!(!check_field(FieldId::Company, "A", ""));
        assert!(check_field(FieldId::Company, "ACME", ""));
    }

    #[test]
    fn test_email_shape_and_length() {
        assert!(check_field(FieldId::Email, "a@b.co", ""));
        assert!(!check_field(FieldId::Email, "a@b", ""));
        assert!(!check_field(FieldId::Email, "a b@c.de", ""));

        let local = "a".repeat(MAX_EMAIL_LENGTH + 1 - "@b.co".len());
        let too_long = format!("{}@b.co", local);
        assert_eq!(too_long.len(), 101);
        assert!(!check_field(FieldId::Email, &too_long, ""));

        let at_limit = format!("{}@b.co", &local[1..]);
        assert!(check_field(FieldId::Email, &at_limit, ""));
    }

    #[test]
    fn test_phone_digit_count() {
        assert!(check_field(FieldId::Phone, "21998408406", "phone"));
        assert!(check_field(FieldId::Phone, "(21) 99840-8406", "phone"));
        assert!(check_field(FieldId::Phone, "(21) 3456-7890", "both"));
        assert!(!check_field(FieldId::Phone, "219984084", "phone"));
        assert!(!check_field(FieldId::Phone, "219984084066", "email"));
    }

    #[test]
    fn test_contact_method_enumeration() {
        assert!(check_field(FieldId::ContactMethod, "email", ""));
        assert!(check_field(FieldId::ContactMethod, "both", ""));
        assert!(!check_field(FieldId::ContactMethod, "fax", ""));
        assert!(!check_field(FieldId::ContactMethod, "Email", ""));
    }

    #[test]
    fn test_message_length_bounds() {
        assert!(!check_field(FieldId::Message, "curta", ""));
        assert!(check_field(FieldId::Message, &"x".repeat(10), ""));
        assert!(check_field(FieldId::Message, &"x".repeat(500), ""));
        assert!(!check_field(FieldId::Message, &"x".repeat(501), ""));
        assert!(!check_field(FieldId::Message, "    nove  ", ""));
    }

    #[test]
    fn test_captcha_is_case_and_space_insensitive() {
        assert!(check_field(FieldId::Captcha, " wisdom ", ""));
        assert!(check_field(FieldId::Captcha, "WISDOM", ""));
        assert!(!check_field(FieldId::Captcha, "Wisdom2", ""));
    }

    #[test]
    fn test_phone_requirement_is_derived() {
        assert!(!FieldId::Phone.rule().required);
        assert!(is_phone_required("phone"));
        assert!(is_phone_required("both"));
        assert!(!is_phone_required("email"));
        assert!(!is_phone_required("whatsapp"));
    }
}
