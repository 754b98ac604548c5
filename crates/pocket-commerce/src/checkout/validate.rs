//! Checkout form validation.

use crate::checkout::{CheckoutForm, DeliveryOption, Field};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Minimum characters in a full name.
pub const MIN_NAME_LEN: usize = 2;

/// Field errors keyed by field; empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields with errors, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

fn card_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:[0-9]{4}[\s-]?){3}[0-9]{4}$").unwrap())
}

fn expiry_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").unwrap())
}

fn cvv_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{3,4}$").unwrap())
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .unwrap()
    })
}

/// Whether `email` is a syntactically valid address.
///
/// The local part may not start with a dot or contain `..`.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && email_re().is_match(email)
}

/// Sixteen digits in groups of four, optionally split by single spaces or hyphens.
pub fn is_valid_card_number(card: &str) -> bool {
    card_number_re().is_match(card)
}

/// `MM/YY` with a month from 01 to 12.
pub fn is_valid_expiry(expiry: &str) -> bool {
    expiry_re().is_match(expiry)
}

/// Three or four digits.
pub fn is_valid_cvv(cvv: &str) -> bool {
    cvv_re().is_match(cvv)
}

/// Validate the whole form.
pub fn validate(form: &CheckoutForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.full_name.chars().count() < MIN_NAME_LEN {
        errors.insert(Field::FullName, "Full name must be at least 2 characters.");
    }
    if !is_valid_email(&form.email) {
        errors.insert(Field::Email, "Please enter a valid email address.");
    }

    match form.delivery_option {
        None => errors.insert(
            Field::DeliveryOption,
            "Please select a delivery or pickup option.",
        ),
        Some(DeliveryOption::Delivery) => {
            for field in Field::DELIVERY_ADDRESS {
                if form.get(field).trim().is_empty() {
                    errors.insert(field, delivery_required_message(field));
                }
            }
        }
        Some(DeliveryOption::Pickup) => {}
    }

    if !is_valid_card_number(&form.card_number) {
        errors.insert(Field::CardNumber, "Enter a valid 16-digit card number.");
    }
    if !is_valid_expiry(&form.expiry_date) {
        errors.insert(Field::ExpiryDate, "Enter expiry as MM/YY.");
    }
    if !is_valid_cvv(&form.cvv) {
        errors.insert(Field::Cvv, "Enter a valid 3 or 4 digit CVV.");
    }
    if !form.terms {
        errors.insert(Field::Terms, "You must accept the terms and conditions.");
    }

    errors
}

fn delivery_required_message(field: Field) -> &'static str {
    match field {
        Field::Address => "Address is required for delivery.",
        Field::City => "City is required for delivery.",
        Field::PostalCode => "Postal code is required for delivery.",
        Field::Country => "Country is required for delivery.",
        _ => "This field is required for delivery.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pickup_form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Nobita Nobi".to_string(),
            email: "nobita@example.com".to_string(),
            delivery_option: Some(DeliveryOption::Pickup),
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_date: "08/29".to_string(),
            cvv: "123".to_string(),
            terms: true,
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn test_valid_pickup_form() {
        assert!(validate(&pickup_form()).is_empty());
    }

    #[test]
    fn test_blank_form_errors() {
        let errors = validate(&CheckoutForm::default());
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                Field::FullName,
                Field::Email,
                Field::DeliveryOption,
                Field::CardNumber,
                Field::ExpiryDate,
                Field::Cvv,
                Field::Terms,
            ]
        );
        assert!(!errors.contains(Field::Phone));
    }

    #[test]
    fn test_delivery_requires_address_block() {
        let mut form = pickup_form();
        form.delivery_option = Some(DeliveryOption::Delivery);
        form.city = "Tokyo".to_string();
        form.postal_code = "  ".to_string();
        form.country = "Japan".to_string();

        let errors = validate(&form);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Address), Some("Address is required for delivery."));
        assert_eq!(
            errors.get(Field::PostalCode),
            Some("Postal code is required for delivery.")
        );
    }

    #[test]
    fn test_full_name_length() {
        let mut form = pickup_form();
        form.full_name = "N".to_string();
        assert!(validate(&form).contains(Field::FullName));
        form.full_name = "Ny".to_string();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("shizuka@example.co.jp"));
        assert!(is_valid_email("o'brien+menu@example.com"));
        assert!(!is_valid_email("nobita"));
        assert!(!is_valid_email("nobita@localhost"));
        assert!(!is_valid_email(".nobita@example.com"));
        assert!(!is_valid_email("no..bita@example.com"));
        assert!(!is_valid_email("nobita.@example.com"));
    }

    #[test]
    fn test_card_number_patterns() {
        assert!(is_valid_card_number("4242424242424242"));
        assert!(is_valid_card_number("4242-4242-4242-4242"));
        assert!(is_valid_card_number("4242 4242-4242 4242"));
        assert!(!is_valid_card_number("4242 4242 4242 424"));
        assert!(!is_valid_card_number("4242  4242 4242 4242"));
        assert!(!is_valid_card_number("4242 4242 4242 4242 "));
        assert!(!is_valid_card_number("abcd efgh ijkl mnop"));
    }

    #[test]
    fn test_expiry_patterns() {
        assert!(is_valid_expiry("01/30"));
        assert!(is_valid_expiry("12/25"));
        assert!(!is_valid_expiry("00/25"));
        assert!(!is_valid_expiry("13/25"));
        assert!(!is_valid_expiry("1/25"));
        assert!(!is_valid_expiry("01/2025"));
    }

    #[test]
    fn test_cvv_patterns() {
        assert!(is_valid_cvv("123"));
        assert!(is_valid_cvv("1234"));
        assert!(!is_valid_cvv("12"));
        assert!(!is_valid_cvv("12345"));
        assert!(!is_valid_cvv("12a"));
    }

    #[test]
    fn test_errors_serialize_as_field_map() {
        let mut form = pickup_form();
        form.terms = false;
        let json = serde_json::to_value(validate(&form)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"terms": "You must accept the terms and conditions."})
        );
    }

    #[test]
    fn test_errors_display() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Cvv, "bad");
        errors.insert(Field::Email, "worse");
        assert_eq!(errors.to_string(), "email: worse; cvv: bad");
    }
}
