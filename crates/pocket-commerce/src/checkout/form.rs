//! Checkout form fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    Delivery,
    Pickup,
}

impl DeliveryOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOption::Delivery => "delivery",
            DeliveryOption::Pickup => "pickup",
        }
    }
}

impl fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delivery" => Ok(DeliveryOption::Delivery),
            "pickup" => Ok(DeliveryOption::Pickup),
            other => Err(format!("unknown delivery option: {other:?}")),
        }
    }
}

/// A checkout form field, named as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Phone,
    DeliveryOption,
    Address,
    City,
    PostalCode,
    Country,
    CardNumber,
    ExpiryDate,
    Cvv,
    Terms,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::DeliveryOption,
        Field::Address,
        Field::City,
        Field::PostalCode,
        Field::Country,
        Field::CardNumber,
        Field::ExpiryDate,
        Field::Cvv,
        Field::Terms,
    ];

    /// Fields that are required only for delivery orders.
    pub const DELIVERY_ADDRESS: [Field; 4] =
        [Field::Address, Field::City, Field::PostalCode, Field::Country];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::DeliveryOption => "deliveryOption",
            Field::Address => "address",
            Field::City => "city",
            Field::PostalCode => "postalCode",
            Field::Country => "country",
            Field::CardNumber => "cardNumber",
            Field::ExpiryDate => "expiryDate",
            Field::Cvv => "cvv",
            Field::Terms => "terms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown checkout field: {s:?}"))
    }
}

/// Raw checkout form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub delivery_option: Option<DeliveryOption>,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub terms: bool,
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text value of a field; `terms` renders as "true"/"false".
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::FullName => self.full_name.clone(),
            Field::Email => self.email.clone(),
            Field::Phone => self.phone.clone(),
            Field::DeliveryOption => self
                .delivery_option
                .map(|o| o.as_str().to_string())
                .unwrap_or_default(),
            Field::Address => self.address.clone(),
            Field::City => self.city.clone(),
            Field::PostalCode => self.postal_code.clone(),
            Field::Country => self.country.clone(),
            Field::CardNumber => self.card_number.clone(),
            Field::ExpiryDate => self.expiry_date.clone(),
            Field::Cvv => self.cvv.clone(),
            Field::Terms => self.terms.to_string(),
        }
    }

    /// Set a field from its text value.
    ///
    /// An unrecognised delivery option clears the selection, and `terms` is
    /// checked only by the exact value "true".
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::DeliveryOption => self.delivery_option = value.parse().ok(),
            Field::Address => self.address = value,
            Field::City => self.city = value,
            Field::PostalCode => self.postal_code = value,
            Field::Country => self.country = value,
            Field::CardNumber => self.card_number = value,
            Field::ExpiryDate => self.expiry_date = value,
            Field::Cvv => self.cvv = value,
            Field::Terms => self.terms = value.trim() == "true",
        }
    }
}
