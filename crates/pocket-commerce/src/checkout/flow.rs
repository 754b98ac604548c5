//! Checkout session: live validation and submission.

use crate::cart::Cart;
use crate::checkout::{
    validate, CheckoutForm, DeliveryOption, Field, OrderConfirmation, PlaceOrder,
    ValidatedCheckout, ValidationErrors,
};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A checkout form being filled in.
///
/// Errors are recomputed after every change, so `errors()` always describes
/// the current form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    form: CheckoutForm,
    errors: ValidationErrors,
}

impl CheckoutSession {
    /// Start from a blank form.
    pub fn new() -> Self {
        Self::from_form(CheckoutForm::default())
    }

    /// Start from a pre-filled form.
    pub fn from_form(form: CheckoutForm) -> Self {
        let errors = validate(&form);
        Self { form, errors }
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Error for one field, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Change a field from its text value and re-validate.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.revalidate();
    }

    pub fn set_delivery_option(&mut self, option: DeliveryOption) {
        self.form.delivery_option = Some(option);
        self.revalidate();
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.form.terms = accepted;
        self.revalidate();
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }

    /// Validate once more and hand the order to `placer`.
    ///
    /// Field errors come back as `CommerceError::Validation`, and an empty
    /// cart as `CommerceError::EmptyCart`.
    pub fn submit<P: PlaceOrder + ?Sized>(
        &mut self,
        cart: &Cart,
        placer: &P,
    ) -> Result<OrderConfirmation, CommerceError> {
        self.revalidate();
        if !self.errors.is_empty() {
            tracing::warn!(errors = self.errors.len(), "checkout blocked by field errors");
            return Err(CommerceError::Validation(self.errors.clone()));
        }

        let delivery_option = self.form.delivery_option.ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.insert(Field::DeliveryOption, "Please select a delivery or pickup option.");
            CommerceError::Validation(errors)
        })?;

        let order = ValidatedCheckout::new(self.form.clone(), delivery_option, cart)?;
        placer.place_order(order)
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.form);
    }
}
