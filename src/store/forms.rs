//! Pending form buffers
//!
//! Cleared on successful submission, kept on failure so the user can retry
//! without retyping.

use crate::api::{NewCustomer, NewInteraction};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub purchase_history: String,
    pub pending: bool,
}

impl CustomerForm {
    /// Build the request body, or explain why the buffer is not submittable
    pub fn validate(&self) -> Result<NewCustomer, &'static str> {
        if self.name.trim().is_empty() {
            return Err("Customer name is required");
        }
        if self.email.trim().is_empty() {
            return Err("Customer email is required");
        }
        Ok(NewCustomer {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            purchase_history: self.purchase_history.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionForm {
    pub kind: String,
    pub details: String,
    pub pending: bool,
}

impl InteractionForm {
    pub fn validate(&self) -> Result<NewInteraction, &'static str> {
        if self.kind.trim().is_empty() {
            return Err("Interaction type is required");
        }
        Ok(NewInteraction {
            interaction_type: self.kind.trim().to_string(),
            details: self.details.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_form_requires_name_and_email() {
        let mut form = CustomerForm {
            name: "  ".into(),
            email: "a@b.c".into(),
            ..Default::default()
        };
        assert!(form.validate().is_err());
        form.name = "Ana".into();
        form.email.clear();
        assert!(form.validate().is_err());
        form.email = " ana@example.com ".into();
        let body = form.validate().unwrap();
        assert_eq!(body.email, "ana@example.com");
        assert_eq!(body.purchase_history, "");
    }

    #[test]
    fn interaction_form_requires_type() {
        let mut form = InteractionForm::default();
        assert!(form.validate().is_err());
        form.kind = "email".into();
        assert_eq!(form.validate().unwrap().interaction_type, "email");
    }
}
