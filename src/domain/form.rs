use crate::domain::Contact;
use crate::errors::AppError;

pub const MISSING_FIELDS: &str = "Please enter name, phone number, and email address.";

/// The three input fields of the contact form, holding whatever was typed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a contact from the trimmed field values.
    ///
    /// Fails when any field is blank. The form itself is left as typed.
    pub fn submit(&self) -> Result<Contact, AppError> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        let email = self.email.trim();

        if name.is_empty() || phone.is_empty() || email.is_empty() {
            return Err(AppError::Validation(MISSING_FIELDS.to_string()));
        }

        Ok(Contact::new(name, phone, email))
    }

    pub fn fill(&mut self, contact: Contact) {
        self.name = contact.name;
        self.phone = contact.phone;
        self.email = contact.email;
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.email.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.phone.trim().is_empty() && self.email.trim().is_empty()
    }
}
