use serde::{Deserialize, Serialize};

/// A single row of the contact table.
///
/// Fields are stored exactly as submitted. Non-emptiness is checked by
/// [`ContactForm::submit`](super::ContactForm::submit) before a record is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Contact {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}
