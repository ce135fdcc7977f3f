use super::*;

use std::cell::RefCell;

/// Keeps the last saved list in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemGateway {
    data: RefCell<Vec<Contact>>,
}

impl MemGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
        }
    }

    pub fn snapshot(&self) -> Vec<Contact> {
        self.data.borrow().clone()
    }
}

impl Gateway for MemGateway {
    fn try_load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.snapshot())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }

    fn medium(&self) -> &str {
        "memory"
    }
}
