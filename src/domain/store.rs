use crate::domain::Contact;
use crate::errors::AppError;

/// Ordered, index-addressed list of contacts.
///
/// Insertion order is both the display order and the order written to disk.
/// Duplicates are allowed. Removing a row shifts every later row down by one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactStore {
    data: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn add(&mut self, contact: Contact) {
        self.data.push(contact);
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Contact, AppError> {
        self.check_index(index)?;
        Ok(self.data.remove(index))
    }

    /// Pulls a contact out of the list so its values can be edited.
    ///
    /// The record is gone from the store once this returns. The caller puts the
    /// edited values back with [`add`](Self::add), which appends at the end.
    /// If that never happens the contact stays deleted.
    pub fn take_at(&mut self, index: usize) -> Result<Contact, AppError> {
        self.remove_at(index)
    }

    pub fn list(&self) -> &[Contact] {
        &self.data
    }

    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        self.data = contacts;
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.data.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), AppError> {
        if index < self.data.len() {
            Ok(())
        } else {
            Err(AppError::OutOfRange {
                index,
                len: self.data.len(),
            })
        }
    }
}

impl From<Vec<Contact>> for ContactStore {
    fn from(data: Vec<Contact>) -> Self {
        Self { data }
    }
}
