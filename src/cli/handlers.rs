//! One handler per form button. Each takes the state it touches explicitly.

use crate::domain::{Contact, ContactForm, ContactStore};
use crate::errors::AppError;
use crate::storage::Gateway;
use tracing::{debug, error, info};

pub const SELECT_TO_EDIT: &str = "Please select a contact to edit.";
pub const SELECT_TO_DELETE: &str = "Please select a contact to delete.";
pub const SAVED: &str = "Saved contacts to file.";
pub const SAVE_FAILED: &str = "Failed to save contacts to file.";

pub fn add_contact(store: &mut ContactStore, form: &mut ContactForm) -> Result<(), AppError> {
    let contact = form.submit()?;
    debug!(name = %contact.name, "adding contact");

    store.add(contact);
    form.clear();
    Ok(())
}

/// Moves the selected contact into the form.
///
/// The contact leaves the store right away and only comes back when the form
/// is submitted again with [`add_contact`].
pub fn edit_contact(
    store: &mut ContactStore,
    form: &mut ContactForm,
    selection: Option<usize>,
) -> Result<(), AppError> {
    let index = selection.ok_or_else(|| AppError::Selection(SELECT_TO_EDIT.to_string()))?;

    let contact = store.take_at(index)?;
    debug!(index, name = %contact.name, "contact taken into the form for editing");
    form.fill(contact);
    Ok(())
}

pub fn delete_contact(
    store: &mut ContactStore,
    selection: Option<usize>,
) -> Result<Contact, AppError> {
    let index = selection.ok_or_else(|| AppError::Selection(SELECT_TO_DELETE.to_string()))?;

    let removed = store.remove_at(index)?;
    debug!(index, name = %removed.name, "deleted contact");
    Ok(removed)
}

pub fn save_contacts(store: &ContactStore, gateway: &dyn Gateway) -> Result<(), AppError> {
    gateway.save(store.list()).inspect_err(|err| {
        error!(medium = gateway.medium(), error = %err, "{SAVE_FAILED}");
    })
}

/// Replaces the store with whatever the gateway holds. Never fails.
pub fn load_contacts(store: &mut ContactStore, gateway: &dyn Gateway) -> usize {
    store.replace_all(gateway.load());
    info!(medium = gateway.medium(), count = store.len(), "contacts loaded");
    store.len()
}
