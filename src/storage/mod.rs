pub mod file;
pub mod memory;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

pub use file::FileGateway;
pub use memory::MemGateway;

pub const DEFAULT_FILE: &str = "contacts.dat";

/// Whole-list persistence: every save writes the full list, every load reads it back.
pub trait Gateway {
    /// Reads the persisted list, reporting I/O and decode problems.
    ///
    /// A store that was never saved is not an error and yields an empty list.
    fn try_load(&self) -> Result<Vec<Contact>, AppError>;

    /// Replaces the persisted list with `contacts`, in order.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn medium(&self) -> &str;

    /// Fail-soft load: anything that cannot be read back counts as "no contacts yet".
    fn load(&self) -> Vec<Contact> {
        match self.try_load() {
            Ok(contacts) => contacts,
            Err(err) => {
                warn!(medium = self.medium(), error = %err, "could not load contacts, starting empty");
                Vec::new()
            }
        }
    }
}

pub fn create_file_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
