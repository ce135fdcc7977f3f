use super::*;

use std::io::Write;
use std::path::PathBuf;
use tempfile::Builder;
use tracing::{debug, info};

/// Keeps the contact list in one JSON file, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct FileGateway {
    path: PathBuf,
}

impl FileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    // The list goes to a sibling temp file first and is renamed over the target,
    // so a failed save never leaves a half-written file behind.
    fn write_atomically(&self, contacts: &[Contact]) -> io::Result<()> {
        create_file_parent(&self.path)?;

        let data = serde_json::to_vec_pretty(contacts)?;

        let mut file = temp_file_builder().tempfile_in(self.parent_dir())?;
        // An existing file keeps its permissions across saves
        if let Ok(meta) = fs::metadata(&self.path) {
            file.as_file().set_permissions(meta.permissions())?;
        }
        file.write_all(&data)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|err| err.error)?;

        Ok(())
    }
}

// New files get 0666 minus the umask, like any other file the user creates.
fn temp_file_builder() -> Builder<'static, 'static> {
    #[allow(unused_mut)]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}

impl Gateway for FileGateway {
    fn try_load(&self) -> Result<Vec<Contact>, AppError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no contact file yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        // serde_json will give an error if data is empty
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let contacts: Vec<Contact> = serde_json::from_slice(&data)?;
        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        self.write_atomically(contacts)
            .map_err(|source| AppError::SaveFailed {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn medium(&self) -> &str {
        "file"
    }
}
