use super::handlers::{
    SAVE_FAILED, SAVED, add_contact, delete_contact, edit_contact, load_contacts, save_contacts,
};
use super::{parse_selection, render_table};
use crate::domain::{ContactForm, ContactStore};
use crate::errors::AppError;
use crate::storage::Gateway;
use std::io::{BufRead, Write};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Edit,
    Delete,
    Save,
    Load,
    Exit,
}

impl MenuAction {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim() {
            "1" => Ok(MenuAction::Add),
            "2" => Ok(MenuAction::Edit),
            "3" => Ok(MenuAction::Delete),
            "4" => Ok(MenuAction::Save),
            "5" => Ok(MenuAction::Load),
            "6" => Ok(MenuAction::Exit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}

/// Interactive stand-in for the contact window: a form, a table and five buttons.
///
/// The store is loaded once when the session starts and is only written back
/// when the user picks Save.
pub struct Session<'g, R, W> {
    store: ContactStore,
    form: ContactForm,
    gateway: &'g dyn Gateway,
    input: R,
    output: W,
}

impl<'g, R: BufRead, W: Write> Session<'g, R, W> {
    pub fn new(gateway: &'g dyn Gateway, input: R, output: W) -> Self {
        Self {
            store: ContactStore::new(),
            form: ContactForm::new(),
            gateway,
            input,
            output,
        }
    }

    /// Runs until Exit or end of input and hands back the final in-memory list.
    pub fn run(mut self) -> Result<ContactStore, AppError> {
        load_contacts(&mut self.store, self.gateway);
        info!(count = self.store.len(), "session started");

        writeln!(self.output, "\n--- Contact Manager ---\n")?;

        loop {
            self.render()?;
            self.show_menu()?;

            let Some(choice) = self.read_line()? else {
                break;
            };

            let action = match MenuAction::parse(&choice) {
                Ok(action) => action,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            if action == MenuAction::Exit {
                break;
            }

            if !self.dispatch(action)? {
                break;
            }
        }

        if !self.form.is_blank() {
            warn!("session ended with unsubmitted form values");
        }
        writeln!(self.output, "\nBye!")?;
        Ok(self.store)
    }

    // Returns false when input ran out mid-action.
    fn dispatch(&mut self, action: MenuAction) -> Result<bool, AppError> {
        let outcome = match action {
            MenuAction::Add => {
                if !self.fill_form()? {
                    return Ok(false);
                }
                add_contact(&mut self.store, &mut self.form)
                    .map(|_| "Contact added successfully".to_string())
            }
            MenuAction::Edit => {
                let Some(answer) = self.prompt("Row to edit")? else {
                    return Ok(false);
                };
                parse_selection(&answer)
                    .and_then(|sel| edit_contact(&mut self.store, &mut self.form, sel))
                    .map(|_| "Contact moved into the form. Choose Add Contact to save it.".to_string())
            }
            MenuAction::Delete => {
                let Some(answer) = self.prompt("Row to delete")? else {
                    return Ok(false);
                };
                parse_selection(&answer)
                    .and_then(|sel| delete_contact(&mut self.store, sel))
                    .map(|_| "Contact deleted successfully".to_string())
            }
            MenuAction::Save => match save_contacts(&self.store, self.gateway) {
                Ok(()) => Ok(SAVED.to_string()),
                Err(AppError::SaveFailed { source, .. }) => Ok(format!("{SAVE_FAILED} {source}")),
                Err(err) => Err(err),
            },
            MenuAction::Load => {
                let count = load_contacts(&mut self.store, self.gateway);
                Ok(format!("Loaded {count} contacts."))
            }
            MenuAction::Exit => return Ok(false),
        };

        match outcome {
            Ok(message) => writeln!(self.output, "\n{message}")?,
            Err(err) => writeln!(self.output, "\nError: {err}")?,
        }
        Ok(true)
    }

    fn render(&mut self) -> Result<(), AppError> {
        write!(self.output, "{}", render_table(self.store.list()))?;
        if !self.form.is_blank() {
            writeln!(
                self.output,
                "Form: {} | {} | {}",
                self.form.name, self.form.phone, self.form.email
            )?;
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output)?;
        writeln!(self.output, "1. Add Contact")?;
        writeln!(self.output, "2. Edit Contact")?;
        writeln!(self.output, "3. Delete Contact")?;
        writeln!(self.output, "4. Save Contacts")?;
        writeln!(self.output, "5. Load Contacts")?;
        writeln!(self.output, "6. Exit")?;
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    // Empty answers keep what the form already holds, so an edited contact can
    // be resubmitted by pressing enter three times.
    fn fill_form(&mut self) -> Result<bool, AppError> {
        let mut form = self.form.clone();

        for (label, field) in [
            ("Name", &mut form.name),
            ("Phone Number", &mut form.phone),
            ("Email Address", &mut form.email),
        ] {
            let prompt = if field.is_empty() {
                label.to_string()
            } else {
                format!("{label} [{field}]")
            };

            let Some(answer) = self.prompt(&prompt)? else {
                return Ok(false);
            };
            if !answer.is_empty() {
                *field = answer;
            }
        }

        self.form = form;
        Ok(true)
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Contact;
    use crate::storage::{FileGateway, MemGateway};
    use std::io::Cursor;

    fn run_script(gateway: &MemGateway, script: &str) -> Result<(ContactStore, String), AppError> {
        let mut output = Vec::new();
        let store = Session::new(gateway, Cursor::new(script.to_string()), &mut output).run()?;
        Ok((store, String::from_utf8_lossy(&output).into_owned()))
    }

    #[test]
    fn parses_menu_actions() {
        assert_eq!(MenuAction::parse("1\n").ok(), Some(MenuAction::Add));
        assert_eq!(MenuAction::parse(" 6 ").ok(), Some(MenuAction::Exit));
        assert!(matches!(MenuAction::parse("7"), Err(AppError::ParseCommand(_))));
    }

    #[test]
    fn adds_deletes_and_saves() -> Result<(), AppError> {
        let gateway = MemGateway::new();
        let script = "1\nAlice\n555-1000\na@x.com\n\
                      1\nBob\n555-2000\nb@x.com\n\
                      3\n1\n\
                      4\n\
                      6\n";

        let (store, output) = run_script(&gateway, script)?;

        assert_eq!(store.list(), &[Contact::new("Bob", "555-2000", "b@x.com")]);
        assert_eq!(gateway.snapshot(), store.list());
        assert!(output.contains("Contact added successfully"));
        assert!(output.contains("Contact deleted successfully"));
        assert!(output.contains(SAVED));
        assert!(output.ends_with("Bye!\n"));
        Ok(())
    }

    #[test]
    fn changes_are_not_saved_without_save() -> Result<(), AppError> {
        let gateway = MemGateway::new();

        let (store, _) = run_script(&gateway, "1\nAlice\n555-1000\na@x.com\n6\n")?;

        assert_eq!(store.len(), 1);
        assert!(gateway.snapshot().is_empty());
        Ok(())
    }

    #[test]
    fn loads_at_startup() -> Result<(), AppError> {
        let gateway = MemGateway::with_contacts(vec![Contact::new("Bob", "555-2000", "b@x.com")]);

        let (store, output) = run_script(&gateway, "6\n")?;

        assert_eq!(store.len(), 1);
        assert!(output.contains("  1. Bob"));
        Ok(())
    }

    #[test]
    fn validation_and_selection_errors_keep_the_session_alive() -> Result<(), AppError> {
        let gateway = MemGateway::new();
        let script = "1\nAlice\n\na@x.com\n\
                      3\n\n\
                      2\n\n\
                      3\n4\n\
                      9\n\
                      3\nabc\n\
                      6\n";

        let (store, output) = run_script(&gateway, script)?;

        assert!(store.is_empty());
        assert!(output.contains("Please enter name, phone number, and email address."));
        assert!(output.contains("Please select a contact to delete."));
        assert!(output.contains("Please select a contact to edit."));
        assert!(output.contains("Row 4 is out of range"));
        assert!(output.contains("Unrecognized command: '9'"));
        assert!(output.contains("Invalid number format"));
        assert!(output.ends_with("Bye!\n"));
        Ok(())
    }

    #[test]
    fn failed_add_keeps_typed_values_for_retry() -> Result<(), AppError> {
        let gateway = MemGateway::new();
        let script = "1\nAlice\n\na@x.com\n\
                      1\n\n555-1000\n\n\
                      6\n";

        let (store, output) = run_script(&gateway, script)?;

        assert_eq!(store.list(), &[Contact::new("Alice", "555-1000", "a@x.com")]);
        assert!(output.contains("Name [Alice]: "));
        Ok(())
    }

    #[test]
    fn edit_resubmitted_with_enter_moves_contact_to_end() -> Result<(), AppError> {
        let gateway = MemGateway::with_contacts(vec![
            Contact::new("Alice", "555-1000", "a@x.com"),
            Contact::new("Bob", "555-2000", "b@x.com"),
        ]);
        let script = "2\n1\n1\n\n555-1111\n\n6\n";

        let (store, output) = run_script(&gateway, script)?;

        assert_eq!(
            store.list(),
            &[
                Contact::new("Bob", "555-2000", "b@x.com"),
                Contact::new("Alice", "555-1111", "a@x.com"),
            ]
        );
        assert!(output.contains("Form: Alice | 555-1000 | a@x.com"));
        Ok(())
    }

    #[test]
    fn abandoned_edit_loses_the_contact() -> Result<(), AppError> {
        let gateway = MemGateway::with_contacts(vec![Contact::new("Alice", "555-1000", "a@x.com")]);

        let (store, _) = run_script(&gateway, "2\n1\n4\n6\n")?;

        assert!(store.is_empty());
        assert!(gateway.snapshot().is_empty());
        Ok(())
    }

    #[test]
    fn load_discards_unsaved_changes() -> Result<(), AppError> {
        let gateway = MemGateway::with_contacts(vec![Contact::new("Bob", "555-2000", "b@x.com")]);

        let (store, output) = run_script(&gateway, "3\n1\n5\n6\n")?;

        assert_eq!(store.list(), &[Contact::new("Bob", "555-2000", "b@x.com")]);
        assert!(output.contains("Loaded 1 contacts."));
        Ok(())
    }

    #[test]
    fn failed_save_is_reported_once() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        // A directory cannot be replaced by the contact file
        let gateway = FileGateway::new(dir.path());
        let mut output = Vec::new();

        let store = Session::new(
            &gateway,
            Cursor::new("1\nAlice\n555-1000\na@x.com\n4\n6\n".to_string()),
            &mut output,
        )
        .run()?;
        let output = String::from_utf8_lossy(&output);

        assert_eq!(store.len(), 1);
        assert_eq!(output.matches("Failed to save contacts to file").count(), 1);
        assert!(output.contains(SAVE_FAILED));
        Ok(())
    }

    #[test]
    fn end_of_input_mid_add_ends_the_session() -> Result<(), AppError> {
        let gateway = MemGateway::new();

        let (store, output) = run_script(&gateway, "1\nAlice\n")?;

        assert!(store.is_empty());
        assert!(output.ends_with("Bye!\n"));
        Ok(())
    }
}
