pub mod command;
pub mod handlers;
pub mod run;
pub mod session;

use crate::domain::Contact;
use crate::errors::AppError;

pub fn listing_header() -> String {
    format!(
        "{:>3}  {:<20} {:<15} {}",
        "#", "Name", "Phone Number", "Email Address"
    )
}

pub fn listing_row(row: usize, contact: &Contact) -> String {
    format!(
        "{row:>3}. {:<20} {:<15} {}",
        contact.name, contact.phone, contact.email
    )
}

/// Renders the contact table with rows numbered from 1.
pub fn render_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts yet\n".to_string();
    }

    let mut output = listing_header();
    output.push('\n');

    for (i, contact) in contacts.iter().enumerate() {
        output.push_str(&listing_row(i + 1, contact));
        output.push('\n');
    }
    output
}

/// Converts a 1-based table row into a store index. Row 0 means nothing is selected.
pub fn selection_from_row(row: usize) -> Option<usize> {
    row.checked_sub(1)
}

/// Parses a typed row number. A blank answer means nothing is selected.
pub fn parse_selection(input: &str) -> Result<Option<usize>, AppError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    Ok(selection_from_row(input.parse::<usize>()?))
}
