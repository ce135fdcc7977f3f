use crate::storage::DEFAULT_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contact-manager", version, about = "Simple Contact Manager")]
pub struct Cli {
    /// File the contact list is saved to and loaded from
    #[arg(long, global = true, env = "CONTACTS_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Runs the interactive form session when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive form with Add, Edit, Delete, Save and Load actions
    Session,

    /// List contacts
    List,

    /// Add a new contact and save the list
    Add {
        /// Contact name
        #[arg(long, default_value = "")]
        name: String,

        /// Contact phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Contact email address
        #[arg(long, default_value = "")]
        email: String,
    },

    /// Edit a contact by row number
    /// The edited contact moves to the end of the list
    Edit {
        /// Row number as shown by `list`
        #[arg(long)]
        row: usize,

        /// Update name
        #[arg(long)]
        name: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Update email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a contact by row number
    Delete {
        /// Row number as shown by `list`
        #[arg(long)]
        row: usize,
    },
}
