pub use crate::cli::{
    command::{Cli, Commands},
    handlers, render_table,
    run::run_app,
    session::Session,
};
pub use crate::domain::{Contact, ContactForm, ContactStore, contact, form};
pub use crate::errors::AppError;
pub use crate::storage::{self, FileGateway, Gateway, MemGateway};
