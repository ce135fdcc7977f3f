use crate::{
    cli::{
        command::{Cli, Commands},
        handlers::{add_contact, delete_contact, edit_contact, load_contacts, save_contacts},
        render_table, selection_from_row,
        session::Session,
    },
    domain::{ContactForm, ContactStore},
    errors::AppError,
    storage::{FileGateway, Gateway},
};
use std::io;
use tracing::debug;

pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let gateway = FileGateway::new(cli.file);
    debug!(path = %gateway.path().display(), "using contact file");

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(&gateway, stdin.lock(), stdout.lock()).run()?;
            Ok(())
        }

        Commands::List => {
            let store = startup_store(&gateway);
            print!("{}", render_table(store.list()));
            Ok(())
        }

        Commands::Add { name, phone, email } => {
            let mut store = startup_store(&gateway);
            let mut form = ContactForm { name, phone, email };

            add_contact(&mut store, &mut form)?;
            save_contacts(&store, &gateway)?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::Edit {
            row,
            name,
            phone,
            email,
        } => {
            let mut store = startup_store(&gateway);
            let mut form = ContactForm::new();

            edit_contact(&mut store, &mut form, selection_from_row(row))?;
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(phone) = phone {
                form.phone = phone;
            }
            if let Some(email) = email {
                form.email = email;
            }
            add_contact(&mut store, &mut form)?;
            save_contacts(&store, &gateway)?;

            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Delete { row } => {
            let mut store = startup_store(&gateway);

            delete_contact(&mut store, selection_from_row(row))?;
            save_contacts(&store, &gateway)?;

            println!("Contact deleted successfully");
            Ok(())
        }
    }
}

fn startup_store(gateway: &dyn Gateway) -> ContactStore {
    let mut store = ContactStore::new();
    load_contacts(&mut store, gateway);
    store
}
