use crate::{
    cli::{
        command::{Cli, Commands},
        display::{not_found_message, removed_message, render_table},
    },
    domain::{ContactBook, NanoId},
    errors::AppError,
    logging,
    storage::{ContactStore, JsonStore},
};
use clap::Parser;
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let store = JsonStore::new(&cli.db);
    debug!(path = store.location(), command = ?cli.command, "running command");

    if let Commands::Init = cli.command {
        if store.init()? {
            println!("Initialised contact book at {}", cli.db);
        } else {
            println!("Contact book at {} already exists", cli.db);
        }
        return Ok(());
    }

    let book = ContactBook::with_generator(store, NanoId, cli.id_length);

    match cli.command {
        Commands::List => {
            let contacts = book.list_contacts()?;
            if contacts.is_empty() {
                println!("No contacts yet");
            } else {
                print!("{}", render_table(&contacts));
            }
        }

        Commands::Get { id } => match book.get_contact_by_id(&id)? {
            Some(contact) => print!("{}", render_table(&[contact])),
            None => eprintln!("{}", not_found_message(&id)),
        },

        Commands::Add { name, email, phone } => {
            let contact = book.add_contact(&name, &email, &phone)?;
            println!("Contact added successfully:");
            print!("{}", render_table(&[contact]));
        }

        Commands::Remove { id } => {
            if book.remove_contact(&id)? {
                println!("{}", removed_message(&id));
            } else {
                eprintln!("{}", not_found_message(&id));
            }
        }

        Commands::Init => {}
    }

    Ok(())
}
