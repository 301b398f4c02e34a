use clap::{Parser, Subcommand, builder::RangedU64ValueParser};

use crate::domain::{DEFAULT_ID_LENGTH, MAX_ID_LENGTH};
use crate::storage::json::STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Path to the JSON document holding the contacts
    #[arg(long, global = true, env = "CONTACTS_DB_PATH", default_value_t = String::from(STORAGE_PATH))]
    pub db: String,

    /// Length of generated contact ids (1 to 64)
    #[arg(
        long,
        global = true,
        env = "CONTACTS_ID_LENGTH",
        default_value_t = DEFAULT_ID_LENGTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_ID_LENGTH as u64)
    )]
    pub id_length: usize,

    /// Log storage activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all contacts
    List,
    /// Show the contact with the given id
    Get {
        /// Contact id
        #[arg(long)]
        id: String,
    },
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },
    /// Remove the contact with the given id
    Remove {
        /// Contact id
        #[arg(long)]
        id: String,
    },
    /// Create an empty contact book if none exists yet
    Init,
}
