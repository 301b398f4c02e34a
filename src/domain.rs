pub mod book;
pub mod contact;
pub mod id;

use crate::errors::AppError;
use crate::storage::ContactStore;

pub use book::ContactBook;
pub use contact::Contact;
pub use id::{DEFAULT_ID_LENGTH, IdGenerator, MAX_ID_LENGTH, NanoId};
