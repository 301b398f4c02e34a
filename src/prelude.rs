pub use crate::cli::{command, display, run_app};
pub use crate::domain::{
    book::{self, ContactBook},
    contact::{self, Contact},
    id::{DEFAULT_ID_LENGTH, IdGenerator, MAX_ID_LENGTH, NanoId},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, JsonStore, MemStore};
