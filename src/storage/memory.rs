use super::*;

use std::cell::RefCell;

/// Keeps the collection in memory. Used by tests and benches.
#[derive(Debug, Default)]
pub struct MemStore {
    data: RefCell<Vec<Contact>>,
    saves: RefCell<usize>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
            saves: RefCell::new(0),
        }
    }

    pub fn snapshot(&self) -> Vec<Contact> {
        self.data.borrow().clone()
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> &str {
        "memory"
    }
}
