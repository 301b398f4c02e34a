use serde::{Deserialize, Serialize};

/// A single entry of the contact book.
///
/// Field order matters: it is the order the fields are written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn new(id: String, name: String, email: String, phone: String) -> Self {
        Contact {
            id,
            name,
            email,
            phone,
        }
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id == id
    }
}
