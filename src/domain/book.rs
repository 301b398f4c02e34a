use super::*;

use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Number of ids tried before `add_contact` gives up on finding a free one.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Owns the contact store and runs one load/compute/save sequence per call.
///
/// Calls are serialized within the process. Nothing coordinates separate
/// processes writing the same document: the last writer wins.
pub struct ContactBook<S: ContactStore, G: IdGenerator = NanoId> {
    store: S,
    ids: G,
    id_length: usize,
    lock: Mutex<()>,
}

impl<S: ContactStore> ContactBook<S, NanoId> {
    pub fn new(store: S) -> Self {
        Self::with_generator(store, NanoId, DEFAULT_ID_LENGTH)
    }
}

impl<S: ContactStore, G: IdGenerator> ContactBook<S, G> {
    pub fn with_generator(store: S, ids: G, id_length: usize) -> Self {
        Self {
            store,
            ids,
            id_length,
            lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The guard protects no data, so a poisoned lock is still usable
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let _guard = self.guard();
        self.store.load()
    }

    /// Returns `Ok(None)` when no contact carries `id`.
    pub fn get_contact_by_id(&self, id: &str) -> Result<Option<Contact>, AppError> {
        let _guard = self.guard();
        let contacts = self.store.load()?;

        let found = contacts.into_iter().find(|c| c.has_id(id));
        if found.is_none() {
            debug!(id, "contact not found");
        }
        Ok(found)
    }

    /// Removes the first contact carrying `id`. Returns `Ok(false)` without
    /// writing when there is none.
    pub fn remove_contact(&self, id: &str) -> Result<bool, AppError> {
        let _guard = self.guard();
        let mut contacts = self.store.load()?;

        let Some(index) = contacts.iter().position(|c| c.has_id(id)) else {
            debug!(id, "nothing to remove");
            return Ok(false);
        };

        contacts.remove(index);
        self.store.save(&contacts)?;

        info!(id, location = self.store.location(), "contact removed");
        Ok(true)
    }

    pub fn add_contact(&self, name: &str, email: &str, phone: &str) -> Result<Contact, AppError> {
        let _guard = self.guard();
        let mut contacts = self.store.load()?;

        let id = self.unused_id(&contacts)?;
        let new_contact = Contact::new(id, name.to_string(), email.to_string(), phone.to_string());

        contacts.push(new_contact.clone());
        self.store.save(&contacts)?;

        info!(id = %new_contact.id, location = self.store.location(), "contact added");
        Ok(new_contact)
    }

    fn unused_id(&self, contacts: &[Contact]) -> Result<String, AppError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.generate(self.id_length);
            if !contacts.iter().any(|c| c.has_id(&id)) {
                return Ok(id);
            }
            warn!(id, "generated id already in use, retrying");
        }
        Err(AppError::IdExhausted(MAX_ID_ATTEMPTS))
    }
}
