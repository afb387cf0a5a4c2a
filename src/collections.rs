use crate::models::{Record, fresh_id};

/// In-memory CRUD collection shared by contacts, deals, and tasks.
/// Mutations are id-keyed replace/filter operations; there is no
/// cross-collection integrity, so deleting a contact never cascades to
/// deals or tasks that reference it.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    items: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn seeded(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Append a draft, assigning it a fresh id (any id the caller left
    /// on the draft is overwritten). Returns the assigned id.
    pub fn add(&mut self, mut item: T) -> String {
        let id = fresh_id();
        item.set_id(id.clone());
        self.items.push(item);
        id
    }

    /// Replace the element whose id matches. No-op when absent.
    pub fn update(&mut self, item: T) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id() == item.id()) {
            *existing = item;
        }
    }

    /// Remove the element with the given id. No-op when absent, so a
    /// repeated delete is harmless.
    pub fn delete(&mut self, id: &str) {
        self.items.retain(|i| i.id() != id);
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
