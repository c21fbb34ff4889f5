use std::collections::HashMap;
use crate::core::SceneObject;
use crate::error::SandboxError;
use crate::Result;

/// Ordered, name-keyed storage for scene objects.
///
/// Insertion order is draw and iteration order. Re-inserting a name replaces
/// the entry in place and keeps its slot.
#[derive(Default)]
pub struct ObjectStorage {
    items: Vec<Box<dyn SceneObject>>,
    index: HashMap<String, usize>,
}

impl ObjectStorage {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an object, returning the one it replaced
    pub fn insert(&mut self, object: Box<dyn SceneObject>) -> Option<Box<dyn SceneObject>> {
        match self.index.get(object.name()) {
            Some(&slot) => Some(std::mem::replace(&mut self.items[slot], object)),
            None => {
                self.index.insert(object.name().to_owned(), self.items.len());
                self.items.push(object);
                None
            }
        }
    }

    /// Removes an object by name
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn SceneObject>> {
        let slot = self.index.remove(name)?;
        let removed = self.items.remove(slot);
        for object in &self.items[slot..] {
            if let Some(i) = self.index.get_mut(object.name()) {
                *i -= 1;
            }
        }
        Some(removed)
    }

    pub fn get(&self, name: &str) -> Option<&dyn SceneObject> {
        let slot = *self.index.get(name)?;
        Some(self.items[slot].as_ref())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn SceneObject + 'static)> {
        let slot = *self.index.get(name)?;
        Some(self.items[slot].as_mut())
    }

    /// Gets an object by name, returning an error if not found
    pub fn get_object(&self, name: &str) -> Result<&dyn SceneObject> {
        self.get(name)
            .ok_or_else(|| SandboxError::ObjectNotFound(name.to_owned()))
    }

    /// Gets a mutable reference to an object by name, returning an error if not found
    pub fn get_object_mut(&mut self, name: &str) -> Result<&mut (dyn SceneObject + 'static)> {
        self.get_mut(name)
            .ok_or_else(|| SandboxError::ObjectNotFound(name.to_owned()))
    }

    /// Current slot of a name in iteration order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    /// Snapshot of the names in iteration order
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|o| o.name().to_owned()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Box<dyn SceneObject>> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn SceneObject>> {
        self.items.iter_mut()
    }

    /// Borrows the object at `slot` mutably together with every other object
    pub fn split_at_slot(&mut self, slot: usize) -> Option<(&mut Box<dyn SceneObject>, NeighborsMut<'_>)> {
        if slot >= self.items.len() {
            return None;
        }
        let (before, rest) = self.items.split_at_mut(slot);
        let (object, after) = rest.split_first_mut()?;
        Some((object, NeighborsMut { before, after }))
    }
}

/// Read-only view of every object except the one being stepped, in scene order
#[derive(Clone, Copy)]
pub struct Neighbors<'a> {
    before: &'a [Box<dyn SceneObject>],
    after: &'a [Box<dyn SceneObject>],
}

impl<'a> Neighbors<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Box<dyn SceneObject>> {
        self.before.iter().chain(self.after.iter())
    }

    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutable view of every object except the one being stepped, in scene order
pub struct NeighborsMut<'a> {
    before: &'a mut [Box<dyn SceneObject>],
    after: &'a mut [Box<dyn SceneObject>],
}

impl<'a> NeighborsMut<'a> {
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn SceneObject>> {
        self.before.iter_mut().chain(self.after.iter_mut())
    }

    /// Reborrows as a read-only view
    pub fn shared(&self) -> Neighbors<'_> {
        Neighbors {
            before: &*self.before,
            after: &*self.after,
        }
    }
}
