//=========================================================================
// Registry
//=========================================================================
//
// Handle-based registration list used by every editor extension point
// (graph factories, pin factories, tasks, asset actions).
//
// Registration returns a `RegistrationHandle`; the registrant keeps it
// and hands it back to unregister. Entries keep registration order.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::type_name;

use log::{debug, warn};

//=== RegistrationHandle ==================================================

/// Opaque token identifying one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationHandle(u64);

//=== Registry ============================================================

pub struct Registry<T: ?Sized> {
    entries: Vec<(RegistrationHandle, Box<T>)>,
    next_handle: u64,
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 1,
        }
    }
}

impl<T: ?Sized> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` and returns its handle.
    pub fn register(&mut self, item: Box<T>) -> RegistrationHandle {
        let handle = RegistrationHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push((handle, item));
        debug!("Registered {} as {:?}", type_name::<T>(), handle);
        handle
    }

    /// Removes the entry registered under `handle`.
    pub fn unregister(&mut self, handle: RegistrationHandle) -> Option<Box<T>> {
        match self.entries.iter().position(|(h, _)| *h == handle) {
            Some(index) => Some(self.entries.remove(index).1),
            None => {
                warn!("Unregister of unknown {:?} in {} registry", handle, type_name::<T>());
                None
            }
        }
    }

    pub fn get(&self, handle: RegistrationHandle) -> Option<&T> {
        self.entries
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, item)| item.as_ref())
    }

    pub fn contains(&self, handle: RegistrationHandle) -> bool {
        self.entries.iter().any(|(h, _)| *h == handle)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|(_, item)| item.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    trait Named {
        fn name(&self) -> &str;
    }

    struct Entry(&'static str);

    impl Named for Entry {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn names(registry: &Registry<dyn Named>) -> Vec<&str> {
        registry.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn register_keeps_order() {
        let mut registry: Registry<dyn Named> = Registry::new();
        registry.register(Box::new(Entry("a")));
        registry.register(Box::new(Entry("b")));

        assert_eq!(names(&registry), vec!["a", "b"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unregister_by_handle() {
        let mut registry: Registry<dyn Named> = Registry::new();
        let a = registry.register(Box::new(Entry("a")));
        let b = registry.register(Box::new(Entry("b")));
        assert_ne!(a, b);

        let removed = registry.unregister(a).unwrap();
        assert_eq!(removed.name(), "a");
        assert!(!registry.contains(a));
        assert_eq!(registry.get(b).map(|e| e.name()), Some("b"));

        assert!(registry.unregister(a).is_none());
    }

    #[test]
    fn handles_are_not_reused() {
        let mut registry: Registry<dyn Named> = Registry::new();
        let first = registry.register(Box::new(Entry("a")));
        registry.unregister(first);
        let second = registry.register(Box::new(Entry("a")));

        assert_ne!(first, second);
        assert!(registry.get(first).is_none());
    }
}
