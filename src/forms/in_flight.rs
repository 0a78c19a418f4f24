use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use super::submission::FormKind;

type Key = (FormKind, String);

/// Tracks which (form, visitor) pairs have a submission pending, so the same
/// form cannot be submitted twice concurrently.
#[derive(Clone, Default)]
pub struct InFlightRegistry {
    active: Arc<Mutex<HashSet<Key>>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the pair as submitting. Returns `None` if it already is.
    /// The pair is released when the returned guard is dropped.
    pub fn try_acquire(&self, kind: FormKind, owner: &str) -> Option<InFlightGuard> {
        let key = (kind, owner.to_string());
        let mut set = self.active.lock().unwrap_or_else(|e| e.into_inner());
        if !set.insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard { registry: self.clone(), key })
    }

    pub fn is_active(&self, kind: FormKind, owner: &str) -> bool {
        let set = self.active.lock().unwrap_or_else(|e| e.into_inner());
        set.contains(&(kind, owner.to_string()))
    }
}

pub struct InFlightGuard {
    registry: InFlightRegistry,
    key: Key,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut set = self.registry.active.lock().unwrap_or_else(|e| e.into_inner());
        set.remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_refused_until_release() {
        let registry = InFlightRegistry::new();
        let guard = registry.try_acquire(FormKind::Contact, "abc");
        assert!(guard.is_some());
        assert!(registry.is_active(FormKind::Contact, "abc"));
        assert!(registry.try_acquire(FormKind::Contact, "abc").is_none());

        drop(guard);
        assert!(!registry.is_active(FormKind::Contact, "abc"));
        assert!(registry.try_acquire(FormKind::Contact, "abc").is_some());
    }

    #[test]
    fn forms_and_owners_are_independent() {
        let registry = InFlightRegistry::new();
        let _a = registry.try_acquire(FormKind::Contact, "abc").expect("free");
        assert!(registry.try_acquire(FormKind::Signup, "abc").is_some());
        assert!(registry.try_acquire(FormKind::Contact, "xyz").is_some());
    }
}
