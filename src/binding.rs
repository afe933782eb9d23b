//! Shared mutable state owned by the host application.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// A handle to a value owned outside the widget.
///
/// The picker never owns its selection. The host keeps a `Binding`, hands a
/// clone to the picker, and reads the value back on every frame. Clones point
/// at the same value.
pub struct Binding<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Binding<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Run `f` with shared access to the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access to the value.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Replace the value, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        std::mem::replace(&mut *self.inner.write(), value)
    }

    /// Whether both bindings point at the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> Binding<T> {
    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.read().clone()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&*self.inner.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_value() {
        let binding = Binding::new(vec![1, 2]);
        let shared = binding.clone();

        shared.update(|v| v.push(3));

        assert_eq!(binding.get(), vec![1, 2, 3]);
        assert!(binding.ptr_eq(&shared));
        assert!(!binding.ptr_eq(&Binding::new(vec![1, 2, 3])));
    }

    #[test]
    fn replace_returns_previous_value() {
        let binding = Binding::new(String::from("old"));
        assert_eq!(binding.replace(String::from("new")), "old");
        assert_eq!(binding.with(|s| s.len()), 3);
    }
}
