//! Type-erased identity for picker options.
//!
//! Option identifiers come from the caller's value type, which the styles
//! never see. [`AnyHashable`] boxes any hashable value behind a uniform
//! handle so options of any source type compare and hash the same way.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

trait HashableBox: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn hash_value(&self, hasher: &mut dyn Hasher);
    fn eq_box(&self, other: &dyn HashableBox) -> bool;
    fn type_name(&self) -> &'static str;
}

struct ConcreteBox<T> {
    value: T,
}

impl<T> HashableBox for ConcreteBox<T>
where
    T: Hash + Eq + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        &self.value
    }

    fn hash_value(&self, mut hasher: &mut dyn Hasher) {
        self.value.hash(&mut hasher);
    }

    fn eq_box(&self, other: &dyn HashableBox) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self.value == *other)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A hashable value of any concrete type.
///
/// Two wrappers are equal only when they hold the same concrete type and the
/// wrapped values are equal. Clones share the boxed value.
#[derive(Clone)]
pub struct AnyHashable {
    inner: Arc<dyn HashableBox>,
}

impl AnyHashable {
    /// Wrap a value.
    pub fn new<T>(value: T) -> Self
    where
        T: Hash + Eq + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(ConcreteBox { value }),
        }
    }

    /// Borrow the wrapped value if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }

    /// Whether the wrapped value is a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.inner.as_any().is::<T>()
    }

    fn value_type_id(&self) -> TypeId {
        self.inner.as_any().type_id()
    }
}

impl PartialEq for AnyHashable {
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_box(other.inner.as_ref())
    }
}

impl Eq for AnyHashable {}

impl Hash for AnyHashable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal wrappers always share a type, so mixing the type id in keeps
        // the hash consistent with equality.
        self.value_type_id().hash(state);
        self.inner.hash_value(state);
    }
}

impl fmt::Debug for AnyHashable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyHashable")
            .field(&self.inner.type_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Fruit {
        Apple,
        Banana,
        Cherry,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Wrapped(u8);

    #[test]
    fn equal_values_produce_equal_identities() {
        let a = AnyHashable::new(Fruit::Apple);
        let b = AnyHashable::new(Fruit::Apple);
        let c = AnyHashable::new(Fruit::Banana);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn different_types_never_compare_equal() {
        assert_ne!(AnyHashable::new(1_u8), AnyHashable::new(1_u16));
        assert_ne!(AnyHashable::new(7_u8), AnyHashable::new(Wrapped(7)));
        assert_ne!(
            AnyHashable::new("apple".to_string()),
            AnyHashable::new("apple")
        );
    }

    #[test]
    fn distinct_enum_cases_hash_to_distinct_entries() {
        let ids: HashSet<AnyHashable> = [Fruit::Apple, Fruit::Banana, Fruit::Cherry]
            .into_iter()
            .map(AnyHashable::new)
            .collect();
        assert_eq!(ids.len(), 3);

        let mut with_duplicate = ids.clone();
        with_duplicate.insert(AnyHashable::new(Fruit::Banana));
        assert_eq!(with_duplicate.len(), 3);
    }

    #[test]
    fn downcast_returns_wrapped_value() {
        let id = AnyHashable::new(Fruit::Cherry);
        assert!(id.is::<Fruit>());
        assert!(!id.is::<Wrapped>());
        assert_eq!(id.downcast_ref::<Fruit>(), Some(&Fruit::Cherry));
        assert_eq!(id.downcast_ref::<u8>(), None);
    }

    #[test]
    fn clones_stay_equal() {
        let id = AnyHashable::new(String::from("banana"));
        let copy = id.clone();
        assert_eq!(id, copy);
        assert!(format!("{copy:?}").contains("String"));
    }
}
