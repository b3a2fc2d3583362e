use core::hash::{BuildHasher, Hash, Hasher};

use crate::policy::Deleter;
use crate::IndirectValue;

/// Hashes the pointee, or a fixed `0u64` when empty.
///
/// Only wrappers whose pointee is [`Hash`] are hashable, so a `HashSet<IndirectValue<f64>>` is
/// rejected at compile time rather than hashing by address.
impl<T: ?Sized + Hash, C, D: Deleter<T>> Hash for IndirectValue<T, C, D> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        match IndirectValue::get(self) {
            Some(value) => value.hash(state),
            None => state.write_u64(0),
        }
    }
}

impl<T: ?Sized + Hash, C, D: Deleter<T>> IndirectValue<T, C, D> {
    /// Hashes the pointee with `build`, returning `0` for an empty wrapper.
    ///
    /// A non-empty wrapper hashes exactly like its pointee.
    ///
    /// ```
    /// use std::collections::hash_map::RandomState;
    /// use std::hash::BuildHasher;
    ///
    /// use indirect_value::IndirectValue;
    ///
    /// let state = RandomState::new();
    /// let value = IndirectValue::new("key");
    ///
    /// assert_eq!(value.hash_with(&state), state.hash_one("key"));
    /// assert_eq!(IndirectValue::<&str>::empty().hash_with(&state), 0);
    /// ```
    #[inline]
    pub fn hash_with<S: BuildHasher>(&self, build: &S) -> u64 {
        IndirectValue::get(self).map_or(0, |value| build.hash_one(value))
    }
}
