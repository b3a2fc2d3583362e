//! Copy and delete policies.
//!
//! An [`IndirectValue`] never allocates or frees its pointee by itself. Copying goes through a
//! [`Copier`] and releasing goes through a [`Deleter`], so a wrapper can own values that live in
//! a custom allocator, carry per-instance bookkeeping, or are trait objects that only a
//! hand-written copier knows how to duplicate.
//!
//! The two policies of one wrapper form a pair: every allocation the copier hands out must be
//! releasable by the deleter.
//!
//! [`IndirectValue`]: crate::IndirectValue

use alloc::boxed::Box;
use core::ptr::NonNull;

/// Produces a new owned allocation that is a deep copy of an existing pointee.
///
/// # Safety
///
/// `copy` must return a pointer to a fully initialized `T` that nothing else owns or aliases,
/// and that the [`Deleter`] paired with this copier can release. Returning a dangling or shared
/// pointer lets safe code observe freed memory through the wrapper.
///
/// # Example
///
/// ```
/// use core::ptr::NonNull;
/// use indirect_value::{Copier, DefaultDelete, IndirectValue};
///
/// trait Shape {
///     fn area(&self) -> f64;
///     fn boxed_clone(&self) -> Box<dyn Shape>;
/// }
///
/// #[derive(Clone)]
/// struct Square(f64);
///
/// impl Shape for Square {
///     fn area(&self) -> f64 {
///         self.0 * self.0
///     }
///     fn boxed_clone(&self) -> Box<dyn Shape> {
///         Box::new(self.clone())
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct ShapeCopier;
///
/// unsafe impl Copier<dyn Shape> for ShapeCopier {
///     fn copy(&self, value: &dyn Shape) -> NonNull<dyn Shape> {
///         NonNull::from(Box::leak(value.boxed_clone()))
///     }
/// }
///
/// type AnyShape = IndirectValue<dyn Shape, ShapeCopier, DefaultDelete>;
///
/// let square = AnyShape::from_box(Box::new(Square(2.0)));
/// let copy = square.clone();
/// assert_eq!(copy.area(), 4.0);
/// ```
pub unsafe trait Copier<T: ?Sized> {
    /// Allocates a copy of `value`. Panics raised here propagate to the caller unchanged.
    fn copy(&self, value: &T) -> NonNull<T>;
}

/// Releases an allocation owned by an [`IndirectValue`](crate::IndirectValue).
///
/// # Safety
///
/// Implementors must release exactly the allocation they are given, and must be able to release
/// every allocation produced by the [`Copier`] they are paired with, as well as every allocation
/// adopted through [`IndirectValue::from_raw_parts`](crate::IndirectValue::from_raw_parts).
pub unsafe trait Deleter<T: ?Sized> {
    /// Destroys the pointee and frees its memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be an allocation this deleter is able to release and must not be used again
    /// afterwards. The wrapper calls this at most once per allocation.
    unsafe fn delete(&self, ptr: NonNull<T>);
}

/// Copies the pointee onto the global heap with [`Clone`], the same way `Box::new(v.clone())`
/// does.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultCopy;

unsafe impl<T: Clone> Copier<T> for DefaultCopy {
    #[inline]
    fn copy(&self, value: &T) -> NonNull<T> {
        // The clone runs before anything is allocated, so a panicking `Clone` leaks nothing.
        let copy = value.clone();
        NonNull::from(Box::leak(Box::new(copy)))
    }
}

/// Releases a pointee that was allocated as a [`Box`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultDelete;

unsafe impl<T: ?Sized> Deleter<T> for DefaultDelete {
    #[inline]
    unsafe fn delete(&self, ptr: NonNull<T>) {
        // Safety: the caller hands over a box-allocated pointer exactly once.
        drop(unsafe { Box::from_raw(ptr.as_ptr()) });
    }
}
