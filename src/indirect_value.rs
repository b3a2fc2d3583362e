use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ops;
use core::ptr::{self, NonNull};

use scopeguard::ScopeGuard;

use crate::error::{Error, Result};
use crate::policy::{Copier, DefaultCopy, DefaultDelete, Deleter};
use crate::storage::PolicyStorage;

/// A heap-allocated value with value semantics.
///
/// `IndirectValue` owns at most one `T` on the heap. Cloning it deep-copies the pointee through
/// the copy policy `C`, dropping it releases the pointee through the delete policy `D`, and no two
/// wrappers ever share an allocation. A wrapper may also be empty, which is what
/// [`Default`] produces and what [`IndirectValue::take`] leaves behind.
///
/// # Example
///
/// ```
/// use indirect_value::IndirectValue;
///
/// let original = IndirectValue::new(42);
/// let mut copy = original.clone();
/// *copy += 1;
///
/// assert_eq!(*original, 42);
/// assert_eq!(*copy, 43);
/// ```
pub struct IndirectValue<T: ?Sized, C = DefaultCopy, D: Deleter<T> = DefaultDelete> {
    ptr: Option<NonNull<T>>,
    copier: PolicyStorage<C>,
    deleter: PolicyStorage<D>,
    _phantom: PhantomData<T>,
}

impl<T: ?Sized, C, D: Deleter<T>> IndirectValue<T, C, D> {
    /// Creates an empty wrapper with default policies. Nothing is allocated.
    #[inline]
    pub fn empty() -> Self
    where
        C: Default,
        D: Default,
    {
        IndirectValue::with_policies(C::default(), D::default())
    }

    /// Creates an empty wrapper that will use the given policies once it holds a value.
    #[inline]
    pub const fn with_policies(copier: C, deleter: D) -> Self {
        IndirectValue {
            ptr: None,
            copier: PolicyStorage::new(copier),
            deleter: PolicyStorage::new(deleter),
            _phantom: PhantomData,
        }
    }

    /// Takes ownership of an existing allocation.
    ///
    /// A null `ptr` produces an empty wrapper. The pointer type must be exactly `*mut T`; a
    /// pointer to some other type is never accepted implicitly.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point to a fully initialized `T` that `deleter` can release, and no
    /// one else may own or use it afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use indirect_value::{DefaultCopy, DefaultDelete, IndirectValue};
    ///
    /// let raw = Box::into_raw(Box::new(String::from("adopted")));
    /// let value = unsafe { IndirectValue::from_raw_parts(raw, DefaultCopy, DefaultDelete) };
    /// assert_eq!(value.value().map(String::as_str), Ok("adopted"));
    /// ```
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut T, copier: C, deleter: D) -> Self {
        IndirectValue {
            ptr: NonNull::new(ptr),
            copier: PolicyStorage::new(copier),
            deleter: PolicyStorage::new(deleter),
            _phantom: PhantomData,
        }
    }

    /// Gives up ownership of the pointee and returns it together with both policies.
    ///
    /// The caller becomes responsible for releasing the returned allocation.
    ///
    /// This is an associated function so it never hides a method of the pointee; call it as
    /// `IndirectValue::into_raw_parts(v)`.
    #[inline]
    pub fn into_raw_parts(this: Self) -> (Option<NonNull<T>>, C, D) {
        let this = ManuallyDrop::new(this);
        // Safety: `this` is never dropped, so each field is read out exactly once.
        unsafe {
            (
                this.ptr,
                ptr::read(&this.copier).into_inner(),
                ptr::read(&this.deleter).into_inner(),
            )
        }
    }

    /// Returns true if the wrapper holds a value.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.ptr.is_some()
    }

    /// Returns the address of the pointee, or `None` when empty.
    ///
    /// Two wrappers never report the same address while both are alive.
    #[inline]
    pub fn as_ptr(this: &Self) -> Option<NonNull<T>> {
        this.ptr
    }

    /// Returns a reference to the pointee, or `None` when empty.
    #[inline]
    pub fn get(this: &Self) -> Option<&T> {
        // Safety: a non-null handle always points to a live, exclusively owned value.
        this.ptr.map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Returns a mutable reference to the pointee, or `None` when empty.
    #[inline]
    pub fn get_mut(this: &mut Self) -> Option<&mut T> {
        // Safety: as in `get`, and the exclusive borrow guarantees exclusive access.
        this.ptr.map(|mut ptr| unsafe { ptr.as_mut() })
    }

    /// Returns a reference to the pointee.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the wrapper holds no value.
    #[inline]
    pub fn value(&self) -> Result<&T> {
        IndirectValue::get(self).ok_or(Error::Empty)
    }

    /// Returns a mutable reference to the pointee.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the wrapper holds no value.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T> {
        IndirectValue::get_mut(self).ok_or(Error::Empty)
    }

    /// Returns a reference to the pointee without checking for emptiness.
    ///
    /// # Safety
    ///
    /// The wrapper must hold a value.
    #[inline]
    pub unsafe fn get_unchecked(this: &Self) -> &T {
        debug_assert!(this.has_value(), "get_unchecked on an empty IndirectValue");
        unsafe { this.ptr.unwrap_unchecked().as_ref() }
    }

    /// Returns a mutable reference to the pointee without checking for emptiness.
    ///
    /// # Safety
    ///
    /// The wrapper must hold a value.
    #[inline]
    pub unsafe fn get_unchecked_mut(this: &mut Self) -> &mut T {
        debug_assert!(this.has_value(), "get_unchecked_mut on an empty IndirectValue");
        unsafe { this.ptr.unwrap_unchecked().as_mut() }
    }

    /// The copy policy.
    #[inline]
    pub fn copier(&self) -> &C {
        self.copier.get()
    }

    /// The copy policy, mutably. Useful for stateful policies such as allocator handles.
    #[inline]
    pub fn copier_mut(&mut self) -> &mut C {
        self.copier.get_mut()
    }

    /// The delete policy.
    #[inline]
    pub fn deleter(&self) -> &D {
        self.deleter.get()
    }

    /// The delete policy, mutably.
    #[inline]
    pub fn deleter_mut(&mut self) -> &mut D {
        self.deleter.get_mut()
    }

    /// Releases the pointee, if any, leaving the wrapper empty. The policies are kept.
    #[inline]
    pub fn reset(this: &mut Self) {
        // The handle is cleared before the deleter runs: if the deleter panics, the wrapper is
        // left empty rather than dangling and is never released twice.
        if let Some(ptr) = this.ptr.take() {
            // Safety: `ptr` was owned by this wrapper and is released exactly once.
            unsafe { this.deleter.get().delete(ptr) };
        }
    }

    /// Moves the pointee and clones of the policies into a new wrapper, leaving `this` empty.
    ///
    /// No allocation or copy of the pointee takes place.
    #[inline]
    pub fn take(this: &mut Self) -> Self
    where
        C: Clone,
        D: Clone,
    {
        IndirectValue {
            copier: this.copier.clone(),
            deleter: this.deleter.clone(),
            ptr: this.ptr.take(),
            _phantom: PhantomData,
        }
    }

    /// Exchanges the pointees and policies of two wrappers.
    ///
    /// Only handles move; the allocations themselves stay where they are.
    #[inline]
    pub fn swap(this: &mut Self, other: &mut Self) {
        core::mem::swap(&mut this.copier, &mut other.copier);
        core::mem::swap(&mut this.deleter, &mut other.deleter);
        core::mem::swap(&mut this.ptr, &mut other.ptr);
    }

    fn make_raw_copy(&self) -> Option<NonNull<T>>
    where
        C: Copier<T>,
    {
        IndirectValue::get(self).map(|value| self.copier.get().copy(value))
    }
}

impl<T> IndirectValue<T> {
    /// Moves `val` to the heap.
    ///
    /// # Example
    ///
    /// ```
    /// use indirect_value::IndirectValue;
    ///
    /// let value = IndirectValue::new(vec![1, 2, 3]);
    /// assert!(value.has_value());
    /// assert_eq!(value.len(), 3);
    /// ```
    #[inline]
    pub fn new(val: T) -> Self {
        IndirectValue::from_box(Box::new(val))
    }

    /// Builds the pointee with `f` and moves it to the heap.
    ///
    /// If `f` panics nothing has been allocated yet.
    #[inline]
    pub fn new_with<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        IndirectValue::new(f())
    }
}

impl<T, C> IndirectValue<T, C, DefaultDelete> {
    /// Moves the pointee out of the heap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the wrapper holds no value.
    #[inline]
    pub fn into_value(this: Self) -> Result<T> {
        IndirectValue::into_box(this).map(|boxed| *boxed).ok_or(Error::Empty)
    }
}

impl<T: ?Sized, C> IndirectValue<T, C, DefaultDelete> {
    /// Adopts a boxed value without copying or reallocating it.
    #[inline]
    pub fn from_box(boxed: Box<T>) -> Self
    where
        C: Default,
    {
        IndirectValue {
            ptr: Some(NonNull::from(Box::leak(boxed))),
            copier: PolicyStorage::default(),
            deleter: PolicyStorage::default(),
            _phantom: PhantomData,
        }
    }

    /// Converts the wrapper back into a [`Box`], or `None` when empty.
    #[inline]
    pub fn into_box(this: Self) -> Option<Box<T>> {
        let (ptr, _, _) = IndirectValue::into_raw_parts(this);
        // Safety: with the default delete policy every pointee is a leaked box.
        ptr.map(|ptr| unsafe { Box::from_raw(ptr.as_ptr()) })
    }
}

#[cold]
#[track_caller]
fn empty_access() -> ! {
    panic!("{}", Error::Empty)
}

impl<T: ?Sized, C, D: Deleter<T>> ops::Deref for IndirectValue<T, C, D> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if the wrapper is empty. Use [`IndirectValue::value`] to get an error instead.
    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        match IndirectValue::get(self) {
            Some(value) => value,
            None => empty_access(),
        }
    }
}

impl<T: ?Sized, C, D: Deleter<T>> ops::DerefMut for IndirectValue<T, C, D> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match IndirectValue::get_mut(self) {
            Some(value) => value,
            None => empty_access(),
        }
    }
}

impl<T: ?Sized, C, D: Deleter<T>> ops::Drop for IndirectValue<T, C, D> {
    fn drop(&mut self) {
        IndirectValue::reset(self);
    }
}

impl<T: ?Sized, C: Default, D: Deleter<T> + Default> Default for IndirectValue<T, C, D> {
    #[inline]
    fn default() -> Self {
        IndirectValue::empty()
    }
}

impl<T, C, D> Clone for IndirectValue<T, C, D>
where
    T: ?Sized,
    C: Copier<T> + Clone,
    D: Deleter<T> + Clone,
{
    fn clone(&self) -> Self {
        // Policies first: if cloning them panics, no copy of the pointee exists yet.
        let copier = self.copier.clone();
        let deleter = self.deleter.clone();
        IndirectValue {
            ptr: self.make_raw_copy(),
            copier,
            deleter,
            _phantom: PhantomData,
        }
    }

    /// Copy-assigns `source` into `self`.
    ///
    /// If copying the pointee panics, `self` is left untouched. If assigning the policies panics,
    /// `self` is left empty and the fresh copy is released.
    fn clone_from(&mut self, source: &Self) {
        let copy = scopeguard::guard(source.make_raw_copy(), |copy| {
            if let Some(ptr) = copy {
                // Safety: the copy came from the source's copier, which pairs with its deleter.
                unsafe { source.deleter.get().delete(ptr) };
            }
        });

        IndirectValue::reset(self);
        self.copier.clone_from(&source.copier);
        self.deleter.clone_from(&source.deleter);
        self.ptr = ScopeGuard::into_inner(copy);
    }
}

impl<T, C: Default> From<T> for IndirectValue<T, C, DefaultDelete> {
    #[inline]
    fn from(val: T) -> Self {
        IndirectValue::from_box(Box::new(val))
    }
}

impl<T: ?Sized, C: Default> From<Box<T>> for IndirectValue<T, C, DefaultDelete> {
    #[inline]
    fn from(boxed: Box<T>) -> Self {
        IndirectValue::from_box(boxed)
    }
}

impl<T: ?Sized, C, D: Deleter<T>> From<&IndirectValue<T, C, D>> for bool {
    #[inline]
    fn from(value: &IndirectValue<T, C, D>) -> bool {
        value.has_value()
    }
}

impl<T: ?Sized + fmt::Debug, C, D: Deleter<T>> fmt::Debug for IndirectValue<T, C, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match IndirectValue::get(self) {
            Some(value) => f.debug_tuple("IndirectValue").field(&value).finish(),
            None => f.write_str("IndirectValue(<empty>)"),
        }
    }
}

impl<T: ?Sized, C, D: Deleter<T>> fmt::Pointer for IndirectValue<T, C, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptr: *const u8 = match self.ptr {
            Some(ptr) => ptr.as_ptr().cast::<u8>().cast_const(),
            None => ptr::null(),
        };
        fmt::Pointer::fmt(&ptr, f)
    }
}

unsafe impl<T: ?Sized + Send, C: Send, D: Deleter<T> + Send> Send for IndirectValue<T, C, D> {}
unsafe impl<T: ?Sized + Sync, C: Sync, D: Deleter<T> + Sync> Sync for IndirectValue<T, C, D> {}
