//! # IndirectValue: Heap Storage with Value Semantics
//!
//! [`IndirectValue`] owns one heap-allocated value but behaves like the value itself: cloning
//! the wrapper deep-copies the pointee, moving it moves ownership, and dropping it frees the
//! pointee. It lets a type embed large, recursive or trait-object members while still deriving
//! [`Clone`], [`PartialEq`], [`Ord`] and [`Hash`] as if the member were stored inline.
//!
//! ## Core Concept
//!
//! A [`Box`] already owns a heap value, but it cannot be empty and offers no way to plug in how
//! the value is copied or freed. An [`Rc`](alloc::rc::Rc) can be copied cheaply, but copies share
//! one pointee. [`IndirectValue`] sits between the two: every copy gets its own allocation,
//! the wrapper may be empty, and both copying and freeing go through policy objects.
//!
//! ## Quick Start
//!
//! ```rust
//! use indirect_value::IndirectValue;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Node {
//!     name: String,
//!     // Recursive members need indirection; this one still clones deeply.
//!     next: IndirectValue<Node>,
//! }
//!
//! let tail = Node { name: "tail".into(), next: IndirectValue::empty() };
//! let head = Node { name: "head".into(), next: IndirectValue::new(tail) };
//!
//! let mut copy = head.clone();
//! copy.next.name = "changed".into();
//!
//! assert_eq!(head.next.name, "tail");
//! assert_ne!(head, copy);
//! ```
//!
//! ## Emptiness
//!
//! A wrapper is empty after [`Default`], [`IndirectValue::take`] or [`IndirectValue::reset`].
//! Dereferencing an empty wrapper panics; the checked accessors return [`Error::Empty`] instead:
//!
//! ```rust
//! use indirect_value::{Error, IndirectValue, Null};
//!
//! let empty = IndirectValue::<u32>::default();
//! assert!(!empty.has_value());
//! assert!(empty == Null);
//! assert_eq!(empty.value(), Err(Error::Empty));
//! ```
//!
//! Empty wrappers compare equal to each other and sort before every non-empty wrapper.
//!
//! ## Method Resolution
//!
//! `IndirectValue<T>` dereferences to `T`, so method calls on the wrapper reach the pointee.
//! To keep it that way, operations on the wrapper itself whose names are common on other types
//! are associated functions, in the style of [`Box::into_raw`]:
//!
//! ```rust
//! use indirect_value::IndirectValue;
//!
//! let mut items = IndirectValue::new(vec![1, 2, 3]);
//! items.swap(0, 2);
//! assert_eq!(items.get(0), Some(&3));
//!
//! let mut other = IndirectValue::new(vec![]);
//! IndirectValue::swap(&mut items, &mut other);
//! assert!(items.is_empty() && other.len() == 3);
//! ```
//!
//! ## Policies
//!
//! The copy policy `C` implements [`Copier`] and the delete policy `D` implements [`Deleter`].
//! The defaults, [`DefaultCopy`] and [`DefaultDelete`], clone into and free from a [`Box`] and
//! take no space: `IndirectValue<T>` is exactly one pointer wide.
//!
//! Stateful policies are stored inline and reachable through [`IndirectValue::copier`] and
//! [`IndirectValue::deleter`]. A custom copier is also how trait objects become clonable:
//! see the [`Copier`] documentation for an example.
//!
//! ## Feature Flags
//!
//! - **`std`** (enabled by default)
//!   - Links to the standard library
//!   - Disable for `#![no_std]` environments: `default-features = false`

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::as_conversions)]

extern crate alloc;

mod cmp;
mod error;
mod hash;
mod indirect_value;
mod policy;
mod storage;

pub use crate::cmp::Null;
pub use crate::error::{Error, Result};
pub use crate::indirect_value::IndirectValue;
pub use crate::policy::{Copier, DefaultCopy, DefaultDelete, Deleter};
