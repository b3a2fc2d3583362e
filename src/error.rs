use thiserror::Error;

/// Errors returned by the checked accessors of [`IndirectValue`].
///
/// [`IndirectValue`]: crate::IndirectValue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A checked accessor was called on a wrapper that holds no value.
    #[error("bad indirect value access: the wrapper is empty")]
    Empty,
}

/// A specialized `Result` type for checked access, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = core::result::Result<T, Error>;
