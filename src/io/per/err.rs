use backtrace::Backtrace;
use std::fmt::{Debug, Display, Formatter};

/// The single error type of every encode and decode operation. The [`ErrorKind`] is boxed
/// together with an unresolved [`Backtrace`] so that the `Result`s passed through the deeply
/// nested IE codecs stay one pointer wide.
pub struct Error(pub(crate) Box<Inner>);

impl Error {
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.0.kind
    }

    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.0.kind
    }

    /// Whether this error can be raised while decoding received bits. Range violations are
    /// reported by both directions: a constrained field may carry more bits than its bounds.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self.0.kind,
            ErrorKind::EndOfStream { .. }
                | ErrorKind::ValueNotInRange(..)
                | ErrorKind::SizeNotInRange(..)
                | ErrorKind::InvalidEnumerationIndex { .. }
                | ErrorKind::InvalidChoiceIndex { .. }
                | ErrorKind::ExtensionLengthOverrun { .. }
                | ErrorKind::UnknownExtensionValue { .. }
                | ErrorKind::Unsupported(_)
                | ErrorKind::InsufficientDataInSourceBuffer
        )
    }

    /// Whether this error can be raised while encoding a value
    pub fn is_encode_error(&self) -> bool {
        matches!(
            self.0.kind,
            ErrorKind::ValueNotInRange(..)
                | ErrorKind::SizeNotInRange(..)
                | ErrorKind::ChoiceVariantMismatch { .. }
                | ErrorKind::CapacityExceeded { .. }
                | ErrorKind::UnknownVariantNotEncodable { .. }
                | ErrorKind::InsufficientSpaceInDestinationBuffer
        )
    }

    #[cold]
    #[inline(never)]
    pub fn value_not_in_range(value: i64, min: i64, max: i64) -> Self {
        Self::from(ErrorKind::ValueNotInRange(value, min, max))
    }

    #[cold]
    #[inline(never)]
    pub fn size_not_in_range(size: u64, min: u64, max: u64) -> Self {
        Self::from(ErrorKind::SizeNotInRange(size, min, max))
    }

    #[cold]
    #[inline(never)]
    pub fn end_of_stream(requested: usize, available: usize) -> Self {
        Self::from(ErrorKind::EndOfStream {
            requested,
            available,
        })
    }

    #[cold]
    #[inline(never)]
    pub fn invalid_enumeration_index(name: &'static str, index: u64, count: u64) -> Self {
        Self::from(ErrorKind::InvalidEnumerationIndex { name, index, count })
    }

    #[cold]
    #[inline(never)]
    pub fn invalid_choice_index(name: &'static str, index: u64, count: u64) -> Self {
        Self::from(ErrorKind::InvalidChoiceIndex { name, index, count })
    }

    #[cold]
    #[inline(never)]
    pub fn unsupported(name: &'static str) -> Self {
        Self::from(ErrorKind::Unsupported(name))
    }

    #[cold]
    #[inline(never)]
    pub fn insufficient_space_in_destination_buffer() -> Self {
        Self::from(ErrorKind::InsufficientSpaceInDestinationBuffer)
    }

    #[cold]
    #[inline(never)]
    pub fn insufficient_data_in_source_buffer() -> Self {
        Self::from(ErrorKind::InsufficientDataInSourceBuffer)
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Error(Box::new(Inner::from(kind)))
    }
}

impl Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.0.kind)?;
        let mut backtrace = self.0.backtrace.clone();
        backtrace.resolve();
        writeln!(f, "{backtrace:?}")
    }
}

impl std::error::Error for Error {}

impl PartialEq<ErrorKind> for Error {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.0.kind.eq(other)
    }
}

#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) kind: ErrorKind,
    pub(crate) backtrace: Backtrace,
}

impl From<ErrorKind> for Inner {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("The value {0} is not within the inclusive range of {1} and {2}")]
    ValueNotInRange(i64, i64, i64),
    #[error("The size {0} is not within the inclusive range of {1} and {2}")]
    SizeNotInRange(u64, u64, u64),
    #[error("The stored variant of {name} does not match its discriminator {index}")]
    ChoiceVariantMismatch { name: &'static str, index: u64 },
    #[error("Encoding requires {required_bits} bits but the capacity is {capacity_bits} bits")]
    CapacityExceeded {
        capacity_bits: usize,
        required_bits: usize,
    },
    #[error("The unknown extension value of {name} cannot be encoded")]
    UnknownVariantNotEncodable { name: &'static str },
    #[error("Requested {requested} bits but only {available} bits are remaining")]
    EndOfStream { requested: usize, available: usize },
    #[error("Unexpected enumeration index {index} for {name} with {count} variants")]
    InvalidEnumerationIndex {
        name: &'static str,
        index: u64,
        count: u64,
    },
    #[error("Unexpected choice index {index} for {name} with {count} variants")]
    InvalidChoiceIndex {
        name: &'static str,
        index: u64,
        count: u64,
    },
    #[error("The extension of {name} claims {length_bits} bits but only {available_bits} bits are remaining")]
    ExtensionLengthOverrun {
        name: &'static str,
        length_bits: usize,
        available_bits: usize,
    },
    #[error("Received a value beyond the extension marker of {name} at index {index}")]
    UnknownExtensionValue { name: &'static str, index: u64 },
    #[error("{0} is present on the wire but not supported by this codec")]
    Unsupported(&'static str),
    #[error("There is insufficient space in the destination buffer for this operation")]
    InsufficientSpaceInDestinationBuffer,
    #[error("There is insufficient data in the source buffer for this operation")]
    InsufficientDataInSourceBuffer,
}
