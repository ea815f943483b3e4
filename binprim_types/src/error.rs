use std::borrow::Cow;
use std::str::Utf8Error;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure raised by the encoder, the decoder, or a [`crate::format::Format`] hook.
///
/// All of these are terminal for the operation that raised them.
/// Nothing is retried, and no partially decoded value is handed back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("Truncated input: need {needed} bytes at offset {offset}, but only {remaining} remain")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Incorrect value for {what}: {value}")]
    InvalidValue { what: &'static str, value: u64 },

    #[error("Invalid UTF-8 text at offset {offset}")]
    InvalidUtf8 {
        offset: usize,
        #[source]
        source: Utf8Error,
    },

    #[error("Invalid encoded char at offset {offset}")]
    InvalidChar { offset: usize },

    #[error("Length value out of range: {0}")]
    LengthOutOfRange(u64),

    #[error("Malformed {what} encoding: {reason}")]
    MalformedEncoding {
        what: &'static str,
        reason: &'static str,
    },

    #[error("Exceeded maximum container depth {max}")]
    DepthExceeded { max: usize },

    #[error("Error while decoding map: keys are not serialized in the expected order")]
    NonCanonicalOrder,

    #[error("Invalid {what} range {start}..{end}: only {limit} bytes are available")]
    InvalidRange {
        what: &'static str,
        start: usize,
        end: usize,
        limit: usize,
    },

    #[error("Some input bytes were not read: {0} remaining")]
    TrailingBytes(usize),

    #[error("Invalid codec config: {0}")]
    InvalidConfig(Cow<'static, str>),
}

impl Error {
    #[cold]
    pub fn truncated(offset: usize, needed: usize, remaining: usize) -> Self {
        Self::Truncated {
            offset,
            needed,
            remaining,
        }
    }

    #[cold]
    pub fn invalid_value(what: &'static str, value: impl Into<u64>) -> Self {
        Self::InvalidValue {
            what,
            value: value.into(),
        }
    }

    #[cold]
    pub fn malformed(what: &'static str, reason: &'static str) -> Self {
        Self::MalformedEncoding { what, reason }
    }

    #[cold]
    pub fn length_out_of_range(len: impl TryInto<u64>) -> Self {
        Self::LengthOutOfRange(len.try_into().unwrap_or(u64::MAX))
    }

    #[cold]
    pub fn invalid_range(what: &'static str, range: std::ops::Range<usize>, limit: usize) -> Self {
        Self::InvalidRange {
            what,
            start: range.start,
            end: range.end,
            limit,
        }
    }

    #[cold]
    pub fn invalid_config(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
