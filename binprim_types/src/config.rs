use crate::error::{Error, Result};
use crate::format::Format;

/// Container depth used when the caller does not pick one.
/// Matches the canonical format's hard ceiling.
pub const DEFAULT_MAX_CONTAINER_DEPTH: usize = 500;

/// Construction-time settings for one [`crate::Encoder`] or [`crate::Decoder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// How many containers may be nested before encoding or decoding fails.
    pub max_container_depth: usize,
    /// Whether a top-level decode fails when input bytes are left over.
    pub reject_trailing_bytes: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_container_depth: DEFAULT_MAX_CONTAINER_DEPTH,
            reject_trailing_bytes: true,
        }
    }
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_container_depth(mut self, max_container_depth: usize) -> Self {
        self.max_container_depth = max_container_depth;
        self
    }

    pub fn with_trailing_bytes_allowed(mut self) -> Self {
        self.reject_trailing_bytes = false;
        self
    }

    /// Checks the depth against what `format` can honor.
    pub fn validate<F: Format>(&self, format: &F) -> Result<()> {
        if self.max_container_depth == 0 {
            return Err(Error::invalid_config(
                "max_container_depth must be positive",
            ));
        }
        let ceiling = format.max_container_depth();
        if self.max_container_depth > ceiling {
            return Err(Error::invalid_config(format!(
                "max_container_depth {} exceeds the format's limit {}",
                self.max_container_depth, ceiling
            )));
        }
        Ok(())
    }
}
