use core::fmt;

/// Configuration errors rejected by [`crate::Waterfall::new`] and
/// [`crate::Waterfall::set_options`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaterfallError {
    ZeroColumns,
    ZeroPageSize,
    ZeroChunkThreshold,
}

impl fmt::Display for WaterfallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => f.write_str("column count must be at least 1"),
            Self::ZeroPageSize => {
                f.write_str("page size must be at least 1 (use `None` to disable pagination)")
            }
            Self::ZeroChunkThreshold => f.write_str("chunk threshold must be at least 1"),
        }
    }
}

impl core::error::Error for WaterfallError {}
