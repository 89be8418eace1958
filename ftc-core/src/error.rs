use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A read or rebase that does not fit in the view. `offset` is view-local;
    /// `base` is where the view starts in the underlying buffer.
    #[error("out of range: {len} byte(s) at offset {offset:#x} (view base {base:#x}, size {size:#x})")]
    OutOfRange {
        offset: usize,
        len: usize,
        base: usize,
        size: usize,
    },

    #[error("unsupported integer width: {0} byte(s)")]
    UnsupportedWidth(usize),
}

pub type Result<T> = std::result::Result<T, AssetError>;
