/// A read position inside one [`AssetReader`](crate::AssetReader) view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    offset: usize,
}

impl Cursor {
    #[inline]
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn move_forward(&mut self, bytes: usize) {
        self.offset += bytes;
    }

    /// Advance to the next multiple of `size`.
    ///
    /// This always moves: an already aligned cursor skips a whole `size` bytes.
    /// `align_to(0)` does nothing.
    pub fn align_to(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.offset += size - self.offset % size;
    }
}
