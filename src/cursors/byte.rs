use crate::cursors::View;

/// A specialized view for byte data (u8)
pub type ByteView<'code> = View<'code, u8>;

/// A specialized view for decoded character data
pub type CharView<'code> = View<'code, char>;
