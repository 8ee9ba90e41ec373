/// Trait for atomic elements that can be used in parsing
///
/// Classification is always done through [`Atomic::as_ascii`], so every
/// character class in this crate behaves the same regardless of process
/// locale or element type.
pub trait Atomic: Copy + Clone + PartialEq + std::fmt::Debug {
    /// The newline character/element for this atomic type
    const NEWLINE: Self;

    /// Project the element onto ASCII, or `None` when it lies outside it
    fn as_ascii(self) -> Option<u8>;

    /// Convert a slice of elements to a displayable string
    fn slice_to_string(slice: &[Self]) -> String;
}

impl Atomic for u8 {
    const NEWLINE: Self = b'\n';

    fn as_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }

    fn slice_to_string(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).to_string()
    }
}

impl Atomic for char {
    const NEWLINE: Self = '\n';

    fn as_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self as u8)
    }

    fn slice_to_string(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}
