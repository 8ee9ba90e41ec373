use crate::ascii::class::{is_digit, is_hex_digit, is_oct_digit};
use crate::ascii::scan::{ClassScanner, class0, class1};
use crate::atomic::Atomic;

/// Zero or more ASCII digits (`0-9`)
pub fn digit0<T: Atomic>() -> ClassScanner<T> {
    class0(is_digit)
}

/// One or more ASCII digits (`0-9`)
pub fn digit1<T: Atomic>() -> ClassScanner<T> {
    class1(is_digit)
}

/// Zero or more hexadecimal digits
pub fn hex_digit0<T: Atomic>() -> ClassScanner<T> {
    class0(is_hex_digit)
}

/// One or more hexadecimal digits
pub fn hex_digit1<T: Atomic>() -> ClassScanner<T> {
    class1(is_hex_digit)
}

/// Zero or more octal digits (`0-7`)
pub fn oct_digit0<T: Atomic>() -> ClassScanner<T> {
    class0(is_oct_digit)
}

/// One or more octal digits (`0-7`)
pub fn oct_digit1<T: Atomic>() -> ClassScanner<T> {
    class1(is_oct_digit)
}
