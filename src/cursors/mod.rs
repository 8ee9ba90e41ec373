pub mod byte;
pub mod view;

pub use byte::{ByteView, CharView};
pub use view::View;
