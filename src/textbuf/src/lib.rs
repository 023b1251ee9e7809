pub mod buffer;
pub mod common;
mod reverse;

pub use {
    buffer::{BufferOverflow, CharBuffer, DEFAULT_CAPACITY},
    reverse::{reverse_range, Strategy},
};
