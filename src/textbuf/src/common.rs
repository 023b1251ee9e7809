use std::sync::atomic::{AtomicBool, Ordering};

pub static DEBUG: AtomicBool = AtomicBool::new(false);

pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::common::debug_enabled() {
            println!($($arg)*);
        }
    };
}

/// Like `debug_println!`, indented four spaces per `depth`.
macro_rules! indented_println {
    ($depth:expr, $($arg:tt)*) => {
        if $crate::common::debug_enabled() {
            println!("{:width$}{}", "", format_args!($($arg)*), width = $depth * 4);
        }
    };
}

pub use crate::debug_println;
pub(crate) use indented_println;
