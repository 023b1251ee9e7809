pub(crate) use textbuf::common::{debug_println, DEBUG};
