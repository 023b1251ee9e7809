use {
    std::{cell::Cell, sync::atomic::Ordering},
    textbuf::common::{debug_enabled, debug_println, DEBUG},
};

#[test]
fn debug_println_is_usable_outside_the_crate_and_gated_by_the_flag() {
    let evaluated = Cell::new(0);
    let touch = || {
        evaluated.set(evaluated.get() + 1);
        "touched"
    };

    DEBUG.store(false, Ordering::Relaxed);
    assert!(!debug_enabled());
    debug_println!("{}", touch());
    assert_eq!(evaluated.get(), 0);

    DEBUG.store(true, Ordering::Relaxed);
    assert!(debug_enabled());
    debug_println!("{}", touch());
    assert_eq!(evaluated.get(), 1);
    DEBUG.store(false, Ordering::Relaxed);
}
