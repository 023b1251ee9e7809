use {crate::common::indented_println, std::fmt::Debug};

/// How [`reverse_range`] walks the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Two cursors moving toward each other in a loop. Uses constant stack.
    #[default]
    TwoCursor,
    /// Swap the outermost pair, then recurse on the inner range.
    ///
    /// Recursion depth is `(end - start + 1).div_ceil(2)`, so very long
    /// ranges can exhaust the stack.
    Recursive,
}

/// Reverses `items[start..=end]` in place, leaving every other position untouched.
///
/// Does nothing when `start >= end`.
///
/// # Panics
///
/// Panics if `start < end` and `end` is out of bounds for `items`.
pub fn reverse_range<T: Debug>(items: &mut [T], start: usize, end: usize, strategy: Strategy) {
    match strategy {
        Strategy::TwoCursor => two_cursor(items, start, end),
        Strategy::Recursive => recursive(items, start, end, 0),
    }
}

fn two_cursor<T: Debug>(items: &mut [T], mut start: usize, mut end: usize) {
    while start < end {
        swap(items, start, end, 0);
        start += 1;
        end -= 1;
    }
}

fn recursive<T: Debug>(items: &mut [T], start: usize, end: usize, depth: usize) {
    if start >= end {
        return;
    }
    swap(items, start, end, depth);
    recursive(items, start + 1, end - 1, depth + 1);
}

fn swap<T: Debug>(items: &mut [T], i: usize, j: usize, depth: usize) {
    items.swap(i, j);
    indented_println!(depth, "swap {i} <-> {j}: {:?} {:?}", items[i], items[j]);
}
