use {
    crate::{
        common::debug_println,
        reverse::{reverse_range, Strategy},
    },
    derive_more::Display,
};

/// Capacity of the buffer used when none is given: 149 characters plus the
/// reserved terminator slot.
pub const DEFAULT_CAPACITY: usize = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(
    "input of {len} characters does not fit in a buffer of capacity {capacity} (at most {} characters)",
    capacity.saturating_sub(1)
)]
pub struct BufferOverflow {
    pub capacity: usize,
    pub len: usize,
}

impl std::error::Error for BufferOverflow {}

/// Fixed-capacity text storage.
///
/// One slot of `capacity` is reserved for a terminator, so the buffer holds
/// at most `capacity - 1` characters. Every write is length-checked first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharBuffer {
    chars: Vec<char>,
    capacity: usize,
}

impl CharBuffer {
    pub fn new(capacity: usize) -> Self {
        CharBuffer {
            chars: Vec::new(),
            capacity,
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    pub fn from_str_with_capacity(text: &str, capacity: usize) -> Result<Self, BufferOverflow> {
        let mut buffer = Self::new(capacity);
        buffer.check_fits(text.chars().count())?;
        buffer.chars.extend(text.chars());
        Ok(buffer)
    }

    pub fn push(&mut self, c: char) -> Result<(), BufferOverflow> {
        self.check_fits(1)?;
        self.chars.push(c);
        Ok(())
    }

    fn check_fits(&self, additional: usize) -> Result<(), BufferOverflow> {
        let len = self.chars.len() + additional;
        if len > self.max_len() {
            debug_println!("rejecting {len} characters for capacity {}", self.capacity);
            return Err(BufferOverflow {
                capacity: self.capacity,
                len,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_len(&self) -> usize {
        self.capacity.saturating_sub(1)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn as_mut_slice(&mut self) -> &mut [char] {
        &mut self.chars
    }

    pub fn reverse(&mut self) {
        self.reverse_with(Strategy::default());
    }

    pub fn reverse_with(&mut self, strategy: Strategy) {
        // empty buffers have no last index
        if let Some(end) = self.chars.len().checked_sub(1) {
            self.reverse_range(0, end, strategy);
        }
    }

    /// See [`reverse_range`](crate::reverse_range) for the panic conditions.
    pub fn reverse_range(&mut self, start: usize, end: usize, strategy: Strategy) {
        reverse_range(&mut self.chars, start, end, strategy);
    }
}

impl Default for CharBuffer {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl TryFrom<&str> for CharBuffer {
    type Error = BufferOverflow;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::from_str_with_capacity(text, DEFAULT_CAPACITY)
    }
}

impl std::fmt::Display for CharBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use std::fmt::Write;
        for &c in &self.chars {
            f.write_char(c)?;
        }
        Ok(())
    }
}
