mod input;

pub use input::{read_char, read_word};

use {
    std::io::{BufRead, Write},
    textbuf::{CharBuffer, Strategy, DEFAULT_CAPACITY},
};

#[derive(Debug, Clone, Copy)]
pub struct ReverseOptions {
    pub capacity: usize,
    pub strategy: Strategy,
}

impl Default for ReverseOptions {
    fn default() -> Self {
        ReverseOptions {
            capacity: DEFAULT_CAPACITY,
            strategy: Strategy::default(),
        }
    }
}

/// Prompts for a word, reverses it in place and prints it.
///
/// Returns the reversed buffer.
pub fn reverse_session(
    stdin: &mut impl BufRead,
    stdout: &mut impl Write,
    options: &ReverseOptions,
) -> anyhow::Result<CharBuffer> {
    write!(stdout, "Enter any string:")?;
    stdout.flush()?;
    let mut buffer = read_word(stdin, options.capacity)?;
    buffer.reverse_with(options.strategy);
    writeln!(stdout, "\nReversed String is: {buffer}")?;
    Ok(buffer)
}

/// Prompts for a single character and prints its numeric code.
pub fn code_session(stdin: &mut impl BufRead, stdout: &mut impl Write) -> anyhow::Result<char> {
    write!(stdout, "Enter any character:")?;
    stdout.flush()?;
    let c = read_char(stdin)?;
    let table = if c.is_ascii() { "ASCII" } else { "Unicode" };
    writeln!(stdout, "{table} value of character {c} is: {}", u32::from(c))?;
    Ok(c)
}
