use {
    anyhow::Context,
    std::io::{self, BufRead, ErrorKind},
    textbuf::CharBuffer,
};

/// Reads the next whitespace-delimited word into a buffer of `capacity`.
///
/// Leading whitespace, blank lines included, is skipped. Reading stops at the
/// first whitespace after the word, or with [`BufferOverflow`](textbuf::BufferOverflow)
/// as soon as a character does not fit; nothing past that character is
/// consumed. End of input yields the word read so far.
pub fn read_word(stdin: &mut impl BufRead, capacity: usize) -> anyhow::Result<CharBuffer> {
    let mut buffer = CharBuffer::new(capacity);
    loop {
        match next_char(stdin).context("failed to read from stdin")? {
            None => break,
            Some(c) if c.is_whitespace() => {
                if !buffer.is_empty() {
                    break;
                }
            }
            Some(c) => buffer.push(c)?,
        }
    }
    Ok(buffer)
}

/// Reads the next character of input, whitespace included.
pub fn read_char(stdin: &mut impl BufRead) -> anyhow::Result<char> {
    next_char(stdin)
        .context("failed to read from stdin")?
        .context("no character was entered")
}

/// Decodes one UTF-8 character, consuming only its bytes.
fn next_char(stdin: &mut impl BufRead) -> io::Result<Option<char>> {
    let Some(first) = next_byte(stdin)? else {
        return Ok(None);
    };
    let width = match first {
        0x00..=0x7f => return Ok(Some(char::from(first))),
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => return Err(invalid_utf8()),
    };
    let mut bytes = [first, 0, 0, 0];
    for byte in &mut bytes[1..width] {
        *byte = next_byte(stdin)?.ok_or_else(invalid_utf8)?;
    }
    std::str::from_utf8(&bytes[..width])
        .ok()
        .and_then(|s| s.chars().next())
        .map(Some)
        .ok_or_else(invalid_utf8)
}

fn next_byte(stdin: &mut impl BufRead) -> io::Result<Option<u8>> {
    let byte = loop {
        match stdin.fill_buf() {
            Ok(buf) => break buf.first().copied(),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    };
    if byte.is_some() {
        stdin.consume(1);
    }
    Ok(byte)
}

fn invalid_utf8() -> io::Error {
    io::Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8")
}
