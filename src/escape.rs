//! Encoding of arbitrary bytes as Rust literal text.

use std::io::{self, Write};

const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";

/// Writes every byte as a `\xHH` escape.
///
/// The output is valid inside a byte string literal whatever the input, so
/// it is used for gzip payloads and for zero-copy payloads whose length has
/// to match the recorded size exactly.
pub struct HexWriter<W: Write> {
    inner: W,
    count: usize,
}

impl<W: Write> HexWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }

    /// Number of source bytes written so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<W: Write> Write for HexWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let mut escaped = Vec::with_capacity(buf.len() * 4);
        for &b in buf {
            escaped.extend_from_slice(&[
                b'\\',
                b'x',
                LOWER_HEX[usize::from(b >> 4)],
                LOWER_HEX[usize::from(b & 0x0f)],
            ]);
        }
        self.inner.write_all(&escaped)?;
        self.count += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Returns an expression of type `&'static [u8]` for `data`.
///
/// Text without NUL bytes becomes raw string pieces joined with `concat!`.
/// Characters a raw string cannot carry verbatim (the `"` delimiter, a
/// carriage return, a byte order mark, bidi controls) are cut out and
/// reinserted as escaped pieces. Anything else becomes a fully escaped
/// byte string.
pub fn quoted_literal(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(text) if !data.contains(&0) => text_literal(text),
        _ => format!("b\"{}\"", data.escape_ascii()),
    }
}

fn text_literal(text: &str) -> String {
    let mut pieces: Vec<String> = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if let Some(escaped) = break_out(c) {
            if start < i {
                pieces.push(format!("r\"{}\"", &text[start..i]));
            }
            pieces.push(escaped);
            start = i + c.len_utf8();
        }
    }
    if start < text.len() || pieces.is_empty() {
        pieces.push(format!("r\"{}\"", &text[start..]));
    }
    if pieces.len() == 1 {
        format!("{}.as_bytes()", pieces[0])
    } else {
        format!("concat!({}).as_bytes()", pieces.join(", "))
    }
}

fn break_out(c: char) -> Option<String> {
    match c {
        '"' => Some(r#""\"""#.to_string()),
        '\r' => Some(r#""\r""#.to_string()),
        '\u{feff}' | '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}' => {
            Some(format!("\"\\u{{{:x}}}\"", u32::from(c)))
        }
        _ => None,
    }
}
