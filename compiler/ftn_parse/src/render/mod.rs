//! Canonical source text for literal values.
//!
//! Each function produces text that the matching parser reads back to the
//! same value, under the same [`LexOptions`].

use std::fmt::Write;

use crate::LexOptions;

/// Quote `text` with `quote`, doubling embedded quotes.
///
/// With backslash escapes enabled, backslashes and control characters are
/// escaped too: mnemonics where one exists, three octal digits otherwise.
/// Without them the text is copied as-is, so a newline in `text` yields a
/// literal that does not parse.
pub fn quoted(text: &str, quote: char, options: LexOptions) -> String {
    let escapes = options.backslash_escapes();
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        if ch == quote {
            out.push(quote);
            out.push(quote);
            continue;
        }
        if !escapes {
            out.push(ch);
            continue;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\{:03o}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// `Z'..'` with upper-case hexadecimal digits.
pub fn boz_hex(value: u64) -> String {
    format!("Z'{value:X}'")
}

/// `nH` followed by `text`, counting characters.
pub fn hollerith(text: &str) -> String {
    format!("{}H{text}", text.chars().count())
}

/// Plain decimal digits.
pub fn digit_string(value: u64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests;
