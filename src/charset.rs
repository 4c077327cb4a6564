//! Transcoding an assembled document into its declared character set
//!
//! Documents are built as Rust strings (UTF-8). Before the bytes leave the
//! crate they are converted to whatever the XML declaration names, so the
//! declaration and the bytes always agree.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::borrow::Cow;

/// Encode `xml` in the character set named by `label`
///
/// Labels are looked up the way browsers do (`latin1`, `ISO-8859-1`,
/// `Shift_JIS`, ...). Characters the target charset cannot represent are
/// written as decimal character references such as `&#1046;`. An unknown
/// label leaves the UTF-8 bytes untouched.
///
/// # Examples
///
/// ```
/// use excelxml::charset::encode_document;
///
/// assert_eq!(encode_document("café", "ISO-8859-1").as_ref(), b"caf\xE9");
/// assert_eq!(encode_document("café", "UTF-8").as_ref(), "café".as_bytes());
/// ```
pub fn encode_document<'a>(xml: &'a str, label: &str) -> Cow<'a, [u8]> {
    let encoding = match Encoding::for_label(label.as_bytes()) {
        Some(encoding) => encoding,
        None => {
            log::warn!("unknown encoding label {:?}, writing UTF-8 bytes", label);
            return Cow::Borrowed(xml.as_bytes());
        }
    };

    if encoding == UTF_8 {
        return Cow::Borrowed(xml.as_bytes());
    }
    if encoding == UTF_16LE || encoding == UTF_16BE {
        return Cow::Owned(encode_utf16(xml, encoding == UTF_16BE, needs_bom(label)));
    }

    let (bytes, used, unmappable) = encoding.encode(xml);
    if used != encoding {
        log::warn!(
            "{} has no encoder, writing {} bytes",
            encoding.name(),
            used.name()
        );
    }
    if unmappable {
        log::debug!(
            "characters outside {} written as character references",
            encoding.name()
        );
    }
    bytes
}

// `UTF-16` needs a byte order mark; `UTF-16LE`/`UTF-16BE` state the order.
fn needs_bom(label: &str) -> bool {
    let label = label.trim().to_ascii_lowercase();
    label != "utf-16le" && label != "utf-16be"
}

fn encode_utf16(xml: &str, big_endian: bool, bom: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + xml.len() * 2);
    let units = bom.then_some('\u{FEFF}').into_iter().chain(xml.chars());
    let mut buf = [0u16; 2];
    for ch in units {
        for unit in ch.encode_utf16(&mut buf) {
            let bytes = if big_endian {
                unit.to_be_bytes()
            } else {
                unit.to_le_bytes()
            };
            out.extend_from_slice(&bytes);
        }
    }
    out
}
