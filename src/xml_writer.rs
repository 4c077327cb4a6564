//! In-memory XML writer
//!
//! Appends markup to a growing `String`. Writing to memory cannot fail, so
//! none of the methods return a `Result`.

/// XML writer backed by a `String` buffer
#[derive(Debug, Default)]
pub struct XmlWriter {
    buffer: String,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::with_capacity(8192)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        XmlWriter {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Write markup verbatim
    #[inline]
    pub fn write_raw(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    /// Write XML element start tag (left open for attributes)
    #[inline]
    pub fn start_element(&mut self, name: &str) {
        self.buffer.push('<');
        self.buffer.push_str(name);
    }

    /// Close start tag
    #[inline]
    pub fn close_start_tag(&mut self) {
        self.buffer.push('>');
    }

    /// Write a start tag without attributes
    #[inline]
    pub fn open_element(&mut self, name: &str) {
        self.start_element(name);
        self.close_start_tag();
    }

    /// Write XML element end tag
    #[inline]
    pub fn end_element(&mut self, name: &str) {
        self.buffer.push_str("</");
        self.buffer.push_str(name);
        self.buffer.push('>');
    }

    /// Write attribute with escaped value
    #[inline]
    pub fn attribute(&mut self, name: &str, value: &str) {
        self.buffer.push(' ');
        self.buffer.push_str(name);
        self.buffer.push_str("=\"");
        self.escape(value, true);
        self.buffer.push('"');
    }

    /// Write a line break
    #[inline]
    pub fn newline(&mut self) {
        self.buffer.push('\n');
    }

    /// Write text content with XML escaping
    pub fn write_escaped(&mut self, text: &str) {
        self.escape(text, false);
    }

    // Parsers turn a literal CR into LF, and tab/LF inside attribute values
    // into spaces; character references survive both.
    fn escape(&mut self, text: &str, in_attribute: bool) {
        for ch in text.chars() {
            match ch {
                '&' => self.buffer.push_str("&amp;"),
                '<' => self.buffer.push_str("&lt;"),
                '>' => self.buffer.push_str("&gt;"),
                '"' => self.buffer.push_str("&quot;"),
                '\'' => self.buffer.push_str("&apos;"),
                '\r' => self.buffer.push_str("&#13;"),
                '\n' if in_attribute => self.buffer.push_str("&#10;"),
                '\t' if in_attribute => self.buffer.push_str("&#9;"),
                c if is_xml_char(c) => self.buffer.push(c),
                _ => continue,
            }
        }
    }

    /// Take the written markup
    pub fn into_string(self) -> String {
        self.buffer
    }
}

/// Whether `c` may appear in an XML 1.0 document
///
/// Control characters other than tab, LF and CR are not allowed, nor are
/// the noncharacters U+FFFE and U+FFFF.
#[inline]
pub(crate) fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        c => c >= '\u{20}',
    }
}
