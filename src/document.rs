//! Document assembly
//!
//! Wraps worksheet fragments in the fixed XML Spreadsheet 2003 header and
//! footer.

use crate::worksheet::Worksheet;
use crate::xml_writer::XmlWriter;

/// Default character encoding named in the XML declaration
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Root element opening tag with the spreadsheet namespaces
pub const WORKBOOK_OPEN_TAG: &str = "<Workbook xmlns=\"urn:schemas-microsoft-com:office:spreadsheet\" \
xmlns:x=\"urn:schemas-microsoft-com:office:excel\" \
xmlns:ss=\"urn:schemas-microsoft-com:office:spreadsheet\" \
xmlns:html=\"http://www.w3.org/TR/REC-html40\">";

/// Root element closing tag
pub const WORKBOOK_CLOSE_TAG: &str = "</Workbook>";

/// Write the XML declaration and root opening tag
///
/// The encoding is written verbatim.
pub fn write_header(encoding: &str, writer: &mut XmlWriter) {
    writer.write_raw("<?xml version=\"1.0\" encoding=\"");
    writer.write_raw(encoding);
    writer.write_raw("\"?>");
    writer.newline();
    writer.write_raw(WORKBOOK_OPEN_TAG);
    writer.newline();
}

/// Assemble a complete document
///
/// Deterministic: the same inputs always give the same bytes.
///
/// # Examples
///
/// ```
/// use excelxml::document::assemble;
///
/// let xml = assemble("UTF-8", &[], false);
/// assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Workbook"));
/// assert!(xml.ends_with("</Workbook>"));
/// ```
pub fn assemble(encoding: &str, worksheets: &[Worksheet], convert_types: bool) -> String {
    let mut writer = XmlWriter::new();
    write_header(encoding, &mut writer);
    for sheet in worksheets {
        sheet.write_xml(&mut writer, convert_types);
    }
    writer.write_raw(WORKBOOK_CLOSE_TAG);

    let xml = writer.into_string();
    log::debug!(
        "assembled {} worksheet(s) into {} bytes ({})",
        worksheets.len(),
        xml.len(),
        encoding
    );
    xml
}
