//! Cell encoding
//!
//! Every cell becomes `<Cell><Data ss:Type="…">…</Data></Cell>`. Integers
//! and finite floats are tagged `Number`; everything else is escaped text
//! tagged `String`.

use crate::types::CellValue;
use crate::xml_writer::XmlWriter;

/// Value of the `ss:Type` attribute on a `Data` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    String,
    Number,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Number => "Number",
        }
    }

    /// Data type a value is written with
    pub fn of(value: &CellValue) -> DataType {
        if value.is_number() {
            DataType::Number
        } else {
            DataType::String
        }
    }
}

/// Write one cell fragment
pub fn encode_cell(value: &CellValue, writer: &mut XmlWriter) {
    writer.open_element("Cell");
    writer.start_element("Data");
    writer.attribute("ss:Type", DataType::of(value).as_str());
    writer.close_start_tag();

    match value {
        CellValue::Empty => {}
        CellValue::String(s) => writer.write_escaped(s),
        CellValue::Int(i) => {
            let mut buf = itoa::Buffer::new();
            writer.write_raw(buf.format(*i));
        }
        // Display for f64 is locale independent and never uses exponents
        CellValue::Float(f) if f.is_finite() => writer.write_raw(&f.to_string()),
        CellValue::Float(f) => writer.write_escaped(&f.to_string()),
    }

    writer.end_element("Data");
    writer.end_element("Cell");
}

/// Encode one cell into a standalone string
///
/// # Examples
///
/// ```
/// use excelxml::encoder::encode_cell_to_string;
/// use excelxml::CellValue;
///
/// assert_eq!(
///     encode_cell_to_string(&CellValue::Int(42)),
///     "<Cell><Data ss:Type=\"Number\">42</Data></Cell>"
/// );
/// ```
pub fn encode_cell_to_string(value: &CellValue) -> String {
    let mut writer = XmlWriter::with_capacity(64);
    encode_cell(value, &mut writer);
    writer.into_string()
}
