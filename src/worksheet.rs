//! Worksheets and the row/table builder

use crate::encoder::encode_cell;
use crate::sanitize::sanitize_worksheet_title;
use crate::types::{CellValue, Row};
use crate::xml_writer::XmlWriter;

/// A named group of rows
///
/// The title is kept exactly as supplied; only its sanitized form is ever
/// written to the document.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worksheet {
    title: String,
    rows: Vec<Row>,
}

impl Worksheet {
    /// Create an empty worksheet
    pub fn new(title: impl Into<String>) -> Self {
        Worksheet {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    /// Title as supplied by the caller
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title as written to the document
    pub fn sanitized_title(&self) -> String {
        sanitize_worksheet_title(&self.title)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Append a row
    ///
    /// # Examples
    ///
    /// ```
    /// use excelxml::Worksheet;
    ///
    /// let mut sheet = Worksheet::new("Sales");
    /// sheet.add_row(["Name", "Total"]);
    /// sheet.add_row(vec![excelxml::CellValue::from("Widgets"), 150.into()]);
    /// assert_eq!(sheet.row_count(), 2);
    /// ```
    pub fn add_row<I, V>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.rows.push(cells.into_iter().collect());
        self
    }

    /// Append several rows
    pub fn add_rows<R, I, V>(&mut self, rows: R) -> &mut Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        for row in rows {
            self.add_row(row);
        }
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Write this worksheet's `Worksheet`/`Table`/`Row` fragment
    ///
    /// With `convert_types`, numeric-looking text cells are written as
    /// numbers. Rows are not padded to a common width.
    pub fn write_xml(&self, writer: &mut XmlWriter, convert_types: bool) {
        let name = self.sanitized_title();
        log::trace!("writing worksheet {:?} as {:?}", self.title, name);

        writer.start_element("Worksheet");
        writer.attribute("ss:Name", &name);
        writer.close_start_tag();
        writer.newline();
        writer.open_element("Table");
        writer.newline();

        for row in &self.rows {
            writer.open_element("Row");
            writer.newline();
            for cell in &row.cells {
                if convert_types {
                    encode_cell(&cell.converted(), writer);
                } else {
                    encode_cell(cell, writer);
                }
                writer.newline();
            }
            writer.end_element("Row");
            writer.newline();
        }

        writer.end_element("Table");
        writer.newline();
        writer.end_element("Worksheet");
        writer.newline();
    }

    /// Render this worksheet's fragment into a string
    pub fn to_xml(&self, convert_types: bool) -> String {
        let mut writer = XmlWriter::new();
        self.write_xml(&mut writer, convert_types);
        writer.into_string()
    }
}

/// Build a worksheet fragment from a title and rows in one call
///
/// # Examples
///
/// ```
/// use excelxml::worksheet::build_worksheet;
///
/// let xml = build_worksheet("Totals", vec![vec![1, 2]], false);
/// assert!(xml.starts_with("<Worksheet ss:Name=\"Totals\">"));
/// ```
pub fn build_worksheet<R, I, V>(title: &str, rows: R, convert_types: bool) -> String
where
    R: IntoIterator<Item = I>,
    I: IntoIterator<Item = V>,
    V: Into<CellValue>,
{
    let mut sheet = Worksheet::new(title);
    sheet.add_rows(rows);
    sheet.to_xml(convert_types)
}
