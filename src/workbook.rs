//! Workbook accumulation and the builder used to configure it

use crate::document::{assemble, DEFAULT_ENCODING};
use crate::sink::XmlDocument;
use crate::types::CellValue;
use crate::worksheet::Worksheet;

/// Settings fixed when a workbook is created
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorkbookOptions {
    /// Character encoding named in the XML declaration (default: UTF-8)
    ///
    /// Cell values are expected to already be in this encoding.
    pub encoding: String,
    /// Write numeric-looking text cells as numbers (default: false)
    pub convert_types: bool,
}

impl Default for WorkbookOptions {
    fn default() -> Self {
        WorkbookOptions {
            encoding: DEFAULT_ENCODING.to_string(),
            convert_types: false,
        }
    }
}

/// A workbook being filled with worksheets
///
/// Call [`Workbook::finish`] to turn it into an [`XmlDocument`].
///
/// # Examples
///
/// ```
/// use excelxml::{CellValue, Workbook};
///
/// let mut workbook = Workbook::new();
/// workbook
///     .add_worksheet("Sales/Report?")
///     .add_row(["Name", "Total"])
///     .add_row(vec![CellValue::from("Widgets"), CellValue::Int(150)]);
///
/// let document = workbook.finish();
/// assert!(document.as_str().contains("<Worksheet ss:Name=\"SalesReport\">"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    options: WorkbookOptions,
    worksheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create a UTF-8 workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workbook using another character encoding
    pub fn with_encoding(encoding: impl Into<String>) -> Self {
        WorkbookBuilder::new().encoding(encoding).build()
    }

    pub fn with_options(options: WorkbookOptions) -> Self {
        Workbook {
            options,
            worksheets: Vec::new(),
        }
    }

    pub fn builder() -> WorkbookBuilder {
        WorkbookBuilder::new()
    }

    pub fn encoding(&self) -> &str {
        &self.options.encoding
    }

    pub fn options(&self) -> &WorkbookOptions {
        &self.options
    }

    /// Append an empty worksheet and return it for filling
    pub fn add_worksheet(&mut self, title: impl Into<String>) -> &mut Worksheet {
        self.push_worksheet(Worksheet::new(title))
    }

    /// Append a worksheet built elsewhere
    pub fn push_worksheet(&mut self, worksheet: Worksheet) -> &mut Worksheet {
        let index = self.worksheets.len();
        self.worksheets.push(worksheet);
        &mut self.worksheets[index]
    }

    /// Append a worksheet holding a whole 2-D array
    pub fn add_array<R, I, V>(&mut self, title: impl Into<String>, rows: R) -> &mut Worksheet
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let sheet = self.add_worksheet(title);
        sheet.add_rows(rows);
        sheet
    }

    /// Worksheets in tab order
    pub fn worksheets(&self) -> &[Worksheet] {
        &self.worksheets
    }

    pub fn worksheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Render the document without consuming the workbook
    pub fn render(&self) -> String {
        assemble(
            &self.options.encoding,
            &self.worksheets,
            self.options.convert_types,
        )
    }

    /// Assemble the final document
    ///
    /// The workbook is consumed; nothing can be added afterwards.
    pub fn finish(self) -> XmlDocument {
        let xml = self.render();
        XmlDocument::new(xml, self.options.encoding)
    }
}

/// Builder for creating configured workbooks
#[derive(Debug, Clone, Default)]
pub struct WorkbookBuilder {
    options: WorkbookOptions,
}

impl WorkbookBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character encoding
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.options.encoding = encoding.into();
        self
    }

    /// Write numeric-looking text cells as numbers
    pub fn convert_types(mut self, convert: bool) -> Self {
        self.options.convert_types = convert;
        self
    }

    /// Build the workbook
    pub fn build(self) -> Workbook {
        Workbook::with_options(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let workbook = Workbook::new();
        assert_eq!(workbook.encoding(), "UTF-8");
        assert!(!workbook.options().convert_types);
        assert_eq!(workbook.worksheet_count(), 0);
    }

    #[test]
    fn test_builder() {
        let workbook = Workbook::builder()
            .encoding("ISO-8859-1")
            .convert_types(true)
            .build();
        assert_eq!(workbook.encoding(), "ISO-8859-1");
        assert!(workbook.options().convert_types);
        assert!(workbook
            .render()
            .starts_with("<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>"));
    }

    #[test]
    fn test_add_array() {
        let mut workbook = Workbook::new();
        workbook.add_array("Grid", vec![vec![1, 2], vec![3]]);
        let sheet = &workbook.worksheets()[0];
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.rows()[1].cells, vec![CellValue::Int(3)]);
    }

    #[test]
    fn test_push_worksheet_keeps_order() {
        let mut workbook = Workbook::with_encoding("UTF-16");
        workbook.push_worksheet(Worksheet::new("first"));
        workbook.add_worksheet("second");
        let titles: Vec<_> = workbook.worksheets().iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut workbook = Workbook::new();
        workbook.add_worksheet("Data").add_row(["x", "y"]);
        assert_eq!(workbook.render(), workbook.render());
        let rendered = workbook.render();
        assert_eq!(workbook.finish().as_str(), rendered);
    }
}
