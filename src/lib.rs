//! # excelxml
//!
//! Build Excel XML Spreadsheet 2003 documents from in-memory tables.
//!
//! ## Features
//!
//! - **Typed Cells**: Integers and floats become `Number` cells, text becomes escaped `String` cells
//! - **Safe Names**: Worksheet titles and download filenames are sanitized to what Excel accepts
//! - **Multiple Sheets**: Worksheets keep the order they were added in
//! - **Any Charset**: Output bytes are transcoded to the encoding named in the XML declaration
//! - **Deterministic**: The same workbook always renders to the same bytes
//! - **Sinks**: Save to disk, write to any `io::Write`, or answer an HTTP request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use excelxml::{CellValue, Workbook};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut workbook = Workbook::new();
//!
//! workbook
//!     .add_worksheet("Sales/Report?")
//!     .add_row(["Name", "Total"])
//!     .add_row(vec![CellValue::from("Widgets"), CellValue::Int(150)]);
//!
//! let document = workbook.finish();
//! document.save("report.xls")?;
//! # Ok(())
//! # }
//! ```

pub mod charset;
pub mod document;
pub mod encoder;
pub mod error;
pub mod sanitize;
pub mod sink;
pub mod types;
pub mod workbook;
pub mod worksheet;
pub mod xml_writer;

pub use error::{ExcelError, Result};
pub use sink::{HttpDownload, XmlDocument};
pub use types::{CellValue, Row};
pub use workbook::{Workbook, WorkbookBuilder, WorkbookOptions};
pub use worksheet::Worksheet;
