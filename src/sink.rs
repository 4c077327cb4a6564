//! Handing an assembled document to a file, a writer, or an HTTP response
//!
//! The document is complete before any byte leaves memory, so a failed
//! write never leaves behind a document that claims to be finished.
//!
//! # Example with Axum (`http` feature)
//!
//! ```ignore
//! use axum::response::{IntoResponse, Response};
//! use excelxml::{HttpDownload, Workbook};
//!
//! async fn download_report() -> Response {
//!     let mut workbook = Workbook::new();
//!     workbook
//!         .add_worksheet("Sales")
//!         .add_row(["Month", "Sales"])
//!         .add_row(vec![excelxml::CellValue::from("January"), 50000.into()]);
//!
//!     HttpDownload::new(workbook.finish(), "sales report").into_response()
//! }
//! ```

use crate::charset::encode_document;
use crate::error::{ExcelError, Result};
use crate::sanitize::{workbook_filename, DEFAULT_EXTENSION};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A fully assembled spreadsheet document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    xml: String,
    encoding: String,
}

impl XmlDocument {
    pub(crate) fn new(xml: String, encoding: String) -> Self {
        XmlDocument { xml, encoding }
    }

    /// The document as built, before transcoding
    pub fn as_str(&self) -> &str {
        &self.xml
    }

    /// Bytes in the encoding named by the XML declaration
    ///
    /// Borrows when no transcoding is needed (UTF-8 or an unknown label).
    ///
    /// # Examples
    ///
    /// ```
    /// use excelxml::Workbook;
    ///
    /// let mut workbook = Workbook::with_encoding("ISO-8859-1");
    /// workbook.add_worksheet("Café").add_row(["é"]);
    /// let document = workbook.finish();
    /// assert!(document.to_bytes().contains(&0xE9));
    /// ```
    pub fn to_bytes(&self) -> Cow<'_, [u8]> {
        encode_document(&self.xml, &self.encoding)
    }

    /// Owned bytes in the declared encoding
    pub fn into_bytes(self) -> Vec<u8> {
        self.to_bytes().into_owned()
    }

    /// Encoding named in the XML declaration
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// MIME type for serving this document
    pub fn content_type(&self) -> String {
        format!("application/vnd.ms-excel; charset={}", self.encoding)
    }

    /// Write the document to any writer and flush it
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.to_bytes();
        writer.write_all(&bytes)?;
        writer.flush()?;
        log::debug!("wrote {} bytes ({}) to writer", bytes.len(), self.encoding);
        Ok(())
    }

    /// Save the document at `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let writer = BufWriter::with_capacity(64 * 1024, file); // 64KB buffer
        self.write_to(writer)?;
        log::debug!("saved workbook to {}", path.display());
        Ok(())
    }

    /// Save into `dir` under a filename derived from `title`
    ///
    /// Returns the path that was written.
    pub fn save_to_dir<P: AsRef<Path>>(&self, dir: P, title: &str) -> Result<PathBuf> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ExcelError::WriteError(format!(
                "Target directory does not exist: {}",
                dir.display()
            )));
        }

        let path = dir.join(workbook_filename(title, DEFAULT_EXTENSION));
        self.save(&path)?;
        Ok(path)
    }
}

/// Everything needed to answer an HTTP request with a workbook download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpDownload {
    /// `Content-Type` header value
    pub content_type: String,
    /// `Content-Disposition` header value
    pub content_disposition: String,
    /// Sanitized filename offered to the client
    pub filename: String,
    /// Response body, in the document's declared encoding
    pub body: Vec<u8>,
}

impl HttpDownload {
    /// Prepare a download; the filename is derived from `title`
    ///
    /// # Examples
    ///
    /// ```
    /// use excelxml::{HttpDownload, Workbook};
    ///
    /// let download = HttpDownload::new(Workbook::new().finish(), "My Report #1");
    /// assert_eq!(download.filename, "MyReport1.xls");
    /// assert_eq!(download.content_type, "application/vnd.ms-excel; charset=UTF-8");
    /// ```
    pub fn new(document: XmlDocument, title: &str) -> Self {
        let filename = workbook_filename(title, DEFAULT_EXTENSION);
        HttpDownload {
            content_type: document.content_type(),
            content_disposition: format!("inline; filename=\"{}\"", filename),
            filename,
            body: document.into_bytes(),
        }
    }

    /// Headers as name/value pairs
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            ("Content-Type", self.content_type.as_str()),
            ("Content-Disposition", self.content_disposition.as_str()),
        ]
    }
}

#[cfg(feature = "http")]
impl axum::response::IntoResponse for HttpDownload {
    fn into_response(self) -> axum::response::Response {
        use axum::http::header;

        (
            [
                (header::CONTENT_TYPE, self.content_type),
                (header::CONTENT_DISPOSITION, self.content_disposition),
            ],
            self.body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::Workbook;
    use tempfile::TempDir;

    fn sample() -> XmlDocument {
        let mut workbook = Workbook::new();
        workbook.add_worksheet("Sheet1").add_row(["a", "b"]);
        workbook.finish()
    }

    #[test]
    fn test_write_to_vec() {
        let document = sample();
        let mut out = Vec::new();
        document.write_to(&mut out).unwrap();
        assert_eq!(out, document.as_str().as_bytes());
    }

    #[test]
    fn test_save_transcodes_to_declared_encoding() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.xls");
        let mut workbook = Workbook::with_encoding("ISO-8859-1");
        workbook.add_worksheet("Café").add_row(["crème", "中"]);
        let document = workbook.finish();
        document.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>"));
        assert!(bytes.windows(4).any(|w| w == b"Caf\xE9"));
        assert!(bytes.windows(6).any(|w| w == b"cr\xE8me<"));
        assert!(bytes.windows(8).any(|w| w == b"&#20013;"));
        assert!(!bytes.windows(2).any(|w| w == [0xC3, 0xA9]));
    }

    #[test]
    fn test_unknown_encoding_written_verbatim() {
        let mut workbook = Workbook::with_encoding("x-no-such-charset");
        workbook.add_worksheet("S").add_row(["é"]);
        let document = workbook.finish();
        assert_eq!(document.to_bytes().as_ref(), document.as_str().as_bytes());
    }

    #[test]
    fn test_save_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.xls");
        let document = sample();
        document.save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), document.as_str());
    }

    #[test]
    fn test_save_to_dir_sanitizes_name() {
        let dir = TempDir::new().unwrap();
        let path = sample().save_to_dir(dir.path(), "../Q3 report?").unwrap();
        assert_eq!(path, dir.path().join("..Q3report.xls"));
        assert!(path.is_file());
    }

    #[test]
    fn test_save_to_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = sample().save_to_dir(&missing, "x").unwrap_err();
        assert!(matches!(err, ExcelError::WriteError(_)));
    }

    #[test]
    fn test_save_failure_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = sample().save(dir.path()).unwrap_err();
        assert!(matches!(err, ExcelError::Io(_)));
    }

    #[test]
    fn test_http_download_headers() {
        let download = HttpDownload::new(Workbook::with_encoding("ISO-8859-1").finish(), "");
        assert_eq!(download.filename, "excel-export.xls");
        assert_eq!(
            download.headers(),
            [
                ("Content-Type", "application/vnd.ms-excel; charset=ISO-8859-1"),
                ("Content-Disposition", "inline; filename=\"excel-export.xls\""),
            ]
        );
        assert!(download.body.ends_with(b"</Workbook>"));
    }
}
