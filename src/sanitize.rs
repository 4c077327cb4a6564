//! Workbook and worksheet name sanitization
//!
//! Both sanitizers delete characters instead of replacing them, never fail,
//! and are idempotent.

use crate::xml_writer::is_xml_char;

/// Maximum worksheet name length accepted by Excel
pub const MAX_WORKSHEET_TITLE_LEN: usize = 31;

/// Characters Excel rejects in worksheet names
pub const FORBIDDEN_WORKSHEET_CHARS: [char; 8] = ['\\', '|', ':', '/', '?', '*', '[', ']'];

/// Filename used when a workbook title sanitizes to nothing
pub const DEFAULT_WORKBOOK_TITLE: &str = "excel-export";

/// Extension used for downloads and saved files
pub const DEFAULT_EXTENSION: &str = "xls";

/// Keep only `[A-Za-z0-9_.-]`
///
/// # Examples
///
/// ```
/// use excelxml::sanitize::sanitize_workbook_title;
///
/// assert_eq!(sanitize_workbook_title("My Report #1.xlsx!"), "MyReport1.xlsx");
/// ```
pub fn sanitize_workbook_title(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

/// Remove `\ | : / ? * [ ]`, then keep the first 31 characters
///
/// Characters XML cannot carry are removed as well. Removed characters do
/// not count toward the length limit, so the result is exactly what ends up
/// in the document.
///
/// # Examples
///
/// ```
/// use excelxml::sanitize::sanitize_worksheet_title;
///
/// assert_eq!(sanitize_worksheet_title("Sales/Report?"), "SalesReport");
/// ```
pub fn sanitize_worksheet_title(name: &str) -> String {
    name.chars()
        .filter(|c| !FORBIDDEN_WORKSHEET_CHARS.contains(c) && is_xml_char(*c))
        .take(MAX_WORKSHEET_TITLE_LEN)
        .collect()
}

/// Derive a download/file name from a workbook title
///
/// Falls back to [`DEFAULT_WORKBOOK_TITLE`] when nothing but dots survives
/// sanitization, so the result never names `.` or `..`. The extension is
/// appended unless the name already ends with it.
pub fn workbook_filename(title: &str, extension: &str) -> String {
    let mut name = sanitize_workbook_title(title);
    if name.chars().all(|c| c == '.') {
        log::warn!(
            "workbook title {:?} has no usable characters, using {:?}",
            title,
            DEFAULT_WORKBOOK_TITLE
        );
        name = DEFAULT_WORKBOOK_TITLE.to_string();
    }

    let extension = sanitize_workbook_title(extension.trim_start_matches('.'));
    if extension.is_empty() {
        return name;
    }

    let suffix = format!(".{}", extension);
    if !name.to_ascii_lowercase().ends_with(&suffix.to_ascii_lowercase()) {
        name.push_str(&suffix);
    }
    name
}
