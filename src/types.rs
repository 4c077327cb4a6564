//! Type definitions for spreadsheet data

/// A single cell value in a worksheet
///
/// `Int` and `Float` are written as `Number` cells, everything else as
/// `String` cells.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
}

impl CellValue {
    /// Infer a typed value from text
    ///
    /// Text that parses as an integer becomes `Int`, text that parses as a
    /// finite float becomes `Float`, anything else stays a `String`.
    /// Surrounding whitespace makes a value non-numeric.
    ///
    /// # Examples
    ///
    /// ```
    /// use excelxml::CellValue;
    ///
    /// assert_eq!(CellValue::infer("42"), CellValue::Int(42));
    /// assert_eq!(CellValue::infer("3.5"), CellValue::Float(3.5));
    /// assert_eq!(CellValue::infer("N/A"), CellValue::String("N/A".to_string()));
    /// ```
    pub fn infer(text: &str) -> CellValue {
        if let Ok(i) = text.parse::<i64>() {
            return CellValue::Int(i);
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => CellValue::Float(f),
            _ => CellValue::String(text.to_string()),
        }
    }

    /// Re-tag a numeric-looking `String` as a number, leave other values alone
    pub fn converted(&self) -> std::borrow::Cow<'_, CellValue> {
        match self {
            CellValue::String(s) => match CellValue::infer(s) {
                CellValue::String(_) => std::borrow::Cow::Borrowed(self),
                typed => std::borrow::Cow::Owned(typed),
            },
            _ => std::borrow::Cow::Borrowed(self),
        }
    }

    /// Whether this value is written as a `Number` cell
    pub fn is_number(&self) -> bool {
        match self {
            CellValue::Int(_) => true,
            CellValue::Float(f) => f.is_finite(),
            _ => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::String(s.clone())
    }
}

impl From<char> for CellValue {
    fn from(c: char) -> Self {
        CellValue::String(c.to_string())
    }
}

// Booleans have no Number form in this dialect.
impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::String(b.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<f32> for CellValue {
    fn from(f: f32) -> Self {
        CellValue::Float(f64::from(f))
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

macro_rules! from_lossless_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(i: $t) -> Self {
                    CellValue::Int(i64::from(i))
                }
            }
        )*
    };
}

// Values outside the i64 range fall back to a float.
macro_rules! from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(i: $t) -> Self {
                    i64::try_from(i).map_or(CellValue::Float(i as f64), CellValue::Int)
                }
            }
        )*
    };
}

from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);
from_wide_int!(u64, usize, isize, i128, u128);

/// A row of cells
///
/// Rows carry no index; their position in the worksheet is their identity.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Cells in column order
    pub cells: Vec<CellValue>,
}

impl<T: Into<CellValue>> FromIterator<T> for Row {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Row {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}
