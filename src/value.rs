use std::fmt::{self, Display};

/// Scalar cell value threaded through the pipeline
///
/// Nulls are first-class: a missing cell is `Null`, never a sentinel
/// string or a magic number. Numeric accessors treat `Int64` and
/// `Float64` interchangeably where a float view is enough.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// 64-bit integer
    Int64(i64),
    /// 64-bit float
    Float64(f64),
    /// UTF-8 text
    Text(String),
    /// Missing value
    Null,
}

impl DataValue {
    /// Whether this cell is missing
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Numeric view of the value, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Int64(v) => Some(*v as f64),
            DataValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer view of the value, if it is an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DataValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view of the value, if it is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether the value is Int64 or Float64
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataValue::Int64(_) | DataValue::Float64(_))
    }
}

impl Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Int64(v) => write!(f, "{}", v),
            DataValue::Float64(v) => write!(f, "{}", v),
            DataValue::Text(s) => write!(f, "{}", s),
            DataValue::Null => write!(f, "NULL"),
        }
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        DataValue::Int64(value)
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Float64(value)
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::Text(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::Text(value.to_string())
    }
}

impl<T> From<Option<T>> for DataValue
where
    T: Into<DataValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => DataValue::Null,
        }
    }
}
