//! LIMIT / OFFSET operands

use std::fmt;

/// Operand of LIMIT or OFFSET: an integer or a numeric string.
///
/// The value is kept as text and is not parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBound(String);

impl RowBound {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! row_bound_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for RowBound {
                fn from(value: $int) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

row_bound_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<&str> for RowBound {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RowBound {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_string_forms_match() {
        assert_eq!(RowBound::from(10u32), RowBound::from("10"));
        assert_eq!(RowBound::from(5i64).to_string(), "5");
        assert_eq!(RowBound::from(String::from("25")).as_str(), "25");
    }
}
