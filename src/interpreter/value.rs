use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

pub const DIVIDE_BY_ZERO: &str = "DIVIDE BY ZERO";

/// Result of evaluating an expression or a statement.
///
/// `Empty` is what a statement produces when it ran; `Error` marks a failed
/// operation and suppresses the side effect of whatever statement receives it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Integer(i32),
    String(String),
    Error(Option<String>),
    Empty,
}

impl Value {
    pub fn error(message: &str) -> Value {
        Value::Error(Some(message.to_owned()))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    fn repeat(text: &str, count: i32) -> Value {
        Value::String(if count > 0 { text.repeat(count as usize) } else { String::new() })
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::String(value) => f.write_str(value),
            Value::Error(_) | Value::Empty => Ok(()),
        }
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Integer(left), Value::Integer(right)) => Value::Integer(left.wrapping_add(right)),
            (Value::String(mut left), Value::String(right)) => {
                left.push_str(&right);
                Value::String(left)
            },
            _ => Value::Error(None),
        }
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Integer(left), Value::Integer(right)) => Value::Integer(left.wrapping_sub(right)),
            _ => Value::Error(None),
        }
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Integer(left), Value::Integer(right)) => Value::Integer(left.wrapping_mul(right)),
            (Value::Integer(count), Value::String(text))
            | (Value::String(text), Value::Integer(count)) => Value::repeat(&text, count),
            _ => Value::Error(None),
        }
    }
}

impl Div for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Integer(_), Value::Integer(0)) => Value::error(DIVIDE_BY_ZERO),
            (Value::Integer(left), Value::Integer(right)) => Value::Integer(left.wrapping_div(right)),
            // Removes the first occurrence; a missing needle leaves the text as it is
            (Value::String(mut left), Value::String(right)) => {
                if let Some(index) = left.find(right.as_str()) {
                    left.replace_range(index..index + right.len(), "");
                }

                Value::String(left)
            },
            _ => Value::Error(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(text: &str) -> Value {
        Value::String(text.to_owned())
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(Value::Integer(7) + Value::Integer(5), Value::Integer(12));
        assert_eq!(Value::Integer(7) - Value::Integer(5), Value::Integer(2));
        assert_eq!(Value::Integer(7) * Value::Integer(5), Value::Integer(35));
        assert_eq!(Value::Integer(7) / Value::Integer(2), Value::Integer(3));
        assert_eq!(Value::Integer(-7) / Value::Integer(2), Value::Integer(-3));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Value::Integer(6) / Value::Integer(0), Value::error(DIVIDE_BY_ZERO));
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(Value::Integer(i32::MAX) + Value::Integer(1), Value::Integer(i32::MIN));
        assert_eq!(Value::Integer(i32::MIN) / Value::Integer(-1), Value::Integer(i32::MIN));
    }

    #[test]
    fn test_string_operators() {
        assert_eq!(string("ab") + string("cd"), string("abcd"));
        assert_eq!(Value::Integer(3) * string("ab"), string("ababab"));
        assert_eq!(string("ab") * Value::Integer(2), string("abab"));
        assert_eq!(string("ab") * Value::Integer(-4), string(""));
        assert_eq!(string("hello world") / string("world"), string("hello "));
        assert_eq!(string("abcabc") / string("bc"), string("aabc"));
        assert_eq!(string("abc") / string("xyz"), string("abc"));
    }

    #[test]
    fn test_mismatched_operands() {
        assert_eq!(string("a") - string("a"), Value::Error(None));
        assert_eq!(string("a") + Value::Integer(1), Value::Error(None));
        assert_eq!(string("a") * string("a"), Value::Error(None));
        assert_eq!(Value::Integer(1) / string("a"), Value::Error(None));
        assert_eq!(Value::Empty + Value::Integer(1), Value::Error(None));
        assert_eq!(Value::Error(None) * Value::Integer(1), Value::Error(None));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Integer(-12).to_string(), "-12");
        assert_eq!(string("text").to_string(), "text");
        assert_eq!(Value::Empty.to_string(), "");
        assert_eq!(Value::error(DIVIDE_BY_ZERO).to_string(), "");
    }
}
