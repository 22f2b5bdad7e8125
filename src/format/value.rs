use crate::highlight::Highlight;

/// Dynamically-typed formatting argument value.
///
/// Format arguments are heterogeneous; this closed set covers the kinds the
/// verb letters know how to render. `Display` gives the default (`%v`) form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Char(char),
    Bool(bool),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Uint(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::Char(c) => write!(f, "{c}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Uint(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Uint(n.into())
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Uint(n as u64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A caller-supplied format argument: either a plain value, or a value
/// wrapped in a [`Highlight`] that wants to decorate its formatted text.
pub enum Arg {
    Value(Value),
    Highlight(Box<dyn Highlight + Send + Sync>),
}

impl Arg {
    /// Wrap any [`Highlight`] implementation as an argument.
    #[must_use]
    pub fn highlight(h: impl Highlight + Send + Sync + 'static) -> Self {
        Arg::Highlight(Box::new(h))
    }
}

impl std::fmt::Debug for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arg::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Arg::Highlight(h) => f.debug_tuple("Highlight").field(h.value()).finish(),
        }
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Value(v)
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Value(n.into())
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Value(n.into())
    }
}

impl From<u64> for Arg {
    fn from(n: u64) -> Self {
        Arg::Value(n.into())
    }
}

impl From<u32> for Arg {
    fn from(n: u32) -> Self {
        Arg::Value(n.into())
    }
}

impl From<usize> for Arg {
    fn from(n: usize) -> Self {
        Arg::Value(n.into())
    }
}

impl From<f64> for Arg {
    fn from(x: f64) -> Self {
        Arg::Value(x.into())
    }
}

impl From<f32> for Arg {
    fn from(x: f32) -> Self {
        Arg::Value(x.into())
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Value(s.into())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Value(s.into())
    }
}

impl From<char> for Arg {
    fn from(c: char) -> Self {
        Arg::Value(c.into())
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Value(b.into())
    }
}
