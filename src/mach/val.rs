use std::rc::Rc;

/// ## Runtime values
///
/// Comparisons produce `Number(-1.0)` for true and `Number(0.0)` for false.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(Rc<str>),
}

impl Val {
    pub fn from_bool(b: bool) -> Val {
        if b {
            Val::Number(-1.0)
        } else {
            Val::Number(0.0)
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Val::String(_))
    }

    /// Numeric view of the value. Text that is not
    /// a number reads as zero.
    pub fn to_number(&self) -> f64 {
        match self {
            Val::Number(n) => *n,
            Val::String(s) => parse_number(s).unwrap_or(0.0),
        }
    }

    pub fn is_true(&self) -> bool {
        match self {
            Val::Number(n) => *n != 0.0,
            Val::String(s) => !s.is_empty(),
        }
    }
}

/// Parses the whole of `s`, surrounding blanks aside, as a decimal number.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let numeric = s
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '+' || c == '-' || c == 'e' || c == 'E');
    if !numeric || !s.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<f64>().ok()
}

pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let s = format!("{:e}", n);
        match s.find('e') {
            Some(i) if !s[i + 1..].starts_with('-') => format!("{}e+{}", &s[..i], &s[i + 1..]),
            _ => s,
        }
    } else {
        format!("{}", n)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", format_number(*n)),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Val {
        Val::Number(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.into())
    }
}
