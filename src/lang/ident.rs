// Used in both Token and the variable store

/// A variable name, upper-cased. The type of the variable
/// is fixed by the name: a trailing `$` makes it a string.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Plain(String),
    String(String),
}

impl Ident {
    pub fn new(name: &str) -> Ident {
        let name = name.to_ascii_uppercase();
        if name.ends_with('$') {
            Ident::String(name)
        } else {
            Ident::Plain(name)
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Ident::Plain(s) => s,
            Ident::String(s) => s,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Ident::String(_))
    }

    /// True for text shaped like a variable name:
    /// a letter, then letters or digits, then an optional `$`.
    pub fn is_valid(name: &str) -> bool {
        let body = name.strip_suffix('$').unwrap_or(name);
        let mut chars = body.chars();
        match chars.next() {
            Some(ch) if ch.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|ch| ch.is_ascii_alphanumeric())
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
