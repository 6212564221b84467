use super::{Error, LineNumber, MAX_LINE_NUMBER};
use std::rc::Rc;

/// One entered line, with the leading line number split off.
/// A line without a number is a direct (immediate mode) line.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: Option<LineNumber>,
    text: Rc<str>,
}

impl Line {
    pub fn new(s: &str) -> Result<Line, Error> {
        let s = s.trim();
        let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return Ok(Line {
                number: None,
                text: s.into(),
            });
        }
        let number = match s[..digits].parse::<u32>() {
            Ok(n) if n <= MAX_LINE_NUMBER as u32 => n as LineNumber,
            _ => return Err(error!(SyntaxError; "INVALID LINE NUMBER")),
        };
        Ok(Line {
            number: Some(number),
            text: s[digits..].trim().into(),
        })
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn text(&self) -> &Rc<str> {
        &self.text
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}
