use super::{token::*, Error};

type Result<T> = std::result::Result<T, Error>;

/// Converts expression text into a flat token sequence.
///
/// Characters that belong to no token class are skipped silently,
/// so `1 # 2` lexes the same as `1 2`.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    BasicLexer {
        chars: s.chars().peekable(),
    }
    .collect()
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars().peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            self.chars().next();
        }
    }

    fn number(&mut self) -> Token {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_digit(*pk) && *pk != '.' {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        // A second decimal point ends the numeric part; the rest of
        // the run is consumed but does not contribute to the value.
        let numeric = match s.match_indices('.').nth(1) {
            Some((second, _)) => &s[..second],
            None => &s[..],
        };
        Token::Number(numeric.parse::<f64>().unwrap_or(0.0))
    }

    fn string(&mut self) -> Result<Token> {
        let mut s = String::new();
        self.chars().next();
        loop {
            match self.chars().next() {
                Some('"') => return Ok(Token::String(s)),
                Some(ch) => s.push(ch),
                None => return Err(error!(UnterminatedString)),
            }
        }
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            let ch = *pk;
            if ch == '$' {
                s.push(ch);
                self.chars().next();
                break;
            }
            if !is_basic_alphabetic(ch) && !is_basic_digit(ch) {
                break;
            }
            s.push(ch.to_ascii_uppercase());
            self.chars().next();
        }
        Token::Ident(Ident::new(&s))
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        if let Some(pk) = self.chars().peek() {
            let mut two = String::with_capacity(2);
            two.push(ch);
            two.push(*pk);
            if let Some(t @ Token::Operator(_)) = Token::from_string(&two) {
                self.chars().next();
                return Some(t);
            }
        }
        Token::from_string(&ch.to_string())
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pk = *self.chars.peek()?;
            if is_basic_whitespace(pk) {
                self.whitespace();
                continue;
            }
            if is_basic_digit(pk) {
                return Some(Ok(self.number()));
            }
            if is_basic_alphabetic(pk) {
                return Some(Ok(self.alphabetic()));
            }
            if pk == '"' {
                return Some(self.string());
            }
            if let Some(token) = self.minutia() {
                return Some(Ok(token));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_char_operators() {
        let v = lex("1<=2>=3<>4").unwrap();
        assert_eq!(v[1], Token::Operator(Operator::LessEqual));
        assert_eq!(v[3], Token::Operator(Operator::GreaterEqual));
        assert_eq!(v[5], Token::Operator(Operator::NotEqual));
        assert_eq!(v.len(), 7);
    }

    #[test]
    fn test_unknown_chars_skipped() {
        assert_eq!(lex("1 # 2").unwrap(), lex("1 2").unwrap());
        assert_eq!(lex("@").unwrap(), vec![]);
    }

    #[test]
    fn test_second_point() {
        assert_eq!(lex("1.2.3").unwrap(), vec![Token::Number(1.2)]);
    }

    #[test]
    fn test_ident_ends_at_dollar() {
        let v = lex("a$b").unwrap();
        assert_eq!(v[0], Token::Ident(Ident::String("A$".to_string())));
        assert_eq!(v[1], Token::Ident(Ident::Plain("B".to_string())));
    }
}
