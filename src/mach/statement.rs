use super::{evaluate, ForFrame, GosubFrame, Runtime, Val};
use crate::error;
use crate::lang::{Error, Ident, LineNumber};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// IF may nest inside a THEN clause only this deep.
pub const MAX_NESTED_IF: usize = 8;

/// ## Control signal
///
/// Every statement produces exactly one of these. The run loop
/// uses it to pick the next program line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    Continue,
    Jump(LineNumber),
    End,
    /// The diagnostic has already been reported.
    Error,
}

/// Shared shape of every statement handler:
/// runtime, argument text, and whether the statement was typed directly.
pub type Handler = fn(&mut Runtime, &str, bool) -> Result<Control>;

thread_local!(
    static STATEMENTS: HashMap<&'static str, Handler> = statements();
);

fn statements() -> HashMap<&'static str, Handler> {
    let mut map: HashMap<&'static str, Handler> = HashMap::new();
    map.insert("LET", r#let);
    map.insert("PRINT", r#print);
    map.insert("?", r#print);
    map.insert("IF", r#if);
    map.insert("GOTO", r#goto);
    map.insert("GOSUB", r#gosub);
    map.insert("RETURN", r#return);
    map.insert("FOR", r#for);
    map.insert("NEXT", r#next);
    map.insert("INPUT", r#input);
    map.insert("END", r#end);
    map.insert("STOP", r#end);
    map.insert("REM", r#rem);
    map.insert("CLS", r#cls);
    map
}

pub fn handler(word: &str) -> Option<Handler> {
    STATEMENTS.with(|s| s.get(word).copied())
}

/// Splits off the first word of a statement. `?` is a word by itself.
pub fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim();
    if text.starts_with('?') {
        return ("?", text[1..].trim());
    }
    match text.find(|c: char| c.is_whitespace()) {
        Some(i) => (&text[..i], text[i..].trim()),
        None => (text, ""),
    }
}

/// True when the text has the shape `<identifier> =`.
pub fn is_assignment(text: &str) -> bool {
    match text.find('=') {
        Some(i) => Ident::is_valid(text[..i].trim()),
        None => false,
    }
}

/// Finds a keyword outside string literals, ignoring case.
/// The keyword must not be glued to a letter on either side,
/// so `TO` is not found inside `TOTAL`. A `$` ends a name, so it
/// only glues when it follows the keyword.
pub fn find_keyword(text: &str, keyword: &str) -> Option<usize> {
    let upper = text.to_ascii_uppercase();
    let bytes = upper.as_bytes();
    let mut in_string = false;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'"' {
            in_string = !in_string;
            continue;
        }
        if in_string || !bytes[i..].starts_with(keyword.as_bytes()) {
            continue;
        }
        let before = i.checked_sub(1).map(|p| bytes[p]);
        let after = bytes.get(i + keyword.len()).copied();
        let glued_before = before.map_or(false, |c| c.is_ascii_alphabetic());
        let glued_after = after.map_or(false, |c| c.is_ascii_alphabetic() || c == b'$');
        if !glued_before && !glued_after {
            return Some(i);
        }
    }
    None
}

/// Pieces of a PRINT list. Separators inside quotes are text.
#[derive(Debug, PartialEq)]
pub enum Piece<'a> {
    Expr(&'a str),
    Separator,
}

pub fn split_print(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = vec![];
    let mut in_string = false;
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        if ch == '"' {
            in_string = !in_string;
        } else if !in_string && (ch == ';' || ch == ',') {
            let expr = text[start..i].trim();
            if !expr.is_empty() {
                pieces.push(Piece::Expr(expr));
            }
            pieces.push(Piece::Separator);
            start = i + 1;
        }
    }
    let expr = text[start..].trim();
    if !expr.is_empty() {
        pieces.push(Piece::Expr(expr));
    }
    pieces
}

fn parse_line_number(text: &str) -> Result<LineNumber> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(error!(SyntaxError));
    }
    match text.parse::<LineNumber>() {
        Ok(n) => Ok(n),
        Err(_) => Err(error!(UndefinedLine; text)),
    }
}

fn illegal_direct(direct: bool) -> Result<()> {
    if direct {
        Err(error!(IllegalDirect))
    } else {
        Ok(())
    }
}

fn r#let(rt: &mut Runtime, args: &str, _direct: bool) -> Result<Control> {
    let i = match args.find('=') {
        Some(i) => i,
        None => return Err(error!(SyntaxError)),
    };
    let name = args[..i].trim();
    let expr = args[i + 1..].trim();
    if !Ident::is_valid(name) || expr.is_empty() {
        return Err(error!(SyntaxError));
    }
    let value = evaluate(expr, &rt.vars)?;
    rt.vars.store(name, value)?;
    Ok(Control::Continue)
}

fn r#print(rt: &mut Runtime, args: &str, _direct: bool) -> Result<Control> {
    let mut out = String::new();
    for piece in split_print(args) {
        match piece {
            Piece::Separator => out.push(' '),
            Piece::Expr(expr) => out.push_str(&evaluate(expr, &rt.vars)?.to_string()),
        }
    }
    rt.print(&out);
    Ok(Control::Continue)
}

fn r#if(rt: &mut Runtime, args: &str, direct: bool) -> Result<Control> {
    let i = match find_keyword(args, "THEN") {
        Some(i) => i,
        None => return Err(error!(SyntaxError; "THEN EXPECTED")),
    };
    let cond = evaluate(&args[..i], &rt.vars)?;
    if !cond.is_true() {
        return Ok(Control::Continue);
    }
    let clause = args[i + 4..].trim();
    if !clause.is_empty() && clause.chars().all(|c| c.is_ascii_digit()) {
        return Ok(Control::Jump(parse_line_number(clause)?));
    }
    if rt.depth >= MAX_NESTED_IF {
        return Err(error!(SyntaxError; "IF NESTED TOO DEEPLY"));
    }
    rt.depth += 1;
    let result = rt.dispatch(clause, direct);
    rt.depth -= 1;
    result
}

fn r#goto(_rt: &mut Runtime, args: &str, direct: bool) -> Result<Control> {
    illegal_direct(direct)?;
    Ok(Control::Jump(parse_line_number(args)?))
}

fn r#gosub(rt: &mut Runtime, args: &str, direct: bool) -> Result<Control> {
    illegal_direct(direct)?;
    let target = parse_line_number(args)?;
    let current = match rt.current {
        Some(line) => line,
        None => return Err(error!(IllegalDirect)),
    };
    let return_line = rt.line_after(current);
    rt.gosub_stack.push(GosubFrame { return_line })?;
    Ok(Control::Jump(target))
}

fn r#return(rt: &mut Runtime, _args: &str, direct: bool) -> Result<Control> {
    illegal_direct(direct)?;
    if rt.gosub_stack.is_empty() {
        return Err(error!(ReturnWithoutGosub));
    }
    match rt.gosub_stack.pop()?.return_line {
        Some(line) => Ok(Control::Jump(line)),
        None => Ok(Control::End),
    }
}

fn numeric(val: Val) -> Result<f64> {
    match val {
        Val::Number(n) => Ok(n),
        Val::String(_) => Err(error!(TypeMismatch)),
    }
}

fn r#for(rt: &mut Runtime, args: &str, direct: bool) -> Result<Control> {
    illegal_direct(direct)?;
    let current = match rt.current {
        Some(line) => line,
        None => return Err(error!(IllegalDirect)),
    };
    let eq = match args.find('=') {
        Some(i) => i,
        None => return Err(error!(SyntaxError)),
    };
    let name = args[..eq].trim();
    if !Ident::is_valid(name) || name.ends_with('$') {
        return Err(error!(SyntaxError));
    }
    let rest = &args[eq + 1..];
    let to = match find_keyword(rest, "TO") {
        Some(i) => i,
        None => return Err(error!(SyntaxError; "TO EXPECTED")),
    };
    let start_expr = &rest[..to];
    let rest = &rest[to + 2..];
    let (end_expr, step_expr) = match find_keyword(rest, "STEP") {
        Some(i) => (&rest[..i], &rest[i + 4..]),
        None => (rest, "1"),
    };
    let start = numeric(evaluate(start_expr, &rt.vars)?)?;
    let end = numeric(evaluate(end_expr, &rt.vars)?)?;
    let step = numeric(evaluate(step_expr, &rt.vars)?)?;
    let var: Rc<str> = name.to_ascii_uppercase().into();
    rt.vars.store(&var, Val::Number(start))?;
    rt.for_stack.push(ForFrame {
        var,
        end,
        step,
        line: current,
    })?;
    Ok(Control::Continue)
}

fn r#next(rt: &mut Runtime, args: &str, direct: bool) -> Result<Control> {
    illegal_direct(direct)?;
    let name = args.trim().to_ascii_uppercase();
    let frame = match rt.for_stack.last() {
        Some(frame) => frame.clone(),
        None => return Err(error!(NextWithoutFor)),
    };
    // Only the innermost loop can be closed by name.
    if !name.is_empty() && *frame.var != *name {
        return Err(error!(NextWithoutFor));
    }
    let value = rt.vars.fetch(&frame.var).to_number() + frame.step;
    rt.vars.store(&frame.var, Val::Number(value))?;
    if frame.in_bounds(value) {
        // The body starts on the line after the FOR.
        return match rt.line_after(frame.line) {
            Some(line) => Ok(Control::Jump(line)),
            None => Ok(Control::End),
        };
    }
    rt.for_stack.pop()?;
    Ok(Control::Continue)
}

fn r#input(rt: &mut Runtime, args: &str, _direct: bool) -> Result<Control> {
    let args = args.trim();
    if args.is_empty() {
        return Err(error!(SyntaxError));
    }
    let mut prompt = "?";
    let mut var = args;
    if let Some(quoted) = args.strip_prefix('"') {
        let close = match quoted.find('"') {
            Some(i) => i,
            None => return Err(error!(UnterminatedString)),
        };
        match quoted[close + 1..].trim_start().strip_prefix(';') {
            Some(rest) => {
                prompt = &quoted[..close];
                var = rest.trim();
            }
            None => return Err(error!(SyntaxError)),
        }
    }
    if !Ident::is_valid(var) {
        return Err(error!(SyntaxError));
    }
    rt.request_input(prompt, var);
    Ok(Control::Continue)
}

fn r#end(_rt: &mut Runtime, _args: &str, _direct: bool) -> Result<Control> {
    Ok(Control::End)
}

fn r#rem(_rt: &mut Runtime, _args: &str, _direct: bool) -> Result<Control> {
    Ok(Control::Continue)
}

fn r#cls(rt: &mut Runtime, _args: &str, _direct: bool) -> Result<Control> {
    rt.cls();
    Ok(Control::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_word() {
        assert_eq!(split_word("PRINT  1;2"), ("PRINT", "1;2"));
        assert_eq!(split_word("?1"), ("?", "1"));
        assert_eq!(split_word("END"), ("END", ""));
    }

    #[test]
    fn test_is_assignment() {
        assert!(is_assignment("A=1"));
        assert!(is_assignment("NAME$ = \"X\""));
        assert!(!is_assignment("IF A=1 THEN 10"));
        assert!(!is_assignment("A<=1"));
        assert!(!is_assignment("PRINT 1"));
    }

    #[test]
    fn test_find_keyword_skips_strings() {
        let args = r#"A$="THEN" THEN 100"#;
        let i = find_keyword(args, "THEN").unwrap();
        assert_eq!(&args[i..], "THEN 100");
    }

    #[test]
    fn test_find_keyword_word_edges() {
        assert_eq!(find_keyword("I=TOTAL TO 5", "TO"), Some(8));
        assert_eq!(find_keyword("I=1to9", "TO"), Some(3));
        assert_eq!(find_keyword("ATHENS=1", "THEN"), None);
    }

    #[test]
    fn test_split_print() {
        use Piece::*;
        assert_eq!(
            split_print(r#""A;B";X,"C""#),
            vec![Expr(r#""A;B""#), Separator, Expr("X"), Separator, Expr(r#""C""#)]
        );
        assert_eq!(split_print("1;"), vec![Expr("1"), Separator]);
        assert_eq!(split_print(""), vec![]);
    }

    #[test]
    fn test_parse_line_number() {
        assert_eq!(parse_line_number(" 100 ").unwrap(), 100);
        assert!(parse_line_number("ABC").is_err());
        assert!(parse_line_number("").is_err());
        assert!(parse_line_number("-5").is_err());
    }
}
