use super::library::normalize;
use super::Runtime;
use crate::error;
use crate::lang::{lex, token::Token, Error};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// Immediate mode command: runtime and argument text.
pub type Command = fn(&mut Runtime, &str) -> Result<()>;

thread_local!(
    static COMMANDS: HashMap<&'static str, Command> = commands();
);

fn commands() -> HashMap<&'static str, Command> {
    let mut map: HashMap<&'static str, Command> = HashMap::new();
    map.insert("LIST", r#list);
    map.insert("RUN", r#run);
    map.insert("NEW", r#new);
    map.insert("CLS", r#cls);
    map.insert("SAVE", r#save);
    map.insert("LOAD", r#load);
    map.insert("FILES", r#files);
    map.insert("HELP", r#help);
    map
}

pub fn command(word: &str) -> Option<Command> {
    COMMANDS.with(|c| c.get(word).copied())
}

const HELP: &[&str] = &[
    "COMMANDS",
    " LIST [start]-[end]",
    " RUN [line]",
    " NEW, CLS",
    " SAVE \"NAME\", LOAD \"NAME\", FILES",
    " GOTO, IF..THEN, FOR..NEXT, GOSUB..RETURN",
    " INPUT, PRINT, ?, LET, REM, END, STOP",
];

fn r#list(rt: &mut Runtime, args: &str) -> Result<()> {
    for line in rt.listing.list(args)? {
        rt.print(&line);
    }
    Ok(())
}

fn r#run(rt: &mut Runtime, args: &str) -> Result<()> {
    let args = args.trim();
    let start = if args.is_empty() {
        None
    } else if args.chars().all(|c| c.is_ascii_digit()) {
        match args.parse() {
            Ok(n) => Some(n),
            Err(_) => return Err(error!(UndefinedLine; args)),
        }
    } else {
        return Err(error!(SyntaxError));
    };
    rt.run(start)
}

fn r#new(rt: &mut Runtime, _args: &str) -> Result<()> {
    rt.new_program();
    Ok(())
}

fn r#cls(rt: &mut Runtime, _args: &str) -> Result<()> {
    rt.cls();
    Ok(())
}

/// A program name may be quoted or bare.
fn program_name(args: &str) -> Result<String> {
    let args = args.trim();
    let name = match lex(args)?.as_slice() {
        [Token::String(s)] => normalize(s),
        _ => normalize(args),
    };
    if name.is_empty() {
        return Err(error!(SyntaxError));
    }
    Ok(name)
}

fn r#save(rt: &mut Runtime, args: &str) -> Result<()> {
    let name = program_name(args)?;
    rt.library.save(&name, &rt.listing)?;
    rt.print(&format!("SAVED {}", name));
    Ok(())
}

fn r#load(rt: &mut Runtime, args: &str) -> Result<()> {
    let name = program_name(args)?;
    rt.listing = rt.library.load(&name)?;
    rt.print(&format!("LOADED {}", name));
    Ok(())
}

fn r#files(rt: &mut Runtime, _args: &str) -> Result<()> {
    let names = rt.library.list()?;
    rt.print("FILES:");
    for name in names {
        rt.print(&format!(" {}", name));
    }
    Ok(())
}

fn r#help(rt: &mut Runtime, _args: &str) -> Result<()> {
    for line in HELP {
        rt.print(line);
    }
    Ok(())
}
