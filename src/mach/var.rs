use super::val::{parse_number, Val};
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// One flat table for the whole session. Names ending in `$`
/// hold text, all others hold numbers.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, var_name: &str) -> Val {
        let key = var_name.to_ascii_uppercase();
        match self.vars.get(key.as_str()) {
            Some(val) => val.clone(),
            None => {
                if key.ends_with('$') {
                    Val::String("".into())
                } else {
                    Val::Number(0.0)
                }
            }
        }
    }

    /// Assigns by the naming rule. A numeric variable only accepts
    /// a number or text that is entirely a number; otherwise the
    /// previous value is kept and TYPE MISMATCH is returned.
    pub fn store(&mut self, var_name: &str, value: Val) -> Result<()> {
        let key: Rc<str> = var_name.to_ascii_uppercase().into();
        if self.vars.len() > u16::max_value() as usize && !self.vars.contains_key(&key) {
            return Err(error!(OutOfMemory));
        }
        let value = if key.ends_with('$') {
            match value {
                Val::String(_) => value,
                Val::Number(_) => Val::String(value.to_string().into()),
            }
        } else {
            match value {
                Val::Number(_) => value,
                Val::String(s) => match parse_number(&s) {
                    Some(n) => Val::Number(n),
                    None => return Err(error!(TypeMismatch)),
                },
            }
        };
        self.vars.insert(key, value);
        Ok(())
    }
}
