use super::Val;
use std::rc::Rc;

/// ## Postfix instruction set
///
/// Expressions have no registers.
/// Every operation is performed on the stack.
///
/// For example: `3*B+1` compiles to `[Literal(3), Push(B), Mul, Literal(1), Add]`
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Clone, PartialEq)]
pub enum Opcode {
    /// Push literal value on to the stack.
    Literal(Val),
    /// Push stack value of named variable. Infallible.
    Push(Rc<str>),

    // *** Expression operations
    Neg,
    Mul,
    Div,
    Add,
    Sub,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl Opcode {
    /// Binding strength while converting from infix.
    /// Operands have none.
    pub fn precedence(&self) -> u8 {
        use Opcode::*;
        match self {
            Literal(_) | Push(_) => 0,
            Neg => 4,
            Mul | Div => 3,
            Add | Sub => 2,
            Eq | NotEq | Lt | LtEq | Gt | GtEq => 1,
        }
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Opcode::Neg)
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Literal(Val::Number(n)) => write!(f, "NUMBER({})", n),
            Literal(Val::String(s)) => write!(f, "STRING({:?})", s),
            Push(s) => write!(f, "PUSH({})", s),

            Neg => write!(f, "NEG"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Eq => write!(f, "EQ"),
            NotEq => write!(f, "NOTEQ"),
            Lt => write!(f, "LT"),
            LtEq => write!(f, "LTEQ"),
            Gt => write!(f, "GT"),
            GtEq => write!(f, "GTEQ"),
        }
    }
}
