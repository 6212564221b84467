use super::{compile, Opcode, Operation, Stack, Val, Var};
use crate::lang::{lex, Error};

type Result<T> = std::result::Result<T, Error>;

/// Tokenizes, converts to postfix, and evaluates expression text.
/// Blank text evaluates to zero.
pub fn evaluate(expr: &str, vars: &Var) -> Result<Val> {
    let tokens = lex(expr)?;
    if tokens.is_empty() {
        return Ok(Val::Number(0.0));
    }
    let ops = compile(&tokens)?;
    execute(&ops, vars)
}

/// Runs postfix opcodes on a value stack.
///
/// When operands are left over, the last one pushed is the result:
/// `1 2` evaluates to 2.
pub fn execute(ops: &[Opcode], vars: &Var) -> Result<Val> {
    let mut stack: Stack<Val> = Stack::new("EXPRESSION TOO COMPLEX");
    for op in ops {
        let val = match op {
            Opcode::Literal(val) => val.clone(),
            Opcode::Push(name) => vars.fetch(name),
            Opcode::Neg => Operation::negate(stack.pop()?)?,
            _ => {
                let (lhs, rhs) = stack.pop_2()?;
                binary(op, lhs, rhs)?
            }
        };
        stack.push(val)?;
    }
    match stack.pop() {
        Ok(val) => Ok(val),
        Err(_) => Ok(Val::Number(0.0)),
    }
}

fn binary(op: &Opcode, lhs: Val, rhs: Val) -> Result<Val> {
    use Opcode::*;
    match op {
        Mul => Operation::multiply(lhs, rhs),
        Div => Operation::divide(lhs, rhs),
        Add => Operation::sum(lhs, rhs),
        Sub => Operation::subtract(lhs, rhs),
        Eq => Operation::equal(lhs, rhs),
        NotEq => Operation::not_equal(lhs, rhs),
        Lt => Operation::less(lhs, rhs),
        LtEq => Operation::less_equal(lhs, rhs),
        Gt => Operation::greater(lhs, rhs),
        GtEq => Operation::greater_equal(lhs, rhs),
        Literal(_) | Push(_) | Neg => unreachable!("not a binary opcode: {}", op),
    }
}
