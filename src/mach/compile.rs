use super::{Opcode, Stack, Val};
use crate::error;
use crate::lang::token::{Operator, Token};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Converts an infix token sequence to postfix order.
///
/// Classic shunting-yard: binary operators are left-associative,
/// unary minus is right-associative and binds tightest.
pub fn compile(tokens: &[Token]) -> Result<Vec<Opcode>> {
    Compiler::new().compile(tokens)
}

enum Pending {
    Paren,
    Op(Opcode),
}

struct Compiler {
    output: Vec<Opcode>,
    pending: Stack<Pending>,
}

impl Compiler {
    fn new() -> Compiler {
        Compiler {
            output: vec![],
            pending: Stack::new("EXPRESSION TOO COMPLEX"),
        }
    }

    fn compile(mut self, tokens: &[Token]) -> Result<Vec<Opcode>> {
        let mut prev: Option<&Token> = None;
        for token in tokens {
            match token {
                Token::Number(n) => self.output.push(Opcode::Literal(Val::Number(*n))),
                Token::String(s) => self.output.push(Opcode::Literal(Val::String(s.as_str().into()))),
                Token::Ident(ident) => self.output.push(Opcode::Push(ident.name().into())),
                Token::LParen => self.pending.push(Pending::Paren)?,
                Token::RParen => self.close_paren()?,
                Token::Operator(op) => {
                    let unary = *op == Operator::Minus
                        && match prev {
                            None | Some(Token::Operator(_)) | Some(Token::LParen) => true,
                            _ => false,
                        };
                    let opcode = if unary { Opcode::Neg } else { binary(*op) };
                    self.operator(opcode)?;
                }
            }
            prev = Some(token);
        }
        while let Some(pending) = self.pending.pop().ok() {
            match pending {
                Pending::Paren => return Err(error!(MismatchedParentheses)),
                Pending::Op(opcode) => self.output.push(opcode),
            }
        }
        Ok(self.output)
    }

    fn close_paren(&mut self) -> Result<()> {
        loop {
            match self.pending.pop() {
                Ok(Pending::Paren) => return Ok(()),
                Ok(Pending::Op(opcode)) => self.output.push(opcode),
                Err(_) => return Err(error!(MismatchedParentheses)),
            }
        }
    }

    fn operator(&mut self, opcode: Opcode) -> Result<()> {
        let prec = opcode.precedence();
        while let Some(Pending::Op(top)) = self.pending.last() {
            // A unary operator never pops anything: it has no left operand.
            if opcode.is_unary() || prec > top.precedence() {
                break;
            }
            if let Ok(Pending::Op(top)) = self.pending.pop() {
                self.output.push(top);
            }
        }
        self.pending.push(Pending::Op(opcode))
    }
}

fn binary(op: Operator) -> Opcode {
    use Operator::*;
    match op {
        Plus => Opcode::Add,
        Minus => Opcode::Sub,
        Multiply => Opcode::Mul,
        Divide => Opcode::Div,
        Equal => Opcode::Eq,
        NotEqual => Opcode::NotEq,
        Less => Opcode::Lt,
        LessEqual => Opcode::LtEq,
        Greater => Opcode::Gt,
        GreaterEqual => Opcode::GtEq,
    }
}
