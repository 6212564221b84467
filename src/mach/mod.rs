/*!
## Rust Machine Module

This Rust module evaluates expressions and runs stored BASIC programs.

Expressions are compiled to postfix `Opcode`s and evaluated on a stack.
Programs run one line at a time so the host can interleave
its own work between calls to `Runtime::execute`.

*/

mod command;
mod compile;
mod eval;
mod frame;
mod library;
mod listing;
mod opcode;
mod operation;
mod runtime;
mod stack;
mod statement;
mod val;
mod var;

pub use compile::compile;
pub use eval::evaluate;
pub use eval::execute;
pub use frame::ForFrame;
pub use frame::GosubFrame;
pub use library::normalize;
pub use library::Library;
pub use library::MemoryLibrary;
pub use library::NoLibrary;
pub use listing::Listing;
pub use opcode::Opcode;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Halt;
pub use runtime::Runtime;
pub use runtime::State;
pub use runtime::YIELD_INTERVAL;
pub use stack::Stack;
pub use statement::Control;
pub use statement::MAX_NESTED_IF;
pub use val::format_number;
pub use val::parse_number;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
