/*!
# Rust Language Module

This Rust module provides lexical analysis of the BASIC language
and the classification of entered lines.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::lex;
pub use line::Line;

/// Line numbers of a stored program.
pub type LineNumber = u16;

/// Highest line number a program may use.
pub const MAX_LINE_NUMBER: LineNumber = 65529;
