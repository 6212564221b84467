use crate::lang::LineNumber;
use std::rc::Rc;

/// Loop state pushed by `FOR` and consulted by `NEXT`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForFrame {
    pub var: Rc<str>,
    pub end: f64,
    pub step: f64,
    /// Line of the `FOR` statement.
    pub line: LineNumber,
}

impl ForFrame {
    /// True while `value` has not yet passed the end of the loop.
    pub fn in_bounds(&self, value: f64) -> bool {
        if self.step >= 0.0 {
            value <= self.end
        } else {
            value >= self.end
        }
    }
}

/// Call state pushed by `GOSUB` and popped by `RETURN`.
/// A call from the last line of the program has nowhere to return to.
#[derive(Debug, Clone, PartialEq)]
pub struct GosubFrame {
    pub return_line: Option<LineNumber>,
}
