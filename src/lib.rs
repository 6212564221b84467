//! # MSX BASIC
//!
//! A line-numbered BASIC in the style of the 8-bit home computers.
//!
//! Begin by opening a terminal and running the `msx` executable.
//! If you get the following, you have achieved success.
//! ```text
//! MSX BASIC
//! READY.
//! █
//! ```
//!
//! The interpreter itself is independent of the terminal.
//! A host feeds lines to [`mach::Runtime::enter`] and pumps
//! [`mach::Runtime::execute`] for events to display.
//! ```
//! use msx::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.enter("10 PRINT \"HELLO\"");
//! runtime.enter("RUN");
//! assert_eq!(runtime.execute(20), Event::Print("HELLO".to_string()));
//! assert_eq!(runtime.execute(20), Event::Stopped);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_c.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_C;

pub mod lang;
pub mod mach;
pub mod term;
