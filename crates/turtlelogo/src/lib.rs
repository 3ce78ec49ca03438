//! A tiny LOGO for drawing with a turtle.
//!
//! A script is split into words by [`parse::tokenize`] and then run word by word, without ever
//! building a syntax tree. The language has primitive turtle commands taking at most one
//! number, `repeat <n> [ ... ]` loops, parameterless procedures defined with
//! `to <name> ... end`, and the `bckgr <colour>` and `save` keywords.
//!
//! Running a script never fails: anything that doesn't make sense is stepped over and noted in
//! the [`Report`].
//!
//! ```
//! use turtlelogo::{Program, TurtleCmd};
//!
//! let mut turtle: Vec<TurtleCmd> = Vec::new();
//! Program::parse("to square repeat 4 [ fd 10 rt 90 ] end square").exec(&mut turtle);
//! assert_eq!(turtle.len(), 8);
//! ```

pub mod eval;
pub mod parse;
pub mod proc;
pub mod typ;

pub use eval::{Env, Frame, Options, Program, Report};
pub use parse::{tokenize, Token};
pub use proc::{Builtin, Commands};
pub use typ::{Skip, Turtle, TurtleCmd};
