//! Reading SVG path data.
//!
//! Path data is read in two stages: [`read_commands`] tokenizes the text
//! into commands as written (letters, operands and relativity), and
//! [`interpret`] resolves those into absolute [`Geometry`](crate::geometry::Geometry).
//! [`parse`] does both.

mod arc;
mod command;
mod options;
mod parser;
mod tokens;

pub use command::{read_commands, read_commands_with, PathCommand, RawCommand};
pub use options::{ArcMode, ParseOptions, SmoothCurves, UnknownCommands};
pub use parser::{interpret, parse, parse_with};
pub use tokens::{is_command_token, tokenize};
