use std::fmt;

use super::options::{ParseOptions, UnknownCommands};
use super::tokens::TokenCursor;
use crate::geometry::{fstr, Point};

/// A single path command with its operands, as written in the source
/// (before relative coordinates are resolved).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    HorizontalLineTo(f64),
    VerticalLineTo(f64),
    CubicCurveTo {
        c1: Point,
        c2: Point,
        to: Point,
    },
    SmoothCubicCurveTo {
        c2: Point,
        to: Point,
    },
    QuadCurveTo {
        c: Point,
        to: Point,
    },
    SmoothQuadCurveTo(Point),
    ArcTo {
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    ClosePath,
}

impl PathCommand {
    /// Number of operands consumed per repetition of the given command
    /// letter, or `None` if the letter is not supported.
    ///
    /// `T`/`t` are deliberately absent.
    pub fn operand_count(letter: char) -> Option<usize> {
        match letter.to_ascii_uppercase() {
            'M' | 'L' => Some(2),
            'H' | 'V' => Some(1),
            'C' => Some(6),
            'S' | 'Q' => Some(4),
            'A' => Some(7),
            'Z' => Some(0),
            _ => None,
        }
    }

    /// Build a command from its letter (case ignored) and operands.
    fn from_operands(letter: char, v: &[f64]) -> Option<Self> {
        let pt = |i: usize| Point::new(v[i], v[i + 1]);
        let cmd = match letter.to_ascii_uppercase() {
            'M' => PathCommand::MoveTo(pt(0)),
            'L' => PathCommand::LineTo(pt(0)),
            'H' => PathCommand::HorizontalLineTo(v[0]),
            'V' => PathCommand::VerticalLineTo(v[0]),
            'C' => PathCommand::CubicCurveTo {
                c1: pt(0),
                c2: pt(2),
                to: pt(4),
            },
            'S' => PathCommand::SmoothCubicCurveTo {
                c2: pt(0),
                to: pt(2),
            },
            'Q' => PathCommand::QuadCurveTo {
                c: pt(0),
                to: pt(2),
            },
            'A' => PathCommand::ArcTo {
                rx: v[0],
                ry: v[1],
                x_rotation: v[2],
                large_arc: v[3] != 0.,
                sweep: v[4] != 0.,
                to: pt(5),
            },
            'Z' => PathCommand::ClosePath,
            _ => return None,
        };
        Some(cmd)
    }

    /// The upper-case SVG letter for this command.
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::HorizontalLineTo(_) => 'H',
            PathCommand::VerticalLineTo(_) => 'V',
            PathCommand::CubicCurveTo { .. } => 'C',
            PathCommand::SmoothCubicCurveTo { .. } => 'S',
            PathCommand::QuadCurveTo { .. } => 'Q',
            PathCommand::SmoothQuadCurveTo(_) => 'T',
            PathCommand::ArcTo { .. } => 'A',
            PathCommand::ClosePath => 'Z',
        }
    }
}

/// A command as read from path data, with its "is relative" flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawCommand {
    pub command: PathCommand,
    pub relative: bool,
}

impl RawCommand {
    pub fn absolute(command: PathCommand) -> Self {
        Self {
            command,
            relative: false,
        }
    }

    pub fn relative(command: PathCommand) -> Self {
        Self {
            command,
            relative: true,
        }
    }
}

impl fmt::Display for RawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.command.letter();
        let letter = if self.relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        };
        let flag = |b: bool| if b { "1" } else { "0" };
        match self.command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::SmoothQuadCurveTo(p) => {
                write!(f, "{letter} {p}")
            }
            PathCommand::HorizontalLineTo(v) | PathCommand::VerticalLineTo(v) => {
                write!(f, "{letter} {}", fstr(v))
            }
            PathCommand::CubicCurveTo { c1, c2, to } => write!(f, "{letter} {c1} {c2} {to}"),
            PathCommand::SmoothCubicCurveTo { c2, to } => write!(f, "{letter} {c2} {to}"),
            PathCommand::QuadCurveTo { c, to } => write!(f, "{letter} {c} {to}"),
            PathCommand::ArcTo {
                rx,
                ry,
                x_rotation,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "{letter} {} {} {} {} {} {to}",
                fstr(rx),
                fstr(ry),
                fstr(x_rotation),
                flag(large_arc),
                flag(sweep)
            ),
            PathCommand::ClosePath => write!(f, "{letter}"),
        }
    }
}

/// Read path data into token-level commands using default options.
pub fn read_commands(data: &str) -> Vec<RawCommand> {
    read_commands_with(data, &ParseOptions::default())
}

/// Read path data into token-level commands.
///
/// Each repetition of an operand group becomes its own `RawCommand`;
/// coordinate pairs following the first pair of a move become line-tos
/// with the same relativity. Reading never fails: a group that is
/// truncated, or contains a token which is not a number, ends that
/// command's repetitions, and stray numeric tokens between commands are
/// ignored.
pub fn read_commands_with(data: &str, options: &ParseOptions) -> Vec<RawCommand> {
    let mut tokens = TokenCursor::new(data);
    let mut commands = Vec::new();

    while !tokens.at_end() {
        let Some(letter) = tokens.read_command() else {
            // not at a command letter; skip the stray token
            if let Some(t) = tokens.current() {
                tracing::debug!("ignoring stray path token '{t}'");
            }
            tokens.advance();
            continue;
        };
        let relative = letter.is_ascii_lowercase();

        let Some(count) = PathCommand::operand_count(letter) else {
            match options.unknown_commands {
                UnknownCommands::Skip => {
                    tracing::debug!("skipping unsupported path command '{letter}'");
                }
                UnknownCommands::SkipOperands => {
                    let skipped = tokens.skip_operands();
                    tracing::debug!(
                        "skipping unsupported path command '{letter}' and {skipped} operand(s)"
                    );
                }
            }
            continue;
        };

        if count == 0 {
            commands.push(RawCommand {
                command: PathCommand::ClosePath,
                relative,
            });
            continue;
        }

        let mut first = true;
        loop {
            // A move's own pair reads unparseable coordinates as 0.
            let values = if first && matches!(letter, 'M' | 'm') {
                tokens.read_numbers_or_zero(count)
            } else {
                tokens.read_numbers(count)
            };
            let Some(values) = values else {
                break;
            };
            // "If a moveto is followed by multiple pairs of coordinates,
            // the subsequent pairs are treated as implicit lineto commands."
            let effective = match letter {
                'M' | 'm' if !first => 'L',
                other => other,
            };
            if let Some(command) = PathCommand::from_operands(effective, &values) {
                commands.push(RawCommand { command, relative });
            }
            first = false;
        }
        if first {
            tracing::debug!("path command '{letter}' has no complete operand group");
        }
    }

    commands
}
