use super::arc::{Arc, ArcShape};
use super::command::{read_commands_with, PathCommand, RawCommand};
use super::options::{ArcMode, ParseOptions, SmoothCurves};
use crate::geometry::{Geometry, Point, Segment, Subpath};

/// Parse path data into absolute geometry using default options.
///
/// Never fails: whatever can be interpreted is returned, which may be an
/// empty `Geometry`.
pub fn parse(data: &str) -> Geometry {
    parse_with(data, &ParseOptions::default())
}

/// Parse path data into absolute geometry.
pub fn parse_with(data: &str, options: &ParseOptions) -> Geometry {
    let commands = read_commands_with(data, options);
    interpret(&commands, options)
}

/// Resolve token-level commands into absolute geometry.
pub fn interpret(commands: &[RawCommand], options: &ParseOptions) -> Geometry {
    let mut pp = PathParser::new(options);
    for cmd in commands {
        pp.apply(cmd);
    }
    pp.geometry
}

struct PathParser<'a> {
    options: &'a ParseOptions,
    geometry: Geometry,
    // current position, updated as commands are processed
    position: Point,
    // location to return to for 'Z'/'z' commands
    subpath_start: Point,
    // last control point of a C/S/Q command, reflected by S
    last_control: Point,
    // previous command, used by strict smooth-curve handling
    last_command: Option<PathCommand>,
}

impl<'a> PathParser<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            geometry: Geometry::new(),
            position: Point::ORIGIN,
            subpath_start: Point::ORIGIN,
            last_control: Point::ORIGIN,
            last_command: None,
        }
    }

    fn resolve(&self, p: Point, relative: bool) -> Point {
        if relative {
            self.position + p
        } else {
            p
        }
    }

    /// Append a drawing segment to the open subpath. If none is open, one
    /// is started at the current position: drawing without a leading move
    /// starts at the origin, and drawing after a close starts at the
    /// closed subpath's start.
    fn draw(&mut self, segment: Segment) {
        let open = self
            .geometry
            .subpaths()
            .last()
            .is_some_and(|sp| !sp.is_closed());
        if !open {
            self.geometry.push_subpath(Subpath::new(self.position));
        }
        if let Some(sp) = self.geometry.last_subpath_mut() {
            sp.push(segment);
        }
        if let Some(end) = segment.end_point() {
            self.position = end;
        }
    }

    fn previous_was(&self, f: impl Fn(&PathCommand) -> bool) -> bool {
        self.last_command.as_ref().is_some_and(f)
    }

    fn apply(&mut self, raw: &RawCommand) {
        let rel = raw.relative;
        match raw.command {
            PathCommand::MoveTo(p) => {
                let p = self.resolve(p, rel);
                self.geometry.push_subpath(Subpath::new(p));
                self.position = p;
                self.subpath_start = p;
            }
            PathCommand::LineTo(p) => {
                let p = self.resolve(p, rel);
                self.draw(Segment::LineTo(p));
            }
            PathCommand::HorizontalLineTo(x) => {
                let x = if rel { self.position.x + x } else { x };
                self.draw(Segment::LineTo(Point::new(x, self.position.y)));
            }
            PathCommand::VerticalLineTo(y) => {
                let y = if rel { self.position.y + y } else { y };
                self.draw(Segment::LineTo(Point::new(self.position.x, y)));
            }
            PathCommand::CubicCurveTo { c1, c2, to } => {
                let (c1, c2, to) = (
                    self.resolve(c1, rel),
                    self.resolve(c2, rel),
                    self.resolve(to, rel),
                );
                self.last_control = c2;
                self.draw(Segment::CubicTo { c1, c2, to });
            }
            PathCommand::SmoothCubicCurveTo { c2, to } => {
                let reflect = match self.options.smooth_curves {
                    SmoothCurves::Reflect => true,
                    SmoothCurves::Strict => self.previous_was(|c| {
                        matches!(
                            c,
                            PathCommand::CubicCurveTo { .. } | PathCommand::SmoothCubicCurveTo { .. }
                        )
                    }),
                };
                let c1 = if reflect {
                    self.position.reflect(self.last_control)
                } else {
                    self.position
                };
                let (c2, to) = (self.resolve(c2, rel), self.resolve(to, rel));
                self.last_control = c2;
                self.draw(Segment::CubicTo { c1, c2, to });
            }
            PathCommand::QuadCurveTo { c, to } => {
                let (c, to) = (self.resolve(c, rel), self.resolve(to, rel));
                self.last_control = c;
                self.draw(Segment::QuadTo { c, to });
            }
            PathCommand::SmoothQuadCurveTo(to) => {
                // Not produced from path text; only reachable when commands
                // are built directly.
                let reflect = match self.options.smooth_curves {
                    SmoothCurves::Reflect => true,
                    SmoothCurves::Strict => self.previous_was(|c| {
                        matches!(
                            c,
                            PathCommand::QuadCurveTo { .. } | PathCommand::SmoothQuadCurveTo(_)
                        )
                    }),
                };
                let c = if reflect {
                    self.position.reflect(self.last_control)
                } else {
                    self.position
                };
                let to = self.resolve(to, rel);
                self.last_control = c;
                self.draw(Segment::QuadTo { c, to });
            }
            PathCommand::ArcTo {
                rx,
                ry,
                x_rotation,
                large_arc,
                sweep,
                to,
            } => {
                let to = self.resolve(to, rel);
                match self.options.arc_mode {
                    ArcMode::Line => self.draw(Segment::LineTo(to)),
                    ArcMode::Curve => {
                        let arc = Arc {
                            from: self.position,
                            to,
                            rx,
                            ry,
                            x_rotation,
                            large_arc,
                            sweep,
                        };
                        match arc.to_cubics() {
                            ArcShape::Curves(curves) => {
                                for (c1, c2, end) in curves {
                                    self.draw(Segment::CubicTo { c1, c2, to: end });
                                }
                            }
                            ArcShape::Line => self.draw(Segment::LineTo(to)),
                            ArcShape::Omit => {}
                        }
                    }
                }
            }
            PathCommand::ClosePath => {
                if let Some(sp) = self.geometry.last_subpath_mut() {
                    sp.close();
                }
                self.position = self.subpath_start;
            }
        }
        self.last_command = Some(raw.command);
    }
}
