use std::fmt;

use super::bbox::{BoundingBox, BoundingBoxBuilder};
use super::types::Point;

/// A resolved drawing segment in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde_derive::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
    QuadTo { c: Point, to: Point },
    Close,
}

impl Segment {
    /// All coordinates held by this segment, control points first.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (pts, n): ([Point; 3], usize) = match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => ([p, p, p], 1),
            Segment::CubicTo { c1, c2, to } => ([c1, c2, to], 3),
            Segment::QuadTo { c, to } => ([c, to, to], 2),
            Segment::Close => ([Point::ORIGIN; 3], 0),
        };
        pts.into_iter().take(n)
    }

    /// The point this segment finishes at, if it has one.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => Some(p),
            Segment::CubicTo { to, .. } | Segment::QuadTo { to, .. } => Some(to),
            Segment::Close => None,
        }
    }

    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Segment {
        match *self {
            Segment::MoveTo(p) => Segment::MoveTo(f(p)),
            Segment::LineTo(p) => Segment::LineTo(f(p)),
            Segment::CubicTo { c1, c2, to } => Segment::CubicTo {
                c1: f(c1),
                c2: f(c2),
                to: f(to),
            },
            Segment::QuadTo { c, to } => Segment::QuadTo { c: f(c), to: f(to) },
            Segment::Close => Segment::Close,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::MoveTo(p) => write!(f, "M {p}"),
            Segment::LineTo(p) => write!(f, "L {p}"),
            Segment::CubicTo { c1, c2, to } => write!(f, "C {c1} {c2} {to}"),
            Segment::QuadTo { c, to } => write!(f, "Q {c} {to}"),
            Segment::Close => write!(f, "Z"),
        }
    }
}

/// One contiguous run of segments: a move, then zero or more drawing
/// segments, then optionally a close marker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde_derive::Serialize))]
pub struct Subpath {
    segments: Vec<Segment>,
}

impl Subpath {
    pub fn new(start: Point) -> Self {
        Self {
            segments: vec![Segment::MoveTo(start)],
        }
    }

    pub fn start(&self) -> Point {
        match self.segments[0] {
            Segment::MoveTo(p) => p,
            _ => unreachable!("subpath always begins with a move"),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Close))
    }

    /// The current point at the end of this subpath. Closed subpaths
    /// end back at their start.
    pub fn end_point(&self) -> Point {
        if self.is_closed() {
            return self.start();
        }
        self.segments
            .last()
            .and_then(Segment::end_point)
            .unwrap_or_else(|| self.start())
    }

    /// Append a drawing segment. Moves and close markers are rejected;
    /// use `Subpath::new` and `close` for those.
    pub(crate) fn push(&mut self, segment: Segment) {
        debug_assert!(!self.is_closed(), "cannot extend a closed subpath");
        debug_assert!(
            !matches!(segment, Segment::MoveTo(_) | Segment::Close),
            "push() takes drawing segments only"
        );
        self.segments.push(segment);
    }

    pub(crate) fn close(&mut self) {
        if !self.is_closed() {
            self.segments.push(Segment::Close);
        }
    }

    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Subpath {
        Subpath {
            segments: self.segments.iter().map(|s| s.map_points(&f)).collect(),
        }
    }
}

impl fmt::Display for Subpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}

/// Parsed path data: subpaths in source order.
///
/// Geometry is plain derived data; it is never updated in place; scaling
/// and translation return new values.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde_derive::Serialize))]
pub struct Geometry {
    subpaths: Vec<Subpath>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_subpaths(subpaths: Vec<Subpath>) -> Self {
        Self { subpaths }
    }

    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.subpaths.iter().map(|sp| sp.segments.len()).sum()
    }

    /// Every coordinate in the geometry, in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.subpaths
            .iter()
            .flat_map(|sp| sp.segments.iter())
            .flat_map(|seg| seg.points())
    }

    pub fn bbox(&self) -> Option<BoundingBox> {
        let mut bbb = BoundingBoxBuilder::new();
        for p in self.points() {
            bbb.extend_point(p);
        }
        bbb.build()
    }

    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Geometry {
        Geometry {
            subpaths: self.subpaths.iter().map(|sp| sp.map_points(&f)).collect(),
        }
    }

    /// Multiply every coordinate by `factor`, about the origin.
    pub fn scaled(&self, factor: f64) -> Geometry {
        self.map_points(|p| p * factor)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Geometry {
        self.map_points(|p| Point::new(p.x + dx, p.y + dy))
    }

    pub(crate) fn push_subpath(&mut self, subpath: Subpath) {
        self.subpaths.push(subpath);
    }

    pub(crate) fn last_subpath_mut(&mut self) -> Option<&mut Subpath> {
        self.subpaths.last_mut()
    }
}

impl fmt::Display for Geometry {
    /// Format as SVG path data using absolute commands.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sp) in self.subpaths.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{sp}")?;
        }
        Ok(())
    }
}
