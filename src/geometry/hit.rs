use std::str::FromStr;

use super::path::{Geometry, Segment};
use super::types::Point;
use crate::errors::{Error, Result};

/// Number of straight pieces each curve is split into when flattening.
pub const CURVE_STEPS: usize = 16;

/// Rule deciding which regions of a self-overlapping outline are 'inside'.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl FromStr for FillRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "nonzero" | "non-zero" => Ok(Self::NonZero),
            "evenodd" | "even-odd" => Ok(Self::EvenOdd),
            _ => Err(Error::InvalidData(format!(
                "unknown fill rule '{s}' (expected nonzero or evenodd)"
            ))),
        }
    }
}

fn cubic_at(p0: Point, c1: Point, c2: Point, p3: Point, t: f64) -> Point {
    let mt = 1. - t;
    let a = mt * mt * mt;
    let b = 3. * mt * mt * t;
    let c = 3. * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * c1.x + c * c2.x + d * p3.x,
        a * p0.y + b * c1.y + c * c2.y + d * p3.y,
    )
}

fn quad_at(p0: Point, c: Point, p2: Point, t: f64) -> Point {
    p0.lerp(c, t).lerp(c.lerp(p2, t), t)
}

impl Geometry {
    /// Approximate each subpath by a polyline, sampling curves at `steps`
    /// evenly spaced parameter values. Closed subpaths do not repeat their
    /// start point at the end.
    pub fn flatten(&self, steps: usize) -> Vec<Vec<Point>> {
        let steps = steps.max(1);
        let mut contours = Vec::with_capacity(self.subpaths().len());
        for sp in self.subpaths() {
            let mut poly = Vec::new();
            let mut current = sp.start();
            for seg in sp.segments() {
                match *seg {
                    Segment::MoveTo(p) | Segment::LineTo(p) => {
                        poly.push(p);
                        current = p;
                    }
                    Segment::CubicTo { c1, c2, to } => {
                        for i in 1..=steps {
                            poly.push(cubic_at(current, c1, c2, to, i as f64 / steps as f64));
                        }
                        current = to;
                    }
                    Segment::QuadTo { c, to } => {
                        for i in 1..=steps {
                            poly.push(quad_at(current, c, to, i as f64 / steps as f64));
                        }
                        current = to;
                    }
                    Segment::Close => {}
                }
            }
            if sp.is_closed() && poly.len() > 1 && poly.first() == poly.last() {
                poly.pop();
            }
            contours.push(poly);
        }
        contours
    }

    /// Point-in-path test against the filled outline. Open subpaths are
    /// treated as implicitly closed, as when filling.
    pub fn contains(&self, p: Point, rule: FillRule) -> bool {
        match self.bbox() {
            Some(bb) if bb.contains(p) => {}
            _ => return false,
        }
        let contours = self.flatten(CURVE_STEPS);
        match rule {
            FillRule::EvenOdd => contours
                .iter()
                .filter(|c| crossings(p, c) % 2 == 1)
                .count()
                % 2
                == 1,
            FillRule::NonZero => contours.iter().map(|c| winding_number(p, c)).sum::<i32>() != 0,
        }
    }
}

fn is_left(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

fn winding_number(p: Point, poly: &[Point]) -> i32 {
    if poly.len() < 3 {
        return 0;
    }
    let mut wn = 0;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (a, b) = (poly[j], poly[i]);
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b, p) > 0. {
                wn += 1;
            }
        } else if b.y <= p.y && is_left(a, b, p) < 0. {
            wn -= 1;
        }
        j = i;
    }
    wn
}

fn crossings(p: Point, poly: &[Point]) -> usize {
    if poly.len() < 3 {
        return 0;
    }
    let mut count = 0;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (a, b) = (poly[i], poly[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            count += 1;
        }
        j = i;
    }
    count
}
