use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::errors::{Error, Result};

/// A point in user (path-data) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0., y: 0. };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflect `other` through this point, i.e. `2 * self - other`.
    pub fn reflect(&self, other: Point) -> Point {
        Point::new(2. * self.x - other.x, 2. * self.y - other.y)
    }

    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn as_xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", fstr(self.x), fstr(self.y))
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Parse an `x,y` (or `x y`) pair, as given on the command line.
    fn from_str(value: &str) -> Result<Self> {
        let parts: Vec<&str> = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|v| !v.is_empty())
            .collect();
        if let [x, y] = parts[..] {
            Ok(Point::new(strp(x)?, strp(y)?))
        } else {
            Err(Error::Parse(format!("expected a point as 'x,y': '{value}'")))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Shrink each dimension by `amount` on both sides.
    pub fn inset(&self, amount: f64) -> Self {
        Self::new(self.width - 2. * amount, self.height - 2. * amount)
    }

    /// True if both dimensions are finite and strictly positive.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0. && self.height > 0.
    }
}

/// Return a 'minimal' representation of the given number
pub fn fstr(x: f64) -> String {
    if x == (x as i64) as f64 {
        let result = (x as i64).to_string();
        // avoid "-0"
        return if result == "-0" { "0".into() } else { result };
    }
    let result = format!("{x:.3}");
    let result = if result.contains('.') {
        result.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        result
    };
    if result == "-0" {
        "0".into()
    } else {
        result
    }
}

/// Parse a string to an f64
pub fn strp(s: &str) -> Result<f64> {
    Ok(s.trim().parse::<f64>()?)
}
