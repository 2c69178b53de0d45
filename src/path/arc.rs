//! Elliptical arc to cubic Bézier conversion.
//!
//! Follows the endpoint-to-center conversion in the SVG implementation
//! notes (section B.2.4), then splits the sweep into pieces of at most a
//! quarter turn, each approximated by one cubic.

use std::f64::consts::PI;

use crate::geometry::Point;

/// Result of converting an arc's endpoint parameterization.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ArcShape {
    /// Cubic pieces `(c1, c2, to)`; the last `to` is the arc endpoint.
    Curves(Vec<(Point, Point, Point)>),
    /// Radii too small to form an ellipse: draw a straight line.
    Line,
    /// Start and end coincide: draw nothing.
    Omit,
}

pub(crate) struct Arc {
    pub from: Point,
    pub to: Point,
    pub rx: f64,
    pub ry: f64,
    pub x_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

impl Arc {
    pub fn to_cubics(&self) -> ArcShape {
        let (x1, y1) = self.from.as_xy();
        let (x2, y2) = self.to.as_xy();
        if x1 == x2 && y1 == y2 {
            return ArcShape::Omit;
        }

        let mut rx = self.rx.abs();
        let mut ry = self.ry.abs();
        if rx * rx < f64::EPSILON || ry * ry < f64::EPSILON {
            return ArcShape::Line;
        }

        let phi = self.x_rotation.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();

        // Move the origin to the chord midpoint and align with the
        // ellipse axes; primed values are in that frame.
        let mid_x = (x1 - x2) / 2.;
        let mid_y = (y1 - y2) / 2.;
        let x1_ = cos_phi * mid_x + sin_phi * mid_y;
        let y1_ = -sin_phi * mid_x + cos_phi * mid_y;

        // Scale radii up uniformly if they cannot span the chord.
        let lambda = (x1_ / rx).powi(2) + (y1_ / ry).powi(2);
        if lambda > 1. {
            rx *= lambda.sqrt();
            ry *= lambda.sqrt();
        }

        let d = (rx * y1_).powi(2) + (ry * x1_).powi(2);
        if d == 0. {
            return ArcShape::Omit;
        }
        let mut k = ((rx * ry).powi(2) / d - 1.).abs().sqrt();
        if self.sweep == self.large_arc {
            k = -k;
        }
        let cx_ = k * rx * y1_ / ry;
        let cy_ = -k * ry * x1_ / rx;

        let cx = cos_phi * cx_ - sin_phi * cy_ + (x1 + x2) / 2.;
        let cy = sin_phi * cx_ + cos_phi * cy_ + (y1 + y2) / 2.;

        let ux = (x1_ - cx_) / rx;
        let uy = (y1_ - cy_) / ry;
        let vx = (-x1_ - cx_) / rx;
        let vy = (-y1_ - cy_) / ry;

        let theta1 = angle_between(1., 0., ux, uy);
        let mut delta = angle_between(ux, uy, vx, vy);
        if self.sweep && delta < 0. {
            delta += 2. * PI;
        } else if !self.sweep && delta > 0. {
            delta -= 2. * PI;
        }

        let pieces = (delta.abs() / (PI / 2.)).ceil().max(1.) as usize;
        let step = delta / pieces as f64;
        let mut curves = Vec::with_capacity(pieces);
        for i in 0..pieces {
            let th0 = theta1 + step * i as f64;
            let th1 = th0 + step;
            curves.push(arc_piece((cx, cy), (rx, ry), (sin_phi, cos_phi), th0, th1));
        }
        // pin the final point so rounding never leaves a gap
        if let Some(last) = curves.last_mut() {
            last.2 = self.to;
        }
        ArcShape::Curves(curves)
    }
}

fn angle_between(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    let dot = ux * vx + uy * vy;
    let len = (ux * ux + uy * uy).sqrt() * (vx * vx + vy * vy).sqrt();
    let mut angle = (dot / len).clamp(-1., 1.).acos();
    if ux * vy - uy * vx < 0. {
        angle = -angle;
    }
    angle
}

fn arc_piece(
    (cx, cy): (f64, f64),
    (rx, ry): (f64, f64),
    (sin_phi, cos_phi): (f64, f64),
    th0: f64,
    th1: f64,
) -> (Point, Point, Point) {
    let (sin_th0, cos_th0) = th0.sin_cos();
    let (sin_th1, cos_th1) = th1.sin_cos();

    let th_half = 0.5 * (th1 - th0);
    let t = (8. / 3.) * (th_half * 0.5).sin().powi(2) / th_half.sin();
    let x1 = rx * (cos_th0 - t * sin_th0);
    let y1 = ry * (sin_th0 + t * cos_th0);
    let x3 = rx * cos_th1;
    let y3 = ry * sin_th1;
    let x2 = x3 + rx * (t * sin_th1);
    let y2 = y3 + ry * (-t * cos_th1);

    let map = |x: f64, y: f64| Point::new(cx + cos_phi * x - sin_phi * y, cy + sin_phi * x + cos_phi * y);
    (map(x1, y1), map(x2, y2), map(x3, y3))
}
