//! Placing a map inside a canvas, and the interactive state which moves it.

use crate::constants::{MAP_PADDING, MAX_ZOOM, MIN_ZOOM};
use crate::geometry::{Point, Size};
use crate::viewport::{uniform_scale, ViewportTransform};

fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return 1.;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Where a view box lands on a canvas.
///
/// The map is fitted inside the canvas less `padding` on each side,
/// multiplied by `zoom`, and centred on the canvas centre shifted by
/// `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapLayout {
    pub canvas: Size,
    pub padding: f64,
    zoom: f64,
    pub offset: Point,
}

impl MapLayout {
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            padding: MAP_PADDING,
            zoom: 1.,
            offset: Point::ORIGIN,
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the zoom factor, clamped to the supported range.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = clamp_zoom(zoom);
        self
    }

    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Scale at which the whole view box fits the padded canvas.
    pub fn fit_scale(&self, view_box: Size) -> f64 {
        uniform_scale(view_box, self.canvas.inset(self.padding))
    }

    pub fn scale(&self, view_box: Size) -> f64 {
        self.fit_scale(view_box) * self.zoom
    }

    /// Size of the drawn map on the canvas.
    pub fn map_size(&self, view_box: Size) -> Size {
        view_box.scale(self.scale(view_box))
    }

    /// Top-left corner of the drawn map on the canvas.
    pub fn frame_origin(&self, view_box: Size) -> Point {
        let map = self.map_size(view_box);
        Point::new(
            self.canvas.width / 2. + self.offset.x - map.width / 2.,
            self.canvas.height / 2. + self.offset.y - map.height / 2.,
        )
    }

    pub fn transform(&self, view_box: Size) -> ViewportTransform {
        ViewportTransform::new(self.scale(view_box), self.frame_origin(view_box))
    }

    /// Map a canvas point (e.g. a tap) to view-box coordinates.
    pub fn locate(&self, view_box: Size, canvas_point: Point) -> Option<Point> {
        self.transform(view_box).invert(canvas_point)
    }
}

/// State of pinch-zoom and drag gestures over a map.
///
/// During a gesture the live value is derived from the value committed
/// when the previous gesture ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPan {
    zoom: f64,
    last_zoom: f64,
    offset: Point,
    last_offset: Point,
}

impl Default for ZoomPan {
    fn default() -> Self {
        Self {
            zoom: 1.,
            last_zoom: 1.,
            offset: Point::ORIGIN,
            last_offset: Point::ORIGIN,
        }
    }
}

impl ZoomPan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Pinch in progress with cumulative magnification `value`.
    pub fn magnify(&mut self, value: f64) {
        self.zoom = clamp_zoom(self.last_zoom * value);
    }

    pub fn end_magnify(&mut self) {
        self.last_zoom = self.zoom;
    }

    /// Drag in progress with cumulative translation `(dx, dy)`.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.offset = self.last_offset + Point::new(dx, dy);
    }

    pub fn end_drag(&mut self) {
        self.last_offset = self.offset;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `layout` with this state's zoom and offset applied.
    pub fn apply(&self, layout: MapLayout) -> MapLayout {
        layout.with_zoom(self.zoom).with_offset(self.offset)
    }
}

/// Which region is selected, and whether its details are showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
    details_visible: bool,
}

impl Selection {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn details_visible(&self) -> bool {
        self.details_visible
    }

    /// Handle a tap which hit `code`, or empty map if `None`.
    ///
    /// Tapping a new region selects it and shows its details; tapping the
    /// selected region again toggles the details; tapping empty map
    /// clears the selection.
    pub fn tap(&mut self, code: Option<&str>) {
        match code {
            None => {
                self.selected = None;
                self.details_visible = false;
            }
            Some(c) if self.selected.as_deref() == Some(c) => {
                self.details_visible = !self.details_visible;
            }
            Some(c) => {
                self.selected = Some(c.to_string());
                self.details_visible = true;
            }
        }
    }
}
