use edakit_core::{pt, Point, Vector};
use lyon::geom::{point, CubicBezierSegment};
use serde::{Deserialize, Serialize};

/// A cubic bezier curve and its cached polyline approximation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierShape {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
    /// Flattened curve, regenerated by [`BezierShape::rebuild_polyline`]
    #[serde(skip)]
    polyline: Vec<Point>,
}

impl PartialEq for BezierShape {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.control1 == other.control1
            && self.control2 == other.control2
            && self.end == other.end
    }
}

impl BezierShape {
    pub fn new(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
            polyline: Vec::new(),
        }
    }

    fn segment(&self) -> CubicBezierSegment<f64> {
        CubicBezierSegment {
            from: point(self.start.x, self.start.y),
            ctrl1: point(self.control1.x, self.control1.y),
            ctrl2: point(self.control2.x, self.control2.y),
            to: point(self.end.x, self.end.y),
        }
    }

    /// Regenerate the polyline so no point of the curve is farther than
    /// `max_error` from it
    pub fn rebuild_polyline(&mut self, max_error: f64) {
        let curve = self.segment();
        self.polyline.clear();
        self.polyline.push(self.start);
        self.polyline
            .extend(curve.flattened(max_error).map(|p| pt(p.x, p.y)));
    }

    /// The last generated polyline; empty until the first rebuild
    pub fn polyline(&self) -> &[Point] {
        &self.polyline
    }

    pub fn translate(&mut self, by: &Vector) {
        self.start += by;
        self.control1 += by;
        self.control2 += by;
        self.end += by;
        for p in &mut self.polyline {
            *p += by;
        }
    }
}
