//! Editable shape models
//!
//! All coordinates are in internal units. Each model is a plain data type;
//! the point editing logic lives in [`crate::behavior`].

use edakit_core::Vector;
use serde::{Deserialize, Serialize};

mod arc;
mod bezier;
mod circle;
mod polygon;
mod rectangle;
mod segment;
mod table_cell;

pub use arc::ArcShape;
pub use bezier::BezierShape;
pub use circle::CircleShape;
pub use polygon::{PolySet, Polygon};
pub use rectangle::RectangleShape;
pub use segment::SegmentShape;
pub use table_cell::TableCellShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Segment,
    Circle,
    Bezier,
    Arc,
    Polygon,
    Rectangle,
    TableCell,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShapeKind::Segment => "segment",
            ShapeKind::Circle => "circle",
            ShapeKind::Bezier => "bezier",
            ShapeKind::Arc => "arc",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::TableCell => "table cell",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Segment(SegmentShape),
    Circle(CircleShape),
    Bezier(BezierShape),
    Arc(ArcShape),
    Polygon(PolySet),
    Rectangle(RectangleShape),
    TableCell(TableCellShape),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Bezier(_) => ShapeKind::Bezier,
            Shape::Arc(_) => ShapeKind::Arc,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::TableCell(_) => ShapeKind::TableCell,
        }
    }

    pub fn translate(&mut self, by: &Vector) {
        match self {
            Shape::Segment(s) => s.translate(by),
            Shape::Circle(s) => s.translate(by),
            Shape::Bezier(s) => s.translate(by),
            Shape::Arc(s) => s.translate(by),
            Shape::Polygon(s) => s.translate(by),
            Shape::Rectangle(s) => s.translate(by),
            Shape::TableCell(s) => s.translate(by),
        }
    }

    /// The more general shape this one turns into when its own point
    /// editor can no longer represent it
    pub fn generalized(&self) -> Option<Shape> {
        match self {
            Shape::Rectangle(rect) => Some(Shape::Polygon(rect.to_polygon())),
            _ => None,
        }
    }
}

impl From<SegmentShape> for Shape {
    fn from(s: SegmentShape) -> Self {
        Shape::Segment(s)
    }
}

impl From<CircleShape> for Shape {
    fn from(s: CircleShape) -> Self {
        Shape::Circle(s)
    }
}

impl From<BezierShape> for Shape {
    fn from(s: BezierShape) -> Self {
        Shape::Bezier(s)
    }
}

impl From<ArcShape> for Shape {
    fn from(s: ArcShape) -> Self {
        Shape::Arc(s)
    }
}

impl From<PolySet> for Shape {
    fn from(s: PolySet) -> Self {
        Shape::Polygon(s)
    }
}

impl From<RectangleShape> for Shape {
    fn from(s: RectangleShape) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<TableCellShape> for Shape {
    fn from(s: TableCellShape) -> Self {
        Shape::TableCell(s)
    }
}
