use edakit_core::{Point, Vector};
use serde::{Deserialize, Serialize};

/// One polygon: a closed outline and any number of closed holes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub outline: Vec<Point>,
    #[serde(default)]
    pub holes: Vec<Vec<Point>>,
}

impl Polygon {
    pub fn new(outline: Vec<Point>) -> Self {
        Self {
            outline,
            holes: Vec::new(),
        }
    }

    pub fn with_hole(mut self, hole: Vec<Point>) -> Self {
        self.holes.push(hole);
        self
    }

    /// Outline first, then holes in order
    pub fn contours(&self) -> impl Iterator<Item = &Vec<Point>> {
        std::iter::once(&self.outline).chain(self.holes.iter())
    }

    fn contours_mut(&mut self) -> impl Iterator<Item = &mut Vec<Point>> {
        std::iter::once(&mut self.outline).chain(self.holes.iter_mut())
    }
}

/// A set of polygons, each possibly with holes
///
/// Vertices are addressed by a flat index running through every contour
/// of every polygon (outline first, then its holes).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolySet {
    pub polygons: Vec<Polygon>,
}

impl PolySet {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// A single polygon without holes
    pub fn from_outline(outline: Vec<Point>) -> Self {
        Self::new(vec![Polygon::new(outline)])
    }

    /// All contours in flat vertex order
    pub fn contours(&self) -> impl Iterator<Item = &Vec<Point>> {
        self.polygons.iter().flat_map(Polygon::contours)
    }

    pub fn total_vertices(&self) -> usize {
        self.contours().map(Vec::len).sum()
    }

    /// Every vertex in flat order
    pub fn vertices(&self) -> impl Iterator<Item = &Point> {
        self.contours().flatten()
    }

    pub fn vertices_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        self.polygons
            .iter_mut()
            .flat_map(Polygon::contours_mut)
            .flat_map(|contour| contour.iter_mut())
    }

    pub fn vertex(&self, index: usize) -> Option<Point> {
        self.vertices().nth(index).copied()
    }

    /// Overwrite the vertex at flat `index`; returns `false` when out of range
    pub fn set_vertex(&mut self, index: usize, position: Point) -> bool {
        match self.vertices_mut().nth(index) {
            Some(vertex) => {
                *vertex = position;
                true
            }
            None => false,
        }
    }

    /// Remove zero-length edges, including the closing edge of each contour.
    ///
    /// Returns the number of vertices removed.
    pub fn remove_null_segments(&mut self) -> usize {
        let mut removed = 0;
        for contour in self.polygons.iter_mut().flat_map(Polygon::contours_mut) {
            let before = contour.len();
            contour.dedup();
            while contour.len() > 1 && contour.first() == contour.last() {
                contour.pop();
            }
            removed += before - contour.len();
        }
        removed
    }

    pub fn translate(&mut self, by: &Vector) {
        for vertex in self.vertices_mut() {
            *vertex += by;
        }
    }
}
