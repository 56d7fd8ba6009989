use super::{check_point_count_ge, PointEditBehavior};
use crate::commit::{Commit, UpdatedItem};
use crate::edit_points::{EditPointId, EditPoints};
use crate::model::{PolySet, Shape};

/// Edits every vertex of a polygon set, holes included.
///
/// One point per vertex, a break after each contour, and one converging
/// edit line per edge.
pub struct PolygonPointEditBehavior {
    polygon: PolySet,
}

impl PolygonPointEditBehavior {
    pub fn new(polygon: PolySet) -> Self {
        Self { polygon }
    }

    pub fn polygon(&self) -> &PolySet {
        &self.polygon
    }

    pub fn polygon_mut(&mut self) -> &mut PolySet {
        &mut self.polygon
    }

    /// Append points, contour breaks and edge lines for `outline`
    pub fn build_for_poly_outline(points: &mut EditPoints, outline: &PolySet) {
        for contour in outline.contours() {
            for vertex in contour {
                points.add_point(*vertex);
            }
            if !contour.is_empty() {
                points.add_break();
            }
        }

        // Lines refer to points, so they go in once every point exists.
        for index in 0..points.points_len() {
            let next = if points.is_contour_end(index) {
                points.contour_start_index(index)
            } else {
                index + 1
            };
            let origin = points.point(index).id;
            let end = points.point(next).id;
            points.add_line(origin, end);
        }

        for index in 0..points.lines_len() {
            let constraint = points.converging_constraint(index);
            points.set_line_constraint(index, constraint);
        }
    }

    /// Copy vertex positions into the points, rebuilding them from scratch
    /// when the vertex count changed
    pub fn update_points_from_outline(outline: &PolySet, points: &mut EditPoints) {
        let vertices = outline.total_vertices();
        if points.points_len() != vertices {
            tracing::debug!(
                before = points.points_len(),
                after = vertices,
                "Polygon vertex count changed, rebuilding edit points"
            );
            points.clear();
            Self::build_for_poly_outline(points, outline);
            return;
        }

        for (index, vertex) in outline.vertices().enumerate() {
            points.set_position(index, *vertex);
        }
    }

    /// Copy point positions into the outline and refresh the constraints of
    /// every edge line not touched by the drag
    pub fn update_outline_from_points(outline: &mut PolySet, edited: EditPointId, points: &mut EditPoints) {
        check_point_count_ge!(points, outline.total_vertices(), "polygon");

        for (index, vertex) in outline.vertices_mut().enumerate() {
            *vertex = points.position(index);
        }

        for index in 0..points.lines_len() {
            let line = points.line(index);
            if line.id != edited && line.origin != edited && line.end != edited {
                let constraint = points.converging_constraint(index);
                points.set_line_constraint(index, constraint);
            }
        }
    }
}

impl PointEditBehavior for PolygonPointEditBehavior {
    fn make_points(&self, points: &mut EditPoints) {
        Self::build_for_poly_outline(points, &self.polygon);
    }

    fn update_points(&mut self, points: &mut EditPoints) -> bool {
        Self::update_points_from_outline(&self.polygon, points);
        true
    }

    fn update_item(
        &mut self,
        edited: EditPointId,
        points: &mut EditPoints,
        _commit: &mut dyn Commit,
        _updated: &mut Vec<UpdatedItem>,
    ) {
        Self::update_outline_from_points(&mut self.polygon, edited, points);
    }

    fn finalize_item(&mut self, points: &mut EditPoints, _commit: &mut dyn Commit) {
        let removed = self.polygon.remove_null_segments();
        if removed > 0 {
            tracing::debug!(removed, "Removed null polygon segments");
            Self::update_points_from_outline(&self.polygon, points);
        }
    }

    fn shape(&self) -> Shape {
        Shape::Polygon(self.polygon.clone())
    }
}
