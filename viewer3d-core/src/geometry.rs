/// Geometry primitives for loaded models
use nalgebra::{Point3, Vector3};

/// A single model vertex in world coordinates
pub type Point = Point3<f64>;

/// A triangle face as indices into [`Model::vertices`]
pub type Face = [usize; 3];

/// A 3D model: an ordered vertex collection plus triangles indexing into it.
///
/// Faces refer to vertices by position, so anything mutating `vertices`
/// must keep their order and length intact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub vertices: Vec<Point>,
    pub faces: Vec<Face>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    /// Append a vertex and return its index
    pub fn add_vertex(&mut self, point: Point) -> usize {
        self.vertices.push(point);
        self.vertices.len() - 1
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Unit normal of a face from the current vertex positions.
    ///
    /// Returns `None` for degenerate (zero-area) faces and for faces that
    /// reference a vertex past the end of the collection.
    pub fn face_normal(&self, face: &Face) -> Option<Vector3<f64>> {
        let v0 = self.vertices.get(face[0])?;
        let v1 = self.vertices.get(face[1])?;
        let v2 = self.vertices.get(face[2])?;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2).try_normalize(f64::EPSILON)
    }

    /// Axis-aligned bounds as `(min, max)`, `None` for an empty model
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        }))
    }

    /// Mean of all vertex positions
    pub fn centroid(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords);
        Some(Point::from(sum / self.vertices.len() as f64))
    }

    /// An axis-aligned cube centred on the origin, 8 vertices and 12 faces
    pub fn cube(size: f64) -> Self {
        let h = size / 2.0;
        let mut model = Self::with_capacity(8, 12);

        for &(x, y, z) in &[
            (-h, -h, -h),
            (h, -h, -h),
            (h, h, -h),
            (-h, h, -h),
            (-h, -h, h),
            (h, -h, h),
            (h, h, h),
            (-h, h, h),
        ] {
            model.add_vertex(Point::new(x, y, z));
        }

        // Counter-clockwise seen from outside
        for face in [
            // front (+z)
            [4, 5, 6],
            [4, 6, 7],
            // back (-z)
            [0, 3, 2],
            [0, 2, 1],
            // top (+y)
            [3, 7, 6],
            [3, 6, 2],
            // bottom (-y)
            [0, 1, 5],
            [0, 5, 4],
            // right (+x)
            [1, 2, 6],
            [1, 6, 5],
            // left (-x)
            [0, 4, 7],
            [0, 7, 3],
        ] {
            model.add_face(face);
        }

        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_normals_point_outwards() {
        let cube = Model::cube(2.0);
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.faces.len(), 12);

        let centre = cube.centroid().unwrap();
        for face in &cube.faces {
            let normal = cube.face_normal(face).unwrap();
            let to_face = cube.vertices[face[0]] - centre;
            assert!(normal.dot(&to_face) > 0.0);
        }
    }

    #[test]
    fn test_bounding_box_and_centroid() {
        let cube = Model::cube(2.0);
        let (min, max) = cube.bounding_box().unwrap();
        assert_eq!(min, Point::new(-1.0, -1.0, -1.0));
        assert_eq!(max, Point::new(1.0, 1.0, 1.0));
        assert_relative_eq!(cube.centroid().unwrap(), Point::origin());

        let empty = Model::new();
        assert!(empty.bounding_box().is_none());
        assert!(empty.centroid().is_none());
    }

    #[test]
    fn test_degenerate_face_has_no_normal() {
        let mut model = Model::new();
        let a = model.add_vertex(Point::new(0.0, 0.0, 0.0));
        let b = model.add_vertex(Point::new(1.0, 0.0, 0.0));
        let c = model.add_vertex(Point::new(2.0, 0.0, 0.0));
        assert!(model.face_normal(&[a, b, c]).is_none());
    }

    #[test]
    fn test_face_past_the_end_has_no_normal() {
        let mut model = Model::cube(2.0);
        model.add_face([0, 1, 8]);
        assert!(model.face_normal(&[0, 1, 8]).is_none());
        assert!(model.face_normal(&model.faces[0]).is_some());
    }
}
