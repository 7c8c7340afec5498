/// Camera and projection utilities for displaying a model
use nalgebra::{Matrix4, Point3, Vector3};

use crate::geometry::{Model, Point};

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
        }
    }
}

/// Camera configuration for viewing a model.
///
/// The camera only maps points to the screen; it never changes the model's
/// vertices.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
    pub up: Vector3<f64>,
    pub fov: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub mode: ProjectionMode,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 5.0),
            target: Point3::origin(),
            up: Vector3::y(),
            fov: std::f64::consts::FRAC_PI_4,
            aspect: width as f64 / height.max(1) as f64,
            near: 0.1,
            far: 100.0,
            mode: ProjectionMode::Perspective,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width as f64 / height.max(1) as f64;
    }

    /// Aim at the model's bounding box centre from far enough along +z to
    /// see all of it
    pub fn frame(&mut self, model: &Model) {
        let Some((min, max)) = model.bounding_box() else {
            return;
        };
        let centre = nalgebra::center(&min, &max);
        let radius = ((max - min).norm() / 2.0).max(1e-3);
        let distance = radius / (self.fov / 2.0).sin();

        self.target = centre;
        self.position = centre + Vector3::z() * distance;
        self.near = (distance - radius).max(1e-3) * 0.5;
        self.far = (distance + radius) * 2.0;
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f64> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f64> {
        match self.mode {
            ProjectionMode::Perspective => {
                Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let distance = (self.position - self.target).norm();
                let height = 2.0 * distance * (self.fov / 2.0).tan();
                let width = height * self.aspect;
                Matrix4::new_orthographic(
                    -width / 2.0,
                    width / 2.0,
                    -height / 2.0,
                    height / 2.0,
                    self.near,
                    self.far,
                )
            }
        }
    }

    /// Project a model point to screen space as `(x, y, depth)`.
    ///
    /// Returns `None` for points outside the view volume.
    pub fn project_to_screen(
        &self,
        point: &Point,
        width: u32,
        height: u32,
    ) -> Option<(f64, f64, f64)> {
        let view_projection = self.projection_matrix() * self.view_matrix();
        project(&view_projection, point, width, height)
    }
}

/// Project with a precomputed view-projection matrix
pub fn project(
    view_projection: &Matrix4<f64>,
    point: &Point,
    width: u32,
    height: u32,
) -> Option<(f64, f64, f64)> {
    let clip = view_projection * point.to_homogeneous();

    // Behind the eye or degenerate
    if clip.w < 1e-9 {
        return None;
    }

    let ndc = clip.xyz() / clip.w;
    if ndc.iter().any(|c| !(-1.0..=1.0).contains(c)) {
        return None;
    }

    let screen_x = (ndc.x + 1.0) * 0.5 * width as f64;
    let screen_y = (1.0 - ndc.y) * 0.5 * height as f64;

    Some((screen_x, screen_y, ndc.z))
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(800, 600);
        assert_eq!(camera.mode, ProjectionMode::Perspective);
        assert_relative_eq!(camera.aspect, 800.0 / 600.0);
    }

    #[test]
    fn test_target_projects_to_screen_centre() {
        for mode in [ProjectionMode::Perspective, ProjectionMode::Orthographic] {
            let mut camera = Camera::new(80, 40);
            camera.mode = mode;
            let (x, y, _) = camera.project_to_screen(&Point::origin(), 80, 40).unwrap();
            assert_relative_eq!(x, 40.0, epsilon = 1e-9);
            assert_relative_eq!(y, 20.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_points_behind_camera_are_clipped() {
        let camera = Camera::new(80, 40);
        assert!(camera
            .project_to_screen(&Point::new(0.0, 0.0, 10.0), 80, 40)
            .is_none());
    }

    #[test]
    fn test_nearer_points_have_smaller_depth() {
        let camera = Camera::new(80, 40);
        let near = camera.project_to_screen(&Point::new(0.0, 0.0, 1.0), 80, 40);
        let far = camera.project_to_screen(&Point::new(0.0, 0.0, -1.0), 80, 40);
        let ((_, _, near), (_, _, far)) = (near.unwrap(), far.unwrap());
        assert!(near < far);
    }

    #[test]
    fn test_frame_keeps_model_in_view() {
        let mut model = Model::cube(2.0);
        for p in &mut model.vertices {
            p.coords *= 40.0;
            p.x += 100.0;
        }

        let mut camera = Camera::new(80, 80);
        camera.frame(&model);
        for p in &model.vertices {
            assert!(camera.project_to_screen(p, 80, 80).is_some());
        }
    }
}
