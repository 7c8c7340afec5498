/// Affine transformation strategies applied in place to a vertex collection
use nalgebra::{Rotation3, Vector3};

use crate::geometry::Point;
use crate::movement::{Axis, Movement, MovementKind};

/// A family of transformations that can be applied to a model's vertices.
///
/// Implementations mutate `vertices` in place and never reorder or resize
/// it. A movement outside the strategy's family leaves every point
/// untouched; callers that care should check [`supports`] first.
///
/// [`supports`]: TransformationStrategy::supports
pub trait TransformationStrategy: Send + Sync {
    fn transform(&self, vertices: &mut [Point], movement: Movement, magnitude: f64);

    fn supports(&self, movement: Movement) -> bool;

    fn name(&self) -> &'static str;
}

/// Rotation about a coordinate axis through the origin, angle in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotate;

impl Rotate {
    fn rotation(axis: Axis, degrees: f64) -> Rotation3<f64> {
        let angle = degrees.to_radians();
        match axis {
            Axis::X => Rotation3::from_axis_angle(&Vector3::x_axis(), angle),
            Axis::Y => Rotation3::from_axis_angle(&Vector3::y_axis(), angle),
            Axis::Z => Rotation3::from_axis_angle(&Vector3::z_axis(), angle),
        }
    }
}

impl TransformationStrategy for Rotate {
    fn transform(&self, vertices: &mut [Point], movement: Movement, angle: f64) {
        let axis = match (movement.kind(), movement.axis()) {
            (MovementKind::Rotate, Some(axis)) => axis,
            _ => return,
        };

        let rotation = Self::rotation(axis, angle);
        for point in vertices.iter_mut() {
            *point = rotation * *point;
        }
    }

    fn supports(&self, movement: Movement) -> bool {
        movement.kind() == MovementKind::Rotate
    }

    fn name(&self) -> &'static str {
        "rotate"
    }
}

/// Translation along a single coordinate axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Move;

impl TransformationStrategy for Move {
    fn transform(&self, vertices: &mut [Point], movement: Movement, step: f64) {
        let axis = match (movement.kind(), movement.axis()) {
            (MovementKind::Move, Some(axis)) => axis.index(),
            _ => return,
        };

        for point in vertices.iter_mut() {
            point[axis] += step;
        }
    }

    fn supports(&self, movement: Movement) -> bool {
        movement.kind() == MovementKind::Move
    }

    fn name(&self) -> &'static str {
        "move"
    }
}

/// Uniform scaling about the origin. Factors compound across calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scale;

impl TransformationStrategy for Scale {
    fn transform(&self, vertices: &mut [Point], movement: Movement, factor: f64) {
        if movement != Movement::Scale {
            return;
        }

        for point in vertices.iter_mut() {
            point.coords *= factor;
        }
    }

    fn supports(&self, movement: Movement) -> bool {
        movement == Movement::Scale
    }

    fn name(&self) -> &'static str {
        "scale"
    }
}

/// Shared, long-lived instances of every strategy
pub struct Strategies;

impl Strategies {
    pub const ROTATE: &'static dyn TransformationStrategy = &Rotate;
    pub const MOVE: &'static dyn TransformationStrategy = &Move;
    pub const SCALE: &'static dyn TransformationStrategy = &Scale;

    /// The strategy responsible for `movement`
    pub fn for_movement(movement: Movement) -> &'static dyn TransformationStrategy {
        Self::for_kind(movement.kind())
    }

    pub fn for_kind(kind: MovementKind) -> &'static dyn TransformationStrategy {
        match kind {
            MovementKind::Move => Self::MOVE,
            MovementKind::Rotate => Self::ROTATE,
            MovementKind::Scale => Self::SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-9;

    fn sample() -> Vec<Point> {
        vec![
            Point::new(1.0, 2.0, 3.0),
            Point::new(-4.5, 0.25, 7.0),
            Point::new(0.0, -1.0, 0.5),
        ]
    }

    #[test]
    fn test_zero_angle_is_identity() {
        for movement in [Movement::RotateX, Movement::RotateY, Movement::RotateZ] {
            let mut vertices = sample();
            Rotate.transform(&mut vertices, movement, 0.0);
            for (rotated, original) in vertices.iter().zip(sample()) {
                assert_relative_eq!(*rotated, original, epsilon = EPS);
            }
        }
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let mut vertices = vec![Point::new(1.0, 0.0, 0.0)];
        Rotate.transform(&mut vertices, Movement::RotateZ, 90.0);
        assert_relative_eq!(vertices[0], Point::new(0.0, 1.0, 0.0), epsilon = EPS);
    }

    #[test]
    fn test_rotate_matches_axis_formulas() {
        let (x, y, z) = (1.0, 2.0, 3.0);
        let a = 30.0_f64.to_radians();
        let (sin, cos) = a.sin_cos();

        let mut about_x = vec![Point::new(x, y, z)];
        Rotate.transform(&mut about_x, Movement::RotateX, 30.0);
        assert_relative_eq!(
            about_x[0],
            Point::new(x, y * cos - z * sin, y * sin + z * cos),
            epsilon = EPS
        );

        let mut about_y = vec![Point::new(x, y, z)];
        Rotate.transform(&mut about_y, Movement::RotateY, 30.0);
        assert_relative_eq!(
            about_y[0],
            Point::new(z * sin + x * cos, y, z * cos - x * sin),
            epsilon = EPS
        );

        let mut about_z = vec![Point::new(x, y, z)];
        Rotate.transform(&mut about_z, Movement::RotateZ, 30.0);
        assert_relative_eq!(
            about_z[0],
            Point::new(x * cos - y * sin, x * sin + y * cos, z),
            epsilon = EPS
        );
    }

    #[test]
    fn test_rotations_do_not_commute() {
        let mut xy = sample();
        Rotate.transform(&mut xy, Movement::RotateX, 40.0);
        Rotate.transform(&mut xy, Movement::RotateY, 25.0);

        let mut yx = sample();
        Rotate.transform(&mut yx, Movement::RotateY, 25.0);
        Rotate.transform(&mut yx, Movement::RotateX, 40.0);

        let differs = xy
            .iter()
            .zip(&yx)
            .any(|(a, b)| (a - b).norm() > 1e-6);
        assert!(differs);
    }

    #[test]
    fn test_move_x() {
        let mut vertices = vec![Point::new(2.0, 3.0, 4.0)];
        Move.transform(&mut vertices, Movement::MoveX, 5.0);
        assert_eq!(vertices[0], Point::new(7.0, 3.0, 4.0));
    }

    #[test]
    fn test_move_only_touches_its_axis() {
        let mut vertices = sample();
        Move.transform(&mut vertices, Movement::MoveY, -1.5);
        Move.transform(&mut vertices, Movement::MoveZ, 2.0);
        for (moved, original) in vertices.iter().zip(sample()) {
            assert_eq!(moved.x, original.x);
            assert_eq!(moved.y, original.y - 1.5);
            assert_eq!(moved.z, original.z + 2.0);
        }
    }

    #[test]
    fn test_move_and_back_restores() {
        let mut vertices = sample();
        Move.transform(&mut vertices, Movement::MoveX, 0.3);
        Move.transform(&mut vertices, Movement::MoveX, -0.3);
        for (restored, original) in vertices.iter().zip(sample()) {
            assert_relative_eq!(*restored, original, epsilon = EPS);
        }
    }

    #[test]
    fn test_scale_doubles() {
        let mut vertices = vec![Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.0, 2.0)];
        Scale.transform(&mut vertices, Movement::Scale, 2.0);
        assert_eq!(
            vertices,
            vec![Point::new(2.0, 2.0, 2.0), Point::new(4.0, 4.0, 4.0)]
        );
    }

    #[test]
    fn test_scale_and_inverse_restores() {
        let mut vertices = sample();
        Scale.transform(&mut vertices, Movement::Scale, 3.7);
        Scale.transform(&mut vertices, Movement::Scale, 1.0 / 3.7);
        for (restored, original) in vertices.iter().zip(sample()) {
            assert_relative_eq!(*restored, original, epsilon = EPS);
        }
    }

    #[test]
    fn test_scale_zero_and_negative() {
        let mut collapsed = sample();
        Scale.transform(&mut collapsed, Movement::Scale, 0.0);
        assert!(collapsed.iter().all(|p| p.coords.norm() == 0.0));

        let mut mirrored = sample();
        Scale.transform(&mut mirrored, Movement::Scale, -1.0);
        for (m, original) in mirrored.iter().zip(sample()) {
            assert_eq!(m.coords, -original.coords);
        }
    }

    #[test]
    fn test_foreign_movement_is_noop() {
        let strategies: [&dyn TransformationStrategy; 3] = [&Rotate, &Move, &Scale];
        for strategy in strategies {
            for movement in Movement::ALL {
                if strategy.supports(movement) {
                    continue;
                }
                let mut vertices = sample();
                strategy.transform(&mut vertices, movement, 12.5);
                assert_eq!(vertices, sample(), "{} changed on {}", strategy.name(), movement);
            }
        }
    }

    #[test]
    fn test_order_and_length_preserved() {
        let mut vertices = sample();
        Rotate.transform(&mut vertices, Movement::RotateY, 180.0);
        assert_eq!(vertices.len(), 3);
        assert_relative_eq!(vertices[0], Point::new(-1.0, 2.0, -3.0), epsilon = EPS);
        assert_relative_eq!(vertices[1], Point::new(4.5, 0.25, -7.0), epsilon = EPS);
        assert_relative_eq!(vertices[2], Point::new(0.0, -1.0, -0.5), epsilon = EPS);
    }

    #[test]
    fn test_registry_picks_matching_strategy() {
        for movement in Movement::ALL {
            let strategy = Strategies::for_movement(movement);
            assert!(strategy.supports(movement));
        }
        assert_eq!(Strategies::for_movement(Movement::RotateY).name(), "rotate");
        assert_eq!(Strategies::for_kind(MovementKind::Scale).name(), "scale");
    }
}
