/// Kinds of model movement the transformer can apply
use std::fmt;
use std::str::FromStr;

use crate::error::ParseMovementError;

/// Coordinate axis a movement acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index into a point (x = 0, y = 1, z = 2)
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Family of strategy responsible for a movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKind {
    Move,
    Rotate,
    Scale,
}

/// A single requested transformation of a model.
///
/// The magnitude passed alongside it is a step in world units for the
/// `Move*` variants, an angle in degrees for `Rotate*` and a factor for
/// `Scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    MoveX,
    MoveY,
    MoveZ,
    RotateX,
    RotateY,
    RotateZ,
    Scale,
}

impl Movement {
    pub const ALL: [Movement; 7] = [
        Movement::MoveX,
        Movement::MoveY,
        Movement::MoveZ,
        Movement::RotateX,
        Movement::RotateY,
        Movement::RotateZ,
        Movement::Scale,
    ];

    pub fn kind(self) -> MovementKind {
        match self {
            Movement::MoveX | Movement::MoveY | Movement::MoveZ => MovementKind::Move,
            Movement::RotateX | Movement::RotateY | Movement::RotateZ => MovementKind::Rotate,
            Movement::Scale => MovementKind::Scale,
        }
    }

    /// Axis the movement is bound to, `None` for uniform scaling
    pub fn axis(self) -> Option<Axis> {
        match self {
            Movement::MoveX | Movement::RotateX => Some(Axis::X),
            Movement::MoveY | Movement::RotateY => Some(Axis::Y),
            Movement::MoveZ | Movement::RotateZ => Some(Axis::Z),
            Movement::Scale => None,
        }
    }

    /// Build the movement of `kind` along `axis`. Scale ignores the axis.
    pub fn from_parts(kind: MovementKind, axis: Axis) -> Self {
        match (kind, axis) {
            (MovementKind::Move, Axis::X) => Movement::MoveX,
            (MovementKind::Move, Axis::Y) => Movement::MoveY,
            (MovementKind::Move, Axis::Z) => Movement::MoveZ,
            (MovementKind::Rotate, Axis::X) => Movement::RotateX,
            (MovementKind::Rotate, Axis::Y) => Movement::RotateY,
            (MovementKind::Rotate, Axis::Z) => Movement::RotateZ,
            (MovementKind::Scale, _) => Movement::Scale,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Movement::MoveX => "move-x",
            Movement::MoveY => "move-y",
            Movement::MoveZ => "move-z",
            Movement::RotateX => "rotate-x",
            Movement::RotateY => "rotate-y",
            Movement::RotateZ => "rotate-z",
            Movement::Scale => "scale",
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Movement {
    type Err = ParseMovementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Movement::ALL
            .into_iter()
            .find(|movement| movement.as_str() == normalized)
            .ok_or_else(|| ParseMovementError(s.to_string()))
    }
}
