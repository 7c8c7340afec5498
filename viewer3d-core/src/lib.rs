//! Viewer3D Core Library - model geometry and affine transformations
//!
//! Models are loaded into an ordered vertex collection that the
//! transformation strategies mutate in place. [`ObjectTransformer`] binds
//! one strategy at a time and forwards move, rotate and scale requests to
//! it.

pub mod error;
pub mod geometry;
pub mod movement;
pub mod obj;
pub mod projection;
pub mod transform;
pub mod transformer;

// Re-export commonly used types
pub use error::{ObjError, ParseMovementError, TransformError};
pub use geometry::{Face, Model, Point};
pub use movement::{Axis, Movement, MovementKind};
pub use projection::{Camera, ProjectionMode};
pub use transform::{Move, Rotate, Scale, Strategies, TransformationStrategy};
pub use transformer::ObjectTransformer;
