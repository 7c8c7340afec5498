/// Maps key presses to transform requests on the loaded model
use crossterm::event::KeyCode;
use log::{debug, error};
use viewer3d_core::{Axis, Model, Movement, MovementKind, ObjectTransformer, Strategies};

use crate::config::ViewerConfig;

/// What a key press asked the application to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    /// The model's vertices changed
    Transformed(Movement, f64),
    /// Strategy or axis selection changed
    Selected(Movement),
    ToggleProjection,
    Reframe,
    Ignored,
}

/// Owns the model and issues one transform call per key press
pub struct Controller {
    model: Model,
    transformer: ObjectTransformer<'static>,
    kind: MovementKind,
    axis: Axis,
    config: ViewerConfig,
    status: Option<String>,
}

impl Controller {
    pub fn new(model: Model, config: ViewerConfig) -> Self {
        let start = config.start;
        Self {
            model,
            transformer: ObjectTransformer::with_strategy(Strategies::for_movement(start)),
            kind: start.kind(),
            // Scale has no axis; keep one ready for switching modes
            axis: start.axis().unwrap_or(Axis::Y),
            config,
            status: None,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Movement the next transform key will request
    pub fn movement(&self) -> Movement {
        Movement::from_parts(self.kind, self.axis)
    }

    /// Last error reported to the user, if any
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('m') => self.select_kind(MovementKind::Move),
            KeyCode::Char('r') => self.select_kind(MovementKind::Rotate),
            KeyCode::Char('s') => self.select_kind(MovementKind::Scale),
            KeyCode::Char('x') => self.select_axis(Axis::X),
            KeyCode::Char('y') => self.select_axis(Axis::Y),
            KeyCode::Char('z') => self.select_axis(Axis::Z),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => {
                self.apply(true)
            }
            KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => self.apply(false),
            KeyCode::Char('p') => Action::ToggleProjection,
            KeyCode::Char('f') => Action::Reframe,
            _ => Action::Ignored,
        }
    }

    fn select_kind(&mut self, kind: MovementKind) -> Action {
        self.kind = kind;
        self.transformer.set_strategy(Strategies::for_kind(kind));
        self.status = None;
        debug!("selected {}", self.movement());
        Action::Selected(self.movement())
    }

    fn select_axis(&mut self, axis: Axis) -> Action {
        self.axis = axis;
        debug!("selected {}", self.movement());
        Action::Selected(self.movement())
    }

    fn apply(&mut self, forward: bool) -> Action {
        let movement = self.movement();
        let magnitude = self.config.magnitude(self.kind, forward);

        match self
            .transformer
            .transform_model(&mut self.model.vertices, movement, magnitude)
        {
            Ok(()) => {
                self.status = None;
                Action::Transformed(movement, magnitude)
            }
            Err(e) => {
                error!("{} by {} failed: {}", movement, magnitude, e);
                self.status = Some(e.to_string());
                Action::Ignored
            }
        }
    }
}
