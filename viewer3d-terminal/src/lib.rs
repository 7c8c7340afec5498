/// Terminal viewer that moves, rotates and scales a model from the keyboard
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::info;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use viewer3d_core::{Camera, Model};

pub mod config;
pub mod controller;
pub mod renderer;

pub use config::ViewerConfig;
pub use controller::{Action, Controller};
pub use renderer::AsciiRenderer;

/// Main application struct for the terminal viewer
pub struct TerminalApp {
    controller: Controller,
    camera: Camera,
    renderer: AsciiRenderer,
    frame_time: Duration,
    running: bool,
    dirty: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(model: Model, config: ViewerConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        let mut camera = Camera::new(width as u32, height as u32);
        camera.frame(&model);

        Ok(Self {
            frame_time: Duration::from_millis(1000 / u64::from(config.fps.max(1))),
            controller: Controller::new(model, config),
            camera,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            dirty: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?)?;
            }

            // Geometry only changes on input, so idle frames skip the raster
            if self.dirty {
                self.render()?;
                self.dirty = false;
            }

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
                self.dirty = true;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> io::Result<()> {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press | KeyEventKind::Repeat,
                ..
            }) => {
                match self.controller.handle_key(code) {
                    Action::Quit => {
                        info!("quit requested");
                        self.running = false;
                    }
                    Action::ToggleProjection => {
                        self.camera.mode = self.camera.mode.toggled();
                    }
                    Action::Reframe => self.camera.frame(self.controller.model()),
                    Action::Transformed(..) | Action::Selected(_) => {}
                    Action::Ignored => return Ok(()),
                }
                self.dirty = true;
            }
            Event::Resize(width, height) => {
                self.renderer.resize(width as usize, height as usize);
                self.camera.set_viewport(width as u32, height as u32);
                execute!(stdout(), terminal::Clear(ClearType::All))?;
                self.dirty = true;
            }
            _ => {}
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        self.renderer.render_model(self.controller.model(), &self.camera);

        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let status = match self.controller.status() {
            Some(error) => format!("error: {}", error),
            None => format!("{:?}", self.camera.mode),
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Viewer3D | {} | {} | FPS: {:.1} | M/R/S=Mode X/Y/Z=Axis +/-=Apply P=Projection F=Frame Q=Quit",
                self.controller.movement(),
                status,
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
