use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use rubiks_cube::camera::DragCamera;
use rubiks_cube::cli::Cli;
use rubiks_cube::config::Config;
use rubiks_cube::core::{Button, Controller, Throttled, WinitController};
use rubiks_cube::cube::{Cube, KeyBindings, Move, MoveStatus};
use rubiks_cube::frame::FrameIterator;
use rubiks_cube::script;
use rubiks_cube::traits::CameraController;

// === Constants ===

const STATUS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    cube: Cube,
    bindings: KeyBindings,
    camera: DragCamera,
    controller: WinitController,
    frames: FrameIterator,
    status_timer: Throttled,
    frame_count: u32,
    fps: f32,
}

impl App {
    fn new(config: &Config) -> Self {
        Self {
            window: None,
            cube: Cube::solved(config.cube_settings()),
            bindings: config.bindings.clone(),
            camera: DragCamera::new(config.camera_speed),
            controller: WinitController::new(),
            frames: FrameIterator::new(),
            status_timer: Throttled::new(STATUS_UPDATE_INTERVAL),
            frame_count: 0,
            fps: 0.0,
        }
    }

    /// Pointer events go to the camera; everything else to the controller
    fn handle_pointer(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match (state, self.controller.pointer()) {
                (ElementState::Pressed, Some(pointer)) => self.camera.press(pointer),
                (ElementState::Released, _) => self.camera.release(),
                _ => {}
            },
            WindowEvent::CursorMoved { .. } => {
                if let Some(pointer) = self.controller.pointer() {
                    self.camera.drag(pointer);
                }
            }
            _ => {}
        }
    }

    fn dispatch_presses(&mut self, event_loop: &ActiveEventLoop) {
        for button in self.controller.take_presses() {
            if button == Button::Escape {
                event_loop.exit();
                return;
            }
            match self.bindings.dispatch(&mut self.cube, button) {
                Ok(Some(MoveStatus::Started)) | Ok(None) => {}
                Ok(Some(MoveStatus::Dropped)) => log::debug!("{button:?} ignored, cube is turning"),
                Err(e) => log::warn!("move aborted: {e}"),
            }
        }
    }

    fn update(&mut self, event_loop: &ActiveEventLoop) {
        let Some(frame) = self.frames.next() else {
            return;
        };

        self.dispatch_presses(event_loop);
        self.camera.update(frame.delta);
        if let Some(done) = self.cube.tick(frame.delta) {
            log::info!(
                "frame {}: {done} committed, {} moves",
                frame.number,
                self.cube.completed_moves()
            );
        }

        self.frame_count += 1;
        let elapsed = self.status_timer.elapsed() + frame.delta;
        if self.status_timer.try_tick(frame.delta) {
            self.fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.refresh_title();
        }
    }

    fn refresh_title(&self) {
        if let Some(window) = &self.window {
            let state = if self.cube.is_solved() { "solved" } else { "scrambled" };
            window.set_title(&format!(
                "Rubik's Cube - {} moves, {state} - {:.0} fps",
                self.cube.completed_moves(),
                self.fps
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Rubik's Cube")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            self.controller
                .set_window_height(window.inner_size().height as f32);
            self.window = Some(window);
            self.refresh_title();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.controller.process_event(&event);
        self.handle_pointer(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.update(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run_headless(config: &Config, moves: &str, hz: f32) -> Result<()> {
    let moves = Move::parse_sequence(moves)?;
    let mut cube = Cube::solved(config.cube_settings());
    let report = script::run_moves(&mut cube, &moves, hz)?;
    log::info!(
        "{} moves in {} frames ({:.2} s simulated)",
        report.moves,
        report.frames,
        report.seconds
    );

    println!("{}", serde_json::to_string_pretty(&cube.snapshot())?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;

    if let Some(moves) = &cli.moves {
        return run_headless(&config, moves, cli.hz);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&config);

    println!("Rubik's Cube - drag with the left mouse button to move the camera, Escape to quit");
    println!("Moves: {}", config.bindings.describe());
    event_loop.run_app(&mut app)?;

    Ok(())
}
