use glam::{Mat4, Vec2, Vec3};

use crate::traits::CameraController;

pub const DEFAULT_CAMERA_SPEED: f32 = 5.0;

/// Pointer drag state
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Last pointer position seen during the drag
    pub last: Option<Vec2>,
    /// Movement not yet applied by `update`
    pub pending: Vec2,
}

/// Camera repositioned by dragging the pointer.
///
/// Horizontal drag moves along the camera's right axis and vertical drag
/// along its up axis, both inverted so the scene follows the pointer.
#[derive(Debug, Clone)]
pub struct DragCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    drag: DragState,
}

impl Default for DragCamera {
    fn default() -> Self {
        Self::new(DEFAULT_CAMERA_SPEED)
    }
}

impl DragCamera {
    /// Camera in front of and slightly above the cube, looking down -z
    pub fn new(speed: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 9.0),
            yaw: std::f32::consts::PI,
            pitch: -0.3,
            speed,
            drag: DragState::default(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.last.is_some()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn forward_vec(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward_vec().cross(Vec3::Y).normalize()
    }

    /// Local up, perpendicular to both forward and right
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward_vec()).normalize()
    }
}

impl CameraController for DragCamera {
    fn press(&mut self, pointer: Vec2) {
        self.drag.last = Some(pointer);
    }

    fn drag(&mut self, pointer: Vec2) {
        if let Some(last) = self.drag.last {
            self.drag.pending += pointer - last;
            self.drag.last = Some(pointer);
        }
    }

    fn release(&mut self) {
        self.drag.last = None;
    }

    fn update(&mut self, delta_time: f32) {
        let delta = std::mem::take(&mut self.drag.pending);
        let horizontal = -delta.x * self.speed * delta_time;
        let vertical = -delta.y * self.speed * delta_time;

        self.position += self.right() * horizontal + self.up() * vertical;
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward_vec(), self.up())
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward_vec()
    }
}
