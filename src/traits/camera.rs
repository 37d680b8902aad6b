use glam::{Mat4, Vec2, Vec3};

/// Pointer-driven camera abstraction
pub trait CameraController {
    /// Start a drag gesture at the pointer position (screen space, y up)
    fn press(&mut self, pointer: Vec2);

    /// Pointer moved; only has an effect while a drag is active
    fn drag(&mut self, pointer: Vec2);

    /// End the drag gesture
    fn release(&mut self);

    /// Apply pending drag movement scaled by elapsed time
    fn update(&mut self, delta_time: f32);

    /// View matrix handed to the host renderer
    fn view_matrix(&self) -> Mat4;

    /// Camera position in world space
    fn position(&self) -> Vec3;

    /// Camera forward direction
    fn forward(&self) -> Vec3;
}
