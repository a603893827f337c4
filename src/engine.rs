use raylib::prelude::*;

/// A frame-driven scene rendered into a fixed-size framebuffer.
pub trait Engine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool;
    /// Returns false once the scene has nothing more to show.
    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool;
}
