use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use raylib::prelude::*;
use tracing::{info, warn};

use crate::constants::*;
use crate::geometry::{cover_rect, dot_at, dot_centers, DOT_RADIUS};
use crate::markup::resolve_background;
use crate::slider::HeroSlider;
use crate::texture_loader::load_texture_with_exif_rotation;

const TEXT_LEFT: i32 = 160;
const TITLE_SIZE: i32 = 84;
const SUBTITLE_SIZE: i32 = 36;

/// Drives a `HeroSlider` and draws its layers, text and dots.
pub struct HeroEngine {
    slider: HeroSlider,
    page_dir: PathBuf,
    // Keyed by background reference; a failed load stays absent and draws black
    textures: HashMap<String, Texture2D>,
}

impl HeroEngine {
    pub fn new(slider: HeroSlider, page_dir: PathBuf) -> Self {
        Self { slider, page_dir, textures: HashMap::new() }
    }

    /// Dot clicks, mapped from window coordinates into the framebuffer.
    fn handle_input(&mut self, rl: &RaylibHandle) {
        if !rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            return;
        }
        let mouse = rl.get_mouse_position();
        let x = mouse.x * RENDER_WIDTH as f32 / rl.get_screen_width() as f32;
        let y = mouse.y * RENDER_HEIGHT as f32 / rl.get_screen_height() as f32;
        if let Some(dot) = dot_at(self.slider.slide_count(), x, y) {
            info!(dot, "slide selected");
            self.slider.on_user_select(dot);
        }
    }

    fn draw(&self, d: &mut impl RaylibDraw) {
        d.clear_background(Color::BLACK);

        for layer in self.slider.layers() {
            if !layer.is_visible() {
                continue;
            }
            let Some(texture) = layer.background().and_then(|bg| self.textures.get(bg)) else {
                continue;
            };
            let tex_width = texture.width() as f32;
            let tex_height = texture.height() as f32;
            let dest = cover_rect(tex_width, tex_height, layer.offset());

            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, tex_width, tex_height),
                Rectangle::new(dest.x, dest.y, dest.width, dest.height),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE.fade(layer.opacity()),
            );
        }

        let text = self.slider.text();
        let title_y = RENDER_HEIGHT / 2 - TITLE_SIZE;
        d.draw_text(&text.title, TEXT_LEFT, title_y, TITLE_SIZE, Color::WHITE);
        d.draw_text(&text.subtitle, TEXT_LEFT, title_y + TITLE_SIZE + 24, SUBTITLE_SIZE, Color::LIGHTGRAY);

        for (i, (x, y)) in dot_centers(self.slider.slide_count()).into_iter().enumerate() {
            let color = if i == text.active_dot { Color::WHITE } else { Color::WHITE.fade(0.4) };
            d.draw_circle(x as i32, y as i32, DOT_RADIUS, color);
        }
    }
}

impl crate::engine::Engine for HeroEngine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool {
        for slide in self.slider.slides().to_vec() {
            if self.textures.contains_key(&slide.background) {
                continue;
            }
            let path = resolve_background(&self.page_dir, &slide.background);
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => {
                    self.textures.insert(slide.background.clone(), texture);
                }
                Err(e) => warn!("failed to load background: {:#}", e),
            }
        }
        info!(slides = self.slider.slide_count(), backgrounds = self.textures.len(), "hero ready");
        true
    }

    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool {
        self.handle_input(rl);
        self.slider.update(Duration::from_secs_f32(dt.max(0.0)));

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            self.draw(&mut d);
        });

        true
    }
}
