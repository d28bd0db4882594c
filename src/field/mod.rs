//! Animated particle background
//!
//! Points drift across the surface, bounce off its edges and are linked by
//! faint lines when close. The field is plain data; motion and drawing are
//! free functions over the point collection:
//! - Seeded RNG only (same seed, same field)
//! - Resizing always respawns the whole collection
//! - No browser dependencies (drawing goes through [`Surface`])

pub mod draw;
pub mod links;
pub mod motion;
pub mod point;

pub use draw::{Surface, render};
pub use links::{Link, link_opacity, links};
pub use motion::advance;
pub use point::{Point, point_count, spawn_points};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::FieldConfig;

/// The background field and the surface size it lives in
#[derive(Debug, Clone)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub points: Vec<Point>,
    pub config: FieldConfig,
    rng: Pcg32,
}

impl Field {
    pub fn new(width: f32, height: f32, seed: u64, config: FieldConfig) -> Self {
        let mut field = Self {
            width,
            height,
            points: Vec::new(),
            config,
            rng: Pcg32::seed_from_u64(seed),
        };
        field.initialize();
        field
    }

    /// Adopt a new surface size and respawn every point
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.initialize();
        log::debug!(
            "Field resized to {}x{} ({} points)",
            width,
            height,
            self.points.len()
        );
    }

    /// Replace the point collection with a fresh random one
    pub fn initialize(&mut self) {
        self.points = spawn_points(self.width, self.height, &self.config, &mut self.rng);
    }

    /// Advance one frame
    pub fn step(&mut self) {
        advance(&mut self.points, self.width, self.height);
    }

    /// Advance then draw one frame
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        render(surface, self);
    }

    /// Number of links the current frame would draw
    pub fn link_count(&self) -> usize {
        links(&self.points, &self.config).count()
    }
}
