//! Background points and how many of them a surface gets

use glam::Vec2;
use rand::Rng;

use crate::config::FieldConfig;

/// A single animated dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub pos: Vec2,
    /// Per-frame displacement
    pub vel: Vec2,
    pub radius: f32,
}

/// Number of points for a surface: one per `area_per_point`, capped at `max_points`
pub fn point_count(width: f32, height: f32, config: &FieldConfig) -> usize {
    if width <= 0.0 || height <= 0.0 || config.area_per_point <= 0.0 {
        return 0;
    }
    let area = width as f64 * height as f64;
    let by_area = (area / config.area_per_point as f64).floor() as usize;
    by_area.min(config.max_points)
}

/// Spawn a fresh point collection scattered uniformly over the surface
pub fn spawn_points<R: Rng>(
    width: f32,
    height: f32,
    config: &FieldConfig,
    rng: &mut R,
) -> Vec<Point> {
    let count = point_count(width, height, config);
    let speed = config.max_speed.abs();
    let (min_r, max_r) = if config.min_radius <= config.max_radius {
        (config.min_radius, config.max_radius)
    } else {
        (config.max_radius, config.min_radius)
    };

    (0..count)
        .map(|_| Point {
            pos: Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height),
            vel: Vec2::new(
                rng.random_range(-speed..=speed),
                rng.random_range(-speed..=speed),
            ),
            radius: rng.random_range(min_r..=max_r),
        })
        .collect()
}
