//! Drawing the field onto a 2D surface

use glam::Vec2;

use super::Field;
use super::links::links;

/// Minimal 2D drawing target for the field.
///
/// Implemented by the browser canvas in `platform`, and by recorders in tests.
pub trait Surface {
    /// Clear the whole drawing area
    fn clear(&mut self, width: f32, height: f32);
    /// Fill a circle with a CSS colour
    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str);
    /// Stroke a straight line with a CSS colour
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, style: &str);
}

/// Clear the surface, draw every point, then every link
pub fn render<S: Surface + ?Sized>(surface: &mut S, field: &Field) {
    let config = &field.config;
    surface.clear(field.width, field.height);

    let fill = config.color.with_alpha(config.point_alpha);
    for p in &field.points {
        surface.fill_circle(p.pos, p.radius, &fill);
    }

    for link in links(&field.points, config) {
        let stroke = config.color.with_alpha(link.opacity);
        surface.stroke_line(link.from, link.to, config.link_width, &stroke);
    }
}
