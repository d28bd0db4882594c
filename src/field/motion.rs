//! Per-frame point motion

use super::point::Point;

/// Move every point one step and bounce it off the surface edges.
///
/// The bounce is checked after the move, so a point can sit up to one step
/// outside the surface for a frame before heading back in.
pub fn advance(points: &mut [Point], width: f32, height: f32) {
    for p in points.iter_mut() {
        p.pos += p.vel;

        if p.pos.x < 0.0 || p.pos.x > width {
            p.vel.x = -p.vel.x;
        }
        if p.pos.y < 0.0 || p.pos.y > height {
            p.vel.y = -p.vel.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn point(x: f32, y: f32, vx: f32, vy: f32) -> Point {
        Point {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 2.0,
        }
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let mut points = [point(10.0, 20.0, 0.25, -0.125)];
        advance(&mut points, 100.0, 100.0);
        assert_eq!(points[0].pos, Vec2::new(10.25, 19.875));
        assert_eq!(points[0].vel, Vec2::new(0.25, -0.125));
    }

    #[test]
    fn test_bounce_after_overshoot() {
        // Right edge: overshoots, then flips
        let mut points = [point(99.9, 50.0, 0.25, 0.0)];
        advance(&mut points, 100.0, 100.0);
        assert!(points[0].pos.x > 100.0);
        assert_eq!(points[0].vel.x, -0.25);

        // Next frame brings it back inside
        advance(&mut points, 100.0, 100.0);
        assert!(points[0].pos.x <= 100.0);
        assert_eq!(points[0].vel.x, -0.25);
    }

    #[test]
    fn test_bounce_top_edge() {
        let mut points = [point(50.0, 0.1, 0.0, -0.25)];
        advance(&mut points, 100.0, 100.0);
        assert!(points[0].pos.y < 0.0);
        assert_eq!(points[0].vel.y, 0.25);
        assert_eq!(points[0].vel.x, 0.0);
    }

    #[test]
    fn test_edge_exactly_on_bound_does_not_flip() {
        let mut points = [point(99.75, 50.0, 0.25, 0.0)];
        advance(&mut points, 100.0, 100.0);
        assert_eq!(points[0].pos.x, 100.0);
        assert_eq!(points[0].vel.x, 0.25);
    }
}
