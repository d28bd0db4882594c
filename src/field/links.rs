//! Connecting lines between nearby points

use glam::Vec2;

use super::point::Point;
use crate::config::FieldConfig;

/// A line to draw between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

/// Line opacity for two points `distance` apart.
///
/// Falls off linearly from `link_max_alpha` at zero distance to 0 at
/// `link_distance` and beyond.
#[inline]
pub fn link_opacity(distance: f32, config: &FieldConfig) -> f32 {
    if distance >= config.link_distance {
        return 0.0;
    }
    (1.0 - distance / config.link_distance) * config.link_max_alpha
}

/// Every unordered pair of points closer than `link_distance`.
///
/// Exhaustive pair scan; fine for the capped point count.
pub fn links<'a>(points: &'a [Point], config: &FieldConfig) -> impl Iterator<Item = Link> + 'a {
    let config = config.clone();
    (0..points.len()).flat_map(move |i| {
        let config = config.clone();
        (i + 1..points.len()).filter_map(move |j| {
            let a = points[i].pos;
            let b = points[j].pos;
            let distance = a.distance(b);
            (distance < config.link_distance).then(|| Link {
                from: a,
                to: b,
                opacity: link_opacity(distance, &config),
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn at(x: f32, y: f32) -> Point {
        Point {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius: 1.0,
        }
    }

    #[test]
    fn test_opacity_endpoints() {
        let config = FieldConfig::default();
        assert_eq!(link_opacity(LINK_DISTANCE, &config), 0.0);
        assert_eq!(link_opacity(0.0, &config), LINK_MAX_ALPHA);
        assert_eq!(link_opacity(400.0, &config), 0.0);
    }

    #[test]
    fn test_opacity_midpoint() {
        let config = FieldConfig::default();
        let half = link_opacity(LINK_DISTANCE / 2.0, &config);
        assert!((half - LINK_MAX_ALPHA / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_links_only_close_pairs() {
        let config = FieldConfig::default();
        let points = [at(0.0, 0.0), at(100.0, 0.0), at(400.0, 0.0), at(0.0, 149.0)];
        let found: Vec<Link> = links(&points, &config).collect();

        // (0,1) at 100, (0,3) at 149, (1,3) at ~180 (too far), 2 isolated
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].from, points[0].pos);
        assert_eq!(found[0].to, points[1].pos);
        assert_eq!(found[1].to, points[3].pos);
        assert!(found[1].opacity < found[0].opacity);
    }

    #[test]
    fn test_links_exactly_at_threshold_skipped() {
        let config = FieldConfig::default();
        let points = [at(0.0, 0.0), at(LINK_DISTANCE, 0.0)];
        assert_eq!(links(&points, &config).count(), 0);
    }

    #[test]
    fn test_links_pair_count_full_cluster() {
        let config = FieldConfig::default();
        let points: Vec<Point> = (0..MAX_POINTS).map(|i| at(i as f32 * 0.5, 0.0)).collect();
        // All within 40px of each other: n(n-1)/2 pairs
        assert_eq!(links(&points, &config).count(), 3160);
    }
}
