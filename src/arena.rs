// ================================
// src/arena.rs - walled arena and distance rays
// ================================
use crate::vehicle::Pose;
use std::collections::HashSet;

/// Rays stop after this many unit steps.
pub const MAX_RAY_LENGTH: u32 = 200;

/// One distance ray cast from the vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: (f64, f64),
    pub angle_deg: f64,
    /// Whole units to the first wall cell, or `MAX_RAY_LENGTH`.
    pub distance: u32,
}

impl Ray {
    /// End point of the ray, used for overlays.
    pub fn end(&self) -> (f64, f64) {
        point_along(self.origin, self.angle_deg, f64::from(self.distance))
    }

    pub fn hit_wall(&self) -> bool {
        self.distance < MAX_RAY_LENGTH
    }
}

/// Left, center and right rays for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayScan {
    pub left: Ray,
    pub center: Ray,
    pub right: Ray,
}

impl RayScan {
    pub fn rays(&self) -> [Ray; 3] {
        [self.left, self.center, self.right]
    }

    pub fn distances(&self) -> (u32, u32, u32) {
        (self.left.distance, self.center.distance, self.right.distance)
    }
}

/// Rectangular arena whose border cells are walls.
#[derive(Debug, Clone)]
pub struct Arena {
    width: i32,
    height: i32,
    walls: HashSet<(i32, i32)>,
}

impl Arena {
    pub fn rectangle(width: i32, height: i32) -> Self {
        let mut walls = HashSet::new();

        for x in 0..width {
            walls.insert((x, 0));
            walls.insert((x, height - 1));
        }
        for y in 0..height {
            walls.insert((0, y));
            walls.insert((width - 1, y));
        }

        Self {
            width,
            height,
            walls,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.walls.contains(&(x, y))
    }

    /// True when the point lies strictly inside the walls.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 1.0 && y >= 1.0 && x < f64::from(self.width - 1) && y < f64::from(self.height - 1)
    }

    /// Walks the ray one unit at a time and returns the first step that lands
    /// on a wall cell. Sample coordinates are truncated toward zero.
    pub fn distance_to_wall(&self, x: f64, y: f64, angle_deg: f64) -> u32 {
        (1..MAX_RAY_LENGTH)
            .find(|&dist| {
                let (sx, sy) = point_along((x, y), angle_deg, f64::from(dist));
                self.is_wall(sx as i32, sy as i32)
            })
            .unwrap_or(MAX_RAY_LENGTH)
    }

    pub fn cast(&self, origin: (f64, f64), angle_deg: f64) -> Ray {
        Ray {
            origin,
            angle_deg,
            distance: self.distance_to_wall(origin.0, origin.1, angle_deg),
        }
    }

    /// Casts rays at `heading - offset`, `heading` and `heading + offset`.
    pub fn scan(&self, pose: &Pose, ray_offset_deg: f64) -> RayScan {
        let origin = (pose.x, pose.y);
        RayScan {
            left: self.cast(origin, pose.heading_deg - ray_offset_deg),
            center: self.cast(origin, pose.heading_deg),
            right: self.cast(origin, pose.heading_deg + ray_offset_deg),
        }
    }
}

fn point_along(origin: (f64, f64), angle_deg: f64, dist: f64) -> (f64, f64) {
    let angle = angle_deg.to_radians();
    (origin.0 + dist * angle.cos(), origin.1 + dist * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_walls() {
        let arena = Arena::rectangle(800, 600);
        assert!(arena.is_wall(0, 0));
        assert!(arena.is_wall(799, 300));
        assert!(arena.is_wall(400, 599));
        assert!(!arena.is_wall(400, 300));
        assert!(!arena.is_wall(800, 300));
        // perimeter cells, corners counted once
        assert_eq!(arena.wall_count(), 2 * 800 + 2 * 600 - 4);
    }

    #[test]
    fn test_open_space_is_capped() {
        let arena = Arena::rectangle(800, 600);
        assert_eq!(arena.distance_to_wall(400.0, 300.0, 0.0), MAX_RAY_LENGTH);
        assert_eq!(arena.distance_to_wall(400.0, 300.0, 90.0), MAX_RAY_LENGTH);
    }

    #[test]
    fn test_axis_aligned_hits() {
        let arena = Arena::rectangle(800, 600);
        // wall at x = 799
        assert_eq!(arena.distance_to_wall(700.0, 300.0, 0.0), 99);
        // wall at x = 0
        assert_eq!(arena.distance_to_wall(50.0, 300.0, 180.0), 50);
        // wall at y = 0, negative angle points up
        assert_eq!(arena.distance_to_wall(400.0, 120.0, -90.0), 120);
    }

    #[test]
    fn test_wall_exactly_at_cap_is_not_seen() {
        let arena = Arena::rectangle(800, 600);
        // first wall sample would be dist 200, which is never sampled
        assert_eq!(arena.distance_to_wall(599.0, 300.0, 0.0), MAX_RAY_LENGTH);
        assert_eq!(arena.distance_to_wall(600.0, 300.0, 0.0), 199);
    }

    #[test]
    fn test_scan_angles() {
        let arena = Arena::rectangle(800, 600);
        let pose = Pose {
            x: 400.0,
            y: 300.0,
            heading_deg: 10.0,
        };
        let scan = arena.scan(&pose, 45.0);
        assert_eq!(scan.left.angle_deg, -35.0);
        assert_eq!(scan.center.angle_deg, 10.0);
        assert_eq!(scan.right.angle_deg, 55.0);
        assert_eq!(scan.distances(), (200, 200, 200));
        assert!(scan.rays().iter().all(|ray| !ray.hit_wall()));
    }

    #[test]
    fn test_ray_end() {
        let ray = Ray {
            origin: (10.0, 20.0),
            angle_deg: 0.0,
            distance: 30,
        };
        let (x, y) = ray.end();
        assert!((x - 40.0).abs() < 1e-9);
        assert!((y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_contains() {
        let arena = Arena::rectangle(800, 600);
        assert!(arena.contains(400.0, 300.0));
        assert!(arena.contains(1.0, 1.0));
        assert!(!arena.contains(0.5, 300.0));
        assert!(!arena.contains(799.0, 300.0));
        assert!(!arena.contains(400.0, -3.0));
    }
}
