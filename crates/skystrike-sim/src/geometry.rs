//! Ray casting helpers.

use skystrike_core::types::Vec3;

/// Half-line from `origin` along unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, distance: f64) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Distance to the first point where the ray meets the sphere. An origin
    /// inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f64) -> Option<f64> {
        let to_origin = self.origin - center;
        let b = to_origin.dot(self.direction);
        let c = to_origin.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let far = -b + root;
        if far < 0.0 {
            return None;
        }
        let near = -b - root;
        Some(if near >= 0.0 { near } else { far })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_sphere_in_front() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = ray.intersect_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0);
        assert_eq!(hit, Some(9.0));
    }

    #[test]
    fn test_misses_sphere_behind_or_beside() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0).is_none());
        assert!(ray.intersect_sphere(Vec3::new(2.5, 0.0, 10.0), 1.0).is_none());
    }

    #[test]
    fn test_grazing_hit_counts() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = ray.intersect_sphere(Vec3::new(1.0, 0.0, 5.0), 1.0);
        assert_eq!(hit, Some(5.0));
    }

    #[test]
    fn test_origin_inside_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let hit = ray.intersect_sphere(Vec3::ZERO, 2.0);
        assert_eq!(hit, Some(2.0));
    }

    #[test]
    fn test_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(ray.at(3.0), Vec3::new(0.0, 0.0, 3.0));
    }
}
