use serde::{Deserialize, Serialize};

use crate::core::{Aabb, Vec2};

use super::shape::{Shape, ShapeKind};

/// Translation (per axis) and rotation beyond which a body counts as moving
pub const REST_LINEAR_THRESHOLD: f32 = 1.0;
pub const REST_ANGULAR_THRESHOLD: f32 = 0.1;

/// Stable body handle. Ids are assigned sequentially by the owning world
/// and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rigid body - a circle or rectangle moving as one unit
#[derive(Clone, Debug)]
pub struct Body {
    // === Identity ===
    pub(crate) id: BodyId,

    // === Kinematic state ===
    /// World position of the center
    pub(crate) center: Vec2,
    /// Orientation (radians)
    pub(crate) angle: f32,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    /// Linear acceleration, derived from world gravity for movable bodies
    pub acceleration: Vec2,
    pub angular_acceleration: f32,

    // === Mass ===
    /// Inverse mass (0 = immobile)
    pub(crate) inv_mass: f32,
    /// Inverse moment of inertia, see [`inverse_inertia`]
    pub(crate) inv_inertia: f32,

    // === Material ===
    pub friction: f32,
    pub restitution: f32,

    // === Geometry ===
    /// Bounding-circle radius
    pub(crate) bounds: f32,
    pub(crate) shape: Shape,

    /// Position is frozen; rotation still applies
    pub(crate) pinned: bool,
    /// Created with a finite mass, so its acceleration tracks world gravity
    pub(crate) gravity_driven: bool,

    // === Rest detection ===
    rest_center: Vec2,
    rest_angle: f32,
    resting_time: f32,

    /// Opaque slot owned by the host (sprite index, entity id...)
    pub user_data: u64,
}

impl Body {
    /// Create a circle. Center and radius are floored to whole numbers.
    pub fn new_circle(
        id: BodyId,
        center: Vec2,
        radius: f32,
        mass: f32,
        friction: f32,
        restitution: f32,
        gravity: Vec2,
    ) -> Self {
        Self::new(id, center.floor(), Shape::circle(radius.floor()), mass, friction, restitution, gravity)
    }

    /// Create an axis-aligned rectangle. Center and size are floored to whole numbers.
    pub fn new_rect(
        id: BodyId,
        center: Vec2,
        width: f32,
        height: f32,
        mass: f32,
        friction: f32,
        restitution: f32,
        gravity: Vec2,
    ) -> Self {
        let center = center.floor();
        let shape = Shape::rectangle(center, width.floor(), height.floor());
        Self::new(id, center, shape, mass, friction, restitution, gravity)
    }

    fn new(
        id: BodyId,
        center: Vec2,
        shape: Shape,
        mass: f32,
        friction: f32,
        restitution: f32,
        gravity: Vec2,
    ) -> Self {
        let bounds = shape.bounds();
        let inv_inertia = inverse_inertia(&shape, mass);
        Self {
            id,
            center,
            angle: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            acceleration: if mass != 0.0 { gravity } else { Vec2::ZERO },
            angular_acceleration: 0.0,
            inv_mass: inverse_mass(mass),
            inv_inertia,
            friction,
            restitution,
            bounds,
            shape,
            pinned: false,
            gravity_driven: mass != 0.0,
            rest_center: center,
            rest_angle: 0.0,
            resting_time: 0.0,
            user_data: 0,
        }
    }

    pub fn id(&self) -> BodyId { self.id }

    pub fn center(&self) -> Vec2 { self.center }

    pub fn angle(&self) -> f32 { self.angle }

    pub fn inv_mass(&self) -> f32 { self.inv_mass }

    pub fn inv_inertia(&self) -> f32 { self.inv_inertia }

    pub fn bounds(&self) -> f32 { self.bounds }

    pub fn shape(&self) -> &Shape { &self.shape }

    pub fn kind(&self) -> ShapeKind { self.shape.kind() }

    pub fn is_pinned(&self) -> bool { self.pinned }

    /// Immobile bodies have zero inverse mass
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Circle radius, or `None` for rectangles
    pub fn radius(&self) -> Option<f32> {
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            Shape::Rectangle { .. } => None,
        }
    }

    /// Rectangle size, or `None` for circles
    pub fn size(&self) -> Option<(f32, f32)> {
        match self.shape {
            Shape::Rectangle { width, height, .. } => Some((width, height)),
            Shape::Circle { .. } => None,
        }
    }

    /// Translate center (and rectangle vertices). No-op for pinned bodies.
    pub fn move_by(&mut self, delta: Vec2) {
        if self.pinned {
            return;
        }
        self.center += delta;
        self.shape.translate(delta);
    }

    /// Rotate about the center, keeping vertices and face normals in sync
    pub fn rotate_by(&mut self, angle: f32) {
        self.angle += angle;
        self.shape.rotate(self.center, angle);
    }

    /// Give the body a finite mass but freeze its position, so it can spin
    /// in place under impulses without ever translating.
    pub fn allow_pinned_rotation(&mut self, mass: f32) {
        self.inv_mass = inverse_mass(mass);
        self.inv_inertia = inverse_inertia(&self.shape, mass);
        self.pinned = true;
    }

    /// World-space extent (rotated vertices for rectangles)
    pub fn aabb(&self) -> Aabb {
        match &self.shape {
            Shape::Circle { radius } => Aabb {
                min: Vec2::new(self.center.x - radius, self.center.y - radius),
                max: Vec2::new(self.center.x + radius, self.center.y + radius),
            },
            Shape::Rectangle { vertices, .. } => {
                let mut aabb = Aabb::from_point(vertices[0]);
                for v in &vertices[1..] {
                    aabb.include(*v);
                }
                aabb
            }
        }
    }

    /// Seconds since the body last moved more than the rest thresholds
    pub fn resting_time(&self) -> f32 {
        self.resting_time
    }

    pub fn is_resting(&self, min_seconds: f32) -> bool {
        self.resting_time >= min_seconds
    }

    /// Accumulate rest time, resampling whenever the body left its last
    /// sampled pose.
    pub(crate) fn track_rest(&mut self, dt: f32) {
        self.resting_time += dt;
        if (self.center.x - self.rest_center.x).abs() > REST_LINEAR_THRESHOLD
            || (self.center.y - self.rest_center.y).abs() > REST_LINEAR_THRESHOLD
            || (self.angle - self.rest_angle).abs() > REST_ANGULAR_THRESHOLD
        {
            self.resting_time = 0.0;
            self.rest_center = self.center;
            self.rest_angle = self.angle;
        }
    }
}

/// Index of `id` in an id-ordered body list
pub fn body_index(bodies: &[Body], id: BodyId) -> Option<usize> {
    bodies.binary_search_by_key(&id, |b| b.id).ok()
}

pub fn inverse_mass(mass: f32) -> f32 {
    if mass != 0.0 { 1.0 / mass } else { 0.0 }
}

/// Rotational response factor.
///
/// Rectangles store a true inverse inertia. Circles store `m * r² / 12`
/// un-inverted; the solver still multiplies by it as if it were inverted.
/// Kept as-is for numeric compatibility with existing scenes.
pub fn inverse_inertia(shape: &Shape, mass: f32) -> f32 {
    if mass <= 0.0 {
        return 0.0;
    }
    match shape {
        Shape::Rectangle { width, height, .. } => 1.0 / (mass * (width * width + height * height) / 12.0),
        Shape::Circle { radius } => mass * radius * radius / 12.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: Vec2 = Vec2::new(0.0, 100.0);

    #[test]
    fn factory_floors_position_and_size() {
        let b = Body::new_rect(BodyId(0), Vec2::new(10.7, -3.2), 20.9, 10.1, 1.0, 0.5, 0.5, G);
        assert_eq!(b.center(), Vec2::new(10.0, -4.0));
        assert_eq!(b.size(), Some((20.0, 10.0)));

        let c = Body::new_circle(BodyId(1), Vec2::new(0.5, 0.5), 4.9, 1.0, 0.5, 0.5, G);
        assert_eq!(c.center(), Vec2::ZERO);
        assert_eq!(c.radius(), Some(4.0));
        assert_eq!(c.bounds(), 4.0);
    }

    #[test]
    fn zero_mass_is_immobile() {
        let b = Body::new_rect(BodyId(0), Vec2::ZERO, 100.0, 20.0, 0.0, 1.0, 0.0, G);
        assert!(b.is_static());
        assert_eq!(b.inv_inertia(), 0.0);
        assert_eq!(b.acceleration, Vec2::ZERO);
    }

    #[test]
    fn movable_body_picks_up_gravity() {
        let b = Body::new_circle(BodyId(0), Vec2::ZERO, 10.0, 2.0, 0.0, 0.0, G);
        assert_eq!(b.inv_mass(), 0.5);
        assert_eq!(b.acceleration, G);
    }

    #[test]
    fn rectangle_inertia_is_inverted() {
        let b = Body::new_rect(BodyId(0), Vec2::ZERO, 6.0, 8.0, 2.0, 0.0, 0.0, G);
        // 1 / (2 * (36 + 64) / 12)
        assert!((b.inv_inertia() - 0.06).abs() < 1e-6);
    }

    #[test]
    fn circle_inertia_is_not_inverted() {
        // circles keep m*r²/12 in the inverse-inertia slot
        let b = Body::new_circle(BodyId(0), Vec2::ZERO, 6.0, 2.0, 0.0, 0.0, G);
        assert!((b.inv_inertia() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn negative_mass_keeps_inverse_mass_but_no_inertia() {
        let b = Body::new_rect(BodyId(0), Vec2::ZERO, 6.0, 8.0, -2.0, 0.0, 0.0, G);
        assert_eq!(b.inv_mass(), -0.5);
        assert_eq!(b.inv_inertia(), 0.0);
    }

    #[test]
    fn pinned_body_ignores_moves_but_rotates() {
        let mut b = Body::new_rect(BodyId(0), Vec2::ZERO, 10.0, 2.0, 0.0, 0.0, 0.0, G);
        b.allow_pinned_rotation(4.0);
        assert!(b.is_pinned());
        assert_eq!(b.inv_mass(), 0.25);

        b.move_by(Vec2::new(5.0, 5.0));
        assert_eq!(b.center(), Vec2::ZERO);

        b.rotate_by(std::f32::consts::FRAC_PI_2);
        assert!((b.angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        let aabb = b.aabb();
        assert!((aabb.width() - 2.0).abs() < 1e-4);
        assert!((aabb.height() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn rest_time_resets_after_real_motion() {
        let mut b = Body::new_circle(BodyId(0), Vec2::ZERO, 5.0, 1.0, 0.0, 0.0, G);
        b.track_rest(0.5);
        b.move_by(Vec2::new(0.5, 0.5));
        b.track_rest(0.5);
        assert!((b.resting_time() - 1.0).abs() < 1e-6);
        assert!(b.is_resting(1.0));

        b.move_by(Vec2::new(1.0, 0.0));
        b.track_rest(0.5);
        assert_eq!(b.resting_time(), 0.0);
    }

    #[test]
    fn rest_time_resets_after_rotation() {
        let mut b = Body::new_rect(BodyId(0), Vec2::ZERO, 10.0, 4.0, 1.0, 0.0, 0.0, G);
        b.track_rest(0.5);
        b.rotate_by(0.05);
        b.track_rest(0.5);
        assert!((b.resting_time() - 1.0).abs() < 1e-6);

        b.rotate_by(0.2);
        b.track_rest(0.5);
        assert_eq!(b.resting_time(), 0.0);
    }
}
