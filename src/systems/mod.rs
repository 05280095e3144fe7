//! Physics systems. Each one is a free function over the body slice so
//! the world step can sequence them explicitly.

pub mod collision;
pub mod integrate;
pub mod joints;
pub mod resolve;
pub mod rest;

pub use collision::{bound_test, test_collision, CollisionInfo};
pub use integrate::integrate;
pub use joints::relax_joints;
pub use resolve::{resolve_collision, ResolveParams};
pub use rest::track_rest;
