//! Domain model: bodies, shapes, joints and world settings

pub mod body;
pub mod error;
pub mod joint;
pub mod settings;
pub mod shape;

pub use body::{Body, BodyId};
pub use error::EngineError;
pub use joint::Joint;
pub use settings::WorldSettings;
pub use shape::{Shape, ShapeKind};
