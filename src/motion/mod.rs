//! Generative motion: background curve fields, pointer tilt and title reveals.
//!
//! Everything here is plain computation shared by the server render and the
//! hydrated client. Frame scheduling belongs to the caller.

mod keyframes;
pub mod path_field;
pub mod spring;
pub mod tilt;
pub mod title;

pub use path_field::{generate, CURVES_PER_FIELD, FIELD_VIEW_BOX};
pub use spring::Spring;
pub use tilt::TiltTransform;
pub use title::sequence;
