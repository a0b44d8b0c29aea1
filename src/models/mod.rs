mod content;
mod motion;

pub use content::*;
pub use motion::*;

pub(crate) use motion::round_to;
