pub mod feedback;
pub mod platform;
pub mod post;
pub mod usage;

pub use feedback::*;
pub use platform::*;
pub use post::*;
pub use usage::*;
