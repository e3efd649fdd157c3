pub mod formatter;
pub mod gemini;
pub mod metrics;

pub use formatter::*;
pub use gemini::*;
pub use metrics::*;
