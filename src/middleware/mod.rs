pub mod metrics;
pub mod quota;

pub use metrics::*;
pub use quota::*;
