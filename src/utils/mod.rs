pub mod net;
pub mod text;
