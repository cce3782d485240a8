pub mod host;
pub mod shared;
