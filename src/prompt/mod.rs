pub mod builder;
pub mod fallback;
