pub mod bounds;
pub mod config;
pub mod constants;
pub mod geo;
pub mod limited_viewport;
pub mod limiter;
pub mod map;
pub mod viewport;
