pub mod app;
pub mod core;
pub mod effect;
pub mod event;
pub mod platform;
pub mod render;
