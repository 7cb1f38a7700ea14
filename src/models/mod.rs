// Module exports for models

pub mod animation;
pub mod color;
pub mod event;
pub mod style;
