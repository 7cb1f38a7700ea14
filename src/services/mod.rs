// Service module exports
// Framework-independent logic behind the widget

pub mod animation;
pub mod config;
pub mod layout;
pub mod likes;
