//! Tankworld - streamed procedural terrain and wave spawning for a tank game

pub mod core;
pub mod terrain;
pub mod streaming;
pub mod navigation;
pub mod spawning;
pub mod session;
