//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - One `tick` call per display frame, strictly serialized
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{
    ENEMY_FRAMES, Enemy, Entity, FLY_SPRITE, Fly, GameEvent, GameMode, GameState, HERO_FRAMES,
    Hero, PatrolDir,
};
pub use tick::{FrameInput, tick};
