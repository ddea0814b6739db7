//! Flycatch - a tiny catch-the-flies arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game modes)
//! - `ui`: Static menu layout and click hit-testing
//! - `audio`: Procedural sound effects and background music
//! - `settings`: Persisted player preferences

pub mod audio;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Play area dimensions in pixels
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Hero spawn point (also the respawn point after a hit)
    pub const HERO_SPAWN: Vec2 = Vec2::new(400.0, 500.0);
    /// Distance the hero moves per pressed direction per tick (not dt-scaled)
    pub const HERO_STEP: f32 = 5.0;
    /// Frames in the hero walk cycle
    pub const HERO_FRAME_COUNT: usize = 6;
    /// Seconds between hero animation frames
    pub const HERO_FRAME_TIME: f32 = 0.1;

    /// Distance an enemy patrols per tick (not dt-scaled)
    pub const ENEMY_STEP: f32 = 2.0;
    /// Seconds between shared enemy animation frames
    pub const ENEMY_FRAME_TIME: f32 = 0.2;
    /// Frames in the shared enemy animation
    pub const ENEMY_FRAME_COUNT: usize = 2;

    /// Fly fall speed in pixels per second (dt-scaled, unlike the steps above)
    pub const FLY_FALL_SPEED: f32 = 120.0;
    /// Seconds between fly spawns
    pub const FLY_SPAWN_INTERVAL: f32 = 2.0;
    /// Horizontal margin kept clear of the play-area edges when spawning
    pub const FLY_SPAWN_MARGIN: f32 = 50.0;
    /// Spawn height, above the visible top
    pub const FLY_SPAWN_Y: f32 = -30.0;
    /// Points awarded per caught fly
    pub const FLY_REWARD: u32 = 10;

    /// Lives granted at session start
    pub const START_LIVES: i32 = 3;
    /// Grace period granted at session start (seconds)
    pub const START_INVINCIBILITY: f32 = 2.0;

    /// Sprite bounding sizes (width, height), from asset metadata
    pub const HERO_SIZE: Vec2 = Vec2::new(48.0, 64.0);
    pub const ENEMY_SIZE: Vec2 = Vec2::new(36.0, 36.0);
    pub const FLY_SIZE: Vec2 = Vec2::new(28.0, 20.0);
}
