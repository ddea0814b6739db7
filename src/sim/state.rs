//! Game state and core simulation types
//!
//! Everything the renderer reads after a tick lives here; all mutation
//! goes through `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::audio::SoundEffect;
use crate::consts::*;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Title screen with the button menu
    Menu,
    /// Active gameplay
    Playing,
    /// Session ended, waiting for a click back to the menu
    GameOver,
}

/// Patrol heading for an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolDir {
    Left,
    Right,
}

/// Fire-and-forget outputs of a tick, consumed by the driver.
///
/// Sound and music *start* events are gated by the audio-enabled flag;
/// stopping the music is always honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Sfx(SoundEffect),
    MusicStarted,
    MusicStopped,
    ExitRequested,
}

/// Sprite keys for the hero walk cycle, indexed by animation frame
pub const HERO_FRAMES: [&str; HERO_FRAME_COUNT] =
    ["hero1", "hero2", "hero3", "hero4", "hero5", "hero6"];
/// Sprite keys for the shared enemy animation
pub const ENEMY_FRAMES: [&str; ENEMY_FRAME_COUNT] = ["bomb1", "bomb2"];
/// Sprite key for a falling fly
pub const FLY_SPRITE: &str = "fly";

/// A positioned, sprite-sized object. Plain data; behavior belongs to the
/// owning type's update methods.
#[derive(Debug, Clone, Copy)]
pub struct Entity {
    /// Center of the sprite in play-area coordinates
    pub pos: Vec2,
    /// Bounding size from asset metadata
    pub size: Vec2,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Collision rectangle centered on the current position
    pub fn rect(&self) -> Aabb {
        Aabb::centered(self.pos, self.size)
    }
}

/// The player character
#[derive(Debug, Clone)]
pub struct Hero {
    pub body: Entity,
    /// Movement per pressed direction per tick
    pub step: f32,
    pub(crate) frame: usize,
    pub(crate) anim_timer: f32,
}

impl Hero {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Entity::new(pos, HERO_SIZE),
            step: HERO_STEP,
            frame: 0,
            anim_timer: 0.0,
        }
    }

    /// Current walk-cycle sprite
    pub fn sprite(&self) -> &'static str {
        HERO_FRAMES[self.frame]
    }

    /// Move by `delta` and clamp to the play area (hard boundary)
    pub fn step_by(&mut self, delta: Vec2) {
        self.body.pos =
            (self.body.pos + delta).clamp(Vec2::ZERO, Vec2::new(PLAY_WIDTH, PLAY_HEIGHT));
    }

    /// Advance the walk animation. The cycle free-runs on its own clock
    /// whether or not the hero moved this tick.
    pub fn advance_animation(&mut self, dt: f32) {
        self.anim_timer += dt;
        if self.anim_timer >= HERO_FRAME_TIME {
            self.anim_timer = 0.0;
            self.frame = (self.frame + 1) % HERO_FRAME_COUNT;
        }
    }
}

/// A bomb patrolling a fixed horizontal range
#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Entity,
    pub dir: PatrolDir,
    pub left_limit: f32,
    pub right_limit: f32,
}

impl Enemy {
    /// The initial heading is drawn from the session RNG once; patrol
    /// motion is fully deterministic afterwards.
    pub fn new(pos: Vec2, left_limit: f32, right_limit: f32, rng: &mut Pcg32) -> Self {
        let dir = if rng.random_bool(0.5) {
            PatrolDir::Left
        } else {
            PatrolDir::Right
        };
        Self {
            body: Entity::new(pos, ENEMY_SIZE),
            dir,
            left_limit,
            right_limit,
        }
    }

    /// One patrol step. Reaching or crossing a limit clamps x to it and
    /// reverses the heading, so x never leaves [left_limit, right_limit]
    /// and the flip happens exactly once per touch.
    pub fn patrol(&mut self) {
        match self.dir {
            PatrolDir::Left => {
                self.body.pos.x -= ENEMY_STEP;
                if self.body.pos.x <= self.left_limit {
                    self.body.pos.x = self.left_limit;
                    self.dir = PatrolDir::Right;
                }
            }
            PatrolDir::Right => {
                self.body.pos.x += ENEMY_STEP;
                if self.body.pos.x >= self.right_limit {
                    self.body.pos.x = self.right_limit;
                    self.dir = PatrolDir::Left;
                }
            }
        }
    }
}

/// A falling collectible
#[derive(Debug, Clone)]
pub struct Fly {
    pub body: Entity,
}

impl Fly {
    /// Spawn above the visible top at the given x
    pub fn new(x: f32) -> Self {
        Self {
            body: Entity::new(Vec2::new(x, FLY_SPAWN_Y), FLY_SIZE),
        }
    }

    pub fn sprite(&self) -> &'static str {
        FLY_SPRITE
    }

    /// Fall by speed x dt
    pub fn fall(&mut self, dt: f32) {
        self.body.pos.y += FLY_FALL_SPEED * dt;
    }
}

/// Complete game state. One instance owns every entity and counter; the
/// driver mutates it only through `tick` and reads it freely afterwards.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub mode: GameMode,
    pub score: u32,
    pub lives: i32,
    /// Seconds of damage immunity remaining
    pub invincibility: f32,
    /// Gates future sound and music start events
    pub audio_enabled: bool,
    pub hero: Hero,
    pub enemies: Vec<Enemy>,
    pub flies: Vec<Fly>,
    /// Shared animation frame, applied to every enemy sprite at once
    pub enemy_frame: usize,
    pub(crate) enemy_anim_timer: f32,
    pub(crate) spawn_timer: f32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a state on the menu screen with the fixed patrol set. The
    /// enemy set never grows or shrinks after this; only the four initial
    /// headings consume randomness.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let enemies = vec![
            Enemy::new(Vec2::new(200.0, 200.0), 150.0, 300.0, &mut rng),
            Enemy::new(Vec2::new(500.0, 200.0), 450.0, 650.0, &mut rng),
            Enemy::new(Vec2::new(700.0, 300.0), 650.0, 750.0, &mut rng),
            Enemy::new(Vec2::new(400.0, 100.0), 350.0, 500.0, &mut rng),
        ];
        Self {
            seed,
            mode: GameMode::Menu,
            score: 0,
            lives: START_LIVES,
            invincibility: 0.0,
            audio_enabled: true,
            hero: Hero::new(HERO_SPAWN),
            enemies,
            flies: Vec::new(),
            enemy_frame: 0,
            enemy_anim_timer: 0.0,
            spawn_timer: 0.0,
            rng,
        }
    }

    /// Reset session counters and begin play. Enemies keep their positions
    /// and headings across sessions; score, lives, flies, the hero position
    /// and the grace period are canonical.
    pub fn start_session(&mut self) {
        self.mode = GameMode::Playing;
        self.score = 0;
        self.lives = START_LIVES;
        self.flies.clear();
        self.hero.body.pos = HERO_SPAWN;
        self.invincibility = START_INVINCIBILITY;
    }

    /// Sprite key every enemy currently shows
    pub fn enemy_sprite(&self) -> &'static str {
        ENEMY_FRAMES[self.enemy_frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_on_menu() {
        let state = GameState::new(1);
        assert_eq!(state.mode, GameMode::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.enemies.len(), 4);
        assert!(state.flies.is_empty());
        assert_eq!(state.hero.body.pos, HERO_SPAWN);
    }

    #[test]
    fn test_enemies_start_inside_their_bounds() {
        let state = GameState::new(42);
        for enemy in &state.enemies {
            assert!(enemy.body.pos.x >= enemy.left_limit);
            assert!(enemy.body.pos.x <= enemy.right_limit);
        }
    }

    #[test]
    fn test_start_session_resets_counters() {
        let mut state = GameState::new(7);
        state.score = 120;
        state.lives = -1;
        state.flies.push(Fly::new(100.0));
        state.hero.body.pos = Vec2::new(10.0, 10.0);

        state.start_session();
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, START_LIVES);
        assert!(state.flies.is_empty());
        assert_eq!(state.hero.body.pos, HERO_SPAWN);
        assert_eq!(state.invincibility, START_INVINCIBILITY);
    }

    #[test]
    fn test_hero_walk_cycle_wraps() {
        let mut hero = Hero::new(HERO_SPAWN);
        assert_eq!(hero.sprite(), "hero1");
        for _ in 0..HERO_FRAME_COUNT {
            hero.advance_animation(HERO_FRAME_TIME);
        }
        assert_eq!(hero.sprite(), "hero1");
    }

    #[test]
    fn test_hero_animation_runs_while_idle() {
        let mut hero = Hero::new(HERO_SPAWN);
        hero.step_by(Vec2::ZERO);
        hero.advance_animation(HERO_FRAME_TIME);
        assert_eq!(hero.sprite(), "hero2");
    }

    #[test]
    fn test_sprite_tables_match_frame_counts() {
        assert_eq!(HERO_FRAMES.len(), HERO_FRAME_COUNT);
        assert_eq!(ENEMY_FRAMES.len(), ENEMY_FRAME_COUNT);
        assert_eq!(Fly::new(0.0).sprite(), FLY_SPRITE);
    }
}
