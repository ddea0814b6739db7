//! Per-frame simulation step
//!
//! One `tick` consumes the frame's input snapshot and the elapsed time and
//! advances the game. Menu and game-over frames only dispatch clicks; all
//! simulation work happens while playing.

use glam::Vec2;
use rand::Rng;

use super::state::{Fly, GameEvent, GameMode, GameState};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::ui;
use crate::ui::MenuAction;

/// Input snapshot for a single tick. Directions are non-exclusive;
/// diagonal movement is both axes applying at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Click position, if the frame saw one
    pub click: Option<Vec2>,
}

/// Advance the game by one frame.
///
/// `dt` is the elapsed time since the previous tick in seconds. Returned
/// events are fire-and-forget notifications for the driver (sound
/// triggers, exit request); they never feed back into the simulation.
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(point) = input.click {
        handle_click(state, point, &mut events);
    }

    if state.mode != GameMode::Playing {
        return events;
    }

    if state.invincibility > 0.0 {
        state.invincibility -= dt;
    }

    // Hero movement is a fixed step per pressed direction; diagonals stack.
    let mut delta = Vec2::ZERO;
    if input.left {
        delta.x -= state.hero.step;
    }
    if input.right {
        delta.x += state.hero.step;
    }
    if input.up {
        delta.y -= state.hero.step;
    }
    if input.down {
        delta.y += state.hero.step;
    }
    state.hero.step_by(delta);
    state.hero.advance_animation(dt);

    for enemy in &mut state.enemies {
        enemy.patrol();
    }

    update_flies(state, dt, &mut events);

    if state.invincibility <= 0.0 {
        resolve_enemy_hits(state, &mut events);
    }

    // Shared animation clock: one timer drives every bomb sprite.
    state.enemy_anim_timer += dt;
    if state.enemy_anim_timer >= ENEMY_FRAME_TIME {
        state.enemy_anim_timer = 0.0;
        state.enemy_frame = (state.enemy_frame + 1) % ENEMY_FRAME_COUNT;
    }

    events
}

/// Route a click according to the current screen.
fn handle_click(state: &mut GameState, point: Vec2, events: &mut Vec<GameEvent>) {
    match state.mode {
        GameMode::Menu => match ui::hit_test(point) {
            Some(MenuAction::Start) => {
                state.start_session();
                log::info!("session started (seed {})", state.seed);
                if state.audio_enabled {
                    events.push(GameEvent::MusicStarted);
                }
            }
            Some(MenuAction::SoundOn) => {
                state.audio_enabled = true;
                events.push(GameEvent::MusicStarted);
            }
            Some(MenuAction::SoundOff) => {
                state.audio_enabled = false;
                events.push(GameEvent::MusicStopped);
            }
            Some(MenuAction::Exit) => events.push(GameEvent::ExitRequested),
            None => {}
        },
        // Any click returns to the menu.
        GameMode::GameOver => state.mode = GameMode::Menu,
        GameMode::Playing => {}
    }
}

/// Spawn, fall and collect flies.
///
/// Collection is checked before the off-screen test, so a fly caught on
/// the frame it would leave the play area still scores. A fly spawned this
/// frame takes part in the same pass.
fn update_flies(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    state.spawn_timer += dt;
    if state.spawn_timer >= FLY_SPAWN_INTERVAL {
        state.spawn_timer = 0.0;
        let x = state
            .rng
            .random_range(FLY_SPAWN_MARGIN..=PLAY_WIDTH - FLY_SPAWN_MARGIN);
        state.flies.push(Fly::new(x));
    }

    let hero_rect = state.hero.body.rect();
    let mut caught = 0u32;
    state.flies.retain_mut(|fly| {
        fly.fall(dt);
        if fly.body.rect().overlaps(&hero_rect) {
            caught += 1;
            return false;
        }
        fly.body.pos.y <= PLAY_HEIGHT
    });

    state.score += caught * FLY_REWARD;
    if state.audio_enabled {
        for _ in 0..caught {
            events.push(GameEvent::Sfx(SoundEffect::Catch));
        }
    }
}

/// Test the hero against every enemy, in list order, always against the
/// hero's current rect: a hit teleports the hero back to the spawn point,
/// so later enemies are tested against the respawned position. No grace
/// period is granted here; the only one comes with the session start.
fn resolve_enemy_hits(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for i in 0..state.enemies.len() {
        let hero_rect = state.hero.body.rect();
        if state.enemies[i].body.rect().overlaps(&hero_rect) {
            state.lives -= 1;
            state.hero.body.pos = HERO_SPAWN;
            if state.audio_enabled {
                events.push(GameEvent::Sfx(SoundEffect::Hit));
            }
            if state.lives <= 0 {
                state.mode = GameMode::GameOver;
                events.push(GameEvent::MusicStopped);
                log::info!("game over with score {}", state.score);
            }
        }
    }
}
