//! Flycatch entry point
//!
//! Thin native driver around the simulation: builds the per-frame input
//! snapshot, calls `tick` once per display frame, fans the returned events
//! out to the audio manager and logs the HUD in lieu of pixels. Runs a
//! scripted demo session so the whole menu/playing/game-over loop is
//! exercised end to end.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::Vec2;

use flycatch::audio::AudioManager;
use flycatch::consts::*;
use flycatch::settings::Settings;
use flycatch::sim::{FrameInput, GameEvent, GameMode, GameState, tick};
use flycatch::ui;
use flycatch::ui::MenuAction;

/// Target display cadence for the demo driver
const FRAME_TIME: Duration = Duration::from_millis(16);
/// Seconds of play before the autopilot deliberately ends the session
const DEMO_PLAY_SECONDS: f32 = 30.0;
/// Hard cap in case the session refuses to die
const DEMO_MAX_SECONDS: f32 = 60.0;

fn main() {
    env_logger::init();

    let mut settings = Settings::load();
    let mut audio = AudioManager::new();
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_music_volume(settings.music_volume);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed);
    state.audio_enabled = settings.audio_enabled;
    log::info!("flycatch starting (seed {seed})");

    let mut elapsed = 0.0f32;
    let mut hud_timer = 0.0f32;
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32().min(0.1);
        last = now;

        let input = script_input(&state, elapsed);
        let events = tick(&mut state, &input, dt);

        let mut exit = false;
        for event in &events {
            if matches!(event, GameEvent::ExitRequested) {
                exit = true;
            }
            audio.handle_event(event);
        }
        if exit {
            log::info!("exit requested - final score {}", state.score);
            break;
        }

        elapsed += dt;
        hud_timer += dt;
        if hud_timer >= 1.0 {
            hud_timer = 0.0;
            log_hud(&state);
        }
        if elapsed > DEMO_MAX_SECONDS {
            log::warn!("demo time cap reached - final score {}", state.score);
            break;
        }

        thread::sleep(FRAME_TIME.saturating_sub(now.elapsed()));
    }

    // Keep the audio preference across runs.
    settings.audio_enabled = state.audio_enabled;
    settings.save();
}

/// Scripted demo input for one frame.
fn script_input(state: &GameState, elapsed: f32) -> FrameInput {
    match state.mode {
        GameMode::Menu => {
            // A fresh menu starts a session; the menu after a finished
            // session (lives spent) leaves through the Exit button.
            let action = if state.lives <= 0 {
                MenuAction::Exit
            } else {
                MenuAction::Start
            };
            FrameInput {
                click: Some(button_center(action)),
                ..Default::default()
            }
        }
        GameMode::Playing => autopilot(state, elapsed),
        GameMode::GameOver => FrameInput {
            click: Some(Vec2::new(PLAY_WIDTH / 2.0, PLAY_HEIGHT / 2.0)),
            ..Default::default()
        },
    }
}

/// Chase the nearest fly while staying below the bomb patrol rows; once
/// the demo has run long enough, charge the first bomb to end the session.
fn autopilot(state: &GameState, elapsed: f32) -> FrameInput {
    let hero = state.hero.body.pos;

    let target = if elapsed > DEMO_PLAY_SECONDS {
        state.enemies[0].body.pos
    } else {
        let nearest_fly = state.flies.iter().min_by(|a, b| {
            hero.distance(a.body.pos)
                .partial_cmp(&hero.distance(b.body.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        match nearest_fly {
            // Intercept low, out of reach of the bombs.
            Some(fly) => Vec2::new(fly.body.pos.x, fly.body.pos.y.max(380.0)),
            None => HERO_SPAWN,
        }
    };

    let mut input = FrameInput::default();
    if target.x < hero.x - HERO_STEP {
        input.left = true;
    } else if target.x > hero.x + HERO_STEP {
        input.right = true;
    }
    if target.y < hero.y - HERO_STEP {
        input.up = true;
    } else if target.y > hero.y + HERO_STEP {
        input.down = true;
    }
    input
}

fn button_center(action: MenuAction) -> Vec2 {
    ui::menu_buttons()
        .iter()
        .find(|button| button.action == action)
        .map(|button| button.rect.center())
        .unwrap_or(HERO_SPAWN)
}

fn log_hud(state: &GameState) {
    log::info!(
        "{:?}  score {:>4}  lives {}  flies {:>2}  hero ({:>3.0},{:>3.0}) {}",
        state.mode,
        state.score,
        state.lives,
        state.flies.len(),
        state.hero.body.pos.x,
        state.hero.body.pos.y,
        state.hero.sprite(),
    );
}
