//! Audio output
//!
//! Procedurally generated sound effects and background track - no external
//! files needed. Effects play fire-and-forget on detached sinks; the
//! background track keeps one sink that loops until stopped.

use fundsp::hacker32 as dsp;
use rodio::buffer::SamplesBuffer;
use rodio::source::Source;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::sim::GameEvent;

const SAMPLE_RATE: u32 = 44_100;

/// Sound effect identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Fly caught
    Catch,
    /// Hero hit by a bomb
    Hit,
}

/// Audio manager for the game
pub struct AudioManager {
    /// Kept alive for the lifetime of the manager; None when no output
    /// device could be opened, in which case playback degrades to silence.
    stream: Option<(OutputStream, OutputStreamHandle)>,
    music: Option<Sink>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        let stream = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(err) => {
                log::warn!("no audio output device: {err} - audio disabled");
                None
            }
        };
        Self {
            stream,
            music: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// React to one simulation event.
    pub fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Sfx(effect) => self.play(*effect),
            GameEvent::MusicStarted => self.start_music(),
            GameEvent::MusicStopped => self.stop_music(),
            GameEvent::ExitRequested => {}
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.master_volume * self.sfx_volume;
        if vol <= 0.0 {
            return;
        }
        let Some((_, handle)) = &self.stream else {
            return;
        };
        let samples = match effect {
            SoundEffect::Catch => catch_samples(),
            SoundEffect::Hit => hit_samples(),
        };
        if let Ok(sink) = Sink::try_new(handle) {
            sink.set_volume(vol);
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
            sink.detach();
        }
    }

    /// Start the looped background track, restarting from the top if it
    /// was already playing.
    pub fn start_music(&mut self) {
        self.stop_music();
        let Some((_, handle)) = &self.stream else {
            return;
        };
        if let Ok(sink) = Sink::try_new(handle) {
            sink.set_volume(self.master_volume * self.music_volume);
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, music_samples()).repeat_infinite());
            self.music = Some(sink);
        }
    }

    /// Stop the background track
    pub fn stop_music(&mut self) {
        if let Some(sink) = self.music.take() {
            sink.stop();
        }
    }
}

// === Tone generators ===

/// Catch - two quick rising chime notes
fn catch_samples() -> Vec<f32> {
    const NOTES: [f32; 2] = [660.0, 880.0];
    let note_gap = 0.07f32;
    let note_len = 0.12f32;
    let total_duration = note_gap * (NOTES.len() as f32 - 1.0) + note_len;
    let mut samples = vec![0.0f32; (SAMPLE_RATE as f32 * total_duration) as usize];

    for (idx, freq) in NOTES.iter().enumerate() {
        let start = (note_gap * idx as f32 * SAMPLE_RATE as f32) as usize;
        let mut node = dsp::sine_hz(*freq)
            * dsp::lfo(|t: f32| dsp::xerp(0.15, 0.001, (t / note_len).min(1.0)));
        let tone = render_mono(&mut node, note_len);
        mix_note(&mut samples, start, tone);
    }

    samples
}

/// Hit - falling saw drop
fn hit_samples() -> Vec<f32> {
    let duration = 0.4f32;
    let mut node = (dsp::lfo(|t: f32| dsp::lerp(300.0, 60.0, (t / 0.3).min(1.0))) >> dsp::saw())
        * dsp::lfo(|t: f32| dsp::lerp(0.2, 0.0, (t / duration).min(1.0)));
    render_mono(&mut node, duration)
}

/// Background track - one bar of a plain arpeggio, meant to loop
fn music_samples() -> Vec<f32> {
    const PATTERN: [f32; 8] = [262.0, 330.0, 392.0, 523.0, 392.0, 330.0, 262.0, 196.0];
    let step = 0.25f32;
    let note_len = 0.22f32;
    let total_duration = step * PATTERN.len() as f32;
    let mut samples = vec![0.0f32; (SAMPLE_RATE as f32 * total_duration) as usize];

    for (idx, freq) in PATTERN.iter().enumerate() {
        let start = (step * idx as f32 * SAMPLE_RATE as f32) as usize;
        let mut node = dsp::sine_hz(*freq)
            * dsp::lfo(|t: f32| dsp::xerp(0.1, 0.005, (t / note_len).min(1.0)));
        let tone = render_mono(&mut node, note_len);
        mix_note(&mut samples, start, tone);
    }

    samples
}

fn mix_note(samples: &mut [f32], start: usize, tone: Vec<f32>) {
    for (i, s) in tone.into_iter().enumerate() {
        if let Some(slot) = samples.get_mut(start + i) {
            *slot += s;
        }
    }
}

fn render_mono(node: &mut dyn dsp::AudioUnit, duration: f32) -> Vec<f32> {
    node.set_sample_rate(SAMPLE_RATE as f64);
    node.reset();

    let sample_count = (SAMPLE_RATE as f32 * duration) as usize;
    let mut samples = Vec::with_capacity(sample_count);
    for _ in 0..sample_count {
        samples.push(node.get_mono());
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bounded(samples: &[f32]) {
        assert!(!samples.is_empty());
        for s in samples {
            assert!(s.abs() <= 1.0, "sample out of range: {s}");
        }
    }

    #[test]
    fn test_effect_tones_are_bounded() {
        assert_bounded(&catch_samples());
        assert_bounded(&hit_samples());
    }

    #[test]
    fn test_music_loop_covers_the_full_bar() {
        let samples = music_samples();
        assert_eq!(samples.len(), (SAMPLE_RATE as f32 * 2.0) as usize);
        assert_bounded(&samples);
    }
}
