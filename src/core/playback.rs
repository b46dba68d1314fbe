//! Playback clock
//!
//! [`PlaybackState`] owns the simulated current time and transport flags and
//! clamps every mutation. [`PlaybackClock`] turns real frame timestamps into
//! steps: simulated time advances by `speed * interval_ms / 500` per real
//! millisecond, so the cursor crosses about two grid cells per second at 1x
//! regardless of zoom.

use std::time::Instant;

use chrono::NaiveDateTime;

use super::scale::Scale;
use super::time_span::{to_millis, TimeSpan};

pub const MIN_SPEED: f64 = 0.25;
pub const MAX_SPEED: f64 = 4.0;
pub const SPEED_STEP: f64 = 0.25;
pub const DEFAULT_SPEED: f64 = 1.0;

/// Real milliseconds needed to cross one grid cell at 1x.
pub const REAL_MS_PER_CELL: f64 = 500.0;

pub fn clamp_speed(speed: f64) -> f64 {
    if speed.is_nan() {
        return DEFAULT_SPEED;
    }
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// Result of a single playback step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Time moved forward; keep stepping.
    Advanced,
    /// The end of the span was reached and playback stopped.
    Finished,
    /// Playback was not running; nothing changed.
    Idle,
}

/// Transport state: simulated time, play flag and speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    span: TimeSpan,
    current_ms: f64,
    is_playing: bool,
    speed: f64,
}

impl PlaybackState {
    /// Paused at the start of `span`, at 1x.
    pub fn new(span: TimeSpan) -> Self {
        Self {
            span,
            current_ms: span.start_ms(),
            is_playing: false,
            speed: DEFAULT_SPEED,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.set_speed(speed);
        self
    }

    pub fn span(&self) -> TimeSpan {
        self.span
    }

    pub fn current_ms(&self) -> f64 {
        self.current_ms
    }

    pub fn current_time(&self) -> NaiveDateTime {
        self.span.time_at_ms(self.current_ms)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_at_end(&self) -> bool {
        self.current_ms >= self.span.end_ms()
    }

    /// Start playback. At the end of the span the next step finishes at once.
    pub fn play(&mut self) {
        self.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn toggle(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump to `time`, clamped into the span. Leaves the play flag alone.
    pub fn seek(&mut self, time: NaiveDateTime) {
        self.seek_ms(to_millis(time));
    }

    pub fn seek_ms(&mut self, ms: f64) {
        self.current_ms = self.span.clamp_ms(ms);
    }

    pub fn skip_to_start(&mut self) {
        self.current_ms = self.span.start_ms();
    }

    pub fn skip_to_end(&mut self) {
        self.current_ms = self.span.end_ms();
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = clamp_speed(speed);
    }

    /// Move the speed by `steps` quarter increments.
    pub fn step_speed(&mut self, steps: i32) {
        self.set_speed(self.speed + steps as f64 * SPEED_STEP);
    }

    /// Simulated milliseconds covered by `delta_real_ms` at the current speed.
    pub fn advance_ms(&self, delta_real_ms: f64, scale: &Scale) -> f64 {
        delta_real_ms.max(0.0) * self.speed * (scale.interval_ms / REAL_MS_PER_CELL)
    }

    /// Apply one step of `delta_real_ms` real milliseconds.
    pub fn advance(&mut self, delta_real_ms: f64, scale: &Scale) -> StepOutcome {
        if !self.is_playing {
            return StepOutcome::Idle;
        }
        let next = self.current_ms + self.advance_ms(delta_real_ms, scale);
        if next >= self.span.end_ms() {
            self.current_ms = self.span.end_ms();
            self.is_playing = false;
            return StepOutcome::Finished;
        }
        self.current_ms = self.span.clamp_ms(next);
        StepOutcome::Advanced
    }
}

/// Converts frame timestamps into playback steps.
///
/// The first tick after creation or [`reset`](Self::reset) applies a zero
/// delta, so a restart never replays time spent paused.
#[derive(Debug, Default)]
pub struct PlaybackClock {
    last_tick: Option<Instant>,
}

impl PlaybackClock {
    pub fn reset(&mut self) {
        self.last_tick = None;
    }

    pub fn tick(&mut self, now: Instant, state: &mut PlaybackState, scale: &Scale) -> StepOutcome {
        let delta_real_ms = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        state.advance(delta_real_ms, scale)
    }
}
