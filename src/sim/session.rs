//! Session state machine
//!
//! A session runs until the clock passes the game duration, then waits in
//! `Ended` until the player asks for a replay. The high score survives
//! replays; everything else is rebuilt from scratch.

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::catcher::{self, FaceBox};
use super::state::{GameEvent, GameState};
use super::tick::{TickInput, tick};
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Objects are falling and the clock is running
    Running,
    /// Time is up; waiting for replay or quit
    Ended,
}

/// Owns the single live game state and the RNG driving it
#[derive(Debug, Clone)]
pub struct Session {
    /// Live game state
    pub state: GameState,
    phase: SessionPhase,
    tuning: Tuning,
    rng: Pcg32,
    /// 1-based index of the current session within this process
    number: u32,
}

impl Session {
    /// Start the first session at clock time `now`
    pub fn new(tuning: Tuning, seed: u64, now: Duration) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&tuning, &mut rng, now, 0);
        log::info!("Session 1 started (seed {})", seed);
        Self {
            state,
            phase: SessionPhase::Running,
            tuning,
            rng,
            number: 1,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Time since the current session started
    pub fn elapsed(&self, now: Duration) -> Duration {
        self.state.elapsed(now)
    }

    /// Whole seconds left on the session clock
    pub fn time_remaining(&self, now: Duration) -> u64 {
        self.tuning
            .game_duration_secs
            .saturating_sub(self.elapsed(now).as_secs())
    }

    /// Run one frame. Does nothing once the session has ended.
    pub fn tick(&mut self, face: Option<FaceBox>, now: Duration) -> Vec<GameEvent> {
        if self.phase == SessionPhase::Ended {
            return Vec::new();
        }

        let elapsed = self.elapsed(now);
        if elapsed >= Duration::from_secs(self.tuning.game_duration_secs) {
            self.state.catcher_x = catcher::track(self.state.catcher_x, face, &self.tuning);
            return vec![self.end()];
        }

        let input = TickInput { face, elapsed };
        tick(&mut self.state, &input, &self.tuning, &mut self.rng)
    }

    /// Start a fresh session, keeping the high score
    pub fn replay(&mut self, now: Duration) {
        let high_score = self.state.high_score;
        self.state = GameState::new(&self.tuning, &mut self.rng, now, high_score);
        self.phase = SessionPhase::Running;
        self.number += 1;
        log::info!("Session {} started (high score {})", self.number, high_score);
    }

    fn end(&mut self) -> GameEvent {
        let score = self.state.score;
        let new_high_score = score > self.state.high_score;
        self.state.high_score = self.state.high_score.max(score);
        self.phase = SessionPhase::Ended;
        log::info!(
            "Session {} ended: score {} ({} caught, {} avoided), high score {}",
            self.number,
            score,
            self.state.catches,
            self.state.avoids,
            self.state.high_score
        );
        GameEvent::SessionEnded {
            score,
            high_score: self.state.high_score,
            new_high_score,
        }
    }
}
