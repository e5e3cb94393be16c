//! Game loop
//!
//! One iteration per camera frame: capture, mirror, detect, simulate, play
//! cues, draw, poll input. At the end of a session the loop blocks on the
//! end screen until the player replays or quits.

use crate::audio::{AudioCue, CueEmitter};
use crate::error::GameError;
use crate::highscores::HighScores;
use crate::platform::{Clock, FaceLocator, Frame, FrameSource};
use crate::renderer::{Renderer, scene};
use crate::settings::Settings;
use crate::sim::{FaceBox, GameEvent, Session, SessionPhase};

/// Why the loop stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopExit {
    /// Player pressed `q`
    Quit,
    /// The frame source failed. Reported by the caller once the terminal is
    /// restored, since logging while the game owns the screen garbles it.
    FrameUnavailable(String),
}

pub struct GameLoop<S, L, R, A, C> {
    source: S,
    locator: L,
    renderer: R,
    cues: A,
    clock: C,
    session: Session,
    scoreboard: HighScores,
    mirror: bool,
    show_particles: bool,
}

impl<S, L, R, A, C> GameLoop<S, L, R, A, C>
where
    S: FrameSource,
    L: FaceLocator,
    R: Renderer,
    A: CueEmitter,
    C: Clock,
{
    /// Wire collaborators together and start the first session now
    pub fn new(
        settings: &Settings,
        seed: u64,
        source: S,
        locator: L,
        renderer: R,
        cues: A,
        clock: C,
    ) -> Self {
        let session = Session::new(settings.tuning.clone(), seed, clock.now());
        Self {
            source,
            locator,
            renderer,
            cues,
            clock,
            session,
            scoreboard: HighScores::new(),
            mirror: settings.mirror,
            show_particles: settings.particles,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Finished sessions of this run
    pub fn scoreboard(&self) -> &HighScores {
        &self.scoreboard
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run until the player quits or frames stop coming
    pub fn run(&mut self) -> Result<LoopExit, GameError> {
        loop {
            if let Some(exit) = self.step()? {
                return Ok(exit);
            }
        }
    }

    /// One frame. Returns the exit reason once the loop should stop.
    pub fn step(&mut self) -> Result<Option<LoopExit>, GameError> {
        let mut frame = match self.source.read_frame() {
            Ok(frame) => frame,
            Err(e) => return Ok(Some(LoopExit::FrameUnavailable(e.to_string()))),
        };
        if self.mirror {
            frame.mirror();
        }

        let face = self
            .locator
            .detect(&frame)
            .first()
            .map(|face| self.to_playfield(face, &frame));

        let events = self.session.tick(face, self.clock.now());
        for event in &events {
            self.handle_event(event);
        }

        if self.session.phase() == SessionPhase::Ended {
            return self.end_screen(&frame);
        }

        let remaining = self.session.time_remaining(self.clock.now());
        scene::draw_playfield(
            &mut self.renderer,
            &frame,
            &self.session.state,
            self.session.tuning(),
            remaining,
            self.show_particles,
        );
        self.renderer.present()?;

        match self.renderer.poll_key()? {
            Some(key) if key.eq_ignore_ascii_case(&'q') => Ok(Some(LoopExit::Quit)),
            _ => Ok(None),
        }
    }

    /// Map a face box from frame to playfield coordinates
    fn to_playfield(&self, face: &FaceBox, frame: &Frame) -> FaceBox {
        let tuning = self.session.tuning();
        if frame.width == 0 || frame.height == 0 {
            return *face;
        }
        let (fw, fh) = (frame.width as i32, frame.height as i32);
        if fw == tuning.screen_width && fh == tuning.screen_height {
            return *face;
        }
        let sx = |v: i32| v * tuning.screen_width / fw;
        let sy = |v: i32| v * tuning.screen_height / fh;
        FaceBox::new(sx(face.x), sy(face.y), sx(face.w), sy(face.h))
    }

    fn handle_event(&mut self, event: &GameEvent) {
        if let Some(cue) = AudioCue::for_event(event) {
            self.cues.play(cue);
        }

        if let GameEvent::SessionEnded {
            score,
            new_high_score,
            ..
        } = event
        {
            let rank = self
                .scoreboard
                .record(&self.session.state, self.session.number());
            match rank {
                Some(rank) => log::info!("Score {} ranked #{} this run", score, rank),
                None => log::info!("Score {} missed the leaderboard", score),
            }
            if *new_high_score {
                log::info!("New high score: {}", score);
            }
        }
    }

    /// Show the end screen and wait for `r` or `q`
    fn end_screen(&mut self, frame: &Frame) -> Result<Option<LoopExit>, GameError> {
        scene::draw_game_over(
            &mut self.renderer,
            frame,
            &self.session.state,
            self.session.tuning(),
        );
        self.renderer.present()?;

        loop {
            match self.renderer.wait_key()?.to_ascii_lowercase() {
                'r' => {
                    self.session.replay(self.clock.now());
                    return Ok(None);
                }
                'q' => return Ok(Some(LoopExit::Quit)),
                _ => {}
            }
        }
    }
}
