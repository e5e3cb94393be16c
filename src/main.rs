//! Face Catcher entry point
//!
//! Wires the synthetic camera, bright-region face locator, terminal renderer,
//! audio and system clock into the game loop.

use face_catcher::audio::{AudioManager, CueEmitter, SilentCueEmitter};
use face_catcher::platform::{BrightRegionLocator, Subject, SyntheticCamera, SystemClock};
use face_catcher::renderer::TerminalRenderer;
use face_catcher::{GameError, GameLoop, LoopExit, Settings};

/// Pixels the virtual subject moves per steering key press
const STEER_STEP: i32 = 20;

/// Route cues to the speakers, or nowhere when sound is off
enum Cues {
    Speakers(AudioManager),
    Silent(SilentCueEmitter),
}

impl CueEmitter for Cues {
    fn beep(&mut self, frequency_hz: u32, duration_ms: u32) {
        match self {
            Cues::Speakers(audio) => audio.beep(frequency_hz, duration_ms),
            Cues::Silent(silent) => silent.beep(frequency_hz, duration_ms),
        }
    }
}

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::load()?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Face Catcher starting (seed {})", seed);

    let tuning = &settings.tuning;
    let (width, height) = (tuning.screen_width, tuning.screen_height);

    let subject = Subject::new(width / 2, width);
    let camera = SyntheticCamera::new(
        width as u32,
        height as u32,
        settings.target_fps,
        subject.clone(),
        seed,
    );

    let cues = if settings.sound {
        let mut audio = AudioManager::new(settings.volume);
        audio.set_muted(settings.effective_volume() <= 0.0);
        if audio.is_available() {
            Cues::Speakers(audio)
        } else {
            log::info!("Playing without sound");
            Cues::Silent(SilentCueEmitter)
        }
    } else {
        Cues::Silent(SilentCueEmitter)
    };

    let renderer = TerminalRenderer::new(width as u32, height as u32)?.with_steering(subject, STEER_STEP);

    let mut game = GameLoop::new(
        &settings,
        seed,
        camera,
        BrightRegionLocator::default(),
        renderer,
        cues,
        SystemClock::new(),
    );
    let exit = game.run()?;

    // Dropping the loop hands the terminal back before anything is logged
    let summary = game.scoreboard().summary();
    drop(game);
    match exit {
        LoopExit::Quit => log::info!("Quit: {}", summary),
        LoopExit::FrameUnavailable(reason) => {
            log::warn!("Frame capture failed: {}", reason);
            log::info!("Camera stopped: {}", summary);
        }
    }
    Ok(())
}
