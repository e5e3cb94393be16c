//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Time arrives as a `Duration` from the caller's clock
//! - Seeded RNG only
//! - Stable iteration order (objects keep spawn order)
//! - No rendering, audio or platform dependencies

pub mod catcher;
pub mod collision;
pub mod particles;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use catcher::FaceBox;
pub use session::{Session, SessionPhase};
pub use state::{FallingObject, GameEvent, GameState, ObjectKind, Particle};
pub use tick::{TickInput, current_speed, population_floor, tick};
