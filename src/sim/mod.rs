//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical tick per host frame, delta-time clamped
//! - Seeded RNG only
//! - Stable iteration order (collection index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::Rect;
pub use state::{
    BonusTarget, Enemy, Formation, GamePhase, GameState, LossReason, Player, Projectile, Shield,
};
pub use tick::{TickInput, fire, tick};
pub use wave::{advance_level, spawn_formation, spawn_shields};
