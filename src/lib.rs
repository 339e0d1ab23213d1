//! Grid Invaders - a fixed-grid invader shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, wave progression)
//! - `render`: Abstract draw-instruction surface consumed by a host renderer
//! - `input`: Input intent sampling, decoupled from physical devices
//! - `config`: Data-driven tunables with optional components

pub mod config;
pub mod input;
pub mod render;
pub mod sim;

pub use config::{BonusConfig, GameConfig, ShieldConfig};

/// Game tuning constants (defaults for [`config::GameConfig`])
pub mod consts {
    /// Maximum frame delta fed to the sim; longer frames are clamped
    /// so a slow frame cannot teleport entities through each other.
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 640.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;
    /// Side margin the player and formation are confined to
    pub const EDGE_MARGIN: f32 = 8.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 56.0;
    pub const PLAYER_HEIGHT: f32 = 14.0;
    pub const PLAYER_SPEED: f32 = 320.0;
    pub const PLAYER_FIRE_COOLDOWN: f32 = 0.25;
    /// Distance of the player row from the playfield bottom
    pub const PLAYER_BOTTOM_OFFSET: f32 = 40.0;

    /// Player shots
    pub const PLAYER_SHOT_WIDTH: f32 = 4.0;
    pub const PLAYER_SHOT_HEIGHT: f32 = 12.0;
    pub const PLAYER_SHOT_SPEED: f32 = 420.0;

    /// Enemy formation grid
    pub const FORMATION_COLS: u32 = 10;
    pub const FORMATION_BASE_ROWS: u32 = 4;
    /// Extra rows gained over the levels, on top of the base count
    pub const FORMATION_MAX_EXTRA_ROWS: u32 = 3;
    pub const FORMATION_SPACING_X: f32 = 52.0;
    pub const FORMATION_SPACING_Y: f32 = 36.0;
    pub const FORMATION_OFFSET_X: f32 = 70.0;
    pub const FORMATION_OFFSET_Y: f32 = 56.0;
    pub const ENEMY_WIDTH: f32 = 30.0;
    pub const ENEMY_HEIGHT: f32 = 22.0;

    /// Formation movement
    pub const FORMATION_BASE_SPEED: f32 = 30.0;
    pub const FORMATION_SPEED_INCREMENT: f32 = 10.0;
    pub const FORMATION_DROP_DISTANCE: f32 = 18.0;

    /// Enemy fire
    pub const ENEMY_SHOT_WIDTH: f32 = 4.0;
    pub const ENEMY_SHOT_HEIGHT: f32 = 10.0;
    pub const ENEMY_SHOT_BASE_SPEED: f32 = 180.0;
    pub const ENEMY_SHOT_SPEED_PER_LEVEL: f32 = 10.0;
    pub const ENEMY_SHOOT_INTERVAL_BASE: f32 = 1.2;
    pub const ENEMY_SHOOT_INTERVAL_PER_LEVEL: f32 = 0.1;
    pub const ENEMY_SHOOT_INTERVAL_MIN: f32 = 0.25;

    /// Shields
    pub const SHIELD_COUNT: u32 = 4;
    pub const SHIELD_WIDTH: f32 = 64.0;
    pub const SHIELD_HEIGHT: f32 = 20.0;
    pub const SHIELD_DURABILITY: u8 = 6;
    /// Vertical gap between the shield line and the player row
    pub const SHIELD_GAP_ABOVE_PLAYER: f32 = 56.0;

    /// Bonus flying target
    pub const BONUS_WIDTH: f32 = 42.0;
    pub const BONUS_HEIGHT: f32 = 18.0;
    pub const BONUS_Y: f32 = 30.0;
    pub const BONUS_SPEED: f32 = 140.0;
    pub const BONUS_RESPAWN_MIN: f32 = 8.0;
    pub const BONUS_RESPAWN_MAX: f32 = 16.0;

    /// Scoring
    pub const ENEMY_POINTS: u64 = 10;
    pub const BONUS_POINTS: u64 = 100;
}
