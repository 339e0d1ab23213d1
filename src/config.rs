//! Data-driven game tunables
//!
//! One config covers both rule sets: the classic rules (enemies only) and
//! the full rules with shields and the bonus flyer. Optional components are
//! `None` rather than separate code paths.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Player ship tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub size: Vec2,
    pub speed: f32,
    pub fire_cooldown: f32,
    /// Distance of the ship row from the playfield bottom
    pub bottom_offset: f32,
    pub shot_size: Vec2,
    pub shot_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
            fire_cooldown: PLAYER_FIRE_COOLDOWN,
            bottom_offset: PLAYER_BOTTOM_OFFSET,
            shot_size: Vec2::new(PLAYER_SHOT_WIDTH, PLAYER_SHOT_HEIGHT),
            shot_speed: PLAYER_SHOT_SPEED,
        }
    }
}

/// Enemy formation tunables: grid shape, movement, and return fire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationConfig {
    pub cols: u32,
    pub base_rows: u32,
    /// Cap on rows added by level scaling
    pub max_extra_rows: u32,
    pub spacing: Vec2,
    pub offset: Vec2,
    pub enemy_size: Vec2,
    pub base_speed: f32,
    pub speed_increment: f32,
    pub drop_distance: f32,
    pub shot_size: Vec2,
    pub shot_base_speed: f32,
    pub shot_speed_per_level: f32,
    pub shoot_interval_base: f32,
    pub shoot_interval_per_level: f32,
    pub shoot_interval_min: f32,
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            cols: FORMATION_COLS,
            base_rows: FORMATION_BASE_ROWS,
            max_extra_rows: FORMATION_MAX_EXTRA_ROWS,
            spacing: Vec2::new(FORMATION_SPACING_X, FORMATION_SPACING_Y),
            offset: Vec2::new(FORMATION_OFFSET_X, FORMATION_OFFSET_Y),
            enemy_size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            base_speed: FORMATION_BASE_SPEED,
            speed_increment: FORMATION_SPEED_INCREMENT,
            drop_distance: FORMATION_DROP_DISTANCE,
            shot_size: Vec2::new(ENEMY_SHOT_WIDTH, ENEMY_SHOT_HEIGHT),
            shot_base_speed: ENEMY_SHOT_BASE_SPEED,
            shot_speed_per_level: ENEMY_SHOT_SPEED_PER_LEVEL,
            shoot_interval_base: ENEMY_SHOOT_INTERVAL_BASE,
            shoot_interval_per_level: ENEMY_SHOOT_INTERVAL_PER_LEVEL,
            shoot_interval_min: ENEMY_SHOOT_INTERVAL_MIN,
        }
    }
}

/// Destructible shield line tunables (optional component)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShieldConfig {
    pub count: u32,
    pub size: Vec2,
    pub durability: u8,
    /// Vertical gap between the shield line and the player row
    pub gap_above_player: f32,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            count: SHIELD_COUNT,
            size: Vec2::new(SHIELD_WIDTH, SHIELD_HEIGHT),
            durability: SHIELD_DURABILITY,
            gap_above_player: SHIELD_GAP_ABOVE_PLAYER,
        }
    }
}

/// Bonus flying target tunables (optional component)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusConfig {
    pub size: Vec2,
    /// Fixed altitude of the sweep, above the formation
    pub y: f32,
    pub speed: f32,
    /// Respawn countdown is drawn uniformly from this range (seconds)
    pub respawn_min: f32,
    pub respawn_max: f32,
    pub points: u64,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(BONUS_WIDTH, BONUS_HEIGHT),
            y: BONUS_Y,
            speed: BONUS_SPEED,
            respawn_min: BONUS_RESPAWN_MIN,
            respawn_max: BONUS_RESPAWN_MAX,
            points: BONUS_POINTS,
        }
    }
}

/// Complete rule set for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub playfield: Vec2,
    /// Side margin the player and formation are confined to
    pub edge_margin: f32,
    pub player: PlayerConfig,
    pub formation: FormationConfig,
    /// Points per destroyed enemy
    pub enemy_points: u64,
    /// Shield line; `None` disables the component
    pub shields: Option<ShieldConfig>,
    /// Bonus flyer; `None` disables the component
    pub bonus: Option<BonusConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield: Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            edge_margin: EDGE_MARGIN,
            player: PlayerConfig::default(),
            formation: FormationConfig::default(),
            enemy_points: ENEMY_POINTS,
            shields: Some(ShieldConfig::default()),
            bonus: Some(BonusConfig::default()),
        }
    }
}

impl GameConfig {
    /// Classic rule set: enemies only, no shields, no bonus flyer
    pub fn classic() -> Self {
        Self {
            shields: None,
            bonus: None,
            ..Self::default()
        }
    }

    /// y coordinate of the player row
    pub fn player_y(&self) -> f32 {
        self.playfield.y - self.player.bottom_offset
    }

    /// Load a config from a JSON file, falling back to defaults
    /// when the file is missing or malformed.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {path}");
                    config
                }
                Err(err) => {
                    log::warn!("Malformed config {path}: {err}; using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Cannot read config {path}: {err}; using defaults");
                Self::default()
            }
        }
    }
}
