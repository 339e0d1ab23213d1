//! Game state and core simulation types
//!
//! The whole run lives in one explicit [`GameState`] value: no globals,
//! no hidden collections. Hosts pass it into the tick and read it back.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::wave;
use crate::config::{BonusConfig, GameConfig};

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// An enemy shot or an enemy body touched the player
    DirectHit,
    /// The formation dropped down to the player row
    Invasion,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; restart is the only way out
    GameOver { reason: LossReason },
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// Seconds until the cannon may fire again; floored at zero
    pub cooldown: f32,
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A shot in flight. Player shots travel up, enemy shots down;
/// the owning collection carries the direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Projectile {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// One grid enemy. Dead enemies stay in the collection (skipped, not
/// compacted) until the next level regenerates the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub alive: bool,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A destructible shield block. Inert once durability reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shield {
    pub pos: Vec2,
    pub size: Vec2,
    pub durability: u8,
    pub max_durability: u8,
}

impl Shield {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Remaining durability as a 0..=1 fraction (for the render color ramp)
    pub fn durability_frac(&self) -> f32 {
        if self.max_durability == 0 {
            0.0
        } else {
            self.durability as f32 / self.max_durability as f32
        }
    }

    pub fn is_inert(&self) -> bool {
        self.durability == 0
    }
}

/// The bonus flyer sweeping the top of the playfield. Single instance,
/// toggled active/inactive rather than created and destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusTarget {
    pub active: bool,
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal direction sign: +1 sweeps rightward, -1 leftward
    pub dir: f32,
    pub speed: f32,
    /// Seconds until the next spawn while inactive; floored at zero
    pub respawn_timer: f32,
}

impl BonusTarget {
    /// A dormant flyer with a freshly drawn respawn countdown
    pub fn idle(config: &BonusConfig, rng: &mut Pcg32) -> Self {
        Self {
            active: false,
            pos: Vec2::new(-config.size.x, config.y),
            size: config.size,
            dir: 1.0,
            speed: config.speed,
            respawn_timer: rng.random_range(config.respawn_min..=config.respawn_max),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Shared movement state of the enemy grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    /// Horizontal direction sign: +1 rightward, -1 leftward
    pub dir: f32,
    pub speed: f32,
    /// Seconds until the next enemy shot; floored at zero
    pub shoot_timer: f32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only source of randomness in the sim
    pub rng: Pcg32,
    /// Rule set for this run
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u64,
    /// 1-based level counter
    pub level: u32,
    pub player: Player,
    /// Player shots, travelling up
    pub player_shots: Vec<Projectile>,
    /// Enemy shots, travelling down
    pub enemy_shots: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    /// Empty when the shield component is disabled
    pub shields: Vec<Shield>,
    /// `None` when the bonus component is disabled
    pub bonus: Option<BonusTarget>,
    pub formation: Formation,
}

impl GameState {
    /// Create a fresh level-1 run with the given seed and rule set
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player {
            pos: Vec2::new(
                (config.playfield.x - config.player.size.x) / 2.0,
                config.player_y(),
            ),
            size: config.player.size,
            speed: config.player.speed,
            cooldown: 0.0,
        };
        let enemies = wave::spawn_formation(&config, 1);
        let shields = wave::spawn_shields(&config);
        let bonus = config.bonus.as_ref().map(|b| BonusTarget::idle(b, &mut rng));

        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            score: 0,
            level: 1,
            player,
            player_shots: Vec::new(),
            enemy_shots: Vec::new(),
            enemies,
            shields,
            bonus,
            formation: Formation {
                dir: 1.0,
                speed: config.formation.base_speed,
                shoot_timer: 0.0,
            },
            config,
        }
    }

    /// Discard the run and reinitialize synchronously, reusing the seed
    /// so a restarted run replays identically.
    pub fn restart(&mut self) {
        log::info!("Restarting run (seed {})", self.seed);
        *self = GameState::new(self.seed, self.config.clone());
    }

    pub fn running(&self) -> bool {
        matches!(self.phase, GamePhase::Playing)
    }

    /// Overlay message for the HUD; empty while running
    pub fn message(&self) -> &'static str {
        match self.phase {
            GamePhase::Playing => "",
            GamePhase::GameOver {
                reason: LossReason::DirectHit,
            } => "ゲームオーバー！ Enterで再開",
            GamePhase::GameOver {
                reason: LossReason::Invasion,
            } => "侵略されました… Enterで再開",
        }
    }

    /// Count of enemies still alive in the current grid
    pub fn living_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_layout() {
        let state = GameState::new(7, GameConfig::default());
        assert!(state.running());
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        // 10 x 4 grid at level 1
        assert_eq!(state.enemies.len(), 40);
        assert!(state.enemies.iter().all(|e| e.alive));
        assert_eq!(state.shields.len(), 4);
        assert!(state.bonus.as_ref().is_some_and(|b| !b.active));
        // Player centered on the playfield
        assert_eq!(state.player.pos.x, (640.0 - 56.0) / 2.0);
        assert_eq!(state.player.pos.y, 440.0);
    }

    #[test]
    fn test_classic_run_has_no_optional_components() {
        let state = GameState::new(7, GameConfig::classic());
        assert!(state.shields.is_empty());
        assert!(state.bonus.is_none());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(42, GameConfig::default());
        state.score = 500;
        state.level = 3;
        state.phase = GamePhase::GameOver {
            reason: LossReason::Invasion,
        };
        state.enemies[0].alive = false;

        state.restart();
        assert!(state.running());
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert!(state.enemies.iter().all(|e| e.alive));
        assert!(state.message().is_empty());
    }

    #[test]
    fn test_restart_replays_identically() {
        let a = GameState::new(1234, GameConfig::default());
        let mut b = GameState::new(1234, GameConfig::default());
        b.score = 90;
        b.restart();
        // Same seed, same respawn countdown draw
        assert_eq!(
            a.bonus.as_ref().map(|t| t.respawn_timer),
            b.bonus.as_ref().map(|t| t.respawn_timer)
        );
    }

    #[test]
    fn test_messages() {
        let mut state = GameState::new(7, GameConfig::default());
        assert!(state.message().is_empty());
        state.phase = GamePhase::GameOver {
            reason: LossReason::DirectHit,
        };
        assert!(!state.message().is_empty());
    }
}
