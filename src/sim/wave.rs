//! Wave and level management
//!
//! Generates the enemy grid and the shield line, and handles the level
//! advance once a grid is wiped out: speed up, regenerate, clean slate.

use glam::Vec2;

use super::state::{BonusTarget, Enemy, GameState, Shield};
use crate::config::GameConfig;

/// Row count for a level: base rows plus one per level, capped
pub fn formation_rows(config: &GameConfig, level: u32) -> u32 {
    let f = &config.formation;
    f.base_rows + level.saturating_sub(1).min(f.max_extra_rows)
}

/// Build the enemy grid for a level: fixed columns, level-scaled rows,
/// constant per-cell spacing from a top-left offset.
pub fn spawn_formation(config: &GameConfig, level: u32) -> Vec<Enemy> {
    let f = &config.formation;
    let rows = formation_rows(config, level);
    let mut enemies = Vec::with_capacity((rows * f.cols) as usize);

    for row in 0..rows {
        for col in 0..f.cols {
            enemies.push(Enemy {
                pos: config.formation.offset
                    + Vec2::new(col as f32 * f.spacing.x, row as f32 * f.spacing.y),
                size: f.enemy_size,
                alive: true,
            });
        }
    }

    enemies
}

/// Build the shield line: evenly spaced slots above the player row.
/// Empty when the component is disabled.
pub fn spawn_shields(config: &GameConfig) -> Vec<Shield> {
    let Some(s) = &config.shields else {
        return Vec::new();
    };

    let y = config.player_y() - s.gap_above_player;
    let slot = config.playfield.x / (s.count + 1) as f32;

    (0..s.count)
        .map(|i| Shield {
            pos: Vec2::new((i + 1) as f32 * slot - s.size.x / 2.0, y),
            size: s.size,
            durability: s.durability,
            max_durability: s.durability,
        })
        .collect()
}

/// Advance to the next level: bump the counter, speed the formation up,
/// reset its direction rightward, regenerate enemies and shields, clear
/// all in-flight shots, and force the bonus flyer inactive.
pub fn advance_level(state: &mut GameState) {
    state.level += 1;
    state.formation.speed += state.config.formation.speed_increment;
    state.formation.dir = 1.0;
    state.player_shots.clear();
    state.enemy_shots.clear();
    state.enemies = spawn_formation(&state.config, state.level);
    state.shields = spawn_shields(&state.config);
    if let Some(b) = &state.config.bonus {
        state.bonus = Some(BonusTarget::idle(b, &mut state.rng));
    }
    log::info!(
        "Level {} cleared: {} enemies incoming at speed {}",
        state.level - 1,
        state.enemies.len(),
        state.formation.speed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Rect;

    #[test]
    fn test_row_scaling_caps() {
        let config = GameConfig::default();
        assert_eq!(formation_rows(&config, 1), 4);
        assert_eq!(formation_rows(&config, 2), 5);
        assert_eq!(formation_rows(&config, 4), 7);
        // Capped from level 4 on
        assert_eq!(formation_rows(&config, 9), 7);
    }

    #[test]
    fn test_grid_layout() {
        let config = GameConfig::default();
        let enemies = spawn_formation(&config, 1);
        assert_eq!(enemies.len(), 40);
        // Top-left cell sits at the offset
        assert_eq!(enemies[0].pos, Vec2::new(70.0, 56.0));
        // Next column over by spacing.x
        assert_eq!(enemies[1].pos, Vec2::new(122.0, 56.0));
        // Next row down by spacing.y
        assert_eq!(enemies[10].pos, Vec2::new(70.0, 92.0));
    }

    #[test]
    fn test_grid_fits_playfield() {
        let config = GameConfig::default();
        for level in 1..10 {
            for e in spawn_formation(&config, level) {
                assert!(e.pos.x >= config.edge_margin);
                assert!(e.pos.x + e.size.x <= config.playfield.x - config.edge_margin);
            }
        }
    }

    #[test]
    fn test_shield_line() {
        let config = GameConfig::default();
        let shields = spawn_shields(&config);
        assert_eq!(shields.len(), 4);
        // Above the player row
        for s in &shields {
            assert!(s.bounds().bottom() < config.player_y());
            assert_eq!(s.durability, s.max_durability);
        }
        // Evenly spaced and non-overlapping
        for pair in shields.windows(2) {
            let gap = pair[1].pos.x - pair[0].pos.x;
            assert!((gap - 128.0).abs() < 1e-3);
            assert!(!Rect::overlaps(&pair[0].bounds(), &pair[1].bounds()));
        }
    }

    #[test]
    fn test_shields_disabled() {
        assert!(spawn_shields(&GameConfig::classic()).is_empty());
    }

    #[test]
    fn test_advance_level() {
        let mut state = GameState::new(5, GameConfig::default());
        state.enemies.iter_mut().for_each(|e| e.alive = false);
        state.shields[0].durability = 1;
        state.formation.dir = -1.0;
        state.player_shots.push(crate::sim::Projectile {
            pos: Vec2::new(100.0, 100.0),
            size: Vec2::new(4.0, 12.0),
            speed: 420.0,
        });
        if let Some(bonus) = state.bonus.as_mut() {
            bonus.active = true;
        }
        let old_speed = state.formation.speed;

        advance_level(&mut state);

        assert_eq!(state.level, 2);
        assert!(state.formation.speed > old_speed);
        assert_eq!(state.formation.dir, 1.0);
        assert!(state.player_shots.is_empty());
        assert!(state.enemy_shots.is_empty());
        // 10 x 5 at level 2
        assert_eq!(state.enemies.len(), 50);
        assert!(state.enemies.iter().all(|e| e.alive));
        assert_eq!(state.shields[0].durability, state.shields[0].max_durability);
        assert!(state.bonus.as_ref().is_some_and(|b| !b.active));
    }
}
