//! Draw-instruction surface for host renderers
//!
//! The sim never draws. [`build_frame`] turns post-tick state into an
//! ordered list of abstract draw commands; a host (canvas, terminal, GPU
//! quad batcher) replays them however it likes.

use glam::Vec2;

use crate::sim::GameState;

/// RGBA color, straight alpha
pub type Color = [f32; 4];

const PLAYER_COLOR: Color = rgb(0x72, 0xf2, 0xb2);
const ENEMY_COLOR: Color = rgb(0xff, 0x6b, 0x8a);
const ENEMY_EYE_COLOR: Color = rgb(0xff, 0xd2, 0xdc);
const PLAYER_SHOT_COLOR: Color = rgb(0xff, 0xf7, 0x6a);
const ENEMY_SHOT_COLOR: Color = rgb(0x7f, 0xd0, 0xff);
const BONUS_COLOR: Color = rgb(0xff, 0xc4, 0x4d);
const HUD_COLOR: Color = rgb(0xd4, 0xdd, 0xff);
const MESSAGE_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
const OVERLAY_COLOR: Color = [0.0, 0.0, 0.0, 0.45];

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// One abstract draw call. Commands are emitted back-to-front.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle
    Rect { pos: Vec2, size: Vec2, color: Color },
    /// Text run; `centered` anchors on x instead of left-aligning
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
        centered: bool,
    },
    /// Full-screen translucent wash (drawn under whatever follows it)
    Overlay { color: Color },
}

/// Color ramp for shield damage: full durability renders green, half
/// renders amber, nearly spent renders red.
pub fn shield_color(durability_frac: f32) -> Color {
    let t = durability_frac.clamp(0.0, 1.0);
    if t > 0.5 {
        // Green toward amber
        let u = (1.0 - t) / 0.5;
        [0.35 + 0.65 * u, 0.9, 0.4 - 0.2 * u, 1.0]
    } else {
        // Amber toward red
        let u = t / 0.5;
        [1.0, 0.25 + 0.55 * u, 0.2, 1.0]
    }
}

/// Build the draw-command list for one frame of state.
pub fn build_frame(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.enemies.len() * 3 + 16);

    // Player hull plus the cannon nub on top
    let p = &state.player;
    commands.push(DrawCommand::Rect {
        pos: p.pos,
        size: p.size,
        color: PLAYER_COLOR,
    });
    commands.push(DrawCommand::Rect {
        pos: Vec2::new(p.pos.x + p.size.x / 2.0 - 5.0, p.pos.y - 8.0),
        size: Vec2::new(10.0, 8.0),
        color: PLAYER_COLOR,
    });

    // Alive enemies only: hull and a pair of eyes
    for enemy in state.enemies.iter().filter(|e| e.alive) {
        commands.push(DrawCommand::Rect {
            pos: enemy.pos,
            size: enemy.size,
            color: ENEMY_COLOR,
        });
        commands.push(DrawCommand::Rect {
            pos: enemy.pos + Vec2::new(5.0, 6.0),
            size: Vec2::new(5.0, 5.0),
            color: ENEMY_EYE_COLOR,
        });
        commands.push(DrawCommand::Rect {
            pos: enemy.pos + Vec2::new(enemy.size.x - 10.0, 6.0),
            size: Vec2::new(5.0, 5.0),
            color: ENEMY_EYE_COLOR,
        });
    }

    // Shields with durability still left, tinted by the damage ramp
    for shield in state.shields.iter().filter(|s| !s.is_inert()) {
        commands.push(DrawCommand::Rect {
            pos: shield.pos,
            size: shield.size,
            color: shield_color(shield.durability_frac()),
        });
    }

    if let Some(target) = state.bonus.as_ref().filter(|t| t.active) {
        commands.push(DrawCommand::Rect {
            pos: target.pos,
            size: target.size,
            color: BONUS_COLOR,
        });
    }

    for shot in &state.player_shots {
        commands.push(DrawCommand::Rect {
            pos: shot.pos,
            size: shot.size,
            color: PLAYER_SHOT_COLOR,
        });
    }
    for shot in &state.enemy_shots {
        commands.push(DrawCommand::Rect {
            pos: shot.pos,
            size: shot.size,
            color: ENEMY_SHOT_COLOR,
        });
    }

    // HUD
    commands.push(DrawCommand::Text {
        text: format!("Score: {}", state.score),
        pos: Vec2::new(12.0, 24.0),
        size: 16.0,
        color: HUD_COLOR,
        centered: false,
    });
    commands.push(DrawCommand::Text {
        text: format!("Level: {}", state.level),
        pos: Vec2::new(state.config.playfield.x - 90.0, 24.0),
        size: 16.0,
        color: HUD_COLOR,
        centered: false,
    });

    if !state.running() {
        commands.push(DrawCommand::Overlay {
            color: OVERLAY_COLOR,
        });
        commands.push(DrawCommand::Text {
            text: state.message().to_string(),
            pos: state.config.playfield / 2.0,
            size: 28.0,
            color: MESSAGE_COLOR,
            centered: true,
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{GamePhase, LossReason};

    fn rect_count(commands: &[DrawCommand]) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }

    #[test]
    fn test_dead_enemies_are_skipped() {
        let mut state = GameState::new(1, GameConfig::classic());
        let full = rect_count(&build_frame(&state));
        state.enemies[0].alive = false;
        // Hull plus two eyes gone
        assert_eq!(rect_count(&build_frame(&state)), full - 3);
    }

    #[test]
    fn test_running_frame_has_no_overlay() {
        let state = GameState::new(1, GameConfig::default());
        let commands = build_frame(&state);
        assert!(
            !commands
                .iter()
                .any(|c| matches!(c, DrawCommand::Overlay { .. }))
        );
    }

    #[test]
    fn test_game_over_overlay_and_message() {
        let mut state = GameState::new(1, GameConfig::default());
        state.phase = GamePhase::GameOver {
            reason: LossReason::Invasion,
        };
        let commands = build_frame(&state);
        assert!(
            commands
                .iter()
                .any(|c| matches!(c, DrawCommand::Overlay { .. }))
        );
        let has_message = commands.iter().any(|c| {
            matches!(c, DrawCommand::Text { text, centered: true, .. } if !text.is_empty())
        });
        assert!(has_message);
    }

    #[test]
    fn test_inert_shields_not_drawn() {
        let mut state = GameState::new(1, GameConfig::default());
        let full = rect_count(&build_frame(&state));
        state.shields[0].durability = 0;
        assert_eq!(rect_count(&build_frame(&state)), full - 1);
    }

    #[test]
    fn test_bonus_drawn_only_when_active() {
        let mut state = GameState::new(1, GameConfig::default());
        let dormant = rect_count(&build_frame(&state));
        state.bonus.as_mut().unwrap().active = true;
        assert_eq!(rect_count(&build_frame(&state)), dormant + 1);
    }

    #[test]
    fn test_shield_color_ramp() {
        let fresh = shield_color(1.0);
        let spent = shield_color(0.1);
        // Fresh shields read green, battered shields read red
        assert!(fresh[1] > fresh[0]);
        assert!(spent[0] > spent[1]);
        // Out-of-range input is clamped, not garbage
        assert_eq!(shield_color(2.0), shield_color(1.0));
    }
}
