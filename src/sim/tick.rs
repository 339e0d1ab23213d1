//! Per-frame simulation update
//!
//! One logical tick per host frame: movement, projectile flight, collision
//! resolution, formation advance, level progression, return fire, and the
//! bonus flyer. The step order is fixed; tests rely on it.

use glam::Vec2;
use rand::Rng;

use super::state::{GamePhase, GameState, LossReason, Projectile};
use super::wave;
use crate::consts::MAX_FRAME_DT;

/// Sampled movement intent for a single tick. Level-triggered: the host
/// sets these from whatever device it reads, once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the game by one frame of `dt` seconds (clamped to
/// [`MAX_FRAME_DT`]). No-op once the run has ended.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if !state.running() {
        return;
    }
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    // 1. Player movement, clamped to the playfield minus margin
    move_player(state, input, dt);

    // 2. Fire cooldown, floored at zero
    state.player.cooldown = (state.player.cooldown - dt).max(0.0);

    // 3-4. Shot flight, then off-screen culling. A culled shot is gone
    // before collision resolution sees it.
    advance_shots(state, dt);

    // 5. Projectile collisions
    if let Some(reason) = resolve_projectiles(state) {
        end_game(state, reason);
        return;
    }

    // 6-7. Formation advance, edge handling, and contact
    if let Some(reason) = advance_formation(state, dt) {
        end_game(state, reason);
        return;
    }

    // 8. Wiped grid advances the level
    if state.enemies.iter().all(|e| !e.alive) {
        wave::advance_level(state);
    }

    // 9. Enemy return fire
    enemy_fire(state, dt);

    // 10. Bonus flyer spawn/sweep
    update_bonus(state, dt);
}

/// Fire the player cannon. A separate operation from the periodic tick:
/// the host invokes it on a fire event, gated by cooldown and phase.
pub fn fire(state: &mut GameState) {
    if state.player.cooldown > 0.0 || !state.running() {
        return;
    }
    let GameState {
        player,
        player_shots,
        config,
        ..
    } = state;
    let shot = &config.player;
    player_shots.push(Projectile {
        pos: Vec2::new(
            player.pos.x + player.size.x / 2.0 - shot.shot_size.x / 2.0,
            player.pos.y - shot.shot_size.y,
        ),
        size: shot.shot_size,
        speed: shot.shot_speed,
    });
    player.cooldown = shot.fire_cooldown;
}

fn end_game(state: &mut GameState, reason: LossReason) {
    state.phase = GamePhase::GameOver { reason };
    log::info!(
        "Game over at level {} with score {}: {}",
        state.level,
        state.score,
        state.message()
    );
}

fn move_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let GameState { player, config, .. } = state;
    if input.left {
        player.pos.x -= player.speed * dt;
    }
    if input.right {
        player.pos.x += player.speed * dt;
    }
    let min_x = config.edge_margin;
    let max_x = config.playfield.x - player.size.x - config.edge_margin;
    player.pos.x = player.pos.x.clamp(min_x, max_x);
}

fn advance_shots(state: &mut GameState, dt: f32) {
    for shot in &mut state.player_shots {
        shot.pos.y -= shot.speed * dt;
    }
    for shot in &mut state.enemy_shots {
        shot.pos.y += shot.speed * dt;
    }
    let height = state.config.playfield.y;
    state.player_shots.retain(|s| s.pos.y + s.size.y > 0.0);
    state.enemy_shots.retain(|s| s.pos.y <= height);
}

/// Resolve every in-flight shot against its candidate targets. Per shot:
/// shields win over everything else, the lowest-index shield with
/// durability left takes the hit, and among enemies the highest alive
/// index wins. A shot is consumed by its first hit.
fn resolve_projectiles(state: &mut GameState) -> Option<LossReason> {
    let GameState {
        player,
        player_shots,
        enemy_shots,
        enemies,
        shields,
        bonus,
        score,
        config,
        rng,
        ..
    } = state;

    let mut i = player_shots.len();
    while i > 0 {
        i -= 1;
        let shot = player_shots[i].bounds();

        if let Some(shield) = shields
            .iter_mut()
            .find(|s| !s.is_inert() && s.bounds().overlaps(&shot))
        {
            shield.durability -= 1;
            player_shots.remove(i);
            continue;
        }

        if let Some(target) = bonus
            .as_mut()
            .filter(|t| t.active && t.bounds().overlaps(&shot))
        {
            target.active = false;
            if let Some(cfg) = &config.bonus {
                target.respawn_timer = rng.random_range(cfg.respawn_min..=cfg.respawn_max);
                *score += cfg.points;
            }
            player_shots.remove(i);
            continue;
        }

        for ei in (0..enemies.len()).rev() {
            if enemies[ei].alive && enemies[ei].bounds().overlaps(&shot) {
                enemies[ei].alive = false;
                *score += config.enemy_points;
                player_shots.remove(i);
                break;
            }
        }
    }

    let player_rect = player.bounds();
    let mut i = enemy_shots.len();
    while i > 0 {
        i -= 1;
        let shot = enemy_shots[i].bounds();

        if let Some(shield) = shields
            .iter_mut()
            .find(|s| !s.is_inert() && s.bounds().overlaps(&shot))
        {
            shield.durability -= 1;
            enemy_shots.remove(i);
            continue;
        }

        if player_rect.overlaps(&shot) {
            return Some(LossReason::DirectHit);
        }
    }

    None
}

/// Move the live formation horizontally; on edge contact reverse and drop.
/// A dropped enemy reaching the player row loses the run, as does any
/// enemy body touching the player or grinding through a shield afterward.
fn advance_formation(state: &mut GameState, dt: f32) -> Option<LossReason> {
    let GameState {
        player,
        enemies,
        shields,
        formation,
        config,
        ..
    } = state;

    let step = formation.dir * formation.speed * dt;
    let min_x = config.edge_margin;
    let max_x = config.playfield.x - config.edge_margin;

    let mut hit_edge = false;
    for enemy in enemies.iter_mut().filter(|e| e.alive) {
        enemy.pos.x += step;
        if enemy.pos.x <= min_x || enemy.pos.x + enemy.size.x >= max_x {
            hit_edge = true;
        }
    }

    if hit_edge {
        formation.dir = -formation.dir;
        let mut invaded = false;
        for enemy in enemies.iter_mut().filter(|e| e.alive) {
            enemy.pos.y += config.formation.drop_distance;
            if enemy.pos.y + enemy.size.y >= player.pos.y {
                invaded = true;
            }
        }
        if invaded {
            return Some(LossReason::Invasion);
        }
    }

    let player_rect = player.bounds();
    for enemy in enemies.iter().filter(|e| e.alive) {
        let body = enemy.bounds();
        if let Some(shield) = shields
            .iter_mut()
            .find(|s| !s.is_inert() && s.bounds().overlaps(&body))
        {
            shield.durability -= 1;
        }
        if body.overlaps(&player_rect) {
            return Some(LossReason::DirectHit);
        }
    }

    None
}

/// Count the shoot timer down; at zero a uniformly random living enemy
/// fires. The interval shrinks with the level, floored at the minimum.
fn enemy_fire(state: &mut GameState, dt: f32) {
    let GameState {
        enemies,
        enemy_shots,
        formation,
        config,
        rng,
        level,
        ..
    } = state;

    formation.shoot_timer = (formation.shoot_timer - dt).max(0.0);
    if formation.shoot_timer > 0.0 {
        return;
    }

    let living: Vec<usize> = enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.alive)
        .map(|(i, _)| i)
        .collect();
    if living.is_empty() {
        return;
    }

    let f = &config.formation;
    let shooter = &enemies[living[rng.random_range(0..living.len())]];
    enemy_shots.push(Projectile {
        pos: Vec2::new(
            shooter.pos.x + shooter.size.x / 2.0 - f.shot_size.x / 2.0,
            shooter.pos.y + shooter.size.y,
        ),
        size: f.shot_size,
        speed: f.shot_base_speed + *level as f32 * f.shot_speed_per_level,
    });
    formation.shoot_timer =
        (f.shoot_interval_base - *level as f32 * f.shoot_interval_per_level).max(f.shoot_interval_min);
}

/// Dormant flyer counts its respawn timer down and enters from a random
/// side; an active flyer sweeps across and goes dormant once fully past
/// the far side.
fn update_bonus(state: &mut GameState, dt: f32) {
    let GameState {
        bonus, config, rng, ..
    } = state;
    let (Some(cfg), Some(target)) = (&config.bonus, bonus.as_mut()) else {
        return;
    };

    if target.active {
        target.pos.x += target.dir * target.speed * dt;
        let gone = if target.dir > 0.0 {
            target.pos.x >= config.playfield.x
        } else {
            target.pos.x + target.size.x <= 0.0
        };
        if gone {
            target.active = false;
            target.respawn_timer = rng.random_range(cfg.respawn_min..=cfg.respawn_max);
        }
    } else {
        target.respawn_timer = (target.respawn_timer - dt).max(0.0);
        if target.respawn_timer == 0.0 {
            let from_left = rng.random_bool(0.5);
            target.dir = if from_left { 1.0 } else { -1.0 };
            target.pos = Vec2::new(
                if from_left {
                    -target.size.x
                } else {
                    config.playfield.x
                },
                cfg.y,
            );
            target.active = true;
            log::debug!(
                "Bonus flyer entering from the {}",
                if from_left { "left" } else { "right" }
            );
        }
    }
}
