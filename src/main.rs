//! Headless demo runner
//!
//! Drives the sim with a scripted pilot at a fixed 60 Hz frame rate and
//! logs the run. Useful for smoke-testing tuning changes without a
//! renderer attached: `grid-invaders [config.json] [seed]`.

use grid_invaders::config::GameConfig;
use grid_invaders::input::{Button, InputState};
use grid_invaders::render;
use grid_invaders::sim::{self, GameState};

const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 20_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(&path),
        None => GameConfig::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5EED_CAFE);

    log::info!("Starting run with seed {seed}");
    let mut state = GameState::new(seed, config);
    let mut input = InputState::new();
    let mut last_level = state.level;

    for frame in 0..MAX_FRAMES {
        pilot(&state, &mut input);

        let snapshot = input.sample();
        if snapshot.fire {
            sim::fire(&mut state);
        }
        if snapshot.restart && !state.running() {
            state.restart();
        }
        sim::tick(&mut state, &snapshot.tick_input(), FRAME_DT);

        if state.level != last_level {
            last_level = state.level;
            log::info!(
                "Reached level {} at frame {} (score {})",
                state.level,
                frame,
                state.score
            );
        }
        if !state.running() {
            break;
        }
    }

    let frame_commands = render::build_frame(&state).len();
    log::info!(
        "Run over: score {}, level {}, {} draw commands in the final frame",
        state.score,
        state.level,
        frame_commands
    );
    if !state.running() {
        log::info!("{}", state.message());
    }
}

/// Chase the nearest living enemy column and fire on cooldown.
fn pilot(state: &GameState, input: &mut InputState) {
    input.cancel_all();

    let ship_center = state.player.pos.x + state.player.size.x / 2.0;
    let target = state
        .enemies
        .iter()
        .filter(|e| e.alive)
        .map(|e| e.pos.x + e.size.x / 2.0)
        .min_by(|a, b| {
            (a - ship_center)
                .abs()
                .partial_cmp(&(b - ship_center).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(target_x) = target {
        if target_x < ship_center - 4.0 {
            input.press(Button::Left);
        } else if target_x > ship_center + 4.0 {
            input.press(Button::Right);
        }
        if state.player.cooldown == 0.0 {
            input.press(Button::Fire);
        }
    }
}
