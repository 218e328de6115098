//! Missile Command headless runner
//!
//! Loads settings, drives the simulation at a fixed tick rate and prints the
//! final frame as JSON. Usage: `missile-command [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use missile_command::sim::{Autopilot, GamePhase, GameState, TickInput};
    use missile_command::{FrameDriver, Settings};

    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    log::info!("Missile Command (headless) starting with seed: {}", seed);

    let mut driver = FrameDriver::new(
        GameState::with_rules(seed, settings.rules),
        settings.tick_rate_hz,
    );
    let mut autopilot = Autopilot::new();
    let mut last_phase = driver.state.phase;
    let mut last_frame = Instant::now();

    while driver.state.time_ticks < settings.max_ticks {
        driver.input = if settings.autopilot {
            autopilot.input(&driver.state)
        } else {
            TickInput {
                confirm: driver.state.phase == GamePhase::Opening,
                ..Default::default()
            }
        };

        if settings.realtime {
            std::thread::sleep(Duration::from_secs_f32(driver.tick_dt()));
            let now = Instant::now();
            driver.update((now - last_frame).as_secs_f32());
            last_frame = now;
        } else {
            driver.step();
        }

        let phase = driver.state.phase;
        if phase != last_phase {
            log::info!("Phase {:?} -> {:?} at tick {}", last_phase, phase, driver.state.time_ticks);
            last_phase = phase;
        }
        if phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Finished after {} ticks: score {}, {} bases standing",
        driver.state.time_ticks,
        driver.state.score,
        driver.state.active_bases()
    );

    match serde_json::to_string_pretty(&driver.state.snapshot()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `FrameDriver` themselves
}
