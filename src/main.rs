//! Hoop Shot headless runner
//!
//! Plays a demo session with the autoplayer and logs what happens.
//!
//! Usage: `hoop-shot [config.json] [seconds] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use hoop_shot::GameConfig;
    use hoop_shot::consts::SIM_DT;
    use hoop_shot::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next().filter(|a| a != "-") {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path))?;
            GameConfig::from_json(&json).with_context(|| format!("loading config {}", path))?
        }
        None => GameConfig::default(),
    };
    let seconds: f32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("bad duration {:?}", s))?,
        None => 60.0,
    };
    let seed: u64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("bad seed {:?}", s))?,
        None => 1,
    };

    log::info!("Hoop Shot (native) starting: {} s, seed {}", seconds, seed);

    let mut state = GameState::new(config, seed);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let frames = (seconds * 1000.0 / SIM_DT).ceil() as u64;
    let mut shots = 0u32;
    let mut baskets = 0u32;

    for _ in 0..frames {
        tick(&mut state, &input, SIM_DT);
        for event in state.drain_events() {
            match event {
                GameEvent::Shot => shots += 1,
                GameEvent::Scored { .. } => baskets += 1,
                _ => {}
            }
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "{} shots, {} baskets, {} points",
        shots, baskets, state.points
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless runner is native only
}
