//! Star Bounce entry point
//!
//! Headless native runner: drives the sim from a clock, steers the ball
//! with a simple autopilot and prints text frames.
//!
//! Usage: star-bounce [--seed N] [--ticks N] [--fps F] [--preset NAME]
//!                    [--tuning FILE] [--settings FILE] [--frame-every N]
//!                    [--json] [--realtime]

use std::process::ExitCode;
use std::time::Duration;

use star_bounce::renderer::{Scene, View, render_frame};
use star_bounce::sim::{Direction, GameEvent, GameState, TickInput, tick};
use star_bounce::{Clock, FixedClock, Settings, SystemClock, Tuning};

#[derive(Debug)]
struct Options {
    seed: u64,
    ticks: u64,
    fps: f32,
    tuning: Tuning,
    settings: Settings,
    frame_every: u64,
    json: bool,
    realtime: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        seed: std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
        ticks: 3600,
        fps: 60.0,
        tuning: Tuning::default(),
        settings: Settings::default(),
        frame_every: 60,
        json: false,
        realtime: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} needs a value", name))
        };
        match arg.as_str() {
            "--seed" => opts.seed = parse_num(&value("--seed")?)?,
            "--ticks" => opts.ticks = parse_num(&value("--ticks")?)?,
            "--fps" => opts.fps = parse_num(&value("--fps")?)?,
            "--frame-every" => opts.frame_every = parse_num(&value("--frame-every")?)?,
            "--preset" => {
                let name = value("--preset")?;
                opts.settings =
                    Settings::from_preset(&name).ok_or_else(|| format!("unknown preset `{}`", name))?;
            }
            "--tuning" => {
                let json = read_file(&value("--tuning")?)?;
                opts.tuning = Tuning::from_json(&json).map_err(|e| e.to_string())?;
            }
            "--settings" => {
                let json = read_file(&value("--settings")?)?;
                opts.settings = Settings::from_json(&json).map_err(|e| e.to_string())?;
            }
            "--json" => opts.json = true,
            "--realtime" => opts.realtime = true,
            other => return Err(format!("unknown argument `{}`", other)),
        }
    }
    if !(opts.fps.is_finite() && opts.fps > 0.0 && (1.0 / opts.fps).is_finite()) {
        return Err(format!("--fps must be a positive frame rate, got {}", opts.fps));
    }
    Ok(opts)
}

fn parse_num<T: std::str::FromStr>(s: &str) -> Result<T, String> {
    s.parse().map_err(|_| format!("`{}` is not a valid number", s))
}

fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))
}

/// Steer toward the nearest platform below the ball
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let ball = state.ball.xy();
    let target = state
        .platforms()
        .iter()
        .filter(|p| p.pos.y < ball.y)
        .min_by(|a, b| {
            (ball.y - a.pos.y)
                .partial_cmp(&(ball.y - b.pos.y))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    if let Some(platform) = target {
        let offset = platform.pos.x - ball.x;
        if offset < -0.1 {
            input.key_down(Direction::Left);
        } else if offset > 0.1 {
            input.key_down(Direction::Right);
        }
    }
    input
}

fn run(opts: Options) {
    let mut state = GameState::new(opts.seed, opts.tuning, opts.settings);
    let mut scene = Scene::new();
    let view = View::default();

    log::info!(
        "Star Bounce starting (seed {}, variant {})",
        opts.seed,
        state.settings.variant.as_str()
    );

    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, 0.0);
    scene.update(&mut state);

    let mut clock: Box<dyn Clock> = if opts.realtime {
        Box::new(SystemClock::new())
    } else {
        Box::new(FixedClock::from_fps(opts.fps))
    };
    let frame_time = Duration::from_secs_f32(1.0 / opts.fps.max(1.0));

    let mut best = 0;
    let mut runs = 0;
    for n in 1..=opts.ticks {
        if opts.realtime {
            std::thread::sleep(frame_time);
        }
        let input = autopilot(&state);
        let dt = clock.delta();
        tick(&mut state, &input, dt);

        for event in state.pending_events() {
            match event {
                GameEvent::GameOver { .. } => runs += 1,
                GameEvent::Bounced { score, .. } => best = best.max(*score),
                _ => {}
            }
        }
        scene.update(&mut state);
        while let Some(alert) = scene.take_alert() {
            println!("{}", alert);
        }

        if opts.frame_every > 0 && n % opts.frame_every == 0 {
            if opts.json {
                match serde_json::to_string(&state.snapshot()) {
                    Ok(json) => println!("{}", json),
                    Err(e) => log::warn!("Snapshot failed: {}", e),
                }
            } else {
                println!("{}", render_frame(&state, &view));
            }
        }
    }

    log::info!(
        "Finished {} ticks ({:.1}s simulated): {} game overs, best score {}",
        opts.ticks,
        clock.elapsed(),
        runs,
        best
    );
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args) {
        Ok(opts) => {
            run(opts);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
