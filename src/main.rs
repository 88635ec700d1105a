use gravcam::{Scenario, ScenarioConfig, RecordingSurface};
use gravcam::{bench_frame_curve, bench_tick};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up in the crate's `scenarios/` directory
    #[arg(short, default_value = "orbiting.yaml")]
    file_name: String,

    /// Number of frames to run
    #[arg(short = 'n', long, default_value_t = 100)]
    frames: u64,

    /// Print every draw call, not just per-frame statistics
    #[arg(short, long)]
    verbose: bool,

    /// Run the tick/frame benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_tick();
        bench_frame_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(&scenario_cfg).context("invalid scenario")?;

    println!(
        "gravcam: running {} frames of {} with {} bodies",
        args.frames,
        args.file_name,
        scenario.simulation.universe.len()
    );

    let mut surface = RecordingSurface::new();
    for frame in 0..args.frames {
        let commands: Vec<_> = scenario.inputs_for(frame).collect();
        for command in commands {
            println!("frame {frame:5}: input {command:?}");
            scenario.simulation.apply_input(command);
        }

        surface.clear();
        let report = scenario.simulation.tick(&mut surface);

        println!(
            "frame {:5}: {:4} bodies, {} merges, {:8.2} FPS, timestep {} kHz",
            report.frame,
            report.live_bodies,
            report.merges,
            report.fps(),
            report.timestep_hz as f64 / 1000.0
        );
        if args.verbose {
            for call in &surface.calls {
                println!(
                    "    circle at ({:9.2}, {:9.2}) r {:6.2}",
                    call.centre.0, call.centre.1, call.radius
                );
            }
        }

        if scenario.simulation.universe.is_empty() {
            eprintln!("gravcam: no bodies left, stopping");
            break;
        }
    }

    let camera = scenario.simulation.camera.state();
    println!(
        "camera: position {:?}, target {:?}, yaw {}, pitch {}, near {}, far {}",
        camera.position.as_slice(),
        camera.target.as_slice(),
        camera.yaw,
        camera.pitch,
        camera.near_plane,
        camera.far_plane
    );

    Ok(())
}
