use anyhow::Context;
use bridge::ControlBridge;
use clap::Parser;
use log::info;
use scenario::ScenarioConfig;
use std::fs;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use wavecore::math::StatsHelper;
use wavecore::SignalPipeline;

mod bridge;
mod scenario;

#[derive(Parser)]
#[command(author, version, about = "Harmonic signal workbench driver")]
struct Args {
    /// Run one scenario offline and write the series snapshot to disk
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load scenario settings from YAML
    #[arg(long)]
    scenario: Option<PathBuf>,
    #[arg(long, default_value_t = 1000)]
    samples: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Where the offline run writes its snapshot
    #[arg(long, default_value = "tools/data/series_snapshot.json")]
    output: PathBuf,
    /// Keep the HTTP bridge alive for an external control surface
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario = if let Some(path) = args.scenario {
        ScenarioConfig::load(path)?
    } else {
        ScenarioConfig::from_args(args.samples, args.seed)
    };
    info!(
        "scenario: {} samples, seed {}, filter {}",
        scenario.samples,
        scenario.seed,
        scenario.filter.describe()
    );

    let pipeline = SignalPipeline::with_seed(scenario.samples, scenario.seed)?;
    let bridge = ControlBridge::new(pipeline);
    let snapshot = bridge.apply(&scenario.event())?;

    if args.offline {
        println!(
            "Offline run -> {} samples, raw rms {:.4}, filtered rms {:.4}, filter {}",
            snapshot.sample_count(),
            StatsHelper::rms(&snapshot.raw),
            StatsHelper::rms(&snapshot.filtered),
            scenario.filter.describe()
        );

        if let Some(parent) = args.output.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&args.output, payload)
            .with_context(|| format!("writing snapshot {}", args.output.display()))?;
        bridge.publish_status(&format!("Snapshot written to {}", args.output.display()));
    }
    if args.serve {
        bridge.spawn();
        bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
