mod app;
mod layout;
mod radar;
mod util;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;

use app::Theme;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// YAML file holding `LastModified` and the flat `Items` list
    #[arg(long, default_value = "data/radar.yaml")]
    data_file: PathBuf,

    /// Print the snapshot as JSON and exit instead of opening the window
    #[arg(long)]
    dump_json: bool,

    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,
}

fn dump_snapshot(data_file: &Path) -> anyhow::Result<()> {
    let snapshot = radar::fetch_snapshot(data_file)?;
    let json = snapshot
        .to_json()
        .context("failed to encode radar snapshot as JSON")?;
    println!("{json}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.dump_json {
        return dump_snapshot(&args.data_file);
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    let Args {
        data_file, theme, ..
    } = args;
    eframe::run_native(
        "Tech Radar",
        options,
        Box::new(move |cc| Ok(Box::new(app::TechRadarApp::new(cc, data_file, theme)))),
    )
    .map_err(|error| anyhow::anyhow!("failed to start the radar window: {error}"))
}
