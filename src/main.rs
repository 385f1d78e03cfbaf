mod app;
mod catalog;
mod graph;
mod util;

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Occupation catalog JSON file; the embedded dataset is used when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let catalog = catalog::load_catalog(args.catalog.as_deref())?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "career-atlas",
        options,
        Box::new(move |cc| Ok(Box::new(app::CareerAtlasApp::new(cc, catalog)))),
    )
    .map_err(|error| anyhow!("failed to run UI: {error}"))
}
