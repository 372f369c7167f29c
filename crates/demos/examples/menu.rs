use std::{fs::File, sync::Mutex};

use anyhow::Result;
use clap::Parser;
use gamelib::{Runtime, backend::crossterm::runloop, widgets::GroupConfig};
use gamelib_demos::menu::Menu;
use tracing::Level;

/// A terminal menu driven by the gamelib frame loop.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Lock the menu after the first choice
    #[clap(short, long)]
    single: bool,

    /// Frames per second
    #[clap(short, long, default_value_t = 60)]
    fps: u32,

    /// Write trace logs to this file
    #[clap(short, long)]
    log: Option<String>,
}

pub fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(Level::TRACE)
            .init();
    }

    let mut menu = Menu::new(GroupConfig {
        single_selection: args.single,
        ..GroupConfig::default()
    });
    let mut rt = Runtime::new();
    runloop(&mut menu, &mut rt, args.fps)?;
    if let Some(label) = menu.chosen() {
        println!("chose: {label}");
    }
    Ok(())
}
