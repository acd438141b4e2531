mod app;
mod data;
mod error;
mod pages;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

fn main() {
    let log_file = File::create("griddle-docs.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = app::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
