//! Generate the default demo configuration file
//!
//! Creates a JSON config holding the built-in demo color

use rgb2hsv::DemoConfig;
use std::{env, path::Path, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = DemoConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!("  Color:     {} ({})", config.color.to_hex(), config.color);
            eprintln!("  Precision: {} decimals", config.precision);
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
