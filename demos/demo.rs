//! Command-line demo for rgb2hsv
//!
//! Converts one color and prints it in both models. Without arguments the
//! built-in demo color is used.

use rgb2hsv::{rgb_to_hsv, DemoConfig, Rgb};
use std::{env, path::Path, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = DemoConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("Error: --config requires a path");
                    process::exit(1);
                };
                config = match DemoConfig::from_json_file(Path::new(path)) {
                    Ok(config) => config,
                    Err(e) => {
                        log::error!("{}", e);
                        eprintln!("Error: {}", e.user_message());
                        process::exit(1);
                    }
                };
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => match arg.parse::<Rgb>() {
                Ok(color) => config.color = color,
                Err(e) => {
                    log::error!("{}", e);
                    eprintln!("Error: {}", e.user_message());
                    process::exit(1);
                }
            },
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let color = config.color;
    println!("RGB Color: {}", color);

    match rgb_to_hsv(color) {
        Ok(hsv) => println!("HSV Color: {:.*}", config.precision, hsv),
        Err(e) => {
            log::error!("converting {}: {}", color.to_hex(), e);
            eprintln!("Error: {}", e.user_message());
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    println!("Usage: {} [OPTIONS] [HEX_COLOR]", program);
    println!();
    println!("Arguments:");
    println!("  HEX_COLOR          Color to convert, e.g. #FF1E08 (default: built-in demo color)");
    println!();
    println!("Options:");
    println!("  --config <PATH>    Load color and precision from a JSON config");
    println!("  -h, --help         Show this help message");
}
