use std::path::PathBuf;

use addressbook::config::Config;
use addressbook::flat_file;
use addressbook::store::ContactDirectory;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut config_path: Option<PathBuf> = None;
    let mut import_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                config_path = args.next().map(PathBuf::from);
                if config_path.is_none() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--import" | "-i" => {
                import_path = args.next().map(PathBuf::from);
                if import_path.is_none() {
                    eprintln!("Error: --import requires a file path");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Address Book");
                println!();
                println!("Usage: addressbook [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>    JSON config file");
                println!("  -i, --import <PATH>    Load contacts from a file before starting");
                println!("  -h, --help             Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let config = match config_path {
        Some(path) => match Config::load(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let mut dir = ContactDirectory::new();
    if let Some(path) = import_path {
        match flat_file::import_contacts(&mut dir, &path) {
            Ok(stats) => {
                println!("Loaded {} contact(s) from {}", stats.imported, path.display());
                for e in &stats.skipped {
                    println!("  skipped {}", e);
                }
            }
            Err(e) => {
                eprintln!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    addressbook::cli::run(dir, config);
}
