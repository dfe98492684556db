//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire config, logging, storage and the model end to end.
//! - Print a deterministic summary for quick local sanity checks.
//!
//! Usage: `clinicbook_cli [config.json]`

use clinicbook_core::{
    core_version, init_logging_from_config, run_command, CoreConfig, ListCommand, ModelManager,
    Model, RegistryStorage, SqliteRegistryStorage,
};
use std::error::Error;
use std::process::ExitCode;

const DEFAULT_CONFIG_PATH: &str = "clinicbook.json";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("clinicbook error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = CoreConfig::load(&config_path)?;
    init_logging_from_config(&config)?;

    if let Some(parent) = config.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut storage = SqliteRegistryStorage::open(&config.data_path)?;
    let address_book = match storage.read_address_book()? {
        Some(book) => book,
        None => {
            log::info!("event=registry_load module=cli status=empty");
            Default::default()
        }
    };

    let mut model = ModelManager::new(address_book);
    let output = run_command(&ListCommand, &mut model)?;
    storage.save_address_book(model.address_book())?;

    println!("clinicbook_core version={}", core_version());
    println!(
        "persons={} appointments={}",
        model.filtered_person_list().len(),
        model.filtered_appointment_list().len()
    );
    println!("{}", output.message);
    Ok(())
}
