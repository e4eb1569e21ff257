//! CLI smoke entry point.
//!
//! # Responsibility
//! - Build a directory from `STAFFDIR_*` settings and print a short summary.
//! - Keep output deterministic for quick local sanity checks.

use staffdir_core::{init_logging, CoreConfig, Criteria, StaffDirectory};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("staffdir_core ping={}", staffdir_core::ping());
    println!("staffdir_core version={}", staffdir_core::core_version());

    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let directory = match StaffDirectory::from_config(&config) {
        Ok(directory) => directory,
        Err(err) => {
            eprintln!("startup error: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("event=cli_start module=cli status=ok");

    println!("employees={}", directory.store().len());
    match directory.reader().find_surnames_by_prefix("") {
        Ok(surnames) => println!("surnames={}", surnames.join(",")),
        Err(_) => println!("surnames="),
    }
    let everyone = directory
        .reader()
        .find(&Criteria::new())
        .map(|employees| employees.len())
        .unwrap_or(0);
    println!("listed={everyone}");
    ExitCode::SUCCESS
}
