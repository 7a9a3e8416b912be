//! Application startup
//!
//! Two-stage startup: parse arguments and initialise logging first, then
//! merge the configuration file, reconfigure the level from the merged
//! values, and hand over to the event driver.

use crate::app::cli::args::Args;
use crate::app::driver;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::{init_logging, reconfigure_log_level, verbosity_to_level};
use clap::Parser;
use std::io::IsTerminal;

/// Initialise the application and run the capture driver
///
/// Returns the process exit code.
pub fn startup() -> i32 {
    let mut args = Args::parse();

    let use_color = resolve_color(args.color, args.no_color);
    colored::control::set_override(use_color);

    // Stage 1: logging from the command line alone, so config problems are
    // reported through the configured sink
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file.as_deref().and_then(|p| p.to_str()),
        use_color,
    ) {
        eprintln!("Error initialising logging: {e}");
        return 1;
    }

    log::info!("scanlog {} starting", crate::core::version::crate_version());

    // Stage 2: merge the configuration file, then settle level and color
    if let Err(message) = args.apply_config_file() {
        log::error!("FATAL: {}", message);
        return 1;
    }

    let use_color = resolve_color(args.color, args.no_color);
    colored::control::set_override(use_color);

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| verbosity_to_level(args.verbosity()).to_string());
    if let Err(e) = reconfigure_log_level(&level) {
        log::warn!("Could not reconfigure log level: {}", e);
    }

    let context = match args.experiment_context() {
        Ok(context) => context,
        Err(e) => {
            log_error_with_context(&e, "Experiment configuration");
            return 1;
        }
    };
    log::debug!(
        "Capturing scans for experiment '{}' run '{}' into {}",
        context.experiment_id(),
        context.run_id(),
        context.scan_log_path().display()
    );

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error creating async runtime: {e}");
            return 1;
        }
    };

    match runtime.block_on(driver::run(context)) {
        Ok(()) => 0,
        Err(e) => {
            log_error_with_context(&e, "Build scan capture");
            1
        }
    }
}

fn resolve_color(color: bool, no_color: bool) -> bool {
    let no_color_env = std::env::var_os("NO_COLOR").is_some();
    (color || std::io::stdout().is_terminal()) && !no_color && !(no_color_env && !color)
}
