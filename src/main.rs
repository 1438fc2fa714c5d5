use std::path::Path;
use std::process::exit;

use expoweight::configuration::Configuration;
use expoweight::exposureweight::diagnostics::{
    check_weight_function,
    dump_weight_function,
    sample_grid_contains
};
use expoweight::tracingsetup::init_tracing;

fn fatal(command: &str, message: &str) -> ! {
    for line in message.lines() {
        eprintln!("{}: {}", command, line);
    }
    exit(1);
}

fn main() {
    let mut args = std::env::args();
    let command = args
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "expoweight".to_owned());
    let config_path = match args.next() {
        Some(path) => path,
        None => fatal(&command, "usage: expoweight CONFIGURATION.json")
    };

    init_tracing();

    let mut config = Configuration::new();
    if let Err(error) = config.from_reader(&config_path) {
        fatal(&command, &error.to_string());
    }
    let Some(weight_function) = config.exposure_weight() else {
        fatal(&command, "no exposure weight function configured");
    };

    if let Some(n) = config.check_samples() {
        if !check_weight_function(weight_function, n) {
            let name = config.settings().map(|settings| settings.name().as_str()).unwrap_or("?");
            let mut message = format!("exposure weight function \"{}\" yields values outside of [0, 1)", name);
            if sample_grid_contains(weight_function.y_optimum(), n) {
                message.push_str(&format!(
                    "\nnote: y_optimum {} falls on the {}-sample grid, where the weight is 1",
                    weight_function.y_optimum(),
                    n));
            }
            fatal(&command, &message);
        }
    }
    if let Some(n) = config.dump_samples() {
        if let Err(error) = dump_weight_function(weight_function, n) {
            fatal(&command, &error.to_string());
        }
    }
}
