//! Application startup: arguments, logging, manifest, plugin activation

use super::cli::args::Args;
use super::cli::display::render_resolved;
use crate::config::manifest::Manifest;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::styles::palette_to_clap;
use crate::plugin::api::{ConsoleIo, PackageModel, Plugin, VersionPlugin};
use std::io::IsTerminal;
use std::process::ExitCode;

/// Version resolved, or plugin not configured
pub const EXIT_OK: u8 = 0;
/// The configured strategy failed
pub const EXIT_RESOLUTION_FAILED: u8 = 1;
/// Bad arguments, logging setup or manifest
pub const EXIT_USAGE: u8 = 2;

/// Parse arguments, initialise logging and run the plugin
pub fn startup() -> ExitCode {
    let args = parse_args();
    let use_color = args.use_color(std::io::stderr().is_terminal());

    if let Err(e) = init_logging(args.log_level.as_deref(), args.log_format(), use_color) {
        eprintln!("Error initializing logging: {}", e);
        return ExitCode::from(EXIT_USAGE);
    }

    ExitCode::from(run(&args, use_color))
}

fn parse_args() -> Args {
    use clap::{CommandFactory, FromArgMatches};

    let styled = std::io::stdout().is_terminal();
    let matches = Args::command()
        .styles(palette_to_clap(styled))
        .get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// Run one activation against the manifest named in `args`; returns the exit code
pub fn run(args: &Args, use_color: bool) -> u8 {
    let manifest = match Manifest::load(&args.manifest) {
        Ok(manifest) => manifest,
        Err(e) => {
            log_error_with_context(&e, "Loading project manifest");
            return EXIT_USAGE;
        }
    };

    let plugin: Box<dyn Plugin> = Box::new(VersionPlugin::new());
    let info = plugin.plugin_info();
    log::info!(
        "{} {} (plugin api {}): {}",
        info.name,
        info.version,
        info.api_version,
        info.description
    );
    log::debug!(
        "Reading [{}] from {}",
        info.config_section,
        manifest.path().display()
    );

    let package_name = manifest.package_facts().ok().and_then(|facts| facts.name);
    let mut host = PackageModel::new(package_name);
    let mut io = ConsoleIo::new(use_color).quiet(args.quiet);

    match plugin.activate(&manifest, &mut host, &mut io) {
        Ok(Some(resolved)) => match render_resolved(&resolved, host.name.as_deref(), args.json) {
            Ok(rendered) => {
                println!("{}", rendered);
                EXIT_OK
            }
            Err(e) => {
                log::error!("Failed to render result: {}", e);
                EXIT_RESOLUTION_FAILED
            }
        },
        Ok(None) => {
            log::info!("Plugin not configured for {}", manifest.path().display());
            EXIT_OK
        }
        Err(e) => {
            // the plugin already reported the failure on its output channel
            log::debug!("Activation failed: {:?}", e);
            EXIT_RESOLUTION_FAILED
        }
    }
}
