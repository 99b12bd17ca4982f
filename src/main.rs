//! Launches a projectile and plots its trajectory.
//!
//! Usage: `projectile [--console] [OUTPUT]`
//!
//! By default, the trajectory is written to `projectile.ppm`. With `--console`, every position is
//! printed instead.

use std::{env, path::PathBuf, process};

use raytracer::projectile::{ConsoleObserver, LaunchOptions};

const DEFAULT_OUTPUT: &str = "projectile.ppm";

fn usage() -> ! {
    eprintln!("usage: projectile [--console] [OUTPUT]");
    process::exit(1);
}

fn main() -> anyhow::Result<()> {
    raytracer::init_logger!();

    let mut console = false;
    let mut output = None;
    for arg in env::args_os().skip(1) {
        if arg == "--console" {
            console = true;
        } else if arg == "-h" || arg == "--help" || output.is_some() {
            usage();
        } else {
            output = Some(PathBuf::from(arg));
        }
    }

    let options = LaunchOptions::from_env()?;
    let projectile = options.projectile();

    let ticks = if console {
        options
            .launcher(ConsoleObserver::stdout())
            .launch(projectile)?
    } else {
        let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        options
            .launcher(options.image_observer(output))
            .launch(projectile)?
    };

    log::info!("projectile landed after {} ticks", ticks);
    Ok(())
}
