//! Forward kinematics and Jacobian columns for a leg described in JSON.
//!
//! Without `--config` the built-in three-joint hexapod leg is used.

use std::{error::Error, io::Write, path::PathBuf};

use clap::Parser;
use ga_kinematics::{LegConfig, Rounded};
use tabwriter::TabWriter;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hexapod_leg", about = "Evaluate a leg chain with dual-quaternion motors")]
struct Args {
    /// Leg description (JSON). Defaults to the built-in hexapod leg.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Joint values overriding the config, comma separated
    /// (degrees for revolute joints).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    angles: Option<Vec<f64>>,

    /// Digits printed after the decimal point.
    #[arg(long, default_value_t = 5)]
    decimals: usize,

    /// Take Jacobian columns about the joints' current axes instead of
    /// their home axes.
    #[arg(long)]
    current_frames: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => LegConfig::from_path(path)?,
        None => LegConfig::hexapod_example(),
    };
    if let Some(angles) = args.angles {
        config.angles_deg = angles;
    }

    let chain = config.chain()?;
    let q = config.joint_values()?;
    info!(dof = chain.dof(), current_frames = args.current_frames, "evaluating leg");

    let toe = chain.end_effector(&q)?;
    let columns = if args.current_frames {
        chain.jacobian(&q)?
    } else {
        chain.jacobian_home_frames(&q)?
    };

    let dec = args.decimals;
    let mut tw = TabWriter::new(std::io::stdout()).padding(2).minwidth(10);

    writeln!(tw, "Toe\t{}", Rounded::new(&toe, dec))?;
    writeln!(tw)?;
    writeln!(tw, "Joint\tKind\tValue\tColumn (linear)")?;
    for (i, ((joint, value), col)) in chain.joints().iter().zip(&q).zip(&columns).enumerate() {
        writeln!(
            tw,
            "J{} {}\t{:?}\t{:+.dec$}\t{}",
            i + 1,
            joint.name,
            joint.kind,
            value,
            Rounded::new(col, dec),
            dec = dec
        )?;
    }
    tw.flush()?;
    Ok(())
}
