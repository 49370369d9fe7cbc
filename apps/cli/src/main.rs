// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View3D importer - command line front end.
//!
//! Loads a View3D surface file, scales it into the target unit and writes
//! the faces as Wavefront OBJ (or the parsed scene as JSON).
//!
//! Usage:
//!   view3d <FILE> [--scale S] [--units m|cm|ft|in] [--target-units U]
//!                 [--output PATH] [--json] [--summary]
//!
//! Defaults for scale and units come from `VIEW3D_SCALE`, `VIEW3D_UNITS` and
//! `VIEW3D_TARGET_UNITS`; log filtering follows `RUST_LOG`.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use view3d_core::{LengthUnit, Session, UnitTransform};
use view3d_geometry::{import_scene, FaceSet};

mod config;

use config::Config;

/// User-specified command line parameters
#[derive(Parser, Debug)]
#[clap(name = "view3d", version, about)]
struct Args {
    #[clap(help = "View3D surface file to import (.vs3)")]
    file: PathBuf,

    #[clap(long, help = "Scale factor applied to file coordinates [env: VIEW3D_SCALE]")]
    scale: Option<String>,

    #[clap(
        long,
        help = "Units the file is written in: m, cm, ft or in [env: VIEW3D_UNITS]"
    )]
    units: Option<String>,

    #[clap(
        long,
        help = "Units of the written geometry: m, cm, ft or in [env: VIEW3D_TARGET_UNITS]"
    )]
    target_units: Option<String>,

    #[clap(long, short = 'o', help = "Write to this file instead of stdout")]
    output: Option<PathBuf>,

    #[clap(
        long,
        help = "Write the parsed scene as JSON (file coordinates) instead of OBJ"
    )]
    json: bool,

    #[clap(long, help = "Print the session summary to stderr")]
    summary: bool,
}

/// Rendered output plus the text for `--summary`
#[derive(Debug)]
struct Conversion {
    body: String,
    summary: String,
}

fn main() -> ExitCode {
    let config = Config::from_env();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.clone())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &Config) -> anyhow::Result<()> {
    let conversion = convert(args, config)?;

    match &args.output {
        Some(path) => fs::write(path, &conversion.body)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(conversion.body.as_bytes())
            .context("cannot write to stdout")?,
    }

    if args.summary {
        eprint!("{}", conversion.summary);
    }
    Ok(())
}

fn convert(args: &Args, config: &Config) -> anyhow::Result<Conversion> {
    let scale = args.scale.as_deref().unwrap_or(&config.scale);
    let units = args.units.as_deref().unwrap_or(&config.units);
    let target: LengthUnit = args
        .target_units
        .as_deref()
        .unwrap_or(&config.target_units)
        .parse()
        .context("invalid target units")?;

    let mut session = Session::new();
    session.set_transform(UnitTransform::default().with_target(target));
    session
        .set_units_from_input(scale, units)
        .context("invalid scale or units")?;
    let transform = *session.transform();

    let scene = session
        .load(&args.file)
        .with_context(|| format!("cannot import {}", args.file.display()))?;

    let (body, details) = if args.json {
        let body = serde_json::to_string_pretty(scene).context("cannot serialize scene")?;
        let details = format!(
            "Vertices: {}\nSurfaces: {}\n",
            scene.vertex_count(),
            scene.surface_count()
        );
        (body, details)
    } else {
        let mut faces = FaceSet::new();
        let report = import_scene(scene, &transform, &mut faces)?;
        let details = format!(
            "Faces: {}\nReversed: {}\nTarget units: {}\n",
            report.faces, report.reversed, transform.target
        );
        (faces.to_obj(), details)
    };

    Ok(Conversion {
        body,
        summary: format!("{}{}", session.summary(), details),
    })
}
