//! Write a finished run to disk for external playback or plotting
//!
//! Two formats, picked by file extension:
//! - `.csv`: long format, one row per (frame, node):
//!   `frame,step,t,x,density,velocity,pressure`
//! - anything else: YAML document with the grid and every frame

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::simulation::frames::Frame;
use crate::simulation::integrator::Run;

/// Serializable view of one frame
#[derive(Serialize, Debug)]
pub struct FrameRecord {
    pub step: usize,
    pub t: f64,
    pub density: Vec<f64>,
    pub velocity: Vec<f64>,
    pub pressure: Vec<f64>,
}

impl From<&Frame> for FrameRecord {
    fn from(f: &Frame) -> Self {
        Self {
            step: f.step,
            t: f.t,
            density: f.density.iter().copied().collect(),
            velocity: f.velocity.iter().copied().collect(),
            pressure: f.pressure.iter().copied().collect(),
        }
    }
}

/// Serializable view of a whole run: the shared grid plus all frames
#[derive(Serialize, Debug)]
pub struct RunRecord {
    pub x: Vec<f64>,
    pub dx: f64,
    pub frames: Vec<FrameRecord>,
}

impl From<&Run> for RunRecord {
    fn from(run: &Run) -> Self {
        Self {
            x: run.grid.x().iter().copied().collect(),
            dx: run.grid.dx(),
            frames: run.frames.iter().map(FrameRecord::from).collect(),
        }
    }
}

/// Write the run as YAML
pub fn write_yaml<W: Write>(run: &Run, writer: W) -> Result<()> {
    serde_yaml::to_writer(writer, &RunRecord::from(run)).context("failed to serialize frames as YAML")
}

/// Write the run as long-format CSV
pub fn write_csv<W: Write>(run: &Run, mut writer: W) -> Result<()> {
    writeln!(writer, "frame,step,t,x,density,velocity,pressure")?;
    for (k, frame) in run.frames.iter().enumerate() {
        for (i, x) in run.grid.x().iter().enumerate() {
            writeln!(
                writer,
                "{},{},{},{},{},{},{}",
                k, frame.step, frame.t, x, frame.density[i], frame.velocity[i], frame.pressure[i]
            )?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Export to `path`, choosing the format from its extension
pub fn export_run(run: &Run, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);

    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        write_csv(run, writer)?;
    } else {
        write_yaml(run, writer)?;
    }

    info!("wrote {} frames to {}", run.frames.len(), path.display());
    Ok(())
}
