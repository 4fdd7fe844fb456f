//! Append-only buffer of captured fluid snapshots
//!
//! The integrator appends a copy of density, velocity and pressure every
//! `sample_stride` steps. Once the run finishes the buffer is handed off
//! read-only, together with the shared grid, to whatever plays it back.

use super::states::{Field, FluidState};
use crate::error::{SimError, SimResult};

/// One captured snapshot, owning independent copies of the three fields
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub step: usize, // step index at capture (0-based)
    pub t: f64,      // simulated time at capture
    pub density: Field,
    pub velocity: Field,
    pub pressure: Field,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameBuffer {
    frames: Vec<Frame>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
        }
    }

    /// Store copies of the three fields as the next frame
    pub fn append(&mut self, step: usize, t: f64, density: &Field, velocity: &Field, pressure: &Field) {
        self.frames.push(Frame {
            step,
            t,
            density: density.clone(),
            velocity: velocity.clone(),
            pressure: pressure.clone(),
        });
    }

    /// Snapshot the whole state; `step` is the index of the step just taken
    pub fn capture(&mut self, step: usize, state: &FluidState) {
        self.append(step, state.t, &state.density, &state.velocity, &state.pressure);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at insertion position `index`
    pub fn at(&self, index: usize) -> SimResult<&Frame> {
        self.frames.get(index).ok_or(SimError::FrameOutOfRange {
            index,
            len: self.frames.len(),
        })
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl<'a> IntoIterator for &'a FrameBuffer {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
