//! Fixed, uniformly spaced 1-D grid over [-L, L]

use super::states::Field;
use crate::error::{invalid_config, SimResult};

/// Smallest node count that leaves one interior point between the two
/// one-sided boundary stencils
pub const MIN_NODES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x: Field,        // node coordinates, x[0] = -L, x[N-1] = L
    dx: f64,         // node spacing
    half_width: f64, // L
}

impl Grid {
    /// Build `nodes` evenly spaced coordinates spanning [-half_width, half_width]
    pub fn new(half_width: f64, nodes: usize) -> SimResult<Self> {
        if nodes < MIN_NODES {
            return Err(invalid_config(
                "grid.nodes",
                format!("must be at least {MIN_NODES}, got {nodes}"),
            ));
        }
        if !half_width.is_finite() || half_width <= 0.0 {
            return Err(invalid_config(
                "grid.half_width",
                format!("must be finite and positive, got {half_width}"),
            ));
        }

        let dx = 2.0 * half_width / (nodes - 1) as f64;
        let last = nodes - 1;
        // endpoints pinned so the domain is exactly [-L, L]
        let x = Field::from_fn(nodes, |i, _| {
            if i == last {
                half_width
            } else {
                -half_width + i as f64 * dx
            }
        });

        Ok(Self { x, dx, half_width })
    }

    pub fn x(&self) -> &Field {
        &self.x
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Number of nodes N
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
