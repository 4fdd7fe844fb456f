//! Discrete first derivative on the uniform grid
//!
//! Second-order centered differences in the interior, first-order one-sided
//! differences at the two boundary nodes:
//!
//! ```text
//! df[0]   = (f[1]   - f[0])   / dx
//! df[i]   = (f[i+1] - f[i-1]) / (2 dx)     1 <= i <= N-2
//! df[N-1] = (f[N-1] - f[N-2]) / dx
//! ```

use super::states::Field;

/// Return df/dx for `f` sampled with spacing `dx`
pub fn first_derivative(f: &Field, dx: f64) -> Field {
    let mut out = Field::zeros(f.len());
    first_derivative_into(f, dx, &mut out);
    out
}

/// Write df/dx for `f` into `out`, which must have the same length
pub fn first_derivative_into(f: &Field, dx: f64, out: &mut Field) {
    let n = f.len();
    debug_assert!(n >= 3, "stencil needs at least 3 nodes, got {n}");
    debug_assert_eq!(out.len(), n);

    let two_dx = 2.0 * dx;

    // forward difference, no node to the left
    out[0] = (f[1] - f[0]) / dx;

    for i in 1..n - 1 {
        out[i] = (f[i + 1] - f[i - 1]) / two_dx;
    }

    // backward difference, no node to the right
    out[n - 1] = (f[n - 1] - f[n - 2]) / dx;
}
