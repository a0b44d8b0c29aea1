//! Procedural background curves.
//!
//! Every curve is an affine function of its index: x coordinates drift by
//! `5 * i` in the field's direction, y coordinates by `6 * i`. Later curves are
//! more opaque and thicker.

use std::fmt::Write as _;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{CurveDescriptor, Direction, Rgba};

pub const CURVES_PER_FIELD: usize = 36;
pub const FIELD_VIEW_BOX: &str = "0 0 696 316";

/// Compiled in so that server-rendered markup and the hydrated page agree.
pub const PATH_SEED: u64 = 0x5EED_0003;

pub const MIN_CYCLE_SECS: f64 = 20.0;
pub const MAX_CYCLE_SECS: f64 = 30.0;

const X_STEP: f64 = 5.0;
const Y_STEP: f64 = 6.0;

/// Keyframe values for the stroke gradient's endpoints. The two ends swap
/// places and return over one cycle.
pub const GRADIENT_SWEEP: [(&str, &str); 2] = [("x1", "0%;100%;0%"), ("x2", "100%;0%;100%")];
pub const GRADIENT_SWEEP_SECS: u32 = 20;

/// Slate-900, the base stroke colour
const STROKE_RGB: (u8, u8, u8) = (15, 23, 42);

pub fn stroke_alpha(index: usize) -> f64 {
    0.1 + 0.03 * index as f64
}

pub fn stroke_width(index: usize) -> f64 {
    0.5 + 0.03 * index as f64
}

/// The seven points of curve `index`: a start point, then two cubic segments of
/// (control, control, end).
pub fn control_points(index: usize, direction: Direction) -> [(f64, f64); 7] {
    let i = index as f64;
    let dx = |base: f64| base - i * X_STEP * direction.sign();
    let down = |base: f64| base + i * Y_STEP;
    let up = |base: f64| base - i * Y_STEP;

    let start = (-dx(380.0), -down(189.0));
    let end = (dx(684.0), up(875.0));
    [
        start,
        start,
        (-dx(312.0), up(216.0)),
        (dx(152.0), up(343.0)),
        (dx(616.0), up(470.0)),
        end,
        end,
    ]
}

pub fn path_data(points: &[(f64, f64); 7]) -> String {
    let mut d = String::with_capacity(96);
    for (n, (x, y)) in points.iter().enumerate() {
        match n {
            0 => d.push('M'),
            1 | 4 => d.push('C'),
            _ => d.push(' '),
        }
        let _ = write!(d, "{x} {y}");
    }
    d
}

/// Per-field generator for animation cycle lengths.
pub fn field_rng(direction: Direction) -> StdRng {
    let salt = match direction {
        Direction::Forward => 0x9E37_79B9_7F4A_7C15,
        Direction::Backward => 0xBF58_476D_1CE4_E5B9,
    };
    StdRng::seed_from_u64(PATH_SEED ^ salt)
}

/// Build `count` curves for one field. `rng` only feeds `duration_secs`; the
/// geometry, colour and width are fully determined by `count` and `direction`.
#[tracing::instrument(level = "debug", skip(rng))]
pub fn generate<R: Rng>(
    count: usize,
    direction: Direction,
    rng: &mut R,
) -> Vec<CurveDescriptor> {
    let (r, g, b) = STROKE_RGB;
    (0..count)
        .map(|id| CurveDescriptor {
            id,
            path: path_data(&control_points(id, direction)),
            stroke: Rgba::new(r, g, b, stroke_alpha(id)),
            width: stroke_width(id),
            duration_secs: rng.gen_range(MIN_CYCLE_SECS..MAX_CYCLE_SECS),
        })
        .collect()
}
