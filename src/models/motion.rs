use std::fmt;

use serde::{Deserialize, Serialize};

/// Which way a path field drifts horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = MotionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Backward),
            other => Err(MotionError::InvalidDirection(other)),
        }
    }
}

/// An sRGB colour with a fractional alpha channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            round_to(self.a, 4)
        )
    }
}

/// One decorative curve of a path field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveDescriptor {
    pub id: usize,
    /// SVG path data: a move followed by cubic segments
    pub path: String,
    pub stroke: Rgba,
    pub width: f64,
    /// Length of one animation cycle. Not part of the deterministic geometry.
    pub duration_secs: f64,
}

/// Axis-aligned bounding box in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Both dimensions are finite and strictly positive.
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Pointer position relative to a card, each axis in [-0.5, 0.5]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TiltOffset {
    pub x: f64,
    pub y: f64,
}

impl TiltOffset {
    pub const ZERO: TiltOffset = TiltOffset { x: 0.0, y: 0.0 };
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TiltAngles {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl TiltAngles {
    pub fn to_css(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg)",
            round_to(self.rotate_x_deg, 3),
            round_to(self.rotate_y_deg, 3)
        )
    }
}

/// A single glyph of an animated title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterUnit {
    pub word_index: usize,
    pub letter_index: usize,
    pub glyph: char,
    pub delay_secs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseOut,
    Spring { stiffness: f64, damping: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repeat {
    Once,
    Infinite,
}

/// A CSS keyframe animation described as data. The browser does the scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub delay_secs: f64,
    pub duration_secs: f64,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Transition {
    pub fn linear_loop(duration_secs: f64) -> Self {
        Self {
            delay_secs: 0.0,
            duration_secs,
            easing: Easing::Linear,
            repeat: Repeat::Infinite,
        }
    }

    pub fn fade_in(delay_secs: f64, duration_secs: f64) -> Self {
        Self {
            delay_secs,
            duration_secs,
            easing: Easing::EaseOut,
            repeat: Repeat::Once,
        }
    }

    pub fn spring(delay_secs: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            delay_secs,
            duration_secs: 0.0,
            easing: Easing::Spring { stiffness, damping },
            repeat: Repeat::Once,
        }
    }
}

/// Errors raised when building motion primitives from untrusted parameters
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MotionError {
    #[error("Direction must be 1 or -1, got {0}")]
    InvalidDirection(i32),
    #[error("Spring parameters must be positive and finite (stiffness {stiffness}, damping {damping})")]
    InvalidSpring { stiffness: f64, damping: f64 },
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let rounded = (value * scale).round() / scale;
    // avoid rendering "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
