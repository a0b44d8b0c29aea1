use crate::models::{Rect, TiltAngles, TiltOffset};

use super::spring::Spring;

/// Rotation at the edge of a card, in degrees
pub const MAX_TILT_DEG: f64 = 17.5;

/// Pointer position relative to the centre of `rect`, each axis in [-0.5, 0.5].
///
/// A rect that cannot be measured yields `TiltOffset::ZERO` instead of a
/// non-finite value.
pub fn normalize(pointer_x: f64, pointer_y: f64, rect: &Rect) -> TiltOffset {
    if !rect.is_measurable() || !pointer_x.is_finite() || !pointer_y.is_finite() {
        tracing::trace!(?rect, pointer_x, pointer_y, "unmeasurable tilt input");
        return TiltOffset::ZERO;
    }

    let x = (pointer_x - rect.left) / rect.width - 0.5;
    let y = (pointer_y - rect.top) / rect.height - 0.5;
    TiltOffset {
        x: x.clamp(-0.5, 0.5),
        y: y.clamp(-0.5, 0.5),
    }
}

/// Pointer below centre tips the top edge away; pointer right of centre turns
/// the card right. Offsets beyond [-0.5, 0.5], such as spring overshoot, are
/// held at the edge so the angles never exceed `MAX_TILT_DEG`.
pub fn angles(offset: TiltOffset) -> TiltAngles {
    let span = MAX_TILT_DEG * 2.0;
    TiltAngles {
        rotate_x_deg: -offset.y.clamp(-0.5, 0.5) * span,
        rotate_y_deg: offset.x.clamp(-0.5, 0.5) * span,
    }
}

/// Smoothed hover tilt for a single card.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiltTransform {
    target: TiltOffset,
    x: Spring,
    y: Spring,
}

impl TiltTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_springs(x: Spring, y: Spring) -> Self {
        Self {
            target: TiltOffset::ZERO,
            x,
            y,
        }
    }

    pub fn target(&self) -> TiltOffset {
        self.target
    }

    /// Record a pointer move and return the raw (unsmoothed) offset.
    pub fn update(&mut self, pointer_x: f64, pointer_y: f64, rect: &Rect) -> TiltOffset {
        self.target = normalize(pointer_x, pointer_y, rect);
        self.target
    }

    /// Pointer left the card; the springs ease back to flat.
    pub fn reset(&mut self) -> TiltOffset {
        self.target = TiltOffset::ZERO;
        self.target
    }

    /// Advance the smoothing by one frame.
    pub fn step(&mut self, dt: f64) -> TiltAngles {
        let smoothed = TiltOffset {
            x: self.x.step(dt, self.target.x),
            y: self.y.step(dt, self.target.y),
        };
        angles(smoothed)
    }

    /// Current angles without advancing time.
    pub fn angles(&self) -> TiltAngles {
        angles(TiltOffset {
            x: self.x.position(),
            y: self.y.position(),
        })
    }

    pub fn is_animating(&self) -> bool {
        !(self.x.settled(self.target.x) && self.y.settled(self.target.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect::new(100.0, 50.0, 400.0, 200.0);

    #[test]
    fn corners_and_centre() {
        assert_eq!(normalize(100.0, 50.0, &CARD), TiltOffset { x: -0.5, y: -0.5 });
        assert_eq!(normalize(500.0, 250.0, &CARD), TiltOffset { x: 0.5, y: 0.5 });
        assert_eq!(normalize(300.0, 150.0, &CARD), TiltOffset::ZERO);
    }

    #[test]
    fn zero_sized_rect_is_neutral() {
        let flat = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(normalize(10.0, 10.0, &flat), TiltOffset::ZERO);
    }

    #[test]
    fn pointer_outside_rect_is_clamped() {
        assert_eq!(normalize(-1000.0, 9000.0, &CARD), TiltOffset { x: -0.5, y: 0.5 });
    }

    #[test]
    fn angle_mapping_hits_extremes() {
        let top_left = angles(TiltOffset { x: -0.5, y: -0.5 });
        assert_eq!(top_left.rotate_x_deg, 17.5);
        assert_eq!(top_left.rotate_y_deg, -17.5);
        let bottom_right = angles(TiltOffset { x: 0.5, y: 0.5 });
        assert_eq!(bottom_right.rotate_x_deg, -17.5);
        assert_eq!(bottom_right.rotate_y_deg, 17.5);
    }

    #[test]
    fn overshooting_offset_is_held_at_the_edge() {
        let a = angles(TiltOffset { x: 0.58, y: -0.7 });
        assert_eq!(a.rotate_x_deg, MAX_TILT_DEG);
        assert_eq!(a.rotate_y_deg, MAX_TILT_DEG);
    }

    #[test]
    fn smoothing_lags_behind_pointer() {
        let mut tilt = TiltTransform::new();
        tilt.update(500.0, 250.0, &CARD);
        let first = tilt.step(1.0 / 60.0);
        assert!(first.rotate_y_deg > 0.0 && first.rotate_y_deg < MAX_TILT_DEG);
        assert!(tilt.is_animating());

        for _ in 0..900 {
            tilt.step(1.0 / 60.0);
        }
        assert_eq!(tilt.angles().rotate_y_deg, MAX_TILT_DEG);
        assert!(!tilt.is_animating());
    }

    #[test]
    fn reset_always_returns_zero() {
        let mut tilt = TiltTransform::new();
        assert_eq!(tilt.reset(), TiltOffset::ZERO);
        tilt.update(120.0, 60.0, &CARD);
        tilt.step(0.1);
        assert_eq!(tilt.reset(), TiltOffset::ZERO);
        assert_eq!(tilt.target(), TiltOffset::ZERO);
        assert!(tilt.is_animating());
    }
}
