use rand::rngs::mock::StepRng;
use support3::models::{CurveDescriptor, Direction, LetterUnit, Rect, TiltOffset};
use support3::motion::{path_field, tilt, title, TiltTransform};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn field(count: usize, direction: Direction) -> Vec<CurveDescriptor> {
    path_field::generate(count, direction, &mut path_field::field_rng(direction))
}

/// Everything but the animation cycle length
fn geometry(curves: &[CurveDescriptor]) -> Vec<(usize, String, String, String)> {
    curves
        .iter()
        .map(|c| (c.id, c.path.clone(), c.stroke.to_string(), c.width.to_string()))
        .collect()
}

mod path_field_generation {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn yields_count_curves_with_sequential_ids() {
        for direction in [Direction::Forward, Direction::Backward] {
            for count in [0, 1, 7, path_field::CURVES_PER_FIELD] {
                let curves = field(count, direction);
                assert_eq!(curves.len(), count);
                let ids: Vec<usize> = curves.iter().map(|c| c.id).collect();
                assert_eq!(ids, (0..count).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn later_curves_are_thicker_and_more_opaque() {
        let curves = field(path_field::CURVES_PER_FIELD, Direction::Forward);
        for (i, curve) in curves.iter().enumerate() {
            assert!(close(curve.width, 0.5 + 0.03 * i as f64));
            assert!(close(curve.stroke.a, 0.1 + 0.03 * i as f64));
            assert_eq!((curve.stroke.r, curve.stroke.g, curve.stroke.b), (15, 23, 42));
        }
        for pair in curves.windows(2) {
            assert!(pair[1].width >= pair[0].width);
            assert!(pair[1].stroke.a >= pair[0].stroke.a);
        }
    }

    #[test]
    fn directions_mirror_only_horizontal_drift() {
        for i in 0..path_field::CURVES_PER_FIELD {
            let forward = path_field::control_points(i, Direction::Forward);
            let backward = path_field::control_points(i, Direction::Backward);
            let reference = path_field::control_points(0, Direction::Forward);
            for ((f, b), base) in forward.iter().zip(&backward).zip(&reference) {
                // x drifts by the same amount in opposite directions
                assert!(close(f.0 - base.0, -(b.0 - base.0)), "curve {i}");
                assert!(close(f.1, b.1), "curve {i}");
            }
        }
    }

    #[test]
    fn geometry_is_deterministic() {
        let a = field(12, Direction::Backward);
        let b = path_field::generate(12, Direction::Backward, &mut StepRng::new(0, 1));
        assert_eq!(geometry(&a), geometry(&b));
    }

    #[test]
    fn seeded_durations_are_reproducible() {
        let a = field(12, Direction::Forward);
        let b = field(12, Direction::Forward);
        assert_eq!(a, b);
    }
}

mod pointer_tilt {
    use pretty_assertions::assert_eq;

    use super::*;

    const RECT: Rect = Rect::new(40.0, 120.0, 300.0, 180.0);

    #[test]
    fn corners_and_centre_normalize() {
        let mut card = TiltTransform::new();
        assert_eq!(card.update(40.0, 120.0, &RECT), TiltOffset { x: -0.5, y: -0.5 });
        assert_eq!(card.update(340.0, 300.0, &RECT), TiltOffset { x: 0.5, y: 0.5 });
        assert_eq!(card.update(190.0, 210.0, &RECT), TiltOffset::ZERO);
    }

    #[test]
    fn reset_is_always_neutral() {
        let mut card = TiltTransform::new();
        assert_eq!(card.reset(), TiltOffset::ZERO);
        card.update(300.0, 130.0, &RECT);
        for _ in 0..10 {
            card.step(1.0 / 60.0);
        }
        assert_eq!(card.reset(), TiltOffset::ZERO);
    }

    #[test]
    fn zero_dimension_fails_soft() {
        let mut card = TiltTransform::new();
        let flat = Rect::new(0.0, 0.0, 0.0, 50.0);
        assert_eq!(card.update(10.0, 10.0, &flat), TiltOffset::ZERO);
        let angles = card.step(1.0 / 60.0);
        assert!(angles.rotate_x_deg.is_finite() && angles.rotate_y_deg.is_finite());
    }

    #[test]
    fn springy_hover_stays_within_max_tilt() {
        let mut card = TiltTransform::new();
        let square = Rect::new(0.0, 0.0, 100.0, 100.0);
        card.update(100.0, 100.0, &square);

        let mut peak_x: f64 = 0.0;
        let mut peak_y: f64 = 0.0;
        for _ in 0..600 {
            let angles = card.step(1.0 / 60.0);
            peak_x = peak_x.max(angles.rotate_x_deg.abs());
            peak_y = peak_y.max(angles.rotate_y_deg.abs());
        }
        assert!(peak_x <= tilt::MAX_TILT_DEG, "rotateX peaked at {peak_x}");
        assert!(peak_y <= tilt::MAX_TILT_DEG, "rotateY peaked at {peak_y}");
        assert_eq!(card.angles().rotate_y_deg, tilt::MAX_TILT_DEG);

        // and back again through zero after leaving
        card.reset();
        for _ in 0..600 {
            let angles = card.step(1.0 / 60.0);
            assert!(angles.rotate_x_deg.abs() <= tilt::MAX_TILT_DEG);
            assert!(angles.rotate_y_deg.abs() <= tilt::MAX_TILT_DEG);
        }
    }

    #[test]
    fn cards_do_not_share_state() {
        let mut a = TiltTransform::new();
        let b = TiltTransform::new();
        a.update(340.0, 300.0, &RECT);
        a.step(0.25);
        assert_eq!(b.angles(), tilt::angles(TiltOffset::ZERO));
        assert_ne!(a.angles(), b.angles());
    }
}

mod title_sequence {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hello_world_delays() {
        let units = title::sequence("Hello World");
        assert_eq!(units.len(), 10);

        let w = &units[5];
        assert_eq!((w.glyph, w.word_index, w.letter_index), ('W', 1, 0));
        assert!(close(w.delay_secs, 0.1));

        let second_l = &units[3];
        assert_eq!((second_l.glyph, second_l.word_index, second_l.letter_index), ('l', 0, 3));
        assert!(close(second_l.delay_secs, 0.09));
    }

    #[test]
    fn empty_title_is_empty() {
        assert_eq!(title::sequence(""), Vec::<LetterUnit>::new());
        assert_eq!(title::sequence("   "), Vec::<LetterUnit>::new());
    }
}
