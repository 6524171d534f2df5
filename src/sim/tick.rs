//! Fixed-step simulation
//!
//! A frame's elapsed time is consumed in sub-steps no longer than the
//! precision, so a slow frame never moves anything further per step.

use super::state::DemoState;

/// Leftover time below this is rounding noise, not a step
const MIN_STEP: f32 = 1e-6;

/// Advance the state by one sub-step
pub fn tick(state: &mut DemoState, dt: f32) {
    state.text_box.step(dt, &state.walls);
    state.stars.update(dt);
    state.elapsed += dt as f64;
    state.steps += 1;
}

/// Consume `elapsed` seconds in sub-steps of at most `precision`.
/// Returns the number of sub-steps taken.
pub fn advance(state: &mut DemoState, elapsed: f32, precision: f32) -> u32 {
    if !elapsed.is_finite() || elapsed <= 0.0 {
        return 0;
    }
    if !(precision > 0.0) {
        tick(state, elapsed);
        return 1;
    }

    let mut remaining = elapsed;
    let mut steps = 0;
    while remaining > MIN_STEP {
        let dt = precision.min(remaining);
        tick(state, dt);
        remaining -= dt;
        steps += 1;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PRECISION;
    use crate::sim::field::StarField;
    use crate::sim::rect::Rect;
    use crate::sim::star::Star;
    use crate::color::palette;
    use glam::Vec2;
    use proptest::prelude::*;

    fn test_state() -> DemoState {
        let star = Star {
            pos: Vec2::new(0.0, 0.0),
            radius: 100.0,
            inner_ratio: 0.4,
            flares: 6,
            base_color: palette::BLUE,
            color_freq: 1.6,
            color_phase: 0.3,
            radius_amplitude: 0.5,
            radius_freq: 1.8,
            radius_phase: 1.2,
            time: 0.0,
        };
        DemoState::with_stars(
            StarField::from_stars(vec![star]),
            Rect::new(0.0, 800.0, 0.0, 600.0),
            Vec2::new(160.0, 84.0),
            200.0,
        )
    }

    #[test]
    fn test_advance_splits_into_substeps() {
        let mut state = test_state();
        let steps = advance(&mut state, 0.01, 0.0025);
        assert_eq!(steps, 4);
        assert_eq!(state.steps, 4);
        assert!((state.stars.stars()[0].time - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_advance_partial_last_step() {
        let mut state = test_state();
        let steps = advance(&mut state, 0.006, 0.0025);
        assert_eq!(steps, 3);
        assert!((state.elapsed - 0.006).abs() < 1e-6);
    }

    #[test]
    fn test_advance_ignores_non_positive_time() {
        let mut state = test_state();
        assert_eq!(advance(&mut state, 0.0, PRECISION), 0);
        assert_eq!(advance(&mut state, -1.0, PRECISION), 0);
        assert_eq!(advance(&mut state, f32::NAN, PRECISION), 0);
        assert_eq!(state.steps, 0);
    }

    #[test]
    fn test_frame_spike_keeps_box_inside() {
        let mut state = test_state();
        advance(&mut state, 30.0, PRECISION);
        assert!(state.walls.contains_rect(&state.text_box.rect()));
    }

    #[test]
    fn test_box_moves_from_center() {
        let mut state = test_state();
        let start = state.text_box.pos;
        assert_eq!(start, Vec2::new(400.0, 300.0));
        advance(&mut state, 0.1, PRECISION);
        let moved = state.text_box.pos - start;
        assert!((moved.x - 20.0).abs() < 1e-3);
        assert!((moved.y - 20.0).abs() < 1e-3);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_chunking_does_not_change_result(
            total in 0.15f32..0.5,
            chunks in 1usize..20,
            x in 620.0f32..640.0,
            y in 496.0f32..516.0,
        ) {
            let near_corner = || {
                let mut state = test_state();
                state.text_box.pos = Vec2::new(x, y);
                state
            };
            let mut whole = near_corner();
            advance(&mut whole, total, PRECISION);
            prop_assert_eq!(whole.text_box.dir, Vec2::new(-1.0, -1.0));

            let mut split = near_corner();
            let chunk = total / chunks as f32;
            for _ in 0..chunks {
                advance(&mut split, chunk, PRECISION);
            }

            prop_assert!((whole.text_box.pos - split.text_box.pos).length() < 1e-2);
            prop_assert_eq!(whole.text_box.dir, split.text_box.dir);
            let (a, b) = (&whole.stars.stars()[0], &split.stars.stars()[0]);
            prop_assert!((a.time - b.time).abs() < 1e-4);
            prop_assert!((a.scale() - b.scale()).abs() < 1e-3);
        }
    }
}
