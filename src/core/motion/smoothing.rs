use crate::domain::models::{Point, SmootherParams};

/// Advance one axis toward its target by a proportional step with a floor and
/// a ceiling. Returns the new value and the step that was applied so the
/// caller can normalize the combined two-axis velocity.
///
/// The proportional law `(target - current) * factor` gives an
/// exponential-decay approach; the floor keeps motion perceptible far from
/// convergence, the ceiling bounds velocity on large jumps, and a step that
/// would overshoot snaps straight to the target so convergence is exact.
pub fn smooth_axis(current: f64, target: f64, params: &SmootherParams) -> (f64, f64) {
    let delta = target - current;
    if delta == 0.0 {
        return (current, 0.0);
    }

    let mut step = delta * params.factor;
    let magnitude = step.abs();
    if magnitude < params.min_step {
        step = params.min_step.copysign(delta);
    } else if magnitude > params.max_step {
        step = params.max_step.copysign(delta);
    }

    if delta.abs() < step.abs() {
        return (target, delta);
    }

    (current + step, step)
}

/// Per-axis smoothing with joint normalization: if the Euclidean magnitude of
/// the combined (x, y) step exceeds `max_step`, both components are scaled
/// down uniformly so diagonal motion is no faster than axis-aligned motion.
pub fn smooth_motion(current: Point, target: Point, params: &SmootherParams) -> Point {
    let (new_x, step_x) = smooth_axis(current.x, target.x, params);
    let (new_y, step_y) = smooth_axis(current.y, target.y, params);

    let combined = step_x.hypot(step_y);
    if combined > params.max_step {
        let scale = params.max_step / combined;
        return Point {
            x: current.x + step_x * scale,
            y: current.y + step_y * scale,
        };
    }

    Point { x: new_x, y: new_y }
}
