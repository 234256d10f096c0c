//! Spring physics used to smooth values that would otherwise jump between
//! animation frames.

/// Longest frame gap simulated in one go. Larger gaps (a backgrounded tab)
/// are treated as this long.
const MAX_FRAME_SECS: f64 = 0.064;
/// Integration step; small enough to keep the stiff progress spring stable.
const MAX_SUBSTEP_SECS: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance to the target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f64,
}

impl Spring {
    /// The scroll progress bar spring. Damping ratio 1.5, so it never
    /// overshoots.
    pub const PROGRESS: Spring = Spring {
        stiffness: 100.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.01,
    };

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::PROGRESS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
}

impl SpringState {
    pub fn at(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    pub fn is_settled(&self, spring: &Spring, target: f64) -> bool {
        (self.position - target).abs() < spring.rest_delta && self.velocity.abs() < spring.rest_speed
    }

    /// Advances the spring toward `target` by `dt` seconds.
    ///
    /// Returns `true` once the spring is at rest, at which point the position
    /// is exactly `target` and the velocity zero.
    pub fn step(&mut self, spring: &Spring, target: f64, dt: f64) -> bool {
        if dt.is_finite() && dt > 0.0 {
            let dt = dt.min(MAX_FRAME_SECS);
            let steps = (dt / MAX_SUBSTEP_SECS).ceil().max(1.0) as u32;
            let h = dt / f64::from(steps);
            for _ in 0..steps {
                let force =
                    -spring.stiffness * (self.position - target) - spring.damping * self.velocity;
                // semi-implicit Euler: velocity first, then position with the new velocity
                self.velocity += force / spring.mass * h;
                self.position += self.velocity * h;
            }
        }
        if self.is_settled(spring, target) {
            *self = Self::at(target);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run(state: &mut SpringState, target: f64, frames: usize) -> Vec<f64> {
        let spring = Spring::PROGRESS;
        (0..frames)
            .map(|_| {
                state.step(&spring, target, FRAME);
                state.position
            })
            .collect()
    }

    #[test]
    fn test_progress_spring_is_overdamped() {
        assert!(Spring::PROGRESS.damping_ratio() >= 1.0);
    }

    #[test]
    fn test_settles_exactly_on_target() {
        let mut state = SpringState::at(0.0);
        run(&mut state, 1.0, 300);
        assert_eq!(state, SpringState::at(1.0));
    }

    #[test]
    fn test_approach_is_monotonic_without_overshoot() {
        let mut state = SpringState::at(0.0);
        let positions = run(&mut state, 1.0, 300);
        for pair in positions.windows(2) {
            assert!(pair[1] >= pair[0], "spring moved backwards: {pair:?}");
        }
        assert!(positions.iter().all(|p| *p <= 1.0 + 1e-9));
    }

    #[test]
    fn test_moves_gradually() {
        let mut state = SpringState::at(0.0);
        let spring = Spring::PROGRESS;
        let settled = state.step(&spring, 1.0, FRAME);
        assert!(!settled);
        assert!(state.position > 0.0 && state.position < 0.5);
    }

    #[test]
    fn test_retargeting_reverses_direction() {
        let mut state = SpringState::at(0.0);
        run(&mut state, 1.0, 20);
        let midway = state.position;
        run(&mut state, 0.0, 300);
        assert!(midway > 0.0);
        assert_eq!(state.position, 0.0);
    }

    #[test]
    fn test_resting_spring_stays_put() {
        let spring = Spring::PROGRESS;
        let mut state = SpringState::at(0.0);
        assert!(state.step(&spring, 0.0, FRAME));
        assert_eq!(state.position, 0.0);
    }

    #[test]
    fn test_ignores_bad_frame_times() {
        let spring = Spring::PROGRESS;
        let mut state = SpringState::at(0.25);
        state.step(&spring, 1.0, f64::NAN);
        state.step(&spring, 1.0, -1.0);
        assert_eq!(state.position, 0.25);
    }

    #[test]
    fn test_long_frame_gap_is_clamped() {
        let spring = Spring::PROGRESS;
        let mut long = SpringState::at(0.0);
        long.step(&spring, 1.0, 10.0);
        let mut capped = SpringState::at(0.0);
        capped.step(&spring, 1.0, MAX_FRAME_SECS);
        assert_eq!(long, capped);
    }
}
