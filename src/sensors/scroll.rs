use leptos::{ev, prelude::*};
use leptos_use::{
    use_event_listener_with_options, use_raf_fn_with_options, use_window,
    UseEventListenerOptions, UseRafFnCallbackArgs, UseRafFnOptions,
};

use crate::motion::{Spring, SpringState};

/// Fraction of the document scrolled, in `[0, 1]`.
///
/// A document too short to scroll counts as fully read.
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = scroll_height - viewport_height;
    if !max_scroll.is_finite() || !scroll_y.is_finite() {
        return 0.0;
    }
    if max_scroll <= 0.0 {
        return 1.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0)
}

/// Spring-smoothed scroll progress.
#[derive(Debug, Clone, Copy)]
pub struct ScrollProgress {
    target: RwSignal<f64>,
    state: RwSignal<SpringState>,
    spring: Spring,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::with_spring(Spring::PROGRESS)
    }

    pub fn with_spring(spring: Spring) -> Self {
        Self {
            target: RwSignal::new(0.0),
            state: RwSignal::new(SpringState::default()),
            spring,
        }
    }

    /// Sets the raw fraction the spring pulls toward.
    pub fn set_target(&self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        if self.target.try_get_untracked() != Some(fraction) {
            self.target.try_set(fraction);
        }
    }

    /// Advances the spring by `dt` seconds. Returns `true` once at rest.
    pub fn tick(&self, dt: f64) -> bool {
        let Some(target) = self.target.try_get_untracked() else {
            return true;
        };
        let spring = self.spring;
        self.state
            .try_update(|s| s.step(&spring, target, dt))
            .unwrap_or(true)
    }

    pub fn target(&self) -> f64 {
        self.target.get_untracked()
    }

    /// Current smoothed value; tracked.
    pub fn value(&self) -> f64 {
        self.state.with(|s| s.position).clamp(0.0, 1.0)
    }

    /// Tracked; changes whenever the target moves or the spring rests.
    pub fn is_settled(&self) -> bool {
        let target = self.target.get();
        self.state.with(|s| s.is_settled(&self.spring, target))
    }

    pub fn scale_x_style(&self) -> String {
        format!("transform: scaleX({})", self.value())
    }
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self::new()
    }
}

fn measure_document() -> Option<f64> {
    let window = window();
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let scroll_height = f64::from(document().document_element()?.scroll_height());
    Some(scroll_fraction(scroll_y, scroll_height, viewport_height))
}

/// Scroll progress of the window, released with the calling component.
///
/// Scroll and resize events move the target; an animation frame loop runs
/// the spring and pauses itself once it rests.
pub fn use_scroll_progress() -> ScrollProgress {
    let progress = ScrollProgress::new();

    let raf = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            progress.tick(args.delta / 1000.0);
        },
        UseRafFnOptions::default().immediate(false),
    );
    let (pause, resume) = (raf.pause, raf.resume);

    let remeasure = move || {
        if let Some(fraction) = measure_document() {
            progress.set_target(fraction);
        }
    };
    let passive = UseEventListenerOptions::default().passive(true);
    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| remeasure(),
        passive.clone(),
    );
    let _ = use_event_listener_with_options(
        use_window(),
        ev::resize,
        move |_| remeasure(),
        passive,
    );

    // effects only run in the browser, after hydration
    Effect::new(move |_| remeasure());
    Effect::new(move |_| {
        if progress.is_settled() {
            pause();
        } else {
            resume();
        }
    });
    on_cleanup(|| log::debug!("scroll progress released"));

    progress
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn settle(progress: &ScrollProgress) {
        for _ in 0..600 {
            if progress.tick(FRAME) {
                return;
            }
        }
        panic!("progress never settled");
    }

    #[test]
    fn test_fraction_endpoints() {
        assert_eq!(scroll_fraction(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_fraction(500.0, 3000.0, 1000.0), 0.25);
    }

    #[test]
    fn test_fraction_is_linear() {
        let max = 4321.0;
        for p in [0.0, 1.0, 100.0, 2000.5, 4000.0, 4321.0] {
            let f = scroll_fraction(p, max + 800.0, 800.0);
            assert!((f - p / max).abs() < 1e-12);
        }
    }

    #[test]
    fn test_fraction_clamps_overscroll() {
        assert_eq!(scroll_fraction(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(2100.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_unscrollable_document() {
        assert_eq!(scroll_fraction(0.0, 600.0, 800.0), 1.0);
        assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 1.0);
        assert_eq!(scroll_fraction(f64::NAN, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn test_progress_starts_at_zero() {
        let owner = Owner::new();
        owner.with(|| {
            let progress = ScrollProgress::new();
            assert_eq!(progress.value(), 0.0);
            assert_eq!(progress.scale_x_style(), "transform: scaleX(0)");
            assert!(progress.tick(FRAME));
            assert_eq!(progress.value(), 0.0);
        });
    }

    #[test]
    fn test_progress_converges_to_bottom() {
        let owner = Owner::new();
        owner.with(|| {
            let progress = ScrollProgress::new();
            progress.set_target(scroll_fraction(2000.0, 3000.0, 1000.0));
            assert!(!progress.is_settled());

            assert!(!progress.tick(FRAME));
            let first = progress.value();
            assert!(first > 0.0 && first < 1.0);

            settle(&progress);
            assert_eq!(progress.value(), 1.0);
            assert_eq!(progress.scale_x_style(), "transform: scaleX(1)");
            assert!(progress.is_settled());
        });
    }

    #[test]
    fn test_progress_follows_scroll_back_up() {
        let owner = Owner::new();
        owner.with(|| {
            let progress = ScrollProgress::new();
            progress.set_target(0.8);
            settle(&progress);
            assert_eq!(progress.value(), 0.8);

            progress.set_target(0.3);
            progress.tick(FRAME);
            let v = progress.value();
            assert!(v < 0.8 && v > 0.3);
            settle(&progress);
            assert_eq!(progress.value(), 0.3);
        });
    }

    #[test]
    fn test_progress_stays_in_unit_range() {
        let owner = Owner::new();
        owner.with(|| {
            let progress = ScrollProgress::new();
            progress.set_target(7.0);
            assert_eq!(progress.target(), 1.0);
            for _ in 0..300 {
                progress.tick(FRAME);
                let v = progress.value();
                assert!((0.0..=1.0).contains(&v));
            }
            progress.set_target(-3.0);
            assert_eq!(progress.target(), 0.0);
        });
    }

    #[test]
    fn test_disposed_progress_reports_settled() {
        let owner = Owner::new();
        let progress = owner.with(ScrollProgress::new);
        owner.cleanup();
        progress.set_target(0.5);
        assert!(progress.tick(FRAME));
    }
}
