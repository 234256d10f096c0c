use leptos::{ev, prelude::*};
use leptos_use::{
    use_event_listener_with_options, use_window, UseEventListenerOptions,
};

/// Pixels of background shift per pixel of pointer travel.
pub const PARALLAX_FACTOR: f64 = 0.01;

/// Pointer coordinates in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn parallax(self, factor: f64) -> (f64, f64) {
        (self.x * factor, self.y * factor)
    }

    pub fn translate_style(self, factor: f64) -> String {
        let (dx, dy) = self.parallax(factor);
        format!("transform: translate({dx}px, {dy}px)")
    }
}

/// Latest pointer position; each sample replaces the previous one.
#[derive(Debug, Clone, Copy)]
pub struct PointerSensor {
    position: RwSignal<PointerPosition>,
}

impl PointerSensor {
    pub fn new() -> Self {
        Self {
            position: RwSignal::new(PointerPosition::default()),
        }
    }

    /// Stores a sample. Returns `false` when the owning component is gone
    /// and nothing was updated.
    pub fn record(&self, x: f64, y: f64) -> bool {
        self.position.try_set(PointerPosition::new(x, y)).is_none()
    }

    pub fn position(&self) -> PointerPosition {
        self.position.get()
    }

    pub fn try_position(&self) -> Option<PointerPosition> {
        self.position.try_get_untracked()
    }

    pub fn parallax_style(&self) -> String {
        self.position().translate_style(PARALLAX_FACTOR)
    }
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new()
    }
}

/// Pointer sensor fed by window `mousemove` events. The listener is removed
/// when the calling component is cleaned up.
pub fn use_pointer_sensor() -> PointerSensor {
    let sensor = PointerSensor::new();
    let _ = use_event_listener_with_options(
        use_window(),
        ev::mousemove,
        move |e| {
            sensor.record(f64::from(e.client_x()), f64::from(e.client_y()));
        },
        UseEventListenerOptions::default().passive(true),
    );
    on_cleanup(|| log::debug!("pointer sensor released"));
    sensor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin() {
        let owner = Owner::new();
        owner.with(|| {
            let sensor = PointerSensor::new();
            assert_eq!(sensor.position(), PointerPosition::new(0.0, 0.0));
            assert_eq!(sensor.parallax_style(), "transform: translate(0px, 0px)");
        });
    }

    #[test]
    fn test_last_write_wins() {
        let owner = Owner::new();
        owner.with(|| {
            let sensor = PointerSensor::new();
            let samples = [(10.0, 20.0), (640.0, 12.0), (300.0, 480.0)];
            for (x, y) in samples {
                assert!(sensor.record(x, y));
            }
            // not an average of the history
            assert_eq!(sensor.position(), PointerPosition::new(300.0, 480.0));
        });
    }

    #[test]
    fn test_parallax_offset() {
        let pos = PointerPosition::new(500.0, 250.0);
        assert_eq!(pos.parallax(PARALLAX_FACTOR), (5.0, 2.5));
        assert_eq!(
            pos.translate_style(PARALLAX_FACTOR),
            "transform: translate(5px, 2.5px)"
        );
    }

    #[test]
    fn test_no_updates_after_unmount() {
        let owner = Owner::new();
        let sensor = owner.with(|| {
            let sensor = PointerSensor::new();
            sensor.record(42.0, 7.0);
            sensor
        });
        assert_eq!(sensor.try_position(), Some(PointerPosition::new(42.0, 7.0)));

        owner.cleanup();

        let updates = [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]
            .into_iter()
            .filter(|(x, y)| sensor.record(*x, *y))
            .count();
        assert_eq!(updates, 0);
        assert_eq!(sensor.try_position(), None);
    }
}
