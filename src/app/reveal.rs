use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer, UseIntersectionObserverReturn};

use crate::reveal::{RevealLatch, RevealMotion};

/// Plays `motion` the first time the block scrolls into view, and never again.
#[component]
pub fn Reveal(
    motion: RevealMotion,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let latch = RevealLatch::new();
    let target = NodeRef::<html::Div>::new();

    let UseIntersectionObserverReturn { stop, .. } =
        use_intersection_observer(target, move |entries, _| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            if latch.observe(intersecting) {
                log::debug!("revealed {motion:?} block");
            }
        });

    // the latch is terminal, so the observer has nothing left to report
    Effect::new(move |_| {
        if latch.is_revealed() {
            stop();
        }
    });

    view! {
        <div node_ref=target class=move || format!("{class} {}", motion.classes(latch.state()))>
            {children()}
        </div>
    }
}
