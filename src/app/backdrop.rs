use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::NOISE_TEXTURE;
use crate::sensors::{PointerSensor, ScrollProgress};

/// Thin bar pinned to the top of the viewport, scaled by scroll progress.
#[component]
pub fn ProgressBar(progress: ScrollProgress) -> impl IntoView {
    view! {
        <div
            class="fixed top-0 left-0 right-0 h-0.5 bg-gradient-to-r from-cyan-500 to-purple-500 origin-left z-50 shadow-[0_0_10px_rgba(6,182,212,0.5)]"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", progress.value() * 100.0)
            style=move || progress.scale_x_style()
        ></div>
    }
}

/// Fixed decorative layers: noise texture, grid and a gradient that drifts
/// with the pointer.
#[component]
pub fn Backdrop(pointer: PointerSensor) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let noise = format!("background-image: url('{}')", config.asset(NOISE_TEXTURE));

    view! {
        <div class="fixed inset-0 pointer-events-none z-0" aria-hidden="true">
            <div class="absolute inset-0 opacity-[0.03]" style=noise></div>
            <div class="absolute inset-0 grid-bg opacity-30"></div>
            <div
                class="absolute inset-0 bg-gradient-to-tr from-cyan-500/5 via-transparent to-purple-500/5"
                style=move || pointer.parallax_style()
            ></div>
        </div>
    }
}
