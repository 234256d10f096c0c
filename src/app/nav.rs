use leptos::prelude::*;

use crate::anchor::nav_href;
use crate::content::{sections, NAV_LABELS};

use super::widgets::{GlitchText, HexagonIcon};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full z-40 px-6 py-6 backdrop-blur-sm border-b border-white/5">
            <div class="max-w-7xl mx-auto flex justify-between items-center">
                <Brand />
                <div class="hidden md:flex gap-8 text-sm font-mono text-zinc-400">
                    {NAV_LABELS.into_iter().map(|label| view! { <NavLink label /> }).collect_view()}
                </div>
                <a
                    href=format!("#{}", sections::CONTACT)
                    class="px-4 py-2 text-xs font-mono font-bold bg-zinc-900 border border-zinc-700 hover:border-cyan-500 text-white rounded hover:shadow-[0_0_10px_rgba(6,182,212,0.3)] transition-all"
                >
                    "INICIAR_CONTATO"
                </a>
            </div>
        </nav>
    }
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <a
            href=format!("#{}", sections::HERO)
            class="flex items-center gap-2 font-mono text-xl font-bold tracking-tighter"
        >
            <HexagonIcon class="text-cyan-500 w-6 h-6 animate-pulse" />
            <span>
                <GlitchText text="Allan" />
                <span class="text-cyan-500">".QA"</span>
            </span>
        </a>
    }
}

#[component]
fn NavLink(label: &'static str) -> impl IntoView {
    view! {
        <a
            href=nav_href(label)
            class="hover:text-cyan-400 transition-colors uppercase tracking-widest relative group"
        >
            {label}
            <span class="absolute -bottom-1 left-0 w-0 h-[1px] bg-cyan-500 group-hover:w-full transition-all duration-300"></span>
        </a>
    }
}
