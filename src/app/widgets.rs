use leptos::{either::Either, prelude::*};

use crate::content::{Project, SkillGroup};
use crate::icons::{Icon, HEXAGON_PATH};

#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            inner_html=icon.body()
        ></svg>
    }
}

#[component]
pub fn HexagonIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="currentColor"
            class=class
            aria-hidden="true"
        >
            <path d=HEXAGON_PATH></path>
        </svg>
    }
}

/// Text with two offset colored copies that split apart on hover.
#[component]
pub fn GlitchText(text: &'static str) -> impl IntoView {
    view! {
        <div class="relative inline-block group">
            <span class="relative z-10">{text}</span>
            <span
                class="absolute top-0 left-0 -z-10 w-full h-full text-cyan-500 opacity-0 group-hover:opacity-70 group-hover:translate-x-[2px] transition-all duration-100 select-none"
                aria-hidden="true"
            >
                {text}
            </span>
            <span
                class="absolute top-0 left-0 -z-10 w-full h-full text-purple-500 opacity-0 group-hover:opacity-70 group-hover:-translate-x-[2px] transition-all duration-100 select-none"
                aria-hidden="true"
            >
                {text}
            </span>
        </div>
    }
}

#[component]
pub fn SectionTitle(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="mb-16">
            <div class="flex items-center gap-3 mb-2 text-cyan-400 font-mono text-sm tracking-widest uppercase">
                <span class="w-8 h-[1px] bg-cyan-500"></span>
                {subtitle}
            </div>
            <h2 class="text-4xl md:text-5xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-white via-gray-200 to-gray-500">
                {title}
            </h2>
        </div>
    }
}

#[component]
pub fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-zinc-900/50 border border-zinc-800 backdrop-blur-sm relative overflow-hidden group hover:border-cyan-500/30 hover:-translate-y-[5px] transition-all duration-300">
            <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/5 to-purple-500/5 opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
            <div class="relative z-10">
                <div class="w-12 h-12 rounded-lg bg-zinc-800/50 flex items-center justify-center mb-4 text-cyan-400 group-hover:text-cyan-300 transition-colors">
                    <Glyph icon=group.icon class="w-6 h-6" />
                </div>
                <h3 class="text-xl font-bold mb-4 font-mono">{group.title}</h3>
                <div class="flex flex-wrap gap-2">
                    {group
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <span class="px-3 py-1 rounded-md bg-zinc-800/80 text-xs font-mono text-zinc-400 border border-zinc-700/50 group-hover:border-cyan-500/20 group-hover:text-cyan-400 transition-all">
                                    {*skill}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectTile(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group relative rounded-3xl overflow-hidden border border-zinc-800 bg-zinc-900/30 h-full">
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-transparent to-black/80 z-10"></div>
            <div class="absolute inset-0 bg-cyan-500/5 opacity-0 group-hover:opacity-100 transition-opacity duration-500 z-0"></div>
            <div
                class="absolute inset-0 opacity-10"
                style="background-image: radial-gradient(circle, #06b6d4 1px, transparent 1px); background-size: 20px 20px"
            ></div>
            <div class="relative z-20 p-8 h-full flex flex-col justify-between min-h-[400px]">
                <div>
                    <div class="flex justify-between items-start mb-6">
                        <div class="px-3 py-1 rounded-full border border-cyan-500/30 bg-cyan-500/10 text-cyan-400 text-xs font-mono uppercase tracking-wider">
                            {project.kind}
                        </div>
                        <Glyph
                            icon=Icon::ExternalLink
                            class="w-5 h-5 text-zinc-600 group-hover:text-cyan-400 transition-colors"
                        />
                    </div>
                    <h3 class="text-3xl font-bold mb-3 font-mono text-white group-hover:text-cyan-200 transition-colors">
                        {project.title}
                    </h3>
                    <p class="text-zinc-400 leading-relaxed mb-6">{project.description}</p>
                </div>
                <div>
                    <div class="h-px w-full bg-gradient-to-r from-cyan-500/50 to-transparent mb-6"></div>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tech
                            .iter()
                            .map(|t| {
                                view! {
                                    <div class="flex items-center gap-1 text-xs font-mono text-zinc-500">
                                        <div class="w-1.5 h-1.5 rounded-full bg-purple-500"></div>
                                        {*t}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Project tile, wrapped in an outbound link when the project has one.
#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    match project.link {
        Some(href) => Either::Left(view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="block h-full cursor-pointer transition-transform duration-300 hover:scale-[1.01]"
            >
                <ProjectTile project />
            </a>
        }),
        None => Either::Right(view! {
            <div class="h-full transition-transform duration-300 hover:scale-[1.01]">
                <ProjectTile project />
            </div>
        }),
    }
}
