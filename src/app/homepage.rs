use leptos::prelude::*;

use crate::config::build_year;
use crate::content::{
    links, sections, EXPERIENCE, HERO_CONSOLE, PROJECTS, SKILL_GROUPS, STATUS_BADGE,
};
use crate::icons::Icon;
use crate::reveal::RevealMotion;
use crate::sensors::{use_pointer_sensor, use_scroll_progress};

use super::backdrop::{Backdrop, ProgressBar};
use super::nav::NavBar;
use super::reveal::Reveal;
use super::widgets::{Glyph, ProjectCard, SectionTitle, SkillCard};

/// The whole single-page portfolio.
#[component]
pub fn HomePage() -> impl IntoView {
    let progress = use_scroll_progress();
    let pointer = use_pointer_sensor();

    view! {
        <div class="min-h-screen bg-black text-white selection:bg-cyan-500/30 selection:text-cyan-200">
            <ProgressBar progress />
            <Backdrop pointer />
            <NavBar />
            <Hero />
            <ExperienceSection />
            <ProjectsSection />
            <SkillsSection />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            id=sections::HERO
            class="relative min-h-screen flex items-center justify-center px-6 pt-20"
        >
            <div class="max-w-7xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                <div class="flex flex-col items-center text-center animate-enter-left">
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-cyan-900/20 border border-cyan-500/20 text-cyan-400 font-mono text-xs mb-8">
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-cyan-400 opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-cyan-500"></span>
                        </span>
                        {STATUS_BADGE}
                    </div>
                    <h1 class="text-4xl sm:text-5xl md:text-7xl lg:text-8xl font-bold leading-tight mb-4 md:mb-6">
                        "ALLAN "
                        <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600">
                            "TAVOLARO"
                        </span>
                    </h1>
                    <p class="text-base md:text-xl text-zinc-400 max-w-lg mb-10 leading-relaxed font-light">
                        <strong class="text-white">"QA Engineer Pleno"</strong>
                        " & "
                        <strong class="text-white">"Arquiteto de Automação"</strong>
                        " criando sistemas de validação de alta performance e infraestrutura escalável de testes."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start w-full sm:w-auto px-4 sm:px-0">
                        <a
                            href=format!("#{}", sections::PROJECTS)
                            class="w-full sm:w-auto px-8 py-4 bg-cyan-500 text-black font-bold rounded-lg hover:bg-cyan-400 hover:scale-105 active:scale-95 transition-all shadow-[0_0_20px_rgba(6,182,212,0.4)] flex items-center justify-center gap-2"
                        >
                            <Glyph icon=Icon::Terminal class="w-5 h-5" />
                            "VER_PROJETOS"
                        </a>
                        <a
                            href=links::GITHUB
                            target="_blank"
                            rel="noopener noreferrer"
                            class="w-full sm:w-auto px-8 py-4 bg-zinc-900 border border-zinc-700 text-white font-bold rounded-lg hover:border-cyan-500 hover:text-cyan-400 hover:scale-105 active:scale-95 transition-all flex items-center justify-center gap-2"
                        >
                            <Glyph icon=Icon::Github class="w-5 h-5" />
                            "PERFIL_GITHUB"
                        </a>
                    </div>
                </div>
                <HeroArt />
            </div>
            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce text-zinc-500">
                <Glyph icon=Icon::ChevronRight class="w-6 h-6 rotate-90" />
            </div>
        </section>
    }
}

#[component]
fn HeroArt() -> impl IntoView {
    view! {
        <div class="relative hidden lg:block animate-enter-zoom" aria-hidden="true">
            <div class="relative w-[500px] h-[500px]">
                <div class="absolute inset-0 bg-gradient-to-tr from-cyan-500/20 to-purple-500/20 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute inset-10 border border-zinc-700/50 rounded-full animate-[spin_10s_linear_infinite]"></div>
                <div class="absolute inset-20 border border-dashed border-cyan-500/30 rounded-full animate-[spin_15s_linear_infinite_reverse]"></div>
                <div class="absolute inset-0 flex items-center justify-center">
                    <div class="glass-panel p-8 rounded-2xl border border-cyan-500/20 shadow-2xl relative z-10">
                        <div class="flex items-center gap-4 mb-4">
                            <div class="w-10 h-10 rounded bg-cyan-500/10 flex items-center justify-center">
                                <Glyph icon=Icon::Code class="w-6 h-6 text-cyan-400" />
                            </div>
                            <div>
                                <div class="h-2 w-24 bg-zinc-700 rounded mb-1"></div>
                                <div class="h-2 w-16 bg-zinc-800 rounded"></div>
                            </div>
                        </div>
                        <div class="space-y-2 font-mono text-xs text-green-400">
                            {HERO_CONSOLE
                                .into_iter()
                                .map(|line| view! { <p>"> " {line}</p> })
                                .collect_view()}
                            <p class="animate-pulse">"> _"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    view! {
        <section class="py-20 md:py-32 relative text-center">
            <div class="max-w-4xl mx-auto px-4 md:px-6">
                <SectionTitle title="Log de Missões" subtitle="Experiência Profissional" />
                <div class="relative">
                    <div class="absolute left-1/2 -translate-x-1/2 h-full w-px bg-gradient-to-b from-cyan-500/50 via-purple-500/50 to-transparent"></div>
                    <Reveal
                        motion=RevealMotion::Rise
                        class="relative z-10 bg-zinc-900 border border-zinc-800 p-6 md:p-8 rounded-2xl max-w-2xl mx-auto text-left hover:border-purple-500/50 shadow-2xl"
                    >
                        <div class="absolute top-0 right-0 p-4 opacity-20">
                            <Glyph icon=Icon::ShieldCheck class="w-20 h-20" />
                        </div>
                        <div class="inline-block px-3 py-1 bg-purple-500/20 text-purple-400 text-xs font-mono rounded mb-4 border border-purple-500/30">
                            {EXPERIENCE.status}
                        </div>
                        <h3 class="text-2xl font-bold text-white mb-1">{EXPERIENCE.role}</h3>
                        <p class="text-cyan-400 font-mono mb-4">{EXPERIENCE.company}</p>
                        <ul class="space-y-3 text-zinc-400 text-sm">
                            {EXPERIENCE
                                .highlights
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li class="flex gap-3">
                                            <span class="text-purple-500">"▹"</span>
                                            {*item}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=sections::PROJECTS class="py-20 md:py-32 bg-zinc-900/20 relative">
            <div class="max-w-7xl mx-auto px-4 md:px-6">
                <SectionTitle title="Módulos Implantados" subtitle="Projetos em Destaque" />
                <div class="grid md:grid-cols-2 gap-8 justify-center">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <section id=sections::SKILLS class="py-20 md:py-32 px-4 md:px-6">
            <div class="max-w-7xl mx-auto">
                <SectionTitle title="Arquitetura Técnica" subtitle="Capacidades do Sistema" />
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SKILL_GROUPS.iter().map(|group| view! { <SkillCard group /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id=sections::CONTACT class="py-20 md:py-32 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-transparent to-cyan-900/10"></div>
            <div class="max-w-4xl mx-auto px-4 md:px-6 text-center relative z-10">
                <Reveal
                    motion=RevealMotion::Zoom
                    class="p-12 rounded-3xl bg-black border border-zinc-800 shadow-[0_0_50px_rgba(6,182,212,0.1)]"
                >
                    <h2 class="text-3xl md:text-5xl font-bold mb-6 font-mono text-white">
                        "PRONTO PARA COLABORAR?"
                    </h2>
                    <p class="text-base md:text-xl text-zinc-400 mb-10 max-w-xl mx-auto">
                        "Inicialize um canal de comunicação para discutir estratégias de automação, cenários de teste e engenharia de qualidade."
                    </p>
                    <div class="flex flex-col sm:flex-row justify-center gap-4">
                        <a
                            href=links::EMAIL
                            class="group relative px-8 py-4 bg-cyan-500 rounded-lg font-bold text-black overflow-hidden"
                        >
                            <span class="relative z-10 flex items-center gap-2">
                                <Glyph icon=Icon::Mail class="w-5 h-5" />
                                "ENVIAR_EMAIL"
                            </span>
                            <div class="absolute inset-0 bg-white opacity-0 group-hover:opacity-20 transition-opacity"></div>
                        </a>
                        <a
                            href=links::LINKEDIN
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group px-8 py-4 bg-zinc-900 border border-zinc-700 rounded-lg font-bold text-white hover:border-cyan-500 transition-colors flex items-center justify-center gap-2"
                        >
                            <Glyph icon=Icon::Linkedin class="w-5 h-5" />
                            "LINKEDIN"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-zinc-900 text-center text-zinc-600 font-mono text-xs">
            <div class="flex justify-center items-center gap-2 mb-2">
                <Glyph icon=Icon::Terminal class="w-4 h-4" />
            </div>
            <p>{format!("© {} Allan Tavolaro. Todos os sistemas operacionais.", build_year())}</p>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::anchor::nav_href;
    use crate::config::SiteConfig;
    use crate::content::NAV_LABELS;

    fn render(config: SiteConfig) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(config);
            view! { <HomePage /> }.to_html()
        })
    }

    #[test]
    fn test_renders_every_section_anchor() {
        let html = render(SiteConfig::default());
        for id in sections::ALL {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
        }
        for label in NAV_LABELS {
            assert!(html.contains(&format!(r#"href="{}""#, nav_href(label))));
        }
    }

    #[test]
    fn test_progress_bar_starts_empty() {
        let html = render(SiteConfig::default());
        assert!(html.contains("transform: scaleX(0)"));
        assert!(html.contains("transform: translate(0px, 0px)"));
    }

    #[test]
    fn test_reveal_blocks_start_hidden() {
        let html = render(SiteConfig::default());
        assert!(html.contains("translate-y-[30px]"));
        assert!(html.contains("scale-90"));
    }

    #[test]
    fn test_noise_texture_uses_base_path() {
        let root = render(SiteConfig::default());
        assert!(root.contains("url('/noise.svg')"));

        let config = SiteConfig::new("/PortifolioAllanQA").unwrap();
        let deployed = render(config);
        assert!(deployed.contains("url('/PortifolioAllanQA/noise.svg')"));
    }

    #[test]
    fn test_outbound_links_open_new_context() {
        let html = render(SiteConfig::default());
        assert!(html.contains(links::EMAIL));
        assert!(html.contains(&format!(r#"href="{}" target="_blank""#, links::LINKEDIN)));
        assert!(html.contains(&format!(r#"href="{}" target="_blank""#, links::GITHUB)));
    }
}
