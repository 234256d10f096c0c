mod backdrop;
mod homepage;
mod nav;
mod reveal;
mod widgets;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::site_config;
use crate::content::{sections, FONTS_HREF, PAGE_META};
use crate::icons::Icon;
use homepage::HomePage;
use widgets::{Glyph, SectionTitle};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="" />
                <link rel="stylesheet" href=FONTS_HREF />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body class="antialiased bg-black text-white overflow-x-hidden font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(site_config());

    view! {
        <Title text=PAGE_META.title />
        <Meta name="description" content=PAGE_META.description />

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(feature = "ssr")]
fn set_not_found_status() {
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
}

#[cfg(not(feature = "ssr"))]
fn set_not_found_status() {}

#[component]
fn NotFound() -> impl IntoView {
    set_not_found_status();

    view! {
        <Title text="404 | Allan Tavolaro" />
        <section class="min-h-screen flex flex-col items-center justify-center px-6 bg-black text-white">
            <SectionTitle title="Sinal Perdido" subtitle="Erro 404" />
            <p class="text-zinc-400 font-mono mb-10">"Nenhum módulo responde neste endereço."</p>
            <a
                href=format!("/#{}", sections::HERO)
                class="px-8 py-4 bg-cyan-500 text-black font-bold rounded-lg hover:bg-cyan-400 transition-colors flex items-center gap-2"
            >
                <Glyph icon=Icon::Terminal class="w-5 h-5" />
                "VOLTAR_AO_INICIO"
            </a>
        </section>
    }
}
