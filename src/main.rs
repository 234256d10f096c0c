#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio::app::*;
    use portfolio::config::SiteConfig;
    use tower_http::services::ServeDir;

    // refuse to start with a base path the views would turn into broken asset URLs
    let site = SiteConfig::from_build().expect("SITE_BASE_PATH should be a valid base path");
    let conf = get_configuration(None).expect("Should be able to read Leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let mut app = Router::<LeptosOptions>::new().leptos_routes(&leptos_options, routes, {
        let leptos_options = leptos_options.clone();
        move || shell(leptos_options.clone())
    });
    if !site.base_path().is_empty() {
        // assets are referenced as {base}/name, so mirror the site root there
        app = app.nest_service(
            site.base_path(),
            ServeDir::new(&*leptos_options.site_root),
        );
        log!("serving assets under {}", site.base_path());
    }
    let app = app
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    log!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind the site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server should run until shut down");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
