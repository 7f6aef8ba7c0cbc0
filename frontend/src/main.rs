#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use shodh::{
        app::App as Shodh, config::init_server_config,
        logger::init_server_logger,
    };

    let config = init_server_config().await?;
    init_server_logger(config.log_level);

    let conf = get_configuration(None).await?;
    let addr = conf.leptos_options.site_addr;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(Shodh);
    tracing::info!("listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options: &LeptosOptions = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        let app = App::new()
            // `/api` belongs to the contest service, server functions live elsewhere
            .route("/srv/{tail:.*}", leptos_actix::handle_server_fns())
            // serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            // serve the favicon from /favicon.ico
            .service(favicon)
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), Shodh)
            .app_data(web::Data::new(leptos_options.to_owned()));

        #[cfg(feature = "compress")]
        let app = app.wrap(actix_web::middleware::Compress::default());

        app
    })
    .bind(&addr)?
    .run()
    .await?;
    Ok(())
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
    // see optional feature `csr` instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use shodh::{app::*, logger::init_web_logger};

    console_error_panic_hook::set_once();
    init_web_logger();

    leptos::mount_to_body(App);
}
