#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::routing::get;
    use axum::Router;
    use gazette::api;
    use gazette::app::App;
    use gazette::db::repository::PgArticleRepository;
    use gazette::state::{AppState, DbConfig};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tower_http::services::ServeDir;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gazette=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting Gazette server...");

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let site_root = leptos_options.site_root.to_string();

    // PORT overrides the configured site address port
    let mut addr = leptos_options.site_addr;
    if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
        addr.set_port(port);
    }

    // Connect to Postgres
    let db_config = DbConfig::from_env();
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_config.url())
        .await
        .expect("Failed to connect to Postgres");

    tracing::info!(
        "Connected to Postgres at {}:{}/{}",
        db_config.host,
        db_config.port,
        db_config.name
    );

    let repo = PgArticleRepository::new(pool);
    repo.ensure_schema()
        .await
        .expect("Failed to create articles table");

    let articles: Arc<dyn gazette::db::repository::ArticleRepository> = Arc::new(repo);

    // Build application state
    let app_state = AppState {
        articles,
        leptos_options: leptos_options.clone(),
    };

    // Generate the Leptos route list for SSR
    let routes = generate_route_list(App);

    // Build the Axum router
    let app = Router::new()
        // API routes
        .route(
            "/api/articles",
            get(api::articles::list_articles).post(api::articles::create_article),
        )
        .route(
            "/api/articles/{id}",
            get(api::articles::get_article)
                .put(api::articles::update_article)
                .delete(api::articles::delete_article),
        )
        .layer(CorsLayer::permissive())
        // Leptos SSR routes
        .leptos_routes(&app_state, routes, {
            move || {
                gazette::app::App()
            }
        })
        // Static files (including the compiled stylesheet)
        .fallback_service(ServeDir::new(&site_root))
        .with_state(app_state);

    // Start the server
    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

// When compiled for WASM (client-side), there's no main function.
// The hydrate() function in lib.rs handles client-side initialization.
#[cfg(not(feature = "ssr"))]
fn main() {
    // This is intentionally empty.
    // Client-side hydration is handled by lib.rs::hydrate()
}
