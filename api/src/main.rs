use std::net::SocketAddr;

use axum::{Json, Router, routing::get};
use diesel_async::{
    AsyncPgConnection,
    pooled_connection::{AsyncDieselConnectionManager, deadpool::Pool},
};
use dotenv::dotenv;
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod comments;
mod config;
mod error;
mod json;
mod schema;

use config::{Env, ServerConfig};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Clone)]
pub struct App {
    pub diesel: Pool<AsyncPgConnection>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    // The subscriber has to be up before the config is read so that a
    // missing required variable is actually reported.
    let env = Env::from_env();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("api=debug,tower_http=debug"));
    match env {
        Env::Production | Env::Staging => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        Env::Dev => tracing_subscriber::fmt()
            .compact()
            .with_env_filter(filter)
            .init(),
    }

    let config = ServerConfig::new_from_env();

    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);
    let diesel = Pool::builder(manager)
        .build()
        .expect("couldn't build the database connection pool");

    let app = Router::<App>::new()
        .route("/", get(api_root))
        .merge(comments::routes::route())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(App { diesel });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(environment = ?env, "listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("couldn't bind the listen address");
    axum::serve(listener, app).await.unwrap();
}

// What the router serves at its root: the registered resources and where to
// find them.
async fn api_root() -> Json<Value> {
    Json(json!({ "comments": "/comments/" }))
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn api_root_lists_the_comments_resource() {
        let Json(index) = api_root().await;

        assert_eq!(index, json!({ "comments": "/comments/" }));
    }
}
