use std::sync::Arc;

use anyhow::Context;

use campuserp_api::directory::{InMemoryDirectory, UserDirectory};
use campuserp_auth::{AuthConfig, Role};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    campuserp_observability::init();

    // Fail closed: without both signing secrets the process must not start.
    let config = AuthConfig::from_env().context("auth configuration is incomplete")?;

    let app = campuserp_api::app::build_app(&config, bootstrap_directory())
        .context("failed to build application")?;

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .context("failed to bind 0.0.0.0:8080")?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Development bootstrap: seed one super admin from the environment.
///
/// Real deployments back [`UserDirectory`] with the user service instead.
fn bootstrap_directory() -> Arc<dyn UserDirectory> {
    let directory = match (
        std::env::var("BOOTSTRAP_ADMIN_EMAIL"),
        std::env::var("BOOTSTRAP_ADMIN_PASSWORD"),
    ) {
        (Ok(email), Ok(password)) => {
            tracing::info!(%email, "seeding bootstrap super admin");
            InMemoryDirectory::new().with_user(&email, &password, Role::SuperAdmin)
        }
        _ => {
            tracing::warn!("no bootstrap admin configured; login will reject everyone");
            InMemoryDirectory::new()
        }
    };

    Arc::new(directory)
}
