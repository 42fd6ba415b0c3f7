pub mod v1;

use crate::common::context::Context;
use crate::common::error::AppError;
use crate::common::init;
use crate::common::redis_pool::{PoolResult, RedisPool};
use crate::common::state::AppState;
use crate::models::sessions::Session;
use crate::settings::AppSettings;
use crate::usecases::sessions;
use async_trait::async_trait;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use sqlx::{MySql, Pool};
use std::convert::Infallible;
use std::net::SocketAddr;
use tracing::info;
use uuid::Uuid;

pub struct RequestContext {
    pub db: Pool<MySql>,
    pub redis: RedisPool,
}

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/v1", v1::router())
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let app = router().with_state(state);
    let addr = SocketAddr::from((settings.app_host, settings.app_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            db: state.db.clone(),
            redis: state.redis.clone(),
        })
    }
}

#[async_trait]
impl Context for RequestContext {
    fn db(&self) -> &Pool<MySql> {
        &self.db
    }

    async fn redis(&self) -> PoolResult {
        self.redis.get().await
    }
}

/// The authenticated caller, resolved from the `Authorization: Bearer`
/// header. Fails closed on a missing, malformed, or expired token.
pub struct CurrentUser(pub Session);

fn bearer_token(parts: &Parts) -> Option<Uuid> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    Uuid::parse_str(token).ok()
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session_id = bearer_token(parts).ok_or(AppError::Unauthorized)?;
        let ctx = RequestContext {
            db: state.db.clone(),
            redis: state.redis.clone(),
        };
        let session = sessions::fetch_one(&ctx, session_id).await?;
        Ok(Self(session))
    }
}
