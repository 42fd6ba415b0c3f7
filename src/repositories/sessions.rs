use crate::common::context::Context;
use crate::common::redis_json::Json;
use crate::entities::sessions::{CreateSessionArgs, Session};
use redis::AsyncCommands;
use std::ops::DerefMut;
use uuid::Uuid;

const SESSIONS_KEY: &str = "cinemate:sessions";

fn make_user_key(user_id: i64) -> String {
    format!("cinemate:sessions:user_ids:{user_id}")
}

pub async fn create<C: Context>(ctx: &C, args: CreateSessionArgs) -> anyhow::Result<Session> {
    let mut redis = ctx.redis().await?;
    let session = Session {
        session_id: Uuid::new_v4(),
        user_id: args.user_id,
        username: args.username,
        created_at: chrono::Utc::now(),
    };
    let user_key = make_user_key(args.user_id);
    redis::pipe()
        .atomic()
        .hset(SESSIONS_KEY, session.session_id, Json(&session))
        .ignore()
        .sadd(user_key, session.session_id)
        .ignore()
        .exec_async(redis.deref_mut())
        .await?;
    Ok(session)
}

pub async fn fetch_one<C: Context>(ctx: &C, session_id: Uuid) -> anyhow::Result<Option<Session>> {
    let mut redis = ctx.redis().await?;
    let session: Option<Json<Session>> = redis.hget(SESSIONS_KEY, session_id).await?;
    Ok(session.map(Json::into_inner))
}

pub async fn delete<C: Context>(ctx: &C, session_id: Uuid, user_id: i64) -> anyhow::Result<()> {
    let mut redis = ctx.redis().await?;
    let user_key = make_user_key(user_id);
    redis::pipe()
        .atomic()
        .hdel(SESSIONS_KEY, session_id)
        .ignore()
        .srem(user_key, session_id)
        .ignore()
        .exec_async(redis.deref_mut())
        .await?;
    Ok(())
}

/// Destroys every session of the user. Used on account deletion.
pub async fn delete_by_user_id<C: Context>(ctx: &C, user_id: i64) -> anyhow::Result<()> {
    let mut redis = ctx.redis().await?;
    let user_key = make_user_key(user_id);
    let session_ids: Vec<Uuid> = redis.smembers(&user_key).await?;
    let mut pipe = redis::pipe();
    pipe.atomic();
    for session_id in session_ids {
        pipe.hdel(SESSIONS_KEY, session_id).ignore();
    }
    pipe.del(user_key).ignore();
    pipe.exec_async(redis.deref_mut()).await?;
    Ok(())
}
