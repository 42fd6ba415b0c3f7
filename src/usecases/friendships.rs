use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, is_unique_violation, unexpected};
use crate::models::friendships::{Friendship, FriendshipStatus};
use crate::models::users::User;
use crate::repositories::friendships;
use crate::usecases::users;

/// Creates a pending edge from `requester_id` to `target_id`. At most one
/// edge may exist per unordered pair, so an existing edge in either
/// direction is a conflict regardless of who initiated it.
pub async fn send_request<C: Context>(
    ctx: &C,
    requester_id: i64,
    target_id: i64,
) -> ServiceResult<()> {
    if requester_id == target_id {
        return Err(AppError::FriendshipsSelfRequest);
    }
    users::fetch_one(ctx, target_id).await?;

    let existing = match friendships::fetch_between(ctx, requester_id, target_id).await {
        Ok(edge) => edge.map(Friendship::from),
        Err(e) => return unexpected(e),
    };
    match existing.map(|friendship| friendship.status) {
        Some(FriendshipStatus::Accepted) => return Err(AppError::FriendshipsAlreadyFriends),
        Some(FriendshipStatus::Pending) => return Err(AppError::FriendshipsAlreadyRequested),
        None => {}
    }

    match friendships::create_pending(ctx, requester_id, target_id).await {
        Ok(()) => Ok(()),
        // a concurrent request for the same pair won the race
        Err(e) if is_unique_violation(&e) => Err(AppError::FriendshipsAlreadyRequested),
        Err(e) => unexpected(e),
    }
}

/// Accepts the pending request sent by `sender_id`. Only the original
/// recipient may accept, and only the original sender may be accepted;
/// anything else (wrong direction, already accepted, never sent) is absent.
pub async fn accept_request<C: Context>(
    ctx: &C,
    accepter_id: i64,
    sender_id: i64,
) -> ServiceResult<()> {
    match friendships::accept(ctx, sender_id, accepter_id).await {
        Ok(0) => Err(AppError::FriendshipsNotFound),
        Ok(_) => Ok(()),
        Err(e) => unexpected(e),
    }
}

pub async fn get_friends<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<Vec<User>> {
    match friendships::fetch_friends(ctx, user_id).await {
        Ok(friends) => Ok(friends.into_iter().map(User::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn get_incoming<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<Vec<User>> {
    match friendships::fetch_incoming(ctx, user_id).await {
        Ok(senders) => Ok(senders.into_iter().map(User::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// Removes the edge between the pair in any state. Serves both rejecting a
/// pending request and unfriending; the caller's intent is not recorded.
pub async fn remove_friendship<C: Context>(
    ctx: &C,
    user_id: i64,
    other_id: i64,
) -> ServiceResult<()> {
    match friendships::delete_between(ctx, user_id, other_id).await {
        Ok(0) => Err(AppError::FriendshipsNotFound),
        Ok(_) => Ok(()),
        Err(e) => unexpected(e),
    }
}
