use crate::entities::friendships::Friendship as FriendshipEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendshipStatus {
    Pending,
    Accepted,
}

/// A friendship edge between two users. Directed at creation; once
/// accepted the direction no longer carries meaning.
#[derive(Debug)]
pub struct Friendship {
    pub requester_id: i64,
    pub recipient_id: i64,
    pub status: FriendshipStatus,
}

impl From<FriendshipEntity> for Friendship {
    fn from(value: FriendshipEntity) -> Self {
        Self {
            requester_id: value.user_id,
            recipient_id: value.friend_id,
            status: match value.is_accepted {
                true => FriendshipStatus::Accepted,
                false => FriendshipStatus::Pending,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_edge_maps_to_pending_status() {
        let edge = FriendshipEntity {
            user_id: 1,
            friend_id: 2,
            is_accepted: false,
        };
        let friendship = Friendship::from(edge);
        assert_eq!(friendship.status, FriendshipStatus::Pending);
        assert_eq!(friendship.requester_id, 1);
        assert_eq!(friendship.recipient_id, 2);
    }

    #[test]
    fn accepted_edge_maps_to_accepted_status() {
        let edge = FriendshipEntity {
            user_id: 2,
            friend_id: 1,
            is_accepted: true,
        };
        assert_eq!(Friendship::from(edge).status, FriendshipStatus::Accepted);
    }
}
