use serde::Serialize;
use sqlx::FromRow;

/// A registered identity as held by the credential store.
///
/// `password_hash` is never serialized; responses go through [`PublicUser`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

/// The externally visible part of a user, returned on registration.
#[derive(Debug, Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct PublicUser {
    pub id: i32,
    pub username: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_drops_hash() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            password_hash: "$2b$04$abcdefghijklmnopqrstuv".to_string(),
        };
        let json = serde_json::to_value(PublicUser::from(user)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 7, "username": "alice" }));
    }
}
