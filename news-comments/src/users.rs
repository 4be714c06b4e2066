//! Resolution of comment owners by their external uuid

use crate::error::Result;
use crate::model::{User, UserRequest};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<User>>;

    async fn create(&self, request: &UserRequest) -> Result<User>;
}

/// Process-local user directory
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<UserTable>,
}

#[derive(Default)]
struct UserTable {
    by_uuid: HashMap<Uuid, User>,
    last_id: i64,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<User>> {
        Ok(self.users.read().await.by_uuid.get(&uuid).cloned())
    }

    async fn create(&self, request: &UserRequest) -> Result<User> {
        let mut table = self.users.write().await;
        if let Some(existing) = table.by_uuid.get(&request.uuid) {
            return Ok(existing.clone());
        }

        table.last_id += 1;
        let user = User {
            id: table.last_id,
            uuid: request.uuid,
            user_name: request.user_name.clone(),
        };
        table.by_uuid.insert(user.uuid, user.clone());

        info!("Created user {} ({})", user.user_name, user.uuid);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let users = InMemoryUserDirectory::new();
        let uuid = Uuid::new_v4();

        assert!(users.find_by_uuid(uuid).await.unwrap().is_none());

        let created = users
            .create(&UserRequest {
                uuid,
                user_name: "bob".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let found = users.find_by_uuid(uuid).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_create_is_keyed_by_uuid() {
        let users = InMemoryUserDirectory::new();
        let uuid = Uuid::new_v4();

        let first = users
            .create(&UserRequest {
                uuid,
                user_name: "bob".to_string(),
            })
            .await
            .unwrap();
        let second = users
            .create(&UserRequest {
                uuid,
                user_name: "robert".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.user_name, "bob");
    }
}
