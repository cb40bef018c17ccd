//! Shared helpers for in-crate tests.

use agro_core::identity::AuthIdentity;

use crate::AgroDb;
use crate::service::AgroService;

/// In-memory service owned by `user_id`.
pub async fn service_for(user_id: &str) -> AgroService {
    let db = AgroDb::open_local(":memory:").await.unwrap();
    AgroService::from_db(db, Some(AuthIdentity::new(user_id)))
}

pub async fn anonymous_service() -> AgroService {
    let db = AgroDb::open_local(":memory:").await.unwrap();
    AgroService::from_db(db, None)
}
