//! Shared test utilities for objdict-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use std::sync::Arc;

    use objdict_core::CommandRepository;
    use objdict_core::entities::UserRecord;

    use crate::ObjDictDb;

    /// Create an in-memory database.
    pub fn test_db() -> Arc<ObjDictDb> {
        Arc::new(ObjDictDb::open_in_memory().unwrap())
    }

    /// Insert a user and return it.
    pub fn seed_user(db: &Arc<ObjDictDb>, name: &str) -> UserRecord {
        let user = UserRecord::new(name, None).unwrap();
        db.repository::<UserRecord>().create(&user).unwrap();
        user
    }
}
