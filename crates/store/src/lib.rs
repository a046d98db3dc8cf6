use shared::{Role, StoreError, UserId, UserRecord};
use tracing::debug;

/// Authoritative in-memory list of user records, in insertion order.
///
/// The store also owns id allocation: a monotonic counter seeded past the
/// largest existing id, so freshly allocated ids never collide with records
/// already present.
#[derive(Debug, Clone)]
pub struct UserStore {
    records: Vec<UserRecord>,
    next_id: i64,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Store preloaded with the stock demo roster.
    pub fn seeded() -> Self {
        let records = vec![
            seed_record(1, "Juan Pérez", "juan@example.com", Role::Admin),
            seed_record(2, "María García", "maria@example.com", Role::User),
            seed_record(3, "Carlos López", "carlos@example.com", Role::Moderator),
            seed_record(4, "Ana Martínez", "ana@example.com", Role::User),
            seed_record(5, "Luis Rodríguez", "luis@example.com", Role::User),
            seed_record(6, "Sofía Gómez", "sofia@example.com", Role::Moderator),
            seed_record(7, "Miguel Sánchez", "miguel@example.com", Role::Admin),
        ];
        let next_id = records.iter().map(|r| r.id.0).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    pub fn list(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Hand out the next fresh id. Ids are never reused, even after removals.
    pub fn allocate_id(&mut self) -> UserId {
        let id = UserId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a pre-validated, id-assigned record.
    pub fn insert(&mut self, record: UserRecord) -> Result<(), StoreError> {
        if self.get(record.id).is_some() {
            return Err(StoreError::DuplicateId(record.id));
        }
        if record.id.0 >= self.next_id {
            self.next_id = record.id.0 + 1;
        }
        debug!(user_id = record.id.0, name = %record.name, "inserted user record");
        self.records.push(record);
        Ok(())
    }

    /// Replace the record with the matching id, keeping its position.
    pub fn update(&mut self, record: UserRecord) -> Result<(), StoreError> {
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(StoreError::NotFound(record.id))?;
        debug!(user_id = record.id.0, name = %record.name, "updated user record");
        *slot = record;
        Ok(())
    }

    /// Delete and return the record with the matching id.
    pub fn remove(&mut self, id: UserId) -> Result<UserRecord, StoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let record = self.records.remove(index);
        debug!(user_id = id.0, name = %record.name, "removed user record");
        Ok(record)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_record(id: i64, name: &str, email: &str, role: Role) -> UserRecord {
    UserRecord {
        id: UserId(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
    }
}

#[cfg(test)]
mod tests;
