//! Strongly-typed identifiers used across the domain.

use uuid::Uuid;

/// Identifier of a customer account.
///
/// Assigned once when the account is opened; never reused or changed.
/// Backed by UUIDv7, so ids sort in creation order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(Uuid);

impl CustomerId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for CustomerId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_distinct_v7_uuids() {
        let first = CustomerId::new();
        let second = CustomerId::new();
        assert_ne!(first, second);
        assert_eq!(first.as_uuid().get_version_num(), 7);
    }

    #[test]
    fn display_is_the_hyphenated_uuid() {
        let uuid = Uuid::now_v7();
        assert_eq!(CustomerId::from(uuid).to_string(), uuid.hyphenated().to_string());
    }
}
