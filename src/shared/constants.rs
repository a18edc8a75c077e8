/// Default `limit` for list endpoints
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Upper bound applied to `limit` on list endpoints
pub const MAX_LIST_LIMIT: i64 = 1000;
