/// All generated primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Instants recorded by the server (user creation, token issue) are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Caller-supplied calendar times (review dates, due dates) carry no zone,
/// e.g. `2022-01-03T00:00:00`.
pub type LocalDateTime = chrono::NaiveDateTime;
