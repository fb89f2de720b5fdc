/// Entity primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Lookup table keys (`travel_statuses`, `travel_priority_levels`) are SMALLSERIAL.
pub type LookupId = i16;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (trip start/end) carry no time zone.
pub type Date = chrono::NaiveDate;
