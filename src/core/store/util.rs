use time::{OffsetDateTime, UtcOffset};
use uuid::Uuid;

/// Produces ids for records created at runtime. Seed records carry literal ids
/// and never go through an id source.
pub trait IdSource {
    fn next_id(&mut self, prefix: &str) -> String;
}

/// `prefix-<uuid v4>`. The default source.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self, prefix: &str) -> String {
        format!("{}-{}", prefix, Uuid::new_v4())
    }
}

/// `prefix-<n>` with one counter shared by every prefix, so ids stay unique
/// even across collections.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Start counting at `first`. Seed ids use 1..=3 per prefix, so a start
    /// well above that keeps runtime ids from shadowing them.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1000)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{}-{}", prefix, self.next);
        self.next += 1;
        id
    }
}

/// Time source for creation timestamps and default dates.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// `YYYY-MM-DD` of the instant in UTC.
pub fn iso_date(at: OffsetDateTime) -> String {
    at.to_offset(UtcOffset::UTC).date().to_string()
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ` of the instant in UTC.
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    let at = at.to_offset(UtcOffset::UTC);
    format!(
        "{}T{:02}:{:02}:{:02}.{:03}Z",
        at.date(),
        at.hour(),
        at.minute(),
        at.second(),
        at.millisecond()
    )
}
