use crate::count_map::CountMap;
use crate::LogRecord;
use chrono::{DateTime, DurationRound, TimeDelta, Utc};

/// Per-run accumulator of service and error statistics.
///
/// Counts only grow while records are added. Two partial aggregates can be
/// combined with [`Aggregator::merge`].
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    service_count: CountMap<String>,
    service_error_count: CountMap<String>,
    error_message_count: CountMap<String>,
    error_hour_count: CountMap<DateTime<Utc>>,
    first_seen: Option<DateTime<Utc>>,
    last_seen: Option<DateTime<Utc>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &LogRecord) {
        self.service_count.increment(record.service.as_str());
        self.observe(record.timestamp, record.timestamp);

        if record.is_error() {
            self.service_error_count.increment(record.service.as_str());
            self.error_message_count.increment(record.message.as_str());
            self.error_hour_count.increment(&hour_bucket(record.timestamp));
        }
    }

    pub fn merge(&mut self, other: Aggregator) {
        self.service_count.merge(other.service_count);
        self.service_error_count.merge(other.service_error_count);
        self.error_message_count.merge(other.error_message_count);
        self.error_hour_count.merge(other.error_hour_count);
        if let (Some(first), Some(last)) = (other.first_seen, other.last_seen) {
            self.observe(first, last);
        }
    }

    fn observe(&mut self, first: DateTime<Utc>, last: DateTime<Utc>) {
        self.first_seen = Some(self.first_seen.map_or(first, |t| t.min(first)));
        self.last_seen = Some(self.last_seen.map_or(last, |t| t.max(last)));
    }

    pub fn service_count(&self) -> &CountMap<String> {
        &self.service_count
    }

    pub fn service_error_count(&self) -> &CountMap<String> {
        &self.service_error_count
    }

    pub fn error_message_count(&self) -> &CountMap<String> {
        &self.error_message_count
    }

    /// Errors per UTC hour bucket, in first-seen order
    pub fn error_hour_count(&self) -> &CountMap<DateTime<Utc>> {
        &self.error_hour_count
    }

    pub fn first_seen(&self) -> Option<DateTime<Utc>> {
        self.first_seen
    }

    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        self.last_seen
    }

    /// Number of records added so far
    pub fn record_count(&self) -> u64 {
        self.service_count.total()
    }
}

impl<'a> Extend<&'a LogRecord> for Aggregator {
    fn extend<I: IntoIterator<Item = &'a LogRecord>>(&mut self, iter: I) {
        for record in iter {
            self.add(record);
        }
    }
}

impl<'a> FromIterator<&'a LogRecord> for Aggregator {
    fn from_iter<I: IntoIterator<Item = &'a LogRecord>>(iter: I) -> Self {
        let mut aggregator = Aggregator::new();
        aggregator.extend(iter);
        aggregator
    }
}

/// Single pass over `records`.
pub fn aggregate<'a, I>(records: I) -> Aggregator
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    records.into_iter().collect()
}

/// Start of the UTC hour containing `ts`.
pub fn hour_bucket(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.duration_trunc(TimeDelta::hours(1)).unwrap_or(ts)
}
