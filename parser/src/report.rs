use crate::aggregator::Aggregator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStats {
    pub service: String,
    pub total: u64,
    pub errors: u64,
    /// Percentage in `[0, 100]`
    pub error_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCount {
    pub message: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourCount {
    pub hour: DateTime<Utc>,
    pub count: u64,
}

/// Read-only view of one analysis run, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_records: u64,
    pub skipped_lines: usize,
    pub services: Vec<ServiceStats>,
    pub error_messages: Vec<MessageCount>,
    pub most_frequent_error: Option<MessageCount>,
    pub error_hours: Vec<HourCount>,
    pub first_seen: Option<DateTime<Utc>>,
    pub last_seen: Option<DateTime<Utc>>,
}

impl Summary {
    pub fn from_aggregate(agg: &Aggregator, skipped_lines: usize) -> Self {
        let services = agg
            .service_count()
            .iter()
            .map(|(service, total)| {
                let errors = agg.service_error_count().get(service.as_str());
                ServiceStats {
                    service: service.clone(),
                    total,
                    errors,
                    error_rate: error_rate(errors, total),
                }
            })
            .collect();

        let error_messages = agg
            .error_message_count()
            .iter()
            .map(|(message, count)| MessageCount {
                message: message.clone(),
                count,
            })
            .collect();

        let most_frequent_error = agg
            .error_message_count()
            .most_frequent()
            .map(|(message, count)| MessageCount {
                message: message.clone(),
                count,
            });

        let error_hours = agg
            .error_hour_count()
            .iter()
            .map(|(hour, count)| HourCount { hour: *hour, count })
            .collect();

        Self {
            total_records: agg.record_count(),
            skipped_lines,
            services,
            error_messages,
            most_frequent_error,
            error_hours,
            first_seen: agg.first_seen(),
            last_seen: agg.last_seen(),
        }
    }

    pub fn service(&self, name: &str) -> Option<&ServiceStats> {
        self.services.iter().find(|s| s.service == name)
    }
}

/// `errors / total * 100`, or `0.0` when `total` is zero.
pub fn error_rate(errors: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    errors as f64 / total as f64 * 100.0
}
