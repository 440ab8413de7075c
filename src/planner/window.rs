use crate::model::{ScheduledShift, ShiftAssignment};
use chrono::{DateTime, Utc};

const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Tronque le planning à [from, until) et formate les bornes en seconde
/// entière. Les fragments vides ou inversés après troncature sont écartés.
pub(super) fn clip(
    schedule: Vec<ShiftAssignment>,
    from: DateTime<Utc>,
    until: DateTime<Utc>,
) -> Vec<ScheduledShift> {
    schedule
        .into_iter()
        .filter_map(|shift| {
            let start = shift.start.max(from);
            let end = shift.end.min(until);
            if start >= end {
                return None;
            }
            Some(ScheduledShift {
                user: shift.user,
                start_at: start.format(TS_FORMAT).to_string(),
                end_at: end.format(TS_FORMAT).to_string(),
            })
        })
        .collect()
}
