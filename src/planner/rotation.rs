use super::types::PlanError;
use crate::model::{RotationConfig, ShiftAssignment};
use chrono::{DateTime, Duration, Utc};

/// Génère la rotation de base : le premier créneau émis est celui qui
/// contient `from`, le dernier est celui dont le début précède `until`.
pub(super) fn base_schedule(
    config: &RotationConfig,
    from: DateTime<Utc>,
    until: DateTime<Utc>,
) -> Result<Vec<ShiftAssignment>, PlanError> {
    config.validate().map_err(PlanError::InvalidConfig)?;

    let interval_secs = config.interval().num_seconds();
    let total = config.users.len();

    // division euclidienne : une fenêtre antérieure à l'ancre donne un
    // nombre d'intervalles négatif, pas tronqué vers zéro
    let elapsed = (from - config.anchor).num_seconds();
    let mut passed = elapsed.div_euclid(interval_secs);

    let mut start = config.anchor + Duration::seconds(passed * interval_secs);
    // num_seconds() tronque les fractions de seconde vers zéro ; juste
    // avant l'ancre, le créneau calculé démarrerait après `from`
    if start > from {
        passed -= 1;
        start = start - Duration::seconds(interval_secs);
    }
    let mut cursor = passed.rem_euclid(total as i64) as usize;

    let mut shifts = Vec::new();
    while start < until {
        let end = start + Duration::seconds(interval_secs);
        shifts.push(ShiftAssignment {
            user: config.users[cursor].clone(),
            start,
            end,
        });
        cursor = (cursor + 1) % total;
        start = end;
    }
    Ok(shifts)
}
