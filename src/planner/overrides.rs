use super::util;
use crate::model::{Override, ShiftAssignment};

/// Applique les overrides par début croissant sur le planning de base.
pub(super) fn apply(base: Vec<ShiftAssignment>, overrides: &[Override]) -> Vec<ShiftAssignment> {
    let mut ordered: Vec<&Override> = overrides.iter().collect();
    ordered.sort_by_key(|ov| ov.start);

    let mut schedule = base;
    for ov in ordered {
        schedule = punch_out(schedule, ov);
    }
    schedule
}

/// Remplace chaque créneau chevauchant l'override par zéro, un ou deux
/// restes (avant/après), puis insère l'override comme créneau à part
/// entière et retrie. Un créneau entièrement couvert disparaît.
fn punch_out(schedule: Vec<ShiftAssignment>, ov: &Override) -> Vec<ShiftAssignment> {
    let mut next = Vec::with_capacity(schedule.len() + 1);

    for shift in schedule {
        if !util::overlaps(shift.start, shift.end, ov.start, ov.end) {
            next.push(shift);
            continue;
        }
        if shift.start < ov.start {
            next.push(ShiftAssignment {
                user: shift.user.clone(),
                start: shift.start,
                end: ov.start,
            });
        }
        if shift.end > ov.end {
            next.push(ShiftAssignment {
                user: shift.user,
                start: ov.end,
                end: shift.end,
            });
        }
    }

    next.push(ShiftAssignment {
        user: ov.user.clone(),
        start: ov.start,
        end: ov.end,
    });
    next.sort_by_key(|s| s.start);
    next
}
