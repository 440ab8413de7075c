#![forbid(unsafe_code)]
use chrono::{DateTime, TimeZone, Utc};
use roulement::{PlanError, Planner, RotationConfig, UserId};

fn config_ab() -> RotationConfig {
    RotationConfig {
        users: vec![UserId::new("alice"), UserId::new("bob")],
        anchor: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        interval_days: 1,
    }
}

#[test]
fn rotation_alternates_over_three_days() {
    let planner = Planner::new(config_ab()).unwrap();
    let from = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let until = Utc.with_ymd_and_hms(2025, 1, 4, 0, 0, 0).unwrap();

    let plan = planner.plan(from, until).unwrap();
    assert_eq!(plan.len(), 3);
    assert_eq!(plan[0].user.as_str(), "alice");
    assert_eq!(plan[0].start_at, "2025-01-01T00:00:00Z");
    assert_eq!(plan[0].end_at, "2025-01-02T00:00:00Z");
    assert_eq!(plan[1].user.as_str(), "bob");
    assert_eq!(plan[1].start_at, "2025-01-02T00:00:00Z");
    assert_eq!(plan[2].user.as_str(), "alice");
    assert_eq!(plan[2].end_at, "2025-01-04T00:00:00Z");
}

#[test]
fn window_before_anchor_resolves_negative_intervals() {
    let planner = Planner::new(config_ab()).unwrap();
    let from = Utc.with_ymd_and_hms(2024, 12, 31, 12, 0, 0).unwrap();
    let until = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();

    let plan = planner.plan(from, until).unwrap();
    assert_eq!(plan.len(), 2);
    // un intervalle avant l'ancre : index -1 normalisé sur "bob"
    assert_eq!(plan[0].user.as_str(), "bob");
    assert_eq!(plan[0].start_at, "2024-12-31T12:00:00Z");
    assert_eq!(plan[0].end_at, "2025-01-01T00:00:00Z");
    assert_eq!(plan[1].user.as_str(), "alice");
}

#[test]
fn fractional_second_before_anchor_is_covered() {
    let planner = Planner::new(config_ab()).unwrap();
    let from = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap()
        + chrono::Duration::milliseconds(500);
    let until = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();

    let base = planner.base_schedule(from, until).unwrap();
    // une demi-seconde avant l'ancre : le créneau pré-ancre de "bob" couvre `from`
    assert!(base.first().unwrap().start <= from);
    assert_eq!(
        base[0].start,
        Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()
    );
    assert_eq!(base[0].user.as_str(), "bob");
    assert_eq!(base[1].user.as_str(), "alice");

    let plan = planner.plan(from, until).unwrap();
    assert_eq!(plan[0].user.as_str(), "bob");
    assert_eq!(plan[0].start_at, "2024-12-31T23:59:59Z");
    assert_eq!(plan[0].end_at, "2025-01-01T00:00:00Z");
}

#[test]
fn base_schedule_is_gapless_and_covers_window() {
    let planner = Planner::new(config_ab()).unwrap();
    let from = Utc.with_ymd_and_hms(2025, 3, 10, 7, 30, 0).unwrap();
    let until = Utc.with_ymd_and_hms(2025, 3, 24, 16, 0, 0).unwrap();

    let base = planner.base_schedule(from, until).unwrap();
    assert!(base.first().unwrap().start <= from);
    assert!(base.last().unwrap().end >= until);
    for pair in base.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn cyclic_assignment_is_fair_across_anchor() {
    let config = RotationConfig {
        users: vec![UserId::new("a"), UserId::new("b"), UserId::new("c")],
        anchor: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        interval_days: 7,
    };
    let planner = Planner::new(config).unwrap();
    let from = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
    let until = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();

    let base = planner.base_schedule(from, until).unwrap();
    // -31 jours / 7 → 5 intervalles avant l'ancre, premier créneau pour "b"
    assert_eq!(
        base[0].start,
        Utc.with_ymd_and_hms(2025, 4, 27, 0, 0, 0).unwrap()
    );
    let names = ["a", "b", "c"];
    for (i, shift) in base.iter().enumerate() {
        assert_eq!(shift.user.as_str(), names[(1 + i) % 3]);
        assert_eq!(shift.duration_minutes(), 7 * 24 * 60);
    }
}

#[test]
fn output_shifts_stay_inside_window() {
    let planner = Planner::new(config_ab()).unwrap();
    let from = Utc.with_ymd_and_hms(2025, 2, 3, 9, 15, 0).unwrap();
    let until = Utc.with_ymd_and_hms(2025, 2, 10, 18, 45, 0).unwrap();

    for shift in planner.plan(from, until).unwrap() {
        let start: DateTime<Utc> = shift.start_at.parse().unwrap();
        let end: DateTime<Utc> = shift.end_at.parse().unwrap();
        assert!(from <= start);
        assert!(start < end);
        assert!(end <= until);
    }
}

#[test]
fn empty_user_list_is_rejected() {
    let config = RotationConfig {
        users: vec![],
        anchor: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        interval_days: 1,
    };
    let err = Planner::new(config).unwrap_err();
    assert!(matches!(err, PlanError::InvalidConfig(_)));
}

#[test]
fn non_positive_interval_is_rejected() {
    let config = RotationConfig {
        users: vec![UserId::new("alice")],
        anchor: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        interval_days: 0,
    };
    let err = Planner::new(config).unwrap_err();
    assert!(matches!(err, PlanError::InvalidConfig(_)));
}

#[test]
fn inverted_window_is_rejected() {
    let planner = Planner::new(config_ab()).unwrap();
    let from = Utc.with_ymd_and_hms(2025, 1, 4, 0, 0, 0).unwrap();
    let until = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let err = planner.plan(from, until).unwrap_err();
    assert!(matches!(err, PlanError::InvalidWindow));
}
