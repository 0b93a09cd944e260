//! Property-based tests for date ranges and the lifecycle state machine.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use super::{DateRange, Reservation, ReservationStatus};
use crate::item::ItemId;
use crate::user::UserId;

// Strategy for a valid range: a start day within a few years of the epoch
// base and a whole-day length of at least 1.
fn range_strategy() -> impl Strategy<Value = DateRange> {
    (0i64..2000, 1i64..60).prop_map(|(offset, length)| {
        let base = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let start = base + Duration::days(offset);
        DateRange::new(start, start + Duration::days(length)).unwrap()
    })
}

fn status_strategy() -> impl Strategy<Value = ReservationStatus> {
    prop_oneof![
        Just(ReservationStatus::Pending),
        Just(ReservationStatus::Confirmed),
        Just(ReservationStatus::InProgress),
        Just(ReservationStatus::Completed),
        Just(ReservationStatus::Cancelled),
    ]
}

fn reservation_with_status(range: DateRange, status: ReservationStatus) -> Reservation {
    Reservation::builder(UserId(1), ItemId(1), range, 100)
        .status(status)
        .build()
        .unwrap()
}

proptest! {
    // PROPERTY: overlap is symmetric. The conflict check may compare the
    // intervals in either order and must reach the same verdict.
    #[test]
    fn prop_overlap_symmetric(a in range_strategy(), b in range_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    // PROPERTY: overlap is reflexive. A range always conflicts with itself,
    // which is what makes an exact double-booking impossible.
    #[test]
    fn prop_overlap_reflexive(a in range_strategy()) {
        prop_assert!(a.overlaps(&a));
    }

    // PROPERTY: valid ranges bill at least one day, so a price derived as
    // days * price_per_day can never be zero.
    #[test]
    fn prop_days_at_least_one(a in range_strategy()) {
        prop_assert!(a.days() >= 1);
    }

    // PROPERTY: the closed-interval policy in both directions. A range
    // starting exactly where another ends conflicts; a range starting any
    // later does not.
    #[test]
    fn prop_touching_conflicts_gap_does_not(
        a in range_strategy(),
        length in 1i64..60,
        gap in 1i64..30,
    ) {
        let touching = DateRange::new(a.end(), a.end() + Duration::days(length)).unwrap();
        prop_assert!(a.overlaps(&touching));

        let disjoint_start = a.end() + Duration::days(gap);
        let disjoint =
            DateRange::new(disjoint_start, disjoint_start + Duration::days(length)).unwrap();
        prop_assert!(!a.overlaps(&disjoint));
    }

    // PROPERTY: the transition table. From every status, exactly the legal
    // actions succeed and every illegal action leaves the reservation
    // untouched.
    #[test]
    fn prop_transition_matrix(range in range_strategy(), status in status_strategy()) {
        let now = Utc::now();

        let confirm_legal = status == ReservationStatus::Pending;
        let begin_legal = matches!(
            status,
            ReservationStatus::Pending | ReservationStatus::Confirmed
        );
        let complete_legal = status == ReservationStatus::InProgress;
        let cancel_legal = matches!(
            status,
            ReservationStatus::Pending | ReservationStatus::Confirmed
        );

        let mut r = reservation_with_status(range, status);
        prop_assert_eq!(r.confirm().is_ok(), confirm_legal);
        if !confirm_legal {
            prop_assert_eq!(r.status(), status);
        }

        let mut r = reservation_with_status(range, status);
        prop_assert_eq!(r.begin(now).is_ok(), begin_legal);
        prop_assert_eq!(r.started_at().is_some(), begin_legal);

        let mut r = reservation_with_status(range, status);
        prop_assert_eq!(r.complete(now).is_ok(), complete_legal);
        prop_assert_eq!(r.completed_at().is_some(), complete_legal);

        let mut r = reservation_with_status(range, status);
        prop_assert_eq!(r.cancel("reason".to_string(), true, now).is_ok(), cancel_legal);
        prop_assert_eq!(r.cancellation().is_some(), cancel_legal);
    }

    // PROPERTY: terminal statuses accept no transition at all.
    #[test]
    fn prop_terminal_statuses_are_final(range in range_strategy()) {
        let now = Utc::now();
        for status in [ReservationStatus::Completed, ReservationStatus::Cancelled] {
            let mut r = reservation_with_status(range, status);
            prop_assert!(r.confirm().is_err());
            prop_assert!(r.begin(now).is_err());
            prop_assert!(r.complete(now).is_err());
            prop_assert!(r.cancel("reason".to_string(), true, now).is_err());
            prop_assert_eq!(r.status(), status);
        }
    }
}
