use proptest::prelude::*;
use u_enroll::conflict::{conflicts, ConflictReport};
use u_enroll::eligibility::eligible;
use u_enroll::models::{CourseOffering, Selection, StudentRecord, Weekday};
use u_enroll::scheduler::ScheduleBuilder;

fn weekday() -> impl Strategy<Value = Weekday> {
    prop::sample::select(Weekday::ALL.to_vec())
}

fn offering(code: String) -> impl Strategy<Value = CourseOffering> {
    (
        1u32..=4,
        prop::collection::btree_set(weekday(), 1..=3),
        (8u32 * 60..20 * 60),
        (15u32..=180),
        0u32..=5,
        prop::collection::btree_set(
            prop::sample::select(vec!["CS101", "ENG101", "STAT101", "X999"]),
            0..=2,
        ),
    )
        .prop_map(move |(credits, days, start, len, seats, prereqs)| {
            let mut c = CourseOffering::new(code.clone())
                .with_credits(credits)
                .with_schedule(days, start, start + len)
                .with_seats(seats);
            for p in prereqs {
                c = c.with_prerequisite(p);
            }
            c
        })
}

fn catalog() -> impl Strategy<Value = Vec<CourseOffering>> {
    (0usize..=12).prop_flat_map(|n| {
        (0..n)
            .map(|i| offering(format!("C{i:02}")))
            .collect::<Vec<_>>()
    })
}

fn student() -> impl Strategy<Value = StudentRecord> {
    (
        prop::collection::btree_set(
            prop::sample::select(vec!["CS101", "ENG101", "STAT101"]),
            0..=3,
        ),
        prop::collection::vec(0usize..14, 0..8),
    )
        .prop_map(|(done, prio)| {
            let mut s = StudentRecord::new("p");
            for d in done {
                s = s.with_completed(d);
            }
            s.with_priority(prio.into_iter().map(|i| format!("C{i:02}")))
        })
}

proptest! {
    #[test]
    fn conflict_is_symmetric(a in offering("A".into()), b in offering("B".into())) {
        prop_assert_eq!(conflicts(&a, &b), conflicts(&b, &a));
    }

    #[test]
    fn touching_windows_never_conflict(
        days in prop::collection::btree_set(weekday(), 1..=5),
        start in 0u32..1200,
        len_a in 1u32..120,
        len_b in 1u32..120,
    ) {
        let a = CourseOffering::new("A").with_schedule(days.clone(), start, start + len_a);
        let b = CourseOffering::new("B").with_schedule(days, start + len_a, start + len_a + len_b);
        prop_assert!(!conflicts(&a, &b));
    }

    #[test]
    fn eligibility_is_monotone(
        cat in catalog(),
        st in student(),
        pick in any::<prop::sample::Index>(),
    ) {
        let before = eligible(&cat, &st, &Selection::new());
        prop_assume!(!before.is_empty());
        let chosen = before[pick.index(before.len())].clone();
        let after = eligible(&cat, &st, &Selection::from_courses([chosen]));

        prop_assert!(after.len() <= before.len());
        for c in &after {
            prop_assert!(before.iter().any(|b| b.code == c.code));
        }
    }

    #[test]
    fn auto_fill_is_deterministic(cat in catalog(), st in student()) {
        let builder = ScheduleBuilder::new();
        let first = builder.auto_fill(&cat, &st, &Selection::new());
        let second = builder.auto_fill(&cat, &st, &Selection::new());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn auto_fill_respects_ceiling(cat in catalog(), st in student()) {
        let builder = ScheduleBuilder::new();
        let outcome = builder.auto_fill(&cat, &st, &Selection::new());
        let max_single = cat.iter().map(|c| c.credits).max().unwrap_or(0);

        prop_assert!(outcome.total_credits < builder.config().max_credits + max_single.max(1));
        // Dropping the last addition leaves the total under the ceiling.
        if let Some(last) = outcome.added.last() {
            let last_credits = outcome.selection.get(last).map(|c| c.credits).unwrap_or(0);
            prop_assert!(outcome.total_credits - last_credits < builder.config().max_credits);
        }
    }

    #[test]
    fn auto_fill_is_conflict_free(cat in catalog(), st in student()) {
        let outcome = ScheduleBuilder::new().auto_fill(&cat, &st, &Selection::new());
        prop_assert!(!ConflictReport::of(&outcome.selection).has_conflicts());
        prop_assert_eq!(outcome.total_credits, outcome.selection.total_credits());
    }
}
