use chrono::{NaiveDate, NaiveDateTime};
use medcal_core::{
    conflict::{find_buffered_conflict, find_conflict, find_conflict_excluding},
    errors::BookingError,
    models::{Interval, NewTimeSlot, OwnerId, SlotEdit, SlotStatus, TimeSlot},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use serde_test::{assert_tokens, Token};
use uuid::Uuid;

const OWNER: &str = "5a78af51-8f88-4b8b-8b21-27334997d2b2";

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 25)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn span(from: (u32, u32), to: (u32, u32)) -> Interval {
    Interval::new(at(from.0, from.1), at(to.0, to.1))
}

#[rstest]
#[case("5a78af51-8f88-4b8b-8b21-27334997d2b2")]
#[case("5A78AF51-8F88-4B8B-8B21-27334997D2B2")]
#[case("5a78af518f884b8b8b2127334997d2b2")]
#[case("{5a78af51-8f88-4b8b-8b21-27334997d2b2}")]
#[case("urn:uuid:5a78af51-8f88-4b8b-8b21-27334997d2b2")]
fn test_owner_id_accepts_uuid_forms(#[case] raw: &str) {
    let owner = OwnerId::parse(raw).expect("should parse");

    assert!(OwnerId::is_valid(raw));
    assert_eq!(owner.to_string(), OWNER);
}

#[test]
fn test_owner_id_from_uuid_round_trips_through_text() {
    let owner = OwnerId::from(Uuid::new_v4());

    assert_eq!(OwnerId::parse(&owner.to_string()).unwrap(), owner);
}

#[rstest]
#[case("")]
#[case("doctor-42")]
#[case("5a78af51-8f88-4b8b-8b21")]
#[case("5a78af51-8f88-4b8b-8b21-27334997d2bz")]
fn test_owner_id_rejects_garbage(#[case] raw: &str) {
    assert!(!OwnerId::is_valid(raw));
    assert!(matches!(
        raw.parse::<OwnerId>(),
        Err(BookingError::InvalidIdentifier(_))
    ));
}

#[rstest]
#[case("AVAILABLE", SlotStatus::Available)]
#[case("UNAVAILABLE", SlotStatus::Unavailable)]
#[case("RESERVED", SlotStatus::Reserved)]
#[case("CANCELLED", SlotStatus::Cancelled)]
fn test_status_round_trips_through_boundary_strings(
    #[case] raw: &str,
    #[case] expected: SlotStatus,
) {
    let status: SlotStatus = raw.parse().expect("known status");

    assert_eq!(status, expected);
    assert_eq!(status.to_string(), raw);
}

#[rstest]
#[case("")]
#[case("reserved")]
#[case("PENDING")]
#[case(" RESERVED")]
fn test_status_rejects_unknown_strings(#[case] raw: &str) {
    assert!(matches!(
        raw.parse::<SlotStatus>(),
        Err(BookingError::InvalidStatus(_))
    ));
}

#[test]
fn test_status_serde_tokens() {
    assert_tokens(
        &SlotStatus::Reserved,
        &[Token::UnitVariant {
            name: "SlotStatus",
            variant: "RESERVED",
        }],
    );
    assert_eq!(SlotStatus::default(), SlotStatus::Available);
}

#[rstest]
#[case(SlotStatus::Available, SlotStatus::Reserved, true)]
#[case(SlotStatus::Available, SlotStatus::Unavailable, true)]
#[case(SlotStatus::Available, SlotStatus::Cancelled, true)]
#[case(SlotStatus::Reserved, SlotStatus::Cancelled, true)]
#[case(SlotStatus::Unavailable, SlotStatus::Cancelled, true)]
#[case(SlotStatus::Cancelled, SlotStatus::Cancelled, true)]
#[case(SlotStatus::Reserved, SlotStatus::Reserved, true)]
#[case(SlotStatus::Cancelled, SlotStatus::Available, false)]
#[case(SlotStatus::Cancelled, SlotStatus::Reserved, false)]
#[case(SlotStatus::Reserved, SlotStatus::Available, false)]
#[case(SlotStatus::Reserved, SlotStatus::Unavailable, false)]
fn test_status_transitions(
    #[case] from: SlotStatus,
    #[case] to: SlotStatus,
    #[case] allowed: bool,
) {
    assert_eq!(from.can_transition_to(to), allowed);
}

#[rstest]
#[case(span((10, 0), (10, 30)), span((10, 15), (10, 45)), true)]
#[case(span((10, 0), (10, 30)), span((9, 0), (11, 0)), true)]
#[case(span((10, 0), (10, 30)), span((10, 0), (10, 30)), true)]
#[case(span((10, 0), (10, 30)), span((10, 30), (11, 0)), false)]
#[case(span((10, 30), (11, 0)), span((10, 0), (10, 30)), false)]
#[case(span((10, 0), (10, 30)), span((12, 0), (13, 0)), false)]
fn test_interval_overlap_is_half_open(
    #[case] a: Interval,
    #[case] b: Interval,
    #[case] expected: bool,
) {
    assert_eq!(a.overlaps(&b), expected);
    assert_eq!(b.overlaps(&a), expected);
}

#[test]
fn test_try_new_rejects_empty_and_inverted_intervals() {
    assert!(Interval::try_new(at(10, 0), at(10, 30)).is_ok());
    assert!(matches!(
        Interval::try_new(at(10, 0), at(10, 0)),
        Err(BookingError::InvalidInterval(_))
    ));
    assert!(matches!(
        Interval::try_new(at(11, 0), at(10, 0)),
        Err(BookingError::InvalidInterval(_))
    ));
}

#[test]
fn test_extend_end_only_moves_the_end() {
    let slot = span((10, 0), (10, 30));

    assert_eq!(slot.extend_end(15), span((10, 0), (10, 45)));
    assert_eq!(slot.extend_end(0), slot);
    assert_eq!(slot.duration(), chrono::Duration::minutes(30));
}

#[rstest]
#[case(span((10, 35), (11, 0)), true)]
#[case(span((10, 44), (11, 0)), true)]
#[case(span((10, 45), (11, 0)), false)]
#[case(span((9, 30), (9, 45)), false)]
#[case(span((9, 30), (9, 50)), true)]
fn test_buffered_conflict_keeps_gap_on_both_sides(
    #[case] candidate: Interval,
    #[case] expected: bool,
) {
    let existing = vec![span((10, 0), (10, 30))];

    assert_eq!(find_buffered_conflict(&candidate, &existing, 15).is_some(), expected);
    assert!(find_buffered_conflict(&candidate, &existing, 0).is_none());
}

#[test]
fn test_extend_end_saturates() {
    let near_max = Interval::new(NaiveDateTime::MAX - chrono::Duration::minutes(1), NaiveDateTime::MAX);

    assert_eq!(near_max.extend_end(60).end, NaiveDateTime::MAX);
}

#[test]
fn test_find_conflict_reports_first_overlap() {
    let existing = vec![span((8, 0), (9, 0)), span((10, 0), (10, 30)), span((10, 20), (11, 0))];

    let hit = find_conflict(&span((10, 15), (10, 25)), &existing);
    assert_eq!(hit, Some(&existing[1]));

    assert_eq!(find_conflict(&span((9, 0), (10, 0)), &existing), None);
}

#[test]
fn test_find_conflict_excluding_skips_own_row() {
    let existing = vec![(1, span((10, 0), (10, 30))), (2, span((11, 0), (11, 30)))];

    assert_eq!(find_conflict_excluding(&span((10, 15), (10, 45)), &existing, 1), None);
    assert_eq!(
        find_conflict_excluding(&span((10, 15), (11, 15)), &existing, 1),
        Some(&existing[1].1)
    );
}

#[test]
fn test_slot_edit_target_interval() {
    let current = span((10, 0), (10, 30));

    let moved = SlotEdit::relocate(at(11, 0), at(11, 30));
    assert_eq!(moved.target_interval(current), span((11, 0), (11, 30)));

    let half = SlotEdit {
        new_start: Some(at(11, 0)),
        ..SlotEdit::default()
    };
    assert_eq!(half.target_interval(current), current);
}

#[test]
fn test_time_slot_serialization() {
    let owner = OwnerId::parse(OWNER).unwrap();
    let slot: TimeSlot = NewTimeSlot {
        owner,
        interval: span((10, 0), (10, 30)),
        title: "Check-up".to_string(),
        description: "Annual".to_string(),
        status: SlotStatus::Reserved,
    }
    .into();

    let json = to_string(&slot).expect("Failed to serialize time slot");
    assert!(json.contains("\"RESERVED\""));
    assert!(json.contains(OWNER));

    let deserialized: TimeSlot = from_str(&json).expect("Failed to deserialize time slot");
    assert_eq!(deserialized, slot);
    assert_eq!(deserialized.interval(), span((10, 0), (10, 30)));
}

#[test]
fn test_time_slot_defaults_when_fields_missing() {
    let json = format!(
        r#"{{"owner":"{OWNER}","start_time":"2025-01-25T10:00:00","end_time":"2025-01-25T10:30:00"}}"#
    );

    let slot: TimeSlot = from_str(&json).expect("Failed to deserialize time slot");

    assert_eq!(slot.title, "");
    assert_eq!(slot.description, "");
    assert_eq!(slot.status, SlotStatus::Available);
}
