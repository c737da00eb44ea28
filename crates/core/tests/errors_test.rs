use std::error::Error;
use medcal_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let invalid_id = BookingError::InvalidIdentifier("\"abc\" is not a valid UUID".to_string());
    let invalid_interval = BookingError::InvalidInterval("start after end".to_string());
    let invalid_status = BookingError::InvalidStatus("\"PENDING\"".to_string());
    let conflict = BookingError::Conflict("overlaps [10:00, 10:30)".to_string());
    let not_found = BookingError::NotFound("No slot".to_string());
    let storage = BookingError::Storage(eyre::eyre!("database is locked"));

    assert_eq!(
        invalid_id.to_string(),
        "Invalid identifier: \"abc\" is not a valid UUID"
    );
    assert_eq!(invalid_interval.to_string(), "Invalid interval: start after end");
    assert_eq!(invalid_status.to_string(), "Invalid status: \"PENDING\"");
    assert_eq!(conflict.to_string(), "Conflict: overlaps [10:00, 10:30)");
    assert_eq!(not_found.to_string(), "Resource not found: No slot");
    assert_eq!(storage.to_string(), "Storage error: database is locked");
}

#[test]
fn test_storage_error_keeps_source() {
    let report = eyre::eyre!("disk I/O error");
    let error: BookingError = report.into();

    assert!(matches!(error, BookingError::Storage(_)));
    assert!(error.source().is_some());
}

#[test]
fn test_question_mark_lifts_reports() {
    fn store_call() -> eyre::Result<u32> {
        Err(eyre::eyre!("connection reset"))
    }

    fn engine_call() -> BookingResult<u32> {
        Ok(store_call()?)
    }

    let err = engine_call().unwrap_err();
    assert!(err.to_string().contains("connection reset"));
}

#[test]
fn test_booking_result() {
    let result: BookingResult<u32> = Ok(15);
    assert_eq!(result.unwrap(), 15);

    let result: BookingResult<u32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}
