use std::error::Error;
use salonslot_core::errors::{SalonError, SalonResult};

#[test]
fn test_salon_error_display() {
    let not_found = SalonError::NotFound("Technician not found".to_string());
    let validation = SalonError::Validation("Invalid input".to_string());
    let conflict = SalonError::Conflict("Slot already taken".to_string());
    let database = SalonError::Database(eyre::eyre!("Database connection failed"));
    let internal = SalonError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Technician not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(conflict.to_string(), "Booking conflict: Slot already taken");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let salon_error = SalonError::Internal(Box::new(io_error));

    assert!(salon_error.source().is_some());
}

#[test]
fn test_salon_result() {
    let result: SalonResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: SalonResult<i32> = Err(SalonError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let salon_error: SalonError = eyre::eyre!("pool timed out").into();

    assert!(matches!(salon_error, SalonError::Database(_)));
    assert!(salon_error.to_string().contains("pool timed out"));
}
