use validator::Validate;

use crate::error::ApiError;

/// Runs the field rules declared on `payload` and hands it back when they pass.
pub fn validated<T: Validate>(payload: T) -> Result<T, ApiError> {
    payload.validate()?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::models::{BookingsQuery, CreateBookingRequest, CreateClassRequest};

    fn class_request(name: &str, instructor: &str) -> CreateClassRequest {
        CreateClassRequest {
            name: name.to_string(),
            date_time: "2025-06-15T10:00:00".to_string(),
            instructor: instructor.to_string(),
            available_slots: 5,
        }
    }

    fn booking_request(client_name: &str, client_email: &str) -> CreateBookingRequest {
        CreateBookingRequest {
            class_id: Uuid::new_v4(),
            client_name: client_name.to_string(),
            client_email: client_email.to_string(),
        }
    }

    #[test]
    fn test_class_request_requires_names() {
        assert!(validated(class_request("Yoga", "Asha")).is_ok());
        assert!(validated(class_request("", "Asha")).is_err());
        assert!(validated(class_request("Yoga", "")).is_err());
    }

    #[test]
    fn test_booking_request_rules() {
        assert!(validated(booking_request("Ravi", "ravi@example.com")).is_ok());
        assert!(validated(booking_request("", "ravi@example.com")).is_err());
        assert!(validated(booking_request("Ravi", "not-an-email")).is_err());
        assert!(validated(booking_request("Ravi", "ravi@")).is_err());
    }

    #[test]
    fn test_bookings_query_email() {
        let ok = BookingsQuery {
            email: "asha@example.com".to_string(),
        };
        let bad = BookingsQuery {
            email: "asha.example.com".to_string(),
        };
        assert!(validated(ok).is_ok());
        assert!(matches!(validated(bad), Err(ApiError::Validation(_))));
    }
}
