use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::timezone::format_local;

/// A class as held by the store. `scheduled_at` is always UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessClass {
    pub id: Uuid,
    pub name: String,
    pub scheduled_at: DateTime<Utc>,
    pub instructor: String,
    pub available_slots: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewClass {
    pub name: String,
    pub scheduled_at: DateTime<Utc>,
    pub instructor: String,
    pub available_slots: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub class_id: Uuid,
    pub client_name: String,
    pub client_email: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    #[validate(length(min = 1))]
    pub name: String,
    /// Local wall-clock time without offset.
    #[schema(example = "2025-06-15T10:00:00")]
    pub date_time: String,
    #[validate(length(min = 1))]
    pub instructor: String,
    pub available_slots: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ClassCreated {
    pub id: Uuid,
}

/// A class as returned to clients, with `dateTime` in the configured local zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassView {
    pub id: Uuid,
    pub name: String,
    #[schema(example = "2025-06-15T10:00:00+05:30")]
    pub date_time: String,
    pub instructor: String,
    pub available_slots: u32,
}

impl ClassView {
    pub fn new(class: &FitnessClass, zone: Tz) -> Self {
        Self {
            id: class.id,
            name: class.name.clone(),
            date_time: format_local(class.scheduled_at, zone),
            instructor: class.instructor.clone(),
            available_slots: class.available_slots,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    pub class_id: Uuid,
    #[validate(length(min = 1))]
    pub client_name: String,
    #[validate(email)]
    pub client_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct BookingCreated {
    pub booking_id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BookingsQuery {
    #[validate(email)]
    pub email: String,
}
