use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::{Json, response::IntoResponse};
use tracing::{debug, info};

use crate::{
    AppState,
    error::ApiError,
    models::{
        Booking, BookingCreated, BookingsQuery, ClassCreated, ClassView, CreateBookingRequest,
        CreateClassRequest, NewClass,
    },
    store::NewBooking,
    timezone::{parse_local, to_reference},
    validation::validated,
};

#[utoipa::path(get, path = "/", tag = "booking")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Fitness Class Booking API",
        "endpoints": {
            "/classes": "Create (POST) or list (GET) fitness classes",
            "/book": "Book a slot in a class (POST)",
            "/bookings": "List bookings for a client email (GET)"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "booking")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "booking")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    post,
    path = "/classes",
    request_body = CreateClassRequest,
    responses(
        (status = 200, description = "Class created", body = ClassCreated),
        (status = 400, description = "Invalid data format")
    ),
    tag = "booking"
)]
pub async fn create_class(
    State(state): State<AppState>,
    payload: Result<Json<CreateClassRequest>, JsonRejection>,
) -> Result<Json<ClassCreated>, ApiError> {
    let Json(request) = payload?;
    let request = validated(request)?;

    let local = parse_local(&request.date_time)?;
    let scheduled_at = to_reference(local, state.zone)?;

    let class = state.store.insert_class(NewClass {
        name: request.name,
        scheduled_at,
        instructor: request.instructor,
        available_slots: request.available_slots,
    })?;
    info!(
        class_id = %class.id,
        name = %class.name,
        %scheduled_at,
        slots = class.available_slots,
        "created class"
    );

    Ok(Json(ClassCreated { id: class.id }))
}

#[utoipa::path(
    get,
    path = "/classes",
    responses(
        (status = 200, description = "All classes with local schedule", body = [ClassView])
    ),
    tag = "booking"
)]
pub async fn list_classes(State(state): State<AppState>) -> Result<Json<Vec<ClassView>>, ApiError> {
    let classes: Vec<ClassView> = state
        .store
        .list_classes()?
        .iter()
        .map(|class| ClassView::new(class, state.zone))
        .collect();
    debug!(count = classes.len(), "listed classes");
    Ok(Json(classes))
}

#[utoipa::path(
    post,
    path = "/book",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Slot booked", body = BookingCreated),
        (status = 400, description = "Invalid data format or no slots available"),
        (status = 404, description = "Class not found")
    ),
    tag = "booking"
)]
pub async fn book_class(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<Json<BookingCreated>, ApiError> {
    let Json(request) = payload?;
    let request = validated(request)?;

    let booking = state.store.book(NewBooking {
        class_id: request.class_id,
        client_name: request.client_name,
        client_email: request.client_email,
    })?;
    info!(booking_id = %booking.id, class_id = %booking.class_id, "booked class");

    Ok(Json(BookingCreated {
        booking_id: booking.id,
    }))
}

#[utoipa::path(
    get,
    path = "/bookings",
    params(
        ("email" = String, Query, description = "Client email, matched exactly")
    ),
    responses(
        (status = 200, description = "Bookings made with this email", body = [Booking]),
        (status = 400, description = "Missing or malformed email")
    ),
    tag = "booking"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    query: Result<Query<BookingsQuery>, QueryRejection>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let Query(query) = query?;
    let query = validated(query)?;
    let bookings = state.store.bookings_by_email(&query.email)?;
    debug!(count = bookings.len(), "listed bookings");
    Ok(Json(bookings))
}
