use utoipa::OpenApi;

use crate::models::{
    Booking, BookingCreated, ClassCreated, ClassView, CreateBookingRequest, CreateClassRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::create_class,
        crate::handlers::list_classes,
        crate::handlers::book_class,
        crate::handlers::list_bookings
    ),
    components(schemas(
        CreateClassRequest,
        ClassCreated,
        ClassView,
        CreateBookingRequest,
        BookingCreated,
        Booking
    )),
    tags(
        (name = "booking", description = "Fitness class booking operations")
    ),
)]
pub struct ApiDoc;
