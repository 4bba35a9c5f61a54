use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::{require_all_roles, Role, User},
    dto::{input, output},
    error::Error,
    service::{tickets_service::TicketsService, verification_service::VerificationService},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/tickets", post(book_ticket).get(find_user_tickets))
        .route("/api/v1/tickets/verify", post(verify_ticket))
        .route("/api/v1/tickets/:ticket_id", get(find_ticket))
        .route("/api/v1/tickets/:ticket_id/cancel", post(cancel_ticket))
        .route_layer(application_middleware.auth.clone())
}

async fn book_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Json(booking): Json<input::BookTicket>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let ticket = tickets_service.book_ticket(user.id(), booking).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

async fn find_user_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<output::Ticket>>, Error> {
    let tickets = tickets_service.find_user_tickets(user.id()).await?;

    Ok(Json(tickets))
}

async fn find_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(ticket_id): Path<String>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = tickets_service.find_ticket(user.id(), &ticket_id).await?;

    Ok(Json(ticket))
}

async fn cancel_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(ticket_id): Path<String>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = tickets_service.cancel_ticket(user.id(), &ticket_id).await?;

    Ok(Json(ticket))
}

///
/// Gate side endpoint. Whatever the scanned token contains, the
/// response is a tagged verification result - untrusted input must
/// never bubble up as an error from here.
///
async fn verify_ticket(
    State(verification_service): State<Arc<dyn VerificationService>>,
    Extension(user): Extension<User>,
    Json(scan): Json<input::VerifyTicket>,
) -> Result<Json<output::Verification>, Error> {
    require_all_roles(&user, &[Role::VerifyTickets])?;

    let verification = verification_service.verify_ticket(scan).await?;

    Ok(Json(verification))
}
