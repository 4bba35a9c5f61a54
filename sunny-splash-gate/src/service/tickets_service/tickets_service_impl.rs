use super::{TicketsService, TicketsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, TicketStatus, TicketsRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(config: TicketsServiceConfig, repository: Arc<dyn TicketsRepository>) -> Self {
        Self { config, repository }
    }

    fn validate_booking(booking: &input::BookTicket) -> Result<(), Error> {
        if booking.visitors.is_empty() {
            return Err(Error::Validation("at least one visitor is required"));
        }
        if booking
            .visitors
            .iter()
            .any(|visitor| visitor.name.trim().is_empty())
        {
            return Err(Error::Validation("visitor name cannot be empty"));
        }
        if !booking.total_price.is_finite() || booking.total_price <= 0.0 {
            return Err(Error::Validation("total_price must be a positive amount"));
        }

        Ok(())
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    ///
    /// Books a ticket: checks the payment confirmation signature,
    /// reduces landmark vectors to biometric digests, stores the
    /// ticket and signs its QR token.
    ///
    /// Signing happens after the insert so a ticket is never issued
    /// a token it does not own. When the token turns out to be
    /// persisted already the stored one is returned unchanged.
    ///
    /// ### Errors
    /// - [Error::Validation] when the booking fields are unusable
    /// - [Error::PaymentRejected] when the confirmation signature
    ///   does not match the order and payment ids
    ///
    async fn book_ticket(
        &self,
        user_id: Uuid,
        booking: input::BookTicket,
    ) -> Result<output::Ticket, Error> {
        tracing::info!("booking ticket");

        Self::validate_booking(&booking)?;

        let payment_authentic = qr_protocol::verify_payment(
            &booking.payment.razorpay_order_id,
            &booking.payment.razorpay_payment_id,
            &booking.payment.razorpay_signature,
            &self.config.payment_secret,
        );
        if !payment_authentic {
            tracing::warn!(
                order_id = booking.payment.razorpay_order_id,
                "payment confirmation signature rejected"
            );
            return Err(Error::PaymentRejected);
        }

        let input::BookTicket {
            visitors,
            visit_date,
            total_price,
            payment,
        } = booking;

        let visitors = visitors
            .into_iter()
            .map(|visitor| {
                let biometric_hash = qr_protocol::reduce_landmarks(&visitor.landmark_vector);
                repository::Visitor {
                    name: visitor.name,
                    age: visitor.age,
                    photo: visitor.photo,
                    landmark_vector: (!visitor.landmark_vector.is_empty())
                        .then_some(visitor.landmark_vector),
                    biometric_hash,
                }
            })
            .collect::<Vec<_>>();

        let payment = repository::PaymentReference {
            razorpay_order_id: payment.razorpay_order_id,
            razorpay_payment_id: payment.razorpay_payment_id,
            razorpay_signature: payment.razorpay_signature,
        };

        let booking_date = OffsetDateTime::now_utc();
        let id = self
            .repository
            .insert(
                user_id,
                &visitors,
                visit_date,
                total_price,
                &payment,
                booking_date,
            )
            .await?;
        tracing::info!(%id, "inserted ticket");

        let signed = qr_protocol::sign_ticket(
            &id.to_hex(),
            &user_id.to_string(),
            visit_date,
            visitors.len() as u32,
            total_price,
            &self.config.park,
            OffsetDateTime::now_utc(),
            &self.config.qr_secret,
        )?;

        match self
            .repository
            .set_qr_token(id, &signed.token, &signed.payload_json)
            .await
        {
            Ok(()) => {}
            Err(repository::Error::NoDocumentUpdated) => {
                tracing::warn!(%id, "ticket already carries a token, returning stored one");
                let ticket = self
                    .repository
                    .find(id)
                    .await?
                    .ok_or(Error::TicketNotExist)?;
                return Ok(output::Ticket::from(ticket));
            }
            Err(err) => return Err(Error::Database(err)),
        }
        tracing::info!(%id, "signed ticket");

        Ok(output::Ticket {
            id: id.to_hex(),
            status: TicketStatus::Booked,
            visitors: visitors.into_iter().map(output::Visitor::from).collect(),
            visit_date,
            booking_date,
            total_price,
            qr_token: Some(signed.token),
            qr_payload: Some(signed.payload_json),
        })
    }

    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when `ticket_id` is not a valid id
    ///   or no ticket has it
    /// - [Error::TicketForbidden] when the ticket belongs to
    ///   another user
    ///
    async fn find_ticket(&self, user_id: Uuid, ticket_id: &str) -> Result<output::Ticket, Error> {
        tracing::info!(ticket_id, "finding ticket");

        let id = ObjectId::parse_str(ticket_id).map_err(|_| Error::TicketNotExist)?;
        let ticket = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        if ticket.user_id != user_id {
            return Err(Error::TicketForbidden);
        }

        Ok(output::Ticket::from(ticket))
    }

    async fn find_user_tickets(&self, user_id: Uuid) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!("finding user tickets");

        let tickets = self
            .repository
            .find_by_user(user_id)
            .await?
            .into_iter()
            .map(output::Ticket::from)
            .collect();

        Ok(tickets)
    }

    ///
    /// Cancels a booked or pending ticket. The transition is
    /// conditional on the current status so a ticket already used
    /// at the gate can never be cancelled afterwards.
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when `ticket_id` is not a valid id
    ///   or no ticket has it
    /// - [Error::TicketForbidden] when the ticket belongs to
    ///   another user
    /// - [Error::StatusTransitionRejected] when the ticket is
    ///   already completed or cancelled
    ///
    async fn cancel_ticket(
        &self,
        user_id: Uuid,
        ticket_id: &str,
    ) -> Result<output::Ticket, Error> {
        tracing::info!(ticket_id, "cancelling ticket");

        let id = ObjectId::parse_str(ticket_id).map_err(|_| Error::TicketNotExist)?;
        let mut ticket = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        if ticket.user_id != user_id {
            return Err(Error::TicketForbidden);
        }

        match self
            .repository
            .update_status(
                id,
                &[TicketStatus::Booked, TicketStatus::Pending],
                TicketStatus::Cancelled,
            )
            .await
        {
            Ok(()) => {
                tracing::info!(%id, "cancelled ticket");
                ticket.status = TicketStatus::Cancelled;
                Ok(output::Ticket::from(ticket))
            }
            Err(repository::Error::NoDocumentUpdated) => Err(Error::StatusTransitionRejected),
            Err(err) => Err(Error::Database(err)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{MockTicketsRepository, PaymentReference, Ticket, Visitor};
    use qr_protocol::Secret;
    use time::macros::date;

    const PARK: &str = "sunny-splash";
    const QR_SECRET: &str = "qr secret";
    const PAYMENT_SECRET: &str = "payment secret";

    fn service(repository: MockTicketsRepository) -> TicketsServiceImpl {
        TicketsServiceImpl::new(
            TicketsServiceConfig {
                park: PARK.to_string(),
                qr_secret: Secret::new(QR_SECRET).unwrap(),
                payment_secret: Secret::new(PAYMENT_SECRET).unwrap(),
            },
            Arc::new(repository),
        )
    }

    fn booking() -> input::BookTicket {
        let payment_secret = Secret::new(PAYMENT_SECRET).unwrap();
        let razorpay_signature = qr_protocol::sign_payment("order_1", "pay_1", &payment_secret);

        input::BookTicket {
            visitors: vec![
                input::Visitor {
                    name: "Ania".to_string(),
                    age: Some(9),
                    photo: None,
                    landmark_vector: vec![0.1, 0.2, 0.3],
                },
                input::Visitor {
                    name: "Tomek".to_string(),
                    age: None,
                    photo: None,
                    landmark_vector: Vec::new(),
                },
            ],
            visit_date: date!(2025 - 07 - 01),
            total_price: 1499.0,
            payment: input::PaymentConfirmation {
                razorpay_order_id: "order_1".to_string(),
                razorpay_payment_id: "pay_1".to_string(),
                razorpay_signature,
            },
        }
    }

    fn stored_ticket(id: ObjectId, user_id: Uuid, status: TicketStatus) -> Ticket {
        Ticket {
            _id: id,
            user_id,
            visitors: vec![Visitor {
                name: "Ania".to_string(),
                age: Some(9),
                photo: None,
                landmark_vector: Some(vec![0.1, 0.2, 0.3]),
                biometric_hash: Some("ab".repeat(32)),
            }],
            booking_date: OffsetDateTime::now_utc(),
            visit_date: date!(2025 - 07 - 01),
            status,
            total_price: 1499.0,
            payment: PaymentReference {
                razorpay_order_id: "order_1".to_string(),
                razorpay_payment_id: "pay_1".to_string(),
                razorpay_signature: "aa".repeat(32),
            },
            qr_token: Some("stored token".to_string()),
            qr_payload: Some("{}".to_string()),
        }
    }

    #[tokio::test]
    async fn book_ticket_signs_and_stores_token() {
        let id = ObjectId::new();
        let user_id = Uuid::new_v4();
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_insert()
            .once()
            .withf(|_, visitors, _, _, _, _| {
                visitors[0].biometric_hash.is_some()
                    && visitors[0].landmark_vector.is_some()
                    && visitors[1].biometric_hash.is_none()
                    && visitors[1].landmark_vector.is_none()
            })
            .returning(move |_, _, _, _, _, _| Ok(id));
        repository
            .expect_set_qr_token()
            .once()
            .returning(|_, _, _| Ok(()));
        let service = service(repository);

        let ticket = service.book_ticket(user_id, booking()).await.unwrap();

        assert_eq!(ticket.id, id.to_hex());
        assert_eq!(ticket.status, TicketStatus::Booked);
        assert!(ticket.visitors[0].has_biometric);
        assert!(!ticket.visitors[1].has_biometric);

        let token = ticket.qr_token.unwrap();
        let qr_secret = Secret::new(QR_SECRET).unwrap();
        let payload = qr_protocol::decode_token(&token, &qr_secret).unwrap();
        assert_eq!(payload.ticket_id, id.to_hex());
        assert_eq!(payload.user_id, user_id.to_string());
        assert_eq!(payload.visitors, 2);
        assert_eq!(payload.park, PARK);

        let mirror = ticket.qr_payload.unwrap();
        let mirrored_payload = serde_json::from_str::<qr_protocol::QrPayload>(&mirror).unwrap();
        assert_eq!(mirrored_payload, payload);
    }

    #[tokio::test]
    async fn book_ticket_invalid_payment_signature() {
        let mut repository = MockTicketsRepository::new();
        repository.expect_insert().never();
        let service = service(repository);

        let mut booking = booking();
        booking.payment.razorpay_signature = "00".repeat(32);

        let err = service
            .book_ticket(Uuid::new_v4(), booking)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::PaymentRejected));
    }

    #[tokio::test]
    async fn book_ticket_no_visitors() {
        let service = service(MockTicketsRepository::new());

        let mut booking = booking();
        booking.visitors.clear();

        let err = service
            .book_ticket(Uuid::new_v4(), booking)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn book_ticket_blank_visitor_name() {
        let service = service(MockTicketsRepository::new());

        let mut booking = booking();
        booking.visitors[0].name = "   ".to_string();

        let err = service
            .book_ticket(Uuid::new_v4(), booking)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn book_ticket_nonpositive_price() {
        let service = service(MockTicketsRepository::new());

        let mut booking = booking();
        booking.total_price = 0.0;

        let err = service
            .book_ticket(Uuid::new_v4(), booking)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn book_ticket_token_already_persisted_returns_stored_one() {
        let id = ObjectId::new();
        let user_id = Uuid::new_v4();
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_insert()
            .once()
            .returning(move |_, _, _, _, _, _| Ok(id));
        repository
            .expect_set_qr_token()
            .once()
            .returning(|_, _, _| Err(repository::Error::NoDocumentUpdated));
        repository
            .expect_find()
            .once()
            .returning(move |_| Ok(Some(stored_ticket(id, user_id, TicketStatus::Booked))));
        let service = service(repository);

        let ticket = service.book_ticket(user_id, booking()).await.unwrap();

        assert_eq!(ticket.qr_token, Some("stored token".to_string()));
    }

    #[tokio::test]
    async fn find_ticket_ok() {
        let id = ObjectId::new();
        let user_id = Uuid::new_v4();
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_find()
            .once()
            .returning(move |_| Ok(Some(stored_ticket(id, user_id, TicketStatus::Booked))));
        let service = service(repository);

        let ticket = service.find_ticket(user_id, &id.to_hex()).await.unwrap();

        assert_eq!(ticket.id, id.to_hex());
    }

    #[tokio::test]
    async fn find_ticket_malformed_id() {
        let service = service(MockTicketsRepository::new());

        let err = service
            .find_ticket(Uuid::new_v4(), "not an object id")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::TicketNotExist));
    }

    #[tokio::test]
    async fn find_ticket_not_exist() {
        let mut repository = MockTicketsRepository::new();
        repository.expect_find().once().returning(|_| Ok(None));
        let service = service(repository);

        let err = service
            .find_ticket(Uuid::new_v4(), &ObjectId::new().to_hex())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::TicketNotExist));
    }

    #[tokio::test]
    async fn find_ticket_of_another_user() {
        let id = ObjectId::new();
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_find()
            .once()
            .returning(move |_| Ok(Some(stored_ticket(id, Uuid::new_v4(), TicketStatus::Booked))));
        let service = service(repository);

        let err = service
            .find_ticket(Uuid::new_v4(), &id.to_hex())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::TicketForbidden));
    }

    #[tokio::test]
    async fn find_user_tickets_ok() {
        let user_id = Uuid::new_v4();
        let mut repository = MockTicketsRepository::new();
        repository.expect_find_by_user().once().returning(move |_| {
            Ok(vec![
                stored_ticket(ObjectId::new(), user_id, TicketStatus::Booked),
                stored_ticket(ObjectId::new(), user_id, TicketStatus::Cancelled),
            ])
        });
        let service = service(repository);

        let tickets = service.find_user_tickets(user_id).await.unwrap();

        assert_eq!(tickets.len(), 2);
    }

    #[tokio::test]
    async fn cancel_ticket_ok() {
        let id = ObjectId::new();
        let user_id = Uuid::new_v4();
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_find()
            .once()
            .returning(move |_| Ok(Some(stored_ticket(id, user_id, TicketStatus::Booked))));
        repository
            .expect_update_status()
            .once()
            .withf(|_, allowed_from, to| {
                allowed_from == [TicketStatus::Booked, TicketStatus::Pending]
                    && *to == TicketStatus::Cancelled
            })
            .returning(|_, _, _| Ok(()));
        let service = service(repository);

        let ticket = service.cancel_ticket(user_id, &id.to_hex()).await.unwrap();

        assert_eq!(ticket.status, TicketStatus::Cancelled);
    }

    #[tokio::test]
    async fn cancel_ticket_of_another_user() {
        let id = ObjectId::new();
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_find()
            .once()
            .returning(move |_| Ok(Some(stored_ticket(id, Uuid::new_v4(), TicketStatus::Booked))));
        repository.expect_update_status().never();
        let service = service(repository);

        let err = service
            .cancel_ticket(Uuid::new_v4(), &id.to_hex())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::TicketForbidden));
    }

    #[tokio::test]
    async fn cancel_ticket_already_completed() {
        let id = ObjectId::new();
        let user_id = Uuid::new_v4();
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_find()
            .once()
            .returning(move |_| Ok(Some(stored_ticket(id, user_id, TicketStatus::Completed))));
        repository
            .expect_update_status()
            .once()
            .returning(|_, _, _| Err(repository::Error::NoDocumentUpdated));
        let service = service(repository);

        let err = service
            .cancel_ticket(user_id, &id.to_hex())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::StatusTransitionRejected));
    }
}
