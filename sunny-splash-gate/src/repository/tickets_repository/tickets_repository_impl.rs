use super::{
    entity::{TicketFindEntity, TicketInsertEntity},
    PaymentReference, Ticket, TicketStatus, TicketsRepository, Visitor,
};
use crate::repository::{self, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{Database, IndexModel};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

const TICKETS: &str = "tickets";
const INDEX_NAME_USER_ID: &str = "user_id";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = TICKETS, "creating collection");
        database.create_collection(TICKETS).await?;

        let collection = database.collection::<Document>(TICKETS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_USER_ID.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "user_id": 1,
                        })
                        .options(
                            mongodb::options::IndexOptions::builder()
                                .name(INDEX_NAME_USER_ID.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = TICKETS,
                index = INDEX_NAME_USER_ID,
                "created index"
            );
        }

        Ok(Self { database })
    }

    fn date_to_bson(date: Date) -> DateTime {
        DateTime::from(date.midnight().assume_utc())
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        user_id: Uuid,
        visitors: &[Visitor],
        visit_date: Date,
        total_price: f64,
        payment: &PaymentReference,
        booking_date: OffsetDateTime,
    ) -> Result<ObjectId, repository::Error> {
        let insert_entity = TicketInsertEntity {
            user_id: user_id.into(),
            visitors,
            booking_date: booking_date.into(),
            visit_date: Self::date_to_bson(visit_date),
            status: TicketStatus::Booked,
            total_price,
            payment,
            qr_token: None,
            qr_payload: None,
        };

        let insert_result = self
            .database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(insert_entity)
            .await?;

        match insert_result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            _ => Err(Error::Mongo(
                mongodb::error::ErrorKind::Custom(Arc::new("invalid type of returned id")).into(),
            )),
        }
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, repository::Error> {
        let entity = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(Ticket::from);

        Ok(entity)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Ticket>, repository::Error> {
        let mut cursor = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find(doc! {
                "user_id": bson::Uuid::from(user_id),
            })
            .sort(doc! {
                "booking_date": -1,
            })
            .await?;

        let mut tickets = Vec::new();
        while let Some(entity) = cursor.try_next().await? {
            tickets.push(Ticket::from(entity));
        }

        Ok(tickets)
    }

    async fn set_qr_token(
        &self,
        id: ObjectId,
        qr_token: &str,
        qr_payload: &str,
    ) -> Result<(), repository::Error> {
        let update_result = self
            .database
            .collection::<Document>(TICKETS)
            .update_one(
                doc! {
                    "_id": id,
                    "qr_token": None as Option<&str>,
                },
                doc! {
                    "$set": {
                        "qr_token": qr_token,
                        "qr_payload": qr_payload,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn update_status(
        &self,
        id: ObjectId,
        allowed_from: &[TicketStatus],
        to: TicketStatus,
    ) -> Result<(), repository::Error> {
        let allowed_from = allowed_from
            .iter()
            .map(|status| status.as_ref())
            .collect::<Vec<_>>();

        let update_result = self
            .database
            .collection::<Document>(TICKETS)
            .update_one(
                doc! {
                    "_id": id,
                    "status": {
                        "$in": allowed_from,
                    },
                },
                doc! {
                    "$set": {
                        "status": to.as_ref(),
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
