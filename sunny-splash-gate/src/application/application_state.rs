use super::ApplicationEnv;
use crate::{
    repository::TicketsRepositoryImpl,
    service::{
        tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
        verification_service::{
            VerificationService, VerificationServiceConfig, VerificationServiceImpl,
        },
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
    pub verification_service: Arc<dyn VerificationService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(db).await?;
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("creating services");
    let config = TicketsServiceConfig {
        park: env.park.clone(),
        qr_secret: env.qr_secret.clone(),
        payment_secret: env.payment_secret.clone(),
    };
    let tickets_service = TicketsServiceImpl::new(config, tickets_repository.clone());
    let tickets_service: Arc<dyn TicketsService> = Arc::new(tickets_service);

    let config = VerificationServiceConfig {
        qr_secret: env.qr_secret.clone(),
    };
    let verification_service = VerificationServiceImpl::new(config, tickets_repository);
    let verification_service: Arc<dyn VerificationService> = Arc::new(verification_service);

    Ok((
        ApplicationState {
            tickets_service,
            verification_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
