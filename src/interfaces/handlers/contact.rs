use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::contact::ContactForm,
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(state, form))]
pub async fn create_contact_message(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<impl Responder, AppError> {
    let response = state.contact_handler
        .create_contact_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn admin_get_contact_messages(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let response = state.contact_handler.list_contact_messages().await?;

    Ok(HttpResponse::Ok().json(response))
}
