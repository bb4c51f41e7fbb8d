use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;

use crate::catalog::CatalogReader;
use crate::dto::api::ErrorResponse;
use crate::forms::main::CardFilterForm;
use crate::models::browse::BrowseSettings;
use crate::routes::pagination_store;
use crate::services::ServiceError;
use crate::services::api::list_cards;

#[get("/v1/cards")]
pub async fn api_v1_cards(
    request: HttpRequest,
    catalog: web::Data<dyn CatalogReader>,
    settings: web::Data<BrowseSettings>,
) -> impl Responder {
    let query = request.query_string();

    let filters = match CardFilterForm::from_query(query) {
        Ok(form) => form.into(),
        Err(err) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: err.to_string(),
            });
        }
    };
    let store = pagination_store(query, &settings);

    match list_cards(catalog.get_ref(), &store, filters, &settings).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
        }),
        Err(err) => {
            error!("Failed to list cards: {err}");
            HttpResponse::BadGateway().json(ErrorResponse {
                error: err.to_string(),
            })
        }
    }
}
