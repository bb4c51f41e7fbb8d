use actix_web::http::StatusCode;
use actix_web::{Responder, get, web};
use log::error;
use tera::Tera;

use crate::catalog::CatalogReader;
use crate::routes::{base_context, render_template, render_template_with_status};
use crate::services::ServiceError;
use crate::services::cards::load_card_page;

#[get("/cards/{id}")]
pub async fn show_card(
    id: web::Path<String>,
    catalog: web::Data<dyn CatalogReader>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let id = id.into_inner();

    match load_card_page(catalog.get_ref(), &id).await {
        Ok(data) => {
            let mut context = base_context("card");
            context.insert("page", &data);
            render_template(&tera, "cards/show.html", &context)
        }
        Err(ServiceError::NotFound) => {
            let mut context = base_context("card");
            context.insert("card_id", &id);
            render_template_with_status(
                &tera,
                "errors/not_found.html",
                &context,
                StatusCode::NOT_FOUND,
            )
        }
        Err(err) => {
            error!("Failed to load card {id}: {err}");
            let mut context = base_context("card");
            context.insert("message", &format!("Error loading card: {err}"));
            render_template_with_status(
                &tera,
                "errors/error.html",
                &context,
                StatusCode::BAD_GATEWAY,
            )
        }
    }
}
