use actix_web::{HttpRequest, Responder, get, web};
use tera::Tera;

use crate::catalog::CatalogReader;
use crate::models::browse::BrowseSettings;
use crate::routes::{base_context, filters_from_query, pagination_store, render_template};
use crate::services::main::load_index_page;

#[get("/")]
pub async fn show_index(
    request: HttpRequest,
    catalog: web::Data<dyn CatalogReader>,
    tera: web::Data<Tera>,
    settings: web::Data<BrowseSettings>,
) -> impl Responder {
    let query = request.query_string();
    let store = pagination_store(query, &settings);
    let filters = filters_from_query(query);

    let data = load_index_page(catalog.get_ref(), &store, filters, &settings).await;

    let mut context = base_context("index");
    context.insert("page", &data);
    render_template(&tera, "main/index.html", &context)
}
