//! HTTP handlers and shared rendering helpers.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use log::error;
use tera::{Context, Tera};

use crate::domain::card::CardFilters;
use crate::dto::main::SidebarView;
use crate::forms::main::CardFilterForm;
use crate::models::browse::BrowseSettings;
use crate::url_state::{MemoryLocation, PaginationUrlStore, StoreOptions};

pub mod api;
pub mod cards;
pub mod main;

/// Renders `template` with `context`, answering 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            error!("Failed to render template '{template}': {err:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context shared by every page extending `base.html`.
///
/// The sidebar is always rendered closed; `assets/app.js` opens it.
pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context.insert("sidebar", &SidebarView::closed());
    context
}

/// Pagination store over the request's query string.
pub fn pagination_store(
    query: &str,
    settings: &BrowseSettings,
) -> PaginationUrlStore<MemoryLocation> {
    PaginationUrlStore::with_options(
        MemoryLocation::new(query),
        StoreOptions {
            default_page_size: settings.default_page_size,
            ..StoreOptions::default()
        },
    )
}

/// Filters from the query string. Malformed or invalid filters are ignored so
/// that a bad link still shows the default listing.
pub fn filters_from_query(query: &str) -> CardFilters {
    match CardFilterForm::from_query(query) {
        Ok(form) => form.into(),
        Err(err) => {
            log::warn!("Ignoring card filters: {err}");
            CardFilters::default()
        }
    }
}
