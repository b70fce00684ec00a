use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::contact_forms::handlers;
use crate::features::contact_forms::services::ContactFormService;

/// Anonymous submission from the storefront
pub fn public_routes(service: Arc<ContactFormService>) -> Router {
    Router::new()
        .route("/api/contact-forms", post(handlers::submit_contact_form))
        .with_state(service)
}

/// Inbox management (editor or admin, behind auth middleware)
pub fn protected_routes(service: Arc<ContactFormService>) -> Router {
    Router::new()
        .route("/api/contact-forms", get(handlers::list_contact_forms))
        .route(
            "/api/contact-forms/{id}",
            get(handlers::get_contact_form).delete(handlers::delete_contact_form),
        )
        .route(
            "/api/contact-forms/{id}/read",
            put(handlers::mark_contact_form_read),
        )
        .with_state(service)
}
