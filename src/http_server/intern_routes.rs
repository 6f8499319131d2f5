//! Intern HTTP Routes
//!
//! REST endpoints for intern records, merged under `/api`.
//!
//! - `POST   /interns`     create
//! - `GET    /interns`     list with `q`, `role`, `status`, `page`, `limit`
//! - `GET    /interns/:id` fetch one
//! - `PATCH  /interns/:id` partial update
//! - `DELETE /interns/:id` delete
//!
//! The collection path also answers with a trailing slash.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use super::errors::{route_not_found, ApiResult};
use crate::query::{ListQuery, Page};
use crate::schema::Intern;
use crate::service::{DeleteConfirmation, InternService};

// ==================
// Intern Routes
// ==================

/// Create intern routes
pub fn intern_routes(service: Arc<InternService>) -> Router {
    let collection = get(list_interns_handler)
        .post(create_intern_handler)
        .fallback(route_not_found);

    Router::new()
        .route("/interns", collection.clone())
        .route("/interns/", collection)
        .route(
            "/interns/:id",
            get(get_intern_handler)
                .patch(update_intern_handler)
                .delete(delete_intern_handler)
                .fallback(route_not_found),
        )
        .with_state(service)
}

// ==================
// Handlers
// ==================

async fn create_intern_handler(
    State(service): State<Arc<InternService>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Intern>)> {
    let Json(body) = body?;
    let intern = service.create(&body)?;
    Ok((StatusCode::CREATED, Json(intern)))
}

async fn list_interns_handler(
    State(service): State<Arc<InternService>>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<Page<Intern>>> {
    let Query(params) = params?;
    let query = ListQuery::parse(&params)?;
    Ok(Json(service.list(&query)?))
}

async fn get_intern_handler(
    State(service): State<Arc<InternService>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Intern>> {
    let Path(id) = id?;
    Ok(Json(service.get(&id)?))
}

async fn update_intern_handler(
    State(service): State<Arc<InternService>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Intern>> {
    let Path(id) = id?;
    let Json(body) = body?;
    Ok(Json(service.update(&id, &body)?))
}

async fn delete_intern_handler(
    State(service): State<Arc<InternService>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DeleteConfirmation>> {
    let Path(id) = id?;
    Ok(Json(service.delete(&id)?))
}
