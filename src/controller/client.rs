use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        client::{ClientDto, CreateClientDto, PagedClientsDto, UpdateClientDto},
    },
    service::client::ClientService,
    state::AppState,
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "clients";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size", rename = "pageSize")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    16
}

/// Create a new client.
///
/// Stores a new client record with the given name, salary, and company
/// value. The access counter starts at zero.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Client creation data (name, salary, companyValue)
///
/// # Returns
/// - `201 Created` - Created client, with a Location header for the new resource
/// - `400 Bad Request` - Invalid client data
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/clients",
    tag = CLIENT_TAG,
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Successfully created client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let client = ClientService::new(&state.db).create(payload).await?;

    let location = format!("/clients/{}", client.id);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(client),
    ))
}

/// List clients with pagination.
///
/// Returns one page of live clients ordered by creation time descending,
/// plus total counts for navigation. Out-of-range paging parameters fall
/// back to page 1 and the default page size of 16.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (page and pageSize)
///
/// # Returns
/// - `200 OK` - Paged list of clients
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/clients",
    tag = CLIENT_TAG,
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("pageSize" = Option<i64>, Query, description = "Items per page (default: 16, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully listed clients", body = PagedClientsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn list_clients(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = ClientService::new(&state.db)
        .list(params.page, params.page_size)
        .await?;

    Ok(Json(page))
}

/// Get a single client by id.
///
/// Side effect: every successful fetch increments the client's access
/// counter by one.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Client id
///
/// # Returns
/// - `200 OK` - Client with the incremented access count
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No live client with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Client id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved client", body = ClientDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let client = ClientService::new(&state.db).get_by_id(id).await?;

    Ok(Json(client))
}

/// Update a client.
///
/// Overwrites the client's name, salary, and company value.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Client id
/// - `payload` - Client update data (name, salary, companyValue)
///
/// # Returns
/// - `200 OK` - Updated client
/// - `400 Bad Request` - Invalid client data
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No live client with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Client id")
    ),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Successfully updated client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let client = ClientService::new(&state.db).update(id, payload).await?;

    Ok(Json(client))
}

/// Soft delete a client.
///
/// Marks the client as deleted; it disappears from every read and list path
/// but is never physically removed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Client id
///
/// # Returns
/// - `204 No Content` - Client marked deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No live client with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Client id")
    ),
    responses(
        (status = 204, description = "Successfully deleted client"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    ClientService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
