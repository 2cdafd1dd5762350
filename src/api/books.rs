//! Book inventory endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::book::{Book, BookIdQuery},
};

/// List the full inventory
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Full inventory in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.inventory.list_books().await?;
    Ok(Json(books))
}

/// Get a single book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Matching book", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.inventory.get_book(&id).await?;
    Ok(Json(book))
}

/// Register a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed payload", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    payload: Result<Json<Book>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Book>)> {
    // A rejected body gets an explicit 400 with a message; it is not
    // swallowed.
    let Json(book) = payload?;

    let created = state.services.inventory.create_book(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Check out one copy of a book
#[utoipa::path(
    patch,
    path = "/checkout",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Missing id or no copies available", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    Query(query): Query<BookIdQuery>,
) -> AppResult<Json<Book>> {
    let id = query.id.ok_or(AppError::MissingParameter("id"))?;

    let book = state.services.inventory.checkout_book(&id).await?;
    Ok(Json(book))
}

/// Return one copy of a book
#[utoipa::path(
    patch,
    path = "/return",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Missing id query parameter", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Query(query): Query<BookIdQuery>,
) -> AppResult<Json<Book>> {
    let id = query.id.ok_or(AppError::MissingParameter("id"))?;

    let book = state.services.inventory.return_book(&id).await?;
    Ok(Json(book))
}
