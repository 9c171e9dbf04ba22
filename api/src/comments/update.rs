use axum::{
    Json, debug_handler,
    extract::{Path, State},
};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::{
    App,
    comments::models::{Comment, NewComment, UpdateComment},
    error::AppError,
    schema::comments,
};

/// PUT: the full field set is required and every non-key column is
/// overwritten.
#[debug_handler]
pub async fn replace_comment(
    State(ctx): State<App>,
    Path(id): Path<i32>,
    crate::json::Json(comment): crate::json::Json<NewComment>,
) -> Result<Json<Comment>, AppError> {
    let mut conn = ctx.diesel.get().await?;

    let updated = diesel::update(comments::table.find(id))
        .set(&comment)
        .returning(Comment::as_returning())
        .get_result(&mut conn)
        .await
        .optional()?
        .ok_or(AppError::NotFound)?;

    Ok(Json(updated))
}

/// PATCH: only the supplied fields are overwritten.
#[debug_handler]
pub async fn patch_comment(
    State(ctx): State<App>,
    Path(id): Path<i32>,
    crate::json::Json(changes): crate::json::Json<UpdateComment>,
) -> Result<Json<Comment>, AppError> {
    let mut conn = ctx.diesel.get().await?;

    // A patch with no fields changes nothing, but the record must still
    // exist for it to succeed.
    if changes.is_empty() {
        let comment = comments::table
            .find(id)
            .select(Comment::as_select())
            .first(&mut conn)
            .await
            .optional()?
            .ok_or(AppError::NotFound)?;

        return Ok(Json(comment));
    }

    let updated = diesel::update(comments::table.find(id))
        .set(&changes)
        .returning(Comment::as_returning())
        .get_result(&mut conn)
        .await
        .optional()?
        .ok_or(AppError::NotFound)?;

    Ok(Json(updated))
}
