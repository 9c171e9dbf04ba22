use axum::{
    Json, debug_handler,
    extract::{Path, State},
};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::{App, comments::models::Comment, error::AppError, schema::comments};

#[debug_handler]
pub async fn get_comment(
    State(ctx): State<App>,
    Path(id): Path<i32>,
) -> Result<Json<Comment>, AppError> {
    let mut conn = ctx.diesel.get().await?;

    let comment = comments::table
        .find(id)
        .select(Comment::as_select())
        .first(&mut conn)
        .await
        .optional()?
        .ok_or(AppError::NotFound)?;

    Ok(Json(comment))
}
