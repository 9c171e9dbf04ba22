use axum::{Json, debug_handler, extract::State, http::StatusCode};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::{
    App,
    comments::models::{Comment, NewComment},
    error::AppError,
    schema::comments,
};

#[debug_handler]
pub async fn create_comment(
    State(ctx): State<App>,
    crate::json::Json(comment): crate::json::Json<NewComment>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let mut conn = ctx.diesel.get().await?;

    let created = diesel::insert_into(comments::table)
        .values(&comment)
        .returning(Comment::as_returning())
        .get_result(&mut conn)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}
