use axum::{Json, debug_handler, extract::State};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::{App, comments::models::Comment, error::AppError, schema::comments};

// Every record, in whatever order the database hands them back. No paging.
#[debug_handler]
pub async fn list_comments(State(ctx): State<App>) -> Result<Json<Vec<Comment>>, AppError> {
    let mut conn = ctx.diesel.get().await?;

    let all = comments::table
        .select(Comment::as_select())
        .load(&mut conn)
        .await?;

    Ok(Json(all))
}
