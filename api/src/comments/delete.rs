use axum::{
    debug_handler,
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::{App, error::AppError, schema::comments};

#[debug_handler]
pub async fn delete_comment(
    State(ctx): State<App>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let mut conn = ctx.diesel.get().await?;

    let deleted = diesel::delete(comments::table.find(id))
        .execute(&mut conn)
        .await?;

    if deleted == 0 {
        return Err(AppError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
