use std::collections::HashMap;

use axum::{Json, http::StatusCode, response::IntoResponse};
use diesel_async::pooled_connection::deadpool::PoolError;
use serde::Serialize;
use serde_json::Value;

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("database error: {0}")]
    Database(diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(PoolError),
}

impl Serialize for ServerError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("message", &self.to_string())?;
        map.end()
    }
}

#[derive(Serialize)]
pub enum AppError {
    /// The requested record does not exist.
    NotFound,

    /// The request body is missing a required field or a field has the
    /// wrong type.
    Validation(String),

    ServerError {
        error: ServerError,

        #[serde(skip_serializing)]
        #[cfg(debug_assertions)]
        backtrace: Option<backtrace::Backtrace>,
    },

    Unhandled(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    msg: Option<String>,

    #[cfg(debug_assertions)]
    #[serde(skip_serializing_if = "Option::is_none")]
    debug_info: Option<HashMap<&'static str, Value>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, error_response) = match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    code: "NOT_FOUND".into(),
                    msg: Some("Comment not found".into()),
                    #[cfg(debug_assertions)]
                    debug_info: None,
                },
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    code: "VALIDATION_ERR".into(),
                    msg: Some(msg),
                    #[cfg(debug_assertions)]
                    debug_info: None,
                },
            ),
            AppError::ServerError {
                error,
                #[cfg(debug_assertions)]
                backtrace,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                #[cfg(debug_assertions)]
                {
                    let frames_info = backtrace.as_ref().map(filter_backtrace).unwrap_or_default();
                    ErrorResponse {
                        code: "DATABASE_ERR".into(),
                        msg: Some("Database error".into()),
                        debug_info: Some(HashMap::from([
                            ("backtrace", serde_json::to_value(&frames_info).unwrap()),
                            ("error", serde_json::to_value(&error).unwrap()),
                        ])),
                    }
                },
                #[cfg(not(debug_assertions))]
                ErrorResponse {
                    code: "SERVER_ERR".into(),
                    msg: Some("Internal server error".into()),
                },
            ),
            AppError::Unhandled(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    code: "ERR".into(),
                    msg: Some(e),
                    #[cfg(debug_assertions)]
                    debug_info: None,
                },
            ),
        };

        (status_code, Json(error_response)).into_response()
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::NotFound => AppError::NotFound,
            e => AppError::ServerError {
                error: ServerError::Database(e),

                #[cfg(debug_assertions)]
                backtrace: Some(backtrace::Backtrace::new()),
            },
        }
    }
}

impl From<PoolError> for AppError {
    fn from(e: PoolError) -> Self {
        AppError::ServerError {
            error: ServerError::Pool(e),

            #[cfg(debug_assertions)]
            backtrace: Some(backtrace::Backtrace::new()),
        }
    }
}

impl From<&'static str> for AppError {
    fn from(e: &'static str) -> Self {
        AppError::Unhandled(e.into())
    }
}

#[cfg(debug_assertions)]
#[derive(Serialize, Debug)]
struct FrameInfo {
    name: String,
    loc: String,
}

#[cfg(debug_assertions)]
fn filter_backtrace(backtrace: &backtrace::Backtrace) -> Vec<FrameInfo> {
    const MODULE_PREFIX: &str = concat!(env!("CARGO_PKG_NAME"), "::");
    let mut frames_info: Vec<FrameInfo> = Vec::new();

    for frame in backtrace.frames() {
        for symbol in frame.symbols() {
            if let (Some(name), Some(filename), Some(lineno)) = (
                symbol.name().map(|n| n.to_string()),
                symbol.filename().map(|f| f.to_owned()),
                symbol.lineno(),
            ) {
                if name.contains(MODULE_PREFIX) {
                    frames_info.push(FrameInfo {
                        name,
                        loc: format!("{}:{}", filename.to_str().unwrap(), lineno),
                    });
                }
            }
        }
    }

    return frames_info;
}
