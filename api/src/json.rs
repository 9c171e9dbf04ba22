use axum::extract::{FromRequest, Request, rejection::JsonRejection};

use crate::error::AppError;

// We define our own `Json` extractor that customizes the error from
// `axum::Json` so that body problems use the same error envelope as
// everything else.
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            // convert the error from `axum::Json` into whatever we want
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod test {
    use axum::{body::Body, http::header};
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Payload {
        content: String,
    }

    fn request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn well_formed_body_deserializes() {
        let result = Json::<Payload>::from_request(request(r#"{"content":"hi"}"#), &()).await;

        match result {
            Ok(Json(payload)) => assert_eq!(payload.content, "hi"),
            Err(_) => panic!("expected the body to deserialize"),
        }
    }

    #[tokio::test]
    async fn missing_field_is_a_validation_error() {
        let result = Json::<Payload>::from_request(request("{}"), &()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn invalid_json_is_a_validation_error() {
        let result = Json::<Payload>::from_request(request("{not json"), &()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
