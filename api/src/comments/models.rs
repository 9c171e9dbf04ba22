use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// The model that maps to the database table, and the payload returned to the
// client. `id_comment` is assigned by the database and never taken from the
// request.
#[derive(Queryable, Selectable, Debug, Serialize, Clone)]
#[diesel(table_name = crate::schema::comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Comment {
    pub id_comment: i32,
    pub id_publicacion: i32,
    pub id_usuario: i32,
    pub content: String,
    pub creation_date: DateTime<Utc>,
}

/// The body of POST and PUT: every non-key field is required. The two
/// reference ids are opaque, any integer is accepted even if it points at
/// nothing.
#[derive(Insertable, AsChangeset, Debug, Deserialize)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment {
    pub id_publicacion: i32,
    pub id_usuario: i32,
    pub content: String,
    pub creation_date: DateTime<Utc>,
}

/// The body of PATCH: fields left out of the request stay untouched.
#[derive(AsChangeset, Debug, Deserialize)]
#[diesel(table_name = crate::schema::comments)]
pub struct UpdateComment {
    pub id_publicacion: Option<i32>,
    pub id_usuario: Option<i32>,
    pub content: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl UpdateComment {
    // Diesel rejects an empty changeset, so the handler needs to know whether
    // anything was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.id_publicacion.is_none()
            && self.id_usuario.is_none()
            && self.content.is_none()
            && self.creation_date.is_none()
    }
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn create_body_accepts_the_full_field_set() {
        let body = r#"{
            "id_publicacion": 1,
            "id_usuario": 2,
            "content": "hi",
            "creation_date": "2024-01-01T00:00:00Z"
        }"#;

        let comment: NewComment = serde_json::from_str(body).unwrap();

        assert_eq!(comment.id_publicacion, 1);
        assert_eq!(comment.id_usuario, 2);
        assert_eq!(comment.content, "hi");
        assert_eq!(
            comment.creation_date,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn create_body_requires_every_field() {
        let body = r#"{"id_publicacion": 1, "id_usuario": 2, "creation_date": "2024-01-01T00:00:00Z"}"#;

        assert!(serde_json::from_str::<NewComment>(body).is_err());
    }

    #[test]
    fn create_body_rejects_mistyped_fields() {
        let body = r#"{
            "id_publicacion": "one",
            "id_usuario": 2,
            "content": "hi",
            "creation_date": "2024-01-01T00:00:00Z"
        }"#;

        assert!(serde_json::from_str::<NewComment>(body).is_err());
    }

    #[test]
    fn record_serializes_with_rfc3339_timestamp() {
        let comment = Comment {
            id_comment: 1,
            id_publicacion: 1,
            id_usuario: 2,
            content: "hi".into(),
            creation_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };

        assert_eq!(
            serde_json::to_value(&comment).unwrap(),
            json!({
                "id_comment": 1,
                "id_publicacion": 1,
                "id_usuario": 2,
                "content": "hi",
                "creation_date": "2024-01-01T00:00:00Z",
            })
        );
    }

    #[test]
    fn partial_update_leaves_missing_fields_unset() {
        let changes: UpdateComment = serde_json::from_str(r#"{"content": "edited"}"#).unwrap();

        assert_eq!(changes.content.as_deref(), Some("edited"));
        assert!(changes.id_publicacion.is_none());
        assert!(changes.id_usuario.is_none());
        assert!(changes.creation_date.is_none());
        assert!(!changes.is_empty());
    }

    #[test]
    fn update_with_no_fields_is_empty() {
        let changes: UpdateComment = serde_json::from_str("{}").unwrap();

        assert!(changes.is_empty());
    }
}
