use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use crate::App;

use super::{
    create::create_comment, delete::delete_comment, get::get_comment, list::list_comments,
    update::{patch_comment, replace_comment},
};

// Conventional resource paths: list/create on the collection, the rest on
// the item keyed by `id_comment`. Trailing slashes are part of the contract.
pub fn route() -> Router<App> {
    Router::<App>::new()
        .route("/comments/", get(list_comments))
        .route("/comments/", post(create_comment))
        .route("/comments/{id}/", get(get_comment))
        .route("/comments/{id}/", put(replace_comment))
        .route("/comments/{id}/", patch(patch_comment))
        .route("/comments/{id}/", delete(delete_comment))
}

#[cfg(test)]
mod test {
    use super::*;

    // Axum panics on conflicting or malformed paths when the router is
    // built, so constructing it is the whole test.
    #[test]
    fn routes_are_well_formed() {
        let _ = route();
    }
}
