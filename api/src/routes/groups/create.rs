//! Handler for POST /groups.

use actix_web::{web, HttpResponse};

use gb_core::repositories::{GroupRepository, UserRepository};

use crate::dto::group::{CreateGroupRequest, GroupCreatedResponse};
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for `POST /groups`
///
/// Creates a group owned by the user cited in the payload.
///
/// # Request Body
///
/// ```json
/// {
///     "group_name": "new test group",
///     "description": "new test group description",
///     "user_id": 1
/// }
/// ```
///
/// # Responses
///
/// | Status | Condition | Body |
/// |---|---|---|
/// | 201 | all checks pass | `{ "group": { ... } }` |
/// | 401 | missing/invalid token | `{ "msg": "You need to be logged in" }` |
/// | 400 | first failing field rule | `{ "msg": <rule message> }` |
/// | 400 | unknown `user_id` | `{ "msg": "ID not found" }` |
///
/// Authentication is resolved by the [`AuthContext`] extractor before any
/// field is validated, so an unauthenticated request never learns which
/// fields were invalid.
pub async fn create_group<U, G>(
    auth: AuthContext,
    state: web::Data<AppState<U, G>>,
    request: web::Json<CreateGroupRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    G: GroupRepository + 'static,
{
    log::info!(
        "[{}] user {} requested group creation",
        auth.jti,
        auth.user_id
    );

    let group = state
        .group_service
        .create_group(request.into_inner().into())
        .await?;

    log::info!(
        "[{}] group {} created for user {}",
        auth.jti,
        group.id,
        group.user_id
    );

    Ok(HttpResponse::Created().json(GroupCreatedResponse { group }))
}
