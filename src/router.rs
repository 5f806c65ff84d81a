//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Register a user, NGO, or event account
/// - `POST /api/auth/login` - Log in and establish a session
/// - `POST /api/auth/logout` - Clear the session
/// - `GET /api/auth/user` - Get the current session identity
/// - `GET /api/admin/users` - List every user (admin)
/// - `GET /api/admin/causes` - List every cause (admin)
/// - `PATCH /api/admin/verify/{auth_id}` - Verify an account (admin)
/// - `PATCH /api/admin/unverify/{auth_id}` - Unverify an account (admin)
/// - `DELETE /api/admin/delete/user/{user_id}` - Cascading user delete (admin)
/// - `DELETE /api/admin/delete/cause/{cause_id}` - Cascading cause delete (admin)
/// - `GET /api/causes` - Public listing of verified causes
/// - `GET /api/causes/{cause_id}` - Public cause detail
/// - `POST /api/causes/{cause_id}/donations` - Donate to a cause
/// - `POST /api/causes/{cause_id}/feedback` - Leave feedback on a cause
/// - `POST /api/causes/{cause_id}/volunteer` - Volunteer for a cause
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served
/// once state and the session/CORS layers are attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Servia", description = "Servia API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::admin::ADMIN_TAG, description = "Admin verification and deletion routes"),
        (name = controller::cause::CAUSE_TAG, description = "Public cause listing routes"),
        (name = controller::activity::ACTIVITY_TAG, description = "Donation, feedback, and volunteering routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::admin::get_users))
        .routes(routes!(controller::admin::get_causes))
        .routes(routes!(controller::admin::verify))
        .routes(routes!(controller::admin::unverify))
        .routes(routes!(controller::admin::delete_user))
        .routes(routes!(controller::admin::delete_cause))
        .routes(routes!(controller::cause::list_causes))
        .routes(routes!(controller::cause::get_cause))
        .routes(routes!(controller::activity::donate))
        .routes(routes!(controller::activity::leave_feedback))
        .routes(routes!(controller::activity::volunteer))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
