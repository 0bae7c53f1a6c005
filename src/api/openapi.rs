//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{CreateUser, UpdateUser, User};
use crate::types::MessageResponse;

/// OpenAPI documentation for the User Management API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        version = "0.1.0",
        description = "CRUD API for users backed by SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            CreateUser,
            UpdateUser,
            MessageResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
