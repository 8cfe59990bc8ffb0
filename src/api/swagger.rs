use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Search Service API",
        version = "1.0.0",
        description = "CRUD endpoints for user records stored in an Elasticsearch-compatible search engine.\n\nFailures are answered with `400` and a short plain-text message."
    ),
    paths(
        // Users
        crate::api::users::list_users,
        crate::api::users::create_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Search engine
        crate::api::info::get_info,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::User,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, search, update and delete user records."),
        (name = "Search Engine", description = "Passthrough of the search engine's own info payload."),
        (name = "Health", description = "Health check and request counters."),
    )
)]
pub struct ApiDoc;
