//! Axum route configuration and API documentation.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        auth::login,
        comment::{create_comment, delete_comment, get_comments_for_moderation, moderate_comment},
        menu::{get_day, get_week, upsert_menu},
        ranking::get_weekly_ranking,
        vote::submit_vote,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    crate::controller::vote::submit_vote,
    crate::controller::menu::get_week,
    crate::controller::menu::get_day,
    crate::controller::menu::upsert_menu,
    crate::controller::ranking::get_weekly_ranking,
    crate::controller::comment::create_comment,
    crate::controller::comment::get_comments_for_moderation,
    crate::controller::comment::moderate_comment,
    crate::controller::comment::delete_comment,
    crate::controller::auth::login,
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/vote", post(submit_vote))
        .route("/api/week", get(get_week))
        .route("/api/day/{date}", get(get_day))
        .route("/api/weekly_ranking", get(get_weekly_ranking))
        .route("/api/comment", post(create_comment))
        .route("/api/admin/login", post(login))
        .route("/api/admin/menu", post(upsert_menu))
        .route("/api/admin/comments/{date}", get(get_comments_for_moderation))
        .route("/api/admin/comment/{id}/visibility", put(moderate_comment))
        .route("/api/admin/comment/{id}", delete(delete_comment))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
