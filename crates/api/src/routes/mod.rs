//! Route definitions, one module per resource.

pub mod auth;
pub mod employee;
pub mod health;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// GET    /health                 service + database health
///
/// POST   /signup                 create credentials (201 / 409)
/// POST   /login                  check credentials (200 / 401)
///
/// GET    /employees              list
/// POST   /employees              create (raw text name body)
/// GET    /employees/{id}         get
/// PUT    /employees/{id}         rename (raw text name body)
/// DELETE /employees/{id}         delete (tasks keep existing, unassigned)
///
/// GET    /projects               list (embeds members + tasks)
/// POST   /projects               create (query params)
/// GET    /projects/{id}          get
/// PUT    /projects/{id}          update (JSON body; members replace-if-non-empty)
/// DELETE /projects/{id}          delete (cascades to owned tasks)
///
/// GET    /tasks                  list
/// POST   /tasks                  create (camelCase query params)
/// GET    /tasks/{id}             get
/// PUT    /tasks/{id}             update + attach to project (query params)
/// DELETE /tasks/{id}             delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/employees", employee::router())
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
}
