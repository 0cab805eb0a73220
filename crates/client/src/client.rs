//! HTTP client for the crewdesk REST API.
//!
//! [`ApiClient`] holds the base URL and a connection-pooling
//! [`reqwest::Client`]. One method per server operation; each builds the
//! request in that endpoint's wire format and maps the response status
//! onto a typed result.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crewdesk_core::types::DbId;

use crate::error::ClientError;
use crate::model::{Employee, NewProject, NewTask, Project, ProjectUpdate, Task, TaskUpdate};

/// Credentials payload for signup and login.
#[derive(Debug, Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// Gateway to a running crewdesk API server.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client targeting the given base URL
    /// (e.g. `http://localhost:8080`). A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // -----------------------------------------------------------------------
    // Authentication
    // -----------------------------------------------------------------------

    /// POST /signup. Returns `Ok(false)` when the username is already taken.
    pub async fn signup(&self, username: &str, password: &str) -> Result<bool, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/signup"))
            .json(&Credentials { username, password })
            .send()
            .await?;
        match response.status() {
            StatusCode::CREATED => Ok(true),
            StatusCode::CONFLICT | StatusCode::BAD_REQUEST => Ok(false),
            status => Err(ClientError::Status { status }),
        }
    }

    /// POST /login. Returns `Ok(false)` on bad credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<bool, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/login"))
            .json(&Credentials { username, password })
            .send()
            .await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            status => Err(ClientError::Status { status }),
        }
    }

    // -----------------------------------------------------------------------
    // Employees
    // -----------------------------------------------------------------------

    /// GET /employees
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        let response = self.http.get(self.endpoint("/employees")).send().await?;
        decode(response).await
    }

    /// GET /employees/{id}
    pub async fn get_employee(&self, id: DbId) -> Result<Employee, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/employees/{id}")))
            .send()
            .await?;
        decode(response).await
    }

    /// POST /employees -- the name travels as a raw text body.
    pub async fn create_employee(&self, name: &str) -> Result<Employee, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/employees"))
            .header(CONTENT_TYPE, "text/plain")
            .body(name.to_string())
            .send()
            .await?;
        decode(response).await
    }

    /// PUT /employees/{id} -- rename, raw text body.
    pub async fn update_employee(&self, id: DbId, name: &str) -> Result<Employee, ClientError> {
        let response = self
            .http
            .put(self.endpoint(&format!("/employees/{id}")))
            .header(CONTENT_TYPE, "text/plain")
            .body(name.to_string())
            .send()
            .await?;
        decode(response).await
    }

    /// DELETE /employees/{id}
    pub async fn delete_employee(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/employees/{id}")))
            .send()
            .await?;
        expect_success(response)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    /// GET /projects
    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let response = self.http.get(self.endpoint("/projects")).send().await?;
        decode(response).await
    }

    /// GET /projects/{id}
    pub async fn get_project(&self, id: DbId) -> Result<Project, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/projects/{id}")))
            .send()
            .await?;
        decode(response).await
    }

    /// POST /projects -- fields travel as query parameters.
    pub async fn create_project(&self, input: &NewProject) -> Result<Project, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/projects"))
            .query(input)
            .send()
            .await?;
        decode(response).await
    }

    /// PUT /projects/{id} -- JSON body. Leave `members` empty to keep the
    /// stored membership untouched.
    pub async fn update_project(
        &self,
        id: DbId,
        input: &ProjectUpdate,
    ) -> Result<Project, ClientError> {
        let response = self
            .http
            .put(self.endpoint(&format!("/projects/{id}")))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    /// DELETE /projects/{id} -- owned tasks are deleted with it.
    pub async fn delete_project(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/projects/{id}")))
            .send()
            .await?;
        expect_success(response)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    /// GET /tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let response = self.http.get(self.endpoint("/tasks")).send().await?;
        decode(response).await
    }

    /// GET /tasks/{id}
    pub async fn get_task(&self, id: DbId) -> Result<Task, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/tasks/{id}")))
            .send()
            .await?;
        decode(response).await
    }

    /// POST /tasks -- camelCase query parameters. An `assignee_id` that no
    /// longer exists is tolerated server-side; the task comes back unassigned.
    pub async fn create_task(&self, input: &NewTask) -> Result<Task, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/tasks"))
            .query(input)
            .send()
            .await?;
        decode(response).await
    }

    /// PUT /tasks/{id} -- update and attach to `input.project_id`.
    ///
    /// Returns `Ok(None)` when the task or target project does not exist:
    /// the server treats that as a no-op, and the gateway surfaces it as a
    /// typed absence rather than an error.
    pub async fn update_task(
        &self,
        id: DbId,
        input: &TaskUpdate,
    ) -> Result<Option<Task>, ClientError> {
        let response = self
            .http
            .put(self.endpoint(&format!("/tasks/{id}")))
            .query(input)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(decode(response).await?))
    }

    /// DELETE /tasks/{id}
    pub async fn delete_task(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/tasks/{id}")))
            .send()
            .await?;
        expect_success(response)?;
        Ok(())
    }
}

/// Reject non-2xx responses with a [`ClientError::Status`].
fn expect_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::debug!(%status, "Server rejected request");
        Err(ClientError::Status { status })
    }
}

/// Reject non-2xx responses, then deserialize the JSON body.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = expect_success(response)?;
    Ok(response.json().await?)
}
