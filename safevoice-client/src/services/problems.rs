//! Problem operations
//!
//! Anonymous submission and listing of reported problems, plus the
//! status update used by the official dashboard.

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use shared::{PageQuery, Problem, ProblemPage, ProblemStatus, UpdateStatusRequest};

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

use super::ImageUpload;

const MIN_DESCRIPTION_CHARS: usize = 10;
const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Payload for a new problem report
#[derive(Debug, Clone)]
pub struct NewProblem {
    pub image: ImageUpload,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewProblem {
    fn validate(&self) -> ClientResult<()> {
        let chars = self.description.chars().count();
        if !(MIN_DESCRIPTION_CHARS..=MAX_DESCRIPTION_CHARS).contains(&chars) {
            return Err(ClientError::Validation(format!(
                "Description must be between {} and {} characters",
                MIN_DESCRIPTION_CHARS, MAX_DESCRIPTION_CHARS
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ClientError::Validation(
                "Latitude must be between -90 and 90".into(),
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ClientError::Validation(
                "Longitude must be between -180 and 180".into(),
            ));
        }
        self.image.validate()
    }
}

/// Problem service facade
#[derive(Debug, Clone)]
pub struct ProblemService {
    http: HttpClient,
    cancel: CancellationToken,
}

impl ProblemService {
    pub(crate) fn new(http: HttpClient, cancel: CancellationToken) -> Self {
        Self { http, cancel }
    }

    /// Abort this facade's in-flight requests.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Submit a new problem report. Anonymous; the backend moderates
    /// and stores it.
    pub async fn create(&self, new_problem: NewProblem) -> ClientResult<Problem> {
        new_problem.validate()?;

        let part = new_problem.image.into_part()?;
        let form = reqwest::multipart::Form::new()
            .part("imageFile", part)
            .text("description", new_problem.description)
            .text("latitude", new_problem.latitude.to_string())
            .text("longitude", new_problem.longitude.to_string());

        self.http
            .post_multipart("api/problems", form, &self.cancel)
            .await
    }

    /// Fetch one page of problems, newest first.
    pub async fn list(&self, query: PageQuery) -> ClientResult<ProblemPage> {
        if query.size == 0 {
            return Err(ClientError::Validation("Page size must be at least 1".into()));
        }
        let path = format!("api/problems?page={}&size={}", query.page, query.size);
        self.http.get(&path, &self.cancel).await
    }

    /// Fetch a single problem by id.
    pub async fn get(&self, id: Uuid) -> ClientResult<Problem> {
        let path = format!("api/problems/{}", id);
        self.http.get(&path, &self.cancel).await
    }

    /// Request a status change. Requires an authenticated official
    /// session; enforced server-side.
    pub async fn update_status(&self, id: Uuid, status: ProblemStatus) -> ClientResult<()> {
        let path = format!("api/problems/{}/status", id);
        let body = UpdateStatusRequest { status };
        self.http.put_unit(&path, &body, &self.cancel).await
    }
}
