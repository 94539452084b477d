//! Official resolution operations

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::error::ClientResult;
use crate::http::HttpClient;

use super::ImageUpload;

/// Official service facade
///
/// Requires an authenticated session; enforcement is server-side and
/// the facade does not pre-check.
#[derive(Debug, Clone)]
pub struct OfficialService {
    http: HttpClient,
    cancel: CancellationToken,
}

impl OfficialService {
    pub(crate) fn new(http: HttpClient, cancel: CancellationToken) -> Self {
        Self { http, cancel }
    }

    /// Abort this facade's in-flight requests.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Upload resolution evidence for a problem.
    ///
    /// Write-once against a specific problem; the backend verifies the
    /// evidence and bumps the problem's `resolution_count`.
    pub async fn upload_resolution(
        &self,
        problem_id: Uuid,
        image: ImageUpload,
    ) -> ClientResult<()> {
        image.validate()?;

        let part = image.into_part()?;
        let form = reqwest::multipart::Form::new()
            .text("problemId", problem_id.to_string())
            .part("resolvedImageFile", part);

        self.http
            .post_multipart_unit("api/official/resolutions", form, &self.cancel)
            .await
    }
}
