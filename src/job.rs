use crate::client::{HosterApi, Params};
use crate::error::Error;
use crate::response::ApiResponse;

/// Job queue lookups.
///
/// Long-running provisioning operations answer with a job id; this facade
/// polls their state.
#[derive(Debug, Clone, Copy)]
pub struct Job<'a> {
    api: &'a HosterApi,
}

impl<'a> Job<'a> {
    pub(crate) fn new(api: &'a HosterApi) -> Self {
        Self { api }
    }

    /// Looks up a single job by id.
    pub async fn get(&self, job_id: u64) -> Result<ApiResponse, Error> {
        self.api.get(&format!("job/{job_id}"), Params::new()).await
    }
}
