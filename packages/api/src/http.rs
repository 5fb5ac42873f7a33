//! REST-backed [`DataService`].

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::service::DataService;
use crate::types::{Course, Program, ScheduleEntry};

/// Talks to the admission backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDataService {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpDataService {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ApiConfig::from_env()?))
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> String {
        let path = segments
            .iter()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/{}", self.config.base_url, path)
    }

    /// `Ok(None)` on 404; the backend reports empty lookups that way.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        debug!("http.get: url={url}");
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("http.get: url={url} transport error: {e}");
            Error::from(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("http.get: url={url} not found");
            return Ok(None);
        }
        if !status.is_success() {
            warn!("http.get: url={url} status={status}");
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.json::<T>().await.map_err(|e| {
            warn!("http.get: url={url} decode error: {e}");
            Error::decode(e.to_string())
        })?;
        Ok(Some(body))
    }
}

#[async_trait(?Send)]
impl DataService for HttpDataService {
    async fn find_program_by_id(&self, program_id: &str) -> Result<Program> {
        let url = self.endpoint(&["program", program_id]);
        self.get_json::<Program>(&url)
            .await?
            .ok_or_else(|| Error::not_found(format!("program {program_id}")))
    }

    async fn find_courses_by_program_id(&self, program_id: &str) -> Result<Vec<Course>> {
        let url = self.endpoint(&["courses", "programId", program_id]);
        let courses = self.get_json::<Vec<Course>>(&url).await?.unwrap_or_default();
        debug!(
            "find_courses_by_program_id: program_id={program_id} count={}",
            courses.len()
        );
        Ok(courses)
    }

    async fn get_program_schedule_by_branch(&self, branch_id: &str) -> Result<Vec<ScheduleEntry>> {
        let url = self.endpoint(&["programscheduled", "branchId", branch_id]);
        let schedules = self
            .get_json::<Vec<ScheduleEntry>>(&url)
            .await?
            .unwrap_or_default();
        debug!(
            "get_program_schedule_by_branch: branch_id={branch_id} count={}",
            schedules.len()
        );
        Ok(schedules)
    }
}
