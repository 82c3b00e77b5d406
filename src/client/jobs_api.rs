// src/client/jobs_api.rs
//! Job board client: builds the query strings the `/api/jobs` routes expect

use chrono::NaiveDate;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::join_url;
use crate::core::Credentials;
use crate::types::{Envelope, Job};

const JOBS_PATH: &str = "/api/jobs";
const SAVED_JOBS_PATH: &str = "/api/seeker/jobs/get_saved_jobs";
const SAVE_JOB_PATH: &str = "/api/seeker/jobs/save_job";
const APPLY_JOB_PATH: &str = "/api/seeker/profile/apply_job";
const UPLOAD_RESUME_PATH: &str = "/api/seeker/profile/upload_resume";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid URL {0}")]
    InvalidUrl(String),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Job search filters, empty values are left out of the query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilters {
    pub search: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub job_type: Option<String>,
    pub experience_level: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl JobFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = Some(job_type.into());
        self
    }

    pub fn experience_level(mut self, level: impl Into<String>) -> Self {
        self.experience_level = Some(level.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("search", &self.search),
            ("location", &self.location),
            ("category", &self.category),
            ("job_type", &self.job_type),
            ("experience_level", &self.experience_level),
        ];
        let numbers = [("page", self.page), ("limit", self.limit)];

        text.into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v.to_string()))
            })
            .chain(
                numbers
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v.to_string()))),
            )
            .collect()
    }
}

pub struct JobsApi {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl JobsApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            credentials: Credentials::anonymous(),
        })
    }

    /// Session sent along with every call made by this client
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ClientError> {
        let raw = join_url(&self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    pub async fn list_jobs(&self, filters: &JobFilters) -> Result<Vec<Job>, ClientError> {
        let url = self.url(JOBS_PATH, &filters.to_query())?;
        let payload = self.call(self.request(Method::GET, url)).await?;
        jobs_from(&payload)
    }

    /// Jobs still open on `today`, newest postings first
    pub async fn list_open_jobs(
        &self,
        filters: &JobFilters,
        today: NaiveDate,
    ) -> Result<Vec<Job>, ClientError> {
        let mut jobs = self.list_jobs(filters).await?;
        jobs.retain(|job| !job.is_expired(today));
        jobs.sort_by(|a, b| b.posted_on().cmp(&a.posted_on()));
        Ok(jobs)
    }

    pub async fn get_job(&self, id: &str) -> Result<Job, ClientError> {
        let url = self.url(&format!("{}/{}", JOBS_PATH, id), &[])?;
        let payload = self.call(self.request(Method::GET, url)).await?;
        let job = ["data", "job"]
            .iter()
            .filter_map(|key| payload.get(*key))
            .map(|data| data.get("job").unwrap_or(data))
            .next()
            .cloned()
            .unwrap_or(Value::Null);
        Ok(serde_json::from_value(job)?)
    }

    pub async fn saved_jobs(&self, jobseeker_id: &str) -> Result<Vec<Job>, ClientError> {
        let url = self.url(
            SAVED_JOBS_PATH,
            &[("jobseeker_id", jobseeker_id.to_string())],
        )?;
        let payload = self.call(self.request(Method::GET, url)).await?;
        jobs_from(&payload)
    }

    pub async fn save_job(&self, jobseeker_id: &str, job_id: &str) -> Result<Envelope, ClientError> {
        let url = self.url(SAVE_JOB_PATH, &[])?;
        let body = serde_json::json!({ "jobseeker_id": jobseeker_id, "job_id": job_id });
        let payload = self.call(self.request(Method::POST, url).json(&body)).await?;
        Ok(serde_json::from_value(payload)?)
    }

    pub async fn apply_job(
        &self,
        jobseeker_id: &str,
        job_id: &str,
        cover_letter: Option<&str>,
    ) -> Result<Envelope, ClientError> {
        let url = self.url(APPLY_JOB_PATH, &[])?;
        let mut body = serde_json::json!({ "jobseeker_id": jobseeker_id, "job_id": job_id });
        if let Some(cover_letter) = cover_letter {
            body["cover_letter"] = Value::String(cover_letter.to_string());
        }
        let payload = self.call(self.request(Method::POST, url).json(&body)).await?;
        Ok(serde_json::from_value(payload)?)
    }

    pub async fn upload_resume(
        &self,
        jobseeker_id: &str,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<Envelope, ClientError> {
        let url = self.url(UPLOAD_RESUME_PATH, &[])?;
        let form = Form::new()
            .text("jobseeker_id", jobseeker_id.to_string())
            .part("resume", Part::bytes(content).file_name(file_name.to_string()));
        let payload = self.call(self.request(Method::POST, url).multipart(form)).await?;
        Ok(serde_json::from_value(payload)?)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.credentials.apply(self.client.request(method, url))
    }

    /// Envelope payload of a successful call
    async fn call(&self, builder: reqwest::RequestBuilder) -> Result<Value, ClientError> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!("Jobs API answered {}", status);

        let payload: Value = serde_json::from_str(&text)?;
        if !payload.get("success").and_then(Value::as_bool).unwrap_or(false) {
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status {}", status));
            warn!("Jobs API rejected the call: {}", message);
            return Err(ClientError::Rejected { status, message });
        }
        Ok(payload)
    }
}

/// Job lists arrive as `data: [...]`, `data: {jobs: [...]}` or `jobs: [...]`
fn jobs_from(payload: &Value) -> Result<Vec<Job>, ClientError> {
    let list = match payload.get("data") {
        Some(Value::Array(_)) => payload.get("data"),
        Some(Value::Object(fields)) => fields.get("jobs"),
        _ => payload.get("jobs"),
    };
    match list {
        Some(list) => Ok(serde_json::from_value(list.clone())?),
        None => Ok(Vec::new()),
    }
}
