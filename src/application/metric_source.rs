// Metric source traits - counting and ranking queries per collection
//
// One trait per data collection, mirroring the read paths the dashboard
// aggregates over. Interval semantics are half-open throughout:
// `count_created_after(cutoff)` counts rows created at or after `cutoff`,
// and `count_created_between(start, end)` counts rows in `[start, end)`.
use crate::domain::categories::{JobLevel, ResumeStatus, UserRole};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Why a dashboard query could not be answered. The report is all-or-nothing,
/// so a single failed query fails the whole request.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metric source unavailable: {0}")]
    DataUnavailable(Box<dyn std::error::Error + Send + Sync>),
}

impl MetricsError {
    pub fn data_unavailable(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::DataUnavailable(err.into())
    }
}

/// One skill and the number of jobs requiring it.
#[derive(Debug, Clone)]
pub struct SkillRanking {
    pub skill_name: String,
    pub job_count: i64,
}

/// One company and the number of jobs it has posted.
#[derive(Debug, Clone)]
pub struct CompanyJobRanking {
    pub company_id: i64,
    pub company_name: String,
    pub job_count: i64,
}

/// One company and the number of resumes submitted to its jobs.
#[derive(Debug, Clone)]
pub struct CompanyResumeRanking {
    pub company_id: i64,
    pub company_name: String,
    pub resume_count: i64,
}

/// One job and the number of resumes submitted to it. The company name is
/// absent for jobs whose company record no longer exists; how to render
/// that is the aggregator's decision, not the source's.
#[derive(Debug, Clone)]
pub struct JobResumeRanking {
    pub job_id: i64,
    pub job_name: String,
    pub company_name: Option<String>,
    pub resume_count: i64,
}

#[async_trait]
pub trait UserMetrics: Send + Sync {
    async fn count(&self) -> Result<i64, MetricsError>;
    async fn count_created_after(&self, cutoff: DateTime<Utc>) -> Result<i64, MetricsError>;
    async fn count_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, MetricsError>;
    async fn count_by_role(&self, role: UserRole) -> Result<i64, MetricsError>;
}

#[async_trait]
pub trait JobMetrics: Send + Sync {
    async fn count(&self) -> Result<i64, MetricsError>;
    async fn count_created_after(&self, cutoff: DateTime<Utc>) -> Result<i64, MetricsError>;
    async fn count_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, MetricsError>;
    /// Jobs whose end date is strictly after `at`.
    async fn count_ending_after(&self, at: DateTime<Utc>) -> Result<i64, MetricsError>;
    /// Jobs whose end date is strictly before `at`.
    async fn count_ending_before(&self, at: DateTime<Utc>) -> Result<i64, MetricsError>;
    async fn count_by_level(&self, level: JobLevel) -> Result<i64, MetricsError>;
    /// Jobs ranked by resume count, descending. `limit` is a hint; the
    /// source may return more rows than asked.
    async fn top_by_resume_count(&self, limit: usize)
        -> Result<Vec<JobResumeRanking>, MetricsError>;
}

#[async_trait]
pub trait ResumeMetrics: Send + Sync {
    async fn count(&self) -> Result<i64, MetricsError>;
    async fn count_created_after(&self, cutoff: DateTime<Utc>) -> Result<i64, MetricsError>;
    async fn count_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, MetricsError>;
    async fn count_by_status(&self, status: ResumeStatus) -> Result<i64, MetricsError>;
}

#[async_trait]
pub trait CompanyMetrics: Send + Sync {
    async fn count(&self) -> Result<i64, MetricsError>;
    async fn count_created_after(&self, cutoff: DateTime<Utc>) -> Result<i64, MetricsError>;
    /// Companies with at least one job whose end date is after `at`.
    async fn count_with_active_jobs(&self, at: DateTime<Utc>) -> Result<i64, MetricsError>;
    async fn top_by_job_count(&self, limit: usize)
        -> Result<Vec<CompanyJobRanking>, MetricsError>;
    async fn top_by_resume_count(
        &self,
        limit: usize,
    ) -> Result<Vec<CompanyResumeRanking>, MetricsError>;
}

#[async_trait]
pub trait SubscriberMetrics: Send + Sync {
    async fn count(&self) -> Result<i64, MetricsError>;
}

#[async_trait]
pub trait SkillMetrics: Send + Sync {
    async fn top_by_job_count(&self, limit: usize) -> Result<Vec<SkillRanking>, MetricsError>;
}
