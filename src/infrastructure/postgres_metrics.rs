// Postgres metric source - SQL implementation of the dashboard query traits
use crate::application::metric_source::{
    CompanyJobRanking, CompanyMetrics, CompanyResumeRanking, JobMetrics, JobResumeRanking,
    MetricsError, ResumeMetrics, SkillMetrics, SkillRanking, SubscriberMetrics, UserMetrics,
};
use crate::domain::categories::{JobLevel, ResumeStatus, UserRole};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Row};

pub struct PgMetricSource {
    client: Client,
}

impl PgMetricSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn count_where(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<i64, MetricsError> {
        let row = self
            .client
            .query_one(sql, params)
            .await
            .map_err(MetricsError::data_unavailable)?;
        Ok(row.get(0))
    }

    async fn ranking_rows(&self, sql: &str, limit: usize) -> Result<Vec<Row>, MetricsError> {
        let limit = limit as i64;
        self.client
            .query(sql, &[&limit])
            .await
            .map_err(MetricsError::data_unavailable)
    }
}

#[async_trait]
impl UserMetrics for PgMetricSource {
    async fn count(&self) -> Result<i64, MetricsError> {
        self.count_where("SELECT COUNT(*) FROM users", &[]).await
    }

    async fn count_created_after(&self, cutoff: DateTime<Utc>) -> Result<i64, MetricsError> {
        self.count_where("SELECT COUNT(*) FROM users WHERE created_at >= $1", &[&cutoff])
            .await
    }

    async fn count_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, MetricsError> {
        self.count_where(
            "SELECT COUNT(*) FROM users WHERE created_at >= $1 AND created_at < $2",
            &[&start, &end],
        )
        .await
    }

    async fn count_by_role(&self, role: UserRole) -> Result<i64, MetricsError> {
        let role = role.as_str();
        self.count_where(
            "SELECT COUNT(*) FROM users u INNER JOIN roles r ON r.id = u.role_id WHERE r.name = $1",
            &[&role],
        )
        .await
    }
}

#[async_trait]
impl JobMetrics for PgMetricSource {
    async fn count(&self) -> Result<i64, MetricsError> {
        self.count_where("SELECT COUNT(*) FROM jobs", &[]).await
    }

    async fn count_created_after(&self, cutoff: DateTime<Utc>) -> Result<i64, MetricsError> {
        self.count_where("SELECT COUNT(*) FROM jobs WHERE created_at >= $1", &[&cutoff])
            .await
    }

    async fn count_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, MetricsError> {
        self.count_where(
            "SELECT COUNT(*) FROM jobs WHERE created_at >= $1 AND created_at < $2",
            &[&start, &end],
        )
        .await
    }

    async fn count_ending_after(&self, at: DateTime<Utc>) -> Result<i64, MetricsError> {
        self.count_where("SELECT COUNT(*) FROM jobs WHERE end_date > $1", &[&at])
            .await
    }

    async fn count_ending_before(&self, at: DateTime<Utc>) -> Result<i64, MetricsError> {
        self.count_where("SELECT COUNT(*) FROM jobs WHERE end_date < $1", &[&at])
            .await
    }

    async fn count_by_level(&self, level: JobLevel) -> Result<i64, MetricsError> {
        let level = level.as_str();
        self.count_where("SELECT COUNT(*) FROM jobs WHERE level = $1", &[&level])
            .await
    }

    async fn top_by_resume_count(
        &self,
        limit: usize,
    ) -> Result<Vec<JobResumeRanking>, MetricsError> {
        let rows = self
            .ranking_rows(
                "SELECT j.id, j.name, c.name, COUNT(r.id) AS resume_count \
                 FROM jobs j \
                 LEFT JOIN companies c ON c.id = j.company_id \
                 INNER JOIN resumes r ON r.job_id = j.id \
                 GROUP BY j.id, j.name, c.name \
                 ORDER BY resume_count DESC \
                 LIMIT $1",
                limit,
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| JobResumeRanking {
                job_id: row.get(0),
                job_name: row.get(1),
                company_name: row.get(2),
                resume_count: row.get(3),
            })
            .collect())
    }
}

#[async_trait]
impl ResumeMetrics for PgMetricSource {
    async fn count(&self) -> Result<i64, MetricsError> {
        self.count_where("SELECT COUNT(*) FROM resumes", &[]).await
    }

    async fn count_created_after(&self, cutoff: DateTime<Utc>) -> Result<i64, MetricsError> {
        self.count_where(
            "SELECT COUNT(*) FROM resumes WHERE created_at >= $1",
            &[&cutoff],
        )
        .await
    }

    async fn count_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, MetricsError> {
        self.count_where(
            "SELECT COUNT(*) FROM resumes WHERE created_at >= $1 AND created_at < $2",
            &[&start, &end],
        )
        .await
    }

    async fn count_by_status(&self, status: ResumeStatus) -> Result<i64, MetricsError> {
        let status = status.as_str();
        self.count_where("SELECT COUNT(*) FROM resumes WHERE status = $1", &[&status])
            .await
    }
}

#[async_trait]
impl CompanyMetrics for PgMetricSource {
    async fn count(&self) -> Result<i64, MetricsError> {
        self.count_where("SELECT COUNT(*) FROM companies", &[]).await
    }

    async fn count_created_after(&self, cutoff: DateTime<Utc>) -> Result<i64, MetricsError> {
        self.count_where(
            "SELECT COUNT(*) FROM companies WHERE created_at >= $1",
            &[&cutoff],
        )
        .await
    }

    async fn count_with_active_jobs(&self, at: DateTime<Utc>) -> Result<i64, MetricsError> {
        self.count_where(
            "SELECT COUNT(DISTINCT c.id) \
             FROM companies c INNER JOIN jobs j ON j.company_id = c.id \
             WHERE j.end_date > $1",
            &[&at],
        )
        .await
    }

    async fn top_by_job_count(&self, limit: usize) -> Result<Vec<CompanyJobRanking>, MetricsError> {
        let rows = self
            .ranking_rows(
                "SELECT c.id, c.name, COUNT(j.id) AS job_count \
                 FROM companies c \
                 INNER JOIN jobs j ON j.company_id = c.id \
                 GROUP BY c.id, c.name \
                 ORDER BY job_count DESC \
                 LIMIT $1",
                limit,
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| CompanyJobRanking {
                company_id: row.get(0),
                company_name: row.get(1),
                job_count: row.get(2),
            })
            .collect())
    }

    async fn top_by_resume_count(
        &self,
        limit: usize,
    ) -> Result<Vec<CompanyResumeRanking>, MetricsError> {
        let rows = self
            .ranking_rows(
                "SELECT c.id, c.name, COUNT(r.id) AS resume_count \
                 FROM companies c \
                 INNER JOIN jobs j ON j.company_id = c.id \
                 INNER JOIN resumes r ON r.job_id = j.id \
                 GROUP BY c.id, c.name \
                 ORDER BY resume_count DESC \
                 LIMIT $1",
                limit,
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| CompanyResumeRanking {
                company_id: row.get(0),
                company_name: row.get(1),
                resume_count: row.get(2),
            })
            .collect())
    }
}

#[async_trait]
impl SubscriberMetrics for PgMetricSource {
    async fn count(&self) -> Result<i64, MetricsError> {
        self.count_where("SELECT COUNT(*) FROM subscribers", &[]).await
    }
}

#[async_trait]
impl SkillMetrics for PgMetricSource {
    async fn top_by_job_count(&self, limit: usize) -> Result<Vec<SkillRanking>, MetricsError> {
        let rows = self
            .ranking_rows(
                "SELECT s.name, COUNT(js.job_id) AS job_count \
                 FROM skills s \
                 INNER JOIN job_skills js ON js.skill_id = s.id \
                 GROUP BY s.id, s.name \
                 ORDER BY job_count DESC \
                 LIMIT $1",
                limit,
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| SkillRanking {
                skill_name: row.get(0),
                job_count: row.get(1),
            })
            .collect())
    }
}
