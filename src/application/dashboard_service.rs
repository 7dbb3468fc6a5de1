// Dashboard service - Use case for assembling the admin statistics report
use crate::application::metric_source::{
    CompanyMetrics, JobMetrics, MetricsError, ResumeMetrics, SkillMetrics, SubscriberMetrics,
    UserMetrics,
};
use crate::domain::categories::{JobLevel, ResumeStatus, UserRole};
use crate::domain::dashboard::{
    ChartData, CompanyJobCount, CompanyResumeCount, CompanyStats, DashboardStats, JobResumeCount,
    JobStats, MonthlyPoint, OverviewStats, ResumeStats, SkillCount, TopPerformers, UserStats,
};
use crate::domain::periods::{MonthWindow, last_months, start_of_month, start_of_previous_month};
use crate::domain::rates::{approval_rate, growth_rate};
use chrono::{DateTime, Duration, Utc};
use futures::future::try_join_all;
use std::sync::Arc;

/// Rankings are reported as top 10 regardless of how many rows a source returns.
const TOP_LIMIT: usize = 10;
/// The chart covers the trailing six calendar months, current month included.
const MONTHS_CHARTED: usize = 6;

#[derive(Clone)]
pub struct DashboardService {
    users: Arc<dyn UserMetrics>,
    jobs: Arc<dyn JobMetrics>,
    resumes: Arc<dyn ResumeMetrics>,
    companies: Arc<dyn CompanyMetrics>,
    subscribers: Arc<dyn SubscriberMetrics>,
    skills: Arc<dyn SkillMetrics>,
}

impl DashboardService {
    pub fn new(
        users: Arc<dyn UserMetrics>,
        jobs: Arc<dyn JobMetrics>,
        resumes: Arc<dyn ResumeMetrics>,
        companies: Arc<dyn CompanyMetrics>,
        subscribers: Arc<dyn SubscriberMetrics>,
        skills: Arc<dyn SkillMetrics>,
    ) -> Self {
        Self {
            users,
            jobs,
            resumes,
            companies,
            subscribers,
            skills,
        }
    }

    /// Assemble the full report as of `as_of`. Sections only read from the
    /// store and fill disjoint parts of the result, so they run concurrently;
    /// the first failing query aborts the rest and fails the whole report.
    pub async fn dashboard_stats(
        &self,
        as_of: DateTime<Utc>,
    ) -> Result<DashboardStats, MetricsError> {
        tracing::debug!("Assembling dashboard stats as of {}", as_of);

        let (
            overview_stats,
            user_stats,
            job_stats,
            resume_stats,
            company_stats,
            chart_data,
            top_performers,
        ) = tokio::try_join!(
            self.overview_stats(as_of),
            self.user_stats(as_of),
            self.job_stats(as_of),
            self.resume_stats(as_of),
            self.company_stats(as_of),
            self.chart_data(as_of),
            self.top_performers(),
        )?;

        Ok(DashboardStats {
            overview_stats,
            user_stats,
            job_stats,
            resume_stats,
            company_stats,
            chart_data,
            top_performers,
        })
    }

    async fn overview_stats(&self, as_of: DateTime<Utc>) -> Result<OverviewStats, MetricsError> {
        let start_of_this_month = start_of_month(as_of);
        let start_of_last_month = start_of_previous_month(as_of);

        let (
            total_users,
            total_jobs,
            total_resumes,
            total_companies,
            total_subscribers,
            users_this_month,
            users_last_month,
            jobs_this_month,
            jobs_last_month,
            resumes_this_month,
            resumes_last_month,
        ) = tokio::try_join!(
            self.users.count(),
            self.jobs.count(),
            self.resumes.count(),
            self.companies.count(),
            self.subscribers.count(),
            self.users.count_created_after(start_of_this_month),
            self.users
                .count_created_between(start_of_last_month, start_of_this_month),
            self.jobs.count_created_after(start_of_this_month),
            self.jobs
                .count_created_between(start_of_last_month, start_of_this_month),
            self.resumes.count_created_after(start_of_this_month),
            self.resumes
                .count_created_between(start_of_last_month, start_of_this_month),
        )?;

        Ok(OverviewStats {
            total_users,
            total_jobs,
            total_resumes,
            total_companies,
            total_subscribers,
            user_growth_rate: growth_rate(users_this_month, users_last_month),
            job_growth_rate: growth_rate(jobs_this_month, jobs_last_month),
            resume_growth_rate: growth_rate(resumes_this_month, resumes_last_month),
        })
    }

    async fn user_stats(&self, as_of: DateTime<Utc>) -> Result<UserStats, MetricsError> {
        let thirty_days_ago = as_of - Duration::days(30);
        let start_of_this_month = start_of_month(as_of);

        // created_at stands in for last_login until the users table tracks logins
        let (total_users, active_users, new_users_this_month, admin_count, recruiter_count, user_count) =
            tokio::try_join!(
                self.users.count(),
                self.users.count_created_after(thirty_days_ago),
                self.users.count_created_after(start_of_this_month),
                self.users.count_by_role(UserRole::Admin),
                self.users.count_by_role(UserRole::Recruiter),
                self.users.count_by_role(UserRole::User),
            )?;

        Ok(UserStats {
            total_users,
            active_users,
            new_users_this_month,
            admin_count,
            recruiter_count,
            user_count,
        })
    }

    async fn job_stats(&self, as_of: DateTime<Utc>) -> Result<JobStats, MetricsError> {
        let start_of_this_month = start_of_month(as_of);

        // a job whose end date equals `as_of` exactly lands in neither bucket
        let (
            total_jobs,
            active_jobs,
            expired_jobs,
            new_jobs_this_month,
            skill_rows,
            intern_jobs,
            fresher_jobs,
            middle_jobs,
            senior_jobs,
            leader_jobs,
        ) = tokio::try_join!(
            self.jobs.count(),
            self.jobs.count_ending_after(as_of),
            self.jobs.count_ending_before(as_of),
            self.jobs.count_created_after(start_of_this_month),
            self.skills.top_by_job_count(TOP_LIMIT),
            self.jobs.count_by_level(JobLevel::Intern),
            self.jobs.count_by_level(JobLevel::Fresher),
            self.jobs.count_by_level(JobLevel::Middle),
            self.jobs.count_by_level(JobLevel::Senior),
            self.jobs.count_by_level(JobLevel::Leader),
        )?;

        let mut top_skills: Vec<SkillCount> = skill_rows
            .into_iter()
            .map(|row| SkillCount {
                skill_name: row.skill_name,
                count: row.job_count,
            })
            .collect();
        top_skills.truncate(TOP_LIMIT);

        Ok(JobStats {
            total_jobs,
            active_jobs,
            expired_jobs,
            new_jobs_this_month,
            top_skills,
            intern_jobs,
            fresher_jobs,
            middle_jobs,
            senior_jobs,
            leader_jobs,
        })
    }

    async fn resume_stats(&self, as_of: DateTime<Utc>) -> Result<ResumeStats, MetricsError> {
        let start_of_this_month = start_of_month(as_of);

        let (
            total_resumes,
            pending_resumes,
            reviewing_resumes,
            approved_resumes,
            rejected_resumes,
            new_resumes_this_month,
        ) = tokio::try_join!(
            self.resumes.count(),
            self.resumes.count_by_status(ResumeStatus::Pending),
            self.resumes.count_by_status(ResumeStatus::Reviewing),
            self.resumes.count_by_status(ResumeStatus::Approved),
            self.resumes.count_by_status(ResumeStatus::Rejected),
            self.resumes.count_created_after(start_of_this_month),
        )?;

        Ok(ResumeStats {
            total_resumes,
            pending_resumes,
            reviewing_resumes,
            approved_resumes,
            rejected_resumes,
            approval_rate: approval_rate(approved_resumes, total_resumes),
            new_resumes_this_month,
        })
    }

    async fn company_stats(&self, as_of: DateTime<Utc>) -> Result<CompanyStats, MetricsError> {
        let start_of_this_month = start_of_month(as_of);

        let (total_companies, active_companies, new_companies_this_month, company_rows) =
            tokio::try_join!(
                self.companies.count(),
                self.companies.count_with_active_jobs(as_of),
                self.companies.count_created_after(start_of_this_month),
                self.companies.top_by_job_count(TOP_LIMIT),
            )?;

        let mut top_companies: Vec<CompanyJobCount> = company_rows
            .into_iter()
            .map(|row| CompanyJobCount {
                company_id: row.company_id,
                company_name: row.company_name,
                job_count: row.job_count,
            })
            .collect();
        top_companies.truncate(TOP_LIMIT);

        Ok(CompanyStats {
            total_companies,
            active_companies,
            new_companies_this_month,
            top_companies,
        })
    }

    async fn chart_data(&self, as_of: DateTime<Utc>) -> Result<ChartData, MetricsError> {
        let windows: Vec<MonthWindow> = last_months(as_of, MONTHS_CHARTED).collect();

        // one count query per month per collection; all dispatched at once
        let (users_by_month, jobs_by_month, resumes_by_month) = tokio::try_join!(
            self.user_series(&windows),
            self.job_series(&windows),
            self.resume_series(&windows),
        )?;

        Ok(ChartData {
            users_by_month,
            jobs_by_month,
            resumes_by_month,
        })
    }

    async fn user_series(
        &self,
        windows: &[MonthWindow],
    ) -> Result<Vec<MonthlyPoint>, MetricsError> {
        try_join_all(windows.iter().map(|window| {
            let month = window.label();
            let counted = self.users.count_created_between(window.start, window.end);
            async move {
                Ok(MonthlyPoint {
                    month,
                    count: counted.await?,
                })
            }
        }))
        .await
    }

    async fn job_series(&self, windows: &[MonthWindow]) -> Result<Vec<MonthlyPoint>, MetricsError> {
        try_join_all(windows.iter().map(|window| {
            let month = window.label();
            let counted = self.jobs.count_created_between(window.start, window.end);
            async move {
                Ok(MonthlyPoint {
                    month,
                    count: counted.await?,
                })
            }
        }))
        .await
    }

    async fn resume_series(
        &self,
        windows: &[MonthWindow],
    ) -> Result<Vec<MonthlyPoint>, MetricsError> {
        try_join_all(windows.iter().map(|window| {
            let month = window.label();
            let counted = self.resumes.count_created_between(window.start, window.end);
            async move {
                Ok(MonthlyPoint {
                    month,
                    count: counted.await?,
                })
            }
        }))
        .await
    }

    async fn top_performers(&self) -> Result<TopPerformers, MetricsError> {
        let (company_rows, job_rows, skill_rows) = tokio::try_join!(
            self.companies.top_by_resume_count(TOP_LIMIT),
            self.jobs.top_by_resume_count(TOP_LIMIT),
            self.skills.top_by_job_count(TOP_LIMIT),
        )?;

        let mut top_companies_by_resumes: Vec<CompanyResumeCount> = company_rows
            .into_iter()
            .map(|row| CompanyResumeCount {
                company_id: row.company_id,
                company_name: row.company_name,
                resume_count: row.resume_count,
            })
            .collect();
        top_companies_by_resumes.truncate(TOP_LIMIT);

        // jobs can outlive their company record; those rank under "N/A"
        // instead of being dropped
        let mut top_jobs_by_resumes: Vec<JobResumeCount> = job_rows
            .into_iter()
            .map(|row| JobResumeCount {
                job_id: row.job_id,
                job_name: row.job_name,
                company_name: row.company_name.unwrap_or_else(|| "N/A".to_string()),
                resume_count: row.resume_count,
            })
            .collect();
        top_jobs_by_resumes.truncate(TOP_LIMIT);

        let mut top_skills: Vec<SkillCount> = skill_rows
            .into_iter()
            .map(|row| SkillCount {
                skill_name: row.skill_name,
                count: row.job_count,
            })
            .collect();
        top_skills.truncate(TOP_LIMIT);

        Ok(TopPerformers {
            top_companies_by_resumes,
            top_jobs_by_resumes,
            top_skills,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::metric_source::{
        CompanyJobRanking, CompanyResumeRanking, JobResumeRanking, SkillRanking,
    };
    use async_trait::async_trait;
    use chrono::TimeZone;

    struct FakeUser {
        created_at: DateTime<Utc>,
        role: UserRole,
    }

    struct FakeJob {
        created_at: DateTime<Utc>,
        end_date: DateTime<Utc>,
        level: JobLevel,
    }

    struct FakeResume {
        created_at: DateTime<Utc>,
        status: ResumeStatus,
    }

    #[derive(Default)]
    struct FakeStore {
        users: Vec<FakeUser>,
        jobs: Vec<FakeJob>,
        resumes: Vec<FakeResume>,
        companies_created: Vec<DateTime<Utc>>,
        companies_with_active_jobs: i64,
        subscriber_total: i64,
        skill_rankings: Vec<SkillRanking>,
        company_job_rankings: Vec<CompanyJobRanking>,
        company_resume_rankings: Vec<CompanyResumeRanking>,
        job_resume_rankings: Vec<JobResumeRanking>,
        users_offline: bool,
    }

    impl FakeStore {
        fn users_online(&self) -> Result<(), MetricsError> {
            if self.users_offline {
                Err(MetricsError::data_unavailable("user store offline"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl UserMetrics for FakeStore {
        async fn count(&self) -> Result<i64, MetricsError> {
            self.users_online()?;
            Ok(self.users.len() as i64)
        }

        async fn count_created_after(&self, cutoff: DateTime<Utc>) -> Result<i64, MetricsError> {
            self.users_online()?;
            Ok(self.users.iter().filter(|u| u.created_at >= cutoff).count() as i64)
        }

        async fn count_created_between(
            &self,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> Result<i64, MetricsError> {
            self.users_online()?;
            Ok(self
                .users
                .iter()
                .filter(|u| start <= u.created_at && u.created_at < end)
                .count() as i64)
        }

        async fn count_by_role(&self, role: UserRole) -> Result<i64, MetricsError> {
            self.users_online()?;
            Ok(self.users.iter().filter(|u| u.role == role).count() as i64)
        }
    }

    #[async_trait]
    impl JobMetrics for FakeStore {
        async fn count(&self) -> Result<i64, MetricsError> {
            Ok(self.jobs.len() as i64)
        }

        async fn count_created_after(&self, cutoff: DateTime<Utc>) -> Result<i64, MetricsError> {
            Ok(self.jobs.iter().filter(|j| j.created_at >= cutoff).count() as i64)
        }

        async fn count_created_between(
            &self,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> Result<i64, MetricsError> {
            Ok(self
                .jobs
                .iter()
                .filter(|j| start <= j.created_at && j.created_at < end)
                .count() as i64)
        }

        async fn count_ending_after(&self, at: DateTime<Utc>) -> Result<i64, MetricsError> {
            Ok(self.jobs.iter().filter(|j| j.end_date > at).count() as i64)
        }

        async fn count_ending_before(&self, at: DateTime<Utc>) -> Result<i64, MetricsError> {
            Ok(self.jobs.iter().filter(|j| j.end_date < at).count() as i64)
        }

        async fn count_by_level(&self, level: JobLevel) -> Result<i64, MetricsError> {
            Ok(self.jobs.iter().filter(|j| j.level == level).count() as i64)
        }

        async fn top_by_resume_count(
            &self,
            _limit: usize,
        ) -> Result<Vec<JobResumeRanking>, MetricsError> {
            Ok(self.job_resume_rankings.clone())
        }
    }

    #[async_trait]
    impl ResumeMetrics for FakeStore {
        async fn count(&self) -> Result<i64, MetricsError> {
            Ok(self.resumes.len() as i64)
        }

        async fn count_created_after(&self, cutoff: DateTime<Utc>) -> Result<i64, MetricsError> {
            Ok(self
                .resumes
                .iter()
                .filter(|r| r.created_at >= cutoff)
                .count() as i64)
        }

        async fn count_created_between(
            &self,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> Result<i64, MetricsError> {
            Ok(self
                .resumes
                .iter()
                .filter(|r| start <= r.created_at && r.created_at < end)
                .count() as i64)
        }

        async fn count_by_status(&self, status: ResumeStatus) -> Result<i64, MetricsError> {
            Ok(self.resumes.iter().filter(|r| r.status == status).count() as i64)
        }
    }

    #[async_trait]
    impl CompanyMetrics for FakeStore {
        async fn count(&self) -> Result<i64, MetricsError> {
            Ok(self.companies_created.len() as i64)
        }

        async fn count_created_after(&self, cutoff: DateTime<Utc>) -> Result<i64, MetricsError> {
            Ok(self
                .companies_created
                .iter()
                .filter(|at| **at >= cutoff)
                .count() as i64)
        }

        async fn count_with_active_jobs(&self, _at: DateTime<Utc>) -> Result<i64, MetricsError> {
            Ok(self.companies_with_active_jobs)
        }

        async fn top_by_job_count(
            &self,
            _limit: usize,
        ) -> Result<Vec<CompanyJobRanking>, MetricsError> {
            Ok(self.company_job_rankings.clone())
        }

        async fn top_by_resume_count(
            &self,
            _limit: usize,
        ) -> Result<Vec<CompanyResumeRanking>, MetricsError> {
            Ok(self.company_resume_rankings.clone())
        }
    }

    #[async_trait]
    impl SubscriberMetrics for FakeStore {
        async fn count(&self) -> Result<i64, MetricsError> {
            Ok(self.subscriber_total)
        }
    }

    #[async_trait]
    impl SkillMetrics for FakeStore {
        async fn top_by_job_count(&self, _limit: usize) -> Result<Vec<SkillRanking>, MetricsError> {
            Ok(self.skill_rankings.clone())
        }
    }

    fn service(store: FakeStore) -> DashboardService {
        let store = Arc::new(store);
        DashboardService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        )
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn user(created_at: DateTime<Utc>, role: UserRole) -> FakeUser {
        FakeUser { created_at, role }
    }

    fn job(created_at: DateTime<Utc>, end_date: DateTime<Utc>) -> FakeJob {
        FakeJob {
            created_at,
            end_date,
            level: JobLevel::Middle,
        }
    }

    fn resume(created_at: DateTime<Utc>, status: ResumeStatus) -> FakeResume {
        FakeResume { created_at, status }
    }

    #[tokio::test]
    async fn test_user_growth_rate_month_over_month() {
        let mut store = FakeStore::default();
        store.subscriber_total = 40;
        // 102 long-standing accounts, 8 signups in May, 10 in the first half of June
        for _ in 0..102 {
            store.users.push(user(at(2023, 1, 10), UserRole::User));
        }
        for day in 1..=8 {
            store.users.push(user(at(2024, 5, day), UserRole::User));
        }
        for day in 1..=10 {
            store.users.push(user(at(2024, 6, day), UserRole::User));
        }

        let stats = service(store).dashboard_stats(at(2024, 6, 15)).await.unwrap();

        assert_eq!(stats.overview_stats.total_users, 120);
        assert_eq!(stats.overview_stats.total_subscribers, 40);
        assert_eq!(stats.overview_stats.user_growth_rate, 25.0);
        // nothing happened in either month for jobs and resumes
        assert_eq!(stats.overview_stats.job_growth_rate, 0.0);
        assert_eq!(stats.overview_stats.resume_growth_rate, 0.0);
    }

    #[tokio::test]
    async fn test_user_section_partitions_fixed_roles() {
        let now = at(2024, 6, 15);
        let mut store = FakeStore::default();
        store.users.push(user(at(2024, 1, 1), UserRole::Admin));
        store.users.push(user(at(2024, 1, 2), UserRole::Recruiter));
        store.users.push(user(at(2024, 6, 5), UserRole::Recruiter));
        store.users.push(user(at(2023, 7, 1), UserRole::User));
        store.users.push(user(now - Duration::days(10), UserRole::User));

        let stats = service(store).dashboard_stats(now).await.unwrap();

        assert_eq!(stats.user_stats.total_users, 5);
        assert_eq!(stats.user_stats.admin_count, 1);
        assert_eq!(stats.user_stats.recruiter_count, 2);
        assert_eq!(stats.user_stats.user_count, 2);
        // the June 5 signup and the 10-day-old one fall inside the 30-day window
        assert_eq!(stats.user_stats.active_users, 2);
        assert_eq!(stats.user_stats.new_users_this_month, 2);
    }

    #[tokio::test]
    async fn test_job_end_date_boundary() {
        let now = at(2024, 6, 15);
        let mut store = FakeStore::default();
        store.jobs.push(job(at(2024, 5, 1), now + Duration::days(1)));
        store.jobs.push(job(at(2024, 5, 1), now - Duration::days(1)));
        store.jobs.push(job(at(2024, 5, 1), now));

        let stats = service(store).dashboard_stats(now).await.unwrap();

        assert_eq!(stats.job_stats.total_jobs, 3);
        assert_eq!(stats.job_stats.active_jobs, 1);
        // the job ending exactly at the report instant is in neither bucket
        assert_eq!(stats.job_stats.expired_jobs, 1);
        assert_eq!(stats.job_stats.middle_jobs, 3);
    }

    #[tokio::test]
    async fn test_rankings_capped_at_ten() {
        let mut store = FakeStore::default();
        store.skill_rankings = (0..12)
            .map(|i| SkillRanking {
                skill_name: format!("skill-{i}"),
                job_count: 20 - i,
            })
            .collect();
        store.company_job_rankings = (0..12)
            .map(|i| CompanyJobRanking {
                company_id: i,
                company_name: format!("company-{i}"),
                job_count: 30 - i,
            })
            .collect();

        let stats = service(store).dashboard_stats(at(2024, 6, 15)).await.unwrap();

        assert_eq!(stats.job_stats.top_skills.len(), 10);
        assert_eq!(stats.top_performers.top_skills.len(), 10);
        assert_eq!(stats.company_stats.top_companies.len(), 10);
        assert_eq!(stats.job_stats.top_skills[0].skill_name, "skill-0");
    }

    #[tokio::test]
    async fn test_missing_company_names_become_placeholders() {
        let mut store = FakeStore::default();
        store.job_resume_rankings = vec![
            JobResumeRanking {
                job_id: 7,
                job_name: "Backend Engineer".to_string(),
                company_name: None,
                resume_count: 4,
            },
            JobResumeRanking {
                job_id: 8,
                job_name: "Data Analyst".to_string(),
                company_name: Some("Acme".to_string()),
                resume_count: 3,
            },
        ];

        let stats = service(store).dashboard_stats(at(2024, 6, 15)).await.unwrap();

        let jobs = &stats.top_performers.top_jobs_by_resumes;
        assert_eq!(jobs[0].company_name, "N/A");
        assert_eq!(jobs[1].company_name, "Acme");
    }

    #[tokio::test]
    async fn test_resume_approval_rate() {
        let mut store = FakeStore::default();
        store.resumes.push(resume(at(2024, 6, 2), ResumeStatus::Approved));
        store.resumes.push(resume(at(2024, 6, 3), ResumeStatus::Approved));
        store.resumes.push(resume(at(2024, 5, 4), ResumeStatus::Pending));
        store.resumes.push(resume(at(2024, 5, 5), ResumeStatus::Rejected));

        let stats = service(store).dashboard_stats(at(2024, 6, 15)).await.unwrap();

        assert_eq!(stats.resume_stats.total_resumes, 4);
        assert_eq!(stats.resume_stats.approved_resumes, 2);
        assert_eq!(stats.resume_stats.approval_rate, 50.0);
        assert_eq!(stats.resume_stats.new_resumes_this_month, 2);
    }

    #[tokio::test]
    async fn test_approval_rate_zero_without_resumes() {
        let stats = service(FakeStore::default())
            .dashboard_stats(at(2024, 6, 15))
            .await
            .unwrap();

        assert_eq!(stats.resume_stats.total_resumes, 0);
        assert_eq!(stats.resume_stats.approval_rate, 0.0);
    }

    #[tokio::test]
    async fn test_chart_covers_six_trailing_months() {
        let mut store = FakeStore::default();
        store.jobs.push(job(at(2024, 2, 10), at(2024, 8, 1)));
        store.jobs.push(job(at(2024, 6, 1), at(2024, 9, 1)));

        let stats = service(store).dashboard_stats(at(2024, 6, 15)).await.unwrap();

        let months: Vec<&str> = stats
            .chart_data
            .jobs_by_month
            .iter()
            .map(|p| p.month.as_str())
            .collect();
        assert_eq!(
            months,
            ["2024-01", "2024-02", "2024-03", "2024-04", "2024-05", "2024-06"]
        );
        let counts: Vec<i64> = stats.chart_data.jobs_by_month.iter().map(|p| p.count).collect();
        assert_eq!(counts, [0, 1, 0, 0, 0, 1]);
        assert_eq!(stats.chart_data.users_by_month.len(), 6);
        assert_eq!(stats.chart_data.resumes_by_month.len(), 6);
    }

    #[tokio::test]
    async fn test_one_failing_source_fails_the_whole_report() {
        let mut store = FakeStore::default();
        store.users_offline = true;

        let err = service(store)
            .dashboard_stats(at(2024, 6, 15))
            .await
            .unwrap_err();

        assert!(matches!(err, MetricsError::DataUnavailable(_)));
    }
}
