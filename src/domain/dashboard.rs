// Dashboard domain model - the assembled statistics report
//
// Every value here is built fresh per request and serialized once; field
// names follow the camelCase wire format the admin frontend consumes.
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub overview_stats: OverviewStats,
    pub user_stats: UserStats,
    pub job_stats: JobStats,
    pub resume_stats: ResumeStats,
    pub company_stats: CompanyStats,
    pub chart_data: ChartData,
    pub top_performers: TopPerformers,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_users: i64,
    pub total_jobs: i64,
    pub total_resumes: i64,
    pub total_companies: i64,
    pub total_subscribers: i64,
    pub user_growth_rate: f64,
    pub job_growth_rate: f64,
    pub resume_growth_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: i64,
    pub active_users: i64,
    pub new_users_this_month: i64,
    pub admin_count: i64,
    pub recruiter_count: i64,
    pub user_count: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub expired_jobs: i64,
    pub new_jobs_this_month: i64,
    pub top_skills: Vec<SkillCount>,
    pub intern_jobs: i64,
    pub fresher_jobs: i64,
    pub middle_jobs: i64,
    pub senior_jobs: i64,
    pub leader_jobs: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeStats {
    pub total_resumes: i64,
    pub pending_resumes: i64,
    pub reviewing_resumes: i64,
    pub approved_resumes: i64,
    pub rejected_resumes: i64,
    pub approval_rate: f64,
    pub new_resumes_this_month: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub total_companies: i64,
    pub active_companies: i64,
    pub new_companies_this_month: i64,
    pub top_companies: Vec<CompanyJobCount>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub users_by_month: Vec<MonthlyPoint>,
    pub jobs_by_month: Vec<MonthlyPoint>,
    pub resumes_by_month: Vec<MonthlyPoint>,
}

/// One month on the trailing six-month chart, labeled "YYYY-MM".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    pub month: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformers {
    pub top_companies_by_resumes: Vec<CompanyResumeCount>,
    pub top_jobs_by_resumes: Vec<JobResumeCount>,
    pub top_skills: Vec<SkillCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCount {
    pub skill_name: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyJobCount {
    pub company_id: i64,
    pub company_name: String,
    pub job_count: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResumeCount {
    pub company_id: i64,
    pub company_name: String,
    pub resume_count: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResumeCount {
    pub job_id: i64,
    pub job_name: String,
    pub company_name: String,
    pub resume_count: i64,
}
