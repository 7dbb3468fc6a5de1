// Closed category sets reported by the admin dashboard

/// Account roles broken out in the user section. Accounts with a role
/// outside this set exist in the store but are not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Recruiter,
    User,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Recruiter => "RECRUITER",
            UserRole::User => "USER",
        }
    }
}

/// Seniority levels a job posting can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobLevel {
    Intern,
    Fresher,
    Middle,
    Senior,
    Leader,
}

impl JobLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            JobLevel::Intern => "INTERN",
            JobLevel::Fresher => "FRESHER",
            JobLevel::Middle => "MIDDLE",
            JobLevel::Senior => "SENIOR",
            JobLevel::Leader => "LEADER",
        }
    }
}

/// Review pipeline states of a submitted resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResumeStatus {
    Pending,
    Reviewing,
    Approved,
    Rejected,
}

impl ResumeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ResumeStatus::Pending => "PENDING",
            ResumeStatus::Reviewing => "REVIEWING",
            ResumeStatus::Approved => "APPROVED",
            ResumeStatus::Rejected => "REJECTED",
        }
    }
}
