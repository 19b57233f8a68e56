use crate::dtos::profile::StudentResponse;
use advising::advisor::AdvisorOverview;
use models::student::Advisor;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AdvisorResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub department_id: String,
}

impl From<Advisor> for AdvisorResponse {
    fn from(advisor: Advisor) -> Self {
        Self {
            full_name: advisor.full_name(),
            id: advisor.id.into(),
            first_name: advisor.first_name,
            last_name: advisor.last_name,
            email: advisor.email,
            department_id: advisor.department_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdvisorDashboardResponse {
    pub advisor: AdvisorResponse,
    pub advisees: Vec<StudentResponse>,
    pub high_risk: Vec<StudentResponse>,
    pub degraded: Vec<String>,
}

impl From<AdvisorOverview> for AdvisorDashboardResponse {
    fn from(overview: AdvisorOverview) -> Self {
        Self {
            advisor: overview.advisor.into(),
            advisees: overview.advisees.into_iter().map(Into::into).collect(),
            high_risk: overview.high_risk.into_iter().map(Into::into).collect(),
            degraded: overview
                .degraded
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
