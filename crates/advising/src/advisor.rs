use crate::{
    RecordStore, Viewer,
    derive::{PROBATION_GPA, is_high_risk},
    error::{ProfileError, ProfileResult, Section, or_degraded},
};
use log::warn;
use models::{
    ids::AdvisorId,
    student::{Advisor, Student},
};
use serde::Serialize;

/// The advisor dashboard: every advisee plus those flagged as high-risk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorOverview {
    pub advisor: Advisor,
    pub advisees: Vec<Student>,
    pub high_risk: Vec<Student>,
    pub degraded: Vec<Section>,
}

pub async fn advisor_overview(
    store: &dyn RecordStore,
    viewer: &Viewer,
    advisor_id: &AdvisorId,
) -> ProfileResult<AdvisorOverview> {
    match viewer {
        Viewer::Faculty(id) if id == advisor_id => {}
        _ => {
            return Err(ProfileError::forbidden(format!(
                "not allowed to view advisor {advisor_id}"
            )));
        }
    }

    let advisor = store
        .find_advisor(advisor_id)
        .await?
        .ok_or_else(|| ProfileError::not_found("advisor", advisor_id))?;

    let mut degraded = Vec::new();
    let (advisees, high_risk) = futures::join!(
        store.find_advisees(advisor_id),
        high_risk_advisees(store, advisor_id),
    );
    let advisees = or_degraded(advisees, Section::Advisees, &mut degraded);
    let high_risk = or_degraded(high_risk, Section::HighRisk, &mut degraded);

    Ok(AdvisorOverview {
        advisor,
        advisees,
        high_risk,
        degraded,
    })
}

/// High-risk advisees from the dedicated relation, or from a GPA scan of the
/// advisor's students when that relation cannot be read. Both paths keep
/// only students currently assigned to `advisor_id` that pass
/// [`is_high_risk`]; relation rows left behind by a reassignment are dropped.
pub async fn high_risk_advisees(
    store: &dyn RecordStore,
    advisor_id: &AdvisorId,
) -> crate::StoreResult<Vec<Student>> {
    let students = match store.find_high_risk_by_advisor(advisor_id).await {
        Ok(students) => students,
        Err(err) => {
            warn!("Could not read high-risk relation for {advisor_id}: {err}; scanning by GPA");
            store
                .find_by_advisor_and_gpa_below(advisor_id, PROBATION_GPA)
                .await?
        }
    };

    Ok(students
        .into_iter()
        .filter(|student| student.advisor_id.as_ref() == Some(advisor_id) && is_high_risk(student))
        .collect())
}
