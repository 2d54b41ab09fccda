use serde::{Deserialize, Serialize};

use crate::profile::models::{ProfileField, ProfileSection, StudentProfile};

/// Completion above this percentage counts as career-ready.
pub const READINESS_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    High,
    Developing,
}

impl Readiness {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > READINESS_THRESHOLD {
            Readiness::High
        } else {
            Readiness::Developing
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCompletion {
    pub section: ProfileSection,
    pub filled: usize,
    pub total: usize,
    pub percentage: f64,
    pub missing_fields: Vec<ProfileField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub percentage: f64,
    pub filled: usize,
    pub total: usize,
    pub readiness: Readiness,
    pub sections: Vec<SectionCompletion>,
    pub missing_fields: Vec<ProfileField>,
}

pub fn compute_completeness_report(profile: &StudentProfile) -> CompletenessReport {
    let mut sections = Vec::with_capacity(ProfileSection::ALL.len());
    let mut missing_fields = Vec::new();

    for section in ProfileSection::ALL {
        let fields: Vec<ProfileField> = ProfileField::ALL
            .iter()
            .copied()
            .filter(|f| f.section() == section)
            .collect();

        let section_missing: Vec<ProfileField> = fields
            .iter()
            .copied()
            .filter(|f| !profile.is_filled(*f))
            .collect();

        let total = fields.len();
        let filled = total - section_missing.len();

        missing_fields.extend(section_missing.iter().copied());
        sections.push(SectionCompletion {
            section,
            filled,
            total,
            percentage: percentage_of(filled, total),
            missing_fields: section_missing,
        });
    }

    let total = ProfileField::ALL.len();
    let filled = total - missing_fields.len();
    let percentage = profile.completion_percentage();

    CompletenessReport {
        percentage,
        filled,
        total,
        readiness: Readiness::from_percentage(percentage),
        sections,
        missing_fields,
    }
}

fn percentage_of(filled: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        filled as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::complete_profile;

    #[test]
    fn test_empty_profile_report() {
        let report = compute_completeness_report(&StudentProfile::default());
        assert_eq!(report.percentage, 0.0);
        assert_eq!(report.filled, 0);
        assert_eq!(report.total, 18);
        assert_eq!(report.missing_fields.len(), 18);
        assert_eq!(report.readiness, Readiness::Developing);
        assert!(report.sections.iter().all(|s| s.filled == 0));
    }

    #[test]
    fn test_complete_profile_report() {
        let report = compute_completeness_report(&complete_profile());
        assert_eq!(report.filled, 18);
        assert!(report.missing_fields.is_empty());
        assert_eq!(report.readiness, Readiness::High);
        assert!(report
            .sections
            .iter()
            .all(|s| (s.percentage - 100.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_section_totals_cover_all_fields() {
        let report = compute_completeness_report(&StudentProfile::default());
        let total: usize = report.sections.iter().map(|s| s.total).sum();
        assert_eq!(total, ProfileField::ALL.len());
    }

    #[test]
    fn test_missing_field_listed_in_its_section() {
        let mut profile = complete_profile();
        profile.career_goals = None;
        let report = compute_completeness_report(&profile);

        assert_eq!(report.missing_fields, vec![ProfileField::CareerGoals]);
        let prefs = report
            .sections
            .iter()
            .find(|s| s.section == ProfileSection::Preferences)
            .unwrap();
        assert_eq!(prefs.missing_fields, vec![ProfileField::CareerGoals]);
        assert_eq!(prefs.filled, prefs.total - 1);
    }

    #[test]
    fn test_readiness_threshold_is_exclusive() {
        assert_eq!(Readiness::from_percentage(70.0), Readiness::Developing);
        assert_eq!(Readiness::from_percentage(70.1), Readiness::High);
    }
}
