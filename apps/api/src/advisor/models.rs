//! Data shapes produced by the advisor. The same types are used for AI responses
//! and for fallback data, so callers never have to tell the two apart.
//!
//! AI-facing types use `deny_unknown_fields` and implement [`Validate`]: a response
//! that deserializes but does not make sense is rejected just like malformed JSON.

use serde::{Deserialize, Serialize};

use crate::profile::completeness::Readiness;

/// Where a result came from. Exposed for transparency only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Ai,
    Fallback,
}

/// A result tagged with its origin.
#[derive(Debug, Clone, Serialize)]
pub struct Sourced<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    pub fn ai(data: T) -> Self {
        Self {
            data,
            source: DataSource::Ai,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            data,
            source: DataSource::Fallback,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            data: f(self.data),
            source: self.source,
        }
    }
}

/// Structural checks applied to AI output after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is empty"))
    } else {
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Career recommendations
// ────────────────────────────────────────────────────────────────────────────

pub const MAX_MATCH_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CareerRecommendation {
    pub title: String,
    pub category: String,
    pub match_score: u8, // 0 – 100
    pub description: String,
    #[serde(default)]
    pub why_suitable: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub education_required: String,
    pub salary_range: String,
    #[serde(default)]
    pub job_outlook: String,
    #[serde(default)]
    pub career_path: String,
    #[serde(default)]
    pub locations: Vec<String>,
}

impl Validate for CareerRecommendation {
    fn validate(&self) -> Result<(), String> {
        require_text("title", &self.title)?;
        require_text("category", &self.category)?;
        if self.match_score > MAX_MATCH_SCORE {
            return Err(format!(
                "match_score {} for '{}' exceeds {MAX_MATCH_SCORE}",
                self.match_score, self.title
            ));
        }
        if self.required_skills.iter().all(|s| s.trim().is_empty()) {
            return Err(format!("'{}' lists no required skills", self.title));
        }
        Ok(())
    }
}

/// Envelope the model is asked to return for recommendations.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendationsPayload {
    pub recommendations: Vec<CareerRecommendation>,
}

impl Validate for RecommendationsPayload {
    fn validate(&self) -> Result<(), String> {
        if self.recommendations.is_empty() {
            return Err("no recommendations returned".to_string());
        }
        self.recommendations.iter().try_for_each(Validate::validate)
    }
}

/// The career a gap analysis or roadmap is built for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetCareer {
    pub title: String,
    pub required_skills: Vec<String>,
}

impl From<&CareerRecommendation> for TargetCareer {
    fn from(career: &CareerRecommendation) -> Self {
        Self {
            title: career.title.clone(),
            required_skills: career.required_skills.clone(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills gap
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsGap {
    pub career_title: String,
    /// Required skills the student already lists.
    pub have: Vec<String>,
    /// Required skills only partly covered (e.g. "SEO" against "SEO/SEM").
    pub partial: Vec<String>,
    /// Required skills with no counterpart in the profile.
    pub missing: Vec<String>,
    /// Profile skills unrelated to this career.
    pub extra: Vec<String>,
    pub match_percentage: f64,
    pub gap_analysis: String,
    pub recommendations: String,
}

/// Narrative half of a gap analysis; the partition itself is always computed locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GapNarrative {
    pub gap_analysis: String,
    pub recommendations: String,
}

impl Validate for GapNarrative {
    fn validate(&self) -> Result<(), String> {
        require_text("gap_analysis", &self.gap_analysis)?;
        require_text("recommendations", &self.recommendations)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Market insights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectorGrowth {
    pub sector: String,
    /// Year-over-year growth, percent.
    pub growth_rate: f32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillDemand {
    pub skill: String,
    pub demand_level: DemandLevel,
}

/// Salary ladder for one role, in lakhs per annum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SalaryTrend {
    pub role: String,
    pub entry_level_lpa: f32,
    pub mid_level_lpa: f32,
    pub senior_level_lpa: f32,
    pub average_lpa: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmergingRole {
    pub title: String,
    pub growth_potential: DemandLevel,
    pub description: String,
    pub why_emerging: String,
    #[serde(default)]
    pub key_skills: Vec<String>,
    pub salary_range: String,
    pub experience_level: String,
    #[serde(default)]
    pub remote_friendly: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Employer {
    pub name: String,
    /// Headcount band, e.g. "300,000+".
    pub size: String,
    pub known_for: String,
    pub hiring_trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployerGroup {
    pub category: String,
    pub employers: Vec<Employer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketInsights {
    pub trends_summary: String,
    pub growing_sectors: Vec<SectorGrowth>,
    pub in_demand_skills: Vec<SkillDemand>,
    #[serde(default)]
    pub salary_trends: Vec<SalaryTrend>,
    #[serde(default)]
    pub emerging_roles: Vec<EmergingRole>,
    #[serde(default)]
    pub top_employers: Vec<EmployerGroup>,
}

impl Validate for MarketInsights {
    fn validate(&self) -> Result<(), String> {
        require_text("trends_summary", &self.trends_summary)?;
        if self.growing_sectors.is_empty() {
            return Err("no growing sectors".to_string());
        }
        if self.in_demand_skills.is_empty() {
            return Err("no in-demand skills".to_string());
        }
        for sector in &self.growing_sectors {
            require_text("sector", &sector.sector)?;
            if !sector.growth_rate.is_finite() {
                return Err(format!("growth_rate for '{}' is not a number", sector.sector));
            }
        }
        for trend in &self.salary_trends {
            require_text("role", &trend.role)?;
            let ladder = [trend.entry_level_lpa, trend.mid_level_lpa, trend.senior_level_lpa];
            if ladder.iter().any(|lpa| !lpa.is_finite() || *lpa < 0.0) {
                return Err(format!("salary for '{}' is not a valid amount", trend.role));
            }
        }
        for role in &self.emerging_roles {
            require_text("title", &role.title)?;
        }
        for group in &self.top_employers {
            require_text("category", &group.category)?;
            for employer in &group.employers {
                require_text("name", &employer.name)?;
            }
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Learning roadmap
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "6 months")]
    SixMonths,
    #[default]
    #[serde(rename = "1 year")]
    OneYear,
    #[serde(rename = "2 years")]
    TwoYears,
    #[serde(rename = "3 years")]
    ThreeYears,
}

impl Timeframe {
    pub fn label(self) -> &'static str {
        match self {
            Timeframe::SixMonths => "6 months",
            Timeframe::OneYear => "1 year",
            Timeframe::TwoYears => "2 years",
            Timeframe::ThreeYears => "3 years",
        }
    }

    /// Number of phases and the length of each phase.
    pub fn phase_plan(self) -> (usize, &'static str) {
        match self {
            Timeframe::SixMonths => (3, "2 months"),
            Timeframe::OneYear => (4, "3 months"),
            Timeframe::TwoYears => (6, "4 months"),
            Timeframe::ThreeYears => (8, "4-5 months"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningIntensity {
    Light,
    #[default]
    Moderate,
    Intensive,
}

impl LearningIntensity {
    pub fn label(self) -> &'static str {
        match self {
            LearningIntensity::Light => "Light (5-10 hrs/week)",
            LearningIntensity::Moderate => "Moderate (10-20 hrs/week)",
            LearningIntensity::Intensive => "Intensive (20+ hrs/week)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoadmapPhase {
    pub title: String,
    pub duration: String,
    pub objective: String,
    pub skills_to_learn: Vec<String>,
    pub activities: Vec<String>,
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRoadmap {
    pub target_career: String,
    pub timeframe: Timeframe,
    pub intensity: LearningIntensity,
    pub overview: String,
    pub phases: Vec<RoadmapPhase>,
    pub resources: Vec<ResourceGroup>,
}

/// The part of a roadmap the model is asked to produce.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoadmapPayload {
    pub overview: String,
    pub phases: Vec<RoadmapPhase>,
    #[serde(default)]
    pub resources: Vec<ResourceGroup>,
}

impl Validate for RoadmapPayload {
    fn validate(&self) -> Result<(), String> {
        require_text("overview", &self.overview)?;
        if self.phases.is_empty() {
            return Err("roadmap has no phases".to_string());
        }
        for phase in &self.phases {
            require_text("phase title", &phase.title)?;
            require_text("phase duration", &phase.duration)?;
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profile analysis and skill resources
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub student_name: String,
    pub strengths: Vec<String>,
    pub readiness: Readiness,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisPayload {
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

impl Validate for AnalysisPayload {
    fn validate(&self) -> Result<(), String> {
        if self.strengths.is_empty() && self.recommendations.is_empty() {
            return Err("analysis has neither strengths nor recommendations".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResources {
    pub skill: String,
    pub online_courses: Vec<String>,
    pub free_resources: Vec<String>,
    pub practice_platforms: Vec<String>,
    pub estimated_timeline: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillResourcesPayload {
    pub online_courses: Vec<String>,
    pub free_resources: Vec<String>,
    pub practice_platforms: Vec<String>,
    pub estimated_timeline: String,
}

impl Validate for SkillResourcesPayload {
    fn validate(&self) -> Result<(), String> {
        if self.online_courses.is_empty()
            && self.free_resources.is_empty()
            && self.practice_platforms.is_empty()
        {
            return Err("no resources listed".to_string());
        }
        require_text("estimated_timeline", &self.estimated_timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn career_json() -> serde_json::Value {
        json!({
            "title": "Data Engineer",
            "category": "Technology",
            "match_score": 77,
            "description": "Builds data pipelines",
            "required_skills": ["Python", "SQL", "Spark"],
            "salary_range": "7-22 LPA"
        })
    }

    #[test]
    fn test_career_optional_fields_default() {
        let career: CareerRecommendation = serde_json::from_value(career_json()).unwrap();
        assert!(career.locations.is_empty());
        assert!(career.career_path.is_empty());
        assert!(career.validate().is_ok());
    }

    #[test]
    fn test_career_rejects_unknown_fields() {
        let mut value = career_json();
        value["confidence"] = json!(0.9);
        assert!(serde_json::from_value::<CareerRecommendation>(value).is_err());
    }

    #[test]
    fn test_career_rejects_negative_score() {
        let mut value = career_json();
        value["match_score"] = json!(-5);
        assert!(serde_json::from_value::<CareerRecommendation>(value).is_err());
    }

    #[test]
    fn test_career_score_over_hundred_fails_validation() {
        let mut value = career_json();
        value["match_score"] = json!(140);
        let career: CareerRecommendation = serde_json::from_value(value).unwrap();
        assert!(career.validate().is_err());
    }

    #[test]
    fn test_empty_recommendations_payload_is_invalid() {
        let payload: RecommendationsPayload =
            serde_json::from_value(json!({"recommendations": []})).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_timeframe_uses_form_labels() {
        let tf: Timeframe = serde_json::from_str("\"2 years\"").unwrap();
        assert_eq!(tf, Timeframe::TwoYears);
        assert_eq!(serde_json::to_string(&Timeframe::SixMonths).unwrap(), "\"6 months\"");
    }

    #[test]
    fn test_demand_level_very_high_label() {
        let level: DemandLevel = serde_json::from_str("\"Very High\"").unwrap();
        assert_eq!(level, DemandLevel::VeryHigh);
    }

    #[test]
    fn test_sourced_serializes_source_tag() {
        let value = serde_json::to_value(Sourced::fallback(vec![1, 2])).unwrap();
        assert_eq!(value, json!({"data": [1, 2], "source": "fallback"}));
    }

    #[test]
    fn test_roadmap_payload_without_phases_is_invalid() {
        let payload: RoadmapPayload =
            serde_json::from_value(json!({"overview": "x", "phases": []})).unwrap();
        assert!(payload.validate().is_err());
    }
}
