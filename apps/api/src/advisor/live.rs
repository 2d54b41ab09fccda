//! Gemini-backed source. Each operation makes exactly one call; anything short of a
//! response that deserializes into the expected schema and passes [`Validate`] is
//! replaced by the matching fallback data. Failures never reach the caller.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::advisor::analysis::analyze_profile;
use crate::advisor::catalog::{self, rank_careers};
use crate::advisor::models::{
    AnalysisPayload, CareerRecommendation, DataSource, GapNarrative, LearningIntensity,
    LearningRoadmap, MarketInsights, ProfileAnalysis, RecommendationsPayload, RoadmapPayload,
    SkillResources, SkillResourcesPayload, SkillsGap, Sourced, TargetCareer, Timeframe, Validate,
};
use crate::advisor::prompts::{
    analysis_prompt, market_insights_prompt, recommendations_prompt, roadmap_prompt,
    skill_resources_prompt, skills_gap_prompt, ADVISOR_SYSTEM,
};
use crate::advisor::roadmap::fallback_roadmap;
use crate::advisor::skills_gap::{build_skills_gap, fallback_narrative, partition_skills};
use crate::advisor::source::{FallbackSource, RecommendationSource};
use crate::llm_client::{LlmClient, LlmError};
use crate::profile::completeness::Readiness;
use crate::profile::models::StudentProfile;

pub struct LiveSource {
    llm: LlmClient,
    fallback: FallbackSource,
}

impl LiveSource {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            fallback: FallbackSource,
        }
    }

    /// One call, strict deserialization, then structural validation.
    async fn ask<T: DeserializeOwned + Validate>(&self, prompt: &str) -> Result<T, LlmError> {
        let payload: T = self.llm.call_json(prompt, ADVISOR_SYSTEM).await?;
        payload.validate().map_err(LlmError::Invalid)?;
        Ok(payload)
    }
}

/// Tags a live result, or swaps in fallback data and logs why.
fn settle<T, P>(
    operation: &str,
    result: Result<P, LlmError>,
    accept: impl FnOnce(P) -> T,
    fallback: impl FnOnce() -> T,
) -> Sourced<T> {
    match result {
        Ok(payload) => {
            info!("{operation}: using AI response");
            Sourced::ai(accept(payload))
        }
        Err(e) => {
            warn!("{operation}: AI call failed, using fallback data: {e}");
            Sourced::fallback(fallback())
        }
    }
}

#[async_trait]
impl RecommendationSource for LiveSource {
    fn kind(&self) -> DataSource {
        DataSource::Ai
    }

    async fn recommendations(
        &self,
        profile: &StudentProfile,
    ) -> Sourced<Vec<CareerRecommendation>> {
        let result = self
            .ask::<RecommendationsPayload>(&recommendations_prompt(profile))
            .await;

        settle(
            "recommendations",
            result,
            |payload| {
                let mut careers = payload.recommendations;
                rank_careers(&mut careers);
                careers
            },
            || self.fallback.recommendations_for(profile),
        )
    }

    async fn skills_gap(
        &self,
        profile: &StudentProfile,
        target: &TargetCareer,
    ) -> Sourced<SkillsGap> {
        let partition = partition_skills(&profile.current_skills, &target.required_skills);
        let result = self
            .ask::<GapNarrative>(&skills_gap_prompt(profile, target, &partition))
            .await;

        settle(
            "skills gap",
            result,
            |narrative| narrative,
            || fallback_narrative(target, &partition),
        )
        .map(|narrative| build_skills_gap(target, partition, narrative))
    }

    async fn market_insights(&self) -> Sourced<MarketInsights> {
        let result = self.ask::<MarketInsights>(&market_insights_prompt()).await;
        settle("market insights", result, |insights| insights, catalog::market_insights)
    }

    async fn roadmap(
        &self,
        profile: &StudentProfile,
        target: &TargetCareer,
        timeframe: Timeframe,
        intensity: LearningIntensity,
    ) -> Sourced<LearningRoadmap> {
        let result = self
            .ask::<RoadmapPayload>(&roadmap_prompt(profile, target, timeframe, intensity))
            .await;

        settle(
            "roadmap",
            result,
            |payload| LearningRoadmap {
                target_career: target.title.clone(),
                timeframe,
                intensity,
                overview: payload.overview,
                phases: payload.phases,
                resources: if payload.resources.is_empty() {
                    catalog::roadmap_resources()
                } else {
                    payload.resources
                },
            },
            || fallback_roadmap(profile, target, timeframe, intensity),
        )
    }

    async fn profile_analysis(&self, profile: &StudentProfile) -> Sourced<ProfileAnalysis> {
        let result = self.ask::<AnalysisPayload>(&analysis_prompt(profile)).await;

        settle(
            "profile analysis",
            result,
            |payload| ProfileAnalysis {
                student_name: profile.display_name().to_string(),
                strengths: payload.strengths,
                readiness: Readiness::from_percentage(profile.completion_percentage()),
                recommendations: payload.recommendations,
                next_steps: if payload.next_steps.is_empty() {
                    crate::advisor::analysis::next_steps()
                } else {
                    payload.next_steps
                },
            },
            || analyze_profile(profile),
        )
    }

    async fn skill_resources(&self, skill: &str) -> Sourced<SkillResources> {
        let result = self
            .ask::<SkillResourcesPayload>(&skill_resources_prompt(skill))
            .await;

        settle(
            "skill resources",
            result,
            |payload| SkillResources {
                skill: skill.trim().to_string(),
                online_courses: payload.online_courses,
                free_resources: payload.free_resources,
                practice_platforms: payload.practice_platforms,
                estimated_timeline: payload.estimated_timeline,
            },
            || catalog::skill_resources(skill),
        )
    }
}
