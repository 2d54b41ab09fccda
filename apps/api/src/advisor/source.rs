//! Recommendation sources: one trait, two backends, chosen once at startup.
//!
//! Default without credentials: `FallbackSource` (static, deterministic).
//! With a Gemini key: `LiveSource`, which falls back per call on any failure.
//!
//! `AppState` holds an `Arc<dyn RecommendationSource>`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::advisor::analysis::analyze_profile;
use crate::advisor::catalog;
use crate::advisor::live::LiveSource;
use crate::advisor::models::{
    CareerRecommendation, DataSource, LearningIntensity, LearningRoadmap, MarketInsights,
    ProfileAnalysis, SkillResources, SkillsGap, Sourced, TargetCareer, Timeframe,
};
use crate::advisor::roadmap::fallback_roadmap;
use crate::advisor::skills_gap::{build_skills_gap, fallback_narrative, partition_skills};
use crate::config::Config;
use crate::llm_client::{LlmClient, MODEL};
use crate::profile::models::StudentProfile;

/// Produces advisor data for a profile. Implementations never fail: whatever
/// goes wrong, the caller gets a populated result.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// The source this backend prefers. Individual results may still be fallback data.
    fn kind(&self) -> DataSource;

    async fn recommendations(&self, profile: &StudentProfile)
        -> Sourced<Vec<CareerRecommendation>>;

    async fn skills_gap(&self, profile: &StudentProfile, target: &TargetCareer)
        -> Sourced<SkillsGap>;

    async fn market_insights(&self) -> Sourced<MarketInsights>;

    async fn roadmap(
        &self,
        profile: &StudentProfile,
        target: &TargetCareer,
        timeframe: Timeframe,
        intensity: LearningIntensity,
    ) -> Sourced<LearningRoadmap>;

    async fn profile_analysis(&self, profile: &StudentProfile) -> Sourced<ProfileAnalysis>;

    async fn skill_resources(&self, skill: &str) -> Sourced<SkillResources>;
}

/// Static sample data. Identical output for identical input, no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSource;

impl FallbackSource {
    pub fn recommendations_for(&self, profile: &StudentProfile) -> Vec<CareerRecommendation> {
        catalog::sample_careers(profile)
    }

    pub fn skills_gap_for(&self, profile: &StudentProfile, target: &TargetCareer) -> SkillsGap {
        let partition = partition_skills(&profile.current_skills, &target.required_skills);
        let narrative = fallback_narrative(target, &partition);
        build_skills_gap(target, partition, narrative)
    }
}

#[async_trait]
impl RecommendationSource for FallbackSource {
    fn kind(&self) -> DataSource {
        DataSource::Fallback
    }

    async fn recommendations(
        &self,
        profile: &StudentProfile,
    ) -> Sourced<Vec<CareerRecommendation>> {
        Sourced::fallback(self.recommendations_for(profile))
    }

    async fn skills_gap(
        &self,
        profile: &StudentProfile,
        target: &TargetCareer,
    ) -> Sourced<SkillsGap> {
        Sourced::fallback(self.skills_gap_for(profile, target))
    }

    async fn market_insights(&self) -> Sourced<MarketInsights> {
        Sourced::fallback(catalog::market_insights())
    }

    async fn roadmap(
        &self,
        profile: &StudentProfile,
        target: &TargetCareer,
        timeframe: Timeframe,
        intensity: LearningIntensity,
    ) -> Sourced<LearningRoadmap> {
        Sourced::fallback(fallback_roadmap(profile, target, timeframe, intensity))
    }

    async fn profile_analysis(&self, profile: &StudentProfile) -> Sourced<ProfileAnalysis> {
        Sourced::fallback(analyze_profile(profile))
    }

    async fn skill_resources(&self, skill: &str) -> Sourced<SkillResources> {
        Sourced::fallback(catalog::skill_resources(skill))
    }
}

/// Picks the backend for the lifetime of the process.
pub fn select_source(config: &Config) -> Arc<dyn RecommendationSource> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        warn!("Gemini API key not configured. Using fallback data.");
        return Arc::new(FallbackSource);
    };

    match LlmClient::new(api_key, config.gemini_base_url.clone()) {
        Ok(llm) => {
            info!("LLM client initialized (model: {MODEL})");
            Arc::new(LiveSource::new(llm))
        }
        Err(e) => {
            warn!("Failed to initialize LLM client, using fallback data: {e}");
            Arc::new(FallbackSource)
        }
    }
}
