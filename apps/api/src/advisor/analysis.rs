//! Rule-based profile analysis used when the AI is unavailable.

use crate::advisor::models::ProfileAnalysis;
use crate::profile::completeness::Readiness;
use crate::profile::models::StudentProfile;

/// Academic performance above this percentage is called out as a strength.
const STRONG_PERFORMANCE: f32 = 75.0;

pub fn next_steps() -> Vec<String> {
    vec![
        "Explore career recommendations based on your profile".to_string(),
        "Analyze skills gaps for target careers".to_string(),
        "Create a learning roadmap for skill development".to_string(),
    ]
}

pub fn analyze_profile(profile: &StudentProfile) -> ProfileAnalysis {
    let mut strengths = Vec::new();
    if !profile.technical_skills.is_empty() {
        strengths.push(format!(
            "Strong technical foundation with skills in {}",
            first_n(&profile.technical_skills, 3)
        ));
    }
    if profile
        .academic_performance
        .is_some_and(|p| p > STRONG_PERFORMANCE)
    {
        strengths.push("Excellent academic performance".to_string());
    }
    if !profile.interests.is_empty() {
        strengths.push(format!(
            "Clear interests in {}",
            first_n(&profile.interests, 2)
        ));
    }
    if strengths.is_empty() {
        strengths.push("Complete your profile to see personalized strengths".to_string());
    }

    let mut recommendations = Vec::new();
    if profile.technical_skills.is_empty() {
        recommendations
            .push("Consider developing technical skills relevant to your field".to_string());
    }
    if profile
        .career_goals
        .as_deref()
        .map_or(true, |g| g.trim().is_empty())
    {
        recommendations.push("Define clearer career goals and aspirations".to_string());
    }
    if recommendations.is_empty() {
        recommendations
            .push("Continue building your skills and exploring career options".to_string());
    }

    ProfileAnalysis {
        student_name: profile.display_name().to_string(),
        strengths,
        readiness: Readiness::from_percentage(profile.completion_percentage()),
        recommendations,
        next_steps: next_steps(),
    }
}

fn first_n(items: &[String], n: usize) -> String {
    items.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}
