//! Template roadmap used in fallback mode.
//!
//! The timeframe fixes the number of phases; the skills still to learn are spread
//! over them in order, earlier phases taking the remainder.

use crate::advisor::catalog::roadmap_resources;
use crate::advisor::models::{
    LearningIntensity, LearningRoadmap, RoadmapPhase, TargetCareer, Timeframe,
};
use crate::advisor::skills_gap::partition_skills;
use crate::profile::models::StudentProfile;

const PHASE_ACTIVITIES: &[&str] = &[
    "Online courses and tutorials",
    "Hands-on projects",
    "Practice and application",
    "Community participation",
];

pub fn fallback_roadmap(
    profile: &StudentProfile,
    target: &TargetCareer,
    timeframe: Timeframe,
    intensity: LearningIntensity,
) -> LearningRoadmap {
    let to_learn = partition_skills(&profile.current_skills, &target.required_skills).to_learn();
    let (phase_count, duration) = timeframe.phase_plan();

    let phases = split_evenly(&to_learn, phase_count)
        .into_iter()
        .enumerate()
        .map(|(i, skills)| build_phase(i, phase_count, duration, skills))
        .collect();

    LearningRoadmap {
        target_career: target.title.clone(),
        timeframe,
        intensity,
        overview: format!(
            "This {} roadmap is designed to help you transition into {}. The plan is divided \
             into {} phases at a {} pace, each focusing on specific skills and milestones. \
             Key focus areas: skill development through practical learning, building a strong \
             portfolio, networking and community engagement, and continuous practice.",
            timeframe.label(),
            target.title,
            phase_count,
            intensity.label().to_lowercase(),
        ),
        phases,
        resources: roadmap_resources(),
    }
}

fn build_phase(
    index: usize,
    phase_count: usize,
    duration: &str,
    skills: Vec<String>,
) -> RoadmapPhase {
    let (title, objective) = if index == 0 {
        (
            "Foundation Building".to_string(),
            "Build fundamental skills and knowledge base".to_string(),
        )
    } else if index == phase_count - 1 {
        (
            "Advanced Skills & Specialization".to_string(),
            "Master advanced concepts and specialize in your chosen area".to_string(),
        )
    } else {
        (
            format!("Skill Development Phase {index}"),
            "Develop intermediate skills and practical experience".to_string(),
        )
    };

    RoadmapPhase {
        title,
        duration: duration.to_string(),
        objective,
        activities: PHASE_ACTIVITIES.iter().map(|s| s.to_string()).collect(),
        milestones: vec![
            format!("Complete {} skill modules", skills.len()),
            "Build 1-2 practical projects".to_string(),
            "Join relevant communities".to_string(),
            "Update portfolio/resume".to_string(),
        ],
        skills_to_learn: skills,
    }
}

/// Splits `items` into `parts` consecutive chunks whose sizes differ by at most one.
fn split_evenly(items: &[String], parts: usize) -> Vec<Vec<String>> {
    let base = items.len() / parts;
    let remainder = items.len() % parts;

    let mut chunks = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 0..parts {
        let len = base + usize::from(i < remainder);
        chunks.push(items[start..start + len].to_vec());
        start += len;
    }
    chunks
}
