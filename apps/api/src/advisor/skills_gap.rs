//! Skills gap: set difference between a profile's skills and a career's required skills.
//!
//! Skills are compared after normalization (lowercased, split on whitespace and
//! `/ , ( ) - &`, rejoined with single spaces), so "Data-Analysis" equals "data analysis".
//! A required skill is:
//! - `have` when some current skill normalizes to the same text,
//! - `partial` when one normalized name contains the other starting at a word start
//!   ("Java" vs "JavaScript", "SEO" vs "SEO/SEM"; but not "R" vs "Programming"),
//! - `missing` otherwise.
//!
//! Every required skill lands in exactly one bucket; duplicates are dropped first.

use crate::advisor::models::{GapNarrative, SkillsGap, TargetCareer};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillPartition {
    pub have: Vec<String>,
    pub partial: Vec<String>,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
}

impl SkillPartition {
    pub fn required_count(&self) -> usize {
        self.have.len() + self.partial.len() + self.missing.len()
    }

    /// Share of required skills fully held, 0.0–100.0.
    pub fn match_percentage(&self) -> f64 {
        match self.required_count() {
            0 => 0.0,
            n => self.have.len() as f64 / n as f64 * 100.0,
        }
    }

    /// Required skills still to learn: partial ones first, then missing ones.
    pub fn to_learn(&self) -> Vec<String> {
        self.partial.iter().chain(&self.missing).cloned().collect()
    }
}

fn normalize(skill: &str) -> String {
    skill
        .split(|c: char| c.is_whitespace() || matches!(c, '/' | ',' | '(' | ')' | '-' | '&'))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when `needle` occurs in `haystack` beginning at the start of a word.
fn contains_at_word_start(haystack: &str, needle: &str) -> bool {
    haystack
        .match_indices(needle)
        .any(|(i, _)| i == 0 || haystack.as_bytes()[i - 1] == b' ')
}

#[derive(Debug, PartialEq)]
enum Coverage {
    Full,
    Partial,
    None,
}

fn coverage(required: &str, current: &[String]) -> Coverage {
    if current.iter().any(|c| c == required) {
        Coverage::Full
    } else if current
        .iter()
        .any(|c| contains_at_word_start(c, required) || contains_at_word_start(required, c))
    {
        Coverage::Partial
    } else {
        Coverage::None
    }
}

fn dedup_skills(skills: &[String]) -> Vec<(String, String)> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for skill in skills {
        let key = normalize(skill);
        if key.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key.clone());
        out.push((skill.trim().to_string(), key));
    }
    out
}

pub fn partition_skills(current: &[String], required: &[String]) -> SkillPartition {
    let current = dedup_skills(current);
    let required = dedup_skills(required);

    let current_keys: Vec<String> = current.iter().map(|(_, k)| k.clone()).collect();
    let required_keys: Vec<String> = required.iter().map(|(_, k)| k.clone()).collect();

    let mut partition = SkillPartition::default();

    for (name, key) in &required {
        match coverage(key, &current_keys) {
            Coverage::Full => partition.have.push(name.clone()),
            Coverage::Partial => partition.partial.push(name.clone()),
            Coverage::None => partition.missing.push(name.clone()),
        }
    }

    partition.extra = current
        .into_iter()
        .filter(|(_, key)| coverage(key, &required_keys) == Coverage::None)
        .map(|(name, _)| name)
        .collect();

    partition
}

/// Template narrative used when no AI narrative is available.
pub fn fallback_narrative(target: &TargetCareer, partition: &SkillPartition) -> GapNarrative {
    let mut gap_analysis = format!(
        "Based on your profile and the {} career path, here's your skills analysis. \
         Strengths: you already have {} out of {} required skills.",
        target.title,
        partition.have.len(),
        partition.required_count()
    );
    if !partition.partial.is_empty() {
        gap_analysis.push_str(&format!(
            " You have a head start on {} more: {}.",
            partition.partial.len(),
            partition.partial.join(", ")
        ));
    }
    gap_analysis.push_str(&format!(
        " Areas for development: you need to develop {} additional skills to be fully prepared \
         for this career. Focus on building the missing skills through online courses, \
         practical projects, and hands-on experience.",
        partition.missing.len() + partition.partial.len()
    ));

    GapNarrative {
        gap_analysis,
        recommendations: "Immediate actions: \
            1. Enroll in online courses for your top 2-3 missing skills. \
            2. Start working on practical projects to build your portfolio. \
            3. Connect with professionals in this field for mentorship. \
            4. Join relevant communities and forums. \
            5. Consider internships or entry-level positions to gain experience."
            .to_string(),
    }
}

pub fn build_skills_gap(
    target: &TargetCareer,
    partition: SkillPartition,
    narrative: GapNarrative,
) -> SkillsGap {
    SkillsGap {
        career_title: target.title.clone(),
        match_percentage: partition.match_percentage(),
        have: partition.have,
        partial: partition.partial,
        missing: partition.missing,
        extra: partition.extra,
        gap_analysis: narrative.gap_analysis,
        recommendations: narrative.recommendations,
    }
}
