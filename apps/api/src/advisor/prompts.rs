// All LLM prompt constants for the advisor.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::advisor::models::{LearningIntensity, TargetCareer, Timeframe};
use crate::advisor::skills_gap::SkillPartition;
use crate::llm_client::prompts::{fill, join_or_none, SCHEMA_INSTRUCTION};
use crate::profile::models::StudentProfile;

/// System prompt for every advisor call; enforces JSON-only output.
pub const ADVISOR_SYSTEM: &str = "You are an experienced career counsellor for students in India. \
    You give practical, realistic guidance grounded in the Indian job market. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Replace: {schema_instruction}, {profile}
pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = r#"{schema_instruction}

Based on this student profile, provide 5-6 career recommendations.

STUDENT PROFILE:
{profile}

Return a JSON object with this EXACT schema:
{
  "recommendations": [
    {
      "title": "Data Scientist",
      "category": "Technology",
      "match_score": 82,
      "description": "Analyze complex data to derive insights and build predictive models",
      "why_suitable": "Why this fits the student, referencing their profile",
      "required_skills": ["Python", "Statistics", "Machine Learning"],
      "education_required": "Bachelor's in Engineering, Mathematics, or related field",
      "salary_range": "8-30 LPA",
      "job_outlook": "High demand across industries",
      "career_path": "Data Analyst → Data Scientist → Senior Data Scientist",
      "locations": ["Bangalore", "Remote"]
    }
  ]
}

RULES:
1. match_score is an integer from 0 to 100
2. category is one of: Technology, Healthcare, Business & Management, Sales & Marketing, Creative & Media, Education, Government & Public Service, Finance
3. salary_range uses LPA (lakhs per annum)
4. required_skills lists 3-6 concrete skills"#;

/// Replace: {schema_instruction}, {career_title}, {have}, {partial}, {missing}, {current_skills}
pub const SKILLS_GAP_PROMPT_TEMPLATE: &str = r#"{schema_instruction}

Analyze the skills gap for a student pursuing a career as {career_title}.

Current skills: {current_skills}
Required skills already held: {have}
Required skills partly covered: {partial}
Required skills missing: {missing}

Return a JSON object with this EXACT schema:
{
  "gap_analysis": "Two or three paragraphs on strengths and areas for development",
  "recommendations": "Concrete, ordered next actions for closing the gap"
}"#;

/// Replace: {schema_instruction}
pub const MARKET_INSIGHTS_PROMPT_TEMPLATE: &str = r#"{schema_instruction}

Summarize current job market insights for students entering the Indian job market.

Return a JSON object with this EXACT schema:
{
  "trends_summary": "A paragraph on the key market trends",
  "growing_sectors": [
    {"sector": "Technology", "growth_rate": 25.0, "description": "Continued digital transformation"}
  ],
  "in_demand_skills": [
    {"skill": "Cloud Computing", "demand_level": "Very High"}
  ],
  "salary_trends": [
    {"role": "Software Engineer", "entry_level_lpa": 8.0, "mid_level_lpa": 20.0, "senior_level_lpa": 26.0, "average_lpa": 17.9}
  ],
  "emerging_roles": [
    {
      "title": "AI Ethics Specialist",
      "growth_potential": "Very High",
      "description": "What the role does",
      "why_emerging": "Why demand for it is rising",
      "key_skills": ["Machine Learning", "Ethics"],
      "salary_range": "15-30 LPA",
      "experience_level": "Mid to Senior",
      "remote_friendly": true
    }
  ],
  "top_employers": [
    {
      "category": "Technology Companies",
      "employers": [
        {"name": "Infosys", "size": "300,000+", "known_for": "Digital transformation", "hiring_trend": "Focus on digital skills"}
      ]
    }
  ]
}

demand_level and growth_potential are exactly one of: "Very High", "High", "Moderate", "Low".
growth_rate is a percentage as a number. Salaries are in lakhs per annum as numbers."#;

/// Replace: {schema_instruction}, {student_name}, {career_title}, {timeframe},
///          {phase_count}, {intensity}, {current_skills}, {required_skills}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"{schema_instruction}

Create a learning roadmap for {student_name}, targeting a career as {career_title}.

Timeframe: {timeframe} (split into {phase_count} sequential phases)
Learning intensity: {intensity}
Current skills: {current_skills}
Required skills: {required_skills}

Return a JSON object with this EXACT schema:
{
  "overview": "A paragraph describing the plan",
  "phases": [
    {
      "title": "Foundation Building",
      "duration": "3 months",
      "objective": "Build fundamental skills and knowledge base",
      "skills_to_learn": ["Statistics"],
      "activities": ["Online courses and tutorials", "Hands-on projects"],
      "milestones": ["Complete 2 skill modules", "Build 1-2 practical projects"]
    }
  ],
  "resources": [
    {"category": "Online Platforms", "items": ["Coursera - University courses and specializations"]}
  ]
}

Phases are listed in the order they should be completed."#;

/// Replace: {schema_instruction}, {profile}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"{schema_instruction}

Analyze this student profile and identify strengths and improvement areas.

STUDENT PROFILE:
{profile}

Return a JSON object with this EXACT schema:
{
  "strengths": ["Strong technical foundation with skills in Python"],
  "recommendations": ["Define clearer career goals and aspirations"],
  "next_steps": ["Explore career recommendations based on your profile"]
}"#;

/// Replace: {schema_instruction}, {skill}
pub const SKILL_RESOURCES_PROMPT_TEMPLATE: &str = r#"{schema_instruction}

List learning resources for the skill "{skill}" suitable for a student.

Return a JSON object with this EXACT schema:
{
  "online_courses": ["Coursera - ..."],
  "free_resources": ["YouTube tutorials on ..."],
  "practice_platforms": ["HackerRank - ..."],
  "estimated_timeline": "3-6 months with consistent practice"
}"#;

fn or_unknown(value: &Option<String>) -> &str {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("not specified")
}

/// Renders the profile as the plain-text block embedded in prompts.
pub fn render_profile(profile: &StudentProfile) -> String {
    let performance = profile
        .academic_performance
        .map(|p| format!("{p:.1}%"))
        .unwrap_or_else(|| "not specified".to_string());

    format!(
        "- Education: {} in {}\n\
         - Academic performance: {}\n\
         - Subjects: {}\n\
         - Current skills: {}\n\
         - Technical skills: {}\n\
         - Interests: {}\n\
         - Personality traits: {}\n\
         - Location: {}\n\
         - Preferred work environment: {}\n\
         - Preferred job types: {}\n\
         - Salary expectations: {}\n\
         - Career goals: {}",
        or_unknown(&profile.education_level),
        or_unknown(&profile.stream),
        performance,
        join_or_none(&profile.subjects),
        join_or_none(&profile.current_skills),
        join_or_none(&profile.technical_skills),
        join_or_none(&profile.interests),
        join_or_none(&profile.personality_traits),
        or_unknown(&profile.location),
        join_or_none(&profile.work_environment),
        join_or_none(&profile.job_type_preference),
        or_unknown(&profile.salary_expectations),
        or_unknown(&profile.career_goals),
    )
}

pub fn recommendations_prompt(profile: &StudentProfile) -> String {
    fill(
        RECOMMENDATIONS_PROMPT_TEMPLATE,
        &[
            ("schema_instruction", SCHEMA_INSTRUCTION),
            ("profile", &render_profile(profile)),
        ],
    )
}

pub fn skills_gap_prompt(
    profile: &StudentProfile,
    target: &TargetCareer,
    partition: &SkillPartition,
) -> String {
    fill(
        SKILLS_GAP_PROMPT_TEMPLATE,
        &[
            ("schema_instruction", SCHEMA_INSTRUCTION),
            ("career_title", &target.title),
            ("current_skills", &join_or_none(&profile.current_skills)),
            ("have", &join_or_none(&partition.have)),
            ("partial", &join_or_none(&partition.partial)),
            ("missing", &join_or_none(&partition.missing)),
        ],
    )
}

pub fn market_insights_prompt() -> String {
    fill(
        MARKET_INSIGHTS_PROMPT_TEMPLATE,
        &[("schema_instruction", SCHEMA_INSTRUCTION)],
    )
}

pub fn roadmap_prompt(
    profile: &StudentProfile,
    target: &TargetCareer,
    timeframe: Timeframe,
    intensity: LearningIntensity,
) -> String {
    let (phase_count, _) = timeframe.phase_plan();
    fill(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("schema_instruction", SCHEMA_INSTRUCTION),
            ("student_name", profile.display_name()),
            ("career_title", &target.title),
            ("timeframe", timeframe.label()),
            ("phase_count", &phase_count.to_string()),
            ("intensity", intensity.label()),
            ("current_skills", &join_or_none(&profile.current_skills)),
            ("required_skills", &join_or_none(&target.required_skills)),
        ],
    )
}

pub fn analysis_prompt(profile: &StudentProfile) -> String {
    fill(
        ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("schema_instruction", SCHEMA_INSTRUCTION),
            ("profile", &render_profile(profile)),
        ],
    )
}

pub fn skill_resources_prompt(skill: &str) -> String {
    fill(
        SKILL_RESOURCES_PROMPT_TEMPLATE,
        &[("schema_instruction", SCHEMA_INSTRUCTION), ("skill", skill.trim())],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::skills_gap::partition_skills;
    use crate::profile::models::complete_profile;

    #[test]
    fn test_render_profile_marks_missing_values() {
        let rendered = render_profile(&StudentProfile::default());
        assert!(rendered.contains("Education: not specified in not specified"));
        assert!(rendered.contains("Current skills: none"));
    }

    #[test]
    fn test_recommendations_prompt_embeds_profile() {
        let prompt = recommendations_prompt(&complete_profile());
        assert!(prompt.contains("Current skills: Python, SQL"));
        assert!(prompt.contains("Academic performance: 82.5%"));
        assert!(!prompt.contains("{profile}"));
        assert!(!prompt.contains("{schema_instruction}"));
    }

    #[test]
    fn test_roadmap_prompt_fills_every_placeholder() {
        let target = TargetCareer {
            title: "Data Scientist".to_string(),
            required_skills: vec!["Python".into(), "Statistics".into()],
        };
        let prompt = roadmap_prompt(
            &complete_profile(),
            &target,
            Timeframe::TwoYears,
            LearningIntensity::Intensive,
        );
        assert!(prompt.contains("split into 6 sequential phases"));
        assert!(prompt.contains("Intensive (20+ hrs/week)"));
        assert!(prompt.contains("Asha Rao"));
        for placeholder in ["{student_name}", "{career_title}", "{timeframe}", "{intensity}"] {
            assert!(!prompt.contains(placeholder), "{placeholder} left in prompt");
        }
    }

    #[test]
    fn test_skills_gap_prompt_lists_buckets() {
        let profile = complete_profile();
        let target = TargetCareer {
            title: "DevOps Engineer".to_string(),
            required_skills: vec!["Python".into(), "Docker".into()],
        };
        let partition = partition_skills(&profile.current_skills, &target.required_skills);
        let prompt = skills_gap_prompt(&profile, &target, &partition);
        assert!(prompt.contains("Required skills already held: Python"));
        assert!(prompt.contains("Required skills missing: Docker"));
        assert!(prompt.contains("Required skills partly covered: none"));
    }

    #[test]
    fn test_user_text_is_not_expanded() {
        let profile = StudentProfile {
            name: Some("{required_skills}".to_string()),
            ..Default::default()
        };
        let target = TargetCareer {
            title: "{current_skills}".to_string(),
            required_skills: vec!["Docker".into()],
        };
        let prompt = roadmap_prompt(&profile, &target, Timeframe::OneYear, LearningIntensity::Light);
        assert!(prompt.contains("roadmap for {required_skills}, targeting a career as {current_skills}."));
        assert!(prompt.contains("Required skills: Docker"));
    }
}
