//! Static sample data served in fallback mode.
//!
//! Everything here is deterministic: the same input always yields the same output.

use crate::advisor::models::{
    CareerRecommendation, DemandLevel, EmergingRole, Employer, EmployerGroup, MarketInsights,
    ResourceGroup, SalaryTrend, SectorGrowth, SkillDemand, SkillResources,
};
use crate::profile::models::StudentProfile;

/// Score bonus per technical skill shared with a career's required skills.
const SKILL_OVERLAP_BONUS: u32 = 5;
/// Score bonus when the career's category is one of the student's interests.
const INTEREST_BONUS: u32 = 10;
pub const MAX_RECOMMENDATIONS: usize = 6;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn career(
    title: &str,
    category: &str,
    match_score: u8,
    description: &str,
    why_suitable: &str,
    required_skills: &[&str],
    education_required: &str,
    salary_range: &str,
    job_outlook: &str,
    career_path: &str,
    locations: &[&str],
) -> CareerRecommendation {
    CareerRecommendation {
        title: title.to_string(),
        category: category.to_string(),
        match_score,
        description: description.to_string(),
        why_suitable: why_suitable.to_string(),
        required_skills: strings(required_skills),
        education_required: education_required.to_string(),
        salary_range: salary_range.to_string(),
        job_outlook: job_outlook.to_string(),
        career_path: career_path.to_string(),
        locations: strings(locations),
    }
}

/// The unadjusted sample careers, in catalogue order.
pub fn base_careers() -> Vec<CareerRecommendation> {
    vec![
        career(
            "Software Engineer",
            "Technology",
            85,
            "Design, develop, and maintain software applications and systems",
            "Strong technical aptitude and problem-solving skills align well",
            &["Programming", "Data Structures", "Problem Solving", "Software Design"],
            "Bachelor's in Computer Science or related field",
            "6-25 LPA",
            "Excellent growth prospects",
            "Junior Developer → Senior Developer → Tech Lead → Engineering Manager",
            &["Bangalore", "Hyderabad", "Pune", "Remote"],
        ),
        career(
            "Data Scientist",
            "Technology",
            80,
            "Analyze complex data to derive insights and build predictive models",
            "Analytical mindset and mathematical background are valuable",
            &["Python", "Statistics", "Machine Learning", "Data Visualization"],
            "Bachelor's in Engineering, Mathematics, or related field",
            "8-30 LPA",
            "High demand across industries",
            "Data Analyst → Data Scientist → Senior Data Scientist → Data Science Manager",
            &["Bangalore", "Mumbai", "Gurgaon", "Remote"],
        ),
        career(
            "Digital Marketing Specialist",
            "Sales & Marketing",
            75,
            "Plan and execute digital marketing campaigns across various platforms",
            "Creative thinking and communication skills are advantageous",
            &["Digital Marketing", "SEO/SEM", "Content Creation", "Analytics"],
            "Bachelor's in Marketing, Business, or any field with relevant skills",
            "4-15 LPA",
            "Growing rapidly with digital transformation",
            "Marketing Executive → Digital Marketing Specialist → Marketing Manager → CMO",
            &["Mumbai", "Delhi", "Bangalore", "Remote"],
        ),
        career(
            "Business Analyst",
            "Business & Management",
            70,
            "Analyze business processes and recommend improvements",
            "Strong analytical and communication skills are essential",
            &["Business Analysis", "Process Improvement", "Data Analysis", "Communication"],
            "Bachelor's in Business, Engineering, or related field",
            "5-20 LPA",
            "Steady demand across industries",
            "Junior Analyst → Business Analyst → Senior Analyst → Consultant",
            &["Mumbai", "Bangalore", "Chennai", "Hyderabad"],
        ),
        career(
            "UI/UX Designer",
            "Creative & Media",
            78,
            "Design user interfaces and experiences for digital products",
            "Creative abilities and attention to detail are valuable",
            &["Design Tools", "User Research", "Prototyping", "Visual Design"],
            "Bachelor's in Design, Computer Science, or relevant portfolio",
            "5-18 LPA",
            "High demand with growing tech industry",
            "Junior Designer → UI/UX Designer → Senior Designer → Design Lead",
            &["Bangalore", "Pune", "Delhi", "Remote"],
        ),
    ]
}

/// Sample careers re-scored against the profile, best match first.
///
/// Each technical skill shared with a career adds 5 points, a category listed among
/// the student's interests adds 10, and the total is capped at 100.
pub fn sample_careers(profile: &StudentProfile) -> Vec<CareerRecommendation> {
    let technical: Vec<String> = profile
        .technical_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let interests: Vec<String> = profile.interests.iter().map(|s| s.to_lowercase()).collect();

    let mut careers: Vec<CareerRecommendation> = base_careers()
        .into_iter()
        .map(|mut career| {
            let overlap = career
                .required_skills
                .iter()
                .filter(|skill| technical.contains(&skill.to_lowercase()))
                .count() as u32;

            let mut score = u32::from(career.match_score) + overlap * SKILL_OVERLAP_BONUS;
            if interests.contains(&career.category.to_lowercase()) {
                score += INTEREST_BONUS;
            }

            career.match_score = score.min(100) as u8;
            career
        })
        .collect();

    rank_careers(&mut careers);
    careers
}

/// Orders careers by score, highest first, keeping catalogue order for ties,
/// and keeps at most [`MAX_RECOMMENDATIONS`].
pub fn rank_careers(careers: &mut Vec<CareerRecommendation>) {
    careers.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    careers.truncate(MAX_RECOMMENDATIONS);
}

/// Case-insensitive lookup in the sample catalogue.
pub fn find_career(title: &str) -> Option<CareerRecommendation> {
    let wanted = title.trim().to_lowercase();
    base_careers()
        .into_iter()
        .find(|c| c.title.to_lowercase() == wanted)
}

pub fn market_insights() -> MarketInsights {
    let sector = |sector: &str, growth_rate: f32, description: &str| SectorGrowth {
        sector: sector.to_string(),
        growth_rate,
        description: description.to_string(),
    };
    let demand = |skill: &str, demand_level: DemandLevel| SkillDemand {
        skill: skill.to_string(),
        demand_level,
    };
    let employer = |name: &str, size: &str, known_for: &str, hiring_trend: &str| Employer {
        name: name.to_string(),
        size: size.to_string(),
        known_for: known_for.to_string(),
        hiring_trend: hiring_trend.to_string(),
    };

    MarketInsights {
        trends_summary: "The Indian job market is experiencing rapid transformation driven by \
            digital adoption, startup ecosystem growth, and emerging technologies. Key trends: \
            digital transformation (70% of companies are investing heavily in digital \
            capabilities), hybrid work as the new normal, skill-based hiring over traditional \
            qualifications, growing demand for sustainability-focused roles, and AI creating new \
            job categories while transforming existing ones."
            .to_string(),
        growing_sectors: vec![
            sector("Technology", 25.0, "Continued digital transformation"),
            sector("Healthcare", 18.0, "Post-pandemic growth and telemedicine"),
            sector("E-commerce", 22.0, "Online retail expansion"),
            sector("Fintech", 20.0, "Digital payments and banking"),
            sector("Education Technology", 16.0, "Online learning platforms"),
            sector("Renewable Energy", 15.0, "Green energy initiatives"),
        ],
        in_demand_skills: vec![
            demand("Python Programming", DemandLevel::VeryHigh),
            demand("Data Analysis", DemandLevel::VeryHigh),
            demand("Digital Marketing", DemandLevel::High),
            demand("Cloud Computing", DemandLevel::VeryHigh),
            demand("Machine Learning", DemandLevel::High),
            demand("Cybersecurity", DemandLevel::High),
            demand("UI/UX Design", DemandLevel::High),
            demand("Project Management", DemandLevel::High),
        ],
        salary_trends: SALARY_BASES
            .iter()
            .map(|&(role, base)| salary_trend(role, base))
            .collect(),
        emerging_roles: vec![
            EmergingRole {
                title: "AI Ethics Specialist".to_string(),
                growth_potential: DemandLevel::VeryHigh,
                description: "Ensures responsible development and deployment of AI systems"
                    .to_string(),
                why_emerging: "Growing concerns about AI bias, privacy, and ethical implications"
                    .to_string(),
                key_skills: strings(&[
                    "Machine Learning",
                    "Ethics",
                    "Policy Development",
                    "Risk Assessment",
                ]),
                salary_range: "15-30 LPA".to_string(),
                experience_level: "Mid to Senior".to_string(),
                remote_friendly: true,
            },
            EmergingRole {
                title: "Sustainability Manager".to_string(),
                growth_potential: DemandLevel::High,
                description: "Develops and implements environmental sustainability strategies"
                    .to_string(),
                why_emerging: "Increased focus on ESG goals and climate change".to_string(),
                key_skills: strings(&[
                    "Environmental Science",
                    "Project Management",
                    "Data Analysis",
                    "Policy",
                ]),
                salary_range: "12-25 LPA".to_string(),
                experience_level: "Mid-level".to_string(),
                remote_friendly: false,
            },
        ],
        top_employers: vec![EmployerGroup {
            category: "Technology Companies".to_string(),
            employers: vec![
                employer(
                    "Tata Consultancy Services",
                    "500,000+",
                    "IT Services, Consulting",
                    "Actively hiring for cloud and AI roles",
                ),
                employer(
                    "Infosys",
                    "300,000+",
                    "Digital transformation, Consulting",
                    "Focus on digital skills and automation",
                ),
            ],
        }],
    }
}

/// Roles with a published salary ladder and their starting salary, in LPA.
const SALARY_BASES: [(&str, u32); 4] = [
    ("Software Engineer", 8),
    ("Data Scientist", 12),
    ("Product Manager", 15),
    ("Digital Marketer", 6),
];

/// Ten-step ladder from `base`: step `i` pays `base + 2i + i % 3` LPA.
fn salary_trend(role: &str, base: u32) -> SalaryTrend {
    let ladder: Vec<u32> = (0..10).map(|i| base + 2 * i + i % 3).collect();
    let total: u32 = ladder.iter().sum();

    SalaryTrend {
        role: role.to_string(),
        entry_level_lpa: ladder[0] as f32,
        mid_level_lpa: ladder[ladder.len() / 2] as f32,
        senior_level_lpa: ladder.iter().copied().max().unwrap_or(base) as f32,
        average_lpa: total as f32 / ladder.len() as f32,
    }
}

/// Resource groups attached to every fallback roadmap, in display order.
pub fn roadmap_resources() -> Vec<ResourceGroup> {
    let group = |category: &str, items: &[&str]| ResourceGroup {
        category: category.to_string(),
        items: strings(items),
    };

    vec![
        group(
            "Online Platforms",
            &[
                "Coursera - University courses and specializations",
                "Udemy - Practical skill-based courses",
                "YouTube - Free tutorials and walkthroughs",
                "freeCodeCamp - Programming and web development",
            ],
        ),
        group(
            "Practice Platforms",
            &[
                "GitHub - Code repositories and projects",
                "Kaggle - Data science competitions",
                "HackerRank - Coding challenges",
                "LeetCode - Programming practice",
            ],
        ),
        group(
            "Communities",
            &[
                "Reddit - Subject-specific communities",
                "Discord - Learning groups and study sessions",
                "LinkedIn - Professional networking",
                "Stack Overflow - Technical Q&A",
            ],
        ),
    ]
}

pub fn skill_resources(skill: &str) -> SkillResources {
    let skill = skill.trim();
    SkillResources {
        skill: skill.to_string(),
        online_courses: vec![
            format!("Coursera - Search for \"{skill}\" courses"),
            format!("Udemy - Practical {skill} tutorials"),
            format!("edX - University-level {skill} courses"),
        ],
        free_resources: vec![
            format!("YouTube tutorials on {skill}"),
            "GitHub repositories and projects".to_string(),
            "Official documentation and guides".to_string(),
        ],
        practice_platforms: strings(&[
            "HackerRank, LeetCode (for programming skills)",
            "Kaggle (for data science skills)",
            "Behance, Dribbble (for design skills)",
        ]),
        estimated_timeline: "3-6 months with consistent practice".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_ladder_from_base() {
        let trend = salary_trend("Software Engineer", 8);
        assert_eq!(trend.entry_level_lpa, 8.0);
        assert_eq!(trend.mid_level_lpa, 20.0);
        assert_eq!(trend.senior_level_lpa, 26.0);
        assert!((trend.average_lpa - 17.9).abs() < 1e-4);
    }

    #[test]
    fn test_market_insights_cover_roles_and_employers() {
        let insights = market_insights();
        let roles: Vec<&str> = insights.salary_trends.iter().map(|t| t.role.as_str()).collect();
        assert_eq!(
            roles,
            vec!["Software Engineer", "Data Scientist", "Product Manager", "Digital Marketer"]
        );
        assert_eq!(insights.emerging_roles.len(), 2);
        assert!(insights.emerging_roles[0].remote_friendly);
        assert_eq!(insights.top_employers[0].employers[1].name, "Infosys");
    }

    #[test]
    fn test_empty_profile_gets_base_scores_sorted() {
        let careers = sample_careers(&StudentProfile::default());
        let scores: Vec<u8> = careers.iter().map(|c| c.match_score).collect();
        assert_eq!(scores, vec![85, 80, 78, 75, 70]);
        assert_eq!(careers[0].title, "Software Engineer");
    }

    #[test]
    fn test_sample_careers_is_deterministic() {
        let profile = crate::profile::models::complete_profile();
        assert_eq!(sample_careers(&profile), sample_careers(&profile));
    }

    #[test]
    fn test_technical_skill_overlap_raises_score() {
        let profile = StudentProfile {
            technical_skills: vec!["python".into(), "Statistics".into()],
            ..Default::default()
        };
        let careers = sample_careers(&profile);
        let ds = careers.iter().find(|c| c.title == "Data Scientist").unwrap();
        assert_eq!(ds.match_score, 90);
        assert_eq!(careers[0].title, "Data Scientist");
    }

    #[test]
    fn test_interest_in_category_adds_ten() {
        let profile = StudentProfile {
            interests: vec!["creative & media".into()],
            ..Default::default()
        };
        let careers = sample_careers(&profile);
        let ux = careers.iter().find(|c| c.title == "UI/UX Designer").unwrap();
        assert_eq!(ux.match_score, 88);
    }

    #[test]
    fn test_score_is_capped_at_hundred() {
        let profile = StudentProfile {
            technical_skills: vec![
                "Programming".into(),
                "Data Structures".into(),
                "Problem Solving".into(),
                "Software Design".into(),
            ],
            interests: vec!["Technology".into()],
            ..Default::default()
        };
        let careers = sample_careers(&profile);
        assert_eq!(careers[0].title, "Software Engineer");
        assert_eq!(careers[0].match_score, 100);
    }

    #[test]
    fn test_rank_keeps_catalogue_order_for_ties() {
        let mut careers = base_careers();
        for c in &mut careers {
            c.match_score = 50;
        }
        let expected: Vec<String> = careers.iter().map(|c| c.title.clone()).collect();
        rank_careers(&mut careers);
        let got: Vec<String> = careers.iter().map(|c| c.title.clone()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_rank_truncates() {
        let mut careers = base_careers();
        careers.extend(base_careers());
        rank_careers(&mut careers);
        assert_eq!(careers.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_find_career_ignores_case() {
        assert!(find_career("  data scientist ").is_some());
        assert!(find_career("Astronaut").is_none());
    }

    #[test]
    fn test_skill_resources_mentions_skill() {
        let resources = skill_resources(" Docker ");
        assert_eq!(resources.skill, "Docker");
        assert!(resources.online_courses[0].contains("\"Docker\""));
    }
}
