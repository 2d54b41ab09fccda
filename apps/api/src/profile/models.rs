use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Location value the form submits before a state is picked.
pub const LOCATION_PLACEHOLDER: &str = "Select State";

pub const MIN_AGE: u8 = 16;
pub const MAX_AGE: u8 = 30;

/// A student's self-reported profile. Every field starts empty and is filled
/// in piecemeal as the form is completed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    // Basic information
    pub name: Option<String>,
    pub age: Option<u8>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub languages: Vec<String>,

    // Academic background
    pub education_level: Option<String>,
    pub stream: Option<String>,
    pub institution: Option<String>,
    /// Percentage, 0–100.
    pub academic_performance: Option<f32>,
    pub subjects: Vec<String>,

    // Skills and interests
    pub current_skills: Vec<String>,
    pub technical_skills: Vec<String>,
    pub interests: Vec<String>,
    pub personality_traits: Vec<String>,

    // Career preferences
    pub work_environment: Vec<String>,
    pub salary_expectations: Option<String>,
    pub job_type_preference: Vec<String>,
    pub location_preference: Vec<String>,
    pub career_goals: Option<String>,
}

/// Fields that count toward profile completion.
/// `phone` and `location_preference` are collected but deliberately not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Age,
    Email,
    Location,
    Languages,
    EducationLevel,
    Stream,
    Institution,
    AcademicPerformance,
    Subjects,
    CurrentSkills,
    TechnicalSkills,
    Interests,
    PersonalityTraits,
    WorkEnvironment,
    SalaryExpectations,
    JobTypePreference,
    CareerGoals,
}

/// Form sections, used to group completion in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSection {
    Basic,
    Academic,
    Skills,
    Preferences,
}

impl ProfileSection {
    pub const ALL: [ProfileSection; 4] = [
        ProfileSection::Basic,
        ProfileSection::Academic,
        ProfileSection::Skills,
        ProfileSection::Preferences,
    ];
}

impl ProfileField {
    pub const ALL: [ProfileField; 18] = [
        ProfileField::Name,
        ProfileField::Age,
        ProfileField::Email,
        ProfileField::Location,
        ProfileField::Languages,
        ProfileField::EducationLevel,
        ProfileField::Stream,
        ProfileField::Institution,
        ProfileField::AcademicPerformance,
        ProfileField::Subjects,
        ProfileField::CurrentSkills,
        ProfileField::TechnicalSkills,
        ProfileField::Interests,
        ProfileField::PersonalityTraits,
        ProfileField::WorkEnvironment,
        ProfileField::SalaryExpectations,
        ProfileField::JobTypePreference,
        ProfileField::CareerGoals,
    ];

    pub fn section(self) -> ProfileSection {
        match self {
            ProfileField::Name
            | ProfileField::Age
            | ProfileField::Email
            | ProfileField::Location
            | ProfileField::Languages => ProfileSection::Basic,
            ProfileField::EducationLevel
            | ProfileField::Stream
            | ProfileField::Institution
            | ProfileField::AcademicPerformance
            | ProfileField::Subjects => ProfileSection::Academic,
            ProfileField::CurrentSkills
            | ProfileField::TechnicalSkills
            | ProfileField::Interests
            | ProfileField::PersonalityTraits => ProfileSection::Skills,
            ProfileField::WorkEnvironment
            | ProfileField::SalaryExpectations
            | ProfileField::JobTypePreference
            | ProfileField::CareerGoals => ProfileSection::Preferences,
        }
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl StudentProfile {
    /// Whether `field` holds a usable value.
    pub fn is_filled(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Name => has_text(&self.name),
            ProfileField::Age => self.age.is_some_and(|a| a > 0),
            ProfileField::Email => has_text(&self.email),
            ProfileField::Location => self
                .location
                .as_deref()
                .is_some_and(|l| !l.trim().is_empty() && l != LOCATION_PLACEHOLDER),
            ProfileField::Languages => !self.languages.is_empty(),
            ProfileField::EducationLevel => has_text(&self.education_level),
            ProfileField::Stream => has_text(&self.stream),
            ProfileField::Institution => has_text(&self.institution),
            ProfileField::AcademicPerformance => {
                self.academic_performance.is_some_and(|p| p > 0.0)
            }
            ProfileField::Subjects => !self.subjects.is_empty(),
            ProfileField::CurrentSkills => !self.current_skills.is_empty(),
            ProfileField::TechnicalSkills => !self.technical_skills.is_empty(),
            ProfileField::Interests => !self.interests.is_empty(),
            ProfileField::PersonalityTraits => !self.personality_traits.is_empty(),
            ProfileField::WorkEnvironment => !self.work_environment.is_empty(),
            ProfileField::SalaryExpectations => has_text(&self.salary_expectations),
            ProfileField::JobTypePreference => !self.job_type_preference.is_empty(),
            ProfileField::CareerGoals => has_text(&self.career_goals),
        }
    }

    /// Percentage of recognized fields that are filled, 0.0–100.0.
    pub fn completion_percentage(&self) -> f64 {
        let filled = ProfileField::ALL
            .iter()
            .filter(|f| self.is_filled(**f))
            .count();
        filled as f64 / ProfileField::ALL.len() as f64 * 100.0
    }

    /// Display name, `Student` when none was given.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("Student")
    }

    /// Applies a partial update. Present fields overwrite; absent fields are untouched.
    pub fn apply(&mut self, patch: ProfilePatch) -> Result<(), AppError> {
        patch.validate()?;

        set_text(&mut self.name, patch.name);
        if let Some(age) = patch.age {
            self.age = u8::try_from(age).ok();
        }
        set_text(&mut self.email, patch.email);
        set_text(&mut self.phone, patch.phone);
        set_text(&mut self.location, patch.location);
        set_list(&mut self.languages, patch.languages);

        set_text(&mut self.education_level, patch.education_level);
        set_text(&mut self.stream, patch.stream);
        set_text(&mut self.institution, patch.institution);
        if let Some(performance) = patch.academic_performance {
            self.academic_performance = Some(performance);
        }
        set_list(&mut self.subjects, patch.subjects);

        set_list(&mut self.current_skills, patch.current_skills);
        set_list(&mut self.technical_skills, patch.technical_skills);
        set_list(&mut self.interests, patch.interests);
        set_list(&mut self.personality_traits, patch.personality_traits);

        set_list(&mut self.work_environment, patch.work_environment);
        set_text(&mut self.salary_expectations, patch.salary_expectations);
        set_list(&mut self.job_type_preference, patch.job_type_preference);
        set_list(&mut self.location_preference, patch.location_preference);
        set_text(&mut self.career_goals, patch.career_goals);

        Ok(())
    }
}

/// Partial profile update as submitted by the form.
/// A present string is trimmed; an empty one clears the field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfilePatch {
    pub name: Option<String>,
    /// Wider than the stored type so any JSON integer reaches the range check.
    pub age: Option<i64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub languages: Option<Vec<String>>,
    pub education_level: Option<String>,
    pub stream: Option<String>,
    pub institution: Option<String>,
    pub academic_performance: Option<f32>,
    pub subjects: Option<Vec<String>>,
    pub current_skills: Option<Vec<String>>,
    pub technical_skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub personality_traits: Option<Vec<String>>,
    pub work_environment: Option<Vec<String>>,
    pub salary_expectations: Option<String>,
    pub job_type_preference: Option<Vec<String>>,
    pub location_preference: Option<Vec<String>>,
    pub career_goals: Option<String>,
}

impl ProfilePatch {
    fn validate(&self) -> Result<(), AppError> {
        if let Some(age) = self.age {
            if !(i64::from(MIN_AGE)..=i64::from(MAX_AGE)).contains(&age) {
                return Err(AppError::Validation(format!(
                    "age must be between {MIN_AGE} and {MAX_AGE}"
                )));
            }
        }
        if let Some(performance) = self.academic_performance {
            if !(0.0..=100.0).contains(&performance) {
                return Err(AppError::Validation(
                    "academic_performance must be a percentage between 0 and 100".to_string(),
                ));
            }
        }
        Ok(())
    }
}

fn set_text(slot: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        let trimmed = value.trim();
        *slot = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
}

fn set_list(slot: &mut Vec<String>, value: Option<Vec<String>>) {
    if let Some(items) = value {
        *slot = items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }
}

#[cfg(test)]
pub(crate) fn complete_profile() -> StudentProfile {
    let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    StudentProfile {
        name: Some("Asha Rao".to_string()),
        age: Some(20),
        email: Some("asha@example.com".to_string()),
        phone: None,
        location: Some("Karnataka".to_string()),
        languages: list(&["English", "Kannada"]),
        education_level: Some("Undergraduate".to_string()),
        stream: Some("Science (PCM)".to_string()),
        institution: Some("RV College".to_string()),
        academic_performance: Some(82.5),
        subjects: list(&["Mathematics", "Physics"]),
        current_skills: list(&["Python", "SQL"]),
        technical_skills: list(&["Python", "Statistics"]),
        interests: list(&["Technology"]),
        personality_traits: list(&["Analytical"]),
        work_environment: list(&["Hybrid"]),
        salary_expectations: Some("6-10 LPA".to_string()),
        job_type_preference: list(&["Full-time"]),
        location_preference: vec![],
        career_goals: Some("Work on data products".to_string()),
    }
}
