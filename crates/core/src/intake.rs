//! Form intake: the snapshot of user-entered fields sent to the service.

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// The fixed set of fields the prediction form carries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Age,
    Gender,
    Education,
    JobTitle,
    Experience,
}

impl Field {
    /// All fields, in report order.
    pub const ALL: [Field; 5] = [
        Field::Age,
        Field::Gender,
        Field::Education,
        Field::JobTitle,
        Field::Experience,
    ];

    /// Wire name (also the form control `name` attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Education => "Education",
            Field::JobTitle => "Job Title",
            Field::Experience => "Experience",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

/// Immutable snapshot of one submit attempt.
///
/// Values are kept as the strings the form produced; numeric interpretation
/// belongs to the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInputs {
    #[serde(rename = "Age")]
    age: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Education")]
    education: String,
    #[serde(rename = "Job Title")]
    job_title: String,
    #[serde(rename = "Experience")]
    experience: String,
}

impl FormInputs {
    pub fn new(
        age: impl Into<String>,
        gender: impl Into<String>,
        education: impl Into<String>,
        job_title: impl Into<String>,
        experience: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            gender: gender.into(),
            education: education.into(),
            job_title: job_title.into(),
            experience: experience.into(),
        }
    }

    /// Build a snapshot from `(name, value)` pairs as a form yields them.
    ///
    /// Unknown names are ignored; a later duplicate overrides an earlier one.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, IntakeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values: [Option<String>; 5] = Default::default();

        for (name, value) in entries {
            if let Some(field) = Field::from_name(name.as_ref()) {
                values[field as usize] = Some(value.into());
            }
        }

        let [age, gender, education, job_title, experience] = values;
        Ok(Self {
            age: age.ok_or(IntakeError::MissingField(Field::Age))?,
            gender: gender.ok_or(IntakeError::MissingField(Field::Gender))?,
            education: education.ok_or(IntakeError::MissingField(Field::Education))?,
            job_title: job_title.ok_or(IntakeError::MissingField(Field::JobTitle))?,
            experience: experience.ok_or(IntakeError::MissingField(Field::Experience))?,
        })
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Education => &self.education,
            Field::JobTitle => &self.job_title,
            Field::Experience => &self.experience,
        }
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn education(&self) -> &str {
        &self.education
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn experience(&self) -> &str {
        &self.experience
    }
}
