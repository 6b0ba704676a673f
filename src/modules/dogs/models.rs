use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::breeds::models::Breed;
use crate::utils::validation::{
    self, validate_description, validate_gender, validate_name, ValidationError,
};

/// Where a dog is in the adoption process.
///
/// On the wire and in the `dogs.status` column a status is its symbolic name
/// (`AVAILABLE`); [`fmt::Display`] gives the human-facing value (`Available`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum AdoptionStatus {
    #[default]
    Available,
    Adopted,
    Pending,
}

impl AdoptionStatus {
    pub const ALL: [AdoptionStatus; 3] = [
        AdoptionStatus::Available,
        AdoptionStatus::Adopted,
        AdoptionStatus::Pending,
    ];

    pub fn symbolic_name(self) -> &'static str {
        match self {
            AdoptionStatus::Available => "AVAILABLE",
            AdoptionStatus::Adopted => "ADOPTED",
            AdoptionStatus::Pending => "PENDING",
        }
    }

    pub fn display_value(self) -> &'static str {
        match self {
            AdoptionStatus::Available => "Available",
            AdoptionStatus::Adopted => "Adopted",
            AdoptionStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_value())
    }
}

/// Returned when a string names no adoption status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown adoption status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for AdoptionStatus {
    type Err = UnknownStatus;

    /// Accepts the symbolic name or the display value, exact case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AdoptionStatus::ALL
            .into_iter()
            .find(|status| value == status.symbolic_name() || value == status.display_value())
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unknown => "Unknown",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        validate_gender(value)
    }
}

/// A persisted dog row.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Dog {
    pub id: i64,
    pub name: String,
    pub breed_id: i64,
    pub age: Option<i64>,
    pub gender: Gender,
    pub description: Option<String>,
    pub status: AdoptionStatus,
    pub intake_date: DateTime<Utc>,
    pub adoption_date: Option<DateTime<Utc>>,
}

impl Dog {
    /// Full projection of this dog. `breed` is whatever the caller resolved
    /// for `breed_id`; a missing or mismatched breed renders as `null`.
    pub fn to_detail(&self, breed: Option<&Breed>) -> DogDetail {
        DogDetail {
            id: self.id,
            name: self.name.clone(),
            breed: breed
                .filter(|breed| breed.id == self.breed_id)
                .map(|breed| breed.name.clone()),
            age: self.age,
            description: self.description.clone(),
            gender: self.gender,
            status: self.status,
        }
    }
}

/// List view of a dog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DogSummary {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub status: AdoptionStatus,
}

/// Detail view of a dog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DogDetail {
    pub id: i64,
    pub name: String,
    pub breed: Option<String>,
    pub age: Option<i64>,
    pub description: Option<String>,
    pub gender: Gender,
    pub status: AdoptionStatus,
}

/// A dog that has passed every field rule and may be inserted.
///
/// Fields are private: the constructor and each setter run the same rule,
/// so an invalid value can never be stored here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDog {
    name: String,
    breed_id: i64,
    age: Option<i64>,
    gender: Gender,
    description: Option<String>,
    status: AdoptionStatus,
    intake_date: DateTime<Utc>,
    adoption_date: Option<DateTime<Utc>>,
}

impl NewDog {
    /// Start a dog with its required fields. Status defaults to
    /// [`AdoptionStatus::Available`] and the intake date to now.
    pub fn new(name: &str, breed_id: i64, gender: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
            breed_id,
            age: None,
            gender: validate_gender(gender)?,
            description: None,
            status: AdoptionStatus::default(),
            intake_date: Utc::now(),
            adoption_date: None,
        })
    }

    pub fn with_age(mut self, age: impl Into<Value>) -> Result<Self, ValidationError> {
        self.set_age(age)?;
        Ok(self)
    }

    pub fn with_description(mut self, description: Option<&str>) -> Result<Self, ValidationError> {
        self.set_description(description)?;
        Ok(self)
    }

    pub fn with_status(mut self, status: AdoptionStatus) -> Self {
        self.set_status(status);
        self
    }

    pub fn with_adoption_date(mut self, adoption_date: Option<DateTime<Utc>>) -> Self {
        self.set_adoption_date(adoption_date);
        self
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_breed_id(&mut self, breed_id: i64) {
        self.breed_id = breed_id;
    }

    pub fn set_gender(&mut self, gender: &str) -> Result<(), ValidationError> {
        self.gender = validate_gender(gender)?;
        Ok(())
    }

    /// `null` clears the age; anything else must be a number in 0..=20.
    pub fn set_age(&mut self, age: impl Into<Value>) -> Result<(), ValidationError> {
        self.age = validation::validate_nullable_age(&age.into())?;
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<&str>) -> Result<(), ValidationError> {
        self.description = validate_description(description)?;
        Ok(())
    }

    pub fn set_status(&mut self, status: AdoptionStatus) {
        self.status = status;
    }

    pub fn set_adoption_date(&mut self, adoption_date: Option<DateTime<Utc>>) {
        self.adoption_date = adoption_date;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn breed_id(&self) -> i64 {
        self.breed_id
    }

    pub fn age(&self) -> Option<i64> {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> AdoptionStatus {
        self.status
    }

    pub fn intake_date(&self) -> DateTime<Utc> {
        self.intake_date
    }

    pub fn adoption_date(&self) -> Option<DateTime<Utc>> {
        self.adoption_date
    }
}
