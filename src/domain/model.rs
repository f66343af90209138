use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Species the facility boards. Only used by the interactive type prompt;
/// the record itself keeps the type as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
}

impl PetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact literal match: `"dog"` or `"cat"`, nothing else.
impl FromStr for PetType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dog" => Ok(PetType::Dog),
            "cat" => Ok(PetType::Cat),
            other => Err(other.to_string()),
        }
    }
}

/// One pet's stay plus the facility's space counters at check-in time.
///
/// No invariant is enforced on any field: `pet_type` may hold any text and
/// the numeric fields accept zero and negative values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInRecord {
    pet_type: String,
    pet_name: String,
    pet_age: i32,
    dog_spaces: i32,
    cat_spaces: i32,
    days_stay: i32,
    amount_due: f64,
}

impl CheckInRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pet_type: impl Into<String>,
        pet_name: impl Into<String>,
        pet_age: i32,
        dog_spaces: i32,
        cat_spaces: i32,
        days_stay: i32,
        amount_due: f64,
    ) -> Self {
        Self {
            pet_type: pet_type.into(),
            pet_name: pet_name.into(),
            pet_age,
            dog_spaces,
            cat_spaces,
            days_stay,
            amount_due,
        }
    }

    pub fn pet_type(&self) -> &str {
        &self.pet_type
    }

    pub fn pet_name(&self) -> &str {
        &self.pet_name
    }

    pub fn pet_age(&self) -> i32 {
        self.pet_age
    }

    pub fn dog_spaces(&self) -> i32 {
        self.dog_spaces
    }

    pub fn cat_spaces(&self) -> i32 {
        self.cat_spaces
    }

    pub fn days_stay(&self) -> i32 {
        self.days_stay
    }

    pub fn amount_due(&self) -> f64 {
        self.amount_due
    }

    pub fn set_dog_spaces(&mut self, dog_spaces: i32) {
        self.dog_spaces = dog_spaces;
    }

    pub fn set_cat_spaces(&mut self, cat_spaces: i32) {
        self.cat_spaces = cat_spaces;
    }

    pub fn set_days_stay(&mut self, days_stay: i32) {
        self.days_stay = days_stay;
    }

    pub fn set_amount_due(&mut self, amount_due: f64) {
        self.amount_due = amount_due;
    }

    // 互動式欄位只開放給 core::prompts
    pub(crate) fn assign_pet_type(&mut self, pet_type: PetType) {
        self.pet_type = pet_type.as_str().to_string();
    }

    pub(crate) fn assign_pet_age(&mut self, pet_age: i32) {
        self.pet_age = pet_age;
    }

    pub(crate) fn assign_pet_name(&mut self, pet_name: String) {
        self.pet_name = pet_name;
    }

    /// Multi-line human readable summary, used by the session and the binary.
    pub fn summary(&self) -> String {
        format!(
            "Pet: {} ({})\nAge: {}\nDays: {}\nAmount Due: ${:.2}\nDog spaces: {}\nCat spaces: {}",
            self.pet_name,
            self.pet_type,
            self.pet_age,
            self.days_stay,
            self.amount_due,
            self.dog_spaces,
            self.cat_spaces
        )
    }
}
