//! Interactive mutators for the fields a customer answers at the desk.
//!
//! Each routine writes one prompt, blocks on one answer from the injected
//! `InputSource` and echoes a confirmation. None of them retry.

use crate::domain::model::{CheckInRecord, PetType};
use crate::domain::ports::InputSource;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const PET_TYPE_PROMPT: &str = "Enter pet type: ";
pub const PET_AGE_PROMPT: &str = "How old is your pet? (years): ";
pub const PET_NAME_PROMPT: &str = "What is your pets name?";
pub const PET_TYPE_ERROR: &str = "Error... make sure to input lowercase dog or cat";

/// How the typed pet type is compared against `dog` / `cat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeMatching {
    /// Only the exact lowercase literals are accepted.
    #[default]
    Exact,
    /// Surrounding whitespace is trimmed and case is ignored.
    Normalized,
}

/// What a `cat` answer assigns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatSelection {
    #[default]
    #[serde(rename = "fixed")]
    Fixed,
    /// Reproduces the legacy desk program, which recorded every cat as a dog.
    #[serde(rename = "legacy")]
    LegacyAssignsDog,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOptions {
    pub type_matching: TypeMatching,
    pub cat_selection: CatSelection,
    /// Legacy desk behaviour: the age answer is discarded and the echo shows
    /// the age already on the record.
    pub legacy_age_echo: bool,
}

impl PromptOptions {
    /// Full parity with the legacy desk program.
    pub fn legacy() -> Self {
        Self {
            type_matching: TypeMatching::Exact,
            cat_selection: CatSelection::LegacyAssignsDog,
            legacy_age_echo: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetTypeSelection {
    /// The answer was recognised; carries the value actually stored.
    Accepted(PetType),
    /// The answer was not `dog` or `cat`; the record is unchanged.
    Rejected(String),
}

pub fn set_pet_type<I, W>(
    record: &mut CheckInRecord,
    input: &mut I,
    out: &mut W,
    options: &PromptOptions,
) -> Result<PetTypeSelection>
where
    I: InputSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", PET_TYPE_PROMPT)?;
    out.flush()?;
    let answer = input.read_line()?;

    let candidate = match options.type_matching {
        TypeMatching::Exact => answer.clone(),
        TypeMatching::Normalized => answer.trim().to_lowercase(),
    };

    let assigned = match candidate.parse::<PetType>() {
        Ok(PetType::Dog) => PetType::Dog,
        Ok(PetType::Cat) => match options.cat_selection {
            CatSelection::Fixed => PetType::Cat,
            CatSelection::LegacyAssignsDog => PetType::Dog,
        },
        Err(_) => {
            tracing::warn!("Rejected pet type {:?}", answer);
            writeln!(out, "{}", PET_TYPE_ERROR)?;
            return Ok(PetTypeSelection::Rejected(answer));
        }
    };

    record.assign_pet_type(assigned);
    tracing::debug!("Pet type set to {}", assigned);
    writeln!(out, "You have chosen {}", record.pet_type())?;
    Ok(PetTypeSelection::Accepted(assigned))
}

/// Returns the age that was read. Malformed input propagates as
/// `InvalidNumber` and leaves the record untouched.
pub fn set_pet_age<I, W>(
    record: &mut CheckInRecord,
    input: &mut I,
    out: &mut W,
    options: &PromptOptions,
) -> Result<i32>
where
    I: InputSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", PET_AGE_PROMPT)?;
    out.flush()?;
    let age = input.read_int()?;

    if options.legacy_age_echo {
        tracing::debug!("Legacy age echo, discarding {}", age);
    } else {
        record.assign_pet_age(age);
        tracing::debug!("Pet age set to {}", age);
    }
    writeln!(out, "Pet age is {}", record.pet_age())?;
    Ok(age)
}

pub fn set_pet_name<I, W>(record: &mut CheckInRecord, input: &mut I, out: &mut W) -> Result<String>
where
    I: InputSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", PET_NAME_PROMPT)?;
    out.flush()?;
    let name = input.read_line()?;

    record.assign_pet_name(name.clone());
    tracing::debug!("Pet name set to {:?}", name);
    writeln!(out, "Welcome! {}", name)?;
    Ok(name)
}
