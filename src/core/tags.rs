use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::entry::Entry;

/// Entry fields that hold comma-separated tag lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Diet,
    Exercise,
    Recovery,
}

impl FromStr for TagField {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "diet" => Ok(Self::Diet),
            "exercise" => Ok(Self::Exercise),
            "recovery" => Ok(Self::Recovery),
            _ => anyhow::bail!("invalid tag field: {} (expected diet/exercise/recovery)", s),
        }
    }
}

impl std::fmt::Display for TagField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Diet => write!(f, "diet"),
            Self::Exercise => write!(f, "exercise"),
            Self::Recovery => write!(f, "recovery"),
        }
    }
}

/// Known tags per field, seeded with common choices and grown from saved entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagBook {
    #[serde(default)]
    pub diet: Vec<String>,
    #[serde(default)]
    pub exercise: Vec<String>,
    #[serde(default)]
    pub recovery: Vec<String>,
}

impl Default for TagBook {
    fn default() -> Self {
        fn owned(tags: &[&str]) -> Vec<String> {
            tags.iter().map(|t| t.to_string()).collect()
        }
        Self {
            diet: owned(&[
                "Oatmeal",
                "Coffee",
                "Eggs",
                "Chicken",
                "Rice",
                "Salad",
                "Protein shake",
                "Fruit",
                "Vegetables",
                "Water",
            ]),
            exercise: owned(&[
                "Running",
                "Pushups",
                "Pullups",
                "Squats",
                "Cycling",
                "Swimming",
                "Yoga",
                "Weight training",
                "Walking",
                "Stretching",
            ]),
            recovery: owned(&[
                "Stretching",
                "Ice bath",
                "Massage",
                "Sleep",
                "Meditation",
                "Foam rolling",
                "Rest day",
                "Light walk",
            ]),
        }
    }
}

impl TagBook {
    pub fn field(&self, field: TagField) -> &[String] {
        match field {
            TagField::Diet => &self.diet,
            TagField::Exercise => &self.exercise,
            TagField::Recovery => &self.recovery,
        }
    }

    fn field_mut(&mut self, field: TagField) -> &mut Vec<String> {
        match field {
            TagField::Diet => &mut self.diet,
            TagField::Exercise => &mut self.exercise,
            TagField::Recovery => &mut self.recovery,
        }
    }

    /// Add a tag unless already known. Returns whether it was new.
    pub fn add(&mut self, field: TagField, tag: &str) -> bool {
        let tag = tag.trim();
        let known = self.field_mut(field);
        if tag.is_empty() || known.iter().any(|t| t == tag) {
            return false;
        }
        known.push(tag.to_string());
        true
    }

    /// Record every tag used in the entry's list fields. Returns whether anything was added.
    pub fn learn_from_entry(&mut self, entry: &Entry) -> bool {
        let mut changed = false;
        for (field, value) in [
            (TagField::Diet, &entry.diet),
            (TagField::Exercise, &entry.exercise),
            (TagField::Recovery, &entry.recovery),
        ] {
            for tag in split_tags(value.as_deref().unwrap_or("")) {
                changed |= self.add(field, tag);
            }
        }
        changed
    }

    /// Known tags for `field` that are not in `selected`.
    pub fn suggest(&self, field: TagField, selected: &[&str]) -> Vec<&str> {
        self.field(field)
            .iter()
            .map(String::as_str)
            .filter(|t| !selected.contains(t))
            .collect()
    }
}

/// Split a comma-separated list, trimming and dropping blanks.
pub fn split_tags(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|t| !t.is_empty())
}
