use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Prefix of the token each rendered row is addressed by (`item-<id>`).
pub const ELEMENT_ID_PREFIX: &str = "item-";

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ItemId);

impl ItemId {
    /// Token used by presentation surfaces to address the row for this id.
    pub fn element_id(self) -> String {
        format!("{ELEMENT_ID_PREFIX}{}", self.0)
    }

    /// Maps an element token back to the item id it was derived from.
    /// Only canonical tokens (as produced by [`Self::element_id`]) match.
    pub fn from_element_id(element_id: &str) -> Option<Self> {
        let id = element_id
            .strip_prefix(ELEMENT_ID_PREFIX)?
            .parse::<i64>()
            .ok()
            .map(Self)?;
        (id.element_id() == element_id).then_some(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub calories: i64,
}

impl Item {
    /// Row text, e.g. `Eggs: 300 Calories`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.name, calorie_label(self.calories))
    }
}

pub fn calorie_label(calories: i64) -> String {
    if calories == 1 {
        format!("{calories} Calorie")
    } else {
        format!("{calories} Calories")
    }
}

/// Raw form contents as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub calories: String,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, calories: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
        }
    }

    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            calories: item.calories.to_string(),
        }
    }

    /// Checks presence of the name and parseability of the calorie count.
    /// The name is returned verbatim.
    pub fn validate(&self) -> Result<(String, i64), TrackerError> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::InvalidInput("item name is required".into()));
        }
        let calories = parse_calories(&self.calories)?;
        Ok((self.name.clone(), calories))
    }
}

pub fn parse_calories(raw: &str) -> Result<i64, TrackerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidInput("calories are required".into()));
    }
    trimmed.parse::<i64>().map_err(|_| {
        TrackerError::InvalidInput(format!("calories must be a whole number, got '{trimmed}'"))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    Adding,
    Editing,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
