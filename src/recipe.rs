use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// A single recipe record as stored in the collection file.
///
/// Every field is lenient on input: a record missing a field, or carrying
/// `null` or a value of the wrong shape, still renders with that field at its
/// default. Fields this struct does not know about are kept in `extra` so an
/// export writes back what was loaded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub images: Vec<String>,
    /// Minutes, kept as written so fractional values export unchanged.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<Number>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<Number>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub servings: Option<Servings>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Deserialize a field, falling back to its default when the value is `null`
/// or has an unusable shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn minutes(value: &Option<Number>) -> f64 {
    value.as_ref().and_then(Number::as_f64).unwrap_or(0.0)
}

impl Recipe {
    /// The image shown on the grid card and initially selected in the detail view.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn prep_minutes(&self) -> f64 {
        minutes(&self.prep_time)
    }

    pub fn cook_minutes(&self) -> f64 {
        minutes(&self.cook_time)
    }

    /// Total time in minutes as shown on the card.
    pub fn total_time(&self) -> f64 {
        self.prep_minutes() + self.cook_minutes()
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Serving count, either a number or free text such as "4-6".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Servings {
    Count(Number),
    Text(String),
}

impl fmt::Display for Servings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Servings::Count(n) => write!(f, "{}", n),
            Servings::Text(s) => f.write_str(s),
        }
    }
}

/// Nutrition facts. All four values are required together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: Number,
    pub protein: Number,
    pub fat: Number,
    pub carbs: Number,
}

#[cfg(test)]
pub(crate) fn sample(id: &str, title: &str, categories: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        category: categories.iter().map(|c| c.to_string()).collect(),
        ..Recipe::default()
    }
}
