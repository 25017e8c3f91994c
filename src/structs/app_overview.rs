use serde::{Deserialize, Deserializer, Serialize};

/// A marketplace app as listed in overviews. Only `categories` matters for
/// faceting; the rest is carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppOverview {
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default, rename = "shortDescription", alias = "description")]
    pub description: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub logo: Option<String>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub categories: Vec<String>,
}

impl AppOverview {
    pub fn new(id: &str, categories: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: id.to_string(),
            author: None,
            description: None,
            url: None,
            logo: None,
            categories: categories.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(category)) => vec![category],
        Some(OneOrMany::Many(categories)) => categories,
        None => Vec::new(),
    })
}
