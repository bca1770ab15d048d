use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A release year as found in the dataset: either a JSON number or
/// integer-like text (`"1986"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReleaseYear {
    Number(i64),
    Text(String),
}

impl ReleaseYear {
    /// Numeric value used for ordering. `None` when the text is not an integer.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ReleaseYear::Number(n) => Some(*n),
            ReleaseYear::Text(t) => t.trim().parse().ok(),
        }
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseYear::Number(n) => write!(f, "{}", n),
            ReleaseYear::Text(t) => write!(f, "{}", t),
        }
    }
}

impl From<i64> for ReleaseYear {
    fn from(n: i64) -> Self {
        ReleaseYear::Number(n)
    }
}

impl From<&str> for ReleaseYear {
    fn from(s: &str) -> Self {
        ReleaseYear::Text(s.to_string())
    }
}

/// One catalog entry.
///
/// Every field is optional so that a partially filled record still loads;
/// queries treat a missing field as "does not match". Fields of an
/// unexpected JSON type are read leniently: numbers and booleans become
/// text, anything else counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(
        default,
        alias = "releaseYear",
        alias = "release_date",
        deserialize_with = "lenient_year"
    )]
    pub release_year: Option<ReleaseYear>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub director: Option<String>,
    // May hold several producers in one string ("Isao Takahata, Toru Hara")
    #[serde(default, deserialize_with = "lenient_text")]
    pub producer: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub image: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub description: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Integers and whole floats (`1986.0`) are numeric years; other numbers
/// and strings are kept as text.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<ReleaseYear>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Some(match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => ReleaseYear::Number(i),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => ReleaseYear::Number(f as i64),
            _ => ReleaseYear::Text(n.to_string()),
        }),
        Some(Value::String(s)) => Some(ReleaseYear::Text(s)),
        _ => None,
    })
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        release_year: impl Into<ReleaseYear>,
        director: impl Into<String>,
        producer: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            release_year: Some(release_year.into()),
            director: Some(director.into()),
            producer: Some(producer.into()),
            image: None,
            description: None,
        }
    }

    /// Textual value of a queryable attribute, or `None` if the record lacks it.
    pub fn get_attr(&self, attr: Attribute) -> Option<Cow<'_, str>> {
        match attr {
            Attribute::Title => self.title.as_deref().map(Cow::Borrowed),
            Attribute::Director => self.director.as_deref().map(Cow::Borrowed),
            Attribute::Producer => self.producer.as_deref().map(Cow::Borrowed),
            Attribute::ReleaseYear => self
                .release_year
                .as_ref()
                .map(|y| Cow::Owned(y.to_string())),
        }
    }

    pub fn year_number(&self) -> Option<i64> {
        self.release_year.as_ref().and_then(ReleaseYear::as_number)
    }
}

/// The attributes of a [`Movie`] that queries can read.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Title,
    ReleaseYear,
    Director,
    Producer,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Title,
        Attribute::ReleaseYear,
        Attribute::Director,
        Attribute::Producer,
    ];

    /// Attributes searched by free-text search.
    pub const SEARCHABLE: [Attribute; 4] = Self::ALL;

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Title => "title",
            Attribute::ReleaseYear => "year",
            Attribute::Director => "director",
            Attribute::Producer => "producer",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Attribute::Title),
            "year" | "release_year" | "release-year" | "releaseyear" | "release_date" => {
                Ok(Attribute::ReleaseYear)
            }
            "director" => Ok(Attribute::Director),
            "producer" => Ok(Attribute::Producer),
            _ => Err(format!("Unknown attribute: {}", s)),
        }
    }
}

/// Stable identity of an item: its position in the dataset as loaded.
///
/// Two records with identical content are still two items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An item paired with its identity, as handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: ItemId,
    pub movie: Movie,
}

/// How the result set is laid out. Pure presentation; it never changes
/// which items are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Grid => f.write_str("grid"),
            ViewMode::List => f.write_str("list"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(format!("Unknown view mode: {}", s)),
        }
    }
}
