use crate::model::{CatalogEntry, Movie};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    TitleAsc,
    TitleDesc,
    YearAsc,
    YearDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::YearAsc,
        SortKey::YearDesc,
    ];

    fn is_descending(&self) -> bool {
        matches!(self, SortKey::TitleDesc | SortKey::YearDesc)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::TitleAsc => "titleAsc",
            SortKey::TitleDesc => "titleDesc",
            SortKey::YearAsc => "yearAsc",
            SortKey::YearDesc => "yearDesc",
        };
        f.write_str(s)
    }
}

/// Accepts `titleAsc`, `title-asc`, `title_asc` and so on, in any case.
impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match folded.as_str() {
            "titleasc" => Ok(SortKey::TitleAsc),
            "titledesc" => Ok(SortKey::TitleDesc),
            "yearasc" => Ok(SortKey::YearAsc),
            "yeardesc" => Ok(SortKey::YearDesc),
            _ => Err(format!("Unknown sort key: {}", s)),
        }
    }
}

/// Title collation in three levels, the way a root-locale collator orders
/// Latin text: base letters ignoring accents and case, then accents
/// (unaccented first), then case (lowercase first).
pub fn collate_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| {
            let accented = |s: &str| s.nfd().flat_map(char::to_lowercase).collect::<String>();
            accented(a).cmp(&accented(b))
        })
        .then_with(|| b.cmp(a))
}

/// Lowercased text with accents stripped: "Émile" becomes "emile".
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two items by `key`. Items lacking the sorted attribute go last
/// in both directions.
pub fn compare(key: SortKey, a: &Movie, b: &Movie) -> Ordering {
    match key {
        SortKey::TitleAsc | SortKey::TitleDesc => order_present(
            a.title.as_deref(),
            b.title.as_deref(),
            key.is_descending(),
            |x, y| collate_titles(x, y),
        ),
        SortKey::YearAsc | SortKey::YearDesc => order_present(
            a.year_number(),
            b.year_number(),
            key.is_descending(),
            |x, y| x.cmp(y),
        ),
    }
}

fn order_present<T>(
    a: Option<T>,
    b: Option<T>,
    descending: bool,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = cmp(&a, &b);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order `entries` by `key`. Ties keep dataset order.
pub fn run(entries: &mut [CatalogEntry], key: SortKey) {
    entries.sort_by(|a, b| compare(key, &a.movie, &b.movie).then_with(|| a.id.cmp(&b.id)));
}
