//! Restaurant record domain model.
//!
//! A [`Record`] is one catalog entry as delivered by the records feed. The feed keeps
//! the identifying fields in a nested `DetailShortInfo` object and the descriptive
//! fields at the top level; this module hides that layout behind accessors and
//! normalizes the loosely-typed parts (comma-delimited food codes, banner images that
//! are either bare strings or objects, coordinates that are numbers or strings).

use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes a JSON `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Identifying block of a record (`DetailShortInfo` in the feed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    #[serde(rename = "faciltId")]
    pub id: String,

    #[serde(rename = "faciltNameCN", default)]
    pub local_name: Option<String>,

    #[serde(rename = "faciltName", default)]
    pub alt_name: Option<String>,

    #[serde(rename = "locList", default, deserialize_with = "null_as_default")]
    pub locations: Vec<Location>,
}

/// Raw coordinate value; the feed mixes numbers and numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// Returns the coordinate as a float, treating zero and unparseable text as absent.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        (value != 0.0 && value.is_finite()).then_some(value)
    }
}

/// One entry of a record's location list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "latud", default)]
    pub latitude: Option<Coordinate>,

    #[serde(rename = "lgtud", default)]
    pub longitude: Option<Coordinate>,
}

/// A resolved latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A banner image, either a bare URL or an object wrapping one.
///
/// Anything else in the list (`null`, numbers, nested arrays) is kept as
/// [`Other`](Self::Other) and never yields a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BannerImage {
    Url(String),
    Object {
        #[serde(rename = "imgUrl", alias = "url", default)]
        url: Option<String>,
    },
    Other(serde_json::Value),
}

impl BannerImage {
    /// Returns the trimmed URL, or `None` when the entry carries no usable URL.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        let url = match self {
            Self::Url(url) => url.as_str(),
            Self::Object { url } => url.as_deref()?,
            Self::Other(_) => return None,
        };
        let url = url.trim();
        (!url.is_empty()).then_some(url)
    }
}

/// A single menu line with local and alternate-script descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    #[serde(rename = "menuNameCN", default)]
    pub local: Option<String>,

    #[serde(rename = "menuName", default)]
    pub alternate: Option<String>,
}

/// One catalog entry.
///
/// # Examples
///
/// ```
/// use dinescope::Record;
///
/// let json = r#"{
///     "DetailShortInfo": { "faciltId": "R1", "faciltNameCN": "Bibimbap House" },
///     "foodTypeCds": "F1, F2,,",
///     "zoneType": "Z1"
/// }"#;
/// let record: Record = serde_json::from_str(json).unwrap();
/// assert_eq!(record.id(), "R1");
/// assert_eq!(record.food_codes(), vec!["F1", "F2"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "DetailShortInfo")]
    pub detail: Detail,

    #[serde(rename = "foodTypeCds", default)]
    pub food_type_codes: Option<String>,

    #[serde(rename = "zoneType", default)]
    pub zone_code: Option<String>,

    #[serde(rename = "bannerImgList", default, deserialize_with = "null_as_default")]
    pub banners: Vec<BannerImage>,

    #[serde(rename = "menuList", default, deserialize_with = "null_as_default")]
    pub menu: Vec<MenuEntry>,

    #[serde(rename = "keyword", default)]
    pub keywords: Option<String>,
}

impl Record {
    /// Creates a record with an identifier and local display name.
    ///
    /// Remaining fields start empty; use the `with_*` builders to fill them.
    #[must_use]
    pub fn new(id: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            detail: Detail {
                id: id.into(),
                local_name: Some(local_name.into()),
                ..Detail::default()
            },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_alt_name(mut self, name: impl Into<String>) -> Self {
        self.detail.alt_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_food_codes(mut self, codes: impl Into<String>) -> Self {
        self.food_type_codes = Some(codes.into());
        self
    }

    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone_code = Some(zone.into());
        self
    }

    #[must_use]
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    #[must_use]
    pub fn with_banner(mut self, url: impl Into<String>) -> Self {
        self.banners.push(BannerImage::Url(url.into()));
        self
    }

    #[must_use]
    pub fn with_menu_entry(mut self, local: impl Into<String>, alternate: impl Into<String>) -> Self {
        self.menu.push(MenuEntry {
            local: Some(local.into()),
            alternate: Some(alternate.into()),
        });
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.detail.id
    }

    #[must_use]
    pub fn local_name(&self) -> Option<&str> {
        self.detail.local_name.as_deref()
    }

    #[must_use]
    pub fn alt_name(&self) -> Option<&str> {
        self.detail.alt_name.as_deref()
    }

    #[must_use]
    pub fn zone_code(&self) -> Option<&str> {
        self.zone_code.as_deref()
    }

    #[must_use]
    pub fn keywords(&self) -> Option<&str> {
        self.keywords.as_deref()
    }

    /// Parses the comma-delimited food-type codes.
    ///
    /// Tokens are trimmed and empty tokens dropped, so `"F1, ,F2,"` yields
    /// `["F1", "F2"]`.
    #[must_use]
    pub fn food_codes(&self) -> Vec<&str> {
        self.food_type_codes
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .collect()
    }

    /// Concatenates every menu entry's local and alternate descriptions, space-joined.
    #[must_use]
    pub fn menu_text(&self) -> String {
        self.menu
            .iter()
            .flat_map(|entry| [entry.local.as_deref(), entry.alternate.as_deref()])
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the banner URLs usable by the gallery, skipping blank entries.
    #[must_use]
    pub fn gallery_images(&self) -> Vec<String> {
        self.banners
            .iter()
            .filter_map(BannerImage::url)
            .map(String::from)
            .collect()
    }

    /// Formats the hash-delimited keyword string for display.
    ///
    /// ```
    /// use dinescope::Record;
    ///
    /// let record = Record::new("R1", "Noodle Bar").with_keywords("#spicy#late night");
    /// assert_eq!(record.formatted_keywords(), ", spicy, late night");
    /// ```
    #[must_use]
    pub fn formatted_keywords(&self) -> String {
        self.keywords
            .as_deref()
            .map(|k| k.replace('#', ", "))
            .unwrap_or_default()
    }

    /// Returns the first location of the record when both coordinates are usable.
    #[must_use]
    pub fn location(&self) -> Option<GeoPoint> {
        let loc = self.detail.locations.first()?;
        Some(GeoPoint {
            latitude: loc.latitude.as_ref()?.value()?,
            longitude: loc.longitude.as_ref()?.value()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r##"{
        "DetailShortInfo": {
            "faciltId": "R7",
            "faciltNameCN": "石锅屋",
            "faciltName": "돌솥집",
            "locList": [{ "latud": "37.2939", "lgtud": 127.2025 }]
        },
        "foodTypeCds": " F1 ,F3",
        "zoneType": "Z2",
        "bannerImgList": ["a.jpg", { "imgUrl": "b.jpg" }, { "imgUrl": "" }, "  ", {}],
        "menuList": [{ "menuNameCN": "拌饭", "menuName": "비빔밥" }, { "menuName": "김치" }],
        "keyword": "#rice#stone pot"
    }"##;

    #[test]
    fn test_deserialize_full_record() {
        let record: Record = serde_json::from_str(FULL).unwrap();
        assert_eq!(record.id(), "R7");
        assert_eq!(record.local_name(), Some("石锅屋"));
        assert_eq!(record.alt_name(), Some("돌솥집"));
        assert_eq!(record.zone_code(), Some("Z2"));
        assert_eq!(record.food_codes(), vec!["F1", "F3"]);
        assert_eq!(record.gallery_images(), vec!["a.jpg", "b.jpg"]);
        assert_eq!(record.menu_text(), "拌饭 비빔밥 김치");
        assert_eq!(record.formatted_keywords(), ", rice, stone pot");

        let point = record.location().unwrap();
        assert!((point.latitude - 37.2939).abs() < f64::EPSILON);
        assert!((point.longitude - 127.2025).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let json = r#"{
            "DetailShortInfo": { "faciltId": "R8", "locList": null },
            "foodTypeCds": null,
            "bannerImgList": null,
            "menuList": null
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.local_name(), None);
        assert!(record.food_codes().is_empty());
        assert!(record.gallery_images().is_empty());
        assert_eq!(record.menu_text(), "");
        assert_eq!(record.formatted_keywords(), "");
        assert!(record.location().is_none());
    }

    #[test]
    fn test_location_requires_both_coordinates() {
        let mut record = Record::new("R1", "x");
        record.detail.locations.push(Location {
            latitude: Some(Coordinate::Text("37.1".into())),
            longitude: Some(Coordinate::Text(String::new())),
        });
        assert!(record.location().is_none());

        record.detail.locations[0].longitude = Some(Coordinate::Number(0.0));
        assert!(record.location().is_none());

        record.detail.locations[0].longitude = Some(Coordinate::Number(127.0));
        assert!(record.location().is_some());
    }

    #[test]
    fn test_malformed_banner_entries_are_skipped() {
        let json = r#"{
            "DetailShortInfo": { "faciltId": "R9" },
            "bannerImgList": ["a.jpg", null, 42, true, { "imgUrl": null }, "b.jpg"]
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.gallery_images(), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_food_codes_drop_empty_tokens() {
        let record = Record::new("R1", "x").with_food_codes(",, F2 ,,F9 ,");
        assert_eq!(record.food_codes(), vec!["F2", "F9"]);
    }
}
