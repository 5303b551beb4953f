//! Wire types shared with the prediction service

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Advertising platform a campaign runs on.
///
/// Unknown names are kept verbatim so the service decides whether they are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    #[default]
    Instagram,
    Facebook,
    Youtube,
    Tiktok,
    GoogleAds,
    Other(String),
}

impl Platform {
    /// Platforms offered by the form selector
    pub const KNOWN: [Platform; 5] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::Youtube,
        Platform::Tiktok,
        Platform::GoogleAds,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::GoogleAds => "google_ads",
            Platform::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Platform::Other(_))
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        match value {
            "instagram" => Platform::Instagram,
            "facebook" => Platform::Facebook,
            "youtube" => Platform::Youtube,
            "tiktok" => Platform::Tiktok,
            "google_ads" => Platform::GoogleAds,
            other => Platform::Other(other.to_string()),
        }
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        match Platform::from(value.as_str()) {
            Platform::Other(_) => Platform::Other(value),
            known => known,
        }
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        match value {
            Platform::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes whole numbers as JSON integers and non-finite values as `null`.
///
/// The service declares impressions, clicks, conversions and reach as integers.
pub(crate) fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53

    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// In-progress campaign entry edited by the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftCampaign {
    pub platform: Platform,
    pub country: String,
    pub product_category: String,
    #[serde(serialize_with = "serialize_number")]
    pub spend: f64,
    #[serde(serialize_with = "serialize_number")]
    pub impressions: f64,
    #[serde(serialize_with = "serialize_number")]
    pub clicks: f64,
    #[serde(serialize_with = "serialize_number")]
    pub conversions: f64,
    #[serde(serialize_with = "serialize_number")]
    pub reach: f64,
}

impl Default for DraftCampaign {
    fn default() -> Self {
        Self {
            platform: Platform::Instagram,
            country: "IN".to_string(),
            product_category: "fashion".to_string(),
            spend: 500.0,
            impressions: 80_000.0,
            clicks: 1_200.0,
            conversions: 60.0,
            reach: 60_000.0,
        }
    }
}

/// Campaign stored by the service, echoed back with its prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    #[serde(flatten)]
    pub details: DraftCampaign,
    pub predicted_engagement_rate: f64,
}

/// Average predicted engagement per platform, in the order the service sent it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformEngagement {
    entries: Vec<(String, f64)>,
}

impl PlatformEngagement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a platform's rate. Overwrites keep the original position.
    pub fn insert(&mut self, platform: impl Into<String>, rate: f64) {
        let platform = platform.into();
        match self.entries.iter_mut().find(|(name, _)| *name == platform) {
            Some(entry) => entry.1 = rate,
            None => self.entries.push((platform, rate)),
        }
    }

    pub fn get(&self, platform: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == platform)
            .map(|(_, rate)| *rate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, rate)| (name.as_str(), *rate))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PlatformEngagement {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut engagement = PlatformEngagement::new();
        for (platform, rate) in iter {
            engagement.insert(platform, rate);
        }
        engagement
    }
}

impl Serialize for PlatformEngagement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for PlatformEngagement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EngagementVisitor;

        impl<'de> Visitor<'de> for EngagementVisitor {
            type Value = PlatformEngagement;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of platform name to engagement rate")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut engagement = PlatformEngagement::new();
                while let Some((platform, rate)) = map.next_entry::<String, f64>()? {
                    engagement.insert(platform, rate);
                }
                Ok(engagement)
            }
        }

        deserializer.deserialize_map(EngagementVisitor)
    }
}

/// Aggregate statistics across all campaigns known to the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_campaigns: u64,
    pub total_spend: f64,
    pub avg_ctr: f64,
    #[serde(default)]
    pub platform_engagement: PlatformEngagement,
}

fn default_model_version() -> String {
    "baseline_v1".to_string()
}

/// Stateless prediction, nothing is stored server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPrediction {
    pub engagement_rate: f64,
    #[serde(default = "default_model_version")]
    pub model_version_str: String,
}

/// Service liveness response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
