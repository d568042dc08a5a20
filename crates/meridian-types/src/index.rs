//! Market index definitions.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::UnknownVariant;

/// Geographic region of a market index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    /// Australia and New Zealand.
    Oceania,
    /// East and South Asia.
    Asia,
    /// European exchanges.
    Europe,
    /// North and South America.
    Americas,
}

impl Region {
    /// Returns the region name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Oceania => "Oceania",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Americas => "Americas",
        }
    }

    /// Returns all regions in cycling order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Oceania, Self::Asia, Self::Europe, Self::Americas]
    }

    /// Returns the region that follows this one in cycling order.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Oceania => Self::Asia,
            Self::Asia => Self::Europe,
            Self::Europe => Self::Americas,
            Self::Americas => Self::Oceania,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "oceania" | "australia" => Ok(Self::Oceania),
            "asia" => Ok(Self::Asia),
            "europe" => Ok(Self::Europe),
            "americas" | "america" | "us" => Ok(Self::Americas),
            _ => Err(UnknownVariant::new(
                "region",
                s,
                "oceania, asia, europe, americas",
            )),
        }
    }
}

/// A market index with its trading hours on the reference timeline.
///
/// Opening and closing times are already expressed in the reference frame
/// (Australian local time), so a European index opens in the evening and
/// closes after midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDef {
    /// Unique quote symbol (e.g., "^AXJO", "000001.SS").
    code: String,
    /// Human-readable name (e.g., "ASX 200 (Australia)").
    name: String,
    /// Display colour token.
    color: String,
    /// Market open time of day.
    #[serde(with = "hhmm")]
    market_open: NaiveTime,
    /// Market close time of day.
    #[serde(with = "hhmm")]
    market_close: NaiveTime,
    /// Timezone label shown next to the hours (e.g., "AEDT").
    timezone: String,
    /// Geographic region.
    region: Region,
}

impl IndexDef {
    /// Creates a new index definition.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        market_open: NaiveTime,
        market_close: NaiveTime,
        timezone: impl Into<String>,
        region: Region,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            color: color.into(),
            market_open,
            market_close,
            timezone: timezone.into(),
            region,
        }
    }

    /// Returns the quote symbol.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first word of the name (e.g., "Nikkei", "FTSE").
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Returns the display colour token.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the market open time of day.
    #[must_use]
    pub const fn market_open(&self) -> NaiveTime {
        self.market_open
    }

    /// Returns the market close time of day.
    #[must_use]
    pub const fn market_close(&self) -> NaiveTime {
        self.market_close
    }

    /// Returns the timezone label.
    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Returns the region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns true if the session closes on the following calendar day.
    ///
    /// Only the hour components are compared.
    #[must_use]
    pub fn is_overnight(&self) -> bool {
        self.market_close.hour() < self.market_open.hour()
    }

    /// Returns the trading hours formatted as `HH:MM - HH:MM`.
    #[must_use]
    pub fn hours_label(&self) -> String {
        format!(
            "{} - {}",
            self.market_open.format(hhmm::FORMAT),
            self.market_close.format(hhmm::FORMAT)
        )
    }
}

impl std::fmt::Display for IndexDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Serde adapter for `HH:MM` time-of-day strings.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub(super) const FORMAT: &str = "%H:%M";

    pub(super) fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT)
            .map_err(|e| D::Error::custom(format!("invalid time of day '{raw}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_index_creation() {
        let ftse = IndexDef::new(
            "^FTSE",
            "FTSE 100 (UK)",
            "#0ea5e9",
            hm(19, 0),
            hm(3, 30),
            "GMT",
            Region::Europe,
        );

        assert_eq!(ftse.code(), "^FTSE");
        assert_eq!(ftse.short_name(), "FTSE");
        assert_eq!(ftse.hours_label(), "19:00 - 03:30");
        assert!(ftse.is_overnight());
        assert_eq!(ftse.to_string(), "FTSE 100 (UK) (^FTSE)");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r##"{
            "code": "^N225",
            "name": "Nikkei 225 (Japan)",
            "color": "#dc2626",
            "marketOpen": "11:00",
            "marketClose": "17:00",
            "timezone": "JST",
            "region": "Asia"
        }"##;
        let def: IndexDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.market_open(), hm(11, 0));
        assert_eq!(def.region(), Region::Asia);
        assert!(!def.is_overnight());

        let back = serde_json::to_value(&def).unwrap();
        assert_eq!(back["marketClose"], "17:00");
    }

    #[test]
    fn test_deserialize_rejects_bad_time() {
        let json = r##"{"code":"X","name":"X","color":"#000","marketOpen":"25:00",
            "marketClose":"10:00","timezone":"UTC","region":"Asia"}"##;
        assert!(serde_json::from_str::<IndexDef>(json).is_err());
    }

    #[test]
    fn test_region_cycle() {
        let mut region = Region::Oceania;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(region);
            region = region.next();
        }
        assert_eq!(
            seen,
            vec![
                Region::Oceania,
                Region::Asia,
                Region::Europe,
                Region::Americas,
                Region::Oceania
            ]
        );
        assert_eq!("EUROPE".parse::<Region>().unwrap(), Region::Europe);
        assert!("mars".parse::<Region>().is_err());
    }
}
