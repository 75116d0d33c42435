//! The saved-palette shape.

use std::time::{SystemTime, UNIX_EPOCH};

use crafter_harmony::HarmonyMode;
use serde::{Deserialize, Serialize};

use crate::palette::Palette;

/// A named palette as persisted or exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub colors: Vec<String>,
    pub mode: HarmonyMode,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
}

impl PaletteRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, palette: &Palette, mode: HarmonyMode, created_at: u64) -> Self {
        Self {
            name: name.into(),
            project: None,
            tags: Vec::new(),
            colors: palette.hexes(),
            mode,
            created_at,
        }
    }

    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// The current time in epoch milliseconds, or 0 if the clock is before 1970.
#[must_use]
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::PaletteLimits;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn palette() -> Palette {
        Palette::from_hexes(["#ff0000", "#00ff00"], PaletteLimits::default(), &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn json_shape() {
        let record = PaletteRecord::new("Sunset", &palette(), HarmonyMode::Complementary, 1_700_000_000_000)
            .with_tags(["warm", "web"]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Sunset",
                "tags": ["warm", "web"],
                "colors": ["#FF0000", "#00FF00"],
                "mode": "complementary",
                "createdAt": 1_700_000_000_000_u64,
            })
        );
    }

    #[test]
    fn project_is_written_when_set() {
        let record = PaletteRecord::new("Site", &palette(), HarmonyMode::Triadic, 1).with_project("marketing");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["project"], "marketing");
        let back: PaletteRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn reads_minimal_and_unknown_mode() {
        let record: PaletteRecord = serde_json::from_str(
            r##"{"name":"x","colors":["#000000"],"mode":"neon","createdAt":5,"project":"site"}"##,
        )
        .unwrap();
        assert_eq!(record.mode, HarmonyMode::Random);
        assert_eq!(record.project.as_deref(), Some("site"));
        assert!(record.tags.is_empty());
        assert_eq!(record.created_at, 5);
    }

    #[test]
    fn clock_is_past_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }
}
