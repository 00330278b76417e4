// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit profiles: every value a dashboard shows, loaded from TOML.
//!
//! Omitted keys fall back to the built-in GMU 551 profile, so a profile file only needs to
//! carry what differs.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use peniko::Color;
use serde::{Deserialize, Serialize};
use unitdash_charts::{
    DashboardSpec, GanttSeason, MapOverlaySpec, PreferenceRange, Reveal, RevealState,
    SeasonStatus,
};
use unitdash_core::{
    DateRange, DrawCounts, LatLng, OddsClassifier, Segment, TimelineItem, TimelineWindow,
};

/// Errors raised while loading a profile.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ProfileError {
    /// The profile file could not be read.
    #[error("cannot read profile {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The profile is not valid TOML or does not match the schema.
    #[error("invalid profile {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// The timeline window does not end after it starts.
    #[error("timeline window {start}..{end} must end after it starts")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct UnitProfile {
    pub(crate) unit: String,
    pub(crate) state: String,
    pub(crate) species: String,
    pub(crate) area_sq_miles: u32,
    pub(crate) public_land_percent: f64,
    pub(crate) harvest_rate_percent: f64,
    pub(crate) total_hunters: u64,
    pub(crate) resident_percent: f64,
    pub(crate) reveal_delay_ms: u32,
    pub(crate) draw: DrawProfile,
    pub(crate) preference: PreferenceProfile,
    pub(crate) terrain: TerrainProfile,
    pub(crate) timeline: TimelineProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) map: Option<MapProfile>,
    pub(crate) badges: BadgeProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct DrawProfile {
    pub(crate) quota: u32,
    pub(crate) winners: u32,
    pub(crate) applicants: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct PreferenceProfile {
    pub(crate) scale: u32,
    pub(crate) ranges: Vec<PreferenceEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct PreferenceEntry {
    pub(crate) category: String,
    pub(crate) min: f64,
    pub(crate) max: f64,
    #[serde(with = "hex_color")]
    pub(crate) color: Color,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct TerrainProfile {
    pub(crate) max_elevation: u32,
    pub(crate) low_elevation: u32,
    pub(crate) high_elevation: u32,
    pub(crate) land: Vec<SegmentEntry>,
    pub(crate) forest: SegmentEntry,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct SegmentEntry {
    pub(crate) label: String,
    pub(crate) percentage: f64,
    #[serde(with = "hex_color")]
    pub(crate) color: Color,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct TimelineProfile {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
    /// Season-title keyword that forces the high-intensity odds color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) high_intensity_keyword: Option<String>,
    pub(crate) seasons: Vec<SeasonEntry>,
    pub(crate) gantt: Vec<GanttEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub(crate) struct SeasonEntry {
    pub(crate) title: String,
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
    pub(crate) info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub(crate) struct GanttEntry {
    pub(crate) species: String,
    pub(crate) season: String,
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
    #[serde(with = "status_name")]
    pub(crate) status: SeasonStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct MapProfile {
    /// `[lat, lng]` pairs.
    pub(crate) polygon: Vec<[f64; 2]>,
    pub(crate) zoom: u8,
    pub(crate) tile_url: String,
    pub(crate) attribution: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct BadgeProfile {
    pub(crate) applicant: Vec<String>,
    pub(crate) animal: Vec<String>,
    pub(crate) season: Vec<String>,
}

impl Default for UnitProfile {
    fn default() -> Self {
        Self {
            unit: "GMU 551".to_string(),
            state: "Colorado".to_string(),
            species: "Elk".to_string(),
            area_sq_miles: 546,
            public_land_percent: 45.0,
            harvest_rate_percent: 22.0,
            total_hunters: 894,
            resident_percent: 84.0,
            reveal_delay_ms: 500,
            draw: DrawProfile::default(),
            preference: PreferenceProfile::default(),
            terrain: TerrainProfile::default(),
            timeline: TimelineProfile::default(),
            map: Some(MapProfile::default()),
            badges: BadgeProfile {
                applicant: strings(&["Adult", "Nonresident", "5 preference points"]),
                animal: strings(&["Bull", "Either"]),
                season: strings(&["Archery", "1st Rifle"]),
            },
        }
    }
}

impl Default for DrawProfile {
    fn default() -> Self {
        Self {
            quota: 45,
            winners: 45,
            applicants: 286,
        }
    }
}

impl Default for PreferenceProfile {
    fn default() -> Self {
        Self {
            scale: 30,
            ranges: vec![
                PreferenceEntry {
                    category: "Resident".to_string(),
                    min: 7.0,
                    max: 15.0,
                    color: Color::from_rgb8(0x60, 0xa5, 0xfa),
                },
                PreferenceEntry {
                    category: "Non-resident".to_string(),
                    min: 10.0,
                    max: 22.0,
                    color: Color::from_rgb8(0x25, 0x63, 0xeb),
                },
            ],
        }
    }
}

impl Default for TerrainProfile {
    fn default() -> Self {
        Self {
            max_elevation: 14_500,
            low_elevation: 6_600,
            high_elevation: 14_100,
            land: vec![
                SegmentEntry {
                    label: "Plains".to_string(),
                    percentage: 60.0,
                    color: Color::from_rgb8(0xf5, 0x9e, 0x0b),
                },
                SegmentEntry {
                    label: "Mountains".to_string(),
                    percentage: 40.0,
                    color: Color::from_rgb8(0x6b, 0x72, 0x80),
                },
            ],
            forest: SegmentEntry {
                label: "Forest".to_string(),
                percentage: 45.0,
                color: Color::from_rgb8(0x10, 0xb9, 0x81),
            },
        }
    }
}

impl Default for TimelineProfile {
    fn default() -> Self {
        let season = |title: &str, start: (u32, u32), end: (u32, u32), info: &str| SeasonEntry {
            title: title.to_string(),
            start: day(start),
            end: day(end),
            info: info.to_string(),
        };
        let gantt = |season: &str, start: (u32, u32), end: (u32, u32), status| GanttEntry {
            species: "Elk".to_string(),
            season: season.to_string(),
            start: day(start),
            end: day(end),
            status,
        };
        Self {
            start: day((9, 1)),
            end: day((12, 31)),
            high_intensity_keyword: None,
            seasons: vec![
                season("Archery", (9, 2), (9, 30), "Tag odds 35%"),
                season("Muzzleloader", (9, 13), (9, 21), "Tag odds 56%"),
                season("1st Rifle", (10, 15), (10, 19), "Tag odds 12%"),
                season("2nd Rifle", (10, 25), (11, 2), "OTC"),
                season("3rd Rifle", (11, 8), (11, 16), "OTC"),
                season("4th Rifle", (11, 19), (11, 23), "Tag odds 55%"),
                season("Late", (12, 1), (12, 31), "Tag odds 98%"),
            ],
            gantt: vec![
                gantt("Archery", (9, 2), (9, 30), SeasonStatus::Closed),
                gantt("1st Rifle", (10, 15), (10, 19), SeasonStatus::Closed),
                gantt("2nd Rifle", (10, 25), (11, 2), SeasonStatus::Active),
                gantt("Late", (12, 1), (12, 31), SeasonStatus::Upcoming),
            ],
        }
    }
}

impl Default for MapProfile {
    fn default() -> Self {
        Self {
            polygon: vec![
                [37.6, -106.3],
                [37.65, -106.25],
                [37.7, -106.3],
                [37.68, -106.35],
                [37.63, -106.37],
            ],
            zoom: 12,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "\u{a9} OSM contributors".to_string(),
        }
    }
}

// Dates of the built-in 2024 season.
fn day((month, day): (u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl UnitProfile {
    /// Loads a profile from `path`, or returns the built-in profile when `path` is `None`.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, ProfileError> {
        let Some(path) = path else {
            log::info!("no profile given, using the built-in GMU 551 profile");
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let profile: Self = toml::from_str(&text).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded profile {} from {}", profile.unit, path.display());
        Ok(profile)
    }

    /// Converts the profile into a dashboard spec.
    pub(crate) fn to_dashboard(&self) -> Result<DashboardSpec, ProfileError> {
        let timeline = &self.timeline;
        if timeline.end <= timeline.start {
            return Err(ProfileError::InvalidWindow {
                start: timeline.start,
                end: timeline.end,
            });
        }

        let mut classifier = OddsClassifier::default();
        if let Some(keyword) = &timeline.high_intensity_keyword {
            classifier = classifier.with_high_intensity_keyword(keyword.clone());
        }
        let segment = |s: &SegmentEntry| Segment::new(s.label.clone(), s.percentage, s.color);

        Ok(DashboardSpec {
            unit: self.unit.clone(),
            state: self.state.clone(),
            species: self.species.clone(),
            area_sq_miles: self.area_sq_miles,
            public_land_percent: self.public_land_percent,
            counts: DrawCounts::new(self.draw.quota, self.draw.winners, self.draw.applicants),
            harvest_rate_percent: self.harvest_rate_percent,
            total_hunters: self.total_hunters,
            resident_percent: self.resident_percent,
            preference: self
                .preference
                .ranges
                .iter()
                .map(|r| PreferenceRange::new(r.category.clone(), r.min, r.max, r.color))
                .collect(),
            preference_scale: self.preference.scale,
            land: self.terrain.land.iter().map(segment).collect(),
            forest: segment(&self.terrain.forest),
            elevation: (
                self.terrain.max_elevation,
                self.terrain.low_elevation,
                self.terrain.high_elevation,
            ),
            window: TimelineWindow::new(timeline.start, timeline.end),
            seasons: timeline
                .seasons
                .iter()
                .map(|s| {
                    TimelineItem::new(s.title.clone(), DateRange::new(s.start, s.end), s.info.clone())
                })
                .collect(),
            gantt: timeline
                .gantt
                .iter()
                .map(|g| {
                    GanttSeason::new(
                        g.species.clone(),
                        g.season.clone(),
                        DateRange::new(g.start, g.end),
                        g.status,
                    )
                })
                .collect(),
            classifier,
            map: self.map.as_ref().map(|m| {
                MapOverlaySpec::new(
                    0,
                    m.polygon.iter().map(|[lat, lng]| LatLng::new(*lat, *lng)).collect(),
                )
                .with_zoom(m.zoom)
                .with_tiles(m.tile_url.clone(), m.attribution.clone())
            }),
            applicant_badges: self.badges.applicant.clone(),
            animal_badges: self.badges.animal.clone(),
            season_badges: self.badges.season.clone(),
            reveal: Reveal {
                delay_ms: self.reveal_delay_ms,
                ..Reveal::default()
            },
            reveal_state: RevealState::Revealed,
        })
    }
}

/// `#rrggbb` (or any CSS color) strings.
mod hex_color {
    use peniko::Color;
    use peniko::color::{Srgb, parse_color};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        let rgba = color.to_rgba8();
        serializer.serialize_str(&format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_color(&s)
            .map(|c| c.to_alpha_color::<Srgb>())
            .map_err(|e| serde::de::Error::custom(format!("invalid color {s:?}: {e}")))
    }
}

/// `"active"`, `"upcoming"` or `"closed"`.
mod status_name {
    use serde::{Deserialize, Deserializer, Serializer};
    use unitdash_charts::SeasonStatus;

    pub(super) fn serialize<S: Serializer>(
        status: &SeasonStatus,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(status.name())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<SeasonStatus, D::Error> {
        let s = String::deserialize(deserializer)?;
        SeasonStatus::from_name(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown season status {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_profile(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write profile");
        file
    }

    #[test]
    fn missing_path_uses_the_built_in_profile() {
        let profile = UnitProfile::load(None).expect("built-in profile");
        assert_eq!(profile, UnitProfile::default());
        assert_eq!(profile.timeline.seasons.len(), 7);
    }

    #[test]
    fn partial_profiles_fall_back_to_defaults() {
        let file = write_profile(
            r##"
unit = "GMU 44"
species = "Mule Deer"

[draw]
applicants = 900

[terrain]
land = [{ label = "Desert", percentage = 100, color = "#d97706" }]
"##,
        );
        let profile = UnitProfile::load(Some(file.path())).expect("valid profile");
        assert_eq!(profile.unit, "GMU 44");
        assert_eq!(profile.state, "Colorado");
        assert_eq!(profile.draw, DrawProfile { quota: 45, winners: 45, applicants: 900 });
        let rgba = profile.terrain.land[0].color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (0xd9, 0x77, 0x06));
        assert_eq!(profile.terrain.max_elevation, 14_500);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let file = write_profile(
            r#"
[[timeline.seasons]]
title = "Archery"
start = "2024-09-31"
end = "2024-10-05"
info = "OTC"
"#,
        );
        let err = UnitProfile::load(Some(file.path())).expect_err("invalid date");
        assert!(matches!(err, ProfileError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn bad_colors_and_statuses_are_rejected() {
        let color = write_profile(
            r#"
[terrain.forest]
label = "Forest"
percentage = 45
color = "not-a-color"
"#,
        );
        assert!(matches!(
            UnitProfile::load(Some(color.path())),
            Err(ProfileError::Parse { .. })
        ));

        let status = write_profile(
            r#"
[[timeline.gantt]]
species = "Elk"
season = "Archery"
start = "2024-09-02"
end = "2024-09-30"
status = "open"
"#,
        );
        assert!(matches!(
            UnitProfile::load(Some(status.path())),
            Err(ProfileError::Parse { .. })
        ));
    }

    #[test]
    fn unreadable_files_report_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.toml");
        let err = UnitProfile::load(Some(&path)).expect_err("missing file");
        assert!(err.to_string().contains("missing.toml"), "{err}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn reversed_windows_are_rejected() {
        let mut profile = UnitProfile::default();
        profile.timeline.end = profile.timeline.start;
        let err = profile.to_dashboard().expect_err("empty window");
        assert!(matches!(err, ProfileError::InvalidWindow { .. }), "{err:?}");
        assert_eq!(
            err.to_string(),
            "timeline window 2024-09-01..2024-09-01 must end after it starts"
        );
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn keyword_enables_the_high_intensity_color() {
        let mut profile = UnitProfile::default();
        assert!(profile.to_dashboard().expect("valid").classifier.high_intensity_keyword.is_none());
        profile.timeline.high_intensity_keyword = Some("rifle".to_string());
        let spec = profile.to_dashboard().expect("valid");
        assert_eq!(
            spec.classifier.classify("OTC", "2nd Rifle"),
            OddsClassifier::HIGH_INTENSITY
        );
    }

    #[test]
    fn printed_default_profile_parses_back() {
        let text = toml::to_string_pretty(&UnitProfile::default()).expect("serialize");
        assert!(text.contains("color = \"#f59e0b\""), "{text}");
        let parsed: UnitProfile = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.timeline, UnitProfile::default().timeline);
        assert_eq!(toml::to_string_pretty(&parsed).expect("serialize"), text);
    }
}
