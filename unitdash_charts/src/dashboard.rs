// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard assembly.
//!
//! [`DashboardSpec`] holds every value a unit page shows. [`DashboardSpec::build`] runs the
//! calculators through the panel specs and groups the resulting panels into titled cards and
//! sections; painting them is left to the caller.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use unitdash_core::{
    DrawCounts, OddsClassifier, Segment, TimelineItem, TimelineWindow, group_thousands,
};

use crate::elevation::ElevationChartSpec;
use crate::land_split::LandSplitSpec;
use crate::map_overlay::{MapOverlaySpec, MapView};
use crate::measure::TextMeasurer;
use crate::palette;
use crate::panel::Panel;
use crate::popularity::PopularitySpec;
use crate::preference::{PreferencePanelSpec, PreferenceRange};
use crate::resident_donut::ResidentDonutSpec;
use crate::reveal::{Reveal, RevealState};
use crate::season_gantt::{GanttSeason, SeasonGanttSpec};
use crate::season_timeline::SeasonTimelineSpec;
use crate::stat_tile::StatTileSpec;

/// Everything a unit dashboard shows.
#[derive(Clone, Debug)]
pub struct DashboardSpec {
    /// Unit name (`"GMU 551"`).
    pub unit: String,
    /// State the unit is in.
    pub state: String,
    /// Hunted species.
    pub species: String,
    /// Unit area in square miles.
    pub area_sq_miles: u32,
    /// Share of public land in percent.
    pub public_land_percent: f64,
    /// Quota, winners and applicants.
    pub counts: DrawCounts,
    /// Historical hunter success in percent.
    pub harvest_rate_percent: f64,
    /// Historical hunter count.
    pub total_hunters: u64,
    /// Resident share of licenses in percent.
    pub resident_percent: f64,
    /// Preference point ranges per applicant category.
    pub preference: Vec<PreferenceRange>,
    /// Points at the right edge of the preference track.
    pub preference_scale: u32,
    /// Land-type split (outer ring).
    pub land: Vec<Segment>,
    /// Forest cover (inner ring).
    pub forest: Segment,
    /// Gauge top, lowest and highest elevation in feet.
    pub elevation: (u32, u32, u32),
    /// Season timeline window.
    pub window: TimelineWindow,
    /// Seasons with odds descriptors.
    pub seasons: Vec<TimelineItem>,
    /// Seasons with status, for the gantt view. Empty hides the gantt card.
    pub gantt: Vec<GanttSeason>,
    /// Odds colors.
    pub classifier: OddsClassifier,
    /// Boundary map, if any.
    pub map: Option<MapOverlaySpec>,
    /// Applicant badges (`"Adult"`, `"Nonresident"`).
    pub applicant_badges: Vec<String>,
    /// Animal badges (`"Bull"`, `"Either"`).
    pub animal_badges: Vec<String>,
    /// Season badges (`"Archery"`).
    pub season_badges: Vec<String>,
    /// Reveal timing.
    pub reveal: Reveal,
    /// Reveal state to draw.
    pub reveal_state: RevealState,
}

/// Page header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitHeader {
    /// Unit name.
    pub unit: String,
    /// State.
    pub state: String,
    /// Species.
    pub species: String,
}

/// A labelled row of badges in a card footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeGroup {
    /// Row label (`"Animal"`).
    pub label: String,
    /// Badge texts.
    pub badges: Vec<String>,
}

/// A titled card holding panels.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    /// Card title.
    pub title: String,
    /// One-line description under the title.
    pub subtitle: String,
    /// Panels, laid out side by side.
    pub panels: Vec<Panel>,
    /// Footer badge rows.
    pub badges: Vec<BadgeGroup>,
    /// Whether the card shows the boundary map, so a host can attach its tile layer.
    pub holds_map: bool,
}

impl Card {
    fn new(title: &str, subtitle: &str, panels: Vec<Panel>) -> Self {
        Self {
            title: String::from(title),
            subtitle: String::from(subtitle),
            panels,
            badges: Vec::new(),
            holds_map: false,
        }
    }

    fn holding_map(mut self) -> Self {
        self.holds_map = true;
        self
    }

    fn with_badges(mut self, groups: impl IntoIterator<Item = (&'static str, Vec<String>)>) -> Self {
        self.badges.extend(
            groups
                .into_iter()
                .filter(|(_, badges)| !badges.is_empty())
                .map(|(label, badges)| BadgeGroup {
                    label: String::from(label),
                    badges,
                }),
        );
        self
    }
}

/// A headed group of cards.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Section heading.
    pub heading: String,
    /// Cards in display order.
    pub cards: Vec<Card>,
}

/// An assembled dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    /// Page header.
    pub header: UnitHeader,
    /// Sections in display order.
    pub sections: Vec<Section>,
    /// What the map collaborator receives.
    pub map: Option<MapView>,
}

impl Dashboard {
    /// Iterates every card of every section.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.sections.iter().flat_map(|s| s.cards.iter())
    }

    /// Looks up a card by title.
    pub fn card(&self, title: &str) -> Option<&Card> {
        self.cards().find(|c| c.title == title)
    }
}

impl DashboardSpec {
    /// Assembles the dashboard.
    pub fn build(&self, measurer: &dyn TextMeasurer) -> Dashboard {
        let map = self.map.as_ref().map(MapOverlaySpec::view);
        let stats = self.counts.derive();
        log::debug!(
            "{}: oversubscription {} draw odds {}%",
            self.unit,
            stats.oversubscription_label(),
            stats.draw_odds_label()
        );

        let (max_elevation, low, high) = self.elevation;
        let mut location = Vec::new();
        if let Some(view) = &map {
            location.push(Card::new(
                "Map",
                "Boundaries and Landmarks",
                alloc::vec![view.panel.clone()],
            )
            .holding_map());
        }
        location.push(Card::new(
            "Terrain",
            "Landscape & Elevation Overview",
            alloc::vec![
                LandSplitSpec::new(0, self.land.clone(), self.forest.clone()).panel(measurer),
                ElevationChartSpec::new(0, max_elevation, low, high).panel(),
                StatTileSpec::new(
                    0,
                    group_thousands(u64::from(self.area_sq_miles)),
                    "sq miles, Area",
                    palette::TEAL_700,
                )
                .panel(),
                StatTileSpec::new(
                    0,
                    alloc::format!("{}%", self.public_land_percent),
                    "Public Land",
                    palette::YELLOW_700,
                )
                .panel(),
            ],
        ));

        let mut odds = alloc::vec![
            Card::new(
                "Seasons and Odds",
                "Season timeline, duration, and applicant odds",
                alloc::vec![
                    SeasonTimelineSpec::new(0, self.window, self.seasons.clone())
                        .with_classifier(self.classifier.clone())
                        .panel(measurer),
                ],
            )
            .with_badges([
                ("Applicant", self.applicant_badges.clone()),
                ("Animal", self.animal_badges.clone()),
            ]),
        ];
        if !self.gantt.is_empty() {
            odds.push(Card::new(
                "Season Timeline",
                "Season status by species",
                alloc::vec![SeasonGanttSpec::new(0, self.window, self.gantt.clone()).panel(measurer)],
            ));
        }
        odds.push(
            Card::new(
                "Unit Popularity",
                "Quota, winners, and applicants overview",
                alloc::vec![
                    PopularitySpec::new(0, self.counts)
                        .with_reveal(self.reveal, self.reveal_state)
                        .panel(),
                ],
            )
            .with_badges(self.animal_and_season_badges()),
        );
        odds.push(
            Card::new(
                "Preference Points Range",
                "Min points needed to draw a tag and max points hunters bid",
                alloc::vec![
                    PreferencePanelSpec::new(0, self.preference.clone())
                        .with_scale(self.preference_scale)
                        .with_reveal(self.reveal, self.reveal_state)
                        .panel(),
                ],
            )
            .with_badges(self.animal_and_season_badges()),
        );
        odds.push(
            Card::new(
                "Season Statistics",
                "Historical average hunter success and participation",
                alloc::vec![
                    StatTileSpec::new(
                        0,
                        alloc::format!("{}%", self.harvest_rate_percent),
                        "Harvest Rate",
                        palette::BLUE_700,
                    )
                    .with_fill(self.harvest_rate_percent)
                    .with_reveal(self.reveal, self.reveal_state)
                    .panel(),
                    StatTileSpec::new(
                        0,
                        group_thousands(self.total_hunters),
                        "Total Hunters",
                        palette::AMBER_700,
                    )
                    .panel(),
                    ResidentDonutSpec::new(0, self.resident_percent).panel(),
                ],
            )
            .with_badges(self.animal_and_season_badges()),
        );

        Dashboard {
            header: UnitHeader {
                unit: self.unit.clone(),
                state: self.state.clone(),
                species: self.species.clone(),
            },
            sections: alloc::vec![
                Section {
                    heading: String::from("Location & Access"),
                    cards: location,
                },
                Section {
                    heading: String::from("Odds and Statistics"),
                    cards: odds,
                },
            ],
            map,
        }
    }

    fn animal_and_season_badges(&self) -> [(&'static str, Vec<String>); 2] {
        [
            ("Animal", self.animal_badges.clone()),
            ("Season", self.season_badges.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use chrono::NaiveDate;
    use peniko::color::palette::css;
    use unitdash_core::{DateRange, LatLng};

    use super::*;
    use crate::mark::MarkId;
    use crate::measure::HeuristicTextMeasurer;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).expect("valid date")
    }

    fn spec() -> DashboardSpec {
        DashboardSpec {
            unit: String::from("GMU 551"),
            state: String::from("Colorado"),
            species: String::from("Elk"),
            area_sq_miles: 546,
            public_land_percent: 45.0,
            counts: DrawCounts::new(45, 45, 286),
            harvest_rate_percent: 22.0,
            total_hunters: 894,
            resident_percent: 84.0,
            preference: vec![PreferenceRange::new("Resident", 7.0, 15.0, css::CORNFLOWER_BLUE)],
            preference_scale: 30,
            land: vec![
                Segment::new("Plains", 60.0, css::ORANGE),
                Segment::new("Mountains", 40.0, css::GRAY),
            ],
            forest: Segment::new("Forest", 45.0, css::SEA_GREEN),
            elevation: (14_500, 6_600, 14_100),
            window: TimelineWindow::new(date(9, 1), date(12, 31)),
            seasons: vec![TimelineItem::new(
                "Archery",
                DateRange::new(date(9, 2), date(9, 30)),
                "Tag odds 35%",
            )],
            gantt: Vec::new(),
            classifier: OddsClassifier::default(),
            map: Some(MapOverlaySpec::new(
                0,
                vec![
                    LatLng::new(37.6, -106.3),
                    LatLng::new(37.65, -106.25),
                    LatLng::new(37.7, -106.3),
                ],
            )),
            applicant_badges: vec![String::from("Adult")],
            animal_badges: vec![String::from("Bull"), String::from("Either")],
            season_badges: Vec::new(),
            reveal: Reveal::default(),
            reveal_state: RevealState::Revealed,
        }
    }

    #[test]
    fn sections_follow_the_page_layout() {
        let dashboard = spec().build(&HeuristicTextMeasurer);
        let headings: Vec<&str> = dashboard.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, ["Location & Access", "Odds and Statistics"]);
        let titles: Vec<&str> = dashboard.cards().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Map",
                "Terrain",
                "Seasons and Odds",
                "Unit Popularity",
                "Preference Points Range",
                "Season Statistics",
            ]
        );
        assert_eq!(dashboard.header.unit, "GMU 551");
    }

    #[test]
    fn empty_badge_groups_are_dropped() {
        let dashboard = spec().build(&HeuristicTextMeasurer);
        let popularity = dashboard.card("Unit Popularity").expect("card");
        assert_eq!(popularity.badges.len(), 1);
        assert_eq!(popularity.badges[0].label, "Animal");
        assert_eq!(popularity.badges[0].badges, ["Bull", "Either"]);
    }

    #[test]
    fn tiles_format_their_figures() {
        let dashboard = spec().build(&HeuristicTextMeasurer);
        let stats = dashboard.card("Season Statistics").expect("card");
        let hunters = stats.panels[1]
            .mark(MarkId::from_raw(3))
            .and_then(|m| m.as_text())
            .expect("value");
        assert_eq!(hunters.text, "894");
        let terrain = dashboard.card("Terrain").expect("card");
        let public = terrain.panels[3]
            .mark(MarkId::from_raw(3))
            .and_then(|m| m.as_text())
            .expect("value");
        assert_eq!(public.text, "45%");
    }

    #[test]
    fn hidden_state_reaches_every_revealed_panel() {
        let mut s = spec();
        s.reveal_state = RevealState::Hidden;
        let dashboard = s.build(&HeuristicTextMeasurer);
        let revealed = dashboard
            .cards()
            .flat_map(|c| c.panels.iter())
            .flat_map(|p| p.marks.iter())
            .filter(|m| m.reveal.is_some())
            .count();
        assert_eq!(revealed, 0);

        let shown = spec().build(&HeuristicTextMeasurer);
        assert!(
            shown
                .cards()
                .flat_map(|c| c.panels.iter())
                .flat_map(|p| p.marks.iter())
                .any(|m| m.reveal.is_some())
        );
    }

    #[test]
    fn gantt_card_appears_with_gantt_seasons() {
        let mut s = spec();
        s.gantt = vec![GanttSeason::new(
            "Elk",
            "Archery",
            DateRange::new(date(9, 2), date(9, 30)),
            crate::season_gantt::SeasonStatus::Closed,
        )];
        assert!(s.build(&HeuristicTextMeasurer).card("Season Timeline").is_some());
        assert!(spec().build(&HeuristicTextMeasurer).card("Season Timeline").is_none());
    }

    #[test]
    fn map_view_is_exposed_for_the_tile_layer() {
        let dashboard = spec().build(&HeuristicTextMeasurer);
        let map = dashboard.map.expect("map");
        assert_eq!(map.zoom, 12);
        assert!(map.center.is_some());
    }

    #[test]
    fn only_the_map_card_is_flagged_for_tiles() {
        let dashboard = spec().build(&HeuristicTextMeasurer);
        let flagged: Vec<&str> = dashboard
            .cards()
            .filter(|c| c.holds_map)
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(flagged, ["Map"]);

        let mut s = spec();
        s.map = None;
        assert!(s.build(&HeuristicTextMeasurer).cards().all(|c| !c.holds_map));
    }
}
