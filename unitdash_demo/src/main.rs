// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a hunting-unit dashboard to a static HTML page.

mod html;
mod profile;
mod svg;

use std::env;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use kurbo::Point;
use unitdash_charts::{HeuristicTextMeasurer, LoggingClickHandler, RevealState};

use profile::UnitProfile;

#[derive(Debug, Parser)]
#[command(
    name = "unitdash",
    version,
    about = "Renders a hunting-unit dashboard profile to a static HTML page of SVG panels",
    after_help = "Examples:
  unitdash                                  Built-in GMU 551 profile to unitdash.html
  unitdash --profile gmu44.toml --out gmu44.html
  unitdash --print-default-profile > my_unit.toml"
)]
struct Args {
    /// Unit profile (TOML). Omitted keys fall back to the built-in profile.
    #[arg(long, value_name = "PATH")]
    profile: Option<PathBuf>,

    /// Output HTML file
    #[arg(long, value_name = "PATH", default_value = "unitdash.html")]
    out: PathBuf,

    /// Print the built-in profile as TOML and exit
    #[arg(long)]
    print_default_profile: bool,

    /// Render the pre-reveal frame (bars and fills collapsed, no animation)
    #[arg(long)]
    hidden: bool,

    /// Simulate a click on the map panel at panel coordinates `X,Y`
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    click: Option<Point>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate {v:?}: {e}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

fn main() -> anyhow::Result<()> {
    let mut log_builder = env_logger::builder();
    if env::var_os("RUST_LOG").is_none() {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();

    let args = Args::parse();

    if args.print_default_profile {
        let text = toml::to_string_pretty(&UnitProfile::default())
            .context("serializing the built-in profile")?;
        print!("{text}");
        return Ok(());
    }

    let profile = UnitProfile::load(args.profile.as_deref())?;
    let mut spec = profile.to_dashboard()?;
    if args.hidden {
        spec.reveal_state = RevealState::Hidden;
    }

    let dashboard = spec.build(&HeuristicTextMeasurer);
    if let Some(at) = args.click {
        match &dashboard.map {
            Some(map) => {
                if map.dispatch_click(at, &mut LoggingClickHandler).is_none() {
                    log::warn!("map has no boundary to project the click onto");
                }
            }
            None => log::warn!("profile has no map; ignoring --click"),
        }
    }

    let html = html::render_page(&dashboard);
    std::fs::write(&args.out, html)
        .with_context(|| format!("writing {}", args.out.display()))?;
    log::info!("wrote {}", args.out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_points_parse_with_optional_spaces() {
        assert_eq!(parse_point("12.5, 40"), Ok(Point::new(12.5, 40.0)));
        assert!(parse_point("12.5").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn cli_defaults() {
        let args = Args::try_parse_from(["unitdash"]).expect("parse");
        assert_eq!(args.out, PathBuf::from("unitdash.html"));
        assert!(args.profile.is_none());
        assert!(!args.hidden);
    }
}
