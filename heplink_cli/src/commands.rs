//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use heplink_core::asset::{self, AssetProbe};
use heplink_core::compose::Section;
use heplink_core::content::asset_slots;
use heplink_core::router::{HashRouter, MemoryNavigation};
use heplink_core::theme::Theme;
use heplink_core::{AssetCandidates, ViewSelection};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct AssetReport {
    slot: String,
    candidates: AssetCandidates,
    /// `None` means the placeholder is shown
    resolved: Option<String>,
}

/// Resolve every image slot of the site through `probe`.
pub async fn assets<P: AssetProbe>(probe: &P, json: bool) -> Result<()> {
    let mut reports = Vec::new();
    for entry in asset_slots() {
        let resolved = asset::resolve(probe, &entry.candidates).await;
        reports.push(AssetReport {
            slot: entry.slot,
            candidates: entry.candidates,
            resolved,
        });
    }

    let missing = reports.iter().filter(|r| r.resolved.is_none()).count();
    info!(
        slots = reports.len(),
        missing, "asset audit finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!(
            "{:<14} {}",
            report.slot,
            report.resolved.as_deref().unwrap_or("placeholder")
        );
    }
    println!();
    println!(
        "{} of {} slots resolved",
        reports.len() - missing,
        reports.len()
    );
    Ok(())
}

#[derive(Debug, Serialize)]
struct RouteRow {
    fragment: &'static str,
    view: ViewSelection,
    sections: &'static [Section],
}

/// Print the fragment -> sections table.
pub fn routes(json: bool) -> Result<()> {
    let rows: Vec<RouteRow> = ViewSelection::ALL
        .iter()
        .map(|view| RouteRow {
            fragment: view.fragment(),
            view: *view,
            sections: view.sections(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!("{:<12} {:<9} {}", row.fragment, row.view, section_list(row.sections));
    }
    println!("{:<12} {:<9} {}", "(other)", ViewSelection::Home, "same as #/home");
    Ok(())
}

#[derive(Debug, Serialize)]
struct RouteResolution {
    token: String,
    view: ViewSelection,
    sections: &'static [Section],
}

/// Push `fragment` through a router on an in-memory location and report
/// what it selects.
pub fn route(fragment: &str, json: bool) -> Result<()> {
    let nav = MemoryNavigation::new();
    let router = HashRouter::mount(&nav);
    nav.navigate(fragment);

    let view = router.selection();
    let resolution = RouteResolution {
        token: router.token().to_string(),
        view,
        sections: view.sections(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("{} -> {}", resolution.token, resolution.view);
        println!("{}", section_list(resolution.sections));
    }
    Ok(())
}

/// Write the placeholder SVG (or its data URI) to `out` or stdout.
pub fn placeholder(label: &str, data_uri: bool, out: Option<&Path>) -> Result<()> {
    let theme = Theme::HEPLINK;
    let body = if data_uri {
        asset::data_uri(label, &theme)
    } else {
        asset::svg(label, &theme)
    };

    match out {
        Some(path) => {
            std::fs::write(path, &body)
                .with_context(|| format!("writing placeholder to {}", path.display()))?;
            info!(path = %path.display(), "placeholder written");
        }
        None => println!("{body}"),
    }
    Ok(())
}

fn section_list(sections: &[Section]) -> String {
    sections
        .iter()
        .map(Section::id)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_list_is_comma_separated() {
        assert_eq!(
            section_list(ViewSelection::Work.sections()),
            "work, community"
        );
    }

    #[test]
    fn placeholder_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("placeholder.svg");
        placeholder("Test", false, Some(&out)).unwrap();
        let svg = std::fs::read_to_string(out).unwrap();
        assert!(svg.contains(">Test</text>"));
    }
}
