//! Static content tables that more than one consumer needs.
//!
//! Image-bearing tables live here so the landing page and the `heplink
//! assets` audit agree on every candidate list.

use serde::Serialize;

use crate::asset::AssetCandidates;
use crate::route::ViewSelection;

/// Fixed logo path; not probed, the `<img>` hides itself if it fails.
pub const LOGO_PATH: &str = "/logo.png";

/// Hero background candidates, in priority order.
pub const HERO_IMAGE: &[&str] = &["hero-image", "heroImage"];

/// Top navigation entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    /// Link text
    pub label: &'static str,
    /// Target view
    pub view: ViewSelection,
}

/// Navigation bar entries, left to right.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", view: ViewSelection::Home },
    NavLink { label: "Work", view: ViewSelection::Work },
    NavLink { label: "What we do", view: ViewSelection::Services },
    NavLink { label: "Insights", view: ViewSelection::Insights },
    NavLink { label: "Careers", view: ViewSelection::Careers },
    NavLink { label: "Contact", view: ViewSelection::Contact },
];

/// Case study card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorkItem {
    /// Stable key
    pub key: &'static str,
    /// Image stem
    pub image: &'static str,
    /// Eyebrow tag
    pub tag: &'static str,
    /// Client / campaign
    pub title: &'static str,
    /// One-line summary
    pub blurb: &'static str,
}

/// Selected work.
pub const WORK_ITEMS: &[WorkItem] = &[
    WorkItem {
        key: "durham",
        image: "durham-image",
        tag: "Campaign",
        title: "Durham x Hummel",
        blurb: "Amplifying club culture and kit pride with creator-led social and launch content.",
    },
    WorkItem {
        key: "aspect",
        image: "aspect-bathrooms",
        tag: "Brand & Social",
        title: "Aspect Bathrooms",
        blurb: "Elevating a local brand with performance-driven social and sleek product storytelling.",
    },
    WorkItem {
        key: "onegovs",
        image: "onegovs-image",
        tag: "Strategy & Paid",
        title: "OneGovs",
        blurb: "Building awareness and trust for a public-sector platform through targeted creative + media.",
    },
];

/// News or insight post card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Post {
    /// Headline
    pub title: &'static str,
    /// "News" or "Insight"
    pub tag: &'static str,
    /// Image stem; empty means "no image", which resolves to the placeholder
    pub image: &'static str,
}

/// News & insights.
pub const POSTS: &[Post] = &[
    Post {
        title: "Raising awareness & helping dog owners in the run up to Bonfire Night",
        tag: "News",
        image: "dogbonfire",
    },
    Post {
        title: "Making a regional haulage company stand out",
        tag: "News",
        image: "gst",
    },
    Post {
        title: "Durham x Hummel: from kit launch to community hype",
        tag: "Insight",
        image: "durham-image",
    },
];

/// Tabs of the "Our approach" panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApproachTab {
    /// Why we do it
    Goal,
    /// Shown first
    #[default]
    How,
    /// Numbers
    Proof,
}

impl ApproachTab {
    /// Tab order in the switcher.
    pub const ALL: [ApproachTab; 3] = [ApproachTab::Goal, ApproachTab::How, ApproachTab::Proof];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            ApproachTab::Goal => "Goal",
            ApproachTab::How => "How we work",
            ApproachTab::Proof => "Proof",
        }
    }

    /// Panel heading.
    pub fn title(&self) -> &'static str {
        match self {
            ApproachTab::Goal => "Our goal",
            ApproachTab::How => "How we work",
            ApproachTab::Proof => "Proof",
        }
    }

    /// Panel body copy.
    pub fn body(&self) -> &'static str {
        match self {
            ApproachTab::Goal => {
                "Earn attention that drives growth. We blend brand + performance so social actually moves the numbers that matter."
            }
            ApproachTab::How => {
                "Small team, fast feedback, data driven, and useful monthly insights you’ll actually use (like Spotify Wrapped for your marketing)."
            }
            ApproachTab::Proof => {
                "2M+ views each month, across multiple industries, and reporting that tells you what to do next. That’s the way we do it."
            }
        }
    }
}

/// One image slot on the site and the stems it probes.
#[derive(Debug, Clone, Serialize)]
pub struct ImageSlot {
    /// Where the slot is rendered, e.g. `hero` or `work/durham`
    pub slot: String,
    /// Candidate stems, priority order
    pub candidates: AssetCandidates,
}

/// Every probed image slot on the site, in page order.
pub fn asset_slots() -> Vec<ImageSlot> {
    let hero = ImageSlot {
        slot: "hero".to_string(),
        candidates: AssetCandidates::from(HERO_IMAGE),
    };
    let work = WORK_ITEMS.iter().map(|item| ImageSlot {
        slot: format!("work/{}", item.key),
        candidates: AssetCandidates::from(item.image),
    });
    let posts = POSTS.iter().enumerate().map(|(idx, post)| ImageSlot {
        slot: format!("insights/{idx}"),
        candidates: AssetCandidates::from(post.image),
    });
    std::iter::once(hero).chain(work).chain(posts).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_covers_every_view_once() {
        let views: Vec<_> = NAV_LINKS.iter().map(|link| link.view).collect();
        assert_eq!(views, ViewSelection::ALL.to_vec());
    }

    #[test]
    fn asset_slots_list_every_image() {
        let slots = asset_slots();
        assert_eq!(slots.len(), 1 + WORK_ITEMS.len() + POSTS.len());
        assert_eq!(slots[0].slot, "hero");
        assert_eq!(
            slots[0].candidates.bases(),
            &["hero-image".to_string(), "heroImage".to_string()]
        );
        assert!(
            slots
                .iter()
                .any(|s| s.candidates.bases() == ["dogbonfire".to_string()])
        );
    }

    #[test]
    fn approach_defaults_to_how_we_work() {
        assert_eq!(ApproachTab::default(), ApproachTab::How);
        assert_eq!(ApproachTab::default().title(), "How we work");
    }
}
