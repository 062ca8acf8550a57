//! View composition: which sections a view renders, in order.

use serde::Serialize;

use crate::route::ViewSelection;

/// A static block of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Hero banner with the resolved background image
    Hero,
    /// Service cards
    Services,
    /// Tabbed "our approach" panel
    Approach,
    /// Case study cards
    Work,
    /// Pulse newsletter signup and latest issue
    Community,
    /// News and insights posts
    Insights,
    /// Culture, careers and stats
    Careers,
    /// Contact details and brief form
    Contact,
}

impl Section {
    /// DOM id and lowercase name.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Services => "services",
            Section::Approach => "approach",
            Section::Work => "work",
            Section::Community => "community",
            Section::Insights => "insights",
            Section::Careers => "careers",
            Section::Contact => "contact",
        }
    }
}

const HOME: &[Section] = &[
    Section::Hero,
    Section::Services,
    Section::Approach,
    Section::Work,
    Section::Community,
    Section::Insights,
];
const WORK: &[Section] = &[Section::Work, Section::Community];
const SERVICES: &[Section] = &[Section::Services, Section::Work];
const INSIGHTS: &[Section] = &[Section::Insights];
const CAREERS: &[Section] = &[Section::Careers];
const CONTACT: &[Section] = &[Section::Contact];

/// Ordered sections for `view`.
pub fn composition(view: ViewSelection) -> &'static [Section] {
    match view {
        ViewSelection::Home => HOME,
        ViewSelection::Work => WORK,
        ViewSelection::Services => SERVICES,
        ViewSelection::Insights => INSIGHTS,
        ViewSelection::Careers => CAREERS,
        ViewSelection::Contact => CONTACT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn home_is_the_full_landing_page() {
        assert_eq!(
            ViewSelection::from_fragment("#/unknown").sections(),
            &[
                Section::Hero,
                Section::Services,
                Section::Approach,
                Section::Work,
                Section::Community,
                Section::Insights,
            ]
        );
    }

    #[test]
    fn route_views_match_their_tables() {
        assert_eq!(composition(ViewSelection::Work), &[Section::Work, Section::Community]);
        assert_eq!(
            composition(ViewSelection::Services),
            &[Section::Services, Section::Work]
        );
        assert_eq!(composition(ViewSelection::Insights), &[Section::Insights]);
        assert_eq!(composition(ViewSelection::Careers), &[Section::Careers]);
        assert_eq!(composition(ViewSelection::Contact), &[Section::Contact]);
    }

    #[test]
    fn careers_and_contact_only_exist_on_their_routes() {
        for view in ViewSelection::ALL {
            let sections = view.sections();
            assert_eq!(
                sections.contains(&Section::Careers),
                view == ViewSelection::Careers
            );
            assert_eq!(
                sections.contains(&Section::Contact),
                view == ViewSelection::Contact
            );
        }
    }
}
