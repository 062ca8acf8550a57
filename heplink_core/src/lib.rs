//! # heplink-core
//!
//! Platform-free logic behind the Heplink landing page.
//!
//! The site itself is a Leptos CSR app (see the `landing` crate). Everything
//! that has a behavioral contract lives here so it can be tested natively and
//! reused by the `heplink` CLI:
//!
//! - [`asset`] - best-effort image resolution by probing file extensions
//! - [`route`] / [`router`] - fragment to view mapping and the live hash router
//! - [`compose`] - ordered sections per view
//! - [`content`] - static copy and image tables
//! - [`theme`] - read-only design tokens
//! - [`motion`] - pointer math for the decorative effects
//! - [`forms`] - inert submit handling
//!
//! ## Quick Start
//!
//! ```rust
//! use heplink_core::route::ViewSelection;
//! use heplink_core::compose::Section;
//!
//! let view = ViewSelection::from_fragment("#/services?x=1");
//! assert_eq!(view, ViewSelection::Services);
//! assert_eq!(view.sections(), &[Section::Services, Section::Work]);
//! ```
//!
//! The async pieces are runtime-agnostic: [`asset::AssetProbe`] has no `Send`
//! bound, so the same resolver runs on the browser microtask queue and on
//! tokio.

#![warn(missing_docs)]

pub mod asset;
pub mod compose;
pub mod content;
pub mod error;
pub mod forms;
pub mod motion;
pub mod route;
pub mod router;
pub mod theme;

pub use asset::{AssetCandidates, AssetProbe, AssetSlot, Attempt, resolve, resolve_or};
pub use error::ProbeError;
pub use route::{RouteToken, ViewSelection};
pub use router::{HashRouter, MemoryNavigation, NavigationSource};
pub use theme::Theme;
