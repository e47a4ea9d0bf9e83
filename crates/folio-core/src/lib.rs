//! Portfolio content engine.
//!
//! The logic behind a single-page portfolio site, separated from its
//! rendering: a filter/sort engine over project records, a
//! character-at-a-time typing state machine for the terminal sections,
//! the content catalog with its versioned JSON wire format, and the
//! theme preference type.
//!
//! Zero I/O: pure logic with no opinions about timers, persistence, or
//! presentation.

pub mod builtin;
pub mod content;
pub mod filter;
pub mod theme;
pub mod typing;
pub mod wire;

pub use builtin::builtin;
pub use content::{
    ALL_CATEGORY, Category, ContentError, ContentStats, Education, Personal,
    PortfolioContent, ProjectRecord, Service, Skill, SocialLinks, Testimonial,
};
pub use filter::{FilterState, SortBy, category_counts, filter_and_sort};
pub use theme::Theme;
pub use typing::{Phase, TypingSequence};
pub use wire::{CONTENT_VERSION, ImportError, export_json, import_json};
