//! Selection and expansion state.
//!
//! All state here is local to one running view: the active selection plus
//! the [`SectionView`] of whatever section is mounted.

mod expansion;
mod section_view;
mod selection;

pub use expansion::ExpansionSet;
pub use section_view::{ListView, SectionView, Target};
pub use selection::Selection;
