//! Composite components built from groups, leaves and leaderlines
//!
//! Every composite is a builder: it validates its inputs and resolves its
//! config section, then returns a finished [`Group`](crate::render::Group)
//! (or [`Panel`]). Nothing is linked into a caller's tree until a build
//! succeeds.

pub mod annotation;
pub mod diagram;
pub mod footprint;
pub mod layout;
pub mod leaderline;
pub mod legend;
pub mod panel;
pub mod pin_label;
pub mod text_block;

pub use annotation::Annotation;
pub use diagram::Diagram;
pub use footprint::{Footprint, Package};
pub use layout::Layout;
pub use leaderline::{Direction, Leaderline, LeaderlineStyle, Route};
pub use legend::Legend;
pub use panel::{Inset, Panel, PanelBuilder};
pub use pin_label::{LabelSpec, PinLabel, PinLabelGroup, PitchSeries};
pub use text_block::TextBlock;
