//! Layout and geometry engine for hardware pinout diagrams.
//!
//! A diagram is a tree of positioned nodes ([`render::Node`]): leaf shapes
//! and [`render::Group`]s whose bounding boxes are computed bottom-up through
//! per-axis mirroring. Composite [`components`] (pin labels, panels, legends,
//! annotations, IC footprints) are builders that resolve their [`config`]
//! section and return finished groups. [`components::Diagram`] renders the
//! tree into a [`render::Document`] and from there to SVG.
//!
//! ```
//! use pinout::components::{Diagram, PinLabelGroup};
//! use pinout::config::Config;
//! use pinout::types::Coords;
//!
//! let config = Config::new();
//! let labels = PinLabelGroup::new(100.0, 40.0)
//!     .pin_pitch(Coords::new(0.0, 30.0))
//!     .label_start(Coords::new(60.0, 0.0))
//!     .label_pitch(Coords::new(0.0, 30.0))
//!     .row([("GP0", "gpio"), ("UART0 TX", "uart")])
//!     .row([("GND", "gnd")])
//!     .build(&config)?;
//!
//! let mut diagram = Diagram::new(400.0, 120.0)?;
//! diagram.add(labels);
//! let svg = diagram.to_svg()?;
//! assert!(svg.contains("class=\"pinlabel gpio\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod components;
pub mod config;
pub mod errors;
pub mod log;
pub mod render;
pub mod types;

pub use components::Diagram;
pub use config::Config;
pub use errors::{BuildError, RenderError};
pub use types::{BoundingCoords, BoundingRect, Coords, extract_scale};
