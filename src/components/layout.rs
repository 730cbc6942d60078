//! Layout presets tiling a diagram with fixed-size panels

use super::panel::PanelBuilder;
use crate::errors::{BuildError, Result};
use crate::types::non_negative;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    /// A top panel `split` tall above a bottom panel taking the rest.
    TwoRows { split: f64 },
    /// A left panel `split` wide beside a right panel taking the rest.
    TwoColumns { split: f64 },
}

impl Layout {
    pub fn panels(self, width: f64, height: f64) -> Result<[PanelBuilder; 2]> {
        let width = non_negative(width).map_err(|e| BuildError::number("layout", "width", width, e))?;
        let height = non_negative(height).map_err(|e| BuildError::number("layout", "height", height, e))?;
        let (split, total) = match self {
            Layout::TwoRows { split } => (split, height),
            Layout::TwoColumns { split } => (split, width),
        };
        let rest = total - split;
        non_negative(split).map_err(|e| BuildError::number("layout", "split", split, e))?;
        non_negative(rest).map_err(|e| BuildError::number("layout", "split", split, e))?;

        Ok(match self {
            Layout::TwoRows { .. } => [
                PanelBuilder::new(0.0, 0.0).size(width, split),
                PanelBuilder::new(0.0, split).size(width, rest),
            ],
            Layout::TwoColumns { .. } => [
                PanelBuilder::new(0.0, 0.0).size(split, height),
                PanelBuilder::new(split, 0.0).size(rest, height),
            ],
        })
    }
}
