//! Figure payloads
//!
//! A [`Figure`] is a `{data, layout}` pair serialized in the JSON shape
//! plotly.js accepts, so the browser can pass it straight to
//! `Plotly.react`.

pub mod layout;
pub mod trace;

pub use layout::{Axis, FigureLayout, Font, Geo, Projection, Title};
pub use trace::{BarTrace, ChoroplethTrace, ColorBar, Line, Marker, ScatterTrace, Trace, Values};

use serde::Serialize;

/// Drawable traces plus layout metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

impl Figure {
    pub fn new(layout: FigureLayout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    pub fn push(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
