//! Trace types

use serde::Serialize;

/// A drawable trace, tagged with its plotly `type`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scattergl(ScatterTrace),
    Bar(BarTrace),
    Choropleth(ChoroplethTrace),
}

/// A value shared by every point, or one value per point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values<T> {
    Uniform(T),
    PerPoint(Vec<T>),
}

/// Line style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub width: f64,
    pub color: String,
}

/// Marker style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Values<f64>>,
    pub color: Values<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

/// Lines and/or markers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub text: Vec<String>,
    /// `lines`, `markers`, `markers+text`
    pub mode: String,
    pub hoverinfo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Vertical bars
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

/// Color bar of a choropleth
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: String,
}

/// Country regions colored by value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChoroplethTrace {
    /// ISO-3 country codes
    pub locations: Vec<String>,
    pub z: Vec<f64>,
    pub text: Vec<String>,
    pub colorscale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}
