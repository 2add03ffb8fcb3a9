//! Figure layout metadata

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

/// Axis settings; `hidden()` removes grid, ticks and zero line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub visible: bool,
    pub showgrid: bool,
    pub zeroline: bool,
    pub showticklabels: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
}

impl Axis {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            showgrid: false,
            zeroline: false,
            showticklabels: false,
            title: None,
        }
    }

    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            visible: true,
            showgrid: true,
            zeroline: true,
            showticklabels: true,
            title: Some(Title { text: text.into() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Map settings for choropleths
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
    pub showframe: bool,
    pub showcoastlines: bool,
    pub projection: Projection,
}

impl Default for Geo {
    fn default() -> Self {
        Self {
            showframe: false,
            showcoastlines: false,
            projection: Projection {
                kind: "equirectangular".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub titlefont: Font,
    pub autosize: bool,
    pub showlegend: bool,
    pub hovermode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

impl Default for FigureLayout {
    fn default() -> Self {
        Self {
            title: None,
            titlefont: Font { size: 16 },
            autosize: true,
            showlegend: false,
            hovermode: "closest".to_string(),
            height: None,
            xaxis: None,
            yaxis: None,
            geo: None,
        }
    }
}

impl FigureLayout {
    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(Title { text: text.into() });
        self
    }
}
