//! Choropleth of the selected ingredient's usage by country

use crate::config::RenderConfig;
use crate::data::OccurrenceMatrix;
use crate::figure::{ChoroplethTrace, ColorBar, Figure, FigureLayout, Geo, Trace};

pub fn geography_figure(regions: &OccurrenceMatrix, selected: Option<&str>, config: &RenderConfig) -> Figure {
    let layout = FigureLayout {
        geo: Some(Geo::default()),
        ..FigureLayout::default()
    };

    let Some((name, values)) = selected.and_then(|name| regions.column(name).map(|v| (name, v))) else {
        return Figure::new(layout.with_title("Select an ingredient to see where it is used"));
    };

    let mut figure = Figure::new(layout.with_title(format!("Use of {name} by country")));
    figure.push(Trace::Choropleth(ChoroplethTrace {
        locations: regions.keys.clone(),
        z: values.to_vec(),
        text: (0..regions.row_count()).map(|i| regions.label(i).to_string()).collect(),
        colorscale: config.colorscale.clone(),
        colorbar: Some(ColorBar {
            title: name.to_string(),
        }),
    }));
    figure
}
