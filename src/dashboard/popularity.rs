//! Per-cuisine popularity bars for the selected ingredient

use crate::config::RenderConfig;
use crate::data::OccurrenceMatrix;
use crate::figure::{Axis, BarTrace, Figure, FigureLayout, Marker, Trace, Values};

pub fn popularity_figure(cuisines: &OccurrenceMatrix, selected: Option<&str>, config: &RenderConfig) -> Figure {
    let layout = FigureLayout {
        xaxis: Some(Axis::titled("Cuisine")),
        yaxis: Some(Axis::titled("Occurrence")),
        ..FigureLayout::default()
    };

    let Some((name, values)) = selected.and_then(|name| cuisines.column(name).map(|v| (name, v))) else {
        return Figure::new(layout.with_title("Select an ingredient to see its popularity by cuisine"));
    };

    let mut figure = Figure::new(layout.with_title(format!("Popularity of {name} by cuisine")));
    figure.push(Trace::Bar(BarTrace {
        x: cuisines.keys.clone(),
        y: values.to_vec(),
        name: Some(name.to_string()),
        marker: Some(Marker {
            size: None,
            color: Values::Uniform(config.highlight_color.clone()),
            line: None,
        }),
    }));
    figure
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuisines() -> OccurrenceMatrix {
        let mut m = OccurrenceMatrix::default();
        m.keys = vec!["italian".to_string(), "korean".to_string()];
        m.columns.insert("garlic".to_string(), vec![0.9, 0.8]);
        m
    }

    #[test]
    fn test_bars_for_known_ingredient() {
        let figure = popularity_figure(&cuisines(), Some("garlic"), &RenderConfig::default());

        match &figure.data[..] {
            [Trace::Bar(bar)] => {
                assert_eq!(bar.x, vec!["italian", "korean"]);
                assert_eq!(bar.y, vec![0.9, 0.8]);
            }
            other => panic!("expected one bar trace, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_or_missing_selection_is_empty() {
        let config = RenderConfig::default();
        assert!(popularity_figure(&cuisines(), Some("saffron"), &config).is_empty());
        assert!(popularity_figure(&cuisines(), None, &config).is_empty());
    }
}
