//! Network figure: one line trace per edge plus a node marker trace

use crate::config::{LayoutAlgorithm, RenderConfig};
use crate::data::{rescale, rescale_values, EdgeRecord};
use crate::figure::{Axis, Figure, FigureLayout, Line, Marker, ScatterTrace, Trace, Values};
use crate::graph::IngredientNetwork;
use flavornet_layout::{shell_layout, shells_by_degree, spring_layout, Point};

/// Place the network's nodes according to the layout settings
pub fn layout_positions(network: &IngredientNetwork, config: &RenderConfig) -> Vec<Point> {
    let view = network.view();
    match config.layout.algorithm {
        LayoutAlgorithm::Spring => spring_layout(&view, &config.layout.spring()),
        LayoutAlgorithm::Shell => {
            let shells = shells_by_degree(&view, config.layout.shells);
            shell_layout(view.node_count, Some(&shells), &config.layout.shell())
        }
    }
}

/// Build the network figure for an already filtered edge set.
///
/// Edge widths and node sizes use the rescaled weights and strengths;
/// hover text keeps the original weights.
pub fn network_figure(
    filtered: &[EdgeRecord],
    network: &IngredientNetwork,
    selected: Option<&str>,
    threshold: f64,
    config: &RenderConfig,
) -> Figure {
    let positions = layout_positions(network, config);
    let mut figure = Figure::new(network_layout(threshold, config));

    // 1. Edges, one trace each so widths can differ
    let rescaled = rescale(filtered, config.rescale_max);
    for (edge, scaled) in network.edges().iter().zip(&rescaled) {
        let (p0, p1) = (positions[edge.source], positions[edge.target]);
        let label = format!("{} - {}: {}", scaled.source, scaled.target, edge.weight);
        figure.push(Trace::Scattergl(ScatterTrace {
            x: vec![p0.x, p1.x],
            y: vec![p0.y, p1.y],
            text: vec![label.clone(), label],
            mode: "lines".to_string(),
            hoverinfo: "text".to_string(),
            line: Some(Line {
                width: config.edge_width + scaled.weight,
                color: config.edge_color.clone(),
            }),
            ..Default::default()
        }));
    }

    if network.is_empty() {
        return figure;
    }

    // 2. Nodes
    let highlight = network.highlight(selected);
    let sizes = rescale_values(&network.strengths(), config.rescale_max)
        .into_iter()
        .map(|s| config.node_size + s)
        .collect();
    let colors = highlight
        .iter()
        .map(|&h| {
            if h {
                config.highlight_color.clone()
            } else {
                config.node_color.clone()
            }
        })
        .collect();

    figure.push(Trace::Scattergl(ScatterTrace {
        x: positions.iter().map(|p| p.x).collect(),
        y: positions.iter().map(|p| p.y).collect(),
        text: network.nodes().map(str::to_string).collect(),
        mode: "markers+text".to_string(),
        hoverinfo: "text".to_string(),
        textposition: Some("top center".to_string()),
        marker: Some(Marker {
            size: Some(Values::PerPoint(sizes)),
            color: Values::PerPoint(colors),
            line: Some(Line {
                width: 2.0,
                color: "rgba(0, 0, 0, .8)".to_string(),
            }),
        }),
        name: Some("ingredients".to_string()),
        ..Default::default()
    }));

    figure
}

fn network_layout(threshold: f64, config: &RenderConfig) -> FigureLayout {
    FigureLayout {
        height: Some(config.height),
        xaxis: Some(Axis::hidden()),
        yaxis: Some(Axis::hidden()),
        ..FigureLayout::default()
    }
    .with_title(format!("Ingredient co-occurrence above {threshold}"))
}
