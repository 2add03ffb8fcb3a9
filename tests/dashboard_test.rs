use flavornet::config::{DataSources, RenderConfig};
use flavornet::dashboard::{controls, render, DataContext, Selection};
use flavornet::figure::Trace;
use flavornet::DashboardError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const EDGES: &str = "ingredients,variable,value
garlic,onion,0.82
basil,tomato,0.64
garlic,ginger,0.31
soy,ginger,0.77
cumin,coriander,0.12
";

const CUISINES: &str = "Cuisine,garlic,basil,soy
italian,0.91,0.88,0.02
korean,0.85,0.01,0.93
";

const REGIONS: &str = "CODE,region,garlic,basil
ITA,Italy,0.91,0.88
KOR,South Korea,0.85,0.01
";

fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

fn load_all(dir: &TempDir) -> DataContext {
    let sources = DataSources {
        edges: write(dir, "edges.csv", EDGES),
        cuisines: Some(write(dir, "cuisines.csv", CUISINES)),
        regions: Some(write(dir, "regions.csv", REGIONS)),
        edge_columns: None,
    };
    DataContext::load(&sources).unwrap()
}

fn node_trace(figure: &flavornet::Figure) -> &flavornet::figure::ScatterTrace {
    match figure.data.last() {
        Some(Trace::Scattergl(t)) if t.mode.starts_with("markers") => t,
        other => panic!("expected node trace, got {:?}", other),
    }
}

#[test]
fn test_load_and_render_all_figures() {
    let dir = TempDir::new().unwrap();
    let ctx = load_all(&dir);
    assert_eq!(ctx.edges.len(), 5);

    let selection = Selection::new(0.3, Some("garlic".to_string())).unwrap();
    let payload = render(&selection, &ctx, &RenderConfig::default());

    assert_eq!(payload.summary.edges, 4);
    assert_eq!(payload.summary.ingredients, 6);
    assert!(payload.summary.selected_in_network);

    let nodes = node_trace(&payload.network);
    assert_eq!(nodes.text, vec!["garlic", "onion", "basil", "tomato", "ginger", "soy"]);

    let popularity = payload.popularity.expect("cuisine table loaded");
    assert_eq!(popularity.data.len(), 1);
    let geography = payload.geography.expect("region table loaded");
    match &geography.data[0] {
        Trace::Choropleth(c) => assert_eq!(c.z, vec![0.91, 0.85]),
        other => panic!("expected choropleth, got {:?}", other),
    }
}

#[test]
fn test_unknown_ingredient_highlights_nothing() {
    let dir = TempDir::new().unwrap();
    let ctx = load_all(&dir);
    let config = RenderConfig::default();

    // Drop every garlic edge so the ingredient is absent from the network
    let ctx = DataContext {
        edges: ctx.edges.into_iter().filter(|e| e.source != "garlic" && e.target != "garlic").collect(),
        ..ctx
    };
    let selection = Selection::new(0.0, Some("garlic".to_string())).unwrap();
    let payload = render(&selection, &ctx, &config);

    assert!(!payload.summary.selected_in_network);
    let marker = node_trace(&payload.network).marker.as_ref().unwrap();
    match &marker.color {
        flavornet::figure::Values::PerPoint(colors) => {
            assert!(colors.iter().all(|c| *c == config.node_color));
        }
        other => panic!("expected per-point colors, got {:?}", other),
    }
}

#[test]
fn test_empty_csv_renders_valid_empty_figure() {
    let dir = TempDir::new().unwrap();
    let sources = DataSources {
        edges: write(&dir, "edges.csv", "ingredients,variable,value\n"),
        ..DataSources::default()
    };
    let ctx = DataContext::load(&sources).unwrap();
    assert!(ctx.edges.is_empty());

    let selection = Selection::new(0.0, Some("garlic".to_string())).unwrap();
    let payload = render(&selection, &ctx, &RenderConfig::default());
    assert!(payload.network.is_empty());

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["network"]["data"], serde_json::json!([]));
    assert!(json["network"]["layout"].is_object());
    assert!(json.get("popularity").is_none());

    let controls = controls(&ctx);
    assert!(controls.ingredients.is_empty());
}

#[test]
fn test_render_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let ctx = load_all(&dir);
    let selection = Selection::new(0.1, Some("soy".to_string())).unwrap();
    let config = RenderConfig::default();

    assert_eq!(render(&selection, &ctx, &config), render(&selection, &ctx, &config));
}

#[test]
fn test_malformed_schema_is_reported() {
    let dir = TempDir::new().unwrap();
    let sources = DataSources {
        edges: write(&dir, "edges.csv", "from,to,strength\na,b,1\n"),
        ..DataSources::default()
    };

    let err = DataContext::load(&sources).unwrap_err();
    assert!(matches!(err, DashboardError::MalformedSchema { .. }));
    assert!(err.to_string().contains("malformed input schema"));
}

#[test]
fn test_missing_file_is_io_error() {
    let sources = DataSources {
        edges: PathBuf::from("/nonexistent/flavornet/edges.csv"),
        ..DataSources::default()
    };
    assert!(matches!(DataContext::load(&sources), Err(DashboardError::Io { .. })));
}
