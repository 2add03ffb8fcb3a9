use flavornet::data::{filter_by_threshold, rescale, weight_range, EdgeRecord};

fn pantry() -> Vec<EdgeRecord> {
    vec![
        EdgeRecord::new("garlic", "onion", 0.82),
        EdgeRecord::new("basil", "tomato", 0.64),
        EdgeRecord::new("garlic", "ginger", 0.31),
        EdgeRecord::new("soy", "ginger", 0.77),
        EdgeRecord::new("cumin", "coriander", 0.12),
        EdgeRecord::new("tomato", "onion", 0.64),
        EdgeRecord::new("butter", "flour", 0.05),
    ]
}

#[test]
fn test_filter_keeps_exactly_edges_above_threshold() {
    let edges = pantry();

    for threshold in [-1.0, 0.0, 0.05, 0.12, 0.3, 0.64, 0.77, 0.82, 1.0] {
        let filtered = filter_by_threshold(&edges, threshold);

        let expected: Vec<EdgeRecord> = edges.iter().filter(|e| e.weight > threshold).cloned().collect();
        assert_eq!(filtered, expected, "threshold {}", threshold);

        // Subsequence: indices in the original are strictly increasing
        let mut last = None;
        for e in &filtered {
            let idx = edges.iter().position(|o| o == e).unwrap();
            assert!(last.map_or(true, |l| idx > l));
            last = Some(idx);
        }
    }
}

#[test]
fn test_rescale_is_monotonic_and_bounded() {
    let filtered = filter_by_threshold(&pantry(), 0.1);

    for k in [4.0, 12.0, 20.0] {
        let rescaled = rescale(&filtered, k);
        assert_eq!(rescaled.len(), filtered.len());

        for (a, ra) in filtered.iter().zip(&rescaled) {
            assert!(ra.weight >= 0.0 && ra.weight <= k - 1.0);
            for (b, rb) in filtered.iter().zip(&rescaled) {
                if a.weight < b.weight {
                    assert!(ra.weight < rb.weight);
                }
            }
        }

        let (lo, hi) = weight_range(&rescaled).unwrap();
        assert_eq!(lo, 0.0);
        assert_eq!(hi, k - 1.0);
    }
}

#[test]
fn test_rescale_is_deterministic() {
    let filtered = filter_by_threshold(&pantry(), 0.3);
    assert_eq!(rescale(&filtered, 12.0), rescale(&filtered, 12.0));
}

#[test]
fn test_single_distinct_weight_rescales_to_zero() {
    let filtered = filter_by_threshold(&pantry(), 0.63);
    let filtered: Vec<EdgeRecord> = filtered.into_iter().filter(|e| e.weight == 0.64).collect();
    assert_eq!(filtered.len(), 2);

    let rescaled = rescale(&filtered, 4.0);
    assert!(rescaled.iter().all(|e| e.weight == 0.0));
}

#[test]
fn test_threshold_above_everything_is_empty() {
    let filtered = filter_by_threshold(&pantry(), 0.82);
    assert!(filtered.is_empty());
    assert!(rescale(&filtered, 4.0).is_empty());
}

#[test]
fn test_filter_and_rescale_three_edges() {
    let edges = vec![
        EdgeRecord::new("a", "b", 0.1),
        EdgeRecord::new("a", "c", 0.5),
        EdgeRecord::new("b", "c", 0.9),
    ];
    let filtered = filter_by_threshold(&edges, 0.3);
    assert_eq!(filtered, vec![EdgeRecord::new("a", "c", 0.5), EdgeRecord::new("b", "c", 0.9)]);
    assert_eq!(
        rescale(&filtered, 4.0),
        vec![EdgeRecord::new("a", "c", 0.0), EdgeRecord::new("b", "c", 3.0)]
    );
}
