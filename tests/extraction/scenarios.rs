use std::fs;

use nodeloc::config::ExtractorConfig;
use nodeloc::{extract_node_locations, ExtractError, NodeLocationExtractor, RunOptions};
use tempfile::TempDir;

use crate::extraction::support::{
    output_rows, read_output, scenario_a, write_input, INPUT_FILE, OUTPUT_FILE,
};

#[test]
fn scenario_a_keeps_only_plausible_node() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), &scenario_a());

    let cleaned = extract_node_locations(temp.path()).unwrap();

    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].node, "NODE_A");
    assert_eq!(cleaned[0].latitude, 34.0);
    assert_eq!(cleaned[0].longitude, -118.0);
    assert_eq!(cleaned[0].area, "LA");
    assert_eq!(cleaned[0].node_type, "PNODE");
    assert_eq!(
        read_output(temp.path()),
        "node,latitude,longitude,area,type\nNODE_A,34.0,-118.0,LA,PNODE\n"
    );
}

#[test]
fn scenario_b_missing_input_leaves_output_untouched() {
    let temp = TempDir::new().unwrap();

    let err = extract_node_locations(temp.path()).unwrap_err();
    match err {
        ExtractError::MissingInput { path, download_url } => {
            assert_eq!(path, temp.path().join(INPUT_FILE));
            assert!(download_url.contains("GetPriceContourMap"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!temp.path().join(OUTPUT_FILE).exists());
}

#[test]
fn scenario_b_missing_input_keeps_previous_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(OUTPUT_FILE), "previous run\n").unwrap();

    assert!(extract_node_locations(temp.path()).is_err());
    assert_eq!(read_output(temp.path()), "previous run\n");
}

#[test]
fn scenario_c_unclosed_tag_is_malformed() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(INPUT_FILE),
        "<PriceContourMap><l><m><n>NODE_A</n></l></PriceContourMap>",
    )
    .unwrap();

    let err = extract_node_locations(temp.path()).unwrap_err();
    assert!(matches!(err, ExtractError::MalformedInput(_)));
    assert!(!temp.path().join(OUTPUT_FILE).exists());
}

#[test]
fn scenario_d_duplicate_names_keep_document_order() {
    let temp = TempDir::new().unwrap();
    write_input(
        temp.path(),
        &[
            ("DUP", 35.5, -119.5, "CA", "PNODE"),
            ("ALPHA", 36.0, -120.0, "CA", "PNODE"),
            ("DUP", 37.25, -121.25, "NV", "APNODE"),
        ],
    );

    extract_node_locations(temp.path()).unwrap();

    assert_eq!(
        output_rows(temp.path()),
        vec![
            "ALPHA,36.0,-120.0,CA,PNODE",
            "DUP,35.5,-119.5,CA,PNODE",
            "DUP,37.25,-121.25,NV,APNODE",
        ]
    );
}

#[test]
fn boundary_coordinates_are_excluded() {
    let temp = TempDir::new().unwrap();
    write_input(
        temp.path(),
        &[
            ("WEST_EDGE", 34.0, -180.0, "CA", "PNODE"),
            ("EAST_EDGE", 34.0, 0.0, "CA", "PNODE"),
            ("SOUTH_EDGE", 20.0, -118.0, "CA", "PNODE"),
            ("INSIDE", 20.001, -179.999, "CA", "PNODE"),
        ],
    );

    let cleaned = extract_node_locations(temp.path()).unwrap();
    let names: Vec<&str> = cleaned.iter().map(|r| r.node.as_str()).collect();
    assert_eq!(names, vec!["INSIDE"]);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let temp = TempDir::new().unwrap();
    write_input(
        temp.path(),
        &[
            ("ZED", 38.1, -121.7, "CA", "PNODE"),
            ("ABC", 33.3, -117.2, "CA", "APNODE"),
            ("MID", 45.0, -110.0, "BPA", "PNODE"),
        ],
    );

    extract_node_locations(temp.path()).unwrap();
    let first = fs::read(temp.path().join(OUTPUT_FILE)).unwrap();
    extract_node_locations(temp.path()).unwrap();
    let second = fs::read(temp.path().join(OUTPUT_FILE)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn misaligned_fields_fail_before_writing() {
    let temp = TempDir::new().unwrap();
    let xml = format!(
        "<r xmlns=\"{}\" xmlns:d=\"{}\"><n>A</n><n>B</n><a>CA</a><p>P</p><p>P</p>\
         <d:decimal>34</d:decimal><d:decimal>-118</d:decimal>\
         <d:decimal>35</d:decimal><d:decimal>-119</d:decimal></r>",
        crate::extraction::support::CAISO_NS,
        crate::extraction::support::ARRAYS_NS
    );
    fs::write(temp.path().join(INPUT_FILE), xml).unwrap();

    let err = extract_node_locations(temp.path()).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::FieldLengthMismatch {
            names: 2,
            areas: 1,
            types: 2,
            coordinates: 4
        }
    ));
    assert!(!temp.path().join(OUTPUT_FILE).exists());
}

#[test]
fn dry_run_returns_dataset_without_writing() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), &scenario_a());

    let extractor = NodeLocationExtractor::new(temp.path(), ExtractorConfig::default());
    let (cleaned, summary) = extractor
        .run(&RunOptions {
            dry_run: true,
            json_out: None,
        })
        .unwrap();

    assert_eq!(cleaned.len(), 1);
    assert_eq!(summary.extracted, 3);
    assert_eq!(summary.retained, 1);
    assert_eq!(summary.dropped, 2);
    assert_eq!(summary.output, None);
    assert!(!temp.path().join(OUTPUT_FILE).exists());
}

#[test]
fn json_out_writes_name_lat_lon_triples() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), &scenario_a());

    let extractor = NodeLocationExtractor::new(temp.path(), ExtractorConfig::default());
    extractor
        .run(&RunOptions {
            dry_run: false,
            json_out: Some("caiso_nodes.json".into()),
        })
        .unwrap();

    let json = fs::read_to_string(temp.path().join("caiso_nodes.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, serde_json::json!([["NODE_A", 34.0, -118.0]]));
}

#[test]
fn custom_bounds_and_paths_are_honored() {
    let temp = TempDir::new().unwrap();
    write_input(
        temp.path(),
        &[
            ("NORTH", 45.0, -120.0, "BPA", "PNODE"),
            ("SOUTH", 33.0, -117.0, "CA", "PNODE"),
        ],
    );

    let mut config = ExtractorConfig::default();
    config.bounds.min_latitude = 40.0;
    config.output_path = "north.csv".into();

    let extractor = NodeLocationExtractor::new(temp.path(), config);
    let (cleaned, summary) = extractor.run(&RunOptions::default()).unwrap();

    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].node, "NORTH");
    assert_eq!(summary.output, Some(temp.path().join("north.csv")));
    assert!(!temp.path().join(OUTPUT_FILE).exists());
}

#[test]
fn doctype_with_escaped_name_is_extracted() {
    let temp = TempDir::new().unwrap();
    let xml = format!(
        "<?xml version=\"1.0\"?>\n<!DOCTYPE PriceContourMap>\n\
         <PriceContourMap xmlns=\"{}\" xmlns:d=\"{}\"><l><m><a>LA</a>\
         <c><d:decimal>34</d:decimal><d:decimal>-118</d:decimal></c>\
         <n>A &amp; B</n><p>PNODE</p></m></l></PriceContourMap>",
        crate::extraction::support::CAISO_NS,
        crate::extraction::support::ARRAYS_NS
    );
    fs::write(temp.path().join(INPUT_FILE), xml).unwrap();

    let cleaned = extract_node_locations(temp.path()).unwrap();

    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].node, "A & B");
    assert_eq!(output_rows(temp.path()), vec!["A & B,34.0,-118.0,LA,PNODE"]);
}

#[test]
fn latin1_declared_input_is_decoded() {
    let temp = TempDir::new().unwrap();
    let mut bytes = format!(
        "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\
         <PriceContourMap xmlns=\"{}\" xmlns:d=\"{}\"><l><m><a>LA</a>\
         <c><d:decimal>34</d:decimal><d:decimal>-118</d:decimal></c><n>CAF",
        crate::extraction::support::CAISO_NS,
        crate::extraction::support::ARRAYS_NS
    )
    .into_bytes();
    bytes.push(0xC9);
    bytes.extend_from_slice(b"</n><p>PNODE</p></m></l></PriceContourMap>");
    fs::write(temp.path().join(INPUT_FILE), bytes).unwrap();

    let cleaned = extract_node_locations(temp.path()).unwrap();

    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned[0].node, "CAF\u{C9}");
    assert_eq!(
        output_rows(temp.path()),
        vec!["CAF\u{C9},34.0,-118.0,LA,PNODE"]
    );
}

#[test]
fn single_high_latitude_node_passes_filter() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), &[("FAR_NORTH", 95.0, -50.0, "AK", "PNODE")]);

    let cleaned = extract_node_locations(temp.path()).unwrap();

    assert_eq!(cleaned.len(), 1);
    assert_eq!(output_rows(temp.path()), vec!["FAR_NORTH,95.0,-50.0,AK,PNODE"]);
}
