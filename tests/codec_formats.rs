use std::fs::{self, OpenOptions};
use std::io::Write;

use ndarray::array;
use num_bigint::BigInt;
use num_rational::BigRational;
use rivet_io::codec::io_betti::from_betti_str;
use rivet_io::codec::io_bounds::parse_bounds;
use rivet_io::codec::io_metric_space::to_metric_space_string;
use rivet_io::codec::io_slices::{from_slices_slice, parse_slices};
use rivet_io::codec::Saveable;
use rivet_io::model::{Bar, Bifiltration, Bounds, Dimensions, MetricSpace, Point, PointCloud};
use rivet_io::RivetError;

#[test]
fn bounds_from_engine_lines() {
    let bounds = parse_bounds([b"low: 1.0,2.0".to_vec(), b"high: 3.0,4.0".to_vec()])
        .expect("parse bounds");
    assert_eq!(bounds, Bounds::new((1.0, 2.0), (3.0, 4.0)));

    let empty = parse_bounds(Vec::<&[u8]>::new()).expect("parse empty bounds");
    assert_eq!(empty, Bounds::new((0.0, 0.0), (0.0, 0.0)));
}

#[test]
fn betti_sections_from_engine_output() {
    let betti =
        from_betti_str("x-grades\n1/2\n1\n\ny-grades\n1\n2\n\nxi_0\n(0,0,1)\n\n").expect("parse");

    assert_eq!(
        betti.dimensions,
        Dimensions::new(
            vec![
                BigRational::new(BigInt::from(1), BigInt::from(2)),
                BigRational::from_integer(BigInt::from(1)),
            ],
            vec![
                BigRational::from_integer(BigInt::from(1)),
                BigRational::from_integer(BigInt::from(2)),
            ],
        )
    );
    assert_eq!(betti.xi_0, vec![(0, 0, 1)]);
    assert!(betti.xi_1.is_empty());
    assert!(betti.xi_2.is_empty());
}

#[test]
fn betti_serializes_to_json() {
    let betti = from_betti_str("x-grades\n3/4\n\nxi_1\n(0,1,2)\n").expect("parse");
    let json = serde_json::to_value(&betti).expect("serialize");

    assert_eq!(json["dimensions"]["x_grades"], serde_json::json!(["3/4"]));
    assert_eq!(json["xi_1"], serde_json::json!([[0, 1, 2]]));
}

#[test]
fn betti_grades_beyond_64_bits() {
    let betti = from_betti_str("x-grades\n1/36893488147419103232\n0.1234567890123456789\n")
        .expect("parse wide grades");

    let denom: BigInt = "36893488147419103232".parse().expect("bigint");
    let numer: BigInt = "1234567890123456789".parse().expect("bigint");
    let ten_pow_19: BigInt = "10000000000000000000".parse().expect("bigint");
    assert_eq!(
        betti.dimensions.x_grades,
        vec![
            BigRational::new(BigInt::from(1), denom),
            BigRational::new(numer, ten_pow_19),
        ]
    );

    let json = serde_json::to_string(&betti).expect("serialize");
    let back: rivet_io::model::MultiBetti = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, betti);
}

#[test]
fn barcodes_from_engine_output() {
    let slices = parse_slices([b"0.0 0.0: 1.0 2.0 m1, 3.0 4.0 m2".as_slice()]).expect("parse");
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].0, (0.0, 0.0));
    assert_eq!(
        slices[0].1.bars(),
        &[Bar::new(1.0, 2.0, 1), Bar::new(3.0, 4.0, 2)]
    );
}

#[test]
fn barcode_errors_name_the_offending_line() {
    let err = from_slices_slice(b"0 0: 1 2 m1\n90 1: 1 two m1\n").unwrap_err();
    match err {
        RivetError::SliceParse { line, content, .. } => {
            assert_eq!(line, 2);
            assert_eq!(content, "90 1: 1 two m1");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn metric_space_rows_shrink_along_the_triangle() {
    let space = MetricSpace::new(
        "dist",
        array![[0.0, 1.0, 2.0], [0.0, 0.0, 3.0], [0.0, 0.0, 0.0]],
    )
    .expect("square matrix");
    let text = to_metric_space_string(&space).expect("write metric space");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "metric");
    assert_eq!(lines[1], "no function");
    assert_eq!(lines[2], "3");
    assert_eq!(lines[3], "dist");
    assert_eq!(lines[4], "3.000000");

    let token_counts: Vec<usize> = lines[5..]
        .iter()
        .map(|l| l.split_whitespace().count())
        .collect();
    assert_eq!(token_counts, vec![2, 1, 0]);
}

#[test]
fn metric_space_save_replaces_existing_file_contents() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let path = temp.path().join("metric.txt");
    fs::write(&path, "x".repeat(4096)).expect("write stale file");

    let space = MetricSpace::new("d", array![[0.0, 0.5], [0.5, 0.0]]).expect("square matrix");
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(&path)
        .expect("open read+write");
    space.save(&mut file).expect("save");
    file.flush().expect("flush");
    drop(file);

    let text = fs::read_to_string(&path).expect("read back");
    assert_eq!(text, "metric\nno function\n2\nd\n0.500000\n0.500000 \n\n");
}

#[test]
fn point_cloud_and_bifiltration_save_to_files() {
    let temp = tempfile::tempdir().expect("create temp dir");

    let cloud = PointCloud::new(Point::many([[1.0, 1.0], [2.0, 0.0]], 0.0))
        .expect("point cloud")
        .with_max_dist(10.0);
    let cloud_path = temp.path().join("cloud.txt");
    let mut cloud_file = fs::File::create(&cloud_path).expect("create cloud file");
    cloud.save(&mut cloud_file).expect("save cloud");
    drop(cloud_file);
    assert_eq!(
        fs::read_to_string(&cloud_path).expect("read cloud"),
        "points\n2\n10.000000\nno function\n1.000000 1.000000 \n2.000000 0.000000 \n\n"
    );

    let bif = Bifiltration::new("x", "y", vec![Point::new((1.0, 2.0), vec![0.0])])
        .expect("bifiltration");
    let bif_path = temp.path().join("bif.txt");
    let mut bif_file = fs::File::create(&bif_path).expect("create bif file");
    bif.save(&mut bif_file).expect("save bifiltration");
    drop(bif_file);
    assert_eq!(
        fs::read_to_string(&bif_path).expect("read bifiltration"),
        "bifiltration\nx\ny\n0.000000  1.000000  2.000000  \n\n"
    );
}

#[test]
fn validation_happens_before_any_output() {
    let err = PointCloud::new(vec![
        Point::new(0.0, vec![0.0, 0.0]),
        Point::new(0.0, vec![0.0]),
    ])
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected points of dimension 2, but point at position 1 has dimension 1"
    );

    let err = Bifiltration::new("x", "y", vec![Point::new(1.0, vec![0.0])]).unwrap_err();
    assert!(matches!(err, RivetError::BifiltrationAppearance));
}
