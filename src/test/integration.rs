use crate::io::parse_points;
use crate::partition::{PartitionedIndex, SplitAxis};
use crate::report::{NeighborMatch, SkylineRun};
use crate::rtree::RTreeBuilder;
use crate::scan::SequentialScan;
use crate::skyline::{Direction, SkylineConfig};
use crate::test::{random_points, sorted_ids};
use crate::{Point, SpatialQuery};

#[test]
fn nearest_distance_matches_rstar() {
    use rstar::PointDistance;

    let points = random_points(1, 2000);
    let oracle = rstar::RTree::bulk_load(points.iter().map(|p| [p.x(), p.y()]).collect());
    let tree = RTreeBuilder::from_points(points);

    for query in random_points(2, 200) {
        let (x, y) = (query.x(), query.y());
        let found = tree.nearest(x, y).unwrap();
        let dist = found.point.distance_squared(x, y);

        // Nothing the oracle finds around the query may be closer than the reported neighbor
        let r = found.distance + 1e-9;
        let envelope = rstar::AABB::from_corners([x - r, y - r], [x + r, y + r]);
        let closest = oracle
            .locate_in_envelope(&envelope)
            .map(|p| p.distance_2(&[x, y]))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(closest, dist);
    }
}

#[test]
fn window_query_matches_rstar() {
    let points = random_points(4, 1000);
    let oracle = rstar::RTree::bulk_load(points.iter().map(|p| [p.x(), p.y()]).collect());
    let tree = RTreeBuilder::from_points(points);

    let envelope = rstar::AABB::from_corners([10., 20.], [45., 70.]);
    let expected = oracle.locate_in_envelope(&envelope).count();
    assert_eq!(tree.search(10., 20., 45., 70.).len(), expected);
}

#[test]
fn every_algorithm_agrees() {
    let points = random_points(5, 800);
    let scan = SequentialScan::new(points.clone());
    let tree = RTreeBuilder::from_points(points.clone());
    let halves = PartitionedIndex::new(points, SplitAxis::MaxSpread);
    let algorithms: [&dyn SpatialQuery<f64>; 3] = [&scan, &tree, &halves];

    for query in random_points(6, 50) {
        let expected = scan.nearest(query.x(), query.y()).unwrap();
        for algorithm in algorithms {
            assert_eq!(
                algorithm.nearest(query.x(), query.y()).unwrap(),
                expected,
                "{}",
                algorithm.name()
            );
        }
    }

    for x in [Direction::Minimize, Direction::Maximize] {
        for y in [Direction::Minimize, Direction::Maximize] {
            let config = SkylineConfig::new(x, y);
            let expected = sorted_ids(&scan.skyline(&config));
            for algorithm in algorithms {
                assert_eq!(
                    sorted_ids(&algorithm.skyline(&config)),
                    expected,
                    "{}",
                    algorithm.skyline_name()
                );
            }
        }
    }
}

#[test]
fn loaded_dataset_through_reports() {
    let text = "1 0 0\n2 1 5\n\n3 5 1\n4 3 3\n";
    let points: Vec<Point<f64>> = parse_points(text.as_bytes()).unwrap();
    let tree = RTreeBuilder::from_points(points);

    let config = SkylineConfig::new(Direction::Minimize, Direction::Maximize);
    assert_eq!(sorted_ids(&tree.skyline(&config)), vec![1, 2]);

    let found = tree.nearest(4.6, 1.2).unwrap();
    let line = NeighborMatch {
        algorithm: tree.name(),
        query_index: 4,
        point: found.point,
    }
    .to_string();
    assert_eq!(line, "Best First - Query 5: id=3, x=5.00, y=1.00");
}

#[test]
fn skyline_reports_name_each_algorithm() {
    let text = "1 0 0\n2 1 5\n3 5 1\n4 3 3\n";
    let points: Vec<Point<f64>> = parse_points(text.as_bytes()).unwrap();
    let scan = SequentialScan::new(points.clone());
    let tree = RTreeBuilder::from_points(points.clone());
    let halves = PartitionedIndex::new(points, SplitAxis::X);
    let algorithms: [&dyn SpatialQuery<f64>; 3] = [&scan, &tree, &halves];
    let config = SkylineConfig::new(Direction::Minimize, Direction::Maximize);

    let reports: Vec<String> = algorithms
        .iter()
        .map(|algorithm| {
            SkylineRun {
                algorithm: algorithm.skyline_name(),
                timer: algorithm.skyline_timer_name(),
                points: algorithm.skyline(&config),
                elapsed: std::time::Duration::ZERO,
            }
            .to_string()
        })
        .collect();

    assert_eq!(
        reports[0],
        "Sequential Scan Skyline Results:\n1 0.0 0.0\n2 1.0 5.0\n\
         Sequential Scan Time: 0.0000 seconds"
    );
    assert!(reports[1].starts_with("BBS Skyline Results:\n"));
    assert!(reports[1].ends_with("\nBBS Execution Time: 0.0000 seconds"));
    assert!(reports[2].starts_with("BBS with Divide-and-Conquer Skyline Results:\n"));
    assert!(reports[2].ends_with("\nDivide-and-Conquer Execution Time: 0.0000 seconds"));
}

#[test]
fn string_ids_and_f32() {
    let mut builder = RTreeBuilder::<f32, String>::new_with_node_size(3);
    for (i, name) in ["north", "south", "east", "west", "center"].iter().enumerate() {
        let angle = i as f32;
        builder.add_point(name.to_string(), angle.cos() * 10., angle.sin() * 10.);
    }
    builder.add_point("origin".to_string(), 0., 0.);
    let tree = builder.finish();

    assert_eq!(tree.nearest(0.1, 0.1).unwrap().point.id(), "origin");
    let config = SkylineConfig::new(Direction::Maximize, Direction::Maximize);
    let skyline = tree.skyline(&config);
    assert!(!skyline.iter().any(|p| p.id() == "origin"));
}
