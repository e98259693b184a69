//! Find the nearest facility to each query point with every algorithm, and time them.
//!
//! Usage: `nearest_facilities <facilities.txt> <queries.txt>`

use std::error::Error;
use std::time::Instant;

use geo_skyline::io::read_points;
use geo_skyline::partition::{PartitionedIndex, SplitAxis};
use geo_skyline::report::{NeighborMatch, Timing};
use geo_skyline::rtree::RTreeBuilder;
use geo_skyline::scan::SequentialScan;
use geo_skyline::{Point, SpatialQuery};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(facilities), Some(queries)) = (args.next(), args.next()) else {
        return Err("usage: nearest_facilities <facilities.txt> <queries.txt>".into());
    };
    let points: Vec<Point<f64>> = read_points(&facilities)?;
    let queries: Vec<Point<f64>> = read_points(&queries)?;

    let scan = SequentialScan::new(points.clone());
    let tree = RTreeBuilder::from_points(points.clone());
    let halves = PartitionedIndex::new(points, SplitAxis::X);
    let algorithms: [&dyn SpatialQuery<f64>; 3] = [&scan, &tree, &halves];

    let mut timings = algorithms.map(|algorithm| Timing::new(algorithm.name()));
    for (query_index, query) in queries.iter().enumerate() {
        for (algorithm, timing) in algorithms.iter().zip(timings.iter_mut()) {
            let start = Instant::now();
            let found = algorithm.nearest(query.x(), query.y())?;
            timing.record(start.elapsed());

            let found = NeighborMatch {
                algorithm: algorithm.name(),
                query_index,
                point: found.point,
            };
            println!("{}", found);
        }
    }

    println!();
    for timing in &timings {
        println!("{}", timing);
    }
    Ok(())
}
