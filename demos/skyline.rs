//! Compute the skyline of a dataset with every algorithm, and time them.
//!
//! Usage: `skyline <dataset.txt> [min|max] [min|max]`, directions for x then y. The default is to
//! minimize x and maximize y.

use std::error::Error;
use std::time::Instant;

use geo_skyline::io::read_points;
use geo_skyline::partition::{PartitionedIndex, SplitAxis};
use geo_skyline::report::SkylineRun;
use geo_skyline::rtree::RTreeBuilder;
use geo_skyline::scan::SequentialScan;
use geo_skyline::skyline::{Direction, SkylineConfig};
use geo_skyline::{Point, SpatialQuery};

fn direction(arg: Option<String>, default: Direction) -> Result<Direction, Box<dyn Error>> {
    match arg.as_deref() {
        None => Ok(default),
        Some("min") => Ok(Direction::Minimize),
        Some("max") => Ok(Direction::Maximize),
        Some(other) => Err(format!("expected `min` or `max`, got {:?}", other).into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(dataset) = args.next() else {
        return Err("usage: skyline <dataset.txt> [min|max] [min|max]".into());
    };
    let config = SkylineConfig::new(
        direction(args.next(), Direction::Minimize)?,
        direction(args.next(), Direction::Maximize)?,
    );
    let points: Vec<Point<f64>> = read_points(&dataset)?;

    let scan = SequentialScan::new(points.clone());
    let tree = RTreeBuilder::from_points(points.clone());
    let halves = PartitionedIndex::new(points, SplitAxis::X);
    let algorithms: [&dyn SpatialQuery<f64>; 3] = [&scan, &tree, &halves];

    for algorithm in algorithms {
        let start = Instant::now();
        let points = algorithm.skyline(&config);
        let run = SkylineRun {
            algorithm: algorithm.skyline_name(),
            timer: algorithm.skyline_timer_name(),
            points,
            elapsed: start.elapsed(),
        };
        println!("{}\n", run);
    }
    Ok(())
}
