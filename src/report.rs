//! Result records for query batches, and their text rendering.
//!
//! Measuring time and choosing where the text goes are left to the caller.

use std::fmt::{self, Display};
use std::time::Duration;

use crate::point::Point;
use crate::r#type::IndexableNum;

/// The point matched by one algorithm for one nearest-neighbor query.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborMatch<'a, N: IndexableNum, I> {
    pub algorithm: &'static str,
    /// 0-based position of the query in its batch.
    pub query_index: usize,
    pub point: &'a Point<N, I>,
}

impl<N: IndexableNum, I: Display> Display for NeighborMatch<'_, N, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Query {}: id={}, x={:.2}, y={:.2}",
            self.algorithm,
            self.query_index + 1,
            self.point.id(),
            self.point.x(),
            self.point.y()
        )
    }
}

/// Aggregate running time of one algorithm over a batch of queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub algorithm: &'static str,
    pub total: Duration,
    pub queries: usize,
}

impl Timing {
    pub fn new(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            total: Duration::ZERO,
            queries: 0,
        }
    }

    /// Account for one more query that took `elapsed`.
    pub fn record(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.queries += 1;
    }

    pub fn total_seconds(&self) -> f64 {
        self.total.as_secs_f64()
    }

    /// Mean time per query, 0 for an empty batch.
    pub fn average_seconds(&self) -> f64 {
        if self.queries == 0 {
            0.
        } else {
            self.total_seconds() / self.queries as f64
        }
    }
}

impl Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total running time ({}): {:.6} seconds, Average time: {:.6} seconds",
            self.algorithm,
            self.total_seconds(),
            self.average_seconds()
        )
    }
}

/// The skyline found by one algorithm and how long it took.
///
/// Coordinates are rendered in their shortest round-trip form and always carry a fractional part,
/// so `0` prints as `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SkylineRun<'a, N: IndexableNum, I> {
    /// Heading of the result block, as in `"{algorithm} Skyline Results:"`.
    pub algorithm: &'static str,
    /// Label of the closing timing line, as in `"{timer}: 0.0120 seconds"`.
    pub timer: &'static str,
    pub points: Vec<&'a Point<N, I>>,
    pub elapsed: Duration,
}

impl<N: IndexableNum, I> SkylineRun<'_, N, I> {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl<N: IndexableNum, I: Display> Display for SkylineRun<'_, N, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Skyline Results:", self.algorithm)?;
        for point in &self.points {
            writeln!(f, "{} {:?} {:?}", point.id(), point.x(), point.y())?;
        }
        write!(f, "{}: {:.4} seconds", self.timer, self.elapsed_seconds())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn neighbor_match_line() {
        let point = Point::new(30u64, 1., 1.004);
        let found = NeighborMatch {
            algorithm: "Best First",
            query_index: 0,
            point: &point,
        };
        assert_eq!(found.to_string(), "Best First - Query 1: id=30, x=1.00, y=1.00");
    }

    #[test]
    fn timing_averages() {
        let mut timing = Timing::new("Sequential Scan");
        assert_eq!(timing.average_seconds(), 0.);
        timing.record(Duration::from_millis(250));
        timing.record(Duration::from_millis(750));
        assert_eq!(timing.queries, 2);
        assert_eq!(timing.total_seconds(), 1.);
        assert_eq!(timing.average_seconds(), 0.5);
        assert_eq!(
            timing.to_string(),
            "Total running time (Sequential Scan): 1.000000 seconds, Average time: 0.500000 seconds"
        );
    }

    #[test]
    fn skyline_run_block() {
        let a = Point::new(1u64, 0., 0.);
        let b = Point::new(2u64, 1., 5.5);
        let run = SkylineRun {
            algorithm: "BBS",
            timer: "BBS Execution Time",
            points: vec![&a, &b],
            elapsed: Duration::from_millis(12),
        };
        assert_eq!(
            run.to_string(),
            "BBS Skyline Results:\n1 0.0 0.0\n2 1.0 5.5\nBBS Execution Time: 0.0120 seconds"
        );
    }

    #[test]
    fn skyline_run_labels_are_independent() {
        let a = Point::new(7u64, -2.25f32, 100.);
        let run = SkylineRun {
            algorithm: "BBS with Divide-and-Conquer",
            timer: "Divide-and-Conquer Execution Time",
            points: vec![&a],
            elapsed: Duration::ZERO,
        };
        assert_eq!(
            run.to_string(),
            "BBS with Divide-and-Conquer Skyline Results:\n7 -2.25 100.0\n\
             Divide-and-Conquer Execution Time: 0.0000 seconds"
        );

        let empty = SkylineRun::<f64, u64> {
            algorithm: "Sequential Scan",
            timer: "Sequential Scan Time",
            points: vec![],
            elapsed: Duration::from_millis(1500),
        };
        assert_eq!(
            empty.to_string(),
            "Sequential Scan Skyline Results:\nSequential Scan Time: 1.5000 seconds"
        );
    }
}
