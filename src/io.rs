//! Loading point datasets from text.
//!
//! A dataset holds one point per line as whitespace-separated `<id> <x> <y>`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{GeoSkylineError, Result};
use crate::point::Point;
use crate::r#type::IndexableNum;

/// Parse every point of `reader`, in order.
///
/// Blank lines are skipped. The first malformed line aborts the whole load with
/// [`GeoSkylineError::Parse`], carrying its 1-based line number.
///
/// ```
/// use geo_skyline::io::parse_points;
/// use geo_skyline::Point;
///
/// let text = "1 0.0 0.0\n2 1.0 5.0\n";
/// let points: Vec<Point<f64>> = parse_points(text.as_bytes()).unwrap();
/// assert_eq!(points[1], Point::new(2, 1., 5.));
/// ```
pub fn parse_points<N, I, R>(reader: R) -> Result<Vec<Point<N, I>>>
where
    N: IndexableNum,
    I: FromStr,
    R: BufRead,
{
    let mut points = vec![];
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let point = parse_line(&line).map_err(|reason| GeoSkylineError::Parse {
            line: index + 1,
            reason,
        })?;
        points.push(point);
    }
    Ok(points)
}

fn parse_line<N: IndexableNum, I: FromStr>(line: &str) -> std::result::Result<Point<N, I>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [id, x, y] = tokens.as_slice() else {
        return Err(format!(
            "expected 3 fields `<id> <x> <y>`, found {}",
            tokens.len()
        ));
    };
    let id = id
        .parse::<I>()
        .map_err(|_| format!("invalid id {:?}", id))?;
    Ok(Point::new(id, parse_coord(x, "x")?, parse_coord(y, "y")?))
}

fn parse_coord<N: IndexableNum>(token: &str, axis: &str) -> std::result::Result<N, String> {
    let value = token
        .parse::<N>()
        .map_err(|_| format!("invalid {} coordinate {:?}", axis, token))?;
    if !value.is_finite() {
        return Err(format!("non-finite {} coordinate {:?}", axis, token));
    }
    Ok(value)
}

/// Read every point of the file at `path`.
pub fn read_points<N, I>(path: impl AsRef<Path>) -> Result<Vec<Point<N, I>>>
where
    N: IndexableNum,
    I: FromStr,
{
    let path = path.as_ref();
    let points = parse_points(BufReader::new(File::open(path)?))?;
    log::debug!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(text: &str) -> Result<Vec<Point<f64>>> {
        parse_points(text.as_bytes())
    }

    fn parse_error_line(text: &str) -> usize {
        match parse(text) {
            Err(GeoSkylineError::Parse { line, .. }) => line,
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn parses_points_in_order() {
        let points = parse("10 0 0\n20   3.5\t4\n30 -1e2 1.25\n").unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(10, 0., 0.),
                Point::new(20, 3.5, 4.),
                Point::new(30, -100., 1.25),
            ]
        );
    }

    #[test]
    fn skips_blank_lines() {
        let points = parse("\n1 0 0\n   \n2 1 1\n\n").unwrap();
        assert_eq!(points.len(), 2);
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(parse_error_line("1 0 0\n2 1\n"), 2);
        assert_eq!(parse_error_line("1 0 0 0\n"), 1);
    }

    #[test]
    fn rejects_bad_numbers() {
        assert_eq!(parse_error_line("1 0 0\n\n3 abc 0\n"), 3);
        assert_eq!(parse_error_line("1 0 NaN\n"), 1);
        assert_eq!(parse_error_line("1 inf 0\n"), 1);
        assert_eq!(parse_error_line("x 0 0\n"), 1);
    }

    #[test]
    fn error_message_names_line() {
        let err = parse("1 0 0\n2 1\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error on line 2: expected 3 fields `<id> <x> <y>`, found 2"
        );
    }

    #[test]
    fn string_ids() {
        let points: Vec<Point<f32, String>> = parse_points("cafe 1 2\nbar 3 4\n".as_bytes()).unwrap();
        assert_eq!(points[0].id(), "cafe");
        assert_eq!(points[1].x(), 3.);
    }

    #[test]
    fn read_points_from_file() {
        let path = std::env::temp_dir().join(format!("geo-skyline-io-{}.txt", std::process::id()));
        std::fs::write(&path, "1 0 0\n2 1 5\n").unwrap();
        let points: Vec<Point<f64>> = read_points(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(points.len(), 2);

        let missing = read_points::<f64, u64>(path);
        assert!(matches!(missing, Err(GeoSkylineError::Io(_))));
    }
}
