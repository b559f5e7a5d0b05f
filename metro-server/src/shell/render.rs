//! Plain-text rendering of query results.

use std::io::{self, Write};

use crate::domain::NetworkError;
use crate::planner::{Intersection, NearestIntersection, Route, StationDetails, Terminals};

/// Write every route between two stations, one per line.
///
/// The header is written even when there are no routes.
pub fn write_routes(
    out: &mut impl Write,
    from: &str,
    to: &str,
    routes: Result<Vec<Route>, NetworkError>,
) -> io::Result<()> {
    let routes = match routes {
        Ok(routes) => routes,
        Err(e) => return writeln!(out, "{e}"),
    };

    writeln!(out, "Following are all different paths from {from} to {to}:")?;
    for route in &routes {
        writeln!(
            out,
            "{} | Total Fare: {}",
            route.stations.join(" -> "),
            route.total_fare
        )?;
    }
    Ok(())
}

/// Write a station's lines and connections.
pub fn write_details(
    out: &mut impl Write,
    details: Result<StationDetails, NetworkError>,
) -> io::Result<()> {
    let details = match details {
        Ok(details) => details,
        Err(e) => return writeln!(out, "{e}"),
    };

    writeln!(out, "Station Name: {}", details.name)?;

    if details.lines.is_empty() {
        writeln!(out, "Lines: None")?;
    } else {
        writeln!(out, "Lines: {}", details.lines.join(" "))?;
    }

    let connections: Vec<String> = details
        .connections
        .iter()
        .map(|c| format!("{} (Fare: {})", c.station, c.fare))
        .collect();
    writeln!(out, "Connections: {}", connections.join(" "))
}

pub fn write_intersections(out: &mut impl Write, intersections: &[Intersection]) -> io::Result<()> {
    writeln!(out, "Intersecting stations in the metro network:")?;
    for i in intersections {
        writeln!(out, "{} (Lines: {})", i.station, i.line_count)?;
    }
    Ok(())
}

pub fn write_terminals(out: &mut impl Write, terminals: &[Terminals]) -> io::Result<()> {
    writeln!(out, "Terminal stations for each line:")?;
    for t in terminals {
        writeln!(out, "Line {}: {} (Start), {} (End)", t.line, t.first, t.last)?;
    }
    Ok(())
}

pub fn write_nearest(
    out: &mut impl Write,
    from: &str,
    nearest: Result<NearestIntersection, NetworkError>,
) -> io::Result<()> {
    match nearest {
        Ok(n) => writeln!(
            out,
            "Nearest intersection station to {from} is {}, at distance {}.",
            n.station, n.distance
        ),
        Err(e) => writeln!(out, "{e}."),
    }
}
