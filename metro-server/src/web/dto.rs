//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Fare, TotalFare};
use crate::planner::{Connection, Intersection, NearestIntersection, Route, StationDetails, Terminals};

/// Request for every route between two stations.
#[derive(Debug, Deserialize)]
pub struct RoutesRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,
}

/// All stations in the network.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<String>,
}

/// A route in the routes response.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Station names in travel order
    pub stations: Vec<String>,

    /// Sum of edge fares
    pub total_fare: TotalFare,
}

impl From<Route> for RouteResult {
    fn from(route: Route) -> Self {
        Self {
            stations: route.stations,
            total_fare: route.total_fare,
        }
    }
}

/// Response listing every simple route.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteResult>,
}

/// A direct connection in the station details response.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    pub station: String,
    pub fare: Fare,
}

impl From<Connection> for ConnectionResult {
    fn from(connection: Connection) -> Self {
        Self {
            station: connection.station,
            fare: connection.fare,
        }
    }
}

/// Lines and connections of one station.
#[derive(Debug, Serialize)]
pub struct StationDetailsResponse {
    pub name: String,

    /// Lines calling at the station (empty if none)
    pub lines: Vec<String>,

    pub connections: Vec<ConnectionResult>,
}

impl From<StationDetails> for StationDetailsResponse {
    fn from(details: StationDetails) -> Self {
        Self {
            name: details.name,
            lines: details.lines,
            connections: details.connections.into_iter().map(Into::into).collect(),
        }
    }
}

/// An intersection station with its line count.
#[derive(Debug, Serialize)]
pub struct IntersectionResult {
    pub station: String,
    pub lines: usize,
}

impl From<Intersection> for IntersectionResult {
    fn from(intersection: Intersection) -> Self {
        Self {
            station: intersection.station,
            lines: intersection.line_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IntersectionsResponse {
    pub intersections: Vec<IntersectionResult>,
}

/// First and last stop of one line.
#[derive(Debug, Serialize)]
pub struct TerminalResult {
    pub line: String,
    pub first: String,
    pub last: String,
}

impl From<Terminals> for TerminalResult {
    fn from(terminals: Terminals) -> Self {
        Self {
            line: terminals.line,
            first: terminals.first,
            last: terminals.last,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TerminalsResponse {
    pub terminals: Vec<TerminalResult>,
}

/// The closest intersection and its hop distance.
#[derive(Debug, Serialize)]
pub struct NearestIntersectionResponse {
    pub station: String,
    pub distance: usize,
}

impl From<NearestIntersection> for NearestIntersectionResponse {
    fn from(nearest: NearestIntersection) -> Self {
        Self {
            station: nearest.station,
            distance: nearest.distance,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
