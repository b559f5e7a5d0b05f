//! Whole-network reports: intersections and line terminals.

use tracing::debug;

use crate::network::MetroGraph;

/// A station served by more than one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection {
    /// Station name
    pub station: String,
    /// Number of distinct lines calling here (always at least 2)
    pub line_count: usize,
}

/// The end stations of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminals {
    /// Line name
    pub line: String,
    /// First stop
    pub first: String,
    /// Last stop
    pub last: String,
}

impl MetroGraph {
    /// Stations where two or more lines meet, in registry order.
    pub fn find_intersections(&self) -> Vec<Intersection> {
        let intersections: Vec<Intersection> = self
            .stations
            .iter()
            .filter_map(|(id, name)| {
                let line_count = self.lines.membership_count(id);
                (line_count > 1).then(|| Intersection {
                    station: name.to_string(),
                    line_count,
                })
            })
            .collect();

        debug!(count = intersections.len(), "Intersections found");

        intersections
    }

    /// First and last stop of every line, in line order.
    ///
    /// Lines without stations are skipped.
    pub fn find_terminals(&self) -> Vec<Terminals> {
        self.lines
            .iter()
            .filter_map(|line| {
                let (first, last) = line.terminals()?;
                Some(Terminals {
                    line: line.name().to_string(),
                    first: self.station_name(first).to_string(),
                    last: self.station_name(last).to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkBuilder;
    use crate::planner::fixtures::triangle;

    fn terminals(line: &str, first: &str, last: &str) -> Terminals {
        Terminals {
            line: line.into(),
            first: first.into(),
            last: last.into(),
        }
    }

    #[test]
    fn triangle_intersections() {
        assert_eq!(
            triangle().find_intersections(),
            vec![Intersection {
                station: "C".into(),
                line_count: 2
            }]
        );
    }

    #[test]
    fn intersections_in_registry_order() {
        let graph = NetworkBuilder::new()
            .connect("X", "Y", 1)
            .line("Red", ["Y", "X", "Z"])
            .line("Blue", ["Z", "Y"])
            .line("Green", ["Y", "X"])
            .build();

        let found: Vec<_> = graph
            .find_intersections()
            .into_iter()
            .map(|i| (i.station, i.line_count))
            .collect();
        assert_eq!(
            found,
            vec![("X".into(), 2), ("Y".into(), 3), ("Z".into(), 2)]
        );
    }

    #[test]
    fn no_lines_no_intersections() {
        let graph = NetworkBuilder::new().connect("A", "B", 1).build();
        assert!(graph.find_intersections().is_empty());
    }

    #[test]
    fn triangle_terminals() {
        assert_eq!(
            triangle().find_terminals(),
            vec![terminals("L1", "A", "C"), terminals("L2", "C", "C")]
        );
    }

    #[test]
    fn empty_lines_are_skipped() {
        let graph = NetworkBuilder::new()
            .line("Ghost", Vec::<&str>::new())
            .line("Red", ["A", "B", "C"])
            .build();

        assert_eq!(graph.find_terminals(), vec![terminals("Red", "A", "C")]);
    }
}
