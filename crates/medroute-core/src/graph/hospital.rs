//! Built-in hospital layout
//!
//! Nine services arranged in wings around a central pharmacy:
//! - Emergency wing: Emergency, Pediatrics
//! - Surgical wing: Surgery, ICU
//! - Diagnostic wing: Laboratory, Radiology
//! - Outpatient: Cardiology, Consultations

use crate::graph::heuristic::{HeuristicSet, HeuristicTable};
use crate::graph::weighted::WeightedGraph;

/// Where deliveries start and end
pub const DEPOT: &str = "Pharmacy";

type ServiceRow = (&'static str, &'static str, &'static [(&'static str, u32)]);

/// (service, description, outgoing edges in neighbor order)
const LAYOUT: &[ServiceRow] = &[
    (
        "Pharmacy",
        "Central medication distribution point",
        &[("Emergency", 3), ("Surgery", 5), ("Consultations", 4)],
    ),
    (
        "Emergency",
        "Emergency room - high priority",
        &[("Pharmacy", 3), ("Pediatrics", 2), ("Cardiology", 4)],
    ),
    (
        "Pediatrics",
        "Children care unit",
        &[("Emergency", 2), ("Surgery", 3), ("Consultations", 5)],
    ),
    (
        "Surgery",
        "Operating rooms",
        &[("Pharmacy", 5), ("Pediatrics", 3), ("ICU", 1), ("Radiology", 4)],
    ),
    (
        "ICU",
        "Intensive Care Unit - critical patients",
        &[("Surgery", 1), ("Laboratory", 2), ("Radiology", 3)],
    ),
    (
        "Laboratory",
        "Medical tests and analysis",
        &[("ICU", 2), ("Radiology", 2), ("Consultations", 6)],
    ),
    (
        "Radiology",
        "X-ray and imaging",
        &[("Surgery", 4), ("ICU", 3), ("Laboratory", 2)],
    ),
    (
        "Cardiology",
        "Heart disease treatment",
        &[("Emergency", 4), ("Consultations", 2)],
    ),
    (
        "Consultations",
        "Outpatient consultations",
        &[
            ("Pharmacy", 4),
            ("Pediatrics", 5),
            ("Cardiology", 2),
            ("Laboratory", 6),
        ],
    ),
];

/// Estimate columns, in table order. Consultations has no column and no
/// goal row: its estimates are 0 and A* toward it runs as uniform-cost.
const ESTIMATED: [&str; 8] = [
    "Pharmacy",
    "Emergency",
    "Surgery",
    "Pediatrics",
    "Cardiology",
    "ICU",
    "Radiology",
    "Laboratory",
];

/// Per-goal estimates, one row per goal, columns in `ESTIMATED` order.
/// These are hand-tuned straight-line guesses, not guaranteed admissible.
const ESTIMATES: [(&str, [u32; 8]); 8] = [
    ("Pharmacy", [0, 4, 3, 6, 8, 5, 7, 8]),
    ("Emergency", [4, 0, 6, 2, 5, 8, 10, 10]),
    ("Surgery", [3, 6, 0, 8, 10, 2, 4, 4]),
    ("Pediatrics", [6, 2, 8, 0, 5, 10, 12, 12]),
    ("Cardiology", [8, 5, 10, 5, 0, 12, 14, 14]),
    ("ICU", [5, 8, 2, 10, 12, 0, 6, 3]),
    ("Radiology", [7, 10, 4, 12, 14, 6, 0, 3]),
    ("Laboratory", [8, 10, 4, 12, 14, 3, 3, 0]),
];

impl WeightedGraph {
    /// The fixed nine-service hospital layout
    pub fn hospital() -> Self {
        let mut graph = WeightedGraph::new();
        for (service, description, _) in LAYOUT {
            graph.add_location(*service);
            graph.set_description(*service, *description);
        }
        for (service, _, edges) in LAYOUT {
            for (neighbor, distance) in edges.iter() {
                graph.add_edge(*service, *neighbor, *distance);
            }
        }
        graph
    }
}

impl HeuristicSet {
    /// Estimate tables for every hospital service except Consultations
    pub fn hospital() -> Self {
        let mut set = HeuristicSet::new();
        for (goal, row) in ESTIMATES {
            let table: HeuristicTable = ESTIMATED.iter().copied().zip(row).collect();
            set.insert(goal, table);
        }
        set
    }
}
