//! Built-in flight network

use crate::graph::DirectedGraph;

/// Cities of the reference network, in the order they are offered to users
pub const CITIES: [&str; 9] = [
    "Delhi",
    "Mumbai",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Kochi",
    "Ahmedabad",
    "Chandigarh",
];

/// Direct flight costs in thousands of rupees. Costs are asymmetric:
/// Delhi -> Mumbai is 4 but Mumbai -> Delhi is 9.
const FARES: [(&str, [(&str, u32); 8]); 9] = [
    ("Delhi", [("Mumbai", 4), ("Ahmedabad", 8), ("Bangalore", 12), ("Hyderabad", 15), ("Chennai", 3), ("Kolkata", 18), ("Kochi", 7), ("Chandigarh", 10)]),
    ("Mumbai", [("Bangalore", 8), ("Hyderabad", 5), ("Delhi", 9), ("Ahmedabad", 14), ("Chennai", 2), ("Kolkata", 11), ("Kochi", 6), ("Chandigarh", 13)]),
    ("Bangalore", [("Hyderabad", 7), ("Kolkata", 4), ("Delhi", 16), ("Mumbai", 17), ("Chennai", 5), ("Kochi", 19), ("Ahmedabad", 1), ("Chandigarh", 20)]),
    ("Hyderabad", [("Chennai", 9), ("Kochi", 2), ("Delhi", 10), ("Mumbai", 3), ("Bangalore", 6), ("Kolkata", 12), ("Ahmedabad", 18), ("Chandigarh", 14)]),
    ("Chennai", [("Kolkata", 10), ("Delhi", 11), ("Mumbai", 7), ("Bangalore", 13), ("Hyderabad", 8), ("Kochi", 4), ("Ahmedabad", 15), ("Chandigarh", 17)]),
    ("Kolkata", [("Kochi", 2), ("Delhi", 5), ("Mumbai", 9), ("Bangalore", 3), ("Hyderabad", 16), ("Chennai", 6), ("Ahmedabad", 12), ("Chandigarh", 19)]),
    ("Kochi", [("Ahmedabad", 1), ("Delhi", 14), ("Mumbai", 18), ("Bangalore", 10), ("Hyderabad", 4), ("Chennai", 7), ("Kolkata", 13), ("Chandigarh", 20)]),
    ("Ahmedabad", [("Delhi", 8), ("Chandigarh", 7), ("Mumbai", 11), ("Bangalore", 2), ("Hyderabad", 17), ("Chennai", 12), ("Kolkata", 5), ("Kochi", 16)]),
    ("Chandigarh", [("Bangalore", 2), ("Kolkata", 6), ("Delhi", 15), ("Mumbai", 10), ("Hyderabad", 13), ("Chennai", 18), ("Kochi", 3), ("Ahmedabad", 19)]),
];

/// Returns the reference 9-city flight network
pub fn flight_network() -> DirectedGraph<String, u32> {
    let mut graph = DirectedGraph::new();

    for (city, _) in FARES {
        graph.add_node(city.to_string());
    }
    for (from, fares) in FARES {
        for (to, cost) in fares {
            graph.insert_edge(from.to_string(), to.to_string(), cost);
        }
    }

    graph
}
