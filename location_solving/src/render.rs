use std::collections::HashSet;

use crate::cover_solution::CoverSolution;
use covering::CoverageInstance;
use petgraph::dot::Dot;
use petgraph::graph::{NodeIndex, UnGraph};

/// Render the assignment as a DOT graph: one node per district, one edge
/// from every non-center district to its assigned center weighted by the
/// travel time, centers drawn filled. Layout and the rest of the visual
/// parameters are left to whatever consumes the DOT text.
pub fn to_dot(instance: &CoverageInstance, solution: &CoverSolution) -> String {
    let mut graph = UnGraph::<String, f64>::new_undirected();
    let nodes: Vec<NodeIndex> = (0..instance.num_points())
        .map(|point| graph.add_node(instance.label(point).to_string()))
        .collect();
    for (point, &center) in solution.assignment().iter().enumerate() {
        if point != center {
            graph.add_edge(nodes[point], nodes[center], instance.distance(point, center));
        }
    }

    let centers: HashSet<NodeIndex> = solution
        .centers()
        .iter()
        .map(|&center| nodes[center])
        .collect();
    format!(
        "{}",
        Dot::with_attr_getters(
            &graph,
            &[],
            &|_, _| String::new(),
            &|_, (node, _)| {
                if centers.contains(&node) {
                    String::from("style = \"filled\", fillcolor = \"red\"")
                } else {
                    String::new()
                }
            },
        )
    )
}

#[cfg(test)]
mod tests {
    use super::to_dot;
    use crate::cover_solution::CoverSolution;
    use crate::districts;

    #[test]
    fn dot_output_lists_every_district_and_assignment_edge() {
        let instance = districts::emergency_response_instance();
        let solution = CoverSolution::new(&instance, vec![0, 5]);
        let dot = to_dot(&instance, &solution);

        for point in 0..instance.num_points() {
            assert!(dot.contains(&format!("\"{}\"", instance.label(point))));
        }
        // Six non-center districts, one edge each.
        assert_eq!(dot.matches(" -- ").count(), 6);
        // Both centers are highlighted, nothing else is.
        assert_eq!(dot.matches("fillcolor = \"red\"").count(), 2);
        // District 2 drives ten minutes to its center.
        assert!(dot.contains("label = \"10\""));
    }
}
