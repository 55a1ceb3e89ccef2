//! Human-readable rendering of analysis results.

use colored::{ColoredString, Colorize};
use gprop_graph::{GraphProperties, Warning};

fn flag(value: bool) -> ColoredString {
    if value {
        "yes".green()
    } else {
        "no".red()
    }
}

/// Report lines in display order.
pub fn property_lines(props: &GraphProperties) -> Vec<String> {
    vec![
        format!("Node count: {}", props.node_count),
        format!("Edge count: {}", props.edge_count),
        format!("Max degree: {}", props.max_degree),
        format!("Isolated node: {}", flag(props.has_isolated_node)),
        format!("Connected: {}", flag(props.is_connected)),
        format!("Complete: {}", flag(props.is_complete)),
        format!("Tree: {}", flag(props.is_tree)),
        format!("Forest: {}", flag(props.is_forest)),
        format!("Cycle count: {}", props.cycle_count),
        format!("Components: {}", props.component_count),
    ]
}

pub fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lines() {
        colored::control::set_override(false);

        let props = GraphProperties {
            node_count: 3,
            edge_count: 2,
            max_degree: 2,
            has_isolated_node: false,
            is_connected: true,
            is_complete: false,
            is_tree: true,
            is_forest: false,
            cycle_count: 0,
            component_count: 1,
        };
        let lines = property_lines(&props);

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Node count: 3");
        assert_eq!(lines[3], "Isolated node: no");
        assert_eq!(lines[6], "Tree: yes");
        assert_eq!(lines[8], "Cycle count: 0");
    }
}
