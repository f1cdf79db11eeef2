use prettytable::{Cell, Row, Table};

use crate::solver::engine::SearchStats;

/// Renders the statistics from one solve as a printable table.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

    table.add_row(Row::new(vec![
        Cell::new("Revise Calls"),
        Cell::new(&stats.revise_calls.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Prunings"),
        Cell::new(&stats.prunings.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Propagation Time (ms)"),
        Cell::new(&format!("{:.2}", stats.propagation_micros as f64 / 1000.0)),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes Visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Aborted"),
        Cell::new(if stats.aborted { "yes" } else { "no" }),
    ]));

    table.to_string()
}
