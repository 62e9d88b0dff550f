use prettytable::{Cell, Row, Table};

use crate::solver::engine::SearchStats;

/// Renders the post-solve counters as a small text table, along with the
/// length of the path found (if any). Intended for the demo drivers and
/// for eyeballing how much of the state space a puzzle touched.
pub fn render_stats_table(stats: &SearchStats, path_len: Option<usize>) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

    table.add_row(Row::new(vec![
        Cell::new("Total configurations"),
        Cell::new(&stats.total_configs.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Unique configurations"),
        Cell::new(&stats.unique_configs.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Path length"),
        Cell::new(&match path_len {
            Some(len) => len.to_string(),
            None => "no solution".to_string(),
        }),
    ]));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_surfaces_both_counters_verbatim() {
        let stats = SearchStats {
            total_configs: 184,
            unique_configs: 57,
        };
        let rendered = render_stats_table(&stats, Some(9));
        assert!(rendered.contains("184"));
        assert!(rendered.contains("57"));
        assert!(rendered.contains("9"));
    }

    #[test]
    fn unsolvable_outcome_is_labelled() {
        let stats = SearchStats {
            total_configs: 3,
            unique_configs: 2,
        };
        let rendered = render_stats_table(&stats, None);
        assert!(rendered.contains("no solution"));
    }
}
