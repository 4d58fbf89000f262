//! Assignment of files to sorting rules.

use crate::domain::config::SortingRuleConfig;

/// A file assigned to the rule that will move it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub file_name: String,
    pub rule_index: usize,
    pub sub_folder_name: String,
}

/// Assign each file to the first rule, in declared order, whose keywords match it.
///
/// Result is grouped by rule in declared order; within a rule files keep the
/// order they were given in. Files matching no rule are absent.
pub fn plan_moves(file_names: &[String], rules: &[SortingRuleConfig]) -> Vec<PlannedMove> {
    let mut assigned: Vec<PlannedMove> = file_names
        .iter()
        .filter_map(|file_name| {
            rules.iter().position(|rule| rule.matches(file_name)).map(|rule_index| PlannedMove {
                file_name: file_name.clone(),
                rule_index,
                sub_folder_name: rules[rule_index].sub_folder_name.clone(),
            })
        })
        .collect();
    assigned.sort_by_key(|planned| planned.rule_index);
    assigned
}
