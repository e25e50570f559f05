pub mod calculation;
pub mod category_rule;
pub mod metric_field;
pub mod report_definition;
