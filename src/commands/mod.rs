pub mod base_commands;
pub mod compare_cmd;
pub mod estimate_cmd;
pub mod plot_costs_cmd;
pub mod plot_timeline_cmd;
pub mod report_format;
