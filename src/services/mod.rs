pub mod answers_yaml;
pub mod cost_aggregator;
pub mod cost_plot;
pub mod estimate_output;
pub mod estimate_summary;
pub mod estimator_config;
pub mod gantt_diagram;
pub mod timeline_allocator;
pub mod timeline_plot;
