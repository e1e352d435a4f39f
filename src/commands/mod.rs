pub mod base_commands;
pub mod compare_cmd;
pub mod completions_cmd;
pub mod interrupt;
pub mod presets_cmd;
pub mod report_format;
pub mod simulate_cmd;
