use std::process::ExitCode;

use colonize::domain::presets::{PRESET_NAMES, preset_by_name};
use colonize::services::params_yaml::serialize_params_to_yaml;

pub fn presets_command() -> ExitCode {
    match format_presets() {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize presets: {e}");
            ExitCode::FAILURE
        }
    }
}

fn format_presets() -> Result<String, serde_yaml::Error> {
    let mut text = String::new();
    for name in PRESET_NAMES {
        if let Some(params) = preset_by_name(name) {
            text.push_str(&format!("# {name}\n"));
            text.push_str(&serialize_params_to_yaml(&params)?);
            text.push('\n');
        }
    }
    Ok(text)
}
