//! TOML configuration file parsing and loading
//!
//! Loads an optional TOML configuration file and merges it into the parsed
//! arguments. Command-line values always take precedence; the file only
//! fills in what the command line left unset.

use super::args::Args;
use std::path::{Path, PathBuf};

impl Args {
    /// Load the configuration file, if one was specified, and merge it
    ///
    /// A specified file that does not exist or does not parse is an error;
    /// no default config location is probed.
    pub fn apply_config_file(&mut self) -> Result<(), String> {
        let path = match &self.config_file {
            Some(path) => path.clone(),
            None => return Ok(()),
        };

        if !path.exists() {
            return Err(format!(
                "The specified configuration file does not exist: {}",
                path.display()
            ));
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| format!("Error reading configuration file {}: {}", path.display(), e))?;
        let config = contents
            .parse::<toml::Table>()
            .map_err(|e| format!("Error parsing configuration file {}: {}", path.display(), e))?;

        self.apply_toml_values(&config, &path)
    }

    fn apply_toml_values(&mut self, config: &toml::Table, path: &Path) -> Result<(), String> {
        apply_path_field(config, "experiment-dir", &mut self.experiment_dir, path)?;
        apply_string_field(config, "experiment-id", &mut self.experiment_id, path)?;
        apply_string_field(config, "run-id", &mut self.run_id, path)?;
        apply_string_field(config, "log-level", &mut self.log_level, path)?;
        apply_string_field(config, "log-format", &mut self.log_format, path)?;
        apply_path_field(config, "log-file", &mut self.log_file, path)?;

        if !self.color && !self.no_color {
            if let Some(value) = config.get("color") {
                self.color = as_bool(value, "color", path)?;
            }
            if let Some(value) = config.get("no-color") {
                self.no_color = as_bool(value, "no-color", path)?;
            }
            if self.color && self.no_color {
                return Err(format!(
                    "Configuration file {} sets both 'color' and 'no-color'",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}

fn apply_string_field(
    config: &toml::Table,
    key: &str,
    target: &mut Option<String>,
    path: &Path,
) -> Result<(), String> {
    if target.is_some() {
        return Ok(()); // CLI takes precedence
    }
    if let Some(value) = config.get(key) {
        let s = value.as_str().ok_or_else(|| {
            format!(
                "Configuration file {}: '{}' must be a string",
                path.display(),
                key
            )
        })?;
        *target = Some(s.to_string());
    }
    Ok(())
}

fn apply_path_field(
    config: &toml::Table,
    key: &str,
    target: &mut Option<PathBuf>,
    path: &Path,
) -> Result<(), String> {
    if target.is_some() {
        return Ok(()); // CLI takes precedence
    }
    if let Some(value) = config.get(key) {
        let s = value.as_str().ok_or_else(|| {
            format!(
                "Configuration file {}: '{}' must be a string path",
                path.display(),
                key
            )
        })?;
        *target = Some(PathBuf::from(s));
    }
    Ok(())
}

fn as_bool(value: &toml::Value, key: &str, path: &Path) -> Result<bool, String> {
    value.as_bool().ok_or_else(|| {
        format!(
            "Configuration file {}: '{}' must be a boolean",
            path.display(),
            key
        )
    })
}
