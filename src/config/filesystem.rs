/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::config::config_file::Config;
use anyhow::{anyhow, bail, Error};
use dirs::home_dir;
use log::debug;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = ".config/aurum/config.toml";

/// Location of the config file when the user does not name one.
pub fn default_config_path() -> Result<PathBuf, Error> {
	match home_dir() {
		Some(home) => Ok(home.join(DEFAULT_CONFIG_PATH)),
		None => bail!("Unable to determine home directory"),
	}
}

/// Fetches the config from the given path, or the default path if none.
/// A missing file at the default path is created empty; a missing custom
/// path is an error.
pub fn get_config(custom_config_path: Option<&Path>) -> Result<Config, Error> {
	let config_path = match custom_config_path {
		None => default_config_path()?,
		Some(p) => p.to_path_buf(),
	};

	// create empty config file if it doesn't exist
	if !config_path.exists() && custom_config_path.is_none() {
		if let Some(parent) = config_path.parent() {
			fs::create_dir_all(parent)?;
		}
		File::create(&config_path)?;
	}

	debug!("Reading config from {}", config_path.display());
	let content = fs::read_to_string(&config_path).map_err(|e| {
		anyhow!("failed to read {}: {}", config_path.display(), e)
	})?;

	parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config, Error> {
	let config: Config = toml::from_str(content)
		.map_err(|e| anyhow!("failed to parse config: {}", e))?;

	if let Some(pagination) = &config.pagination {
		if pagination.page_size == Some(0) {
			bail!("pagination.page_size must be at least 1");
		}
	}

	Ok(config)
}
