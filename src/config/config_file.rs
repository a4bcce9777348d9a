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
use crate::query::group::SortDirection;
use crate::query::page::{Paginator, DEFAULT_PAGE_SIZE};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub pagination: Option<Pagination>,
	pub grouping: Option<Grouping>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
	/// Rows per page in every paged view
	pub page_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Grouping {
	/// Order of date groups when no direction is asked for
	pub date_direction: Option<SortDirection>,
}

impl Config {
	pub fn page_size(&self) -> usize {
		self.pagination
			.as_ref()
			.and_then(|p| p.page_size)
			.unwrap_or(DEFAULT_PAGE_SIZE)
	}

	pub fn date_direction(&self) -> SortDirection {
		self.grouping
			.as_ref()
			.and_then(|g| g.date_direction)
			.unwrap_or_default()
	}

	/// A paginator over `len` items using the configured page size.
	pub fn paginator(&self, len: usize) -> Paginator {
		Paginator::new(len, self.page_size())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = Config::default();
		assert_eq!(config.page_size(), 10);
		assert_eq!(config.date_direction(), SortDirection::Descending);
	}

	#[test]
	fn test_parse_sections() {
		let config: Config = toml::from_str(
			"[pagination]\npage_size = 25\n\n[grouping]\ndate_direction = \"ascending\"\n",
		)
		.unwrap();
		assert_eq!(config.page_size(), 25);
		assert_eq!(config.date_direction(), SortDirection::Ascending);
		assert_eq!(config.paginator(60).total_pages(), 3);
	}

	#[test]
	fn test_empty_sections_fall_back() {
		let config: Config = toml::from_str("[pagination]\n").unwrap();
		assert_eq!(config.page_size(), 10);
	}
}
