/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
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

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed to show `len` items. An empty sequence still has
/// one (empty) page so that "page 1 of 1" can be shown.
pub fn page_count(len: usize, page_size: usize) -> usize {
	len.div_ceil(page_size.max(1)).max(1)
}

/// The items on a zero-based page. Indexes past the last page are clamped
/// to the last page.
pub fn page_slice<T>(items: &[T], page_size: usize, page_index: usize) -> &[T] {
	let page_size = page_size.max(1);
	let index = page_index.min(page_count(items.len(), page_size) - 1);

	let start = (index * page_size).min(items.len());
	let end = (start + page_size).min(items.len());
	&items[start..end]
}

/// Tracks which page of a sequence is showing. Moving past either end does
/// nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
	page_size: usize,
	current: usize,
	total_pages: usize,
}

impl Paginator {
	/// A page size of zero is treated as one.
	pub fn new(len: usize, page_size: usize) -> Self {
		let page_size = page_size.max(1);
		Self {
			page_size,
			current: 0,
			total_pages: page_count(len, page_size),
		}
	}

	/// Recounts pages for a sequence that changed length, keeping the current
	/// page if it still exists.
	pub fn resize(&mut self, len: usize) {
		self.total_pages = page_count(len, self.page_size);
		self.current = self.current.min(self.total_pages - 1);
	}

	pub fn next(&mut self) {
		if self.current + 1 < self.total_pages {
			self.current += 1;
		}
	}

	pub fn previous(&mut self) {
		self.current = self.current.saturating_sub(1);
	}

	pub fn go_to(&mut self, page_index: usize) {
		self.current = page_index.min(self.total_pages - 1);
	}

	pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
		page_slice(items, self.page_size, self.current)
	}

	/// Zero-based index of the current page.
	pub fn current(&self) -> usize {
		self.current
	}

	pub fn total_pages(&self) -> usize {
		self.total_pages
	}

	pub fn page_size(&self) -> usize {
		self.page_size
	}
}
