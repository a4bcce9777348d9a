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

use anyhow::{bail, Error};
use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A plain calendar date with no timezone attached.
///
/// Construction through `new` accepts any integers at all; it is the job of
/// whoever feeds the ledger to reject nonsense like the 31st of February.
/// Comparisons always treat the three fields as one calendar key.
#[derive(
	Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Date {
	year: i32,
	month: u32,
	day: u32,
}

impl Date {
	pub fn new(year: i32, month: u32, day: u32) -> Self {
		Self { year, month, day }
	}

	/// Constructor to parse a string in the "YYYY-mm-dd" format
	pub fn from_str(date_str: &str) -> Result<Date, Error> {
		let parts: Vec<&str> = date_str.trim().split('-').collect();
		if parts.len() != 3 {
			bail!("Date format must be YYYY-MM-DD");
		}

		let year = parts[0].parse::<i32>()?;
		let month = parts[1].parse::<u32>()?;
		let day = parts[2].parse::<u32>()?;

		if NaiveDate::from_ymd_opt(year, month, day).is_none() {
			bail!("Invalid date: {}", date_str);
		}

		Ok(Date { year, month, day })
	}

	/// The current date according to the local clock.
	pub fn today() -> Self {
		Self::from(Local::now().date_naive())
	}

	pub fn year(&self) -> i32 {
		self.year
	}

	pub fn month(&self) -> u32 {
		self.month
	}

	pub fn day(&self) -> u32 {
		self.day
	}

	/// True if this date falls in the given month of the given year.
	pub fn same_month(&self, month: u32, year: i32) -> bool {
		self.month == month && self.year == year
	}

	/// Returns (month, year) of the month before this one, rolling back into
	/// December of the previous year from January.
	pub fn previous_month(&self) -> (u32, i32) {
		if self.month <= 1 {
			(12, self.year - 1)
		} else {
			(self.month - 1, self.year)
		}
	}

	pub fn first_of_month(year: i32, month: u32) -> Self {
		Self {
			year,
			month,
			day: 1,
		}
	}

	pub fn last_of_month(year: i32, month: u32) -> Self {
		Self {
			year,
			month,
			day: Date::days_in_month(year, month),
		}
	}

	/// The day of the week, if this is a real calendar date.
	pub fn weekday(&self) -> Option<Weekday> {
		self.to_naive().map(|d| d.weekday())
	}

	/// Moves this date forward (or backward, for negative offsets) by the
	/// given number of days. Returns None for dates that do not exist.
	pub fn offset_days(&self, days: i64) -> Option<Date> {
		let naive = self.to_naive()?;
		let shifted = if days >= 0 {
			naive.checked_add_days(Days::new(days.unsigned_abs()))
		} else {
			naive.checked_sub_days(Days::new(days.unsigned_abs()))
		};
		shifted.map(Date::from)
	}

	pub fn to_naive(&self) -> Option<NaiveDate> {
		NaiveDate::from_ymd_opt(self.year, self.month, self.day)
	}

	pub fn is_valid(&self) -> bool {
		self.to_naive().is_some()
	}

	/// Number of days in the month, or 0 for a month that does not exist.
	pub fn days_in_month(year: i32, month: u32) -> u32 {
		let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
			return 0;
		};
		first
			.checked_add_months(Months::new(1))
			.and_then(|next| u32::try_from((next - first).num_days()).ok())
			.unwrap_or(0)
	}
}

impl From<NaiveDate> for Date {
	fn from(value: NaiveDate) -> Self {
		Self {
			year: value.year(),
			month: value.month(),
			day: value.day(),
		}
	}
}

impl PartialOrd for Date {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Date {
	fn cmp(&self, other: &Self) -> Ordering {
		(self.year, self.month, self.day).cmp(&(
			other.year,
			other.month,
			other.day,
		))
	}
}

impl fmt::Display for Date {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}
