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
use crate::util::date::Date;
use log::debug;
use serde::Serialize;

/// A run of consecutive days, both ends included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DateSpan {
	pub start: Date,
	pub end: Date,
}

impl DateSpan {
	pub fn new(start: Date, end: Date) -> Self {
		Self { start, end }
	}

	pub fn single(day: Date) -> Self {
		Self {
			start: day,
			end: day,
		}
	}

	pub fn contains(&self, date: &Date) -> bool {
		&self.start <= date && date <= &self.end
	}

	/// Every day in the span, in order. Empty if either end is not a real
	/// date.
	pub fn days(&self) -> Vec<Date> {
		let mut days = vec![];
		if !self.start.is_valid() || !self.end.is_valid() {
			return days;
		}

		let mut day = Some(self.start);
		while let Some(d) = day {
			if d > self.end {
				break;
			}
			days.push(d);
			day = d.offset_days(1);
		}
		days
	}
}

/// The Monday-to-Sunday week around a date, or None for a date that does
/// not exist.
pub fn week_of(date: &Date) -> Option<DateSpan> {
	let since_monday = date.weekday()?.num_days_from_monday() as i64;
	let monday = date.offset_days(-since_monday)?;
	let sunday = monday.offset_days(6)?;
	Some(DateSpan::new(monday, sunday))
}

/// Splits a month into Monday-start weeks. The first and last weeks are cut
/// short at the month boundary, so no span ever reaches into the next or
/// previous month. An invalid month yields no weeks.
pub fn weeks_of_month(year: i32, month: u32) -> Vec<DateSpan> {
	let first = Date::first_of_month(year, month);
	let last = Date::last_of_month(year, month);

	let mut weeks = vec![];
	let mut week = match week_of(&first) {
		Some(w) => w,
		None => return weeks,
	};

	loop {
		let start = week.start.max(first);
		let end = week.end.min(last);
		weeks.push(DateSpan::new(start, end));

		if end >= last {
			break;
		}

		week = match (week.start.offset_days(7), week.end.offset_days(7)) {
			(Some(s), Some(e)) => DateSpan::new(s, e),
			_ => break,
		};
	}

	debug!("{}-{:02} has {} weeks", year, month, weeks.len());
	weeks
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_april_2024() {
		// April 1st 2024 is a Monday
		let weeks = weeks_of_month(2024, 4);
		assert_eq!(weeks, vec![
			DateSpan::new(Date::new(2024, 4, 1), Date::new(2024, 4, 7)),
			DateSpan::new(Date::new(2024, 4, 8), Date::new(2024, 4, 14)),
			DateSpan::new(Date::new(2024, 4, 15), Date::new(2024, 4, 21)),
			DateSpan::new(Date::new(2024, 4, 22), Date::new(2024, 4, 28)),
			DateSpan::new(Date::new(2024, 4, 29), Date::new(2024, 4, 30)),
		]);
	}

	#[test]
	fn test_first_week_clipped() {
		// March 1st 2024 is a Friday
		let weeks = weeks_of_month(2024, 3);
		assert_eq!(
			weeks.first(),
			Some(&DateSpan::new(Date::new(2024, 3, 1), Date::new(2024, 3, 3)))
		);
		assert_eq!(
			weeks.last(),
			Some(&DateSpan::new(Date::new(2024, 3, 25), Date::new(2024, 3, 31)))
		);
		assert_eq!(weeks.len(), 5);
	}

	#[test]
	fn test_six_week_month() {
		// September 2024 starts on a Sunday and ends on a Monday
		let weeks = weeks_of_month(2024, 9);
		assert_eq!(weeks.len(), 6);
		assert_eq!(weeks[0], DateSpan::single(Date::new(2024, 9, 1)));
		assert_eq!(weeks[5], DateSpan::single(Date::new(2024, 9, 30)));
	}

	#[test]
	fn test_weeks_cover_month_exactly() {
		for month in 1..=12 {
			let weeks = weeks_of_month(2023, month);
			let days: Vec<Date> = weeks.iter().flat_map(|w| w.days()).collect();
			assert_eq!(days.len() as u32, Date::days_in_month(2023, month));
			assert_eq!(days.first(), Some(&Date::first_of_month(2023, month)));
			assert_eq!(days.last(), Some(&Date::last_of_month(2023, month)));
		}
	}

	#[test]
	fn test_invalid_month() {
		assert!(weeks_of_month(2024, 13).is_empty());
		assert!(weeks_of_month(2024, 0).is_empty());
	}

	#[test]
	fn test_week_of() {
		let week = week_of(&Date::new(2024, 4, 3)).unwrap();
		assert_eq!(week.start, Date::new(2024, 4, 1));
		assert_eq!(week.end, Date::new(2024, 4, 7));
		assert_eq!(week.days().len(), 7);

		// spans the year boundary
		let week = week_of(&Date::new(2025, 1, 1)).unwrap();
		assert_eq!(week.start, Date::new(2024, 12, 30));
		assert!(week_of(&Date::new(2024, 2, 30)).is_none());
	}
}
