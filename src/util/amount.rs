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
//! Reporting-currency arithmetic that never panics. A product or sum too
//! large for `Decimal` is pinned at `Decimal::MAX` (or `MIN`) and logged.

use log::warn;
use rust_decimal::Decimal;

/// Multiplies two amounts, saturating on overflow.
pub fn product(lhs: Decimal, rhs: Decimal) -> Decimal {
	match lhs.checked_mul(rhs) {
		Some(value) => value,
		None => {
			warn!("{} x {} overflows; saturating", lhs, rhs);
			lhs.saturating_mul(rhs)
		},
	}
}

/// Adds two amounts, saturating on overflow.
pub fn add(lhs: Decimal, rhs: Decimal) -> Decimal {
	match lhs.checked_add(rhs) {
		Some(value) => value,
		None => {
			warn!("{} + {} overflows; saturating", lhs, rhs);
			lhs.saturating_add(rhs)
		},
	}
}

/// Sums amounts left to right, saturating on overflow.
pub fn sum<I>(values: I) -> Decimal
where
	I: IntoIterator<Item = Decimal>,
{
	values.into_iter().fold(Decimal::ZERO, add)
}
