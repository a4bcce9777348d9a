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
use crate::ledger::asset::CurrencyCode;
use crate::util::amount;
use crate::util::date::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A conversion rate from one foreign currency into the reporting currency,
/// valid from a given date. A value object not intended to have much
/// functionality; whoever attaches it to a transaction has already decided
/// it is the right rate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
	pub id: String,
	pub currency: CurrencyCode,

	/// Reporting currency units per one unit of `currency`
	pub rate: Decimal,

	pub effective_date: Date,
}

impl ExchangeRate {
	pub fn new(
		id: &str,
		currency: CurrencyCode,
		rate: Decimal,
		effective_date: Date,
	) -> Self {
		Self {
			id: id.to_string(),
			currency,
			rate,
			effective_date,
		}
	}

	/// The trivial rate of the reporting currency against itself.
	pub fn identity(effective_date: Date) -> Self {
		Self {
			id: CurrencyCode::REPORTING.symbol().to_string(),
			currency: CurrencyCode::REPORTING,
			rate: Decimal::ONE,
			effective_date,
		}
	}

	/// Converts a quantity of this rate's currency into reporting currency.
	pub fn convert(&self, quantity: Decimal) -> Decimal {
		amount::product(quantity, self.rate)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rust_decimal_macros::dec;

	#[test]
	fn test_convert() {
		let rate = ExchangeRate::new(
			"USD-2024-01",
			CurrencyCode::Usd,
			dec!(25137),
			Date::new(2024, 1, 1),
		);
		assert_eq!(rate.convert(dec!(50)), dec!(1256850));
		assert_eq!(rate.convert(dec!(0)), dec!(0));
	}

	#[test]
	fn test_identity() {
		let rate = ExchangeRate::identity(Date::new(2024, 5, 1));
		assert_eq!(rate.currency, CurrencyCode::Vnd);
		assert_eq!(rate.convert(dec!(123.45)), dec!(123.45));
	}
}
