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
use crate::error::CoreError;
use crate::ledger::asset::{Category, CurrencyCode, GoldSubtype};
use crate::ledger::exchange_rate::ExchangeRate;
use crate::util::amount;
use crate::util::date::Date;
use log::warn;
use rust_decimal::Decimal;
use serde::Serialize;

/// One purchase of gold or foreign currency, valued in the reporting
/// currency.
///
/// The total amount is worked out once, when the transaction is built, and
/// there is no way to change it afterward. Editing a quantity, price or rate
/// means building a new transaction with `with_holding`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transaction {
	code: String,
	date: Date,
	total_amount: Decimal,

	/// Soft delete marker; has no effect on the total
	deleted: bool,

	holding: Holding,
}

/// What was actually bought. Fields specific to each asset class live here;
/// everything common lives on the Transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "UPPERCASE")]
pub enum Holding {
	Gold {
		/// Reporting currency per unit
		unit_price: Decimal,
		quantity: Decimal,
		subtype: GoldSubtype,
	},
	Currency {
		/// Amount in the holding's own currency
		quantity: Decimal,
		currency: CurrencyCode,
		rate: ExchangeRate,
	},
}

impl Holding {
	pub fn category(&self) -> Category {
		match self {
			Holding::Gold { .. } => Category::Gold,
			Holding::Currency { .. } => Category::Currency,
		}
	}

	pub fn quantity(&self) -> Decimal {
		match self {
			Holding::Gold { quantity, .. } => *quantity,
			Holding::Currency { quantity, .. } => *quantity,
		}
	}

	/// Value of the holding in reporting currency. Currencies the ledger
	/// does not recognize are worth zero.
	fn total(&self) -> Decimal {
		match self {
			Holding::Gold {
				unit_price,
				quantity,
				..
			} => amount::product(*unit_price, *quantity),
			Holding::Currency {
				quantity,
				currency,
				rate,
			} => match currency {
				CurrencyCode::Vnd => *quantity,
				CurrencyCode::Usd | CurrencyCode::Eur => rate.convert(*quantity),
				CurrencyCode::Other(symbol) => {
					warn!("Unrecognized currency {}; valuing at zero", symbol);
					Decimal::ZERO
				},
			},
		}
	}
}

/// The numeric fields a loader hands over for a single row, before we know
/// which of them is which. One value is a bare quantity; two values are a
/// unit price followed by a quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measures {
	pub unit_price: Option<Decimal>,
	pub quantity: Decimal,
}

impl Measures {
	pub fn from_values(values: &[Decimal]) -> Result<Self, CoreError> {
		match *values {
			[quantity] => Ok(Self {
				unit_price: None,
				quantity,
			}),
			[unit_price, quantity] => Ok(Self {
				unit_price: Some(unit_price),
				quantity,
			}),
			_ => Err(CoreError::InvalidArgumentCount(values.len())),
		}
	}
}

impl Transaction {
	/// Builds a transaction around any holding. Always succeeds.
	pub fn new(code: &str, date: Date, holding: Holding) -> Self {
		Self {
			code: code.to_string(),
			date,
			total_amount: holding.total(),
			deleted: false,
			holding,
		}
	}

	pub fn gold(
		code: &str,
		date: Date,
		unit_price: Decimal,
		quantity: Decimal,
		subtype: GoldSubtype,
	) -> Self {
		Self::new(
			code,
			date,
			Holding::Gold {
				unit_price,
				quantity,
				subtype,
			},
		)
	}

	pub fn currency(
		code: &str,
		date: Date,
		quantity: Decimal,
		currency: CurrencyCode,
		rate: ExchangeRate,
	) -> Self {
		Self::new(
			code,
			date,
			Holding::Currency {
				quantity,
				currency,
				rate,
			},
		)
	}

	/// Builds a gold lot from loosely typed values. With only a quantity the
	/// unit price is taken as zero.
	pub fn gold_from_values(
		code: &str,
		date: Date,
		subtype: GoldSubtype,
		values: &[Decimal],
	) -> Result<Self, CoreError> {
		let measures = Measures::from_values(values)?;
		Ok(Self::gold(
			code,
			date,
			measures.unit_price.unwrap_or(Decimal::ZERO),
			measures.quantity,
			subtype,
		))
	}

	/// Builds a currency holding from loosely typed values. A unit price, if
	/// one is given, plays no part in a currency holding and is dropped.
	pub fn currency_from_values(
		code: &str,
		date: Date,
		currency: CurrencyCode,
		rate: ExchangeRate,
		values: &[Decimal],
	) -> Result<Self, CoreError> {
		let measures = Measures::from_values(values)?;
		Ok(Self::currency(code, date, measures.quantity, currency, rate))
	}

	/// Rebuilds this transaction with a different holding, keeping the code,
	/// date and delete flag. The total is recomputed.
	pub fn with_holding(&self, holding: Holding) -> Self {
		let mut rebuilt = Self::new(&self.code, self.date, holding);
		rebuilt.deleted = self.deleted;
		rebuilt
	}

	pub fn code(&self) -> &str {
		&self.code
	}

	pub fn date(&self) -> &Date {
		&self.date
	}

	pub fn total_amount(&self) -> Decimal {
		self.total_amount
	}

	pub fn holding(&self) -> &Holding {
		&self.holding
	}

	pub fn category(&self) -> Category {
		self.holding.category()
	}

	pub fn is_gold(&self) -> bool {
		self.category() == Category::Gold
	}

	pub fn is_currency(&self) -> bool {
		self.category() == Category::Currency
	}

	pub fn is_deleted(&self) -> bool {
		self.deleted
	}

	pub fn set_deleted(&mut self, deleted: bool) {
		self.deleted = deleted;
	}
}
