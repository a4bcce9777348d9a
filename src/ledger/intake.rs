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
use crate::ledger::collection::TransactionCollection;
use crate::ledger::exchange_rate::ExchangeRate;
use crate::ledger::transaction::Transaction;
use crate::util::date::Date;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// One row as a loader reads it, already split into primitive fields but not
/// yet interpreted. `subtype` is a gold brand or a currency code depending on
/// `category`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRow {
	pub code: String,
	pub date: Date,
	pub category: String,
	pub subtype: String,
	pub values: Vec<Decimal>,

	/// Id of an exchange rate handed to the same Intake; only meaningful for
	/// currency rows
	pub rate_id: Option<String>,
}

/// Outcome of loading a batch of rows. A bad row is reported here by its
/// position and never stops the rest of the batch.
#[derive(Debug, Default)]
pub struct IntakeReport {
	pub loaded: usize,
	pub rejected: Vec<(usize, CoreError)>,
}

impl IntakeReport {
	pub fn is_clean(&self) -> bool {
		self.rejected.is_empty()
	}
}

/// Turns loader output into transactions. Rates and rows may arrive in any
/// order; rates are only resolved when the batch is loaded.
#[derive(Debug, Default)]
pub struct Intake {
	rates: HashMap<String, ExchangeRate>,
	rows: Vec<RawRow>,
}

impl Intake {
	pub fn new() -> Self {
		Default::default()
	}

	/// Registers a rate. A later rate with the same id replaces the earlier.
	pub fn add_rate(&mut self, rate: ExchangeRate) {
		self.rates.insert(rate.id.clone(), rate);
	}

	pub fn add_row(&mut self, row: RawRow) {
		self.rows.push(row);
	}

	/// Interprets a single row.
	pub fn build(&self, row: &RawRow) -> Result<Transaction, CoreError> {
		let category = Category::parse(&row.category)
			.ok_or_else(|| CoreError::UnknownCategory(row.category.clone()))?;

		match category {
			Category::Gold => Transaction::gold_from_values(
				&row.code,
				row.date,
				GoldSubtype::parse(&row.subtype),
				&row.values,
			),
			Category::Currency => {
				let currency = CurrencyCode::parse(&row.subtype);
				let rate = self.resolve_rate(row, &currency)?;
				Transaction::currency_from_values(
					&row.code,
					row.date,
					currency,
					rate,
					&row.values,
				)
			},
		}
	}

	/// Builds every row and adds the good ones to the collection, in row
	/// order. Consumes this.
	pub fn load_into(
		self,
		collection: &mut TransactionCollection,
	) -> IntakeReport {
		let mut report = IntakeReport::default();

		for (index, row) in self.rows.iter().enumerate() {
			match self.build(row) {
				Ok(transaction) => {
					collection.add(transaction);
					report.loaded += 1;
				},
				Err(e) => {
					warn!("Skipping row {} ({}): {}", index, row.code, e);
					report.rejected.push((index, e));
				},
			}
		}

		debug!(
			"Loaded {} rows, rejected {}",
			report.loaded,
			report.rejected.len()
		);
		report
	}

	fn resolve_rate(
		&self,
		row: &RawRow,
		currency: &CurrencyCode,
	) -> Result<ExchangeRate, CoreError> {
		match &row.rate_id {
			Some(id) => self
				.rates
				.get(id)
				.cloned()
				.ok_or_else(|| CoreError::UnknownExchangeRate(id.clone())),
			None => match currency {
				CurrencyCode::Usd | CurrencyCode::Eur => {
					Err(CoreError::MissingExchangeRate(row.code.clone()))
				},
				// the rate plays no part in the total for these
				_ => Ok(ExchangeRate::identity(row.date)),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rust_decimal_macros::dec;

	fn row(
		code: &str,
		category: &str,
		subtype: &str,
		values: Vec<Decimal>,
		rate_id: Option<&str>,
	) -> RawRow {
		RawRow {
			code: code.to_string(),
			date: Date::new(2024, 4, 12),
			category: category.to_string(),
			subtype: subtype.to_string(),
			values,
			rate_id: rate_id.map(|s| s.to_string()),
		}
	}

	#[test]
	fn test_rows_and_rates_in_any_order() {
		let mut intake = Intake::new();
		intake.add_row(row(
			"CUR001",
			"currency",
			"USD",
			vec![dec!(50)],
			Some("R-USD"),
		));
		intake.add_row(row(
			"GLD001",
			"GOLD",
			"SJC",
			vec![dec!(85200000), dec!(2)],
			None,
		));
		intake.add_rate(ExchangeRate::new(
			"R-USD",
			CurrencyCode::Usd,
			dec!(25137),
			Date::new(2024, 4, 1),
		));

		let mut collection = TransactionCollection::new();
		let report = intake.load_into(&mut collection);

		assert!(report.is_clean());
		assert_eq!(report.loaded, 2);
		assert_eq!(collection.currency_total(), dec!(1256850));
		assert_eq!(collection.gold_total(), dec!(170400000));
	}

	#[test]
	fn test_bad_rows_are_reported_not_fatal() {
		let mut intake = Intake::new();
		intake.add_row(row("GLD001", "GOLD", "SJC", vec![], None));
		intake.add_row(row("CUR001", "CURRENCY", "EUR", vec![dec!(1)], None));
		intake.add_row(row(
			"CUR002",
			"CURRENCY",
			"USD",
			vec![dec!(1)],
			Some("missing"),
		));
		intake.add_row(row("SLV001", "SILVER", "", vec![dec!(1)], None));
		intake.add_row(row("CUR003", "CURRENCY", "VND", vec![dec!(7)], None));

		let mut collection = TransactionCollection::new();
		let report = intake.load_into(&mut collection);

		assert_eq!(report.loaded, 1);
		assert_eq!(
			report.rejected,
			vec![
				(0, CoreError::InvalidArgumentCount(0)),
				(1, CoreError::MissingExchangeRate("CUR001".to_string())),
				(2, CoreError::UnknownExchangeRate("missing".to_string())),
				(3, CoreError::UnknownCategory("SILVER".to_string())),
			]
		);
		assert_eq!(collection.transactions()[0].code(), "CUR003");
		assert_eq!(collection.currency_total(), dec!(7));
	}

	#[test]
	fn test_unknown_currency_loads_at_zero() {
		let intake = Intake::new();
		let built = intake
			.build(&row("CUR009", "CURRENCY", "JPY", vec![dec!(500)], None))
			.unwrap();
		assert_eq!(built.total_amount(), Decimal::ZERO);
	}
}
