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
use crate::ledger::asset::Category;
use crate::ledger::transaction::Transaction;
use crate::query::filter::Selection;
use crate::util::amount;
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

/// The central data structure of this system: every transaction the user
/// owns, in the order the loader handed them over, plus running counts and
/// totals per asset class.
///
/// All queries run over snapshots taken from here; nothing else holds
/// transactions between calls. The collection is not synchronized, so a
/// caller that shares it across threads must wrap it in a mutex.
#[derive(Debug, Default)]
pub struct TransactionCollection {
	transactions: Vec<Transaction>,

	/// Cached aggregates; rebuilt from `transactions` whenever an element
	/// leaves the collection
	summary: CollectionSummary,
}

/// Counts and summed totals per asset class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
	pub gold_count: usize,
	pub currency_count: usize,
	pub gold_total: Decimal,
	pub currency_total: Decimal,
}

impl CollectionSummary {
	/// Tallies a sequence from scratch.
	pub fn from_transactions(transactions: &[Transaction]) -> Self {
		let mut summary = Self::default();
		for transaction in transactions {
			summary.record(transaction);
		}
		summary
	}

	fn record(&mut self, transaction: &Transaction) {
		match transaction.category() {
			Category::Gold => {
				self.gold_count += 1;
				self.gold_total =
					amount::add(self.gold_total, transaction.total_amount());
			},
			Category::Currency => {
				self.currency_count += 1;
				self.currency_total =
					amount::add(self.currency_total, transaction.total_amount());
			},
		}
	}

	pub fn count(&self) -> usize {
		self.gold_count + self.currency_count
	}

	pub fn grand_total(&self) -> Decimal {
		amount::add(self.gold_total, self.currency_total)
	}
}

impl TransactionCollection {
	pub fn new() -> Self {
		Default::default()
	}

	pub fn add(&mut self, transaction: Transaction) {
		debug!(
			"Adding {} ({}) worth {}",
			transaction.code(),
			transaction.category(),
			transaction.total_amount()
		);
		self.summary.record(&transaction);
		self.transactions.push(transaction);
	}

	/// Removes the first transaction sharing the given one's code, if any.
	/// Codes are meant to be unique, but duplicates are tolerated: only the
	/// earliest match goes.
	pub fn remove(&mut self, transaction: &Transaction) {
		let position = self
			.transactions
			.iter()
			.position(|t| t.code() == transaction.code());

		if let Some(index) = position {
			debug!("Removing {}", transaction.code());
			self.transactions.remove(index);
			self.summary =
				CollectionSummary::from_transactions(&self.transactions);
		}
	}

	/// Returns a copy of every transaction, in insertion order.
	pub fn list(&self) -> Vec<Transaction> {
		self.transactions.clone()
	}

	/// Read-only view for running queries without copying.
	pub fn transactions(&self) -> &[Transaction] {
		&self.transactions
	}

	pub fn clear(&mut self) {
		debug!("Clearing {} transactions", self.transactions.len());
		self.transactions.clear();
		self.summary = CollectionSummary::default();
	}

	/// Throws away the current contents and loads the given transactions in
	/// order, as on a manual refresh.
	pub fn replace_all(
		&mut self,
		transactions: impl IntoIterator<Item = Transaction>,
	) {
		self.clear();
		for transaction in transactions {
			self.add(transaction);
		}
	}

	/// Looks up the transaction a user has selected.
	pub fn find(&self, selection: &Selection) -> Option<&Transaction> {
		selection.resolve(&self.transactions)
	}

	pub fn summary(&self) -> CollectionSummary {
		self.summary
	}

	pub fn gold_count(&self) -> usize {
		self.summary.gold_count
	}

	pub fn currency_count(&self) -> usize {
		self.summary.currency_count
	}

	pub fn gold_total(&self) -> Decimal {
		self.summary.gold_total
	}

	pub fn currency_total(&self) -> Decimal {
		self.summary.currency_total
	}

	pub fn len(&self) -> usize {
		self.transactions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transactions.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ledger::asset::{CurrencyCode, GoldSubtype};
	use crate::ledger::exchange_rate::ExchangeRate;
	use crate::util::date::Date;
	use rust_decimal_macros::dec;

	fn gold(code: &str, price: Decimal, quantity: Decimal) -> Transaction {
		Transaction::gold(
			code,
			Date::new(2024, 5, 10),
			price,
			quantity,
			GoldSubtype::Sjc,
		)
	}

	fn usd(code: &str, quantity: Decimal) -> Transaction {
		Transaction::currency(
			code,
			Date::new(2024, 5, 11),
			quantity,
			CurrencyCode::Usd,
			ExchangeRate::new(
				"R1",
				CurrencyCode::Usd,
				dec!(25000),
				Date::new(2024, 5, 1),
			),
		)
	}

	#[test]
	fn test_add_updates_aggregates() {
		let mut collection = TransactionCollection::new();
		collection.add(gold("GLD001", dec!(100), dec!(2)));
		collection.add(gold("GLD002", dec!(50), dec!(1)));
		collection.add(usd("CUR001", dec!(2)));

		assert_eq!(collection.len(), 3);
		assert_eq!(collection.gold_count(), 2);
		assert_eq!(collection.currency_count(), 1);
		assert_eq!(collection.gold_total(), dec!(250));
		assert_eq!(collection.currency_total(), dec!(50000));
		assert_eq!(collection.summary().grand_total(), dec!(50250));
	}

	#[test]
	fn test_list_preserves_insertion_order_and_is_a_copy() {
		let mut collection = TransactionCollection::new();
		collection.add(usd("CUR001", dec!(1)));
		collection.add(gold("GLD001", dec!(1), dec!(1)));

		let mut listed = collection.list();
		let codes: Vec<&str> = listed.iter().map(|t| t.code()).collect();
		assert_eq!(codes, vec!["CUR001", "GLD001"]);

		listed.clear();
		assert_eq!(collection.len(), 2);
	}

	#[test]
	fn test_remove_first_match_and_recompute() {
		let mut collection = TransactionCollection::new();
		collection.add(gold("GLD001", dec!(100), dec!(1)));
		collection.add(gold("GLD001", dec!(300), dec!(1)));
		collection.add(usd("CUR001", dec!(1)));

		collection.remove(&gold("GLD001", dec!(0), dec!(0)));

		assert_eq!(collection.len(), 2);
		assert_eq!(collection.transactions()[0].total_amount(), dec!(300));
		assert_eq!(
			collection.summary(),
			CollectionSummary::from_transactions(collection.transactions())
		);
		assert_eq!(collection.gold_count(), 1);
		assert_eq!(collection.gold_total(), dec!(300));
	}

	#[test]
	fn test_remove_absent_is_noop() {
		let mut collection = TransactionCollection::new();
		collection.add(gold("GLD001", dec!(100), dec!(1)));
		let before = collection.summary();

		collection.remove(&usd("CUR999", dec!(1)));

		assert_eq!(collection.len(), 1);
		assert_eq!(collection.summary(), before);
	}

	#[test]
	fn test_clear_and_replace_all() {
		let mut collection = TransactionCollection::new();
		collection.add(gold("GLD001", dec!(100), dec!(1)));
		collection.clear();
		assert!(collection.is_empty());
		assert_eq!(collection.summary(), CollectionSummary::default());

		collection.replace_all(vec![
			usd("CUR001", dec!(1)),
			usd("CUR002", dec!(2)),
		]);
		assert_eq!(collection.currency_count(), 2);
		assert_eq!(collection.currency_total(), dec!(75000));
		assert_eq!(collection.gold_count(), 0);
	}

	#[test]
	fn test_find_selection() {
		let mut collection = TransactionCollection::new();
		collection.add(gold("GLD001", dec!(100), dec!(1)));
		collection.add(usd("CUR001", dec!(1)));

		let found = collection.find(&Selection::new("CUR001"));
		assert_eq!(found.map(|t| t.code()), Some("CUR001"));
		assert!(collection.find(&Selection::new("nope")).is_none());
	}

	#[test]
	fn test_summary_saturates() {
		let mut collection = TransactionCollection::new();
		collection.add(gold("GLD001", Decimal::MAX, dec!(1)));
		collection.add(gold("GLD002", Decimal::MAX, dec!(1)));
		collection.add(usd("CUR001", dec!(1)));

		assert_eq!(collection.gold_count(), 2);
		assert_eq!(collection.gold_total(), Decimal::MAX);
		assert_eq!(collection.summary().grand_total(), Decimal::MAX);

		collection.remove(&gold("GLD001", Decimal::MAX, dec!(1)));
		assert_eq!(collection.gold_total(), Decimal::MAX);
		assert_eq!(collection.gold_count(), 1);
	}
}
