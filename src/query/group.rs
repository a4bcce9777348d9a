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
use crate::util::amount;
use crate::util::date::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	Ascending,
	/// Newest or largest first, which is what the ledger shows by default
	#[default]
	Descending,
}

impl SortDirection {
	/// Orients an ascending comparison.
	fn apply(&self, ordering: Ordering) -> Ordering {
		match self {
			SortDirection::Ascending => ordering,
			SortDirection::Descending => ordering.reverse(),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
	Date,
	TotalAmount,
}

/// Every transaction that happened on one calendar day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DateGroup {
	pub date: Date,
	pub transactions: Vec<Transaction>,
	pub subtotal: Decimal,
}

/// Every transaction of one asset class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
	pub category: Category,
	pub transactions: Vec<Transaction>,
	pub subtotal: Decimal,
}

fn subtotal_of(transactions: &[Transaction]) -> Decimal {
	amount::sum(transactions.iter().map(|t| t.total_amount()))
}

/// Splits transactions into one group per distinct date, ordered by date in
/// the given direction. Within a group, transactions keep the order they
/// had in the input.
pub fn group_by_date(
	transactions: &[Transaction],
	direction: SortDirection,
) -> Vec<DateGroup> {
	let mut by_date: BTreeMap<Date, Vec<Transaction>> = BTreeMap::new();
	for transaction in transactions {
		by_date
			.entry(*transaction.date())
			.or_default()
			.push(transaction.clone());
	}

	let groups = by_date.into_iter().map(|(date, transactions)| DateGroup {
		date,
		subtotal: subtotal_of(&transactions),
		transactions,
	});

	match direction {
		SortDirection::Ascending => groups.collect(),
		SortDirection::Descending => groups.rev().collect(),
	}
}

/// Splits transactions into exactly two groups, gold first and currency
/// second. Either group may be empty.
pub fn group_by_category(transactions: &[Transaction]) -> Vec<CategoryGroup> {
	[Category::Gold, Category::Currency]
		.into_iter()
		.map(|category| {
			let members: Vec<Transaction> = transactions
				.iter()
				.filter(|t| t.category() == category)
				.cloned()
				.collect();
			CategoryGroup {
				category,
				subtotal: subtotal_of(&members),
				transactions: members,
			}
		})
		.collect()
}

/// Concatenates groups back into one flat sequence, in group order.
pub fn flatten(groups: &[DateGroup]) -> Vec<Transaction> {
	groups
		.iter()
		.flat_map(|g| g.transactions.iter().cloned())
		.collect()
}

/// Stable sort by total amount; equal totals keep their relative order in
/// either direction.
pub fn sort_by_total(
	transactions: &[Transaction],
	direction: SortDirection,
) -> Vec<Transaction> {
	sort(transactions, SortKey::TotalAmount, direction)
}

/// Stable sort by date. Gives the same order as flattening group_by_date()
/// with the same direction.
pub fn sort_by_date(
	transactions: &[Transaction],
	direction: SortDirection,
) -> Vec<Transaction> {
	sort(transactions, SortKey::Date, direction)
}

pub fn sort(
	transactions: &[Transaction],
	key: SortKey,
	direction: SortDirection,
) -> Vec<Transaction> {
	let mut sorted = transactions.to_vec();
	sorted.sort_by(|a, b| {
		let ordering = match key {
			SortKey::Date => a.date().cmp(b.date()),
			SortKey::TotalAmount => a.total_amount().cmp(&b.total_amount()),
		};
		direction.apply(ordering)
	});
	sorted
}
