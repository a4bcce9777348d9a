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
use crate::ledger::asset::{CurrencyCode, GoldSubtype};
use crate::ledger::transaction::{Holding, Transaction};
use crate::stats::weeks::{weeks_of_month, DateSpan};
use crate::util::amount;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Totals per gold brand and per currency code, in reporting currency.
/// Every known brand and code is always present, at zero if nothing was
/// bought, so a chart can draw an empty bar rather than a gap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubtypeBreakdown {
	pub gold: BTreeMap<GoldSubtype, Decimal>,
	pub currency: BTreeMap<CurrencyCode, Decimal>,
}

impl Default for SubtypeBreakdown {
	fn default() -> Self {
		Self {
			gold: GoldSubtype::KNOWN
				.into_iter()
				.map(|s| (s, Decimal::ZERO))
				.collect(),
			currency: CurrencyCode::KNOWN
				.into_iter()
				.map(|c| (c, Decimal::ZERO))
				.collect(),
		}
	}
}

impl SubtypeBreakdown {
	/// Adds a transaction's total to its subtype. Unrecognized brands and
	/// codes have no series and are skipped.
	fn record(&mut self, transaction: &Transaction) {
		let value = transaction.total_amount();
		match transaction.holding() {
			Holding::Gold { subtype, .. } => {
				if let Some(total) = self.gold.get_mut(subtype) {
					*total = amount::add(*total, value);
				}
			},
			Holding::Currency { currency, .. } => {
				if let Some(total) = self.currency.get_mut(currency) {
					*total = amount::add(*total, value);
				}
			},
		}
	}

	pub fn gold_total(&self) -> Decimal {
		amount::sum(self.gold.values().copied())
	}

	pub fn currency_total(&self) -> Decimal {
		amount::sum(self.currency.values().copied())
	}
}

/// What was bought during one week or one day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BucketTotals {
	pub span: DateSpan,
	pub count: usize,
	pub total: Decimal,
	pub breakdown: SubtypeBreakdown,
}

impl BucketTotals {
	fn new(span: DateSpan) -> Self {
		Self {
			span,
			count: 0,
			total: Decimal::ZERO,
			breakdown: SubtypeBreakdown::default(),
		}
	}
}

/// Sums transactions into the given spans. A transaction lands in every span
/// that contains its date; spans are expected not to overlap.
pub fn totals_for_spans(
	transactions: &[Transaction],
	spans: &[DateSpan],
) -> Vec<BucketTotals> {
	let mut buckets: Vec<BucketTotals> =
		spans.iter().copied().map(BucketTotals::new).collect();

	for transaction in transactions {
		for bucket in buckets.iter_mut() {
			if bucket.span.contains(transaction.date()) {
				bucket.count += 1;
				bucket.total =
					amount::add(bucket.total, transaction.total_amount());
				bucket.breakdown.record(transaction);
			}
		}
	}

	buckets
}

/// One bucket per (clipped) week of the month. Pass the whole collection,
/// not a filtered view, or the weekly figures will undercount.
pub fn weekly_totals(
	transactions: &[Transaction],
	year: i32,
	month: u32,
) -> Vec<BucketTotals> {
	totals_for_spans(transactions, &weeks_of_month(year, month))
}

/// One bucket per day of the span, typically a week from weeks_of_month()
/// or week_of().
pub fn daily_totals(
	transactions: &[Transaction],
	span: &DateSpan,
) -> Vec<BucketTotals> {
	let days: Vec<DateSpan> =
		span.days().into_iter().map(DateSpan::single).collect();
	totals_for_spans(transactions, &days)
}
