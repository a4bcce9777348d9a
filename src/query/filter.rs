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
use crate::util::date::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const HUNDRED_MILLION: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);
const FIVE_HUNDRED_MILLION: Decimal =
	Decimal::from_parts(500_000_000, 0, 0, false, 0);
const ONE_BILLION: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Coarse ranges of total amount, in reporting currency. Each boundary
/// value belongs to the bracket that starts at it.
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AmountBracket {
	#[default]
	All,
	/// Under 100 million
	Below100M,
	/// 100 million up to, but not including, 500 million
	From100MTo500M,
	/// 500 million up to, but not including, 1 billion
	From500MTo1B,
	/// 1 billion and over
	From1B,
}

impl AmountBracket {
	pub fn contains(&self, amount: Decimal) -> bool {
		match self {
			AmountBracket::All => true,
			AmountBracket::Below100M => amount < HUNDRED_MILLION,
			AmountBracket::From100MTo500M => {
				amount >= HUNDRED_MILLION && amount < FIVE_HUNDRED_MILLION
			},
			AmountBracket::From500MTo1B => {
				amount >= FIVE_HUNDRED_MILLION && amount < ONE_BILLION
			},
			AmountBracket::From1B => amount >= ONE_BILLION,
		}
	}
}

/// Inclusive range of calendar dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
	pub from: Date,
	pub to: Date,
}

impl DateRange {
	pub fn new(from: Date, to: Date) -> Self {
		Self { from, to }
	}

	pub fn contains(&self, date: &Date) -> bool {
		&self.from <= date && date <= &self.to
	}
}

/// A month-based window. The relative frames are resolved against a `today`
/// the caller passes in, so results never depend on when the query runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeFrame {
	Month { month: u32, year: i32 },
	ThisMonth,
	LastMonth,
	/// Strictly after today
	Future,
}

impl TimeFrame {
	pub fn matches(&self, date: &Date, today: &Date) -> bool {
		match self {
			TimeFrame::Month { month, year } => date.same_month(*month, *year),
			TimeFrame::ThisMonth => date.same_month(today.month(), today.year()),
			TimeFrame::LastMonth => {
				let (month, year) = today.previous_month();
				date.same_month(month, year)
			},
			TimeFrame::Future => date > today,
		}
	}
}

/// Pass these into apply_filters() to narrow a sequence of transactions.
/// Filters are applied one after another, so a list of them means "all of
/// these".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionFilter {
	Range(DateRange),
	Bracket(AmountBracket),
	Frame { frame: TimeFrame, today: Date },
	/// Case-insensitive substring of the code
	Code(String),
	/// A category token such as "gold"; unknown tokens match nothing
	Category(String),
	OnDate(Date),
	/// Drops soft-deleted transactions
	Active,
}

impl TransactionFilter {
	pub fn matches(&self, transaction: &Transaction) -> bool {
		match self {
			TransactionFilter::Range(range) => range.contains(transaction.date()),
			TransactionFilter::Bracket(bracket) => {
				bracket.contains(transaction.total_amount())
			},
			TransactionFilter::Frame { frame, today } => {
				frame.matches(transaction.date(), today)
			},
			TransactionFilter::Code(term) => transaction
				.code()
				.to_lowercase()
				.contains(&term.to_lowercase()),
			TransactionFilter::Category(token) => Category::parse(token)
				.is_some_and(|category| transaction.category() == category),
			TransactionFilter::OnDate(date) => transaction.date() == date,
			TransactionFilter::Active => !transaction.is_deleted(),
		}
	}
}

/// Applies each filter in turn and returns the survivors in their original
/// relative order. Matching nothing yields an empty Vec.
pub fn apply_filters(
	transactions: &[Transaction],
	filters: impl IntoIterator<Item = TransactionFilter>,
) -> Vec<Transaction> {
	let mut iter: Box<dyn Iterator<Item = &Transaction> + '_> =
		Box::new(transactions.iter());

	for filter in filters {
		iter = Box::new(iter.filter(move |t| filter.matches(t)));
	}

	iter.cloned().collect()
}

fn filter_one(
	transactions: &[Transaction],
	filter: TransactionFilter,
) -> Vec<Transaction> {
	apply_filters(transactions, [filter])
}

pub fn in_date_range(
	transactions: &[Transaction],
	from: Date,
	to: Date,
) -> Vec<Transaction> {
	filter_one(transactions, TransactionFilter::Range(DateRange::new(from, to)))
}

pub fn in_bracket(
	transactions: &[Transaction],
	bracket: AmountBracket,
) -> Vec<Transaction> {
	filter_one(transactions, TransactionFilter::Bracket(bracket))
}

pub fn in_month(
	transactions: &[Transaction],
	month: u32,
	year: i32,
) -> Vec<Transaction> {
	filter_one(
		transactions,
		TransactionFilter::Frame {
			frame: TimeFrame::Month { month, year },
			today: Date::default(),
		},
	)
}

pub fn in_time_frame(
	transactions: &[Transaction],
	frame: TimeFrame,
	today: Date,
) -> Vec<Transaction> {
	filter_one(transactions, TransactionFilter::Frame { frame, today })
}

pub fn search_code(transactions: &[Transaction], term: &str) -> Vec<Transaction> {
	filter_one(transactions, TransactionFilter::Code(term.to_string()))
}

pub fn search_category(
	transactions: &[Transaction],
	token: &str,
) -> Vec<Transaction> {
	filter_one(transactions, TransactionFilter::Category(token.to_string()))
}

pub fn on_date(transactions: &[Transaction], date: Date) -> Vec<Transaction> {
	filter_one(transactions, TransactionFilter::OnDate(date))
}

/// Whatever row the user currently has highlighted, handed in by the
/// presentation layer for the duration of one call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
	pub code: String,
}

impl Selection {
	pub fn new(code: &str) -> Self {
		Self {
			code: code.to_string(),
		}
	}

	/// The first transaction with the selected code. Later duplicates, if
	/// any, are ignored.
	pub fn resolve<'a>(
		&self,
		transactions: &'a [Transaction],
	) -> Option<&'a Transaction> {
		transactions.iter().find(|t| t.code() == self.code)
	}
}
