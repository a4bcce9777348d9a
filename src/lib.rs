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

//! Ledger engine for gold lots and foreign currency holdings, valued in a
//! single reporting currency.
//!
//! A presentation layer loads transactions into a [`TransactionCollection`],
//! then draws snapshots from it and runs them through the filters, grouping,
//! sorting, pagination and statistics in this crate. Nothing here performs
//! I/O apart from reading the optional config file.

pub mod config;
pub mod error;
pub mod ledger;
pub mod query;
pub mod stats;
pub mod util;

pub use error::CoreError;
pub use ledger::asset::{Category, CurrencyCode, GoldSubtype};
pub use ledger::collection::{CollectionSummary, TransactionCollection};
pub use ledger::exchange_rate::ExchangeRate;
pub use ledger::intake::{Intake, IntakeReport, RawRow};
pub use ledger::transaction::{Holding, Measures, Transaction};
pub use query::filter::{
	AmountBracket, DateRange, Selection, TimeFrame, TransactionFilter,
};
pub use query::group::{CategoryGroup, DateGroup, SortDirection, SortKey};
pub use query::page::Paginator;
pub use stats::buckets::{BucketTotals, SubtypeBreakdown};
pub use stats::weeks::DateSpan;
pub use util::date::Date;
