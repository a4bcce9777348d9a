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
use thiserror::Error;

/// Conditions the ledger core can report to its caller. Empty query results
/// and out-of-range pages are deliberately absent: those are normal outcomes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
	/// A transaction was built from a number of values other than one
	/// (quantity) or two (unit price, quantity).
	#[error("Expected 1 or 2 numeric values, got {0}")]
	InvalidArgumentCount(usize),

	/// A row referenced an exchange rate id that was never supplied.
	#[error("Exchange rate \"{0}\" not found")]
	UnknownExchangeRate(String),

	/// A foreign currency row came without any exchange rate.
	#[error("No exchange rate given for {0}")]
	MissingExchangeRate(String),

	/// A row's asset class was neither gold nor currency.
	#[error("Unknown category \"{0}\"")]
	UnknownCategory(String),
}
