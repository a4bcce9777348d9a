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
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two asset classes the ledger tracks.
#[derive(
	Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
	Gold,
	Currency,
}

impl Category {
	/// Maps a search or import token onto a category, ignoring case.
	/// Anything other than "GOLD" or "CURRENCY" is not a category.
	pub fn parse(token: &str) -> Option<Category> {
		match token.trim().to_uppercase().as_str() {
			"GOLD" => Some(Category::Gold),
			"CURRENCY" => Some(Category::Currency),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Category::Gold => "GOLD",
			Category::Currency => "CURRENCY",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Gold brand of a lot. Brands the ledger does not know are carried through
/// as `Other` rather than rejected; they still count toward totals but have
/// no slot in subtype breakdowns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoldSubtype {
	Sjc,
	Pnj,
	Doji,
	Other(String),
}

impl GoldSubtype {
	/// Every brand that gets its own series in statistics.
	pub const KNOWN: [GoldSubtype; 3] =
		[GoldSubtype::Sjc, GoldSubtype::Pnj, GoldSubtype::Doji];

	pub fn parse(symbol: &str) -> Self {
		match symbol.trim().to_uppercase().as_str() {
			"SJC" => GoldSubtype::Sjc,
			"PNJ" => GoldSubtype::Pnj,
			"DOJI" => GoldSubtype::Doji,
			_ => GoldSubtype::Other(symbol.trim().to_string()),
		}
	}

	pub fn symbol(&self) -> &str {
		match self {
			GoldSubtype::Sjc => "SJC",
			GoldSubtype::Pnj => "PNJ",
			GoldSubtype::Doji => "DOJI",
			GoldSubtype::Other(s) => s,
		}
	}

	pub fn is_known(&self) -> bool {
		!matches!(self, GoldSubtype::Other(_))
	}
}

impl From<String> for GoldSubtype {
	fn from(value: String) -> Self {
		GoldSubtype::parse(&value)
	}
}

impl From<GoldSubtype> for String {
	fn from(value: GoldSubtype) -> Self {
		value.symbol().to_string()
	}
}

impl fmt::Display for GoldSubtype {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.symbol())
	}
}

/// Denomination of a currency holding: the reporting currency itself, one of
/// the two supported foreign currencies, or something unrecognized.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CurrencyCode {
	Vnd,
	Usd,
	Eur,
	Other(String),
}

impl CurrencyCode {
	/// All totals in the ledger are expressed in this currency.
	pub const REPORTING: CurrencyCode = CurrencyCode::Vnd;

	/// Every code that gets its own series in statistics.
	pub const KNOWN: [CurrencyCode; 3] =
		[CurrencyCode::Vnd, CurrencyCode::Usd, CurrencyCode::Eur];

	pub fn parse(symbol: &str) -> Self {
		match symbol.trim().to_uppercase().as_str() {
			"VND" => CurrencyCode::Vnd,
			"USD" => CurrencyCode::Usd,
			"EUR" => CurrencyCode::Eur,
			_ => CurrencyCode::Other(symbol.trim().to_string()),
		}
	}

	pub fn symbol(&self) -> &str {
		match self {
			CurrencyCode::Vnd => "VND",
			CurrencyCode::Usd => "USD",
			CurrencyCode::Eur => "EUR",
			CurrencyCode::Other(s) => s,
		}
	}

	pub fn is_reporting(&self) -> bool {
		*self == CurrencyCode::REPORTING
	}

	pub fn is_known(&self) -> bool {
		!matches!(self, CurrencyCode::Other(_))
	}
}

impl From<String> for CurrencyCode {
	fn from(value: String) -> Self {
		CurrencyCode::parse(&value)
	}
}

impl From<CurrencyCode> for String {
	fn from(value: CurrencyCode) -> Self {
		value.symbol().to_string()
	}
}

impl fmt::Display for CurrencyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.symbol())
	}
}
