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
use aurum::query::filter::in_date_range;
use aurum::query::group::{flatten, group_by_date, sort, sort_by_date};
use aurum::query::page::{page_count, page_slice};
use aurum::{
	CurrencyCode, Date, ExchangeRate, GoldSubtype, SortDirection, SortKey,
	Transaction,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_date() -> impl Strategy<Value = Date> {
	(2022i32..2026, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| Date::new(y, m, d))
}

fn arb_transaction() -> impl Strategy<Value = Transaction> {
	(
		0u32..10_000,
		arb_date(),
		-1_000_000i64..1_000_000_000,
		0i64..1_000,
		prop::bool::ANY,
	)
		.prop_map(|(n, date, price, quantity, is_gold)| {
			let code = format!("T{:05}", n);
			if is_gold {
				Transaction::gold(
					&code,
					date,
					Decimal::from(price),
					Decimal::new(quantity, 1),
					GoldSubtype::Sjc,
				)
			} else {
				Transaction::currency(
					&code,
					date,
					Decimal::from(quantity),
					CurrencyCode::Usd,
					ExchangeRate::new(
						"R",
						CurrencyCode::Usd,
						Decimal::from(price),
						date,
					),
				)
			}
		})
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
	prop_oneof![
		Just(SortDirection::Ascending),
		Just(SortDirection::Descending)
	]
}

fn sorted_codes(transactions: &[Transaction]) -> Vec<String> {
	let mut codes: Vec<String> =
		transactions.iter().map(|t| t.code().to_string()).collect();
	codes.sort();
	codes
}

proptest! {
	#[test]
	fn gold_total_is_exact_product(
		price in -1_000_000_000i64..1_000_000_000,
		quantity in -100_000i64..100_000,
	) {
		let unit_price = Decimal::new(price, 2);
		let quantity = Decimal::new(quantity, 3);
		let t = Transaction::gold(
			"GLD", Date::new(2024, 1, 1), unit_price, quantity, GoldSubtype::Pnj,
		);
		prop_assert_eq!(t.total_amount(), unit_price * quantity);
	}

	#[test]
	fn grouping_by_date_keeps_every_transaction(
		transactions in prop::collection::vec(arb_transaction(), 0..60),
		direction in arb_direction(),
	) {
		let flat = flatten(&group_by_date(&transactions, direction));
		prop_assert_eq!(sorted_codes(&flat), sorted_codes(&transactions));
		prop_assert_eq!(flat, sort_by_date(&transactions, direction));
	}

	#[test]
	fn sorting_twice_changes_nothing(
		transactions in prop::collection::vec(arb_transaction(), 0..60),
		direction in arb_direction(),
		by_total in prop::bool::ANY,
	) {
		let key = if by_total { SortKey::TotalAmount } else { SortKey::Date };
		let once = sort(&transactions, key, direction);
		let twice = sort(&once, key, direction);
		prop_assert_eq!(once, twice);
	}

	#[test]
	fn pages_reassemble_the_sequence(
		items in prop::collection::vec(any::<u16>(), 0..200),
		page_size in 1usize..30,
	) {
		let pages = page_count(items.len(), page_size);
		prop_assert_eq!(pages, items.len().div_ceil(page_size).max(1));

		let rebuilt: Vec<u16> = (0..pages)
			.flat_map(|i| page_slice(&items, page_size, i).to_vec())
			.collect();
		prop_assert_eq!(rebuilt, items);
	}

	#[test]
	fn date_range_bounds_are_inclusive(
		transactions in prop::collection::vec(arb_transaction(), 1..40),
	) {
		let mut dates: Vec<Date> = transactions.iter().map(|t| *t.date()).collect();
		dates.sort();
		let from = dates[0];
		let to = dates[dates.len() - 1];

		let everything = in_date_range(&transactions, from, to);
		prop_assert_eq!(everything.len(), transactions.len());

		if let Some(after_from) = from.offset_days(1) {
			let without_first = in_date_range(&transactions, after_from, to);
			let on_from = transactions.iter().filter(|t| *t.date() == from).count();
			prop_assert_eq!(without_first.len(), transactions.len() - on_from);
		}
	}
}
