/*
 * utils.rs
 *
 * mvpboard - Product validation marketplace service
 * Copyright (C) 2019-2020 Ammon Smith
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

/// Converts an affected row count into whether the operation hit anything.
/// More than one row means a primary key lookup matched several, which is a bug.
pub fn rows_to_result(rows: usize) -> bool {
    match rows {
        0 => false,
        1 => true,
        _ => {
            error!("Multiple rows affected, expected at most one: {}", rows);

            false
        }
    }
}

#[test]
fn row_counts() {
    assert_eq!(rows_to_result(0), false);
    assert_eq!(rows_to_result(1), true);
    assert_eq!(rows_to_result(2), false);
}
