/*
 * types.rs
 *
 * mvpboard-core - Product validation marketplace service
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

make_id_type!(user_id, UserId);
make_id_type!(listing_id, ListingId);
make_id_type!(rating_id, RatingId);
make_id_type!(question_id, QuestionId);

#[test]
fn id_types() {
    let id = ListingId::from_raw(42);

    assert_eq!(id.to_i64(), 42);
    assert_eq!(i64::from(id), 42);
    assert_eq!(id.to_string(), "42");
    assert!(ListingId::from_raw(1) < ListingId::from_raw(2));
}
