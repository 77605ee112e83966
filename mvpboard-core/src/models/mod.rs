/*
 * models/mod.rs
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

mod listing;
mod question;
mod rating;
mod user;

mod prelude {
    pub use crate::types::*;
    pub use chrono::prelude::*;
    pub use ref_map::*;
}

pub use self::listing::{Listing, NewListing};
pub use self::question::{NewQuestion, Question, PENDING_ANSWER};
pub use self::rating::{NewRating, Rating};
pub use self::user::{NewAccount, User, UserType, INTERESTS};
