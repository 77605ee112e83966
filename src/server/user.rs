/*
 * server/user.rs
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

use super::Server;
use crate::manager_prelude::*;
use futures::try_join;
use mvpboard_core::profile::ProfileStats;

/// A user and their activity counters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    user: User,
    stats: ProfileStats,
}

impl UserProfile {
    #[inline]
    pub fn user(&self) -> &User {
        &self.user
    }

    #[inline]
    pub fn stats(&self) -> &ProfileStats {
        &self.stats
    }
}

impl Server {
    /// Gets the user with the given ID, if they exist.
    #[inline]
    pub async fn get_user_from_id(&self, id: UserId) -> Result<Option<User>> {
        self.user.get_from_id(id).await
    }

    #[inline]
    pub async fn get_user_from_email(&self, email: &str) -> Result<Option<User>> {
        self.user.get_from_email(email).await
    }

    /// Gets a user's profile page data.
    pub async fn profile(&self, user_id: UserId) -> Result<UserProfile> {
        info!("Getting profile for user ID {}", user_id);

        self.transaction(async {
            let user = match self.user.get_from_id(user_id).await? {
                Some(user) => user,
                None => return Err(Error::UserNotFound),
            };

            let (listings, ratings) =
                try_join!(self.listing.get_all(None), self.rating.get_all(None))?;
            let stats = ProfileStats::compute(user_id, &listings, &ratings);

            Ok(UserProfile { user, stats })
        })
        .await
    }
}
