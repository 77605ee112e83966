/*
 * server/mod.rs
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

mod client;
mod feed;
mod listing;
mod question;
mod rating;
mod user;

use crate::config::Config;
use crate::listing::ListingManager;
use crate::manager_prelude::*;
use crate::question::QuestionManager;
use crate::rating::RatingManager;
use crate::user::UserManager;
use mvpboard_core::feed::FeedConfig;

pub use self::listing::ListingDetails;
pub use self::user::UserProfile;

pub struct Server {
    conn: Arc<PgConnection>,
    feed_config: FeedConfig,
    listing: ListingManager,
    question: QuestionManager,
    rating: RatingManager,
    user: UserManager,
}

impl Server {
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating mvpboard::Server, establishing connection to Postgres");

        let Config {
            database_url,
            feed: feed_config,
        } = config;

        let conn = match PgConnection::establish(&database_url) {
            Ok(conn) => Arc::new(conn),
            Err(error) => {
                error!("Error establishing Postgres connection: {}", error);

                return Err(Error::DatabaseConnection(error));
            }
        };

        let listing = ListingManager::new(&conn);
        let question = QuestionManager::new(&conn);
        let rating = RatingManager::new(&conn);
        let user = UserManager::new(&conn);

        Ok(Server {
            conn,
            feed_config,
            listing,
            question,
            rating,
            user,
        })
    }

    #[inline]
    pub fn feed_config(&self) -> &FeedConfig {
        &self.feed_config
    }

    /* Helper methods */

    #[cfg(test)]
    #[inline]
    pub fn test_transaction<F: FnOnce() -> Result<()>>(&self, f: F) {
        self.conn.test_transaction::<_, Error, _>(f);
    }

    #[cfg(test)]
    #[inline]
    pub fn connection(&self) -> &PgConnection {
        &self.conn
    }
}

impl_async_transaction!(Server);

impl Debug for Server {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("mvpboard::Server")
            .field("conn", &"PgConnection { .. }")
            .field("feed_config", &self.feed_config)
            .field("listing", &self.listing)
            .field("question", &self.question)
            .field("rating", &self.rating)
            .field("user", &self.user)
            .finish()
    }
}
