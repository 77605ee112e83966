/*
 * server/feed.rs
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
use mvpboard_core::feed::Feed;

impl Server {
    /// Builds the listing feed from the current listings and ratings.
    ///
    /// The search term only narrows the listed entries. The ranking of the
    /// most tested listings always covers everything.
    pub async fn feed(&self, search: Option<&str>) -> Result<Feed> {
        info!("Building feed (search {:?})", search);

        let (listings, ratings) = try_join!(self.listing.get_all(None), self.rating.get_all(None))?;
        let mut feed = Feed::build(listings, &ratings, &self.feed_config);

        if let Some(term) = search {
            feed.retain_matching(term);
        }

        Ok(feed)
    }
}
