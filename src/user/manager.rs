/*
 * user/manager.rs
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

use crate::manager_prelude::*;

/// Read access to user profiles.
///
/// Accounts are created and authenticated by an external provider,
/// so nothing here ever writes to the users table.
pub struct UserManager {
    conn: Arc<PgConnection>,
}

impl UserManager {
    #[inline]
    pub fn new(conn: &Arc<PgConnection>) -> Self {
        debug!("Creating user-manager service");

        let conn = Arc::clone(conn);
        UserManager { conn }
    }

    pub async fn get_from_id(&self, id: UserId) -> Result<Option<User>> {
        info!("Getting user for ID {}", id);

        let id: i64 = id.into();
        let result = users::table
            .find(id)
            .first::<User>(&*self.conn)
            .optional()?;

        Ok(result)
    }

    pub async fn get_from_email(&self, email: &str) -> Result<Option<User>> {
        info!("Getting user for email '{}'", email);

        let email = email.to_ascii_lowercase();
        let result = users::table
            .filter(users::email.eq(&email))
            .first::<User>(&*self.conn)
            .optional()?;

        Ok(result)
    }
}

impl Debug for UserManager {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UserManager")
            .field("conn", &"PgConnection { .. }")
            .finish()
    }
}
