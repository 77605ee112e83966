/*
 * macros.rs
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

/// Adds a `transaction()` method to a type holding `conn: Arc<PgConnection>`.
///
/// The future is run between `BEGIN` and `COMMIT`, and rolled back if it
/// resolves to an error. Nested calls become savepoints.
macro_rules! impl_async_transaction {
    ($name:ty) => {
        impl $name {
            pub(crate) async fn transaction<F, T>(&self, f: F) -> crate::Result<T>
            where
                F: std::future::Future<Output = crate::Result<T>>,
            {
                use diesel::connection::{Connection, TransactionManager};

                let manager = self.conn.transaction_manager();

                trace!("Starting database transaction");
                manager.begin_transaction(&*self.conn)?;

                match f.await {
                    Ok(value) => {
                        trace!("Committing database transaction");
                        manager.commit_transaction(&*self.conn)?;

                        Ok(value)
                    }
                    Err(error) => {
                        debug!("Rolling back database transaction: {}", error);
                        manager.rollback_transaction(&*self.conn)?;

                        Err(error)
                    }
                }
            }
        }
    };
}
