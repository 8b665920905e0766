//! Users and their e-mail, telephone and address collections.
//!
//! Every write that touches more than one row runs inside a single
//! transaction, so a failed update leaves the stored state untouched.

use crate::repositories::rows;
use crate::{DbError, Result as DbErrorResult, SearchPage, SearchQuery};

use ua_core::{
    Address, ChangeSet, Email, NewUser, Telephone, User, UserChildren, UserIncludes,
    UserUpdatePayload,
};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{Sqlite, SqlitePool, Transaction};

const USER_COLUMNS: &str = "id, name, nickname, picture, birth_date, cpf, password_hash, \
                            created_at, updated_at";

/// Patterns come from [`SearchQuery::search_pattern`], escaped with `\`.
const SEARCH_FILTER: &str = "(? IS NULL \
     OR u.name LIKE ? ESCAPE '\\' \
     OR u.nickname LIKE ? ESCAPE '\\' \
     OR u.cpf LIKE ? ESCAPE '\\' \
     OR EXISTS (SELECT 1 FROM user_emails se \
                WHERE se.user_id = u.id AND se.email LIKE ? ESCAPE '\\'))";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts the user and every child record, returning the stored user
    /// with all collections loaded.
    pub async fn create(&self, new_user: &NewUser) -> DbErrorResult<User> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO users (
                  name, nickname, picture, birth_date, cpf, password_hash,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.nickname)
        .bind(&new_user.picture)
        .bind(new_user.birth_date)
        .bind(&new_user.cpf)
        .bind(&new_user.password_hash)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let user_id = result.last_insert_rowid();

        for email in &new_user.emails {
            Self::insert_email(&mut tx, user_id, email).await?;
        }
        for telephone in &new_user.telephones {
            Self::insert_telephone(&mut tx, user_id, telephone).await?;
        }
        for address in &new_user.addresses {
            Self::insert_address(&mut tx, user_id, address).await?;
        }

        tx.commit().await?;

        log::info!(
            "Created user {} with {} e-mail(s), {} telephone(s), {} address(es)",
            user_id,
            new_user.emails.len(),
            new_user.telephones.len(),
            new_user.addresses.len()
        );

        self.require(user_id, UserIncludes::all()).await
    }

    pub async fn find_by_id(
        &self,
        id: i64,
        includes: UserIncludes,
    ) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut user = rows::user(&row)?;
        if includes.email {
            user.emails = Some(self.find_emails(id).await?);
        }
        if includes.telephone {
            user.telephones = Some(self.find_telephones(id).await?);
        }
        if includes.address {
            user.addresses = Some(self.find_addresses(id).await?);
        }

        Ok(Some(user))
    }

    /// Persisted child collections, read right before reconciling an update.
    pub async fn snapshot(&self, id: i64) -> DbErrorResult<Option<UserChildren>> {
        Ok(self
            .find_by_id(id, UserIncludes::all())
            .await?
            .map(|user| user.children()))
    }

    /// Applies base-field changes and nested writes in one transaction.
    ///
    /// Deletes ignore ids the user does not own. Updates of such ids fail
    /// with [`DbError::ChildNotFound`] and roll everything back.
    pub async fn apply_update(&self, id: i64, payload: &UserUpdatePayload) -> DbErrorResult<User> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
              UPDATE users SET
                  name = COALESCE(?, name),
                  nickname = COALESCE(?, nickname),
                  picture = COALESCE(?, picture),
                  birth_date = COALESCE(?, birth_date),
                  cpf = COALESCE(?, cpf),
                  password_hash = COALESCE(?, password_hash),
                  updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&payload.name)
        .bind(&payload.nickname)
        .bind(&payload.picture)
        .bind(payload.birth_date)
        .bind(&payload.cpf)
        .bind(&payload.password_hash)
        .bind(Utc::now().timestamp())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::UserNotFound {
                user_id: id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(write) = &payload.email {
            let changes = ChangeSet::from(write.clone());
            Self::apply_email_changes(&mut tx, id, &changes).await?;
            log::debug!("User {} e-mails (delete, create, update): {:?}", id, changes.counts());
        }
        if let Some(write) = &payload.telephone {
            let changes = ChangeSet::from(write.clone());
            Self::apply_telephone_changes(&mut tx, id, &changes).await?;
            log::debug!("User {} telephones (delete, create, update): {:?}", id, changes.counts());
        }
        if let Some(write) = &payload.address {
            let changes = ChangeSet::from(write.clone());
            Self::apply_address_changes(&mut tx, id, &changes).await?;
            log::debug!("User {} addresses (delete, create, update): {:?}", id, changes.counts());
        }

        tx.commit().await?;

        log::info!("Updated user {}", id);

        self.require(id, UserIncludes::all()).await
    }

    /// Returns `false` when no such user exists.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn search(&self, query: &SearchQuery) -> DbErrorResult<SearchPage> {
        let pattern = query.search_pattern();

        // Count and page read the same snapshot
        let mut tx = self.pool.begin().await?;

        let total_count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM users u WHERE {}",
            SEARCH_FILTER
        ))
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_one(&mut *tx)
        .await?;

        let sql = format!(
            r#"
              SELECT u.id, u.name, u.nickname, u.cpf, u.birth_date, u.updated_at,
                     (SELECT e.email FROM user_emails e
                       WHERE e.user_id = u.id AND e.is_main = 1
                       ORDER BY e.id LIMIT 1) AS main_email,
                     (SELECT COALESCE(substr(t.full_number, 3),
                                      printf('%02d', t.state_code) || t.number)
                        FROM user_telephones t
                       WHERE t.user_id = u.id AND t.is_main = 1
                       ORDER BY t.id LIMIT 1) AS main_telephone
              FROM users u
              WHERE {}
              ORDER BY {}
              LIMIT ? OFFSET ?
              "#,
            SEARCH_FILTER,
            query.order_by()
        );

        let fetched = sqlx::query(&sql)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(&mut *tx)
            .await?;

        let mut summaries = fetched
            .iter()
            .map(rows::user_summary)
            .collect::<DbErrorResult<Vec<_>>>()?;

        if query.include_main_address {
            for summary in &mut summaries {
                summary.main_address = Self::find_main_address(&mut tx, summary.id).await?;
            }
        }

        tx.commit().await?;

        Ok(SearchPage {
            rows: summaries,
            total_count,
        })
    }

    /// Cheap round trip used by readiness checks.
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn require(&self, id: i64, includes: UserIncludes) -> DbErrorResult<User> {
        self.find_by_id(id, includes)
            .await?
            .ok_or_else(|| DbError::UserNotFound {
                user_id: id,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    // =========================================================================
    // Child reads
    // =========================================================================

    async fn find_emails(&self, user_id: i64) -> DbErrorResult<Vec<Email>> {
        sqlx::query(
            "SELECT id, email, is_main, email_verified FROM user_emails \
             WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(rows::email)
        .collect()
    }

    async fn find_telephones(&self, user_id: i64) -> DbErrorResult<Vec<Telephone>> {
        sqlx::query(
            "SELECT id, is_main, type, country_code, state_code, number, full_number \
             FROM user_telephones WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(rows::telephone)
        .collect()
    }

    async fn find_addresses(&self, user_id: i64) -> DbErrorResult<Vec<Address>> {
        sqlx::query(
            "SELECT id, zip_code, street, number, complement, district, city, state, country, \
             is_main FROM user_addresses WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(rows::address)
        .collect()
    }

    async fn find_main_address(
        tx: &mut Transaction<'_, Sqlite>,
        user_id: i64,
    ) -> DbErrorResult<Option<Address>> {
        sqlx::query(
            "SELECT id, zip_code, street, number, complement, district, city, state, country, \
             is_main FROM user_addresses WHERE user_id = ? AND is_main = 1 ORDER BY id LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await?
        .as_ref()
        .map(rows::address)
        .transpose()
    }

    // =========================================================================
    // Child writes (transaction scoped)
    // =========================================================================

    async fn apply_email_changes(
        tx: &mut Transaction<'_, Sqlite>,
        user_id: i64,
        changes: &ChangeSet<Email>,
    ) -> DbErrorResult<()> {
        Self::delete_children(tx, "user_emails", user_id, &changes.delete).await?;
        for email in &changes.create {
            Self::insert_email(tx, user_id, email).await?;
        }
        for update in &changes.update {
            let result = sqlx::query(
                "UPDATE user_emails SET email = ?, is_main = ?, email_verified = ? \
                 WHERE id = ? AND user_id = ?",
            )
            .bind(&update.data.email)
            .bind(update.data.is_main)
            .bind(update.data.email_verified.map(|dt| dt.timestamp()))
            .bind(update.id)
            .bind(user_id)
            .execute(&mut **tx)
            .await?;

            Self::ensure_updated(result.rows_affected(), "user_emails", update.id, user_id)?;
        }
        Ok(())
    }

    async fn apply_telephone_changes(
        tx: &mut Transaction<'_, Sqlite>,
        user_id: i64,
        changes: &ChangeSet<Telephone>,
    ) -> DbErrorResult<()> {
        Self::delete_children(tx, "user_telephones", user_id, &changes.delete).await?;
        for telephone in &changes.create {
            Self::insert_telephone(tx, user_id, telephone).await?;
        }
        for update in &changes.update {
            let mut telephone = update.data.clone();
            telephone.refresh_full_number();

            let result = sqlx::query(
                r#"
                  UPDATE user_telephones SET
                      is_main = ?, type = ?, country_code = ?, state_code = ?,
                      number = ?, full_number = ?
                  WHERE id = ? AND user_id = ?
                  "#,
            )
            .bind(telephone.is_main)
            .bind(telephone.telephone_type.as_str())
            .bind(telephone.country_code)
            .bind(telephone.state_code)
            .bind(telephone.number)
            .bind(&telephone.full_number)
            .bind(update.id)
            .bind(user_id)
            .execute(&mut **tx)
            .await?;

            Self::ensure_updated(result.rows_affected(), "user_telephones", update.id, user_id)?;
        }
        Ok(())
    }

    async fn apply_address_changes(
        tx: &mut Transaction<'_, Sqlite>,
        user_id: i64,
        changes: &ChangeSet<Address>,
    ) -> DbErrorResult<()> {
        Self::delete_children(tx, "user_addresses", user_id, &changes.delete).await?;
        for address in &changes.create {
            Self::insert_address(tx, user_id, address).await?;
        }
        for update in &changes.update {
            let address = &update.data;
            let result = sqlx::query(
                r#"
                  UPDATE user_addresses SET
                      zip_code = ?, street = ?, number = ?, complement = ?,
                      district = ?, city = ?, state = ?, country = ?, is_main = ?
                  WHERE id = ? AND user_id = ?
                  "#,
            )
            .bind(&address.zip_code)
            .bind(&address.street)
            .bind(address.number)
            .bind(&address.complement)
            .bind(&address.district)
            .bind(&address.city)
            .bind(&address.state)
            .bind(&address.country)
            .bind(address.is_main)
            .bind(update.id)
            .bind(user_id)
            .execute(&mut **tx)
            .await?;

            Self::ensure_updated(result.rows_affected(), "user_addresses", update.id, user_id)?;
        }
        Ok(())
    }

    async fn delete_children(
        tx: &mut Transaction<'_, Sqlite>,
        table: &'static str,
        user_id: i64,
        ids: &[i64],
    ) -> DbErrorResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ? AND user_id = ?", table);
        for id in ids {
            sqlx::query(&sql)
                .bind(id)
                .bind(user_id)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }

    async fn insert_email(
        tx: &mut Transaction<'_, Sqlite>,
        user_id: i64,
        email: &Email,
    ) -> DbErrorResult<()> {
        sqlx::query(
            "INSERT INTO user_emails (user_id, email, is_main, email_verified) VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(&email.email)
        .bind(email.is_main)
        .bind(email.email_verified.map(|dt| dt.timestamp()))
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    async fn insert_telephone(
        tx: &mut Transaction<'_, Sqlite>,
        user_id: i64,
        telephone: &Telephone,
    ) -> DbErrorResult<()> {
        let mut telephone = telephone.clone();
        telephone.refresh_full_number();

        sqlx::query(
            r#"
              INSERT INTO user_telephones (
                  user_id, is_main, type, country_code, state_code, number, full_number
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user_id)
        .bind(telephone.is_main)
        .bind(telephone.telephone_type.as_str())
        .bind(telephone.country_code)
        .bind(telephone.state_code)
        .bind(telephone.number)
        .bind(&telephone.full_number)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    async fn insert_address(
        tx: &mut Transaction<'_, Sqlite>,
        user_id: i64,
        address: &Address,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO user_addresses (
                  user_id, zip_code, street, number, complement,
                  district, city, state, country, is_main
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user_id)
        .bind(&address.zip_code)
        .bind(&address.street)
        .bind(address.number)
        .bind(&address.complement)
        .bind(&address.district)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.country)
        .bind(address.is_main)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    #[track_caller]
    fn ensure_updated(
        rows_affected: u64,
        collection: &'static str,
        id: i64,
        user_id: i64,
    ) -> DbErrorResult<()> {
        if rows_affected == 0 {
            return Err(DbError::ChildNotFound {
                collection,
                id,
                user_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
