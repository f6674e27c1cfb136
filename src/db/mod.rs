mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::error::InputError;
use crate::models::*;

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        tracing::info!(path = %path.display(), "database opened");
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Close the connection, surfacing any error `Drop` would swallow.
    pub(crate) fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close database")
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database: full schema plus the default categories, once.
            let tx = self.conn.transaction()?;
            tx.execute_batch(schema::SCHEMA_V1)?;
            tx.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            for kind in Kind::all() {
                let sql = format!(
                    "INSERT OR IGNORE INTO {} (name) VALUES (?1)",
                    kind.category_table()
                );
                for name in kind.default_categories() {
                    tx.execute(&sql, params![name])?;
                }
            }
            tx.commit()?;
            tracing::debug!(version = schema::CURRENT_VERSION, "schema created and seeded");
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .optional()?
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
            tracing::debug!(from = current, to = schema::CURRENT_VERSION, "schema migrated");
        }

        Ok(())
    }

    // ── Categories ────────────────────────────────────────────

    /// Categories of `kind` in insertion order.
    pub(crate) fn get_categories(&self, kind: Kind) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, name FROM {} ORDER BY id",
            kind.category_table()
        ))?;
        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: Some(row.get(0)?),
                name: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Insert a category. A name that already exists fails with
    /// [`InputError::DuplicateCategory`] and leaves the table untouched.
    pub(crate) fn insert_category(&self, kind: Kind, name: &str) -> Result<i64> {
        let sql = format!("INSERT INTO {} (name) VALUES (?1)", kind.category_table());
        match self.conn.execute(&sql, params![name]) {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Err(InputError::DuplicateCategory(name.to_string()).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a category together with every transaction filed under it (and,
    /// for expenses, its budget). Returns how many transactions were removed.
    pub(crate) fn delete_category(&mut self, kind: Kind, name: &str) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute(
            &format!("DELETE FROM {} WHERE category = ?1", kind.entry_table()),
            params![name],
        )?;
        if kind == Kind::Expense {
            tx.execute("DELETE FROM budget WHERE category = ?1", params![name])?;
        }
        tx.execute(
            &format!("DELETE FROM {} WHERE name = ?1", kind.category_table()),
            params![name],
        )?;
        tx.commit()?;
        Ok(removed)
    }

    // ── Transactions ──────────────────────────────────────────

    pub(crate) fn insert_transaction(&self, kind: Kind, txn: &Transaction) -> Result<i64> {
        self.conn.execute(
            &format!(
                "INSERT INTO {} (category, amount, date, note) VALUES (?1, ?2, ?3, ?4)",
                kind.entry_table()
            ),
            params![txn.category, txn.amount.to_string(), txn.date, txn.note],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All transactions of `kind`, newest first.
    pub(crate) fn get_transactions(&self, kind: Kind) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, category, amount, date, note FROM {} ORDER BY date DESC, id DESC",
            kind.entry_table()
        ))?;
        let rows = stmt.query_map([], row_to_transaction)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// The most recently dated expense; the highest id wins a tie.
    pub(crate) fn get_latest_expense(&self) -> Result<Option<Transaction>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, category, amount, date, note FROM expenses
                 ORDER BY date DESC, id DESC LIMIT 1",
                [],
                row_to_transaction,
            )
            .optional()?)
    }

    pub(crate) fn update_expense_amount(&self, id: i64, amount: Decimal) -> Result<()> {
        self.conn.execute(
            "UPDATE expenses SET amount = ?1 WHERE id = ?2",
            params![amount.to_string(), id],
        )?;
        Ok(())
    }

    // ── Budgets ───────────────────────────────────────────────

    pub(crate) fn get_budgets(&self) -> Result<Vec<Budget>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, category, budget_amount FROM budget ORDER BY category")?;
        let rows = stmt.query_map([], |row| {
            Ok(Budget {
                id: Some(row.get(0)?),
                category: row.get(1)?,
                amount: amount_at(row, 2)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Insert the budget, or overwrite the amount if the category already has one.
    pub(crate) fn upsert_budget(&self, budget: &Budget) -> Result<()> {
        self.conn.execute(
            "INSERT INTO budget (category, budget_amount)
             VALUES (?1, ?2)
             ON CONFLICT(category) DO UPDATE SET budget_amount = excluded.budget_amount",
            params![budget.category, budget.amount.to_string()],
        )?;
        Ok(())
    }

    /// Every budget with the all-time sum of its category's expenses.
    /// Amounts are added as decimals; a sum out of range is an
    /// [`InputError::AmountOverflow`].
    pub(crate) fn get_budget_statuses(&self) -> Result<Vec<BudgetStatus>> {
        let mut stmt = self
            .conn
            .prepare("SELECT amount FROM expenses WHERE category = ?1")?;
        self.get_budgets()?
            .into_iter()
            .map(|budget| -> Result<BudgetStatus> {
                let amounts = stmt
                    .query_map(params![budget.category], |row| amount_at(row, 0))?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                let spent = checked_sum(amounts).ok_or(InputError::AmountOverflow)?;
                Ok(BudgetStatus {
                    category: budget.category,
                    budget: budget.amount,
                    spent,
                })
            })
            .collect()
    }

    // ── Goal ──────────────────────────────────────────────────

    /// Replace whatever goal exists with `goal`. Returns the new row id.
    pub(crate) fn replace_goal(&mut self, goal: &Goal) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM financial_goals", [])?;
        tx.execute(
            "INSERT INTO financial_goals (description, target_amount, current_progress)
             VALUES (?1, ?2, ?3)",
            params![
                goal.description,
                goal.target_amount.to_string(),
                goal.current_progress.to_string(),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    pub(crate) fn get_goal(&self) -> Result<Option<Goal>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, description, target_amount, current_progress
                 FROM financial_goals ORDER BY id DESC LIMIT 1",
                [],
                |row| {
                    Ok(Goal {
                        id: Some(row.get(0)?),
                        description: row.get(1)?,
                        target_amount: amount_at(row, 2)?,
                        current_progress: amount_at(row, 3)?,
                    })
                },
            )
            .optional()?)
    }

    /// The active goal with live totals, or `None` when no goal is set.
    pub(crate) fn get_goal_progress(&self) -> Result<Option<GoalProgress>> {
        let Some(goal) = self.get_goal()? else {
            return Ok(None);
        };
        Ok(Some(GoalProgress {
            goal,
            total_income: self.get_total(Kind::Income)?,
            total_expenses: self.get_total(Kind::Expense)?,
        }))
    }

    // ── Analytics ─────────────────────────────────────────────

    /// All-time sum of every transaction of `kind`.
    pub(crate) fn get_total(&self, kind: Kind) -> Result<Decimal> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT amount FROM {}", kind.entry_table()))?;
        let amounts = stmt
            .query_map([], |row| amount_at(row, 0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        let total = checked_sum(amounts).ok_or(InputError::AmountOverflow)?;
        Ok(total)
    }

    #[cfg(test)]
    pub(crate) fn count_rows(&self, table: &str) -> Result<i64> {
        Ok(self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?)
    }
}

fn row_to_transaction(row: &rusqlite::Row<'_>) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: Some(row.get(0)?),
        category: row.get(1)?,
        amount: amount_at(row, 2)?,
        date: row.get(3)?,
        note: row.get(4)?,
    })
}

/// Read a TEXT amount column. Text that is not a decimal is a conversion
/// error, never zero.
fn amount_at(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let text: String = row.get(idx)?;
    Decimal::from_str(&text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
