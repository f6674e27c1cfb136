pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS expense_categories (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS income_categories (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS expenses (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    category  TEXT NOT NULL REFERENCES expense_categories(name),
    amount    TEXT NOT NULL,
    date      TEXT NOT NULL DEFAULT CURRENT_DATE,
    note      TEXT
);

CREATE TABLE IF NOT EXISTS income (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    category  TEXT NOT NULL REFERENCES income_categories(name),
    amount    TEXT NOT NULL,
    date      TEXT NOT NULL DEFAULT CURRENT_DATE,
    note      TEXT
);

CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(category);
CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
CREATE INDEX IF NOT EXISTS idx_income_category ON income(category);
CREATE INDEX IF NOT EXISTS idx_income_date ON income(date);

CREATE TABLE IF NOT EXISTS budget (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    category       TEXT NOT NULL UNIQUE REFERENCES expense_categories(name),
    budget_amount  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS financial_goals (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    description       TEXT NOT NULL,
    target_amount     TEXT NOT NULL,
    current_progress  TEXT NOT NULL DEFAULT '0'
);
"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[
    // Future migrations go here.
];
