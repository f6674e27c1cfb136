/// Which side of the ledger a category or transaction belongs to.
///
/// Expense and income categories are separate namespaces with their own
/// tables, so every storage call is keyed by a `Kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Expense,
    Income,
}

impl Kind {
    pub fn category_table(&self) -> &'static str {
        match self {
            Self::Expense => "expense_categories",
            Self::Income => "income_categories",
        }
    }

    pub fn entry_table(&self) -> &'static str {
        match self {
            Self::Expense => "expenses",
            Self::Income => "income",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    /// Categories inserted when the store is first created.
    pub fn default_categories(&self) -> &'static [&'static str] {
        match self {
            Self::Expense => &["Food", "Transport", "Utilities", "Entertainment", "Health"],
            Self::Income => &["Salary", "Freelance", "Investment", "Bonus", "Other"],
        }
    }

    pub fn all() -> &'static [Kind] {
        &[Self::Expense, Self::Income]
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
