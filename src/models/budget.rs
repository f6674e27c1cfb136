use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Budget {
    pub id: Option<i64>,
    pub category: String,
    pub amount: Decimal,
}

impl Budget {
    pub fn new(category: String, amount: Decimal) -> Self {
        Self {
            id: None,
            category,
            amount,
        }
    }
}

/// A budget row joined with what has been spent against it.
#[derive(Debug, Clone)]
pub struct BudgetStatus {
    pub category: String,
    pub budget: Decimal,
    pub spent: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Remaining(Decimal),
    /// Always non-negative.
    Over(Decimal),
}

impl BudgetStatus {
    /// Budget minus spent, `None` on overflow.
    pub fn remaining(&self) -> Option<Decimal> {
        self.budget.checked_sub(self.spent)
    }

    pub fn standing(&self) -> Option<Standing> {
        let remaining = self.remaining()?;
        Some(if remaining >= Decimal::ZERO {
            Standing::Remaining(remaining)
        } else {
            Standing::Over(remaining.abs())
        })
    }
}
