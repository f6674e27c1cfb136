use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Goal {
    pub id: Option<i64>,
    pub description: String,
    pub target_amount: Decimal,
    /// Written once as zero and never updated. Use [`GoalProgress`] instead.
    pub current_progress: Decimal,
}

impl Goal {
    pub fn new(description: String, target_amount: Decimal) -> Self {
        Self {
            id: None,
            description,
            target_amount,
            current_progress: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Reached,
    Halfway,
    Behind,
}

impl Milestone {
    pub fn for_percent(percent: Decimal) -> Self {
        if percent >= Decimal::ONE_HUNDRED {
            Self::Reached
        } else if percent >= Decimal::from(50) {
            Self::Halfway
        } else {
            Self::Behind
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Reached => "🎯",
            Self::Halfway => "📈",
            Self::Behind => "⚠️",
        }
    }
}

/// Live progress toward a goal, derived from all recorded income and expenses.
#[derive(Debug, Clone)]
pub struct GoalProgress {
    pub goal: Goal,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
}

impl GoalProgress {
    /// Income minus expenses, `None` on overflow.
    pub fn savings(&self) -> Option<Decimal> {
        self.total_income.checked_sub(self.total_expenses)
    }

    /// Savings as a percentage of the target; zero when the target is not
    /// positive, `None` when the result does not fit.
    pub fn percent(&self) -> Option<Decimal> {
        let target = self.goal.target_amount;
        if target <= Decimal::ZERO {
            return Some(Decimal::ZERO);
        }
        self.savings()?
            .checked_div(target)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }
}
