/// One entry of the main menu, decoded once from what the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuOption {
    AddExpense,
    ViewExpenses,
    ViewExpensesByCategory,
    AddIncome,
    ViewIncome,
    ViewIncomeByCategory,
    SetBudget,
    ViewBudget,
    SetGoal,
    ViewGoal,
    Quit,
}

impl MenuOption {
    pub(crate) fn all() -> &'static [MenuOption] {
        &[
            Self::AddExpense,
            Self::ViewExpenses,
            Self::ViewExpensesByCategory,
            Self::AddIncome,
            Self::ViewIncome,
            Self::ViewIncomeByCategory,
            Self::SetBudget,
            Self::ViewBudget,
            Self::SetGoal,
            Self::ViewGoal,
            Self::Quit,
        ]
    }

    pub(crate) fn code(&self) -> &'static str {
        match self {
            Self::AddExpense => "1",
            Self::ViewExpenses => "2",
            Self::ViewExpensesByCategory => "3",
            Self::AddIncome => "4",
            Self::ViewIncome => "5",
            Self::ViewIncomeByCategory => "6",
            Self::SetBudget => "7",
            Self::ViewBudget => "8",
            Self::SetGoal => "9",
            Self::ViewGoal => "10",
            Self::Quit => "11",
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::ViewExpenses => "View Expenses",
            Self::ViewExpensesByCategory => "View Expenses by Category",
            Self::AddIncome => "Add Income",
            Self::ViewIncome => "View Income",
            Self::ViewIncomeByCategory => "View Income by Category",
            Self::SetBudget => "Set Budget for a Category",
            Self::ViewBudget => "View Budget for a Category",
            Self::SetGoal => "Set Financial Goals",
            Self::ViewGoal => "View Progress Towards Financial Goals",
            Self::Quit => "Quit",
        }
    }

    /// Exact match on the option code after trimming; "01" or "one" do not count.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::all().iter().copied().find(|o| o.code() == input)
    }
}

impl std::fmt::Display for MenuOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code(), self.label())
    }
}
