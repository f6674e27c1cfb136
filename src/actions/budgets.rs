use anyhow::Result;
use std::io::{BufRead, Write};

use super::{categories, transactions::read_amount};
use crate::console::format::format_amount;
use crate::console::Console;
use crate::db::Database;
use crate::error::InputError;
use crate::models::{Budget, Kind, Standing};

/// Pick (or create) an expense category and set its monthly budget,
/// replacing any amount set before.
pub(crate) fn set<R: BufRead, W: Write>(db: &Database, console: &mut Console<R, W>) -> Result<()> {
    console.title("🧾 Set Budget for a Category")?;
    let displayed = categories::show(db, console, Kind::Expense)?;
    let selection =
        console.prompt("\nEnter the number of a category, or type 'new' to add one: ")?;
    let category = categories::choose(db, console, Kind::Expense, &displayed, &selection)?;

    if let Some(current) = db.get_budgets()?.iter().find(|b| b.category == category) {
        console.line(format!(
            "Current budget for '{category}': {}",
            format_amount(current.amount)
        ))?;
    }

    let amount = read_amount(console, "Enter the monthly budget amount (e.g., 1200.00): ")?;
    let budget = Budget::new(category, amount);
    db.upsert_budget(&budget)?;
    tracing::info!(category = %budget.category, amount = %budget.amount, "budget set");
    console.success(format!(
        "Budget of {} set for '{}'.",
        format_amount(budget.amount),
        budget.category
    ))?;
    Ok(())
}

/// Show every budget against what has been spent in its category.
pub(crate) fn view<R: BufRead, W: Write>(db: &Database, console: &mut Console<R, W>) -> Result<()> {
    let statuses = db.get_budget_statuses()?;
    if statuses.is_empty() {
        console.notice("No budgets have been set yet.")?;
        return Ok(());
    }

    let standings = statuses
        .iter()
        .map(|status| status.standing().map(|standing| (status, standing)))
        .collect::<Option<Vec<_>>>()
        .ok_or(InputError::AmountOverflow)?;

    console.heading("📊 Budget Overview", '-')?;
    for (status, standing) in standings {
        console.group(format!("📁 {}", status.category))?;
        console.line(format!("   💰 Budget:     {}", format_amount(status.budget)))?;
        console.line(format!("   💸 Spent:      {}", format_amount(status.spent)))?;
        match standing {
            Standing::Remaining(left) => {
                console.good(format!("   ✅ Remaining:  {}", format_amount(left)))?
            }
            Standing::Over(by) => console.bad(format!("   🔴 Over by:    {}", format_amount(by)))?,
        }
    }
    Ok(())
}
