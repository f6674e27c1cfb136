use anyhow::Result;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

use crate::console::format::{format_amount, format_percent, parse_amount};
use crate::console::Console;
use crate::db::Database;
use crate::error::InputError;
use crate::models::{title_case, Goal, Milestone};

/// Replace the single financial goal with a new description and target.
pub(crate) fn set<R: BufRead, W: Write>(
    db: &mut Database,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.title("🎯 Set Your Single Financial Goal")?;

    let description = title_case(&console.prompt("Enter your goal description: ")?);
    if description.is_empty() {
        return Err(InputError::Empty("Goal description").into());
    }

    let input = console.prompt("Enter your savings target (e.g., 5000.00): ")?;
    let target = parse_amount(&input).ok_or(InputError::NotANumber)?;
    if target <= Decimal::ZERO {
        return Err(InputError::NonPositiveTarget.into());
    }

    let goal = Goal::new(description, target);
    let id = db.replace_goal(&goal)?;
    tracing::info!(id, description = %goal.description, target = %goal.target_amount, "goal set");
    console.success(format!(
        "Goal '{}' set with target {}.",
        goal.description,
        format_amount(goal.target_amount)
    ))?;
    Ok(())
}

/// Show live progress: all income minus all expenses, against the target.
pub(crate) fn view<R: BufRead, W: Write>(db: &Database, console: &mut Console<R, W>) -> Result<()> {
    let Some(progress) = db.get_goal_progress()? else {
        console.notice("No financial goal set.")?;
        return Ok(());
    };

    let (savings, percent) = progress
        .savings()
        .zip(progress.percent())
        .ok_or(InputError::AmountOverflow)?;

    console.heading("📈 Financial Goal Progress", '-')?;
    console.group(format!("🎯 {}", progress.goal.description))?;
    console.line(format!(
        "   Target:   {}",
        format_amount(progress.goal.target_amount)
    ))?;
    console.line(format!("   Saved:    {}", format_amount(savings)))?;
    console.line(format!(
        "   Progress: {} {}",
        format_percent(percent),
        Milestone::for_percent(percent).icon()
    ))?;
    Ok(())
}
