use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

use super::categories;
use crate::console::format::{format_amount, parse_amount, truncate};
use crate::console::Console;
use crate::db::Database;
use crate::error::InputError;
use crate::models::{group_by_category, total, Kind, Transaction};

const NOTE_WIDTH: usize = 32;

/// What the user asked for at the category prompt of an add flow.
#[derive(Debug, PartialEq, Eq)]
enum Selection<'a> {
    New,
    Delete,
    UpdateLast,
    Index(&'a str),
}

impl<'a> Selection<'a> {
    fn parse(input: &'a str, kind: Kind) -> Self {
        match input.to_lowercase().as_str() {
            "new" => Self::New,
            "delete" => Self::Delete,
            "update" if kind == Kind::Expense => Self::UpdateLast,
            _ => Self::Index(input),
        }
    }
}

/// Add an expense or income record. The category prompt also accepts `new`
/// (create a category and use it), `delete` (remove a category) and, for
/// expenses, `update` (change the amount of the latest expense).
pub(crate) fn record<R: BufRead, W: Write>(
    db: &mut Database,
    console: &mut Console<R, W>,
    kind: Kind,
) -> Result<()> {
    let displayed = categories::show(db, console, kind)?;
    let hint = match kind {
        Kind::Expense => {
            "\nEnter the number of a category,\n\
             or type 'new' to add, 'delete' to remove one,\n\
             or 'update' to modify last expense: "
        }
        Kind::Income => {
            "\nEnter the number of a category,\n\
             or type 'new' to add, 'delete' to remove one: "
        }
    };
    let input = console.prompt(hint)?;

    let category = match Selection::parse(&input, kind) {
        Selection::Delete => return categories::delete(db, console, kind, &displayed),
        Selection::UpdateLast => return update_last_expense(db, console),
        Selection::New => categories::add(db, console, kind)?,
        Selection::Index(index) => categories::pick(&displayed, index)?.name.clone(),
    };

    let example = match kind {
        Kind::Expense => "45.50",
        Kind::Income => "3000.00",
    };
    let amount = read_amount(
        console,
        &format!("Enter the {} amount (e.g., {example}): ", kind.noun()),
    )?;
    let note = console.prompt("Add a note (optional): ")?;
    let note = (!note.is_empty()).then_some(note);

    let txn = Transaction::new(category, amount, note);
    let id = db.insert_transaction(kind, &txn)?;
    tracing::info!(
        kind = kind.noun(),
        id,
        category = %txn.category,
        amount = %txn.amount,
        "transaction recorded"
    );
    console.success(format!(
        "{kind} of {} added under '{}'.",
        format_amount(txn.amount),
        txn.category
    ))?;
    Ok(())
}

/// Show the most recent expense and overwrite its amount. Category and
/// date stay as they were.
pub(crate) fn update_last_expense<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(last) = db.get_latest_expense()? else {
        console.notice("No expense records found.")?;
        return Ok(());
    };

    console.group(format!(
        "Last recorded: {} | {} | {}",
        last.date,
        last.category,
        format_amount(last.amount)
    ))?;
    let amount = read_amount(console, "Enter new amount: ")?;
    let id = last.id.context("Stored expense has no id")?;
    db.update_expense_amount(id, amount)?;
    tracing::info!(id, from = %last.amount, to = %amount, "expense amount updated");
    console.success(format!("Expense updated to {}.", format_amount(amount)))?;
    Ok(())
}

/// List every record of `kind`, newest first.
pub(crate) fn show<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    kind: Kind,
) -> Result<()> {
    let txns = db.get_transactions(kind)?;
    if txns.is_empty() {
        console.notice(format!("No {} records found.", kind.noun()))?;
        return Ok(());
    }

    let sum = total(&txns).ok_or(InputError::AmountOverflow)?;

    console.heading(&format!("📄 Your {kind} Records:"), '-')?;
    for txn in &txns {
        console.line(format!(
            "🗓  {} | 📂 {} | 💰 {}{}",
            txn.date,
            txn.category,
            format_amount(txn.amount),
            note_suffix(txn)
        ))?;
    }
    console.line(format!("Total: {}", format_amount(sum)))?;
    Ok(())
}

/// List every record of `kind` grouped under its category, categories in
/// name order and records newest first within each.
pub(crate) fn show_by_category<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    kind: Kind,
) -> Result<()> {
    let txns = db.get_transactions(kind)?;
    if txns.is_empty() {
        console.notice(format!("No {} records found.", kind.noun()))?;
        return Ok(());
    }

    let groups = group_by_category(&txns)
        .into_iter()
        .map(|(category, group)| {
            let subtotal = total(group.iter().copied())?;
            Some((category, group, subtotal))
        })
        .collect::<Option<Vec<_>>>()
        .ok_or(InputError::AmountOverflow)?;

    console.heading(&format!("🗂  {kind} by Category"), '=')?;
    for (category, group, subtotal) in groups {
        console.group(format!("📁 {category} ({})", format_amount(subtotal)))?;
        for txn in group {
            console.line(format!(
                "   🕓 {}  |  💵 {}{}",
                txn.date,
                format_amount(txn.amount),
                note_suffix(txn)
            ))?;
        }
    }
    Ok(())
}

/// Read an amount. Any parseable number is accepted; zero and negative
/// values are logged but not refused.
pub(crate) fn read_amount<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    message: &str,
) -> Result<Decimal> {
    let input = console.prompt(message)?;
    let amount = parse_amount(&input).ok_or(InputError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        tracing::warn!(%amount, "accepted a non-positive amount");
    }
    Ok(amount)
}

fn note_suffix(txn: &Transaction) -> String {
    match &txn.note {
        Some(note) => format!("  |  📝 {}", truncate(note, NOTE_WIDTH)),
        None => String::new(),
    }
}
