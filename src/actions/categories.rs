use anyhow::Result;
use std::io::{BufRead, Write};

use crate::console::Console;
use crate::db::Database;
use crate::error::InputError;
use crate::models::{Category, Kind};

/// Print the categories of `kind` as a 1-based list and return them in the
/// order shown, so a later index refers to what the user saw.
pub(crate) fn show<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    kind: Kind,
) -> Result<Vec<Category>> {
    let categories = db.get_categories(kind)?;
    console.title(&format!("📂 {kind} Categories:"))?;
    if categories.is_empty() {
        console.notice("No categories found yet.")?;
    }
    for (i, category) in categories.iter().enumerate() {
        console.line(format!("{}. {category}", i + 1))?;
    }
    Ok(categories)
}

/// Prompt for a new category name and store it. Returns the stored name.
pub(crate) fn add<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    kind: Kind,
) -> Result<String> {
    let raw = console.prompt(&format!("Enter the new {} category name: ", kind.noun()))?;
    let name = Category::normalize_name(&raw).ok_or(InputError::Empty("Category name"))?;
    db.insert_category(kind, &name)?;
    tracing::info!(kind = kind.noun(), category = %name, "category added");
    console.success(format!("New category '{name}' added."))?;
    Ok(name)
}

/// Delete one of the `displayed` categories after confirmation, along with
/// every transaction filed under it.
pub(crate) fn delete<R: BufRead, W: Write>(
    db: &mut Database,
    console: &mut Console<R, W>,
    kind: Kind,
    displayed: &[Category],
) -> Result<()> {
    let input = console.prompt("Enter the number of the category to delete: ")?;
    let category = pick(displayed, &input)?;

    let answer = console.prompt(&format!(
        "Are you sure you want to delete '{category}'? This cannot be undone. (y/n): "
    ))?;
    if !answer.eq_ignore_ascii_case("y") {
        console.notice("Deletion cancelled.")?;
        return Ok(());
    }

    let removed = db.delete_category(kind, &category.name)?;
    tracing::info!(
        kind = kind.noun(),
        category = %category.name,
        removed,
        "category deleted"
    );
    console.success(format!(
        "Category '{category}' and its {} deleted ({removed} removed).",
        plural(kind)
    ))?;
    Ok(())
}

/// `new` creates a category inline; anything else is a 1-based index into
/// `displayed`. Returns the chosen category's name.
pub(crate) fn choose<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    kind: Kind,
    displayed: &[Category],
    selection: &str,
) -> Result<String> {
    if selection.trim().eq_ignore_ascii_case("new") {
        add(db, console, kind)
    } else {
        Ok(pick(displayed, selection)?.name.clone())
    }
}

/// Resolve a 1-based index typed by the user.
pub(crate) fn pick<'a>(categories: &'a [Category], input: &str) -> Result<&'a Category, InputError> {
    let index: i64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| categories.get(i))
        .ok_or(InputError::OutOfRange)
}

fn plural(kind: Kind) -> &'static str {
    match kind {
        Kind::Expense => "expenses",
        Kind::Income => "income records",
    }
}
