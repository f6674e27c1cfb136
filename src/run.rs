mod menu;

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::actions::{budgets, goals, transactions};
use crate::console::Console;
use crate::db::Database;
use crate::error::InputError;
use crate::models::Kind;

use menu::MenuOption;

/// Show the main menu and dispatch until the user quits or input ends.
///
/// Input mistakes are reported and the menu comes back; any other error
/// stops the loop and is returned.
pub(crate) fn as_menu<R: BufRead, W: Write>(
    db: &mut Database,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        print_menu(console)?;
        let option = match console.read_line()? {
            // Closed input behaves like Quit.
            None => MenuOption::Quit,
            Some(input) => match MenuOption::parse(&input) {
                Some(option) => option,
                None => {
                    console.error(InputError::UnknownMenuOption)?;
                    continue;
                }
            },
        };

        if option == MenuOption::Quit {
            console.blank()?;
            console.good("Goodbye from Budgets Are Us! 💸")?;
            return Ok(());
        }

        tracing::debug!(?option, "menu option selected");
        if let Err(e) = dispatch(option, db, console) {
            match e.downcast::<InputError>() {
                Ok(input_error) => console.error(input_error)?,
                Err(e) => return Err(e),
            }
        }
    }
}

fn dispatch<R: BufRead, W: Write>(
    option: MenuOption,
    db: &mut Database,
    console: &mut Console<R, W>,
) -> Result<()> {
    match option {
        MenuOption::AddExpense => transactions::record(db, console, Kind::Expense),
        MenuOption::ViewExpenses => transactions::show(db, console, Kind::Expense),
        MenuOption::ViewExpensesByCategory => {
            transactions::show_by_category(db, console, Kind::Expense)
        }
        MenuOption::AddIncome => transactions::record(db, console, Kind::Income),
        MenuOption::ViewIncome => transactions::show(db, console, Kind::Income),
        MenuOption::ViewIncomeByCategory => {
            transactions::show_by_category(db, console, Kind::Income)
        }
        MenuOption::SetBudget => budgets::set(db, console),
        MenuOption::ViewBudget => budgets::view(db, console),
        MenuOption::SetGoal => goals::set(db, console),
        MenuOption::ViewGoal => goals::view(db, console),
        MenuOption::Quit => Ok(()),
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.title("Select one of the following options:")?;
    for option in MenuOption::all() {
        console.line(option)?;
    }
    console.ask("\n: ")
}

#[cfg(test)]
mod tests;
