#![allow(clippy::unwrap_used)]

use std::io::Cursor;

use rust_decimal_macros::dec;

use super::*;
use crate::console::scripted;

fn run_script(db: &mut Database, lines: &[&str]) -> String {
    let mut console = scripted(lines);
    as_menu(db, &mut console).unwrap();
    console.output()
}

#[test]
fn test_menu_option_parse() {
    assert_eq!(MenuOption::parse("1"), Some(MenuOption::AddExpense));
    assert_eq!(MenuOption::parse(" 10 "), Some(MenuOption::ViewGoal));
    assert_eq!(MenuOption::parse("11"), Some(MenuOption::Quit));
    assert_eq!(MenuOption::parse("0"), None);
    assert_eq!(MenuOption::parse("12"), None);
    assert_eq!(MenuOption::parse("01"), None);
    assert_eq!(MenuOption::parse("quit"), None);
    assert_eq!(MenuOption::parse(""), None);
}

#[test]
fn test_menu_lists_every_option_in_order() {
    let mut db = Database::open_in_memory().unwrap();
    let out = run_script(&mut db, &["11"]);
    let mut last = 0;
    for option in MenuOption::all() {
        let pos = out.find(&option.to_string()).unwrap();
        assert!(pos >= last);
        last = pos;
    }
    assert!(out.contains("11 - Quit"));
    assert!(out.contains("Goodbye from Budgets Are Us!"));
}

#[test]
fn test_unknown_option_keeps_looping() {
    let mut db = Database::open_in_memory().unwrap();
    let out = run_script(&mut db, &["abc", "42", "11"]);
    assert_eq!(
        out.matches("You have entered an invalid number. Please try again.")
            .count(),
        2
    );
    assert!(out.contains("Goodbye from Budgets Are Us!"));
}

#[test]
fn test_end_of_input_quits() {
    let mut db = Database::open_in_memory().unwrap();
    let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
    as_menu(&mut db, &mut console).unwrap();
    assert!(console.output().contains("Goodbye from Budgets Are Us!"));
}

#[test]
fn test_input_error_returns_to_menu() {
    let mut db = Database::open_in_memory().unwrap();
    let out = run_script(&mut db, &["1", "99", "4", "2", "not money", "11"]);
    assert!(out.contains("Invalid category number."));
    assert!(out.contains("Amount must be a valid number."));
    assert!(out.contains("Goodbye from Budgets Are Us!"));
    assert!(db.get_transactions(Kind::Expense).unwrap().is_empty());
    assert!(db.get_transactions(Kind::Income).unwrap().is_empty());
}

#[test]
fn test_budget_for_new_category_then_spend() {
    let mut db = Database::open_in_memory().unwrap();
    let out = run_script(
        &mut db,
        &["7", "new", "rent", "1000.00", "1", "6", "250.00", "", "8", "11"],
    );

    assert!(out.contains("New category 'Rent' added."));
    assert!(out.contains("6. Rent"));
    assert!(out.contains("📁 Rent"));
    assert!(out.contains("Budget:     R1000.00"));
    assert!(out.contains("Spent:      R250.00"));
    assert!(out.contains("Remaining:  R750.00"));

    let budgets = db.get_budgets().unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0].amount, dec!(1000.00));
}

#[test]
fn test_goal_reached_from_income_minus_expenses() {
    let mut db = Database::open_in_memory().unwrap();
    let out = run_script(
        &mut db,
        &[
            "9", "save", "500.00", "4", "1", "800.00", "", "1", "1", "300.00", "", "10", "11",
        ],
    );

    assert!(out.contains("🎯 Save"));
    assert!(out.contains("Saved:    R500.00"));
    assert!(out.contains("Progress: 100.0% 🎯"));
}

#[test]
fn test_listings_through_menu() {
    let mut db = Database::open_in_memory().unwrap();
    let out = run_script(
        &mut db,
        &[
            "1", "1", "12.50", "lunch", "1", "2", "7.25", "", "1", "1", "3.00", "", "2", "3", "11",
        ],
    );

    assert!(out.contains("📄 Your Expense Records:"));
    assert!(out.contains("Total: R22.75"));
    assert!(out.contains("📝 lunch"));
    assert!(out.contains("🗂  Expense by Category"));
    assert!(out.contains("📁 Food (R15.50)"));
    assert!(out.contains("📁 Transport (R7.25)"));
}

#[test]
fn test_empty_views_are_informational() {
    let mut db = Database::open_in_memory().unwrap();
    let out = run_script(&mut db, &["2", "5", "6", "8", "10", "11"]);
    assert!(out.contains("No expense records found."));
    assert!(out.contains("No income records found."));
    assert!(out.contains("No budgets have been set yet."));
    assert!(out.contains("No financial goal set."));
}

#[test]
fn test_invalid_utf8_line_is_an_unknown_option() {
    let mut db = Database::open_in_memory().unwrap();
    let mut console = Console::new(Cursor::new(b"\xff\xfe\n2\n11\n".to_vec()), Vec::new());
    as_menu(&mut db, &mut console).unwrap();
    let out = console.output();
    assert_eq!(
        out.matches("You have entered an invalid number. Please try again.")
            .count(),
        1
    );
    assert!(out.contains("No expense records found."));
    assert!(out.contains("Goodbye from Budgets Are Us!"));
}

#[test]
fn test_overflowing_listing_totals_are_reported() {
    let mut db = Database::open_in_memory().unwrap();
    let max = "79228162514264337593543950335";
    let out = run_script(
        &mut db,
        &["1", "1", max, "", "1", "1", max, "", "2", "3", "11"],
    );
    assert_eq!(
        out.matches("Amounts are too large to add up.").count(),
        2
    );
    assert!(out.contains("Goodbye from Budgets Are Us!"));
    assert_eq!(db.get_transactions(Kind::Expense).unwrap().len(), 2);
}

#[test]
fn test_overflowing_goal_savings_are_reported() {
    let mut db = Database::open_in_memory().unwrap();
    let out = run_script(
        &mut db,
        &[
            "9",
            "save",
            "100",
            "4",
            "1",
            "79228162514264337593543950335",
            "",
            "1",
            "1",
            "-79228162514264337593543950335",
            "",
            "10",
            "11",
        ],
    );
    assert!(out.contains("Amounts are too large to add up."));
    assert!(!out.contains("Saved:"));
    assert!(out.contains("Goodbye from Budgets Are Us!"));
}

#[test]
fn test_budget_spent_beyond_i64_keeps_session() {
    let mut db = Database::open_in_memory().unwrap();
    let big = "9223372036854775807";
    let out = run_script(
        &mut db,
        &[
            "7", "1", "100", "1", "1", big, "", "1", "1", big, "", "8", "2", "11",
        ],
    );
    assert!(out.contains("Spent:      R18446744073709551614.00"));
    assert!(out.contains("Over by:    R18446744073709551514.00"));
    assert!(out.contains("Total: R18446744073709551614.00"));
    assert!(out.contains("Goodbye from Budgets Are Us!"));
}

#[test]
fn test_overflowing_budget_spent_is_reported() {
    let mut db = Database::open_in_memory().unwrap();
    let max = "79228162514264337593543950335";
    let out = run_script(
        &mut db,
        &["7", "1", "100", "1", "1", max, "", "1", "1", max, "", "8", "11"],
    );
    assert!(out.contains("Amounts are too large to add up."));
    assert!(!out.contains("Spent:"));
    assert!(out.contains("Goodbye from Budgets Are Us!"));
}
