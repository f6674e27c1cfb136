//! The interactive flows behind each menu option. Each one reads what it
//! needs from the console, talks to the database, prints the outcome and
//! returns; invalid input comes back as an [`InputError`](crate::error::InputError).

pub(crate) mod budgets;
pub(crate) mod categories;
pub(crate) mod goals;
pub(crate) mod transactions;
