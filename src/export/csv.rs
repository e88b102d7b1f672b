//! CSV export of a budget's expense ledger

use std::io::Write;

use crate::error::PlannerResult;
use crate::models::Budget;

/// Write the expense history as CSV: date, category, description, amount
pub fn export_expenses_csv<W: Write>(budget: &Budget, writer: &mut W) -> PlannerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Date", "Category", "Description", "Amount"])?;

    for expense in budget.expenses() {
        csv_writer.write_record([
            expense.recorded_at().format("%Y-%m-%d").to_string(),
            expense.category().to_string(),
            expense.description().to_string(),
            expense.amount().unsuffixed(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};

    #[test]
    fn test_export_matches_ledger() {
        let mut budget = Budget::new(Money::from_lira(10_000)).unwrap();
        budget
            .add_expense(
                Money::from_lira(4040),
                "Transport: Istanbul → Paris",
                ExpenseCategory::Transport,
            )
            .unwrap();
        budget
            .add_expense(
                Money::from_lira_kurus(17, 50),
                "Sightseeing: Louvre",
                ExpenseCategory::Sightseeing,
            )
            .unwrap();

        let mut buffer = Vec::new();
        export_expenses_csv(&budget, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Date,Category,Description,Amount"));
        let first = lines.next().unwrap();
        assert!(first.contains("Transport"));
        assert!(first.contains("4040.00"));
        let second = lines.next().unwrap();
        assert!(second.contains("Sightseeing: Louvre"));
        assert!(second.contains("17.50"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_ledger_exports_header_only() {
        let budget = Budget::new(Money::from_lira(100)).unwrap();
        let mut buffer = Vec::new();
        export_expenses_csv(&budget, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Date,Category,Description,Amount\n"
        );
    }
}
