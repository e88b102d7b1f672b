//! Budget ledger
//!
//! Tracks a monetary cap, a running total, and a categorized expense
//! history. The running total is cached incrementally and always equals the
//! sum of the recorded expenses; a failed admission leaves the ledger
//! untouched.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{PlannerError, PlannerResult};

use super::expense::{Expense, ExpenseCategory};
use super::money::Money;

/// A bounded spending ledger owned by one trip
#[derive(Debug, Clone, Serialize)]
pub struct Budget {
    total_limit: Money,
    current_spending: Money,
    expenses: Vec<Expense>,
}

impl Budget {
    /// Create a budget with a positive cap
    pub fn new(total_limit: Money) -> PlannerResult<Self> {
        if !total_limit.is_positive() {
            return Err(PlannerError::InvalidArgument(
                "Budget limit must be positive".into(),
            ));
        }
        Ok(Self {
            total_limit,
            current_spending: Money::zero(),
            expenses: Vec::new(),
        })
    }

    /// Record an expense, or fail with no effect on the ledger
    ///
    /// Fails with `InvalidArgument` for a non-positive amount and with
    /// `BudgetExceeded` when the cap would be breached.
    pub fn add_expense(
        &mut self,
        amount: Money,
        description: impl Into<String>,
        category: ExpenseCategory,
    ) -> PlannerResult<()> {
        self.admit(amount)?;
        self.expenses.push(Expense::new(amount, description, category));
        self.current_spending += amount;
        Ok(())
    }

    fn admit(&self, amount: Money) -> PlannerResult<()> {
        if !amount.is_positive() {
            return Err(PlannerError::InvalidArgument(
                "Expense amount must be positive".into(),
            ));
        }
        if self.current_spending + amount > self.total_limit {
            return Err(PlannerError::BudgetExceeded {
                attempted: amount,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Pure admission predicate: would this amount fit under the cap?
    pub fn can_afford(&self, amount: Money) -> bool {
        self.current_spending + amount <= self.total_limit
    }

    pub fn remaining(&self) -> Money {
        self.total_limit - self.current_spending
    }

    pub fn current_spending(&self) -> Money {
        self.current_spending
    }

    pub fn total_limit(&self) -> Money {
        self.total_limit
    }

    /// Spent share of the cap, in percent
    pub fn spending_percentage(&self) -> f64 {
        (self.current_spending.kurus() as f64 / self.total_limit.kurus() as f64) * 100.0
    }

    /// Snapshot of the expense history
    pub fn expenses(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// Per-category totals, recomputed from the expense list
    ///
    /// Keys iterate in category declaration order, so renderings are
    /// deterministic.
    pub fn spending_by_category(&self) -> BTreeMap<ExpenseCategory, Money> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            let entry = totals.entry(expense.category()).or_insert_with(Money::zero);
            *entry += expense.amount();
        }
        totals
    }

    /// Deterministic text projection of the ledger state
    pub fn report(&self) -> String {
        use crate::display::report::{double_separator, separator};

        let mut out = String::new();
        out.push_str(&double_separator(39));
        out.push('\n');
        out.push_str("           BUDGET REPORT\n");
        out.push_str(&double_separator(39));
        out.push('\n');
        out.push_str(&format!("Total Limit   : {}\n", self.total_limit));
        out.push_str(&format!(
            "Spent         : {} ({:.1}%)\n",
            self.current_spending,
            self.spending_percentage()
        ));
        out.push_str(&format!("Remaining     : {}\n", self.remaining()));
        out.push_str(&separator(39));
        out.push('\n');

        if self.expenses.is_empty() {
            out.push_str("No expenses yet.\n");
        } else {
            out.push_str("By Category:\n");
            for (category, total) in self.spending_by_category() {
                out.push_str(&format!("  • {}: {}\n", category, total));
            }
            out.push_str(&separator(39));
            out.push('\n');
            out.push_str("All Expenses:\n");
            for expense in &self.expenses {
                out.push_str(&format!("  {}\n", expense));
            }
        }

        out.push_str(&double_separator(39));
        out
    }
}
