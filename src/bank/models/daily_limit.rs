use crate::{Money, Result};

use chrono::NaiveDate;

/// Running total of a savings account's withdrawals for one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyLimit {
    limit: Money,
    withdrawn_today: Money,
    day: NaiveDate,
}

impl DailyLimit {
    pub fn new(limit: Money, today: NaiveDate) -> Self {
        Self {
            limit,
            withdrawn_today: Money::ZERO,
            day: today,
        }
    }

    pub fn limit(&self) -> Money {
        self.limit
    }

    pub fn withdrawn_today(&self) -> Money {
        self.withdrawn_today
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Clears the running total if `today` is a different calendar day than the one being tracked
    pub fn roll_over(&mut self, today: NaiveDate) {
        if today != self.day {
            log::debug!(
                "Daily limit rolled over from {} to {today}, clearing {} withdrawn",
                self.day,
                self.withdrawn_today
            );

            self.withdrawn_today = Money::ZERO;
            self.day = today;
        }
    }

    /// Whether withdrawing `amount` on top of today's total would go past the limit
    pub fn would_exceed(&self, amount: &Money) -> Result<bool> {
        let mut total = self.withdrawn_today;
        total.add(amount)?;

        return Ok(total > self.limit);
    }

    pub fn record(&mut self, amount: &Money) -> Result {
        self.withdrawn_today.add(amount)
    }
}
