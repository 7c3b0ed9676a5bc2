use super::Transaction;

use std::slice;

use chrono::NaiveDate;

/// Lazy, in-order view over the ledger entries dated within `[from, to]`.
/// A `None` bound leaves that side open.
#[derive(Debug, Clone)]
pub struct Passbook<'a> {
    entries: slice::Iter<'a, Transaction>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl<'a> Passbook<'a> {
    pub fn new(ledger: &'a [Transaction], from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            entries: ledger.iter(),
            from,
            to,
        }
    }
}

fn within(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
}

impl<'a> Iterator for Passbook<'a> {
    type Item = &'a Transaction;

    fn next(&mut self) -> Option<Self::Item> {
        let (from, to) = (self.from, self.to);

        return self.entries.find(|tx| within(tx.date(), from, to));
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}
