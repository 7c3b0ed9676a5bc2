use bank::clock::{Clock, ManualClock};
use bank::ids::AccountNumber;
use bank::models::{AccountError, TransactionKind};
use bank::{Bank, BankConfig, BankError, Money};

use std::rc::Rc;

use chrono::{Duration, NaiveDate};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn build_bank() -> (Bank, ManualClock) {
    let clock = ManualClock::new(
        NaiveDate::from_ymd_opt(2024, 9, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
    );

    let bank = Bank::with_clock(BankConfig::default(), Rc::new(clock.clone()));

    (bank, clock)
}

fn account_error(err: &anyhow::Error) -> &AccountError {
    err.downcast_ref::<AccountError>()
        .unwrap_or_else(|| panic!("expected AccountError, got {err}"))
}

#[test]
fn savings_scenario() {
    let (mut bank, _clock) = build_bank();

    let account = bank
        .create_account("savings", "Asha", Money::units(10_000))
        .unwrap();

    assert_eq!(account.number(), AccountNumber(1001));
    assert_eq!(account.balance(), Money::units(10_000));
    assert_eq!(account.transactions()[0].kind(), TransactionKind::Open);

    assert_eq!(
        account.withdraw(Money::units(5_000)).unwrap(),
        Money::units(5_000)
    );
    assert_eq!(account.withdrawn_today(), Some(Money::units(5_000)));

    let err = account.withdraw(Money::units(16_000)).unwrap_err();
    assert!(matches!(
        account_error(&err),
        AccountError::InsufficientBalance { .. }
    ));
    assert_eq!(account.balance(), Money::units(5_000));

    assert_eq!(
        account.deposit(Money::units(20_000)).unwrap(),
        Money::units(25_000)
    );

    let err = account.withdraw(Money::units(16_000)).unwrap_err();
    assert!(matches!(
        account_error(&err),
        AccountError::DailyLimitExceeded { .. }
    ));
    assert_eq!(account.balance(), Money::units(25_000));
    assert_eq!(account.transactions().len(), 3);
}

#[test]
fn current_scenario() {
    let (mut bank, _clock) = build_bank();

    let account = bank.create_account("current", "Ravi", Money::ZERO).unwrap();
    assert_eq!(account.balance(), Money::ZERO);

    let err = account.withdraw(Money::units(1)).unwrap_err();
    assert!(matches!(
        account_error(&err),
        AccountError::InsufficientBalance { .. }
    ));

    assert_eq!(account.deposit(Money::units(100)).unwrap(), Money::units(100));
    assert_eq!(account.withdraw(Money::units(100)).unwrap(), Money::ZERO);
}

#[test]
fn lookup_miss_is_a_normal_outcome() {
    let (bank, _clock) = build_bank();

    assert!(bank.get_account(AccountNumber(1001)).is_none());

    let err = bank.find_account(AccountNumber(1001)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BankError>(),
        Some(BankError::AccountNotFound(AccountNumber(1001)))
    ));
}

#[test]
fn balance_and_daily_limit_hold_over_many_operations() {
    let (mut bank, clock) = build_bank();
    let mut rng = StdRng::seed_from_u64(7);

    let initial = Money::units(15_000);
    let daily_limit = Money::units(20_000);
    let number = bank
        .open_savings_account("Asha", initial, daily_limit)
        .unwrap()
        .number();

    let mut deposited = Money::ZERO;
    let mut withdrawn = Money::ZERO;
    let mut withdrawn_on_day = Money::ZERO;
    let mut day = clock.today();

    for _ in 0..2_000 {
        // occasionally move time forward, sometimes across midnight
        if rng.gen_ratio(1, 10) {
            clock.advance(Duration::hours(rng.gen_range(0..30)));
        }

        if clock.today() != day {
            day = clock.today();
            withdrawn_on_day = Money::ZERO;
        }

        let account = bank.find_account_mut(number).unwrap();
        let before = account.balance();
        let entries = account.transactions().len();
        let amount = Money::units(rng.gen_range(1..=9_000));

        if rng.gen_bool(0.5) {
            account.deposit(amount).unwrap();
            deposited.add(&amount).unwrap();
        } else if account.withdraw(amount).is_ok() {
            withdrawn.add(&amount).unwrap();
            withdrawn_on_day.add(&amount).unwrap();
        } else {
            assert_eq!(account.balance(), before);
            assert_eq!(account.transactions().len(), entries);
        }

        let mut expected = initial;
        expected.add(&deposited).unwrap();
        expected.sub(&withdrawn).unwrap();

        assert_eq!(account.balance(), expected);
        assert!(!account.balance().is_negative());
        assert!(withdrawn_on_day <= daily_limit);
        assert_eq!(
            account.transactions().last().unwrap().balance(),
            account.balance()
        );
    }
}

#[test]
fn passbook_filters_by_calendar_day() {
    let (mut bank, clock) = build_bank();
    let opened = clock.today();

    let number = bank
        .create_account("current", "Ravi", Money::units(10))
        .unwrap()
        .number();

    for _ in 0..3 {
        clock.advance(Duration::days(1));
        bank.find_account_mut(number)
            .unwrap()
            .deposit(Money::units(1))
            .unwrap();
    }

    let account = bank.find_account(number).unwrap();
    let day = |offset: i64| opened + Duration::days(offset);

    let dates = |from, to| -> Vec<NaiveDate> {
        account.passbook(from, to).map(|tx| tx.date()).collect()
    };

    assert_eq!(dates(None, None), vec![day(0), day(1), day(2), day(3)]);
    assert_eq!(dates(Some(day(1)), Some(day(2))), vec![day(1), day(2)]);
    assert_eq!(dates(Some(day(3)), None), vec![day(3)]);
    assert_eq!(dates(None, Some(day(0))), vec![day(0)]);
    assert!(dates(Some(day(4)), None).is_empty());

    assert_eq!(dates(Some(day(1)), Some(day(2))), dates(Some(day(1)), Some(day(2))));
}

#[test]
fn account_numbers_strictly_increase() {
    let (mut bank, _clock) = build_bank();

    let mut numbers = vec![];
    for (i, account_type) in ["savings", "current", "bogus", "Savings", "CURRENT"]
        .iter()
        .enumerate()
    {
        let holder_name = format!("Holder {i}");

        if let Ok(account) = bank.create_account(account_type, &holder_name, Money::units(1)) {
            numbers.push(account.number());
        }
    }

    assert_eq!(
        numbers,
        vec![
            AccountNumber(1001),
            AccountNumber(1002),
            AccountNumber(1003),
            AccountNumber(1004)
        ]
    );
}
