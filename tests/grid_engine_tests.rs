mod common;

use chrono::NaiveDate;
use journal_input::errors::JournalError;
use journal_input::logic::{Blocker, GridEngine};

fn engine() -> GridEngine {
    GridEngine::new(common::reference_data())
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

fn first_two_ids(engine: &GridEngine) -> (u64, u64) {
    (engine.rows()[0].id, engine.rows()[1].id)
}

#[test]
fn starts_with_two_rows_and_enforces_the_floor() {
    let mut grid = engine();
    assert_eq!(grid.rows().len(), 2);

    let (r1, _) = first_two_ids(&grid);
    assert!(!grid.delete_row(r1));
    assert_eq!(grid.rows().len(), 2);

    let r3 = grid.add_row();
    assert_eq!(grid.rows().len(), 3);
    assert!(grid.delete_row(r3));
    assert_eq!(grid.rows().len(), 2);
}

#[test]
fn account_change_clears_all_dependent_fields() {
    let mut grid = engine();
    let (r1, _) = first_two_ids(&grid);

    grid.set_date(r1, date(2));
    grid.set_account(r1, "acc-cash");
    grid.set_location(r1, "loc-1").unwrap();
    grid.set_detail(r1, "morning float");
    grid.set_debit_text(r1, "1,000");

    grid.set_account(r1, "acc-revenue");
    let row = grid.row(r1).unwrap();
    assert_eq!(row.date, Some(date(2)), "date survives an account switch");
    assert_eq!(row.location_id, None);
    assert_eq!(row.internal_counterparty_id, None);
    assert_eq!(row.external_counterparty_id, None);
    assert_eq!(row.detail, "");
    assert_eq!(row.debit_text, "");
    assert_eq!(row.credit_text, "");
    assert_eq!(row.counterparty_store_id, None);
    assert_eq!(row.counterparty_cash_location_id, None);
    assert_eq!(row.debt_category, None);

    // Idempotent: switching again from the cleared state changes nothing.
    let before = grid.row(r1).unwrap().clone();
    grid.set_account(r1, "acc-revenue");
    assert_eq!(grid.row(r1).unwrap(), &before);
}

#[test]
fn date_syncs_between_first_two_rows_only() {
    let mut grid = engine();
    let (r1, r2) = first_two_ids(&grid);

    grid.set_date(r1, date(2));
    assert_eq!(grid.row(r2).unwrap().date, Some(date(2)));

    // Symmetric direction.
    let mut grid = engine();
    let (r1, r2) = first_two_ids(&grid);
    grid.set_date(r2, date(5));
    assert_eq!(grid.row(r1).unwrap().date, Some(date(5)));

    // A non-empty twin is never overwritten.
    grid.set_date(r1, date(9));
    assert_eq!(grid.row(r2).unwrap().date, Some(date(5)));

    // Later rows are independent.
    let mut grid = engine();
    let (r1, r2) = first_two_ids(&grid);
    let r3 = grid.add_row();
    grid.set_date(r3, date(7));
    assert_eq!(grid.row(r1).unwrap().date, None);
    assert_eq!(grid.row(r2).unwrap().date, None);
}

#[test]
fn location_requires_a_cash_named_account() {
    let mut grid = engine();
    let (r1, _) = first_two_ids(&grid);

    grid.set_account(r1, "acc-revenue");
    assert!(matches!(
        grid.set_location(r1, "loc-1"),
        Err(JournalError::Validation { .. })
    ));

    grid.set_account(r1, "acc-cash");
    assert!(grid.set_location(r1, "loc-1").is_ok());
}

#[test]
fn no_two_rows_share_a_cash_location() {
    let mut grid = engine();
    let (r1, r2) = first_two_ids(&grid);
    grid.set_account(r1, "acc-cash");
    grid.set_account(r2, "acc-cash");
    grid.set_location(r1, "loc-1").unwrap();

    assert!(grid.set_location(r2, "loc-1").is_err());
    assert!(grid.set_location(r2, "loc-2").is_ok());

    let options = grid.location_options(r2);
    let loc1 = options.iter().find(|o| o.id == "loc-1").unwrap();
    assert!(loc1.disabled);
    // The row's own selection stays selectable.
    let own = grid.location_options(r1);
    assert!(!own.iter().find(|o| o.id == "loc-1").unwrap().disabled);
}

#[test]
fn amount_text_is_sanitized_on_entry() {
    let mut grid = engine();
    let (r1, _) = first_two_ids(&grid);
    grid.set_account(r1, "acc-revenue");

    grid.set_debit_text(r1, "1,2a3.4.5");
    assert_eq!(grid.row(r1).unwrap().debit_text, "123.45");
    assert_eq!(grid.row(r1).unwrap().debit_amount(), 123.45);

    grid.set_credit_text(r1, "abc");
    assert_eq!(grid.row(r1).unwrap().credit_text, "");
    assert_eq!(grid.row(r1).unwrap().credit_amount(), 0.0);
}

#[test]
fn external_counterparty_requires_payable_or_receivable() {
    let mut grid = engine();
    let (r1, _) = first_two_ids(&grid);
    grid.set_account(r1, "acc-revenue");
    assert!(grid.select_external_counterparty(r1, "cp-ext").is_err());

    grid.set_account(r1, "acc-payable");
    assert!(grid.select_external_counterparty(r1, "cp-ext").is_ok());
    assert_eq!(
        grid.row(r1).unwrap().external_counterparty_id.as_deref(),
        Some("cp-ext")
    );
}

#[test]
fn balanced_cash_and_revenue_grid_is_ready() {
    let mut grid = engine();
    let (r1, r2) = first_two_ids(&grid);

    grid.set_date(r1, date(2));
    grid.set_account(r1, "acc-cash");
    grid.set_location(r1, "loc-1").unwrap();
    grid.set_debit_text(r1, "1000");

    grid.set_account(r2, "acc-revenue");
    grid.set_credit_text(r2, "1000");

    let readiness = grid.readiness();
    assert_eq!(readiness.difference(), 0.0);
    assert!(readiness.is_ready(), "blockers: {:?}", readiness.blockers);
}

#[test]
fn unbalanced_grid_reports_the_difference() {
    let mut grid = engine();
    let (r1, r2) = first_two_ids(&grid);

    grid.set_date(r1, date(2));
    grid.set_account(r1, "acc-revenue");
    grid.set_debit_text(r1, "500");
    grid.set_account(r2, "acc-revenue");
    grid.set_credit_text(r2, "300");

    let readiness = grid.readiness();
    assert_eq!(readiness.difference(), 200.0);
    assert!(!readiness.is_ready());
    assert!(readiness
        .blockers
        .iter()
        .any(|b| matches!(b, Blocker::Unbalanced { difference } if *difference == 200.0)));
}

#[test]
fn each_row_needs_exactly_one_side() {
    let mut grid = engine();
    let (r1, r2) = first_two_ids(&grid);
    grid.set_date(r1, date(2));
    grid.set_account(r1, "acc-revenue");
    grid.set_debit_text(r1, "100");
    grid.set_credit_text(r1, "100");
    grid.set_account(r2, "acc-revenue");

    let readiness = grid.readiness();
    assert!(readiness
        .blockers
        .iter()
        .any(|b| matches!(b, Blocker::ConflictingAmounts { row_id } if *row_id == r1)));
    assert!(readiness
        .blockers
        .iter()
        .any(|b| matches!(b, Blocker::MissingAmount { row_id } if *row_id == r2)));
}

#[test]
fn missing_cash_location_and_counterparty_block_readiness() {
    let mut grid = engine();
    let (r1, r2) = first_two_ids(&grid);
    grid.set_date(r1, date(2));
    grid.set_account(r1, "acc-cash");
    grid.set_debit_text(r1, "100");
    grid.set_account(r2, "acc-payable");
    grid.set_credit_text(r2, "100");

    let readiness = grid.readiness();
    assert!(readiness
        .blockers
        .iter()
        .any(|b| matches!(b, Blocker::MissingCashLocation { row_id } if *row_id == r1)));
    assert!(readiness
        .blockers
        .iter()
        .any(|b| matches!(b, Blocker::MissingCounterparty { row_id } if *row_id == r2)));
}

#[test]
fn reset_returns_to_two_empty_rows() {
    let mut grid = engine();
    let (r1, _) = first_two_ids(&grid);
    grid.set_date(r1, date(2));
    grid.set_account(r1, "acc-cash");
    grid.add_row();

    grid.reset();
    assert_eq!(grid.rows().len(), 2);
    assert!(grid.rows().iter().all(|r| r.account_id.is_none() && r.date.is_none()));
}
