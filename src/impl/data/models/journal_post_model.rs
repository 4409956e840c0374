use chrono::{Duration, NaiveDate};

use crate::entities::{DebtCategory, JournalEntry, TransactionLine};

/// Posted shape of the ledger-insertion procedure. Amount fields travel as
/// decimal strings (one of debit/credit is always `"0"`), and the mixed-case
/// `linkedCounterparty_*` keys are the procedure's own contract.
#[derive(Debug, PartialEq, serde_derive::Serialize)]
pub struct JournalPostRequestModel {
    pub p_base_amount: f64,
    pub p_company_id: String,
    pub p_created_by: String,
    pub p_description: String,
    pub p_entry_date: String,
    pub p_lines: Vec<JournalLineModel>,
    pub p_store_id: Option<String>,
    pub p_counterparty_id: Option<String>,
    pub p_if_cash_location_id: Option<String>,
}

#[derive(Debug, PartialEq, serde_derive::Serialize)]
pub struct JournalLineModel {
    pub account_id: String,
    pub description: String,
    pub debit: String,
    pub credit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash: Option<CashPayloadModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt: Option<DebtPayloadModel>,
}

#[derive(Debug, PartialEq, serde_derive::Serialize)]
pub struct CashPayloadModel {
    pub cash_location_id: String,
}

#[derive(Debug, PartialEq, serde_derive::Serialize)]
pub struct DebtPayloadModel {
    pub counterparty_id: String,
    pub direction: String,
    pub category: String,
    pub original_amount: String,
    pub interest_rate: String,
    pub interest_account_id: String,
    pub interest_due_day: u32,
    pub issue_date: String,
    pub due_date: String,
    pub description: String,
    #[serde(rename = "linkedCounterparty_store_id")]
    pub linked_counterparty_store_id: String,
    #[serde(rename = "linkedCounterparty_companyId")]
    pub linked_counterparty_company_id: String,
}

#[derive(Debug, serde_derive::Deserialize)]
pub struct JournalIdModel {
    pub journal_id: String,
}

impl JournalPostRequestModel {
    pub fn from_entry(entry: &JournalEntry, created_by: &str, description: &str) -> Self {
        // The server re-validates; base amount is the debit total, which the
        // pre-submit invariant keeps equal to the credit total.
        let p_counterparty_id = entry
            .lines
            .iter()
            .find_map(|l| l.counterparty_id.clone());
        // Counterparty cash location of the first internal-counterparty line,
        // used server-side to build the mirror journal in the linked company.
        let p_if_cash_location_id = entry
            .lines
            .iter()
            .find(|l| l.counterparty_id.is_some() && l.linked_company_id.is_some())
            .and_then(|l| l.counterparty_cash_location_id.clone());

        Self {
            p_base_amount: entry.total_debits,
            p_company_id: entry.company_id.clone(),
            p_created_by: created_by.to_string(),
            p_description: description.to_string(),
            p_entry_date: rpc_timestamp(entry.date),
            p_lines: entry
                .lines
                .iter()
                .map(|line| JournalLineModel::from_line(line, entry.date))
                .collect(),
            p_store_id: entry.store_id.clone(),
            p_counterparty_id,
            p_if_cash_location_id,
        }
    }
}

impl JournalLineModel {
    pub fn from_line(line: &TransactionLine, entry_date: NaiveDate) -> Self {
        let amount_text = trimmed_amount(line.amount);
        let (debit, credit) = if line.is_debit {
            (amount_text, "0".to_string())
        } else {
            ("0".to_string(), amount_text)
        };

        let cash = line.cash_location_id.clone().map(|cash_location_id| {
            CashPayloadModel { cash_location_id }
        });

        let debt = line.counterparty_id.clone().map(|counterparty_id| {
            let issue_date = line.issue_date.unwrap_or(entry_date);
            let due_date = line.due_date.unwrap_or(issue_date + Duration::days(30));
            DebtPayloadModel {
                counterparty_id,
                direction: if line.is_debit { "receivable" } else { "payable" }.to_string(),
                category: line
                    .debt_category
                    .unwrap_or(DebtCategory::Other)
                    .as_str()
                    .to_string(),
                original_amount: trimmed_amount(line.amount),
                interest_rate: trimmed_amount(line.interest_rate.unwrap_or(0.0)),
                interest_account_id: line.interest_account_id.clone().unwrap_or_default(),
                interest_due_day: line.interest_due_day.unwrap_or(0),
                issue_date: issue_date.format("%Y-%m-%d").to_string(),
                due_date: due_date.format("%Y-%m-%d").to_string(),
                description: line.debt_description.clone().unwrap_or_default(),
                linked_counterparty_store_id: line
                    .counterparty_store_id
                    .clone()
                    .unwrap_or_default(),
                linked_counterparty_company_id: line
                    .linked_company_id
                    .clone()
                    .unwrap_or_default(),
            }
        });

        Self {
            account_id: line.account_id.clone(),
            description: line.description.clone(),
            debit,
            credit,
            cash,
            debt,
        }
    }
}

fn rpc_timestamp(date: NaiveDate) -> String {
    format!("{}T00:00:00Z", date.format("%Y-%m-%d"))
}

fn trimmed_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Account, CategoryTag};

    #[test]
    fn debit_line_serializes_with_cash_payload() {
        let cash = Account::new("acc-cash", "Cash", CategoryTag::Cash);
        let line = TransactionLine::debit(&cash, 1000.0, "float").with_cash_location("loc-1");
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let model = JournalLineModel::from_line(&line, date);
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["debit"], "1000");
        assert_eq!(json["credit"], "0");
        assert_eq!(json["cash"]["cash_location_id"], "loc-1");
        assert!(json.get("debt").is_none());
    }

    #[test]
    fn debt_payload_defaults_and_key_casing() {
        let payable = Account::new("acc-ap", "Accounts Payable", CategoryTag::Payable);
        let mut line = TransactionLine::credit(&payable, 250.5, "supplier");
        line.counterparty_id = Some("cp-1".into());
        line.counterparty_store_id = Some("st-1".into());
        line.linked_company_id = Some("co-2".into());
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let json = serde_json::to_value(JournalLineModel::from_line(&line, date)).unwrap();
        let debt = &json["debt"];
        assert_eq!(debt["direction"], "payable");
        assert_eq!(debt["category"], "other");
        assert_eq!(debt["original_amount"], "250.5");
        assert_eq!(debt["issue_date"], "2026-03-02");
        assert_eq!(debt["due_date"], "2026-04-01");
        assert_eq!(debt["linkedCounterparty_store_id"], "st-1");
        assert_eq!(debt["linkedCounterparty_companyId"], "co-2");
    }
}
