//! Portfolio and holding reports.
//!
//! These are plain records; none of them is polymorphic. Decimal amounts are
//! carried as [`Decimal`] so the scale sent by the service survives a round
//! trip unchanged.

use rust_decimal::serde::{arbitrary_precision, arbitrary_precision_option};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::{AssetCategory, CashTransactionType, ClosingPrice, Date};

/// Stock identity as embedded in portfolio reports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stock {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asx_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub category: AssetCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePortfolioCommand {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioPropertiesResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub start_date: Date,
    pub end_date: Date,
    pub holdings: Vec<HoldingProperties>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoldingProperties {
    pub stock: Stock,
    pub start_date: Date,
    pub end_date: Date,
    pub participating_in_drp: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Holding {
    pub stock: Stock,
    pub units: i32,
    #[serde(with = "arbitrary_precision")]
    pub value: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub cost: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub cost_base: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioSummaryResponse {
    #[serde(with = "arbitrary_precision")]
    pub portfolio_value: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub portfolio_cost: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "arbitrary_precision_option")]
    pub return_1_year: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "arbitrary_precision_option")]
    pub return_3_year: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "arbitrary_precision_option")]
    pub return_5_year: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "arbitrary_precision_option")]
    pub return_all: Option<Decimal>,
    #[serde(with = "arbitrary_precision")]
    pub cash_balance: Decimal,
    pub holdings: Vec<Holding>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoldingPerformance {
    pub stock: Stock,
    #[serde(with = "arbitrary_precision")]
    pub opening_balance: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub purchases: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub sales: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub closing_balance: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub dividends: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub capital_gain: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub drp_cash_balance: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub total_return: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub irr: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioPerformanceResponse {
    #[serde(with = "arbitrary_precision")]
    pub opening_balance: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub dividends: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub change_in_market_value: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub outgoing_taxes: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub capital_gains: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub closing_balance: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub opening_cash_balance: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub deposits: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub withdrawals: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub interest: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub fees: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub closing_cash_balance: Decimal,
    pub holding_performance: Vec<HoldingPerformance>,
}

/// Sampling interval for value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueFrequency {
    #[default]
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioValueResponse {
    pub values: Vec<ClosingPrice>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionItem {
    pub id: Uuid,
    pub stock: Stock,
    pub transaction_date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CgtMethod {
    #[default]
    Other,
    Discount,
    Indexation,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimpleUnrealisedGainsItem {
    pub stock: Stock,
    #[serde(rename = "aquisitionDate")]
    pub acquisition_date: Date,
    pub units: i32,
    #[serde(with = "arbitrary_precision")]
    pub cost_base: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub market_value: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub capital_gain: Decimal,
    #[serde(rename = "discoutedGain")]
    #[serde(with = "arbitrary_precision")]
    pub discounted_gain: Decimal,
    pub discount_method: CgtMethod,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimpleUnrealisedGainsResponse {
    pub unrealised_gains: Vec<SimpleUnrealisedGainsItem>,
}

/// Cost base movement behind one parcel in a detailed gains report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CgtEventItem {
    pub date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub units: i32,
    #[serde(with = "arbitrary_precision")]
    pub amount: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub cost_base: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailedUnrealisedGainsItem {
    pub stock: Stock,
    #[serde(rename = "aquisitionDate")]
    pub acquisition_date: Date,
    pub units: i32,
    #[serde(with = "arbitrary_precision")]
    pub cost_base: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub market_value: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub capital_gain: Decimal,
    #[serde(rename = "discoutedGain")]
    #[serde(with = "arbitrary_precision")]
    pub discounted_gain: Decimal,
    pub discount_method: CgtMethod,
    pub cgt_events: Vec<CgtEventItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailedUnrealisedGainsResponse {
    pub unrealised_gains: Vec<DetailedUnrealisedGainsItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CgtLiabilityEvent {
    pub stock: Stock,
    pub event_date: Date,
    #[serde(with = "arbitrary_precision")]
    pub cost_base: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub amount_received: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub capital_gain: Decimal,
    pub method: CgtMethod,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CgtLiabilityResponse {
    #[serde(with = "arbitrary_precision")]
    pub current_year_capital_gains_other: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub current_year_capital_gains_discounted: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub current_year_capital_gains_total: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub current_year_capital_losses_other: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub current_year_capital_losses_discounted: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub current_year_capital_losses_total: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub gross_capital_gain_other: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub gross_capital_gain_discounted: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub gross_capital_gain_total: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub discount: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub net_capital_gain_other: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub net_capital_gain_discounted: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub net_capital_gain_total: Decimal,
    pub events: Vec<CgtLiabilityEvent>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashAccountTransaction {
    pub date: Date,
    #[serde(rename = "type", deserialize_with = "default_on_null")]
    pub transaction_type: CashTransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "arbitrary_precision")]
    pub amount: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub balance: Decimal,
}

// Null `type` members reach this record unpruned.
fn default_on_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashAccountTransactionsResponse {
    #[serde(with = "arbitrary_precision")]
    pub opening_balance: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub closing_balance: Decimal,
    pub transactions: Vec<CashAccountTransaction>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorporateActionItem {
    pub id: Uuid,
    pub action_date: Date,
    pub stock: Stock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorporateActionsResponse {
    pub corporate_actions: Vec<CorporateActionItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeItem {
    pub stock: Stock,
    #[serde(with = "arbitrary_precision")]
    pub unfranked_amount: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub franked_amount: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub franking_credits: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub net_income: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub gross_income: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeResponse {
    pub income: Vec<IncomeItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeDrpParticipationCommand {
    pub holding: Uuid,
    pub participate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_omits_unknown_returns() {
        let summary = PortfolioSummaryResponse {
            portfolio_value: Decimal::new(900_000, 2),
            return_1_year: Some(Decimal::new(5, 2)),
            ..PortfolioSummaryResponse::default()
        };

        let text = serde_json::to_string(&summary).expect("must encode");
        assert!(text.contains(r#""portfolioValue":9000.00"#), "{text}");
        assert!(text.contains(r#""return1Year":0.05"#), "{text}");
        assert!(!text.contains("return3Year"), "{text}");
    }

    #[test]
    fn optional_returns_read_from_numbers() {
        let text = r#"{"portfolioValue":9000.00,"return1Year":0.05}"#;
        let summary: PortfolioSummaryResponse = serde_json::from_str(text).expect("must decode");
        assert_eq!(summary.portfolio_value, Decimal::new(900_000, 2));
        assert_eq!(summary.return_1_year, Some(Decimal::new(5, 2)));
        assert_eq!(summary.return_all, None);
    }

    #[test]
    fn gains_keep_historical_member_names() {
        let text = r#"{"unrealisedGains":[{"aquisitionDate":"2003-04-05","units":10,
            "discoutedGain":1.50,"discountMethod":"discount"}]}"#;
        let decoded: SimpleUnrealisedGainsResponse =
            serde_json::from_str(text).expect("must decode");
        let item = &decoded.unrealised_gains[0];
        assert_eq!(item.acquisition_date, Date::new(2003, 4, 5).expect("valid"));
        assert_eq!(item.discounted_gain, Decimal::new(150, 2));
        assert_eq!(item.discount_method, CgtMethod::Discount);
    }

    #[test]
    fn cash_account_rows_use_type_member() {
        let text = r#"{"openingBalance":0,"transactions":[{"date":"2001-01-01",
            "type":"withdrawl","amount":-10.00,"balance":90.00}]}"#;
        let decoded: CashAccountTransactionsResponse =
            serde_json::from_str(text).expect("must decode");
        assert_eq!(
            decoded.transactions[0].transaction_type,
            CashTransactionType::Withdrawal
        );
        assert_eq!(decoded.transactions[0].amount, Decimal::new(-1000, 2));
    }

    #[test]
    fn cash_account_row_with_null_type_reads_as_default() {
        let text = r#"{"transactions":[{"date":"2001-01-01","type":null,"amount":5.00}]}"#;
        let decoded: CashAccountTransactionsResponse = crate::PayloadSerializer::new()
            .expect("must build")
            .deserialize(text)
            .expect("must decode");
        assert_eq!(
            decoded.transactions[0].transaction_type,
            CashTransactionType::default()
        );
        assert_eq!(decoded.transactions[0].amount, Decimal::new(500, 2));
    }

    #[test]
    fn drp_command_encodes_holding_id() {
        let command = ChangeDrpParticipationCommand {
            holding: Uuid::from_u128(1),
            participate: true,
        };
        assert_eq!(
            serde_json::to_string(&command).expect("must encode"),
            r#"{"holding":"00000000-0000-0000-0000-000000000001","participate":true}"#
        );
    }
}
