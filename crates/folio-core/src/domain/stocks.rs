use rust_decimal::serde::arbitrary_precision;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetCategory {
    #[default]
    AustralianStocks,
    InternationalStocks,
    AustralianProperty,
    InternationalProperty,
    AustralianFixedInterest,
    #[serde(rename = "internationlFixedInterest")]
    InternationalFixedInterest,
    Cash,
}

/// How fractional dividend amounts are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundingRule {
    #[default]
    Round,
    Truncate,
}

/// Dividend reinvestment unit calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrpMethod {
    #[default]
    Round,
    RoundDown,
    RoundUp,
    RetainCashBalance,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StapledSecurityChild {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asx_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub trust: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateStockCommand {
    pub id: Uuid,
    pub listing_date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asx_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub trust: bool,
    pub category: AssetCategory,
    pub child_securities: Vec<StapledSecurityChild>,
}

impl CreateStockCommand {
    pub fn add_child_security(&mut self, asx_code: &str, name: &str, trust: bool) {
        self.child_securities.push(StapledSecurityChild {
            asx_code: Some(asx_code.to_owned()),
            name: Some(name.to_owned()),
            trust,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeStockCommand {
    pub id: Uuid,
    pub change_date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asx_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub category: AssetCategory,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DelistStockCommand {
    pub id: Uuid,
    pub delisting_date: Date,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeDividendRulesCommand {
    pub id: Uuid,
    pub change_date: Date,
    #[serde(with = "arbitrary_precision")]
    pub company_tax_rate: Decimal,
    pub dividend_rounding_rule: RoundingRule,
    pub drp_active: bool,
    pub drp_method: DrpMethod,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelativeNta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_security: Option<String>,
    #[serde(with = "arbitrary_precision")]
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeRelativeNtaCommand {
    pub id: Uuid,
    pub change_date: Date,
    pub relative_ntas: Vec<RelativeNta>,
}

impl ChangeRelativeNtaCommand {
    pub fn add_relative_nta(&mut self, child_security: &str, percentage: Decimal) {
        self.relative_ntas.push(RelativeNta {
            child_security: Some(child_security.to_owned()),
            percentage,
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClosingPrice {
    pub date: Date,
    #[serde(with = "arbitrary_precision")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateClosingPricesCommand {
    pub id: Uuid,
    pub closing_prices: Vec<ClosingPrice>,
}

impl UpdateClosingPricesCommand {
    pub fn add_closing_price(&mut self, date: Date, price: Decimal) {
        self.closing_prices.push(ClosingPrice { date, price });
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asx_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub category: AssetCategory,
    pub trust: bool,
    pub stapled_security: bool,
    pub listing_date: Date,
    pub delisted_date: Date,
    #[serde(with = "arbitrary_precision")]
    pub last_price: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub company_tax_rate: Decimal,
    pub dividend_rounding_rule: RoundingRule,
    pub drp_active: bool,
    pub drp_method: DrpMethod,
    pub child_securities: Vec<StapledSecurityChild>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricProperties {
    pub from_date: Date,
    pub to_date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asx_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub category: AssetCategory,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricDividendRules {
    pub from_date: Date,
    pub to_date: Date,
    #[serde(with = "arbitrary_precision")]
    pub company_tax_rate: Decimal,
    pub rounding_rule: RoundingRule,
    pub drp_active: bool,
    pub drp_method: DrpMethod,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockHistoryResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asx_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub listing_date: Date,
    pub delisted_date: Date,
    pub history: Vec<HistoricProperties>,
    pub dividend_rules: Vec<HistoricDividendRules>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockPriceResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asx_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub closing_prices: Vec<ClosingPrice>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildSecurityNta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_security: Option<String>,
    #[serde(with = "arbitrary_precision")]
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelativeNtaPeriod {
    pub from_date: Date,
    pub to_date: Date,
    pub relative_ntas: Vec<ChildSecurityNta>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelativeNtaResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asx_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub relative_ntas: Vec<RelativeNtaPeriod>,
}
