//! Portfolio transactions.
//!
//! A [`Transaction`] is a common header plus one [`TransactionDetails`]
//! variant. On the wire the two are flattened into one object whose `type`
//! member names the variant:
//!
//! ```text
//! {"id":"…","stock":"…","type":"aquisition","transactionDate":"2000-01-10",
//!  "comment":"…","description":"…","units":100,"averagePrice":12.00,
//!  "transactionCosts":19.95,"createCashTransaction":true}
//! ```

use std::sync::OnceLock;

use rust_decimal::serde::arbitrary_precision;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::domain::Date;
use crate::serialization::polymorphic;
use crate::serialization::registry::{Polymorphic, TypeRegistry, VariantDescriptor};
use crate::RegistryBuildError;

/// Discriminator values of the transaction family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionType {
    #[serde(rename = "aquisition")]
    Acquisition,
    CashTransaction,
    CostBaseAdjustment,
    Disposal,
    IncomeReceived,
    OpeningBalance,
    ReturnOfCapital,
    UnitCountAdjustment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CashTransactionType {
    #[default]
    Deposit,
    #[serde(rename = "withdrawl")]
    Withdrawal,
    Transfer,
    Fee,
    Interest,
}

/// Parcel selection rule used when disposing of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CgtCalculationMethod {
    #[default]
    MinimizeGain,
    MaximizeGain,
    FirstInFirstOut,
    LastInFirstOut,
}

/// A transaction against one stock holding.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub stock: Uuid,
    pub transaction_date: Date,
    pub comment: Option<String>,
    pub description: Option<String>,
    pub details: TransactionDetails,
}

impl Transaction {
    pub fn new(
        id: Uuid,
        stock: Uuid,
        transaction_date: Date,
        details: impl Into<TransactionDetails>,
    ) -> Self {
        Self {
            id,
            stock,
            transaction_date,
            comment: None,
            description: None,
            details: details.into(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.details.kind()
    }

    fn wire<'a, B>(&'a self, body: &'a B) -> TransactionWire<'a, B> {
        TransactionWire {
            id: self.id,
            stock: self.stock,
            kind: self.details.kind(),
            transaction_date: self.transaction_date,
            comment: self.comment.as_deref(),
            description: self.description.as_deref(),
            body,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionWire<'a, B> {
    id: Uuid,
    stock: Uuid,
    #[serde(rename = "type")]
    kind: TransactionType,
    transaction_date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(flatten)]
    body: &'a B,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TransactionHeader {
    id: Uuid,
    stock: Uuid,
    transaction_date: Date,
    comment: Option<String>,
    description: Option<String>,
}

impl Serialize for Transaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.details {
            TransactionDetails::Acquisition(body) => self.wire(body).serialize(serializer),
            TransactionDetails::CashTransaction(body) => self.wire(body).serialize(serializer),
            TransactionDetails::CostBaseAdjustment(body) => self.wire(body).serialize(serializer),
            TransactionDetails::Disposal(body) => self.wire(body).serialize(serializer),
            TransactionDetails::IncomeReceived(body) => self.wire(body).serialize(serializer),
            TransactionDetails::OpeningBalance(body) => self.wire(body).serialize(serializer),
            TransactionDetails::ReturnOfCapital(body) => self.wire(body).serialize(serializer),
            TransactionDetails::UnitCountAdjustment(body) => self.wire(body).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (header, details) =
            polymorphic::deserialize::<TransactionHeader, TransactionDetails, D>(deserializer)?;

        Ok(Self {
            id: header.id,
            stock: header.stock,
            transaction_date: header.transaction_date,
            comment: header.comment,
            description: header.description,
            details,
        })
    }
}

/// Variant-specific part of a [`Transaction`].
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionDetails {
    Acquisition(Acquisition),
    CashTransaction(CashTransaction),
    CostBaseAdjustment(CostBaseAdjustment),
    Disposal(Disposal),
    IncomeReceived(IncomeReceived),
    OpeningBalance(OpeningBalance),
    ReturnOfCapital(ReturnOfCapital),
    UnitCountAdjustment(UnitCountAdjustment),
}

impl Polymorphic for TransactionDetails {
    const FAMILY: &'static str = "transaction";
    type Kind = TransactionType;

    fn kind(&self) -> TransactionType {
        match self {
            Self::Acquisition(_) => TransactionType::Acquisition,
            Self::CashTransaction(_) => TransactionType::CashTransaction,
            Self::CostBaseAdjustment(_) => TransactionType::CostBaseAdjustment,
            Self::Disposal(_) => TransactionType::Disposal,
            Self::IncomeReceived(_) => TransactionType::IncomeReceived,
            Self::OpeningBalance(_) => TransactionType::OpeningBalance,
            Self::ReturnOfCapital(_) => TransactionType::ReturnOfCapital,
            Self::UnitCountAdjustment(_) => TransactionType::UnitCountAdjustment,
        }
    }

    fn descriptors() -> Vec<VariantDescriptor<Self>> {
        vec![
            VariantDescriptor::of::<Acquisition>(),
            VariantDescriptor::of::<CashTransaction>(),
            VariantDescriptor::of::<CostBaseAdjustment>(),
            VariantDescriptor::of::<Disposal>(),
            VariantDescriptor::of::<IncomeReceived>(),
            VariantDescriptor::of::<OpeningBalance>(),
            VariantDescriptor::of::<ReturnOfCapital>(),
            VariantDescriptor::of::<UnitCountAdjustment>(),
        ]
    }

    fn registry() -> Result<&'static TypeRegistry<Self>, RegistryBuildError> {
        static REGISTRY: OnceLock<Result<TypeRegistry<TransactionDetails>, RegistryBuildError>> =
            OnceLock::new();
        REGISTRY
            .get_or_init(TypeRegistry::build)
            .as_ref()
            .map_err(Clone::clone)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Acquisition {
    pub units: i32,
    #[serde(with = "arbitrary_precision")]
    pub average_price: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub transaction_costs: Decimal,
    pub create_cash_transaction: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashTransaction {
    pub cash_transaction_type: CashTransactionType,
    #[serde(with = "arbitrary_precision")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostBaseAdjustment {
    #[serde(with = "arbitrary_precision")]
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Disposal {
    pub units: i32,
    #[serde(with = "arbitrary_precision")]
    pub average_price: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub transaction_costs: Decimal,
    pub cgt_method: CgtCalculationMethod,
    pub create_cash_transaction: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeReceived {
    pub record_date: Date,
    #[serde(with = "arbitrary_precision")]
    pub franked_amount: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub unfranked_amount: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub franking_credits: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub interest: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub tax_deferred: Decimal,
    pub create_cash_transaction: bool,
    #[serde(with = "arbitrary_precision")]
    pub drp_cash_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpeningBalance {
    pub units: i32,
    #[serde(with = "arbitrary_precision")]
    pub cost_base: Decimal,
    #[serde(rename = "aquisitionDate")]
    pub acquisition_date: Date,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReturnOfCapital {
    pub record_date: Date,
    #[serde(with = "arbitrary_precision")]
    pub amount: Decimal,
    pub create_cash_transaction: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitCountAdjustment {
    pub original_units: i32,
    pub new_units: i32,
}

macro_rules! impl_into_details {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for TransactionDetails {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_into_details!(
    Acquisition,
    CashTransaction,
    CostBaseAdjustment,
    Disposal,
    IncomeReceived,
    OpeningBalance,
    ReturnOfCapital,
    UnitCountAdjustment,
);

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn sample() -> Transaction {
        Transaction::new(
            Uuid::from_u128(1),
            Uuid::from_u128(2),
            Date::new(2000, 1, 10).expect("valid"),
            Acquisition {
                units: 100,
                average_price: Decimal::new(1200, 2),
                transaction_costs: Decimal::new(1995, 2),
                create_cash_transaction: true,
            },
        )
        .with_comment("comment")
        .with_description("description")
    }

    #[test]
    fn acquisition_encodes_header_discriminator_and_fields() {
        let encoded: Value =
            serde_json::from_str(&serde_json::to_string(&sample()).expect("must encode"))
                .expect("must parse");
        let expected: Value = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001",
                "stock":"00000000-0000-0000-0000-000000000002",
                "type":"aquisition","transactionDate":"2000-01-10",
                "comment":"comment","description":"description",
                "units":100,"averagePrice":12.00,"transactionCosts":19.95,
                "createCashTransaction":true}"#,
        )
        .expect("must parse");
        assert_eq!(encoded, expected);
    }

    #[test]
    fn discriminator_follows_the_stock_member() {
        let text = serde_json::to_string(&sample()).expect("must encode");
        let stock = text.find("\"stock\"").expect("stock present");
        let kind = text.find("\"type\"").expect("type present");
        let date = text.find("\"transactionDate\"").expect("date present");
        assert!(stock < kind && kind < date, "{text}");
        assert!(text.contains("\"averagePrice\":12.00"), "{text}");
    }

    #[test]
    fn unset_comment_is_omitted() {
        let mut transaction = sample();
        transaction.comment = None;
        let text = serde_json::to_string(&transaction).expect("must encode");
        assert!(!text.contains("comment"), "{text}");
    }

    #[test]
    fn decodes_into_concrete_variant() {
        let text = r#"{"type":"disposal","id":"00000000-0000-0000-0000-000000000009",
            "units":50,"cgtMethod":"lastInFirstOut"}"#;
        let decoded: Transaction = serde_json::from_str(text).expect("must decode");
        assert_eq!(decoded.id, Uuid::from_u128(9));
        assert_eq!(decoded.transaction_type(), TransactionType::Disposal);
        assert_eq!(decoded.comment, None);
        assert_eq!(
            decoded.details,
            TransactionDetails::Disposal(Disposal {
                units: 50,
                cgt_method: CgtCalculationMethod::LastInFirstOut,
                ..Disposal::default()
            })
        );
    }

    #[test]
    fn amounts_are_written_as_json_numbers() {
        let encoded: Value =
            serde_json::from_str(&serde_json::to_string(&sample()).expect("must encode"))
                .expect("must parse");
        assert!(encoded["averagePrice"].is_number(), "{encoded}");
        assert!(encoded["transactionCosts"].is_number(), "{encoded}");
        assert_eq!(encoded["transactionCosts"].to_string(), "19.95");
    }

    #[test]
    fn unknown_cgt_method_fails() {
        let text = r#"{"type":"disposal","cgtMethod":"fifo"}"#;
        let err = serde_json::from_str::<Transaction>(text).expect_err("must fail");
        assert!(err.to_string().contains("fifo"), "{err}");
    }

    #[test]
    fn opening_balance_keeps_historical_member_name() {
        let transaction = Transaction::new(
            Uuid::nil(),
            Uuid::nil(),
            Date::default(),
            OpeningBalance {
                units: 10,
                cost_base: Decimal::new(5000, 2),
                acquisition_date: Date::new(1999, 12, 31).expect("valid"),
            },
        );
        let encoded = serde_json::to_value(&transaction).expect("must encode");
        assert_eq!(encoded["aquisitionDate"], json!("1999-12-31"));
        assert_eq!(encoded["type"], json!("openingBalance"));
    }
}
