//! Corporate actions announced against a stock.
//!
//! Same wire layout as transactions: the header members, `type`, then the
//! variant members. [`CompositeAction`] nests further corporate actions, each
//! carrying its own discriminator.

use std::sync::OnceLock;

use rust_decimal::serde::arbitrary_precision;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::domain::Date;
use crate::serialization::polymorphic;
use crate::serialization::registry::{Polymorphic, TypeRegistry, VariantDescriptor};
use crate::RegistryBuildError;

/// Discriminator values of the corporate action family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CorporateActionType {
    CapitalReturn,
    CompositeAction,
    Dividend,
    SplitConsolidation,
    Transformation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorporateAction {
    pub id: Uuid,
    pub stock: Uuid,
    pub action_date: Date,
    pub description: Option<String>,
    pub details: CorporateActionDetails,
}

impl CorporateAction {
    pub fn new(
        id: Uuid,
        stock: Uuid,
        action_date: Date,
        details: impl Into<CorporateActionDetails>,
    ) -> Self {
        Self {
            id,
            stock,
            action_date,
            description: None,
            details: details.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn action_type(&self) -> CorporateActionType {
        self.details.kind()
    }

    fn wire<'a, B>(&'a self, body: &'a B) -> CorporateActionWire<'a, B> {
        CorporateActionWire {
            id: self.id,
            stock: self.stock,
            kind: self.details.kind(),
            action_date: self.action_date,
            description: self.description.as_deref(),
            body,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CorporateActionWire<'a, B> {
    id: Uuid,
    stock: Uuid,
    #[serde(rename = "type")]
    kind: CorporateActionType,
    action_date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(flatten)]
    body: &'a B,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CorporateActionHeader {
    id: Uuid,
    stock: Uuid,
    action_date: Date,
    description: Option<String>,
}

impl Serialize for CorporateAction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.details {
            CorporateActionDetails::CapitalReturn(body) => self.wire(body).serialize(serializer),
            CorporateActionDetails::CompositeAction(body) => self.wire(body).serialize(serializer),
            CorporateActionDetails::Dividend(body) => self.wire(body).serialize(serializer),
            CorporateActionDetails::SplitConsolidation(body) => {
                self.wire(body).serialize(serializer)
            }
            CorporateActionDetails::Transformation(body) => self.wire(body).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CorporateAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (header, details) = polymorphic::deserialize::<
            CorporateActionHeader,
            CorporateActionDetails,
            D,
        >(deserializer)?;

        Ok(Self {
            id: header.id,
            stock: header.stock,
            action_date: header.action_date,
            description: header.description,
            details,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorporateActionDetails {
    CapitalReturn(CapitalReturn),
    CompositeAction(CompositeAction),
    Dividend(Dividend),
    SplitConsolidation(SplitConsolidation),
    Transformation(Transformation),
}

impl Polymorphic for CorporateActionDetails {
    const FAMILY: &'static str = "corporate action";
    type Kind = CorporateActionType;

    fn kind(&self) -> CorporateActionType {
        match self {
            Self::CapitalReturn(_) => CorporateActionType::CapitalReturn,
            Self::CompositeAction(_) => CorporateActionType::CompositeAction,
            Self::Dividend(_) => CorporateActionType::Dividend,
            Self::SplitConsolidation(_) => CorporateActionType::SplitConsolidation,
            Self::Transformation(_) => CorporateActionType::Transformation,
        }
    }

    fn descriptors() -> Vec<VariantDescriptor<Self>> {
        vec![
            VariantDescriptor::of::<CapitalReturn>(),
            VariantDescriptor::of::<CompositeAction>(),
            VariantDescriptor::of::<Dividend>(),
            VariantDescriptor::of::<SplitConsolidation>(),
            VariantDescriptor::of::<Transformation>(),
        ]
    }

    fn registry() -> Result<&'static TypeRegistry<Self>, RegistryBuildError> {
        static REGISTRY: OnceLock<
            Result<TypeRegistry<CorporateActionDetails>, RegistryBuildError>,
        > = OnceLock::new();
        REGISTRY
            .get_or_init(TypeRegistry::build)
            .as_ref()
            .map_err(Clone::clone)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CapitalReturn {
    pub payment_date: Date,
    #[serde(with = "arbitrary_precision")]
    pub amount: Decimal,
}

/// Several actions applied together; children are owned by this action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompositeAction {
    pub child_actions: Vec<CorporateAction>,
}

impl CompositeAction {
    pub fn with_child(mut self, child: CorporateAction) -> Self {
        self.child_actions.push(child);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dividend {
    pub payment_date: Date,
    #[serde(with = "arbitrary_precision")]
    pub amount: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub percent_franked: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub drp_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplitConsolidation {
    pub original_units: i32,
    pub new_units: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transformation {
    pub implementation_date: Date,
    #[serde(with = "arbitrary_precision")]
    pub cash_component: Decimal,
    #[serde(rename = "rolloverRefliefApplies")]
    pub rollover_relief_applies: bool,
    pub resulting_stocks: Vec<ResultingStock>,
}

impl Transformation {
    pub fn with_resulting_stock(mut self, stock: ResultingStock) -> Self {
        self.resulting_stocks.push(stock);
        self
    }
}

/// Stock received in exchange under a [`Transformation`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultingStock {
    pub stock: Uuid,
    pub original_units: i32,
    pub new_units: i32,
    #[serde(with = "arbitrary_precision")]
    pub cost_base: Decimal,
    #[serde(rename = "aquisitionDate")]
    pub acquisition_date: Date,
}

macro_rules! impl_into_details {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for CorporateActionDetails {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_into_details!(
    CapitalReturn,
    CompositeAction,
    Dividend,
    SplitConsolidation,
    Transformation,
);

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::new(y, m, d).expect("valid date")
    }

    #[test]
    fn capital_return_wire_shape() {
        let action = CorporateAction::new(
            Uuid::from_u128(0xA),
            Uuid::from_u128(0xB),
            date(2000, 1, 10),
            CapitalReturn {
                payment_date: date(2000, 2, 1),
                amount: Decimal::new(1200, 2),
            },
        )
        .with_description("description");

        let text = serde_json::to_string(&action).expect("must encode");
        assert_eq!(
            text,
            "{\"id\":\"00000000-0000-0000-0000-00000000000a\",\
             \"stock\":\"00000000-0000-0000-0000-00000000000b\",\
             \"type\":\"capitalReturn\",\"actionDate\":\"2000-01-10\",\
             \"description\":\"description\",\"paymentDate\":\"2000-02-01\",\
             \"amount\":12.00}"
        );
    }

    #[test]
    fn transformation_nests_resulting_stocks() {
        let action = CorporateAction::new(
            Uuid::nil(),
            Uuid::from_u128(3),
            date(2010, 6, 30),
            Transformation {
                implementation_date: date(2010, 7, 1),
                cash_component: Decimal::new(150, 2),
                rollover_relief_applies: true,
                ..Transformation::default()
            }
            .with_resulting_stock(ResultingStock {
                stock: Uuid::from_u128(4),
                original_units: 2,
                new_units: 1,
                cost_base: Decimal::new(40, 2),
                acquisition_date: date(2001, 1, 1),
            }),
        );

        let encoded: Value = serde_json::to_value(&action).expect("must encode");
        assert_eq!(encoded["rolloverRefliefApplies"], Value::Bool(true));
        assert_eq!(
            encoded["resultingStocks"][0]["aquisitionDate"],
            Value::String(String::from("2001-01-01"))
        );

        let decoded: CorporateAction = serde_json::from_value(encoded).expect("must decode");
        assert_eq!(decoded, action);
    }

    #[test]
    fn composite_children_keep_their_discriminators() {
        let child = CorporateAction::new(
            Uuid::from_u128(5),
            Uuid::from_u128(3),
            date(2011, 1, 1),
            SplitConsolidation {
                original_units: 1,
                new_units: 4,
            },
        );
        let parent = CorporateAction::new(
            Uuid::from_u128(6),
            Uuid::from_u128(3),
            date(2011, 1, 1),
            CompositeAction::default().with_child(child),
        );

        let encoded: Value = serde_json::to_value(&parent).expect("must encode");
        assert_eq!(
            encoded["childActions"][0]["type"],
            Value::String(String::from("splitConsolidation"))
        );

        let decoded: CorporateAction = serde_json::from_value(encoded).expect("must decode");
        assert_eq!(decoded.action_type(), CorporateActionType::CompositeAction);
        assert_eq!(decoded, parent);
    }

    #[test]
    fn child_without_discriminator_fails_whole_decode() {
        let text = r#"{"type":"compositeAction","childActions":[{"id":"00000000-0000-0000-0000-000000000001"}]}"#;
        let err = serde_json::from_str::<CorporateAction>(text).expect_err("must fail");
        assert!(err.to_string().contains("type field is missing"), "{err}");
    }
}
