use serde::Serialize;
use serde_json::Value;

/// Wire spelling of a unit-like value, as produced by its `Serialize` impl.
///
/// Returns `None` when the value does not encode as a bare JSON string.
pub fn wire_name<T>(value: &T) -> Option<String>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value) {
        Ok(Value::String(name)) => Some(name),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AssetCategory, CashTransactionType, CgtCalculationMethod, CgtMethod, CorporateActionType,
        DrpMethod, RoundingRule, TransactionType, ValueFrequency,
    };

    #[test]
    fn enumerants_use_lower_camel_case() {
        assert_eq!(wire_name(&DrpMethod::RoundDown).as_deref(), Some("roundDown"));
        assert_eq!(
            wire_name(&DrpMethod::RetainCashBalance).as_deref(),
            Some("retainCashBalance")
        );
        assert_eq!(wire_name(&RoundingRule::Truncate).as_deref(), Some("truncate"));
        assert_eq!(
            wire_name(&AssetCategory::AustralianStocks).as_deref(),
            Some("australianStocks")
        );
        assert_eq!(
            wire_name(&AssetCategory::InternationalProperty).as_deref(),
            Some("internationalProperty")
        );
        assert_eq!(
            wire_name(&CgtCalculationMethod::FirstInFirstOut).as_deref(),
            Some("firstInFirstOut")
        );
        assert_eq!(wire_name(&CgtMethod::Indexation).as_deref(), Some("indexation"));
        assert_eq!(wire_name(&ValueFrequency::Week).as_deref(), Some("week"));
    }

    #[test]
    fn historical_spellings_are_kept() {
        assert_eq!(
            wire_name(&TransactionType::Acquisition).as_deref(),
            Some("aquisition")
        );
        assert_eq!(
            wire_name(&CashTransactionType::Withdrawal).as_deref(),
            Some("withdrawl")
        );
        assert_eq!(
            wire_name(&AssetCategory::InternationalFixedInterest).as_deref(),
            Some("internationlFixedInterest")
        );
    }

    #[test]
    fn discriminators_are_camel_case() {
        assert_eq!(
            wire_name(&TransactionType::UnitCountAdjustment).as_deref(),
            Some("unitCountAdjustment")
        );
        assert_eq!(
            wire_name(&CorporateActionType::SplitConsolidation).as_deref(),
            Some("splitConsolidation")
        );
    }

    #[test]
    fn unknown_enumerant_fails_to_decode() {
        let err = serde_json::from_str::<RoundingRule>("\"roundSideways\"").expect_err("must fail");
        assert!(err.to_string().contains("roundSideways"));
    }

    #[test]
    fn non_string_values_have_no_wire_name() {
        assert_eq!(wire_name(&42_u32), None);
        assert_eq!(wire_name(&Some("x")).as_deref(), Some("x"));
    }
}
