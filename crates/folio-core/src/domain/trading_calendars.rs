use serde::{Deserialize, Serialize};

use crate::domain::Date;

/// Exchange closures for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradingCalendar {
    pub year: i32,
    pub non_trading_days: Vec<NonTradingDay>,
}

impl TradingCalendar {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            non_trading_days: Vec::new(),
        }
    }

    pub fn add_non_trading_day(&mut self, date: Date, description: impl Into<String>) {
        self.non_trading_days.push(NonTradingDay {
            date,
            description: Some(description.into()),
        });
    }

    pub fn is_trading_day(&self, date: Date) -> bool {
        !self.non_trading_days.iter().any(|day| day.date == date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NonTradingDay {
    pub date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_round_trips() {
        let mut calendar = TradingCalendar::new(2013);
        calendar.add_non_trading_day(Date::new(2013, 1, 1).expect("valid"), "New Years Day");

        let text = serde_json::to_string(&calendar).expect("must encode");
        assert_eq!(
            text,
            r#"{"year":2013,"nonTradingDays":[{"date":"2013-01-01","description":"New Years Day"}]}"#
        );

        let decoded: TradingCalendar = serde_json::from_str(&text).expect("must decode");
        assert_eq!(decoded, calendar);
        assert!(!decoded.is_trading_day(Date::new(2013, 1, 1).expect("valid")));
        assert!(decoded.is_trading_day(Date::new(2013, 1, 2).expect("valid")));
    }
}
