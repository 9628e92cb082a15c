mod calendar;
mod corporate_actions;
mod portfolios;
mod stocks;
mod trading_calendars;
mod transactions;
mod users;

pub use calendar::{Date, DateRange, DateTime, Time};
pub use corporate_actions::{
    CapitalReturn, CompositeAction, CorporateAction, CorporateActionDetails, CorporateActionType,
    Dividend, ResultingStock, SplitConsolidation, Transformation,
};
pub use portfolios::{
    CashAccountTransaction, CashAccountTransactionsResponse, CgtEventItem, CgtLiabilityEvent,
    CgtLiabilityResponse, CgtMethod, ChangeDrpParticipationCommand, CorporateActionItem,
    CorporateActionsResponse, CreatePortfolioCommand, DetailedUnrealisedGainsItem,
    DetailedUnrealisedGainsResponse, Holding, HoldingPerformance, HoldingProperties, IncomeItem,
    IncomeResponse, PortfolioPerformanceResponse, PortfolioPropertiesResponse,
    PortfolioSummaryResponse, PortfolioValueResponse, SimpleUnrealisedGainsItem,
    SimpleUnrealisedGainsResponse, Stock, TransactionItem, TransactionsResponse, ValueFrequency,
};
pub use stocks::{
    AssetCategory, ChangeDividendRulesCommand, ChangeRelativeNtaCommand, ChangeStockCommand,
    ChildSecurityNta, ClosingPrice, CreateStockCommand, DelistStockCommand, DrpMethod,
    HistoricDividendRules, HistoricProperties, RelativeNta, RelativeNtaPeriod,
    RelativeNtaResponse, RoundingRule, StapledSecurityChild, StockHistoryResponse,
    StockPriceResponse, StockResponse, UpdateClosingPricesCommand,
};
pub use trading_calendars::{NonTradingDay, TradingCalendar};
pub use transactions::{
    Acquisition, CashTransaction, CashTransactionType, CgtCalculationMethod, CostBaseAdjustment,
    Disposal, IncomeReceived, OpeningBalance, ReturnOfCapital, Transaction, TransactionDetails,
    TransactionType, UnitCountAdjustment,
};
pub use users::{AuthenticationRequest, AuthenticationResponse};
