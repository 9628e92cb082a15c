use super::{date_query, frequency_query, range_query};
use crate::client::session::Session;
use crate::client::transport::RestTransport;
use crate::domain::{
    CashAccountTransactionsResponse, CgtLiabilityResponse, CorporateActionsResponse,
    CreatePortfolioCommand, Date, DateRange, DetailedUnrealisedGainsResponse, IncomeResponse,
    PortfolioPerformanceResponse, PortfolioPropertiesResponse, PortfolioSummaryResponse,
    PortfolioValueResponse, SimpleUnrealisedGainsResponse, TransactionsResponse, ValueFrequency,
};
use crate::RestError;

/// Reports for the session's selected portfolio.
pub struct PortfolioResource<'a> {
    transport: &'a RestTransport,
    session: &'a Session,
}

impl<'a> PortfolioResource<'a> {
    pub(crate) fn new(transport: &'a RestTransport, session: &'a Session) -> Self {
        Self { transport, session }
    }

    pub async fn create(&self, command: &CreatePortfolioCommand) -> Result<(), RestError> {
        self.transport.post(self.session, "portfolio", command).await
    }

    pub async fn properties(&self) -> Result<PortfolioPropertiesResponse, RestError> {
        let path = format!("{}/properties", self.base()?);
        self.transport.get(self.session, &path).await
    }

    pub async fn summary(&self, date: Date) -> Result<PortfolioSummaryResponse, RestError> {
        let path = format!("{}/summary?{}", self.base()?, date_query(date));
        self.transport.get(self.session, &path).await
    }

    pub async fn performance(
        &self,
        range: &DateRange,
    ) -> Result<PortfolioPerformanceResponse, RestError> {
        let path = format!("{}/performance?{}", self.base()?, range_query(range));
        self.transport.get(self.session, &path).await
    }

    pub async fn value(
        &self,
        range: &DateRange,
        frequency: ValueFrequency,
    ) -> Result<PortfolioValueResponse, RestError> {
        let path = format!(
            "{}/value?{}&{}",
            self.base()?,
            range_query(range),
            frequency_query(frequency)
        );
        self.transport.get(self.session, &path).await
    }

    pub async fn transactions(&self, range: &DateRange) -> Result<TransactionsResponse, RestError> {
        let path = format!("{}/transactions?{}", self.base()?, range_query(range));
        self.transport.get(self.session, &path).await
    }

    pub async fn capital_gains(&self, date: Date) -> Result<SimpleUnrealisedGainsResponse, RestError> {
        let path = format!("{}/capitalgains?{}", self.base()?, date_query(date));
        self.transport.get(self.session, &path).await
    }

    pub async fn detailed_capital_gains(
        &self,
        date: Date,
    ) -> Result<DetailedUnrealisedGainsResponse, RestError> {
        let path = format!("{}/detailedcapitalgains?{}", self.base()?, date_query(date));
        self.transport.get(self.session, &path).await
    }

    pub async fn cgt_liability(&self, range: &DateRange) -> Result<CgtLiabilityResponse, RestError> {
        let path = format!("{}/cgtliability?{}", self.base()?, range_query(range));
        self.transport.get(self.session, &path).await
    }

    pub async fn cash_account(
        &self,
        range: &DateRange,
    ) -> Result<CashAccountTransactionsResponse, RestError> {
        let path = format!("{}/cashaccount?{}", self.base()?, range_query(range));
        self.transport.get(self.session, &path).await
    }

    pub async fn income(&self, range: &DateRange) -> Result<IncomeResponse, RestError> {
        let path = format!("{}/income?{}", self.base()?, range_query(range));
        self.transport.get(self.session, &path).await
    }

    pub async fn corporate_actions(&self) -> Result<CorporateActionsResponse, RestError> {
        let path = format!("{}/corporateactions", self.base()?);
        self.transport.get(self.session, &path).await
    }

    fn base(&self) -> Result<String, RestError> {
        Ok(format!("portfolio/{}", self.session.require_portfolio()?))
    }
}
