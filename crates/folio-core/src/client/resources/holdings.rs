use uuid::Uuid;

use super::{date_query, frequency_query, range_query};
use crate::client::session::Session;
use crate::client::transport::RestTransport;
use crate::domain::{
    ChangeDrpParticipationCommand, CorporateActionsResponse, Date, DateRange,
    DetailedUnrealisedGainsResponse, Holding, PortfolioValueResponse,
    SimpleUnrealisedGainsResponse, TransactionsResponse, ValueFrequency,
};
use crate::RestError;

/// Per-stock views of the session's selected portfolio.
pub struct HoldingResource<'a> {
    transport: &'a RestTransport,
    session: &'a Session,
}

impl<'a> HoldingResource<'a> {
    pub(crate) fn new(transport: &'a RestTransport, session: &'a Session) -> Self {
        Self { transport, session }
    }

    pub async fn get_all(&self, date: Date) -> Result<Vec<Holding>, RestError> {
        let path = format!("{}?{}", self.base()?, date_query(date));
        self.transport.get(self.session, &path).await
    }

    pub async fn get_all_in(&self, range: &DateRange) -> Result<Vec<Holding>, RestError> {
        let path = format!("{}?{}", self.base()?, range_query(range));
        self.transport.get(self.session, &path).await
    }

    pub async fn get(&self, stock: Uuid, date: Date) -> Result<Holding, RestError> {
        let path = format!("{}/{stock}?{}", self.base()?, date_query(date));
        self.transport.get(self.session, &path).await
    }

    pub async fn value(
        &self,
        stock: Uuid,
        range: &DateRange,
        frequency: ValueFrequency,
    ) -> Result<PortfolioValueResponse, RestError> {
        let path = format!(
            "{}/{stock}/value?{}&{}",
            self.base()?,
            range_query(range),
            frequency_query(frequency)
        );
        self.transport.get(self.session, &path).await
    }

    pub async fn transactions(
        &self,
        stock: Uuid,
        range: &DateRange,
    ) -> Result<TransactionsResponse, RestError> {
        let path = format!("{}/{stock}/transactions?{}", self.base()?, range_query(range));
        self.transport.get(self.session, &path).await
    }

    pub async fn capital_gains(
        &self,
        stock: Uuid,
        date: Date,
    ) -> Result<SimpleUnrealisedGainsResponse, RestError> {
        let path = format!("{}/{stock}/capitalgains?{}", self.base()?, date_query(date));
        self.transport.get(self.session, &path).await
    }

    pub async fn detailed_capital_gains(
        &self,
        stock: Uuid,
        date: Date,
    ) -> Result<DetailedUnrealisedGainsResponse, RestError> {
        let path = format!(
            "{}/{stock}/detailedcapitalgains?{}",
            self.base()?,
            date_query(date)
        );
        self.transport.get(self.session, &path).await
    }

    pub async fn corporate_actions(&self, stock: Uuid) -> Result<CorporateActionsResponse, RestError> {
        let path = format!("{}/{stock}/corporateactions", self.base()?);
        self.transport.get(self.session, &path).await
    }

    pub async fn change_drp_participation(
        &self,
        stock: Uuid,
        participate: bool,
    ) -> Result<(), RestError> {
        let command = ChangeDrpParticipationCommand {
            holding: stock,
            participate,
        };
        let path = format!("{}/{stock}/changedrpparticipation", self.base()?);
        self.transport.post(self.session, &path, &command).await
    }

    fn base(&self) -> Result<String, RestError> {
        Ok(format!(
            "portfolio/{}/holdings",
            self.session.require_portfolio()?
        ))
    }
}
