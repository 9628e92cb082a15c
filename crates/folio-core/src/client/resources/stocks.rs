use uuid::Uuid;

use super::{date_query, range_query};
use crate::client::session::Session;
use crate::client::transport::RestTransport;
use crate::domain::{
    ChangeDividendRulesCommand, ChangeRelativeNtaCommand, ChangeStockCommand, CreateStockCommand,
    Date, DateRange, DelistStockCommand, StockHistoryResponse, StockPriceResponse, StockResponse,
    UpdateClosingPricesCommand,
};
use crate::RestError;

pub struct StockResource<'a> {
    transport: &'a RestTransport,
    session: &'a Session,
}

impl<'a> StockResource<'a> {
    pub(crate) fn new(transport: &'a RestTransport, session: &'a Session) -> Self {
        Self { transport, session }
    }

    pub async fn get_all(&self) -> Result<Vec<StockResponse>, RestError> {
        self.transport.get(self.session, "stocks").await
    }

    pub async fn get_all_on(&self, date: Date) -> Result<Vec<StockResponse>, RestError> {
        let path = format!("stocks?{}", date_query(date));
        self.transport.get(self.session, &path).await
    }

    pub async fn get_all_in(&self, range: &DateRange) -> Result<Vec<StockResponse>, RestError> {
        let path = format!("stocks?{}", range_query(range));
        self.transport.get(self.session, &path).await
    }

    pub async fn get(&self, id: Uuid) -> Result<StockResponse, RestError> {
        self.transport.get(self.session, &format!("stocks/{id}")).await
    }

    pub async fn get_on(&self, id: Uuid, date: Date) -> Result<StockResponse, RestError> {
        let path = format!("stocks/{id}?{}", date_query(date));
        self.transport.get(self.session, &path).await
    }

    /// Search by ASX code or name.
    pub async fn find(&self, query: &str) -> Result<Vec<StockResponse>, RestError> {
        let path = format!("stocks?query={}", urlencoding::encode(query));
        self.transport.get(self.session, &path).await
    }

    pub async fn find_on(&self, query: &str, date: Date) -> Result<Vec<StockResponse>, RestError> {
        let path = format!(
            "stocks?query={}&{}",
            urlencoding::encode(query),
            date_query(date)
        );
        self.transport.get(self.session, &path).await
    }

    pub async fn find_in(
        &self,
        query: &str,
        range: &DateRange,
    ) -> Result<Vec<StockResponse>, RestError> {
        let path = format!(
            "stocks?query={}&{}",
            urlencoding::encode(query),
            range_query(range)
        );
        self.transport.get(self.session, &path).await
    }

    pub async fn history(&self, id: Uuid) -> Result<StockHistoryResponse, RestError> {
        let path = format!("stocks/{id}/history");
        self.transport.get(self.session, &path).await
    }

    pub async fn closing_prices(
        &self,
        id: Uuid,
        range: &DateRange,
    ) -> Result<StockPriceResponse, RestError> {
        let path = format!("stocks/{id}/closingprices?{}", range_query(range));
        self.transport.get(self.session, &path).await
    }

    pub async fn create(&self, command: &CreateStockCommand) -> Result<(), RestError> {
        self.transport.post(self.session, "stocks", command).await
    }

    pub async fn change(&self, command: &ChangeStockCommand) -> Result<(), RestError> {
        let path = format!("stocks/{}/change", command.id);
        self.transport.post(self.session, &path, command).await
    }

    pub async fn delist(&self, command: &DelistStockCommand) -> Result<(), RestError> {
        let path = format!("stocks/{}/delist", command.id);
        self.transport.post(self.session, &path, command).await
    }

    pub async fn update_closing_prices(
        &self,
        command: &UpdateClosingPricesCommand,
    ) -> Result<(), RestError> {
        let path = format!("stocks/{}/closingprices", command.id);
        self.transport.post(self.session, &path, command).await
    }

    pub async fn change_dividend_rules(
        &self,
        command: &ChangeDividendRulesCommand,
    ) -> Result<(), RestError> {
        let path = format!("stocks/{}/changedividendrules", command.id);
        self.transport.post(self.session, &path, command).await
    }

    pub async fn change_relative_ntas(
        &self,
        command: &ChangeRelativeNtaCommand,
    ) -> Result<(), RestError> {
        let path = format!("stocks/{}/changerelativenta", command.id);
        self.transport.post(self.session, &path, command).await
    }
}
