use uuid::Uuid;

use crate::client::session::Session;
use crate::client::transport::RestTransport;
use crate::domain::Transaction;
use crate::RestError;

pub struct TransactionResource<'a> {
    transport: &'a RestTransport,
    session: &'a Session,
}

impl<'a> TransactionResource<'a> {
    pub(crate) fn new(transport: &'a RestTransport, session: &'a Session) -> Self {
        Self { transport, session }
    }

    pub async fn get(&self, id: Uuid) -> Result<Transaction, RestError> {
        let path = format!("{}/{id}", self.base()?);
        self.transport.get(self.session, &path).await
    }

    pub async fn add(&self, transaction: &Transaction) -> Result<(), RestError> {
        let path = self.base()?;
        self.transport.post(self.session, &path, transaction).await
    }

    /// Submit several transactions in one request body.
    pub async fn add_all(&self, transactions: &[Transaction]) -> Result<(), RestError> {
        let path = self.base()?;
        self.transport.post(self.session, &path, transactions).await
    }

    pub async fn update(&self, transaction: &Transaction) -> Result<(), RestError> {
        let path = format!("{}/{}", self.base()?, transaction.id);
        self.transport.post(self.session, &path, transaction).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RestError> {
        let path = format!("{}/{id}", self.base()?);
        self.transport.delete(self.session, &path).await
    }

    /// Transactions the service would generate for a corporate action.
    pub async fn for_corporate_action(
        &self,
        stock: Uuid,
        action: Uuid,
    ) -> Result<Vec<Transaction>, RestError> {
        let path = format!("{}/{stock}/corporateactions/{action}", self.base()?);
        self.transport.get(self.session, &path).await
    }

    fn base(&self) -> Result<String, RestError> {
        Ok(format!(
            "portfolio/{}/transactions",
            self.session.require_portfolio()?
        ))
    }
}
