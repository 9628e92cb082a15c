use uuid::Uuid;

use super::range_query;
use crate::client::session::Session;
use crate::client::transport::RestTransport;
use crate::domain::{CorporateAction, DateRange};
use crate::RestError;

pub struct CorporateActionResource<'a> {
    transport: &'a RestTransport,
    session: &'a Session,
}

impl<'a> CorporateActionResource<'a> {
    pub(crate) fn new(transport: &'a RestTransport, session: &'a Session) -> Self {
        Self { transport, session }
    }

    pub async fn get_all(&self, stock: Uuid) -> Result<Vec<CorporateAction>, RestError> {
        let path = format!("stocks/{stock}/corporateactions");
        self.transport.get(self.session, &path).await
    }

    pub async fn get_all_in(
        &self,
        stock: Uuid,
        range: &DateRange,
    ) -> Result<Vec<CorporateAction>, RestError> {
        let path = format!("stocks/{stock}/corporateactions?{}", range_query(range));
        self.transport.get(self.session, &path).await
    }

    pub async fn get(&self, stock: Uuid, id: Uuid) -> Result<CorporateAction, RestError> {
        let path = format!("stocks/{stock}/corporateactions/{id}");
        self.transport.get(self.session, &path).await
    }

    pub async fn add(&self, stock: Uuid, action: &CorporateAction) -> Result<(), RestError> {
        let path = format!("stocks/{stock}/corporateactions");
        self.transport.post(self.session, &path, action).await
    }
}
