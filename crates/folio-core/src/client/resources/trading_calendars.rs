use crate::client::session::Session;
use crate::client::transport::RestTransport;
use crate::domain::TradingCalendar;
use crate::RestError;

pub struct TradingCalendarResource<'a> {
    transport: &'a RestTransport,
    session: &'a Session,
}

impl<'a> TradingCalendarResource<'a> {
    pub(crate) fn new(transport: &'a RestTransport, session: &'a Session) -> Self {
        Self { transport, session }
    }

    pub async fn get(&self, year: i32) -> Result<TradingCalendar, RestError> {
        let path = format!("tradingcalendars/{year}");
        self.transport.get(self.session, &path).await
    }

    pub async fn update(&self, calendar: &TradingCalendar) -> Result<(), RestError> {
        let path = format!("tradingcalendars/{}", calendar.year);
        self.transport.post(self.session, &path, calendar).await
    }
}
