//! Behavior-driven tests for the REST client
//!
//! These tests verify HOW the client talks to the portfolio service: which
//! URLs it builds, which headers it sends, how sessions change on sign-in, and
//! how service failures surface to the caller. A recording transport stands in
//! for the network.

use std::sync::Arc;

use folio_core::domain::{Acquisition, CashTransaction, StockResponse, ValueFrequency};
use folio_core::{
    ClientConfig, CodecError, DateRange, HttpClient, HttpError, HttpMethod, HttpResponse,
    RestClient, RestError, Transaction, TransactionDetails,
};
use folio_tests::{body_json, client_over, date, RecordingHttpClient, BASE_URL};
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn when_user_signs_in_later_requests_carry_the_bearer_token() {
    // Given: A service that issues a token and then lists stocks
    let http = Arc::new(
        RecordingHttpClient::default()
            .reply(HttpResponse::ok_json(r#"{"token":"issued-token"}"#))
            .reply(HttpResponse::ok_json(r#"[{"asxCode":"ABC"}]"#)),
    );
    let anonymous = client_over(&http);

    // When: The user authenticates and lists stocks
    let signed_in = anonymous
        .authenticate("JoeBlogs", "secret")
        .await
        .expect("authentication must succeed");
    let stocks = signed_in.stocks().get_all().await.expect("must list");

    // Then: The sign-in request had no token and the follow-up did
    let requests = http.requests();
    assert_eq!(requests.len(), 2);

    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].url, format!("{BASE_URL}/users/authenticate"));
    assert_eq!(requests[0].header("authorization"), None);
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
    assert_eq!(
        body_json(&requests[0]),
        serde_json::from_str::<Value>(r#"{"userName":"JoeBlogs","password":"secret"}"#)
            .expect("fixture")
    );

    assert_eq!(requests[1].method, HttpMethod::Get);
    assert_eq!(requests[1].header("authorization"), Some("Bearer issued-token"));
    assert_eq!(stocks.len(), 1);
    assert_eq!(stocks[0].asx_code.as_deref(), Some("ABC"));

    // And: The original client stays anonymous
    assert!(!anonymous.session().is_authenticated());
    assert_eq!(signed_in.session().token(), Some("issued-token"));
}

#[tokio::test]
async fn when_sign_in_is_rejected_the_existing_client_is_unchanged() {
    // Given: A signed-in client
    let http = Arc::new(
        RecordingHttpClient::default()
            .reply(HttpResponse::ok_json(r#"{"token":"first-token"}"#))
            .reply(HttpResponse::new(403, "Forbidden")),
    );
    let signed_in = client_over(&http)
        .authenticate("JoeBlogs", "secret")
        .await
        .expect("first sign-in must succeed");

    // When: A second sign-in with bad credentials fails
    let err = signed_in
        .authenticate("JoeBlogs", "wrong")
        .await
        .expect_err("second sign-in must fail");

    // Then: The failure carries the status and the client keeps its token
    assert!(matches!(err, RestError::Status { status: 403, .. }));
    assert_eq!(err.status(), Some(403));
    assert_eq!(signed_in.session().token(), Some("first-token"));
    assert_eq!(http.requests()[1].header("authorization"), None);
}

#[tokio::test]
async fn when_signing_out_the_portfolio_selection_is_kept() {
    let http = Arc::new(RecordingHttpClient::default());
    let portfolio = Uuid::from_u128(42);
    let client = client_over(&http).with_portfolio(portfolio);

    let signed_out = client.sign_out();

    assert!(!signed_out.session().is_authenticated());
    assert_eq!(signed_out.session().portfolio(), Some(portfolio));
}

// =============================================================================
// Failure mapping
// =============================================================================

#[tokio::test]
async fn when_service_returns_not_found_the_status_is_reported() {
    // Given: A service that does not know the stock
    let http = Arc::new(RecordingHttpClient::default().reply(HttpResponse::new(404, "Not Found")));
    let client = client_over(&http);

    // When: The stock is requested
    let err = client
        .stocks()
        .get(Uuid::from_u128(9))
        .await
        .expect_err("must fail");

    // Then: The error exposes the status code
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "server responded 404 Not Found");
}

#[tokio::test]
async fn when_a_get_returns_html_it_is_rejected_before_decoding() {
    let http = Arc::new(
        RecordingHttpClient::default().reply(
            HttpResponse::new(200, "OK")
                .with_content_type("text/html; charset=utf-8")
                .with_body("<html></html>"),
        ),
    );
    let client = client_over(&http);

    let err = client.stocks().get_all().await.expect_err("must fail");

    assert!(
        matches!(&err, RestError::UnsupportedMediaType { content_type } if content_type == "text/html"),
        "{err}"
    );
    assert_eq!(err.status(), Some(415));
}

#[tokio::test]
async fn when_a_body_is_not_json_a_codec_error_is_reported() {
    let http = Arc::new(RecordingHttpClient::default().reply(HttpResponse::ok_json("{not json")));
    let client = client_over(&http);

    let err = client
        .stocks()
        .get(Uuid::from_u128(9))
        .await
        .expect_err("must fail");

    assert!(matches!(&err, RestError::Codec(codec) if codec.is_syntax()), "{err}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn when_the_transport_times_out_the_error_is_surfaced() {
    let http = Arc::new(RecordingHttpClient::default().fail(HttpError::timeout("deadline exceeded")));
    let client = client_over(&http);

    let err = client.stocks().get_all().await.expect_err("must fail");

    assert!(matches!(&err, RestError::Transport(transport) if transport.timed_out()));
}

#[tokio::test]
async fn when_no_portfolio_is_selected_nothing_is_sent() {
    let http = Arc::new(RecordingHttpClient::default());
    let client = client_over(&http);

    let err = client
        .portfolio()
        .summary(date(2020, 6, 30))
        .await
        .expect_err("must fail");

    assert!(matches!(err, RestError::PortfolioNotSelected));
    assert!(http.requests().is_empty());
}

// =============================================================================
// Resource paths
// =============================================================================

#[tokio::test]
async fn when_portfolio_reports_are_requested_the_paths_carry_the_selection() {
    // Given: A client scoped to a portfolio
    let portfolio = Uuid::parse_str("5d5de669-726c-4c5d-bb2e-6bdf36af9aba").expect("valid id");
    let http = Arc::new(
        RecordingHttpClient::default()
            .reply(HttpResponse::ok_json(r#"{"openingBalance":1000.00}"#))
            .reply(HttpResponse::ok_json(r#"{"values":[]}"#)),
    );
    let client = client_over(&http).with_portfolio(portfolio);
    let range = DateRange::new(date(2001, 2, 3), date(2008, 6, 30)).expect("valid range");

    // When: Performance and a holding's weekly value are requested
    let performance = client
        .portfolio()
        .performance(&range)
        .await
        .expect("must decode");
    client
        .holdings()
        .value(Uuid::from_u128(7), &range, ValueFrequency::Week)
        .await
        .expect("must decode");

    // Then: Both URLs follow the service layout exactly
    let requests = http.requests();
    assert_eq!(
        requests[0].url,
        format!(
            "{BASE_URL}/portfolio/5d5de669-726c-4c5d-bb2e-6bdf36af9aba/performance?fromdate=2001-02-03&todate=2008-06-30"
        )
    );
    assert_eq!(
        requests[1].url,
        format!(
            "{BASE_URL}/portfolio/5d5de669-726c-4c5d-bb2e-6bdf36af9aba/holdings/00000000-0000-0000-0000-000000000007/value?fromdate=2001-02-03&todate=2008-06-30&frequency=week"
        )
    );
    assert_eq!(performance.opening_balance, Decimal::new(100000, 2));
}

#[tokio::test]
async fn when_stocks_are_searched_the_query_is_url_encoded() {
    let http = Arc::new(
        RecordingHttpClient::default()
            .reply(HttpResponse::ok_json("[]"))
            .reply(HttpResponse::ok_json("[]")),
    );
    let client = client_over(&http);

    let found: Vec<StockResponse> = client.stocks().find("ARG & Co").await.expect("must decode");
    client
        .stocks()
        .find_on("ARG", date(2020, 1, 31))
        .await
        .expect("must decode");

    assert!(found.is_empty());
    let requests = http.requests();
    assert_eq!(requests[0].url, format!("{BASE_URL}/stocks?query=ARG%20%26%20Co"));
    assert_eq!(
        requests[1].url,
        format!("{BASE_URL}/stocks?query=ARG&date=2020-01-31")
    );
}

#[tokio::test]
async fn when_a_trading_calendar_is_requested_the_year_is_in_the_path() {
    let http = Arc::new(RecordingHttpClient::default().reply(HttpResponse::ok_json(
        r#"{"year":2020,"nonTradingDays":[{"date":"2020-01-01","description":"New Year's Day"}]}"#,
    )));
    let client = client_over(&http);

    let calendar = client
        .trading_calendars()
        .get(2020)
        .await
        .expect("must decode");

    assert_eq!(http.requests()[0].url, format!("{BASE_URL}/tradingcalendars/2020"));
    assert!(!calendar.is_trading_day(date(2020, 1, 1)));
}

// =============================================================================
// Transactions
// =============================================================================

#[tokio::test]
async fn when_a_transaction_is_fetched_the_concrete_variant_is_decoded() {
    let portfolio = Uuid::from_u128(1);
    let http = Arc::new(RecordingHttpClient::default().reply(HttpResponse::ok_json(
        r#"{"id":"00000000-0000-0000-0000-000000000005","stock":"00000000-0000-0000-0000-000000000002",
            "transactionDate":"2000-01-10","type":"aquisition","units":100,"averagePrice":12.00}"#,
    )));
    let client = client_over(&http).with_portfolio(portfolio);

    let transaction = client
        .transactions()
        .get(Uuid::from_u128(5))
        .await
        .expect("must decode");

    assert_eq!(
        http.requests()[0].url,
        format!(
            "{BASE_URL}/portfolio/00000000-0000-0000-0000-000000000001/transactions/00000000-0000-0000-0000-000000000005"
        )
    );
    assert!(matches!(
        transaction.details,
        TransactionDetails::Acquisition(Acquisition { units: 100, .. })
    ));
}

#[tokio::test]
async fn when_transactions_are_added_in_bulk_the_body_is_one_array() {
    // Given: Two transactions of different variants
    let portfolio = Uuid::from_u128(1);
    let http = Arc::new(RecordingHttpClient::default());
    let client = client_over(&http).with_portfolio(portfolio);
    let batch = vec![
        Transaction::new(
            Uuid::from_u128(10),
            Uuid::from_u128(2),
            date(2000, 1, 10),
            Acquisition::default(),
        ),
        Transaction::new(
            Uuid::from_u128(11),
            Uuid::nil(),
            date(2000, 1, 11),
            CashTransaction {
                amount: Decimal::new(5000, 2),
                ..CashTransaction::default()
            },
        ),
    ];

    // When: They are submitted together
    client
        .transactions()
        .add_all(&batch)
        .await
        .expect("must send");

    // Then: One POST carries a JSON array with each discriminator
    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    let body = body_json(&requests[0]);
    let kinds: Vec<_> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|element| element["type"].clone())
        .collect();
    assert_eq!(
        kinds,
        vec![Value::from("aquisition"), Value::from("cashTransaction")]
    );
}

#[tokio::test]
async fn when_a_transaction_is_deleted_a_delete_is_sent() {
    let portfolio = Uuid::from_u128(1);
    let http = Arc::new(RecordingHttpClient::default());
    let client = client_over(&http).with_portfolio(portfolio);

    client
        .transactions()
        .delete(Uuid::from_u128(5))
        .await
        .expect("must send");

    let requests = http.requests();
    assert_eq!(requests[0].method, HttpMethod::Delete);
    assert!(requests[0].body.is_none());
    assert!(requests[0]
        .url
        .ends_with("/transactions/00000000-0000-0000-0000-000000000005"));
}

#[tokio::test]
async fn when_a_request_is_sent_the_configured_timeout_applies() {
    let http = Arc::new(RecordingHttpClient::default().reply(HttpResponse::ok_json("[]")));
    let config = ClientConfig::new(BASE_URL)
        .expect("valid config")
        .with_timeout_ms(1_500);
    let client = RestClient::with_http_client(config, Arc::clone(&http) as Arc<dyn HttpClient>)
        .expect("client must build");

    client.stocks().get_all().await.expect("must decode");

    assert_eq!(http.requests()[0].timeout_ms, 1_500);
    assert_eq!(http.requests()[0].header("accept"), Some("application/json"));
}

#[test]
fn codec_errors_are_distinct_from_status_errors() {
    let err = RestError::from(CodecError::Io(std::io::Error::other("closed")));
    assert_eq!(err.status(), None);
}
