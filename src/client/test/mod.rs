//! Client tests against the real router served on an ephemeral local port.

use chrono::Duration;
use test_utils::{builder::TestBuilder, context::TestContext};
use tokio::net::TcpListener;
use url::Url;

use crate::{
    client::api::ApiClient,
    server::{router::router, service::identity::token::TokenIssuer, state::AppState},
};


/// Serves the full router over a fresh database.
///
/// The returned context owns the database and must outlive the test.
async fn serve() -> (TestContext, ApiClient) {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let layer = test.session_layer().await.unwrap();
    let db = test.db.clone().unwrap();

    let tokens = TokenIssuer::new("test-signing-key", "gamehub", "gamehub", Duration::minutes(5));
    let app = router().with_state(AppState::new(db, tokens)).layer(layer);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base_url = Url::parse(&format!("http://{}", address)).unwrap();
    (test, ApiClient::new(base_url).unwrap())
}
