//! Deadlines and cancellation of in-flight calls.

mod common;

use std::time::Duration;

use common::*;
use kenall::{ClientConfig, KenallClient, KenallError, RequestContext, TimeoutCause};
use tokio::net::TcpListener;
use tokio_test::{assert_err, assert_ok};

/// A server that accepts connections and never answers.
async fn silent_server() -> (KenallClient, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let client = KenallClient::with_config(
        TOKEN,
        ClientConfig::default().with_endpoint(format!("http://{addr}")),
    )
    .unwrap();
    (client, handle)
}

#[tokio::test]
async fn test_cancelled_context_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client(&server, TOKEN);
    let ctx = RequestContext::background();
    ctx.cancel();

    let err = assert_err!(client.get_address(&ctx, "1008105").await);
    assert!(matches!(err, KenallError::Timeout(TimeoutCause::Cancelled)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_expired_context_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client(&server, TOKEN);
    let ctx = RequestContext::with_timeout(Duration::from_millis(1));
    tokio::time::sleep(Duration::from_millis(5)).await;

    let err = assert_err!(client.get_holidays(&ctx).await);
    assert!(matches!(
        err,
        KenallError::Timeout(TimeoutCause::DeadlineExceeded)
    ));
    assert_eq!(err.to_string(), "timeout: context deadline exceeded");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_deadline_aborts_pending_request() {
    let (client, server) = silent_server().await;
    let ctx = RequestContext::with_timeout(Duration::from_millis(100));

    let err = assert_err!(client.get_whoami(&ctx).await);
    assert!(matches!(
        err,
        KenallError::Timeout(TimeoutCause::DeadlineExceeded)
    ));
    server.abort();
}

#[tokio::test]
async fn test_cancel_aborts_pending_request() {
    let (client, server) = silent_server().await;
    let ctx = RequestContext::background();

    let canceller = {
        let ctx = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            ctx.cancel();
        })
    };

    let err = assert_err!(client.get_city(&ctx, "13").await);
    assert!(matches!(err, KenallError::Timeout(TimeoutCause::Cancelled)));

    canceller.await.unwrap();
    server.abort();
}

#[tokio::test]
async fn test_parent_cancel_reaches_child() {
    let (client, server) = silent_server().await;
    let parent = RequestContext::background();
    let child = parent.child().timeout(Duration::from_secs(30));

    let call = {
        let client = client.clone();
        tokio::spawn(async move { client.get_whoami(&child).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    parent.cancel();

    let err = assert_err!(call.await.unwrap());
    assert!(matches!(err, KenallError::Timeout(TimeoutCause::Cancelled)));
    server.abort();
}

#[tokio::test]
async fn test_cancelling_one_call_leaves_others_alone() {
    let mut server = mockito::Server::new_async().await;
    let _mock = stub_json(&mut server, "/whoami", WHOAMI).await;

    let client = client(&server, TOKEN);
    let cancelled = RequestContext::background();
    cancelled.cancel();
    let live = RequestContext::with_timeout(Duration::from_secs(10));

    let (first, second) = tokio::join!(client.get_whoami(&cancelled), client.get_whoami(&live));

    assert!(assert_err!(first).is_timeout());
    let res = assert_ok!(second);
    assert_eq!(res.remote_address.to_string(), "192.168.0.1");
}
