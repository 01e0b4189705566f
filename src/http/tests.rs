use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::domain::{HttpMethod, Job};
use crate::error::TransportError;

fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

fn job(method: HttpMethod, url: &str) -> Result<Job, String> {
    Job::new(0, method, url).map_err(|err| err.to_string())
}

#[test]
fn get_sends_headers_and_drains_body() -> Result<(), String> {
    run_async_test(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fast"))
            .and(header("x-probe", "kronos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .expect(1)
            .mount(&server)
            .await;

        let transport =
            ReqwestTransport::new(Duration::from_secs(5)).map_err(|err| err.to_string())?;
        let mut headers = BTreeMap::new();
        headers.insert("x-probe".to_owned(), "kronos".to_owned());
        let request =
            job(HttpMethod::Get, &format!("{}/fast", server.uri()))?.with_headers(headers);

        let response = transport
            .execute(&request)
            .await
            .map_err(|err| err.to_string())?;
        if response.status() != 200 {
            return Err(format!("Unexpected status: {}", response.status()));
        }
        let bytes = response.drain().await.map_err(|err| err.to_string())?;
        if bytes != 5 {
            return Err(format!("Unexpected body size: {}", bytes));
        }
        Ok(())
    })
}

#[test]
fn post_sends_body() -> Result<(), String> {
    run_async_test(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/items"))
            .and(body_string("{}"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let transport =
            ReqwestTransport::new(Duration::from_secs(5)).map_err(|err| err.to_string())?;
        let request = job(HttpMethod::Post, &format!("{}/items", server.uri()))?.with_body("{}");
        let response = transport
            .execute(&request)
            .await
            .map_err(|err| err.to_string())?;
        if response.status() != 201 {
            return Err(format!("Unexpected status: {}", response.status()));
        }
        Ok(())
    })
}

#[test]
fn non_success_status_is_still_a_response() -> Result<(), String> {
    run_async_test(async {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let transport =
            ReqwestTransport::new(Duration::from_secs(5)).map_err(|err| err.to_string())?;
        let request = job(HttpMethod::Delete, &format!("{}/item/1", server.uri()))?;
        let response = transport
            .execute(&request)
            .await
            .map_err(|err| err.to_string())?;
        if response.status() != 503 {
            return Err(format!("Unexpected status: {}", response.status()));
        }
        Ok(())
    })
}

#[test]
fn slow_server_times_out() -> Result<(), String> {
    run_async_test(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let timeout = Duration::from_millis(200);
        let transport = ReqwestTransport::new(timeout).map_err(|err| err.to_string())?;
        let request = job(HttpMethod::Get, &format!("{}/slow", server.uri()))?;
        match transport.execute(&request).await {
            Err(TransportError::Timeout { timeout: reported }) if reported == timeout => Ok(()),
            other => Err(format!("Expected timeout, got {:?}", other)),
        }
    })
}

#[test]
fn unparsable_url_is_a_transport_error() -> Result<(), String> {
    run_async_test(async {
        let transport =
            ReqwestTransport::new(Duration::from_secs(1)).map_err(|err| err.to_string())?;
        let request = job(HttpMethod::Get, "not a url")?;
        match transport.execute(&request).await {
            Err(TransportError::Build { .. }) => Ok(()),
            other => Err(format!("Expected build error, got {:?}", other)),
        }
    })
}

#[test]
fn refused_connection_is_a_transport_error() -> Result<(), String> {
    run_async_test(async {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
        let addr = listener.local_addr().map_err(|err| err.to_string())?;
        drop(listener);

        let transport =
            ReqwestTransport::new(Duration::from_secs(2)).map_err(|err| err.to_string())?;
        let request = job(HttpMethod::Post, &format!("http://{}/down", addr))?.with_body("{}");
        match transport.execute(&request).await {
            Err(TransportError::Connect { .. } | TransportError::Request { .. }) => Ok(()),
            other => Err(format!("Expected connect error, got {:?}", other)),
        }
    })
}
