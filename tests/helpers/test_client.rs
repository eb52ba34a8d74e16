// Test Client Helpers
//
// Thin awc wrapper that keeps the flow session cookie between calls.

use actix_web::http::{header::HeaderMap, StatusCode};
use awc::cookie::Cookie;
use awc::{ClientRequest, SendClientRequest};
use checkout_mock::flows::services::SESSION_COOKIE;
use serde_json::Value;

use super::test_server::TestServer;

/// Everything a test looks at in a response
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    /// Session cookie issued by this response, if any
    pub session_cookie: Option<Cookie<'static>>,
}

/// Browser-like client: replays the last session cookie it received
pub struct FlowClient<'a> {
    srv: &'a TestServer,
    cookie: Option<Cookie<'static>>,
}

impl<'a> FlowClient<'a> {
    pub fn new(srv: &'a TestServer) -> Self {
        Self { srv, cookie: None }
    }

    pub fn with_cookie(mut self, cookie: Cookie<'static>) -> Self {
        self.cookie = Some(cookie);
        self
    }

    pub fn with_token(self, token: String) -> Self {
        self.with_cookie(Cookie::new(SESSION_COOKIE, token))
    }

    pub fn cookie(&self) -> Option<&Cookie<'static>> {
        self.cookie.as_ref()
    }

    pub fn server(&self) -> &'a TestServer {
        self.srv
    }

    pub async fn get(&mut self, path: &str) -> Reply {
        let req = self.srv.get(path);
        self.send(req, None).await
    }

    pub async fn post(&mut self, path: &str, body: &Value) -> Reply {
        let req = self.srv.post(path);
        self.send(req, Some(body)).await
    }

    pub async fn put(&mut self, path: &str, body: &Value) -> Reply {
        let req = self.srv.put(path);
        self.send(req, Some(body)).await
    }

    pub async fn delete(&mut self, path: &str) -> Reply {
        let req = self.srv.delete(path);
        self.send(req, None).await
    }

    /// POST a raw body, for malformed payloads
    pub async fn post_raw(&mut self, path: &str, content_type: &str, body: &'static str) -> Reply {
        let req = self
            .with_session(self.srv.post(path))
            .insert_header(("content-type", content_type));
        self.dispatch(req.send_body(body)).await
    }

    /// Send a request the caller prepared (extra headers)
    pub async fn send(&mut self, req: ClientRequest, body: Option<&Value>) -> Reply {
        let req = self.with_session(req);
        let pending = match body {
            Some(body) => req.send_json(body),
            None => req.send(),
        };
        self.dispatch(pending).await
    }

    fn with_session(&self, req: ClientRequest) -> ClientRequest {
        match &self.cookie {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        }
    }

    async fn dispatch(&mut self, pending: SendClientRequest) -> Reply {
        let mut response = pending
            .await
            .expect("request should reach the test server");

        let session_cookie = response.cookie(SESSION_COOKIE);
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.body().await.expect("readable response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body should be JSON")
        };

        if let Some(cookie) = &session_cookie {
            self.cookie = Some(cookie.clone());
        }

        Reply {
            status,
            headers,
            body,
            session_cookie,
        }
    }
}
