use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};

/// Canned reply for the stub generateContent endpoint.
#[derive(Clone)]
pub enum GeminiReply {
    /// 200 with the given text wrapped in a normal candidate envelope.
    Text(String),
    /// Error status with a Gemini-style error body.
    Status(StatusCode),
}

pub struct MockGemini {
    pub addr: SocketAddr,
    /// Prompt text extracted from each captured request body.
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGemini {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

pub async fn start_mock_gemini(reply: GeminiReply) -> MockGemini {
    let prompts: Arc<Mutex<Vec<String>>> = Default::default();
    let captured = prompts.clone();

    let app = Router::new().route(
        "/v1beta/models/gemini-1.5-flash:generateContent",
        post(move |Json(body): Json<serde_json::Value>| {
            let captured = captured.clone();
            let reply = reply.clone();
            async move {
                let prompt = body["contents"][0]["parts"][0]["text"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string();
                if let Ok(mut v) = captured.lock() {
                    v.push(prompt);
                }

                match reply {
                    GeminiReply::Text(text) => Json(serde_json::json!({
                        "candidates": [{
                            "content": { "parts": [{ "text": text }], "role": "model" },
                            "finishReason": "STOP"
                        }]
                    }))
                    .into_response(),
                    GeminiReply::Status(status) => (
                        status,
                        Json(serde_json::json!({
                            "error": {
                                "code": status.as_u16(),
                                "message": "upstream unavailable",
                                "status": "UNAVAILABLE"
                            }
                        })),
                    )
                        .into_response(),
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    MockGemini { addr, prompts }
}
