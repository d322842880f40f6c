mod mock_gemini;

pub use mock_gemini::{GeminiReply, MockGemini, start_mock_gemini};

use std::net::SocketAddr;

use api_interview::InterviewConfig;

pub async fn start_server(config: InterviewConfig) -> SocketAddr {
    let app = api_interview::router(config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}
