use tokio::net::TcpListener;

/// Echo server for inspecting requests built by `amadeus-core` by hand.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("ECHO_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("echoing requests on {addr}");
    mock_server::run(listener).await
}
