use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::process::Command;

/// Stub server answering every request with 200.
async fn stub_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let (mut stream, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => break,
            };
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    match stream.read(&mut chunk).await {
                        Ok(0) => return,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        Err(_) => return,
                    }
                    if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let _ = stream
                    .write_all(
                        b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nok",
                    )
                    .await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{addr}/ping")
}

#[tokio::test]
async fn summary_goes_to_stdout_when_no_output_file_given() {
    let url = stub_server().await;

    let out = Command::new(env!("CARGO_BIN_EXE_pelt"))
        .args(["--url", &url, "-n", "2", "-p", "1", "-d", "0"])
        .output()
        .await
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains(&format!("Url: {url}")));
    assert!(stdout.contains("Requests: 2"));
    assert!(stdout.contains("Parallelism: 1"));
}

#[tokio::test]
async fn output_file_receives_summary_and_stdout_stays_silent() {
    let url = stub_server().await;
    let path = std::env::temp_dir().join(format!("pelt-cli-{}.txt", std::process::id()));

    let out = Command::new(env!("CARGO_BIN_EXE_pelt"))
        .args(["--url", &url, "-n", "2", "-p", "2", "-d", "0", "-o"])
        .arg(&path)
        .output()
        .await
        .unwrap();

    assert!(out.status.success());
    assert!(out.stdout.is_empty());

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains(&format!("Url: {url}")));
    assert!(written.contains("Requests: 2"));
    assert!(written.contains("Parallelism: 2"));
    std::fs::remove_file(&path).ok();
}
