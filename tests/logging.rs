mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use log::{Level, LevelFilter, Log, Metadata, Record};
    use remote_light_composer::{
        ClientConfig, Command, Deliver, HttpClient, SessionCookie, StripLength,
    };
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Keeps every record so tests can check what reaches the default level
    struct CaptureLogger {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };

    /// Answer a single request with `200 OK` and `body`
    async fn reply_once(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request).to_ascii_lowercase();
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .map_or(0, |v| v.trim().parse::<usize>().unwrap());
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_success_body_logged_at_info() {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);

        let base_url = reply_once("colors updated").await;
        let config = ClientConfig {
            base_url,
            cookie: SessionCookie::new("session=test-token".to_owned()).unwrap(),
            strip: StripLength::DEFAULT,
            request_timeout: Some(Duration::from_secs(5)),
        };
        let mut client = HttpClient::new(&config).unwrap();
        client.deliver(&Command::solid(1, 2, 3)).await.unwrap();

        let records = LOGGER.records.lock().unwrap();
        assert!(
            records.iter().any(|(level, message)| {
                *level <= Level::Info && message.contains("colors updated")
            }),
            "{:?}",
            *records
        );
    }
}
