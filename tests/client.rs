mod tests {
    use std::time::Duration;

    use remote_light_composer::{
        ClientConfig, Command, Deliver, DeliveryError, Frame, HttpClient, RecordingClient,
        SessionCookie, StripLength, color::RED,
    };
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn config(base_url: String, strip: StripLength) -> ClientConfig {
        ClientConfig {
            base_url,
            cookie: SessionCookie::new("session=test-token".to_owned()).unwrap(),
            strip,
            request_timeout: Some(Duration::from_secs(5)),
        }
    }

    /// Accept one connection, capture the raw request and answer with
    /// `status` and `body`
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text
                        .lines()
                        .find_map(|line| {
                            let lower = line.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8(request).unwrap()
        });
        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn test_posts_json_with_cookie() {
        let (base_url, server) = serve_once("200 OK", "done").await;
        let mut client = HttpClient::new(&config(base_url, StripLength::DEFAULT)).unwrap();

        let body = client.deliver(&Command::solid(255, 0, 0)).await.unwrap();
        assert_eq!(body, "done");

        let request = server.await.unwrap();
        let lower = request.to_ascii_lowercase();
        assert!(request.starts_with("POST /update-led-color HTTP/1.1\r\n"));
        assert!(lower.contains("content-type: application/json"));
        assert!(lower.contains("cookie: session=test-token"));
        assert!(request.ends_with(r#"{"rgb":{"r":255,"g":0,"b":0}}"#));
    }

    #[test_log::test(tokio::test)]
    async fn test_error_status_still_returns_body() {
        let (base_url, server) = serve_once("500 Internal Server Error", "oops").await;
        let mut client = HttpClient::new(&config(base_url, StripLength::DEFAULT)).unwrap();

        let body = client
            .deliver(&Command::Rainbow {
                num_rainbows: 3,
                value: 8000,
                speed: 1000,
            })
            .await
            .unwrap();
        assert_eq!(body, "oops");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let mut client =
            HttpClient::new(&config(format!("http://{}", addr), StripLength::DEFAULT)).unwrap();

        let result = client.deliver(&Command::solid(0, 0, 255)).await;
        assert!(matches!(result, Err(DeliveryError::Transport(_))));
    }

    #[tokio::test]
    async fn test_explicit_frame_length_is_validated() {
        let strip = StripLength::new(10).unwrap();
        let mut client =
            HttpClient::new(&config("http://127.0.0.1:9".to_owned(), strip)).unwrap();
        let frame = Frame::filled(RED, StripLength::new(9).unwrap());

        let result = client.deliver(&Command::Explicit(frame)).await;
        assert!(matches!(
            result,
            Err(DeliveryError::FrameLength {
                expected: 10,
                actual: 9
            })
        ));
    }

    #[tokio::test]
    async fn test_recording_client_keeps_history() {
        let strip = StripLength::new(4).unwrap();
        let mut client = RecordingClient::new(strip);
        client.deliver(&Command::solid(1, 2, 3)).await.unwrap();
        client
            .deliver(&Command::Explicit(Frame::filled(RED, strip)))
            .await
            .unwrap();

        assert_eq!(client.delivered(), 2);
        assert_eq!(client.commands().len(), 2);
        assert_eq!(client.last(), Some(&Command::Explicit(Frame::filled(RED, strip))));

        let wrong = Frame::filled(RED, StripLength::new(5).unwrap());
        assert!(client.deliver(&Command::Explicit(wrong)).await.is_err());
        assert_eq!(client.delivered(), 2);
    }

    #[tokio::test]
    async fn test_bounded_recording_client() {
        let mut client = RecordingClient::bounded(StripLength::DEFAULT, 2);
        for i in 0..5 {
            client.deliver(&Command::solid(i, 0, 0)).await.unwrap();
        }
        assert_eq!(client.delivered(), 5);
        let kept: Vec<_> = client.commands().cloned().collect();
        assert_eq!(kept, [Command::solid(3, 0, 0), Command::solid(4, 0, 0)]);

        let mut silent = RecordingClient::bounded(StripLength::DEFAULT, 0);
        silent.deliver(&Command::solid(0, 0, 0)).await.unwrap();
        assert_eq!(silent.delivered(), 1);
        assert_eq!(silent.commands().len(), 0);
    }

    #[test]
    fn test_cookie_is_redacted() {
        let cookie = SessionCookie::new("session=secret".to_owned()).unwrap();
        assert!(!format!("{:?}", cookie).contains("secret"));
        assert!(SessionCookie::new("   ".to_owned()).is_none());
    }
}
