use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Minimal HTTP/1.1 upstream answering each connection with the next scripted status.
///
/// Once the script is exhausted every request gets a 200.
pub struct ScriptedUpstream {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedUpstream {
    pub fn start(statuses: impl IntoIterator<Item = u16>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind upstream");
        let port = listener.local_addr().expect("upstream has no address").port();

        let script: VecDeque<u16> = statuses.into_iter().collect();
        let script = Arc::new(Mutex::new(script));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = requests.clone();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else {
                    continue;
                };
                let Some(request_line) = read_request_line(&stream) else {
                    continue;
                };
                // Record before answering.
                seen.lock().unwrap().push(request_line);

                let status = script.lock().unwrap().pop_front().unwrap_or(200);
                respond(stream, status);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            requests,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request lines received so far, e.g. `GET /track?x=1 HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request_line(stream: &TcpStream) -> Option<String> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    // Drain headers.
    loop {
        let mut header = String::new();
        let read = reader.read_line(&mut header).ok()?;
        if read == 0 || header == "\r\n" || header == "\n" {
            break;
        }
    }

    Some(request_line.trim_end().to_string())
}

fn respond(mut stream: TcpStream, status: u16) {
    let response =
        format!("HTTP/1.1 {status} Scripted\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// A base URL nothing listens on.
pub fn refused_base_url() -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    format!("http://127.0.0.1:{port}")
}
