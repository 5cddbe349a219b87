//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed routes (path → status, content type, body), answers 404 for
//! everything else, counts GET requests per path so tests can assert that no
//! network call was made, and records each request's `User-Agent`.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Route {
    pub fn pdf(body: &[u8]) -> Self {
        Route {
            status: "200 OK",
            content_type: "application/pdf",
            body: body.to_vec(),
        }
    }

    pub fn html(body: &str) -> Self {
        Route {
            status: "200 OK",
            content_type: "text/html; charset=utf-8",
            body: body.as_bytes().to_vec(),
        }
    }
}

/// Handle to a running server. The server thread runs until the process exits.
#[derive(Clone)]
pub struct PdfServer {
    pub base: String,
    hits: Arc<Mutex<HashMap<String, usize>>>,
    user_agents: Arc<Mutex<Vec<String>>>,
}

impl PdfServer {
    /// Full URL for `path` (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Number of GET requests received for `path`.
    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    /// Total GET requests received.
    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    /// `User-Agent` of every GET, in arrival order (empty string if absent).
    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread serving `routes`.
pub fn start(routes: Vec<(&str, Route)>) -> PdfServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, r)| (p.to_string(), r))
            .collect(),
    );
    let server = PdfServer {
        base: format!("http://127.0.0.1:{}", port),
        hits: Arc::new(Mutex::new(HashMap::new())),
        user_agents: Arc::new(Mutex::new(Vec::new())),
    };
    let state = server.clone();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let state = state.clone();
            thread::spawn(move || handle(stream, &routes, &state));
        }
    });
    server
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    state: &PdfServer,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let mut lines = request.lines();
    let mut parts = lines.next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/").to_string();

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }
    let user_agent = lines
        .take_while(|l| !l.trim().is_empty())
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("user-agent"))
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default();
    state.user_agents.lock().unwrap().push(user_agent);
    *state.hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;

    let not_found = Route {
        status: "404 Not Found",
        content_type: "text/plain",
        body: b"not found".to_vec(),
    };
    let route = routes.get(&path).unwrap_or(&not_found);
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        route.content_type,
        route.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
}
