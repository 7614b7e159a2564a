//! Minimal HTTP/1.1 server serving fixed HTML pages for integration tests.
//!
//! Routes:
//! - `/title`    200, page with `<title>Example Domain</title>`
//! - `/h1`       200, page with only an `<h1>`
//! - `/empty`    200, page with neither
//! - `/binary`   200, body containing NUL bytes
//! - `/agent`    200, title echoes the request's `User-Agent`
//! - `/redirect` 302 to `/title`
//! - `/missing`  404
//! - `/slow`     200 after `SLOW_DELAY`

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

pub const SLOW_DELAY: Duration = Duration::from_secs(2);

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). The server runs until the
/// process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn parse_request(request: &str) -> (String, String) {
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let agent = request
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("user-agent"))
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default();
    (path, agent)
}

fn respond(stream: &mut TcpStream, status: &str, extra_headers: &str, body: &[u8]) {
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n",
        status,
        body.len(),
        extra_headers
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

fn handle(mut stream: TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let (path, agent) = parse_request(&request);

    match path.as_str() {
        "/title" => respond(
            &mut stream,
            "200 OK",
            "",
            b"<!doctype html><html><head><title>\n  Example Domain\n</title></head><body><h1>Ignored</h1></body></html>",
        ),
        "/h1" => respond(
            &mut stream,
            "200 OK",
            "",
            b"<html><body><h1>Heading Only</h1></body></html>",
        ),
        "/empty" => respond(&mut stream, "200 OK", "", b"<html><body><p>nothing</p></body></html>"),
        "/binary" => respond(&mut stream, "200 OK", "", b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR"),
        "/agent" => {
            let body = format!("<title>{}</title>", agent);
            respond(&mut stream, "200 OK", "", body.as_bytes());
        }
        "/release%20notes" => respond(&mut stream, "200 OK", "", b"<title>Release Notes</title>"),
        "/redirect" => respond(&mut stream, "302 Found", "Location: /title\r\n", b""),
        "/slow" => {
            thread::sleep(SLOW_DELAY);
            respond(&mut stream, "200 OK", "", b"<title>Too Late</title>");
        }
        _ => respond(&mut stream, "404 Not Found", "", b"<title>Not Found</title>"),
    }
}
