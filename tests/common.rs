#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

pub fn rfa() -> Command {
    cargo_bin_cmd!("reefadmin")
}

/// One scripted endpoint of the stub server. The first route whose method
/// and path match the request wins; an optional `query_contains` restricts
/// the match further.
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub query_contains: Option<&'static str>,
    pub status: u16,
    pub body: String,
    pub headers: Vec<(&'static str, String)>,
}

impl Route {
    pub fn get(path: &'static str, body: &str) -> Self {
        Self {
            method: "GET",
            path,
            query_contains: None,
            status: 200,
            body: body.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn post(path: &'static str, body: &str) -> Self {
        Self {
            method: "POST",
            path,
            query_contains: None,
            status: 200,
            body: body.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn patch(path: &'static str, body: &str) -> Self {
        Self {
            method: "PATCH",
            path,
            query_contains: None,
            status: 200,
            body: body.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn delete(path: &'static str, body: &str) -> Self {
        Self {
            method: "DELETE",
            path,
            query_contains: None,
            status: 200,
            body: body.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_query(mut self, fragment: &'static str) -> Self {
        self.query_contains = Some(fragment);
        self
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }
}

/// Request recorded by the stub server: "METHOD target" plus the raw body.
#[derive(Debug, Clone)]
pub struct Hit {
    pub line: String,
    pub body: String,
}

/// Minimal blocking HTTP/1.1 stub on a loopback listener. Every response is
/// sent with `Connection: close`, so each client request opens a fresh
/// connection and matching stays per-request.
pub struct StubServer {
    pub base_url: String,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl StubServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub server addr");
        let hits: Arc<Mutex<Vec<Hit>>> = Arc::new(Mutex::new(Vec::new()));

        let thread_hits = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let Some((line, body)) = read_request(&mut stream) else {
                    continue;
                };

                thread_hits.lock().expect("hits lock").push(Hit {
                    line: line.clone(),
                    body,
                });

                let mut parts = line.split_whitespace();
                let method = parts.next().unwrap_or_default();
                let target = parts.next().unwrap_or_default();
                let path = target.split('?').next().unwrap_or_default();
                let query = target.split('?').nth(1).unwrap_or_default();

                let route = routes.iter().find(|r| {
                    r.method == method
                        && path == r.path
                        && r.query_contains.is_none_or(|fragment| query.contains(fragment))
                });

                let response = match route {
                    Some(r) => render_response(r),
                    None => render_not_found(),
                };
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().expect("hits lock").clone()
    }
}

fn read_request(stream: &mut std::net::TcpStream) -> Option<(String, String)> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    // Headers first
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let header_end = buf.windows(4).position(|w| w == b"\r\n\r\n")? + 4;
    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let request_line = head.lines().next()?.to_string();

    let content_length: usize = head
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse().ok())?
        })
        .unwrap_or(0);

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Some((request_line, String::from_utf8_lossy(&body).to_string()))
}

fn render_response(route: &Route) -> String {
    let mut extra = String::new();
    for (name, value) in &route.headers {
        extra.push_str(&format!("{name}: {value}\r\n"));
    }

    format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n{}",
        route.status,
        reason(route.status),
        route.body.len(),
        extra,
        route.body
    )
}

fn render_not_found() -> String {
    let body = r#"{"success":false,"code":"T404","message":"no stub route"}"#;
    format!(
        "HTTP/1.1 404 Not Found\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    )
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

// ---------------------------
// JSON fixtures
// ---------------------------

/// Wrap a paged content array in the standard envelope.
pub fn paged_envelope(content: &str, total: usize) -> String {
    format!(
        r#"{{"success":true,"data":{{"content":{content},"page":0,"size":20,"totalPages":1,"totalElements":{total},"first":true,"last":true,"hasNext":false,"hasPrevious":false}}}}"#
    )
}

pub fn data_envelope(data: &str) -> String {
    format!(r#"{{"success":true,"data":{data}}}"#)
}

pub fn transplant_row(id: i64, species_id: i64, species_name: &str, date: &str) -> String {
    format!(
        r#"{{"id":{id},"recordDate":"{date}","method":"ROPE","methodName":"Rope","methodDesc":"","unit":"m","speciesId":{species_id},"speciesName":"{species_name}","count":40,"areaSize":12.5,"attachmentStatus":"GOOD","attachmentStatusName":"Good"}}"#
    )
}

pub fn growth_row(id: i64, species_id: i64, species_name: &str, date: &str) -> String {
    format!(
        r#"{{"id":{id},"recordDate":"{date}","speciesId":{species_id},"speciesName":"{species_name}","isRepresentative":false,"attachmentRate":80.0,"survivalRate":75.0,"growthLength":12.0,"status":"NORMAL","statusName":"Normal"}}"#
    )
}

pub fn area_detail_body(id: i64, name: &str) -> String {
    data_envelope(&format!(
        r#"{{"id":{id},"overview":{{"name":"{name}","areaId":{id},"restorationRegion":"Pohang","startDate":"2025-03-01","endDate":null,"currentStatus":{{"name":"Growth","description":"settling well"}},"areaSize":1200.0,"avgDepth":8.5,"habitatType":"Rocky"}}}}"#
    ))
}

pub fn species_list_body() -> String {
    data_envelope(r#"[{"id":5,"name":"Kelp"},{"id":7,"name":"Sargassum"},{"id":9,"name":"Sea trumpet"}]"#)
}
