use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use serde_json::json;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

fn artwork_json(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Artwork {}", id),
        "place_of_origin": "Chicago",
        "artist_display": null,
        "inscriptions": null,
        "date_start": 1900,
        "date_end": 1910
    })
}

fn page_body(page: usize, total: u64, limit: usize) -> String {
    let total_pages = (total as usize).div_ceil(limit);
    let start = ((page - 1) * limit + 1) as u64;
    let end = ((page * limit) as u64).min(total);
    let data: Vec<_> = (start..=end).map(artwork_json).collect();

    json!({
        "data": data,
        "pagination": {"total": total, "limit": limit, "total_pages": total_pages}
    })
    .to_string()
}

fn spawn_dataset_server(total: u64, limit: usize) -> String {
    spawn_server(total, limit, None)
}

/// Serve a sequentially numbered dataset over loopback HTTP, answering
/// `GET <path>?page=<n>` the way the real paging API does. When
/// `malformed_page` is set, that page answers with a non-JSON body. The
/// thread is detached; it dies with the test process.
fn spawn_server(total: u64, limit: usize, malformed_page: Option<usize>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };

            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                match stream.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        request.extend_from_slice(&buf[..n]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }

            let request = String::from_utf8_lossy(&request);
            let page = request
                .split("page=")
                .nth(1)
                .map(|rest| rest.chars().take_while(|c| c.is_ascii_digit()).collect::<String>())
                .and_then(|digits| digits.parse::<usize>().ok())
                .unwrap_or(1);

            let body = if malformed_page == Some(page) {
                "<html>upstream error page</html>".to_string()
            } else {
                page_body(page, total, limit)
            };
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

fn artable() -> (Command, tempfile::TempDir) {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("artable").unwrap();
    cmd.env("ARTABLE_HOME", home.path());
    (cmd, home)
}

#[test]
fn help_lists_the_commands() {
    let (mut cmd, _home) = artable();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("list"))
        .stdout(predicates::str::contains("select"))
        .stdout(predicates::str::contains("config"));
}

#[test]
fn list_renders_one_page() {
    let endpoint = spawn_dataset_server(57, 12);

    let (mut cmd, _home) = artable();
    cmd.arg("--endpoint")
        .arg(&endpoint)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Title"))
        .stdout(predicates::str::contains("Artwork 1"))
        .stdout(predicates::str::contains("Artwork 12"))
        .stdout(predicates::str::contains("page 1 of 5"));
}

#[test]
fn select_spans_pages_to_reach_the_count() {
    let endpoint = spawn_dataset_server(57, 12);

    let (mut cmd, _home) = artable();
    cmd.arg("--endpoint")
        .arg(&endpoint)
        .arg("select")
        .arg("20")
        .assert()
        .success()
        .stdout(predicates::str::contains("Artwork 20"))
        .stdout(predicates::str::contains("selected 20 rows"))
        .stdout(predicates::str::contains("Artwork 21").not());
}

#[test]
fn select_at_the_last_page_reports_a_partial_result() {
    let endpoint = spawn_dataset_server(57, 12);

    let (mut cmd, _home) = artable();
    cmd.arg("--endpoint")
        .arg(&endpoint)
        .arg("select")
        .arg("50")
        .arg("--page")
        .arg("5")
        .assert()
        .success()
        .stdout(predicates::str::contains("selected 9 rows (50 requested)"))
        .stdout(predicates::str::contains("Dataset exhausted"));
}

#[test]
fn malformed_page_body_fails_the_page_load() {
    let endpoint = spawn_server(57, 12, Some(1));

    let (mut cmd, _home) = artable();
    cmd.arg("--endpoint")
        .arg(&endpoint)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Malformed JSON"));
}

#[test]
fn malformed_page_body_mid_accumulation_fails_the_whole_selection() {
    // Page 1 is healthy; the accumulator's fetch of page 2 decodes garbage.
    let endpoint = spawn_server(57, 12, Some(2));

    let (mut cmd, _home) = artable();
    cmd.arg("--endpoint")
        .arg(&endpoint)
        .arg("select")
        .arg("20")
        .assert()
        .failure()
        .stdout(predicates::str::contains("Artwork").not())
        .stderr(predicates::str::contains(
            "Selection failed while fetching page 2",
        ))
        .stderr(predicates::str::contains("Malformed JSON"));
}

#[test]
fn unreachable_endpoint_fails_with_an_error() {
    let (mut cmd, _home) = artable();
    cmd.arg("--endpoint")
        .arg("http://127.0.0.1:1/artworks")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error:"));
}

#[test]
fn config_shows_defaults_and_persists_changes() {
    let (mut cmd, home) = artable();
    cmd.arg("config")
        .assert()
        .success()
        .stdout(predicates::str::contains("api.artic.edu"));

    let mut cmd = Command::cargo_bin("artable").unwrap();
    cmd.env("ARTABLE_HOME", home.path())
        .arg("config")
        .arg("endpoint")
        .arg("http://localhost:9000/artworks")
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("artable").unwrap();
    cmd.env("ARTABLE_HOME", home.path())
        .arg("config")
        .arg("endpoint")
        .assert()
        .success()
        .stdout(predicates::str::contains("http://localhost:9000/artworks"));
}
