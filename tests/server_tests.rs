//! End-to-end tests: boot the site on an ephemeral port and speak raw HTTP.

mod common;

use common::test_server::{get, parse_parts, send_request, start_service};
use std::path::PathBuf;

fn static_dir() -> Option<PathBuf> {
    Some(PathBuf::from("tests/staticdata"))
}

#[test]
fn test_category_pages() {
    let (handle, addr) = start_service(static_dir());
    let home = get(&addr, "/");
    let dogs = get(&addr, "/dogs");
    let cats = get(&addr, "/cats/");
    let fishes = get(&addr, "/FISHES");
    handle.stop();

    let (status, ct, body) = parse_parts(&home);
    assert_eq!(status, 200);
    assert_eq!(ct, "text/html; charset=utf-8");
    assert!(body.contains("Todos os animais"));

    let (status, _, body) = parse_parts(&dogs);
    assert_eq!(status, 200);
    assert!(body.contains("Thor") && body.contains("Luna"));
    assert!(!body.contains("Garfield"));

    let (status, _, body) = parse_parts(&cats);
    assert_eq!(status, 200);
    assert!(body.contains("Garfield"));

    let (status, _, body) = parse_parts(&fishes);
    assert_eq!(status, 200);
    assert!(body.contains("Peixes"));
}

#[test]
fn test_search_by_breed_and_sex() {
    let (handle, addr) = start_service(static_dir());
    let resp = get(&addr, "/search?q=poodle&sex=Masculino");
    let none = get(&addr, "/search?q=xyz-not-a-breed");
    handle.stop();

    let (status, _, body) = parse_parts(&resp);
    assert_eq!(status, 200);
    assert!(body.contains("Toby"));
    assert!(!body.contains("Nina"));
    assert!(body.contains(r#"value="Masculino" checked"#));

    let (status, _, body) = parse_parts(&none);
    assert_eq!(status, 200);
    assert!(body.contains("Nenhum animal encontrado."));
}

#[test]
fn test_search_decodes_form_encoding() {
    let (handle, addr) = start_service(static_dir());
    let resp = get(&addr, "/search?q=pastor-alem%C3%A3o&sex=Feminino");
    let plus = get(&addr, "/search?q=golden+retriever");
    handle.stop();

    let (_, _, body) = parse_parts(&resp);
    assert!(body.contains("Luna"));
    assert!(!body.contains("Thor"));

    let (_, _, body) = parse_parts(&plus);
    assert!(body.contains("Duke") && body.contains("Honey"));
}

#[test]
fn test_unknown_path_renders_404_page() {
    let (handle, addr) = start_service(static_dir());
    let resp = get(&addr, "/birds");
    let post = send_request(
        &addr,
        "POST /dogs HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\n\r\n",
    );
    handle.stop();

    let (status, ct, body) = parse_parts(&resp);
    assert_eq!(status, 404);
    assert_eq!(ct, "text/html; charset=utf-8");
    assert!(body.contains("Página não encontrada."));

    let (status, _, _) = parse_parts(&post);
    assert_eq!(status, 404);
}

#[test]
fn test_health_and_metrics() {
    let (handle, addr) = start_service(static_dir());
    let _ = get(&addr, "/dogs");
    let health = get(&addr, "/health");
    let metrics = get(&addr, "/metrics");
    handle.stop();

    let (status, ct, body) = parse_parts(&health);
    assert_eq!(status, 200);
    assert_eq!(ct, "application/json");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");

    let (status, _, body) = parse_parts(&metrics);
    assert_eq!(status, 200);
    assert!(body.contains("petshop_requests_total 1"));
    assert!(body.contains("petshop_top_level_requests_total"));
}

#[test]
fn test_static_files_served() {
    let (handle, addr) = start_service(static_dir());
    let js = get(&addr, "/bundle.js");
    let css = get(&addr, "/css/site.css");
    handle.stop();

    let (status, ct, body) = parse_parts(&js);
    assert_eq!(status, 200);
    assert_eq!(ct, "application/javascript");
    assert_eq!(body, "console.log('bundled');\n");

    let (status, ct, _) = parse_parts(&css);
    assert_eq!(status, 200);
    assert_eq!(ct, "text/css");
}

#[test]
fn test_traversal_blocked() {
    let (handle, addr) = start_service(static_dir());
    let resp = get(&addr, "/../Cargo.toml");
    handle.stop();
    let (status, _, body) = parse_parts(&resp);
    assert_eq!(status, 404);
    assert!(!body.contains("[package]"));
}

#[test]
fn test_without_public_dir() {
    let (handle, addr) = start_service(None);
    let js = get(&addr, "/bundle.js");
    let home = get(&addr, "/");
    handle.stop();
    assert_eq!(parse_parts(&js).0, 404);
    assert_eq!(parse_parts(&home).0, 200);
}

#[test]
fn test_stop_returns_and_service_restarts() {
    let (first, first_addr) = start_service(None);
    assert_eq!(parse_parts(&get(&first_addr, "/health")).0, 200);
    first.stop();

    let (second, second_addr) = start_service(None);
    let health = get(&second_addr, "/health");
    second.stop();
    assert_eq!(parse_parts(&health).0, 200);
}
