use crate::e2e::helpers;

use helpers::provider::{mock_error, mock_success, mock_success_for_text, FAKE_MP3};
use helpers::{generate_tts, stderr, TenantTree};

#[test]
fn it_should_synthesize_trimmed_text_from_file() {
    let tree = TenantTree::new().unwrap();
    let source = tree
        .add_text("es", "atomium", "normal", "  Hola mundo  \n")
        .unwrap();
    let destination = tree.root().join("normal.mp3");

    let mut server = mockito::Server::new();
    let mock = mock_success_for_text(&mut server, "Hola mundo")
        .expect(1)
        .create();

    let output = generate_tts(tree.root(), &server.url())
        .arg("--file")
        .arg(&source)
        .arg(&destination)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(std::fs::read(&destination).unwrap(), FAKE_MP3);
    mock.assert();
}

#[test]
fn it_should_synthesize_literal_text() {
    let tree = TenantTree::new().unwrap();
    let destination = tree.root().join("hola.mp3");

    let mut server = mockito::Server::new();
    let mock = mock_success_for_text(&mut server, "Bienvenidos al parque")
        .expect(1)
        .create();

    let output = generate_tts(tree.root(), &server.url())
        .arg("Bienvenidos al parque")
        .arg(&destination)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(destination.is_file());
    mock.assert();
}

#[test]
fn it_should_accept_hyphen_leading_literal() {
    let tree = TenantTree::new().unwrap();
    let destination = tree.root().join("temperatura.mp3");

    let mut server = mockito::Server::new();
    let mock = mock_success_for_text(&mut server, "-5 grados en el parque")
        .expect(1)
        .create();

    let output = generate_tts(tree.root(), &server.url())
        .arg("-5 grados en el parque")
        .arg(&destination)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(std::fs::read(&destination).unwrap(), FAKE_MP3);
    mock.assert();
}

#[test]
fn it_should_reject_whitespace_text_without_calling_provider() {
    let tree = TenantTree::new().unwrap();
    let source = tree.add_text("es", "atomium", "normal", " \n\t \n").unwrap();
    let destination = tree.root().join("empty.mp3");

    let mut server = mockito::Server::new();
    let mock = mock_success(&mut server).expect(0).create();

    let output = generate_tts(tree.root(), &server.url())
        .arg("--file")
        .arg(&source)
        .arg(&destination)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!destination.exists());
    mock.assert();
}

#[test]
fn it_should_fail_on_provider_error_and_leave_no_file() {
    let tree = TenantTree::new().unwrap();
    let destination = tree.root().join("out.mp3");

    let mut server = mockito::Server::new();
    let mock = mock_error(&mut server, 401, r#"{"detail":{"status":"invalid_api_key"}}"#)
        .expect(1)
        .create();

    let output = generate_tts(tree.root(), &server.url())
        .arg("Hola")
        .arg(&destination)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid_api_key"));
    assert!(!destination.exists());
    mock.assert();
}

#[test]
fn it_should_require_a_destination() {
    let tree = TenantTree::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = mock_success(&mut server).expect(0).create();

    let output = generate_tts(tree.root(), &server.url())
        .arg("Hola")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    mock.assert();
}

#[test]
fn it_should_report_missing_text_file() {
    let tree = TenantTree::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = mock_success(&mut server).expect(0).create();

    let output = generate_tts(tree.root(), &server.url())
        .arg("--file")
        .arg(tree.root().join("nope.txt"))
        .arg(tree.root().join("out.mp3"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("nope.txt"));
    mock.assert();
}

#[test]
fn it_should_fail_fast_without_api_key() {
    let tree = TenantTree::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = mock_success(&mut server).expect(0).create();

    let output = generate_tts(tree.root(), &server.url())
        .env_remove("ELEVENLABS_API_KEY")
        .arg("Hola")
        .arg(tree.root().join("out.mp3"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("ELEVENLABS_API_KEY"));
    mock.assert();
}

#[test]
fn it_should_fail_when_provider_is_unreachable() {
    let tree = TenantTree::new().unwrap();

    let output = generate_tts(tree.root(), "http://127.0.0.1:9")
        .arg("Hola")
        .arg(tree.root().join("out.mp3"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!tree.root().join("out.mp3").exists());
}

#[test]
fn it_should_print_help_and_exit_zero() {
    let tree = TenantTree::new().unwrap();
    let output = generate_tts(tree.root(), "http://127.0.0.1:9")
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--file"));
}
