#![allow(clippy::unwrap_used)]
//! Invocation dispatch tests: modes, language resolution, and abort on
//! first failure, driven through the library against a fake endpoint.

use std::io::{Cursor, Write};
use std::path::PathBuf;

use httpmock::{Method::POST, MockServer};
use serde_json::json;
use tempfile::NamedTempFile;
use trans_cli::TransError;
use trans_cli::cli::commands::translate::{Mode, TranslateOptions, run_translate};
use trans_cli::config::Config;

fn config_for(server: &MockServer, extra: &str) -> Config {
    Config::parse(
        &format!("API={}\n{extra}", server.url("/translate")),
        "config.cfg",
    )
}

fn options(mode: Mode, lang: Option<&str>) -> TranslateOptions {
    TranslateOptions {
        mode,
        lang: lang.map(str::to_string),
    }
}

#[tokio::test]
async fn test_custom_mode_uses_explicit_pair() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/translate")
                .json_body(json!({ "text": "hello", "source_lang": "EN", "target_lang": "ZH" }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 1, "data": "[EN->ZH] hello" }));
        })
        .await;

    let config = config_for(&server, "SourceLang=FR\nTargetLang=IT\n");
    let mut output = Vec::new();

    run_translate(
        &options(Mode::Custom("hello".to_string()), Some("EN:ZH")),
        &config,
        Cursor::new(""),
        &mut output,
    )
    .await
    .unwrap();

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.contains("EN"));
    assert!(printed.contains("ZH"));
    assert_eq!(printed, "[EN->ZH] hello\n");
}

#[tokio::test]
async fn test_to_english_ignores_lang_flag() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/translate")
                .json_body(json!({ "text": "你好", "source_lang": "ZH", "target_lang": "EN" }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 1, "data": "Hello" }));
        })
        .await;

    let config = config_for(&server, "");
    let mut output = Vec::new();

    run_translate(
        &options(Mode::ToEnglish("你好".to_string()), Some("JA:DE")),
        &config,
        Cursor::new(""),
        &mut output,
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(String::from_utf8(output).unwrap(), "Hello\n");
}

#[tokio::test]
async fn test_to_chinese_uses_fixed_pair() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/translate")
                .json_body(json!({ "text": "Hello", "source_lang": "EN", "target_lang": "ZH" }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 1, "data": "你好" }));
        })
        .await;

    let config = config_for(&server, "");
    let mut output = Vec::new();

    run_translate(
        &options(Mode::ToChinese("Hello".to_string()), None),
        &config,
        Cursor::new(""),
        &mut output,
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(String::from_utf8(output).unwrap(), "你好\n");
}

#[tokio::test]
async fn test_interactive_falls_back_to_configured_source() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/translate")
                .json_body(json!({ "text": "hello", "source_lang": "EN", "target_lang": "" }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 1, "data": "translated" }));
        })
        .await;

    let config = config_for(&server, "SourceLang=EN\n");
    let mut output = Vec::new();

    run_translate(
        &options(Mode::Interactive, None),
        &config,
        Cursor::new("hello\n"),
        &mut output,
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(String::from_utf8(output).unwrap(), "translated\n");
}

#[tokio::test]
async fn test_invalid_lang_flag_falls_back_to_defaults() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/translate")
                .json_body(json!({ "text": "hi", "source_lang": "EN", "target_lang": "JA" }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 1, "data": "こんにちは" }));
        })
        .await;

    let config = config_for(&server, "SourceLang=EN\nTargetLang=JA\n");
    let mut output = Vec::new();

    run_translate(
        &options(Mode::Custom("hi".to_string()), Some("en:ja")),
        &config,
        Cursor::new(""),
        &mut output,
    )
    .await
    .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_interactive_translates_each_line_in_order() {
    let server = MockServer::start_async().await;
    let first = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/translate")
                .json_body(json!({ "text": "one", "source_lang": "EN", "target_lang": "DE" }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 1, "data": "eins" }));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/translate")
                .json_body(json!({ "text": "two", "source_lang": "EN", "target_lang": "DE" }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 2, "data": "zwei" }));
        })
        .await;
    let blank = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/translate")
                .json_body(json!({ "text": "", "source_lang": "EN", "target_lang": "DE" }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 3, "data": "" }));
        })
        .await;

    let config = config_for(&server, "");
    let mut output = Vec::new();

    run_translate(
        &options(Mode::Interactive, Some("EN:DE")),
        &config,
        Cursor::new("one\n\ntwo\n"),
        &mut output,
    )
    .await
    .unwrap();

    first.assert_async().await;
    blank.assert_async().await;
    second.assert_async().await;
    assert_eq!(String::from_utf8(output).unwrap(), "eins\n\nzwei\n");
}

#[tokio::test]
async fn test_interactive_sends_invalid_utf8_lossily() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/translate").json_body(json!({
                "text": "caf\u{FFFD}",
                "source_lang": "FR",
                "target_lang": "EN"
            }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 1, "data": "coffee" }));
        })
        .await;

    let config = config_for(&server, "");
    let mut output = Vec::new();

    run_translate(
        &options(Mode::Interactive, Some("FR:EN")),
        &config,
        Cursor::new(b"caf\xe9\n".to_vec()),
        &mut output,
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(String::from_utf8(output).unwrap(), "coffee\n");
}

#[tokio::test]
async fn test_file_mode_sends_invalid_utf8_lossily() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/translate").json_body(json!({
                "text": "caf\u{FFFD} latin1\n",
                "source_lang": "FR",
                "target_lang": "EN"
            }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 1, "data": "coffee latin1" }));
        })
        .await;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"caf\xe9 latin1\n").unwrap();

    let config = config_for(&server, "");
    let mut output = Vec::new();

    run_translate(
        &options(Mode::File(file.path().to_path_buf()), Some("FR:EN")),
        &config,
        Cursor::new(""),
        &mut output,
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(String::from_utf8(output).unwrap(), "coffee latin1\n");
}

#[tokio::test]
async fn test_interactive_aborts_on_first_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/translate")
                .json_body(json!({ "text": "one", "source_lang": "EN", "target_lang": "XX" }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 1, "data": "uno" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/translate")
                .json_body(json!({ "text": "two", "source_lang": "EN", "target_lang": "XX" }));
            then.status(400)
                .body(r#"{"message":"Value for 'target_lang' not supported."}"#);
        })
        .await;
    let third = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/translate")
                .json_body(json!({ "text": "three", "source_lang": "EN", "target_lang": "XX" }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 3, "data": "tres" }));
        })
        .await;

    let config = config_for(&server, "SourceLang=EN\nTargetLang=XX\n");
    let mut output = Vec::new();

    let result = run_translate(
        &options(Mode::Interactive, None),
        &config,
        Cursor::new("one\ntwo\nthree\n"),
        &mut output,
    )
    .await;

    assert!(matches!(result, Err(TransError::UnsupportedLanguage)));
    assert_eq!(String::from_utf8(output).unwrap(), "uno\n");
    third.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_file_mode_sends_whole_content() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/translate").json_body(json!({
                "text": "line one\nline two\n",
                "source_lang": "EN",
                "target_lang": "ZH"
            }));
            then.status(200)
                .json_body(json!({ "code": 200, "ID": 1, "data": "第一行\n第二行" }));
        })
        .await;

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "line one\nline two\n").unwrap();

    let config = config_for(&server, "");
    let mut output = Vec::new();

    run_translate(
        &options(Mode::File(file.path().to_path_buf()), Some("EN:ZH")),
        &config,
        Cursor::new(""),
        &mut output,
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(String::from_utf8(output).unwrap(), "第一行\n第二行\n");
}

#[tokio::test]
async fn test_file_mode_missing_file_is_input_error() {
    let server = MockServer::start_async().await;
    let config = config_for(&server, "");
    let mut output = Vec::new();

    let result = run_translate(
        &options(Mode::File(PathBuf::from("/nonexistent/input.txt")), None),
        &config,
        Cursor::new(""),
        &mut output,
    )
    .await;

    assert!(matches!(result, Err(TransError::InputFile { .. })));
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_missing_api_fails_before_any_request() {
    let config = Config::parse("SourceLang=EN\n", "config.cfg");
    let mut output = Vec::new();

    let result = run_translate(
        &options(Mode::Custom("hello".to_string()), None),
        &config,
        Cursor::new(""),
        &mut output,
    )
    .await;

    assert!(matches!(result, Err(TransError::MissingApi { .. })));
}
