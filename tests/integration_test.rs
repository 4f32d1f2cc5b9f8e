use apikey_auth::{get_api_key, ApiKeyExtractor, AuthError, ExtractApiKey};
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue, Request, StatusCode};

struct Case {
    name: &'static str,
    header: Option<&'static str>,
    want: Result<&'static str, AuthError>,
}

#[test]
fn get_api_key_table() {
    let cases = [
        Case {
            name: "no authorization header",
            header: None,
            want: Err(AuthError::NoAuthHeaderIncluded),
        },
        Case {
            name: "missing ApiKey prefix",
            header: Some("Bearer somekey"),
            want: Err(AuthError::MalformedHeader),
        },
        Case {
            name: "missing key",
            header: Some("ApiKey"),
            want: Err(AuthError::MalformedHeader),
        },
        Case {
            name: "valid ApiKey header",
            header: Some("ApiKey my-secret-key"),
            want: Ok("my-secret-key"),
        },
    ];

    for case in cases {
        let mut headers = HeaderMap::new();
        if let Some(value) = case.header {
            headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        }

        let got = get_api_key(&headers);
        assert_eq!(got, case.want.map(String::from), "case: {}", case.name);
    }
}

#[test]
fn header_name_is_case_insensitive() {
    let request = Request::builder()
        .header("AUTHORIZATION", "ApiKey upper")
        .body(())
        .unwrap();

    assert_eq!(get_api_key(request.headers()).as_deref(), Ok("upper"));
}

#[test]
fn errors_map_to_suggested_status() {
    let missing = get_api_key(&HeaderMap::new()).unwrap_err();
    assert_eq!(missing.status_code(), StatusCode::UNAUTHORIZED);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
    let malformed = get_api_key(&headers).unwrap_err();
    assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn middleware_style_flow() {
    let extractor = ApiKeyExtractor::new();
    let request = Request::builder()
        .uri("/v1/feeds")
        .header(AUTHORIZATION, "ApiKey 0a1b2c3d")
        .body(Vec::<u8>::new())
        .unwrap();

    let key = request.extract_api_key(&extractor).expect("key present");

    // Redacted when it ends up in logs or error messages.
    assert_eq!(format!("{:?}", key), "[REDACTED]");
    assert_eq!(key.into_exposed(), "0a1b2c3d");
}

#[test]
fn extractor_shared_between_threads() {
    let extractor = std::sync::Arc::new(ApiKeyExtractor::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let extractor = std::sync::Arc::clone(&extractor);
            std::thread::spawn(move || {
                let mut headers = HeaderMap::new();
                let value = HeaderValue::from_str(&format!("ApiKey key-{}", i)).unwrap();
                headers.insert(AUTHORIZATION, value);
                extractor.extract(&headers)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(format!("key-{}", i)));
    }
}
