//! End-to-end behaviour of `POST /audio` with mocked upstream APIs

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_error_list, assert_upload_error};
    use crate::common::fixtures::fake_wav;
    use crate::common::{MultipartBuilder, TestEnv, UpstreamMocks};
    use actix_web::http::StatusCode;
    use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
    use actix_web::{test, web};
    use audio_relay::server::HttpServer;
    use serde_json::Value;

    async fn app_state(env: &TestEnv) -> web::Data<audio_relay::server::AppState> {
        let server = HttpServer::new(&env.config).await.expect("build server");
        web::Data::new(server.state().clone())
    }

    fn upload(body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/audio")
            .insert_header((CONTENT_TYPE, MultipartBuilder::content_type()))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn test_wav_upload_round_trip() {
        let mocks = UpstreamMocks::start().await;
        mocks.transcription_ok("hello world\n", 1).await;
        mocks.speech_ok("hello world", "wav", "AAECAw==", 1).await;

        let env = TestEnv::new(&mocks.uri());
        let app = test::init_service(HttpServer::create_app(app_state(&env).await)).await;

        let body = MultipartBuilder::new()
            .file("audio", "greeting.wav", &fake_wav(10 * 1024))
            .build();
        let resp = test::call_service(&app, upload(body).to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "audio/wav");
        let disposition = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("inline"));
        assert!(disposition.contains("-trans-"));

        let bytes = test::read_body(resp).await;
        assert_eq!(bytes.as_ref(), &[0u8, 1, 2, 3]);
        assert_eq!(env.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_text_fields_are_ignored() {
        let mocks = UpstreamMocks::start().await;
        mocks.transcription_ok("testing", 1).await;
        mocks.speech_ok("testing", "ogg", "T2dnUw==", 1).await;

        let env = TestEnv::new(&mocks.uri());
        let app = test::init_service(HttpServer::create_app(app_state(&env).await)).await;

        let body = MultipartBuilder::new()
            .text("comment", "please")
            .file("audio", "voice.OGG", b"OggS\0\0")
            .text("trailer", "ignored")
            .build();
        let resp = test::call_service(&app, upload(body).to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "audio/ogg");
        let bytes = test::read_body(resp).await;
        assert_eq!(bytes.as_ref(), b"OggS");
        assert_eq!(env.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_invalid_type_never_reaches_upstream() {
        let mocks = UpstreamMocks::start().await;
        mocks.expect_no_calls().await;

        let env = TestEnv::new(&mocks.uri());
        let app = test::init_service(HttpServer::create_app(app_state(&env).await)).await;

        let body = MultipartBuilder::new()
            .file("audio", "report.pdf", b"%PDF-1.7")
            .build();
        let resp = test::call_service(&app, upload(body).to_request()).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_upload_error(
            &body,
            "Invalid file type",
            Some("Only audio files are allowed"),
        );
        assert_eq!(env.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_oversized_upload_never_reaches_upstream() {
        let mocks = UpstreamMocks::start().await;
        mocks.expect_no_calls().await;

        let mut env = TestEnv::new(&mocks.uri());
        env.config.upload.max_file_size = 4 * 1024;
        let app = test::init_service(HttpServer::create_app(app_state(&env).await)).await;

        let body = MultipartBuilder::new()
            .file("audio", "long.mp3", &fake_wav(16 * 1024))
            .build();
        let resp = test::call_service(&app, upload(body).to_request()).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_upload_error(&body, "File upload error", Some("File too large"));
        assert_eq!(env.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_second_audio_file_is_unexpected() {
        let mocks = UpstreamMocks::start().await;
        mocks.expect_no_calls().await;

        let env = TestEnv::new(&mocks.uri());
        let app = test::init_service(HttpServer::create_app(app_state(&env).await)).await;

        let body = MultipartBuilder::new()
            .file("audio", "one.wav", b"RIFF1")
            .file("audio", "two.wav", b"RIFF2")
            .build();
        let resp = test::call_service(&app, upload(body).to_request()).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_upload_error(&body, "File upload error", Some("Unexpected field"));
        assert_eq!(env.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_missing_file() {
        let mocks = UpstreamMocks::start().await;
        mocks.expect_no_calls().await;

        let env = TestEnv::new(&mocks.uri());
        let app = test::init_service(HttpServer::create_app(app_state(&env).await)).await;

        let body = MultipartBuilder::new().text("audio", "not a file").build();
        let resp = test::call_service(&app, upload(body).to_request()).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_upload_error(&body, "No audio file uploaded.", None);
    }

    #[actix_web::test]
    async fn test_transcription_failure_cleans_up() {
        let mocks = UpstreamMocks::start().await;
        mocks.transcription_fails(401, "invalid api key").await;

        let env = TestEnv::new(&mocks.uri());
        let app = test::init_service(HttpServer::create_app(app_state(&env).await)).await;

        let body = MultipartBuilder::new()
            .file("audio", "clip.mp3", b"ID3\x04")
            .build();
        let resp = test::call_service(&app, upload(body).to_request()).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Transcription error");
        let details = body["details"].as_str().unwrap();
        assert!(details.contains("401"), "details: {}", details);
        assert!(details.contains("invalid api key"), "details: {}", details);
        assert_eq!(env.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_synthesis_failure_cleans_up() {
        let mocks = UpstreamMocks::start().await;
        mocks.transcription_ok("hello", 1).await;
        mocks.speech_fails(503, "busy").await;

        let env = TestEnv::new(&mocks.uri());
        let app = test::init_service(HttpServer::create_app(app_state(&env).await)).await;

        let body = MultipartBuilder::new()
            .file("audio", "clip.wav", &fake_wav(512))
            .build();
        let resp = test::call_service(&app, upload(body).to_request()).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Transcription error");
        assert!(body["details"].as_str().unwrap().contains("503"));
        assert_eq!(env.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_fallback_routes() {
        let mocks = UpstreamMocks::start().await;
        let env = TestEnv::new(&mocks.uri());
        let app = test::init_service(HttpServer::create_app(app_state(&env).await)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/does-not-exist").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_error_list(&body, 404, "Resource not found");

        let resp = test::call_service(
            &app,
            test::TestRequest::delete().uri("/audio").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = test::read_body_json(resp).await;
        assert_error_list(&body, 405, "Method not allowed for the resource specified");
    }

    #[actix_web::test]
    async fn test_body_guard_in_front_of_routes() {
        let mocks = UpstreamMocks::start().await;
        let mut env = TestEnv::new(&mocks.uri());
        env.config.server.max_body_size = 64;
        let app = test::init_service(HttpServer::create_app(app_state(&env).await)).await;

        let req = test::TestRequest::post()
            .uri("/audio")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload("{oops")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_error_list(&body, 400, "invalid JSON");

        let req = test::TestRequest::post()
            .uri("/audio")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload(format!("{{\"text\":\"{}\"}}", "x".repeat(128)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Payload Too Large");
    }
}
