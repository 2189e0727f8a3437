use crate::auth::{Credentials, LoginError};
use crate::router::handle;
use crate::tests::utils::{
    form_id_in, read_body, sample_release, test_app, FakeLoginApi, FakeReleases,
};
use astra::Body;
use http::{Method, Request};
use std::thread;
use std::time::Duration;

fn post_login(body: &str, htmx: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(body.as_bytes().to_vec())).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn login_page_starts_with_modal_hidden() {
    let login = FakeLoginApi::accepting();
    let app = test_app(&FakeReleases::returning(sample_release()), &login);

    let resp = handle(get("/login"), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains(r#"id="login-open""#));
    assert!(body.contains(r#"<div id="login-modal" class="modal" hidden>"#));
    assert!(login.calls().is_empty());
}

#[test]
fn modal_open_query_shows_dialog_without_request() {
    let login = FakeLoginApi::accepting();
    let app = test_app(&FakeReleases::returning(sample_release()), &login);

    let body = read_body(handle(get("/login?modal=open"), &app).unwrap());

    assert!(body.contains(r#"<div id="login-modal" class="modal">"#));
    assert!(body.contains(r#"id="login-cancel""#));
    assert!(login.calls().is_empty());
}

#[test]
fn successful_login_redirects_to_secure() {
    let login = FakeLoginApi::accepting();
    let app = test_app(&FakeReleases::returning(sample_release()), &login);

    let resp = handle(post_login("username=alice&password=secret", false), &app).unwrap();

    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/secure");
    assert_eq!(login.calls(), vec![Credentials::new("alice", "secret")]);
}

#[test]
fn htmx_login_uses_hx_redirect() {
    let login = FakeLoginApi::accepting();
    let app = test_app(&FakeReleases::returning(sample_release()), &login);

    let resp = handle(post_login("username=alice&password=secret", true), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("HX-Redirect").and_then(|v| v.to_str().ok()),
        Some("/secure")
    );
}

#[test]
fn form_values_are_url_decoded() {
    let login = FakeLoginApi::accepting();
    let app = test_app(&FakeReleases::returning(sample_release()), &login);

    handle(post_login("username=al%20ice&password=p%26ss%3D1", false), &app).unwrap();

    assert_eq!(login.calls(), vec![Credentials::new("al ice", "p&ss=1")]);
}

#[test]
fn failed_login_rerenders_same_page() {
    let login = FakeLoginApi::failing(LoginError::Network("connection refused".into()));
    let app = test_app(&FakeReleases::returning(sample_release()), &login);

    let resp = handle(post_login("username=alice&password=secret", false), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("Location").is_none());

    let body = read_body(resp);
    assert!(body.contains(r#"<div id="login-modal" class="modal">"#));
    assert!(body.contains(r#"value="alice""#));
    assert!(!body.contains("secret"));
    assert_eq!(login.calls().len(), 1);
}

#[test]
fn failed_htmx_login_leaves_dom_alone() {
    let login = FakeLoginApi::failing(LoginError::InvalidCredentials(401));
    let app = test_app(&FakeReleases::returning(sample_release()), &login);

    let resp = handle(post_login("username=alice&password=wrong", true), &app).unwrap();

    assert_eq!(resp.status(), 204);
    assert!(resp.headers().get("HX-Redirect").is_none());
    assert!(read_body(resp).is_empty());
}

#[test]
fn missing_fields_are_sent_empty() {
    let login = FakeLoginApi::accepting();
    let app = test_app(&FakeReleases::returning(sample_release()), &login);

    handle(post_login("", false), &app).unwrap();

    assert_eq!(login.calls(), vec![Credentials::new("", "")]);
}

#[test]
fn oversized_form_is_rejected() {
    let login = FakeLoginApi::accepting();
    let app = test_app(&FakeReleases::returning(sample_release()), &login);
    let huge = format!("username={}&password=x", "a".repeat(20 * 1024));

    let err = handle(post_login(&huge, false), &app).unwrap_err();

    assert_eq!(err.status(), 400);
    assert!(login.calls().is_empty());
}

#[test]
fn login_does_not_touch_release_source() {
    let releases = FakeReleases::returning(sample_release());
    let app = test_app(&releases, &FakeLoginApi::accepting());

    handle(get("/login?modal=open"), &app).unwrap();
    handle(post_login("username=alice&password=secret", false), &app).unwrap();

    assert!(releases.calls().is_empty());
}

#[test]
fn each_login_page_gets_its_own_form_id() {
    let app = test_app(&FakeReleases::returning(sample_release()), &FakeLoginApi::accepting());

    let first = form_id_in(&read_body(handle(get("/login"), &app).unwrap())).unwrap();
    let second = form_id_in(&read_body(handle(get("/login"), &app).unwrap())).unwrap();

    assert!(!first.is_empty());
    assert_ne!(first, second);
}

#[test]
fn failed_login_keeps_the_same_form_id() {
    let login = FakeLoginApi::failing(LoginError::Server(500));
    let app = test_app(&FakeReleases::returning(sample_release()), &login);

    let body = read_body(
        handle(post_login("form_id=abc&username=alice&password=x", false), &app).unwrap(),
    );

    assert_eq!(form_id_in(&body).as_deref(), Some("abc"));
}

#[test]
fn two_clients_with_the_same_username_both_reach_the_api() {
    let login = FakeLoginApi::failing(LoginError::InvalidCredentials(401)).slow(Duration::from_millis(500));
    let app = test_app(&FakeReleases::returning(sample_release()), &login);

    thread::scope(|s| {
        let first = s.spawn(|| {
            handle(post_login("form_id=client-a&username=alice&password=wrong", false), &app)
                .unwrap()
                .status()
        });

        thread::sleep(Duration::from_millis(100));
        let second = handle(
            post_login("form_id=client-b&username=alice&password=secret", false),
            &app,
        )
        .unwrap();

        assert_eq!(second.status(), 200);
        assert_eq!(first.join().unwrap(), 200);
    });

    let calls = login.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.contains(&Credentials::new("alice", "wrong")));
    assert!(calls.contains(&Credentials::new("alice", "secret")));
}

#[test]
fn posts_without_form_id_are_independent() {
    let login = FakeLoginApi::accepting().slow(Duration::from_millis(300));
    let app = test_app(&FakeReleases::returning(sample_release()), &login);

    thread::scope(|s| {
        let first = s.spawn(|| handle(post_login("username=alice&password=a", false), &app).unwrap().status());
        thread::sleep(Duration::from_millis(50));
        let second = handle(post_login("username=alice&password=b", false), &app).unwrap();

        assert_eq!(second.status(), 302);
        assert_eq!(first.join().unwrap(), 302);
    });

    assert_eq!(login.calls().len(), 2);
}

#[test]
fn resubmitting_a_pending_form_sends_nothing() {
    let login = FakeLoginApi::accepting().slow(Duration::from_millis(500));
    let app = test_app(&FakeReleases::returning(sample_release()), &login);

    thread::scope(|s| {
        let first = s.spawn(|| {
            handle(post_login("form_id=same&username=alice&password=secret", true), &app)
                .unwrap()
                .status()
        });

        thread::sleep(Duration::from_millis(100));
        let again = handle(post_login("form_id=same&username=alice&password=secret", true), &app)
            .unwrap();

        assert_eq!(again.status(), 204);
        assert_eq!(first.join().unwrap(), 200);
    });

    assert_eq!(login.calls().len(), 1);
}
