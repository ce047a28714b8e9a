//! Integration tests for the mock sign-in / sign-up modal.

use demo_store_integration_tests::TestClient;

const MODAL: &str = "auth-modal-title";

async fn open_modal(client: &mut TestClient) {
    client.post_form("/auth/open", &[]).await.assert_redirect_home();
}

// =============================================================================
// Modal
// =============================================================================

#[tokio::test]
async fn test_modal_closed_by_default() {
    let mut client = TestClient::new();
    let page = client.page().await;
    assert!(!page.contains(MODAL));
    assert!(page.contains("action=\"/auth/open\""));
}

#[tokio::test]
async fn test_open_toggle_close() {
    let mut client = TestClient::new();
    open_modal(&mut client).await;

    let page = client.page().await;
    assert!(page.contains(MODAL));
    assert!(!page.contains("name=\"confirm_password\""));

    client.post_form("/auth/toggle", &[]).await.assert_redirect_home();
    let page = client.page().await;
    assert!(page.contains("name=\"confirm_password\""));
    assert!(page.contains("Already have an account?"));

    client.post_form("/auth/close", &[]).await.assert_redirect_home();
    assert!(!client.page().await.contains(MODAL));

    // Reopens in sign-in mode
    open_modal(&mut client).await;
    assert!(!client.page().await.contains("name=\"confirm_password\""));
}

#[tokio::test]
async fn test_only_password_field_has_min_length() {
    let mut client = TestClient::new();
    open_modal(&mut client).await;
    client.post_form("/auth/toggle", &[]).await.assert_redirect_home();

    let page = client.page().await;
    let confirm_start = page.find("name=\"confirm_password\"").unwrap();
    let confirm_end = confirm_start + page[confirm_start..].find('>').unwrap();
    let confirm_input = &page[confirm_start..confirm_end];
    assert!(!confirm_input.contains("minlength"));

    assert_eq!(page.matches("minlength=\"6\"").count(), 1);
}

// =============================================================================
// Sign In / Sign Out
// =============================================================================

#[tokio::test]
async fn test_sign_in_and_out() {
    let mut client = TestClient::new();
    open_modal(&mut client).await;

    client
        .post_form(
            "/auth/submit",
            &[("email", "a@b.com"), ("password", "secret1")],
        )
        .await
        .assert_redirect_home();

    let page = client.page().await;
    assert!(page.contains("Hi, a"));
    assert!(page.contains("action=\"/auth/sign-out\""));
    assert!(!page.contains(MODAL));

    client
        .post_form("/auth/sign-out", &[])
        .await
        .assert_redirect_home();

    let page = client.page().await;
    assert!(!page.contains("Hi, a"));
    assert!(page.contains("action=\"/auth/open\""));
}

#[tokio::test]
async fn test_sign_in_keeps_cart() {
    let mut client = TestClient::new();
    client
        .post_form("/cart/add", &[("product_id", "2")])
        .await
        .assert_redirect_home();

    open_modal(&mut client).await;
    client
        .post_form(
            "/auth/submit",
            &[("email", "shopper@example.com"), ("password", "secret1")],
        )
        .await
        .assert_redirect_home();

    let page = client.page().await;
    assert!(page.contains("Hi, shopper"));
    assert!(page.contains("data-cart-count=\"1\""));
}

#[tokio::test]
async fn test_sign_in_short_password() {
    let mut client = TestClient::new();
    open_modal(&mut client).await;

    client
        .post_form("/auth/submit", &[("email", "a@b.com"), ("password", "abc")])
        .await
        .assert_redirect_home();

    let page = client.page().await;
    assert!(page.contains(MODAL));
    assert!(page.contains("Password must be at least 6 characters."));
    assert!(!page.contains("Hi, a"));
}

#[tokio::test]
async fn test_sign_in_invalid_email() {
    let mut client = TestClient::new();
    open_modal(&mut client).await;

    client
        .post_form(
            "/auth/submit",
            &[("email", "not-an-email"), ("password", "secret1")],
        )
        .await
        .assert_redirect_home();

    let page = client.page().await;
    assert!(page.contains("Please enter a valid email address."));
    assert!(page.contains("value=\"not-an-email\""));
}

// =============================================================================
// Sign Up
// =============================================================================

#[tokio::test]
async fn test_sign_up_mismatch_then_success() {
    let mut client = TestClient::new();
    open_modal(&mut client).await;
    client.post_form("/auth/toggle", &[]).await.assert_redirect_home();

    client
        .post_form(
            "/auth/submit",
            &[
                ("email", "new@b.com"),
                ("password", "secret1"),
                ("confirm_password", "secret2"),
            ],
        )
        .await
        .assert_redirect_home();

    let page = client.page().await;
    assert!(page.contains("Passwords do not match."));
    assert!(page.contains("value=\"new@b.com\""));
    assert!(page.contains("name=\"confirm_password\""));
    assert!(!page.contains("Hi, new"));

    client
        .post_form(
            "/auth/submit",
            &[
                ("email", "new@b.com"),
                ("password", "secret1"),
                ("confirm_password", "secret1"),
            ],
        )
        .await
        .assert_redirect_home();

    let page = client.page().await;
    assert!(page.contains("Hi, new"));
    assert!(!page.contains("Passwords do not match."));
    assert!(!page.contains(MODAL));
}

#[tokio::test]
async fn test_passwords_never_rendered() {
    let mut client = TestClient::new();
    open_modal(&mut client).await;
    client.post_form("/auth/toggle", &[]).await.assert_redirect_home();

    client
        .post_form(
            "/auth/submit",
            &[
                ("email", "new@b.com"),
                ("password", "hunter22"),
                ("confirm_password", "hunter23"),
            ],
        )
        .await
        .assert_redirect_home();

    let page = client.page().await;
    assert!(!page.contains("hunter22"));
    assert!(!page.contains("hunter23"));
}
