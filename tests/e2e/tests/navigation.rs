use std::time::Duration;

use e2e::{browser::Browser, test_server::TestServer};

const HYDRATION: Duration = Duration::from_secs(15);

#[tokio::test]
#[ignore = "starts the web server and a headless Chrome"]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Musa Emir Doğan"), "Should render the portfolio");
    for id in ["about", "experience", "projects", "contact"] {
        assert!(body.contains(&format!("id=\"{id}\"")), "missing section {id}");
    }
}

#[tokio::test]
#[ignore = "starts the web server and a headless Chrome"]
async fn test_lang_query_selects_turkish() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(&format!("{}/?lang=tr", server.url()))
        .expect("Failed to navigate");

    page.wait_until(HYDRATION, |p| Ok(p.document_lang()? == "tr"))
        .expect("document lang should become tr");
    let about = page.text("a.nav_link[href='#about']").expect("nav link");
    assert_eq!(about, "Hakkında");
    assert_eq!(page.stored_language().unwrap().as_deref(), Some("tr"));
}

#[tokio::test]
#[ignore = "starts the web server and a headless Chrome"]
async fn test_language_toggle_updates_url_and_survives_reload() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");
    page.wait_until(HYDRATION, |p| Ok(p.document_lang()? == "en"))
        .expect("default language should be applied");

    page.click("#lang_toggle").expect("toggle");
    page.wait_until(HYDRATION, |p| Ok(p.url().contains("lang=tr")))
        .expect("url should carry the new language");
    assert_eq!(page.document_lang().unwrap(), "tr");

    // Without the query parameter the stored preference wins.
    page.goto(server.url()).expect("Failed to navigate");
    page.wait_until(HYDRATION, |p| Ok(p.document_lang()? == "tr"))
        .expect("stored language should be restored");
}
