use grlc_docs::config::DiscoveryConfig;
use grlc_docs::error::AppError;
use grlc_docs::github::{render_repo_links, GitHubClient};

fn client_for(server: &mockito::ServerGuard) -> GitHubClient {
    let settings = DiscoveryConfig {
        api_base_url: server.url(),
        ..DiscoveryConfig::default()
    };
    GitHubClient::new(None, settings)
}

#[tokio::test]
async fn test_only_repos_with_query_files_are_found() {
    let mut server = mockito::Server::new_async().await;
    let _repos = server
        .mock("GET", "/users/dummy_user/repos")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"
[
  {"name": "queries", "full_name": "dummy_user/queries"},
  {"name": "website", "full_name": "dummy_user/website"},
  {"name": "more", "full_name": "dummy_user/more"}
]
"#,
        )
        .create_async()
        .await;
    let _queries = server
        .mock("GET", "/repos/dummy_user/queries/contents")
        .with_status(200)
        .with_body(r#"[{"name": "README.md"}, {"name": "people.rq"}]"#)
        .create_async()
        .await;
    let _website = server
        .mock("GET", "/repos/dummy_user/website/contents")
        .with_status(200)
        .with_body(r#"[{"name": "index.html"}, {"name": "rq"}]"#)
        .create_async()
        .await;
    let _more = server
        .mock("GET", "/repos/dummy_user/more/contents")
        .with_status(200)
        .with_body(r#"[{"name": "places.sparql"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let found = client.find_query_repos("dummy_user").await.expect("discover");
    let names: Vec<&str> = found.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(names, vec!["dummy_user/queries", "dummy_user/more"]);
    assert_eq!(found[0].name, "queries");

    let html = render_repo_links(&found, client.link_base());
    assert_eq!(
        html,
        "<a href='http://grlc.io/api/dummy_user/queries'>dummy_user/queries</a><br>\
         <a href='http://grlc.io/api/dummy_user/more'>dummy_user/more</a><br>"
    );
}

#[tokio::test]
async fn test_empty_repository_is_skipped() {
    let mut server = mockito::Server::new_async().await;
    let _repos = server
        .mock("GET", "/users/u/repos")
        .with_status(200)
        .with_body(r#"[{"name": "empty", "full_name": "u/empty"}, {"name": "q", "full_name": "u/q"}]"#)
        .create_async()
        .await;
    let _empty = server
        .mock("GET", "/repos/u/empty/contents")
        .with_status(404)
        .with_body(r#"{"message": "This repository is empty."}"#)
        .create_async()
        .await;
    let _q = server
        .mock("GET", "/repos/u/q/contents")
        .with_status(200)
        .with_body(r#"[{"name": "a.rq"}]"#)
        .create_async()
        .await;

    let found = client_for(&server).find_query_repos("u").await.expect("discover");
    let names: Vec<&str> = found.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(names, vec!["u/q"]);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/users/ghost/repos")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;

    let err = client_for(&server).find_query_repos("ghost").await.unwrap_err();
    match err {
        AppError::GitHubApi(body) => assert!(body.contains("Not Found")),
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_unparseable_listing_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/users/dummy_user/repos")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = client_for(&server).list_user_repos("dummy_user").await.unwrap_err();
    assert!(matches!(err, AppError::GitHubApi(_)));
}
