//! Pagination and relevance search through the public facade

use news_comments::{AppConfig, CommentError, CommentRequest, Comments, UserRequest};
use uuid::Uuid;

fn comments() -> Comments {
    Comments::in_memory(&AppConfig::default()).unwrap()
}

fn request(text: &str, user_name: &str, news_id: i64) -> CommentRequest {
    CommentRequest {
        text: text.to_string(),
        user: UserRequest {
            uuid: Uuid::new_v4(),
            user_name: user_name.to_string(),
        },
        news_id,
    }
}

#[tokio::test]
async fn test_page_count_and_out_of_range_page() {
    let comments = comments();
    for i in 0..11 {
        comments
            .create(&request(&format!("comment {}", i), "ann", 1))
            .await
            .unwrap();
    }

    let first = comments.list(5, 1).await.unwrap();
    assert_eq!(first.page_number, 1);
    assert_eq!(first.count_page, 3);
    assert_eq!(first.content.len(), 5);
    assert_eq!(first.content[0].id, 1);

    let last = comments.list(5, 3).await.unwrap();
    assert_eq!(last.content.len(), 1);
    assert_eq!(last.content[0].id, 11);

    let beyond = comments.list(5, 4).await.unwrap();
    assert_eq!(beyond.page_number, 4);
    assert_eq!(beyond.count_page, 3);
    assert!(beyond.content.is_empty());
}

#[tokio::test]
async fn test_listing_respects_view_and_news() {
    let comments = comments();
    for i in 0..4 {
        comments
            .create(&request(&format!("first {}", i), "ann", 1))
            .await
            .unwrap();
    }
    for i in 0..3 {
        comments
            .create(&request(&format!("second {}", i), "ann", 2))
            .await
            .unwrap();
    }
    comments.archive(1).await.unwrap();

    assert_eq!(comments.list(15, 1).await.unwrap().content.len(), 6);
    assert_eq!(comments.list_by_news(1, 15, 1).await.unwrap().content.len(), 3);

    let archived = comments.list_archived(15, 1).await.unwrap();
    assert_eq!(archived.content.len(), 1);
    assert_eq!(archived.content[0].id, 1);

    let none = comments.list_archived_by_news(2, 15, 1).await.unwrap();
    assert_eq!(none.count_page, 0);
    assert!(none.content.is_empty());
}

#[tokio::test]
async fn test_bad_paging_is_rejected() {
    let comments = comments();
    assert!(matches!(
        comments.list(0, 1).await,
        Err(CommentError::Validation(_))
    ));
    assert!(matches!(
        comments.list_archived(10, 0).await,
        Err(CommentError::Validation(_))
    ));
}

#[tokio::test]
async fn test_search_returns_only_active_matches() {
    let comments = comments();
    for text in ["tax reform passed", "tax reform debate", "tax reform stalled"] {
        comments.create(&request(text, "ann", 1)).await.unwrap();
    }
    for text in ["tax reform rumor", "tax reform leak"] {
        comments.create(&request(text, "ann", 2)).await.unwrap();
    }
    comments.create(&request("weather update", "ann", 1)).await.unwrap();
    comments.archive_by_news(2).await.unwrap();

    let results = comments.search("tax reform", 0, 10).await.unwrap();

    assert!(results.len() <= 3);
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.news_id == 1));
}

#[tokio::test]
async fn test_search_matches_user_name() {
    let comments = comments();
    comments
        .create(&request("no keywords here", "zelda", 1))
        .await
        .unwrap();
    comments.create(&request("zelda fan club", "link", 1)).await.unwrap();

    let results = comments.search("zelda", 0, 10).await.unwrap();
    assert_eq!(results.len(), 2);
    // Body matches outrank name matches
    assert_eq!(results[0].text, "zelda fan club");
}

#[tokio::test]
async fn test_search_reflects_updates() {
    let comments = comments();
    let created = comments.create(&request("draft wording", "ann", 1)).await.unwrap();

    comments
        .update(created.id, &request("revised phrasing", "ann", 1))
        .await
        .unwrap();

    assert!(comments.search("draft", 0, 10).await.unwrap().is_empty());
    assert_eq!(comments.search("revised", 0, 10).await.unwrap().len(), 1);
}
