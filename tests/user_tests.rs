mod common;

use common::{register_test_user, setup_db};
use socialnet::{
    create_post_in_db, delete_user_in_db, follow_user_in_db, get_comments_for_post,
    get_followers_of_user, get_following_of_user, get_media_for_post, get_posts_for_user,
    get_user_by_email, get_user_by_id, get_user_by_username, get_user_with_counts, insert_user,
    is_following, unfollow_user_in_db, update_user_in_db, CommentRequest, CreatePostRequest,
    MediaRequest, MediaType, RegisterRequest, StoreError, UpdateUserRequest, UserResponse,
};

#[tokio::test]
async fn register_and_fetch_user() {
    let pool = setup_db().await;
    let user = register_test_user(&pool, "alice").await;

    assert!(user.is_active);
    assert_eq!(user.email, "alice@example.com");

    let by_username = get_user_by_username(&pool, "alice")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(by_username.id, user.id);

    let by_email = get_user_by_email(&pool, "alice@example.com")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(by_email.id, user.id);
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let pool = setup_db().await;
    register_test_user(&pool, "alice").await;

    let error = insert_user(
        &pool,
        &RegisterRequest {
            username: "alice".to_owned(),
            email: "other@example.com".to_owned(),
            firstname: "Other".to_owned(),
            lastname: "Person".to_owned(),
            is_active: true,
        },
    )
    .await
    .expect_err("duplicate username must fail");
    assert!(error.is_unique_violation(), "got: {}", error);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let pool = setup_db().await;
    register_test_user(&pool, "alice").await;

    let error = insert_user(
        &pool,
        &RegisterRequest {
            username: "not_alice".to_owned(),
            email: "alice@example.com".to_owned(),
            firstname: "Other".to_owned(),
            lastname: "Person".to_owned(),
            is_active: true,
        },
    )
    .await
    .expect_err("duplicate email must fail");
    assert!(error.is_unique_violation(), "got: {}", error);
}

#[tokio::test]
async fn update_only_touches_supplied_fields() {
    let pool = setup_db().await;
    let user = register_test_user(&pool, "alice").await;

    let updated = update_user_in_db(
        &pool,
        user.id,
        UpdateUserRequest {
            firstname: Some("Alicia".to_owned()),
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.firstname, "Alicia");
    assert!(!updated.is_active);
    assert_eq!(updated.username, user.username);
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.lastname, user.lastname);
}

#[tokio::test]
async fn serializes_created_at_as_iso8601() {
    let pool = setup_db().await;
    let user = register_test_user(&pool, "alice").await;

    let response = UserResponse::new(user);
    assert_eq!(response.created_at.len(), 19, "got: {}", response.created_at);
    assert_eq!(&response.created_at[10..11], "T");
}

#[tokio::test]
async fn follow_edge_appears_in_both_collections() {
    let pool = setup_db().await;
    let alice = register_test_user(&pool, "alice").await;
    let bob = register_test_user(&pool, "bob").await;

    follow_user_in_db(&pool, alice.id, bob.id).await.unwrap();

    let followers = get_followers_of_user(&pool, bob.id).await.unwrap();
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0].user_from_id, alice.id);

    let following = get_following_of_user(&pool, alice.id).await.unwrap();
    assert_eq!(following.len(), 1);
    assert_eq!(following[0].user_to_id, bob.id);

    assert!(is_following(&pool, alice.id, bob.id).await.unwrap());
    assert!(!is_following(&pool, bob.id, alice.id).await.unwrap());

    unfollow_user_in_db(&pool, alice.id, bob.id).await.unwrap();
    assert!(get_followers_of_user(&pool, bob.id)
        .await
        .unwrap()
        .is_empty());

    let error = unfollow_user_in_db(&pool, alice.id, bob.id)
        .await
        .expect_err("edge already removed");
    assert!(matches!(error, StoreError::NotFound(_)));
}

#[tokio::test]
async fn duplicate_follow_edges_are_allowed() {
    let pool = setup_db().await;
    let alice = register_test_user(&pool, "alice").await;
    let bob = register_test_user(&pool, "bob").await;

    follow_user_in_db(&pool, alice.id, bob.id).await.unwrap();
    follow_user_in_db(&pool, alice.id, bob.id).await.unwrap();

    let following = get_following_of_user(&pool, alice.id).await.unwrap();
    assert_eq!(following.len(), 2);
}

#[tokio::test]
async fn counts_reflect_loaded_collections() {
    let pool = setup_db().await;
    let alice = register_test_user(&pool, "alice").await;
    let bob = register_test_user(&pool, "bob").await;
    let carol = register_test_user(&pool, "carol").await;
    let dave = register_test_user(&pool, "dave").await;

    create_post_in_db(&pool, alice.id, CreatePostRequest::default())
        .await
        .unwrap();
    create_post_in_db(&pool, alice.id, CreatePostRequest::default())
        .await
        .unwrap();

    for follower in [&bob, &carol, &dave] {
        follow_user_in_db(&pool, follower.id, alice.id)
            .await
            .unwrap();
    }
    follow_user_in_db(&pool, alice.id, bob.id).await.unwrap();

    let counted = get_user_with_counts(&pool, alice.id).await.unwrap();
    assert_eq!(counted.posts_count, 2);
    assert_eq!(counted.followers_count, 3);
    assert_eq!(counted.following_count, 1);

    // The base fields flatten next to the counts.
    let value = serde_json::to_value(&counted).unwrap();
    assert_eq!(value["username"], serde_json::json!("alice"));
    assert_eq!(value["posts_count"], serde_json::json!(2));
    assert_eq!(value["followers_count"], serde_json::json!(3));
    assert_eq!(value["following_count"], serde_json::json!(1));
}

#[tokio::test]
async fn deleting_user_cascades_to_owned_rows() {
    let pool = setup_db().await;
    let alice = register_test_user(&pool, "alice").await;
    let bob = register_test_user(&pool, "bob").await;

    let alice_post = create_post_in_db(
        &pool,
        alice.id,
        CreatePostRequest {
            media: Some(vec![MediaRequest {
                media_type: MediaType::Photo,
                url: "https://cdn.example.com/1.jpg".to_owned(),
            }]),
        },
    )
    .await
    .unwrap();
    let bob_post = create_post_in_db(&pool, bob.id, CreatePostRequest::default())
        .await
        .unwrap();

    socialnet::add_comment_to_post_in_db(
        &pool,
        bob.id,
        alice_post.id,
        CommentRequest {
            comment_text: "nice".to_owned(),
        },
    )
    .await
    .unwrap();
    socialnet::add_comment_to_post_in_db(
        &pool,
        alice.id,
        bob_post.id,
        CommentRequest {
            comment_text: "thanks".to_owned(),
        },
    )
    .await
    .unwrap();
    follow_user_in_db(&pool, alice.id, bob.id).await.unwrap();
    follow_user_in_db(&pool, bob.id, alice.id).await.unwrap();

    delete_user_in_db(&pool, alice.id).await.unwrap();

    assert!(get_user_by_id(&pool, alice.id).await.unwrap().is_none());
    assert!(get_posts_for_user(&pool, alice.id).await.unwrap().is_empty());
    // Media and comments on the deleted post went with it.
    assert!(get_media_for_post(&pool, alice_post.id)
        .await
        .unwrap()
        .is_empty());
    assert!(get_comments_for_post(&pool, alice_post.id)
        .await
        .unwrap()
        .is_empty());
    // The deleted user's comment on the surviving post is gone too.
    assert!(get_comments_for_post(&pool, bob_post.id)
        .await
        .unwrap()
        .is_empty());
    // Follow edges in both directions are gone.
    assert!(get_followers_of_user(&pool, bob.id)
        .await
        .unwrap()
        .is_empty());
    assert!(get_following_of_user(&pool, bob.id)
        .await
        .unwrap()
        .is_empty());

    assert!(get_user_by_id(&pool, bob.id).await.unwrap().is_some());
}
