//! Unit tests for Blog crate
//! Target: C0 coverage 100%, C1 coverage 80%

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use auth::CurrentUser;
    use auth::domain::value_object::{user_id::UserId, user_name::UserName};
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use crate::application::{
        AddCommentInput, AddCommentUseCase, CreatePostInput, CreatePostUseCase, DeletePostUseCase,
        GetPostUseCase, ListCommentsUseCase, ListPostsUseCase, UpdatePostInput, UpdatePostUseCase,
    };
    use crate::domain::entity::comment::Comment;
    use crate::domain::entity::post::Post;
    use crate::domain::repository::{CommentRepository, PostRepository};
    use crate::domain::value_object::post_id::PostId;
    use crate::error::BlogError;
    use crate::infra::memory::InMemoryBlogRepository;

    fn actor(name: &str) -> CurrentUser {
        CurrentUser {
            user_id: UserId::new(),
            user_name: UserName::new(name, None).unwrap(),
        }
    }

    fn create_input(title: &str) -> CreatePostInput {
        CreatePostInput {
            title: title.to_string(),
            content: "Some content".to_string(),
            author: "Alice Cooper".to_string(),
        }
    }

    #[test]
    fn test_create_post_assigns_owner_from_identity() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let user = actor("alice");
            let use_case = CreatePostUseCase::new(Arc::new(repo.clone()));

            let post = use_case
                .execute(create_input("First post"), &user)
                .await
                .unwrap();

            assert_eq!(post.owner_id, user.user_id.to_string());
            assert_eq!(post.title, "First post");
            assert_eq!(post.author, "Alice Cooper");
            assert_eq!(post.created_at, post.updated_at);

            let stored = repo.find_by_id(&post.post_id).await.unwrap().unwrap();
            assert_eq!(stored.owner_id, post.owner_id);
        });
    }

    #[test]
    fn test_get_post_returns_created_post() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let user = actor("alice");
            let create = CreatePostUseCase::new(Arc::new(repo.clone()));
            let get = GetPostUseCase::new(Arc::new(repo));

            let created = create.execute(create_input("Hello"), &user).await.unwrap();
            let fetched = get.execute(&created.post_id).await.unwrap();

            assert_eq!(fetched.post_id, created.post_id);
            assert_eq!(fetched.title, "Hello");
        });
    }

    #[test]
    fn test_get_missing_post_not_found() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let get = GetPostUseCase::new(Arc::new(repo));

            let result = get.execute(&PostId::from_uuid(Uuid::new_v4())).await;
            assert!(matches!(result, Err(BlogError::PostNotFound)));
        });
    }

    #[test]
    fn test_list_posts_in_creation_order() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let user = actor("alice");
            let base = Utc::now();

            // Seed out of insertion order; listing must follow created_at
            for (title, offset) in [("second", 2), ("first", 1), ("third", 3)] {
                let mut post = Post::new(
                    title.to_string(),
                    "body".to_string(),
                    "Alice Cooper".to_string(),
                    user.user_id.to_string(),
                );
                post.created_at = base + Duration::seconds(offset);
                post.updated_at = post.created_at;
                PostRepository::create(&repo, &post).await.unwrap();
            }

            let list = ListPostsUseCase::new(Arc::new(repo));
            let posts = list.execute().await.unwrap();

            let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
            assert_eq!(titles, vec!["first", "second", "third"]);
        });
    }

    #[test]
    fn test_list_posts_caps_at_hundred() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let user = actor("alice");
            let base = Utc::now();

            for i in 0..103 {
                let mut post = Post::new(
                    format!("post-{i}"),
                    "body".to_string(),
                    "Alice Cooper".to_string(),
                    user.user_id.to_string(),
                );
                post.created_at = base + Duration::milliseconds(i);
                post.updated_at = post.created_at;
                PostRepository::create(&repo, &post).await.unwrap();
            }

            let list = ListPostsUseCase::new(Arc::new(repo));
            let posts = list.execute().await.unwrap();

            assert_eq!(posts.len(), 100);
            assert_eq!(posts[0].title, "post-0");
            assert_eq!(posts[99].title, "post-99");
        });
    }

    #[test]
    fn test_update_post_by_owner() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let user = actor("alice");
            let create = CreatePostUseCase::new(Arc::new(repo.clone()));
            let update = UpdatePostUseCase::new(Arc::new(repo.clone()));

            let post = create.execute(create_input("Draft"), &user).await.unwrap();
            let updated = update
                .execute(
                    UpdatePostInput {
                        post_id: post.post_id,
                        title: "Final".to_string(),
                        content: "Edited content".to_string(),
                        author: "A. Cooper".to_string(),
                    },
                    &user,
                )
                .await
                .unwrap();

            assert_eq!(updated.title, "Final");
            assert_eq!(updated.content, "Edited content");
            assert_eq!(updated.author, "A. Cooper");
            assert_eq!(updated.owner_id, post.owner_id);
            assert_eq!(updated.created_at, post.created_at);
            assert!(updated.updated_at >= post.updated_at);

            let stored = repo.find_by_id(&post.post_id).await.unwrap().unwrap();
            assert_eq!(stored.title, "Final");
        });
    }

    #[test]
    fn test_update_post_by_non_owner_forbidden() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let alice = actor("alice");
            let bob = actor("bob");
            let create = CreatePostUseCase::new(Arc::new(repo.clone()));
            let update = UpdatePostUseCase::new(Arc::new(repo.clone()));

            let post = create
                .execute(create_input("Alice's post"), &alice)
                .await
                .unwrap();
            let result = update
                .execute(
                    UpdatePostInput {
                        post_id: post.post_id,
                        title: "Hijacked".to_string(),
                        content: "x".to_string(),
                        author: "Bob".to_string(),
                    },
                    &bob,
                )
                .await;

            assert!(matches!(result, Err(BlogError::NotOwner("update"))));

            // Rejected update must leave the post untouched
            let stored = repo.find_by_id(&post.post_id).await.unwrap().unwrap();
            assert_eq!(stored.title, "Alice's post");
        });
    }

    #[test]
    fn test_update_missing_post_not_found() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let user = actor("alice");
            let update = UpdatePostUseCase::new(Arc::new(repo));

            let result = update
                .execute(
                    UpdatePostInput {
                        post_id: PostId::from_uuid(Uuid::new_v4()),
                        title: "t".to_string(),
                        content: "c".to_string(),
                        author: "a".to_string(),
                    },
                    &user,
                )
                .await;

            // Missing post answers 404 before any ownership check
            assert!(matches!(result, Err(BlogError::PostNotFound)));
        });
    }

    #[test]
    fn test_delete_post_by_owner_cascades_comments() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let alice = actor("alice");
            let bob = actor("bob");
            let create = CreatePostUseCase::new(Arc::new(repo.clone()));
            let comment =
                AddCommentUseCase::new(Arc::new(repo.clone()), Arc::new(repo.clone()));
            let delete = DeletePostUseCase::new(Arc::new(repo.clone()));
            let get = GetPostUseCase::new(Arc::new(repo.clone()));
            let list_comments = ListCommentsUseCase::new(Arc::new(repo.clone()));

            let post = create.execute(create_input("Doomed"), &alice).await.unwrap();
            comment
                .execute(
                    AddCommentInput {
                        post_id: post.post_id,
                        content: "Nice post".to_string(),
                    },
                    &bob,
                )
                .await
                .unwrap();

            delete.execute(&post.post_id, &alice).await.unwrap();

            assert!(matches!(
                get.execute(&post.post_id).await,
                Err(BlogError::PostNotFound)
            ));
            let remaining = list_comments.execute(&post.post_id).await.unwrap();
            assert!(remaining.is_empty());
        });
    }

    #[test]
    fn test_delete_post_by_non_owner_forbidden() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let alice = actor("alice");
            let bob = actor("bob");
            let create = CreatePostUseCase::new(Arc::new(repo.clone()));
            let delete = DeletePostUseCase::new(Arc::new(repo.clone()));

            let post = create.execute(create_input("Mine"), &alice).await.unwrap();
            let result = delete.execute(&post.post_id, &bob).await;

            assert!(matches!(result, Err(BlogError::NotOwner("delete"))));
            assert!(repo.find_by_id(&post.post_id).await.unwrap().is_some());
        });
    }

    #[test]
    fn test_delete_missing_post_not_found() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let user = actor("alice");
            let delete = DeletePostUseCase::new(Arc::new(repo));

            let result = delete
                .execute(&PostId::from_uuid(Uuid::new_v4()), &user)
                .await;
            assert!(matches!(result, Err(BlogError::PostNotFound)));
        });
    }

    #[test]
    fn test_owner_check_ignores_id_casing() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let alice = actor("alice");

            // Stored owner id differs from the actor's only by hex casing
            let post = Post::new(
                "Cased".to_string(),
                "body".to_string(),
                "Alice Cooper".to_string(),
                alice.user_id.to_string().to_uppercase(),
            );
            PostRepository::create(&repo, &post).await.unwrap();

            let update = UpdatePostUseCase::new(Arc::new(repo));
            let result = update
                .execute(
                    UpdatePostInput {
                        post_id: post.post_id,
                        title: "Still mine".to_string(),
                        content: "body".to_string(),
                        author: "Alice Cooper".to_string(),
                    },
                    &alice,
                )
                .await;

            assert!(result.is_ok());
        });
    }

    #[test]
    fn test_add_comment_sets_author_from_identity() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let alice = actor("alice");
            let bob = actor("bob");
            let create = CreatePostUseCase::new(Arc::new(repo.clone()));
            let comment =
                AddCommentUseCase::new(Arc::new(repo.clone()), Arc::new(repo.clone()));
            let list = ListCommentsUseCase::new(Arc::new(repo));

            let post = create.execute(create_input("Open"), &alice).await.unwrap();
            let added = comment
                .execute(
                    AddCommentInput {
                        post_id: post.post_id,
                        content: "First!".to_string(),
                    },
                    &bob,
                )
                .await
                .unwrap();

            assert_eq!(added.author_id, bob.user_id.to_string());
            assert_eq!(added.post_id, post.post_id);

            let comments = list.execute(&post.post_id).await.unwrap();
            assert_eq!(comments.len(), 1);
            assert_eq!(comments[0].content, "First!");
        });
    }

    #[test]
    fn test_add_comment_to_missing_post_not_found() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let bob = actor("bob");
            let comment =
                AddCommentUseCase::new(Arc::new(repo.clone()), Arc::new(repo));

            let result = comment
                .execute(
                    AddCommentInput {
                        post_id: PostId::from_uuid(Uuid::new_v4()),
                        content: "Into the void".to_string(),
                    },
                    &bob,
                )
                .await;

            assert!(matches!(result, Err(BlogError::PostNotFound)));
        });
    }

    #[test]
    fn test_list_comments_unknown_post_is_empty() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let list = ListCommentsUseCase::new(Arc::new(repo));

            let comments = list
                .execute(&PostId::from_uuid(Uuid::new_v4()))
                .await
                .unwrap();
            assert!(comments.is_empty());
        });
    }

    #[test]
    fn test_list_comments_in_creation_order_and_capped() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let alice = actor("alice");
            let create = CreatePostUseCase::new(Arc::new(repo.clone()));
            let post = create.execute(create_input("Busy"), &alice).await.unwrap();

            let base = Utc::now();
            for i in 0..103 {
                let mut c = Comment::new(
                    post.post_id,
                    alice.user_id.to_string(),
                    format!("comment-{i}"),
                );
                c.created_at = base + Duration::milliseconds(i);
                CommentRepository::create(&repo, &c).await.unwrap();
            }

            let list = ListCommentsUseCase::new(Arc::new(repo));
            let comments = list.execute(&post.post_id).await.unwrap();

            assert_eq!(comments.len(), 100);
            assert_eq!(comments[0].content, "comment-0");
            assert_eq!(comments[99].content, "comment-99");
        });
    }

    #[test]
    fn test_comments_are_isolated_per_post() {
        tokio_test::block_on(async {
            let repo = InMemoryBlogRepository::new();
            let alice = actor("alice");
            let create = CreatePostUseCase::new(Arc::new(repo.clone()));
            let comment =
                AddCommentUseCase::new(Arc::new(repo.clone()), Arc::new(repo.clone()));
            let list = ListCommentsUseCase::new(Arc::new(repo));

            let first = create.execute(create_input("First"), &alice).await.unwrap();
            let second = create.execute(create_input("Second"), &alice).await.unwrap();

            comment
                .execute(
                    AddCommentInput {
                        post_id: first.post_id,
                        content: "On first".to_string(),
                    },
                    &alice,
                )
                .await
                .unwrap();

            let on_second = list.execute(&second.post_id).await.unwrap();
            assert!(on_second.is_empty());

            let on_first = list.execute(&first.post_id).await.unwrap();
            assert_eq!(on_first.len(), 1);
            assert_eq!(on_first[0].content, "On first");
        });
    }
}

mod domain_tests {
    use crate::domain::entity::comment::Comment;
    use crate::domain::entity::post::Post;
    use crate::domain::value_object::post_id::PostId;

    #[test]
    fn test_post_new_sets_identity_and_timestamps() {
        let post = Post::new(
            "Title".to_string(),
            "Content".to_string(),
            "Author".to_string(),
            "owner-1".to_string(),
        );

        assert_eq!(post.post_id.as_uuid().get_version_num(), 4);
        assert_eq!(post.created_at, post.updated_at);
        assert_eq!(post.owner_id, "owner-1");
    }

    #[test]
    fn test_apply_update_preserves_owner_and_created_at() {
        let mut post = Post::new(
            "Old".to_string(),
            "Old content".to_string(),
            "Old author".to_string(),
            "owner-1".to_string(),
        );
        let created_at = post.created_at;

        post.apply_update(
            "New".to_string(),
            "New content".to_string(),
            "New author".to_string(),
        );

        assert_eq!(post.title, "New");
        assert_eq!(post.content, "New content");
        assert_eq!(post.author, "New author");
        assert_eq!(post.owner_id, "owner-1");
        assert_eq!(post.created_at, created_at);
        assert!(post.updated_at >= created_at);
    }

    #[test]
    fn test_comment_new_binds_post_and_author() {
        let post_id = PostId::new();
        let comment = Comment::new(post_id, "user-9".to_string(), "Hello".to_string());

        assert_eq!(comment.post_id, post_id);
        assert_eq!(comment.author_id, "user-9");
        assert_eq!(comment.comment_id.as_uuid().get_version_num(), 4);
    }
}

mod models_tests {
    use crate::domain::entity::comment::Comment;
    use crate::domain::entity::post::Post;
    use crate::domain::value_object::post_id::PostId;
    use crate::presentation::dto::{
        CommentRequest, CommentResponse, CreatePostRequest, PostResponse, UpdatePostRequest,
    };

    #[test]
    fn test_create_post_request_deserializes() {
        let json = r#"{"title": "T", "content": "C", "author": "A"}"#;
        let req: CreatePostRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.title, "T");
        assert_eq!(req.content, "C");
        assert_eq!(req.author, "A");
    }

    #[test]
    fn test_update_post_request_deserializes() {
        let json = r#"{"title": "T2", "content": "C2", "author": "A2"}"#;
        let req: UpdatePostRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.title, "T2");
        assert_eq!(req.author, "A2");
    }

    #[test]
    fn test_comment_request_ignores_author_field() {
        // Clients cannot choose the author; an attempt is silently dropped
        let json = r#"{"content": "Hi", "author": "mallory"}"#;
        let req: CommentRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.content, "Hi");
    }

    #[test]
    fn test_post_response_never_carries_owner_id() {
        let post = Post::new(
            "T".to_string(),
            "C".to_string(),
            "A".to_string(),
            "owner-1".to_string(),
        );
        let response = PostResponse::from(post.clone());

        assert_eq!(response.id, post.post_id.to_string());

        let value = serde_json::to_value(&response).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.get("owner_id").is_none());
        assert_eq!(obj.len(), 4);
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("title"));
        assert!(obj.contains_key("content"));
        assert!(obj.contains_key("author"));
    }

    #[test]
    fn test_comment_response_shape() {
        let comment = Comment::new(PostId::new(), "user-1".to_string(), "Body".to_string());
        let response = CommentResponse::from(comment.clone());

        assert_eq!(response.id, comment.comment_id.to_string());
        assert_eq!(response.post_id, comment.post_id.to_string());
        assert_eq!(response.author_id, "user-1");

        let value = serde_json::to_value(&response).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert!(obj.contains_key("created_at"));
    }
}

mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::kind::ErrorKind;

    use crate::error::BlogError;

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (BlogError::PostNotFound, StatusCode::NOT_FOUND),
            (BlogError::NotOwner("update"), StatusCode::FORBIDDEN),
            (BlogError::NotOwner("delete"), StatusCode::FORBIDDEN),
            (
                BlogError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                BlogError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                BlogError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "wrong status for {error}");
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(BlogError::PostNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(BlogError::NotOwner("update").kind(), ErrorKind::Forbidden);
        assert_eq!(
            BlogError::Internal("x".to_string()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(BlogError::PostNotFound.to_string(), "Post not found");
        assert_eq!(
            BlogError::NotOwner("update").to_string(),
            "Not authorized to update this post"
        );
        assert_eq!(
            BlogError::NotOwner("delete").to_string(),
            "Not authorized to delete this post"
        );
    }

    #[test]
    fn test_forbidden_has_no_authenticate_challenge() {
        // WWW-Authenticate is reserved for 401 responses
        let response = BlogError::NotOwner("update").into_response();
        assert!(response.headers().get("WWW-Authenticate").is_none());
    }

    #[test]
    fn test_database_error_converts() {
        let error: BlogError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, BlogError::Database(_)));
    }
}
