//! Storage engine behaviour against an empty store.

use common::AppError;
use chrono::{Duration, Utc};
use domain::{
    Level, MetricChanges, NewFinancialOffer, NewForumPost, NewLearningResource, NewProcurement,
    NewProduct, NewSupplier, NewUser, OfferType, PasswordScheme, ProductChanges, ResourceType,
    SetupSteps, StorefrontChanges,
};
use storage_service_lib::{MemStorage, Storage};

fn new_product(user_id: i64, name: &str, price: i64) -> NewProduct {
    NewProduct {
        user_id,
        name: name.to_string(),
        description: Some("Hand loomed".to_string()),
        price,
        image: None,
    }
}

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: PasswordScheme::Plaintext.hash("password123").unwrap(),
        name: "Test User".to_string(),
        business_name: "Test Business".to_string(),
        email: email.to_string(),
        phone: None,
        profile_image: None,
    }
}

#[tokio::test]
async fn test_create_then_get_returns_input_plus_server_fields() {
    let storage = MemStorage::new();

    let created = storage
        .create_product(new_product(1, "Indigo Scarf", 2500))
        .await
        .unwrap();
    let fetched = storage.get_product(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.id, 1);
    assert_eq!(fetched.name, "Indigo Scarf");
    assert_eq!(fetched.price, 2500);
    assert_eq!(fetched.description.as_deref(), Some("Hand loomed"));
}

#[tokio::test]
async fn test_create_then_get_user() {
    let storage = MemStorage::new();

    let created = storage
        .create_user(new_user("amara", "amara@example.com"))
        .await
        .unwrap();
    let fetched = storage.get_user(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.id, 1);
    assert_eq!(fetched.business_name, "Test Business");
    assert!(fetched.password.verify("password123"));
}

#[tokio::test]
async fn test_create_then_get_supplier() {
    let storage = MemStorage::new();

    let created = storage
        .create_supplier(NewSupplier {
            name: "Loom Works".to_string(),
            category: "Raw Materials".to_string(),
            description: None,
            cost_savings: Some(12),
        })
        .await
        .unwrap();
    let fetched = storage.get_supplier(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.id, 1);
    assert_eq!(fetched.name, "Loom Works");
    assert_eq!(fetched.description, None);
    assert_eq!(fetched.cost_savings, Some(12));
}

#[tokio::test]
async fn test_create_then_get_procurement() {
    let storage = MemStorage::new();
    let due_date = Utc::now() + Duration::days(10);

    let created = storage
        .create_procurement(NewProcurement {
            title: "School uniforms".to_string(),
            organization: "City Council".to_string(),
            description: "Cotton uniforms for primary schools".to_string(),
            category: "Government".to_string(),
            due_date,
        })
        .await
        .unwrap();
    let fetched = storage.get_procurement(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.organization, "City Council");
    assert_eq!(fetched.due_date, due_date);
}

#[tokio::test]
async fn test_create_then_get_financial_offer() {
    let storage = MemStorage::new();

    let created = storage
        .create_financial_offer(NewFinancialOffer {
            kind: OfferType::EquipmentLoan,
            amount: 1_000_000,
            interest_rate: 725,
            term_months: 18,
        })
        .await
        .unwrap();
    let fetched = storage.get_financial_offer(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.kind, OfferType::EquipmentLoan);
    assert_eq!(fetched.interest_rate, 725);
    assert!(storage.get_financial_offer(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_then_get_forum_post() {
    let storage = MemStorage::new();

    let created = storage
        .create_forum_post(NewForumPost {
            user_id: 3,
            title: "Pricing wholesale orders".to_string(),
            content: "How do you set tiers?".to_string(),
            tags: vec![],
        })
        .await
        .unwrap();
    let fetched = storage.get_forum_post(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.user_id, 3);
    assert!(fetched.tags.is_empty());
}

#[tokio::test]
async fn test_create_then_get_learning_resource() {
    let storage = MemStorage::new();

    let created = storage
        .create_learning_resource(NewLearningResource {
            title: "Costing basics".to_string(),
            kind: ResourceType::Article,
            description: "Work out unit costs".to_string(),
            duration: 8,
            level: Level::Beginner,
        })
        .await
        .unwrap();
    let fetched = storage
        .get_learning_resource(created.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.kind, ResourceType::Article);
    assert_eq!(fetched.level, Level::Beginner);
    assert_eq!(fetched.duration, 8);
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let storage = MemStorage::new();
    let created = storage
        .create_product(new_product(1, "Indigo Scarf", 2500))
        .await
        .unwrap();

    storage
        .update_product(
            created.id,
            ProductChanges {
                name: Some("Indigo Stole".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let fetched = storage.get_product(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.name, "Indigo Stole");
    assert_eq!(fetched.price, created.price);
    assert_eq!(fetched.description, created.description);
    assert_eq!(fetched.user_id, created.user_id);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let storage = MemStorage::new();

    let err = storage
        .update_product(42, ProductChanges::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(ref entity) if entity == "Product"));
}

#[tokio::test]
async fn test_delete_then_get_and_second_delete() {
    let storage = MemStorage::new();
    let created = storage
        .create_product(new_product(1, "Jute Bag", 900))
        .await
        .unwrap();

    assert!(storage.delete_product(created.id).await.unwrap());
    assert!(storage.get_product(created.id).await.unwrap().is_none());
    assert!(!storage.delete_product(created.id).await.unwrap());
}

#[tokio::test]
async fn test_ids_increase_and_are_not_reused() {
    let storage = MemStorage::new();

    let first = storage.create_product(new_product(1, "a", 1)).await.unwrap();
    let second = storage.create_product(new_product(1, "b", 1)).await.unwrap();
    let third = storage.create_product(new_product(1, "c", 1)).await.unwrap();
    storage.delete_product(second.id).await.unwrap();
    let fourth = storage.create_product(new_product(1, "d", 1)).await.unwrap();

    assert_eq!([first.id, second.id, third.id, fourth.id], [1, 2, 3, 4]);
}

#[tokio::test]
async fn test_list_products_filters_by_owner() {
    let storage = MemStorage::new();
    storage.create_product(new_product(1, "mine", 1)).await.unwrap();
    storage.create_product(new_product(2, "theirs", 1)).await.unwrap();
    storage.create_product(new_product(1, "also mine", 1)).await.unwrap();

    let names: Vec<String> = storage
        .list_products(1)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(names, ["mine", "also mine"]);
    assert!(storage.list_products(3).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_user_rejects_duplicates() {
    let storage = MemStorage::new();
    storage
        .create_user(new_user("amara", "amara@example.com"))
        .await
        .unwrap();

    let err = storage
        .create_user(new_user("amara", "other@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref field) if field == "Username"));

    let err = storage
        .create_user(new_user("amara2", "amara@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref field) if field == "Email"));

    assert_eq!(storage.counts().await.unwrap().users, 1);
}

#[tokio::test]
async fn test_user_lookups() {
    let storage = MemStorage::new();
    let user = storage
        .create_user(new_user("amara", "amara@example.com"))
        .await
        .unwrap();

    let by_name = storage.get_user_by_username("amara").await.unwrap().unwrap();
    let by_email = storage
        .get_user_by_email("amara@example.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(by_name.id, user.id);
    assert_eq!(by_email.id, user.id);
    assert!(storage.get_user_by_username("nobody").await.unwrap().is_none());
    assert!(storage.get_user(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_new_forum_post_has_no_responses() {
    let storage = MemStorage::new();

    let post = storage
        .create_forum_post(NewForumPost {
            user_id: 1,
            title: "Hello World!".to_string(),
            content: "Testing".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
        })
        .await
        .unwrap();

    assert_eq!(post.response_count, 0);
    assert_eq!(post.tags, ["a", "b"]);
    assert_eq!(storage.list_forum_posts().await.unwrap(), vec![post]);
}

#[tokio::test]
async fn test_metrics_upsert_creates_one_record() {
    let storage = MemStorage::new();
    assert!(storage.get_metrics(5).await.unwrap().is_none());

    let created = storage
        .update_metrics(
            5,
            MetricChanges {
                orders: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.orders, 2);
    assert_eq!(created.store_visits, 0);
    assert_eq!(created.revenue, 0);

    let updated = storage
        .update_metrics(
            5,
            MetricChanges {
                revenue: Some(1000),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.orders, 2);
    assert_eq!(updated.revenue, 1000);
    assert!(updated.last_updated >= created.last_updated);
    assert_eq!(storage.counts().await.unwrap().metrics, 1);
}

#[tokio::test]
async fn test_storefront_upsert_stores_caller_percentage() {
    let storage = MemStorage::new();
    let steps = SetupSteps {
        basic_info: true,
        products: true,
        logo: true,
        payment: false,
        shipping: false,
    };

    let storefront = storage
        .update_storefront(
            1,
            StorefrontChanges {
                completion_percentage: Some(60),
                setup_steps: Some(steps),
            },
        )
        .await
        .unwrap();

    assert_eq!(storefront.id, 1);
    assert_eq!(storefront.user_id, 1);
    assert_eq!(storefront.completion_percentage, 60);
    assert_eq!(storefront.setup_steps, steps);

    let again = storage
        .update_storefront(
            1,
            StorefrontChanges {
                completion_percentage: Some(10),
                setup_steps: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(again.id, storefront.id);
    assert_eq!(again.completion_percentage, 10);
    assert_eq!(again.setup_steps, steps);
    assert_eq!(storage.counts().await.unwrap().storefronts, 1);
}

#[tokio::test]
async fn test_storefront_defaults_on_first_write() {
    let storage = MemStorage::new();

    let storefront = storage
        .update_storefront(4, StorefrontChanges::default())
        .await
        .unwrap();

    assert_eq!(storefront.completion_percentage, 0);
    assert_eq!(storefront.setup_steps, SetupSteps::initial());
}

#[tokio::test]
async fn test_progress_without_storefront_is_zero() {
    let storage = MemStorage::new();

    let progress = storage.storefront_progress(8).await.unwrap();

    assert_eq!(progress.user_id, 8);
    assert_eq!(progress.completion_percentage, 0);
    assert_eq!(progress.steps_percentage, 0);
}

#[tokio::test]
async fn test_recommended_reads_return_whole_collection() {
    let password = PasswordScheme::Plaintext.hash("password123").unwrap();
    let storage = MemStorage::seeded(password).await.unwrap();

    assert_eq!(
        storage.recommended_suppliers().await.unwrap(),
        storage.list_suppliers().await.unwrap()
    );
    assert_eq!(
        storage.recommended_procurements().await.unwrap(),
        storage.list_procurements().await.unwrap()
    );
    assert_eq!(
        storage.recommended_financial_offers().await.unwrap(),
        storage.list_financial_offers().await.unwrap()
    );
    assert_eq!(
        storage.recommended_learning_resources().await.unwrap(),
        storage.list_learning_resources().await.unwrap()
    );
}
