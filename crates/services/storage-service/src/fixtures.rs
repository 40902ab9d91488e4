//! Demo data loaded at start-up.
//!
//! Rebuilt identically on every start, apart from timestamps: procurement due
//! dates are relative to the seeding time.

use chrono::{DateTime, Duration, Utc};
use common::AppResult;
use domain::{
    Id, Level, MetricChanges, NewFinancialOffer, NewForumPost, NewLearningResource,
    NewProcurement, NewProduct, NewSupplier, NewUser, OfferType, Password, ResourceType,
    SetupSteps, StorefrontChanges,
};

use crate::{MemStorage, Storage};

pub const DEMO_USERNAME: &str = "sophia_patel";
pub const DEMO_PASSWORD: &str = "password123";

/// Fixed response counts for the seeded forum posts.
const SEEDED_RESPONSE_COUNTS: [i32; 3] = [14, 9, 17];

/// Load every fixture family into an empty store.
///
/// Everything goes through the `Storage` operations except the forum
/// response counts, which no operation writes.
pub(crate) async fn seed(
    storage: &MemStorage,
    owner_password: Password,
    now: DateTime<Utc>,
) -> AppResult<()> {
    let owner = storage
        .create_user(NewUser {
            username: DEMO_USERNAME.to_string(),
            password: owner_password,
            name: "Sophia Patel".to_string(),
            business_name: "Eco Textiles Ltd".to_string(),
            email: "sophia@ecotextiles.com".to_string(),
            phone: Some("+91 9876543210".to_string()),
            profile_image: None,
        })
        .await?;

    for product in demo_products(owner.id) {
        storage.create_product(product).await?;
    }

    storage
        .update_metrics(
            owner.id,
            MetricChanges {
                store_visits: Some(2415),
                orders: Some(48),
                connections: Some(12),
                revenue: Some(4_258_600),
            },
        )
        .await?;

    storage
        .update_storefront(
            owner.id,
            StorefrontChanges {
                completion_percentage: Some(75),
                setup_steps: Some(SetupSteps {
                    basic_info: true,
                    products: true,
                    logo: true,
                    payment: false,
                    shipping: false,
                }),
            },
        )
        .await?;

    for supplier in demo_suppliers() {
        storage.create_supplier(supplier).await?;
    }

    for procurement in demo_procurements(now) {
        storage.create_procurement(procurement).await?;
    }

    for offer in demo_financial_offers() {
        storage.create_financial_offer(offer).await?;
    }

    for (post, responses) in demo_forum_posts(owner.id)
        .into_iter()
        .zip(SEEDED_RESPONSE_COUNTS)
    {
        let id = storage.create_forum_post(post).await?.id;
        if let Some(stored) = storage.forum_posts.write().await.get_mut(id) {
            stored.response_count = responses;
        }
    }

    for resource in demo_learning_resources() {
        storage.create_learning_resource(resource).await?;
    }

    Ok(())
}

fn demo_products(user_id: Id) -> Vec<NewProduct> {
    vec![
        NewProduct {
            user_id,
            name: "Organic Cotton Fabric".to_string(),
            description: Some("High-quality organic cotton fabric, sustainably sourced".to_string()),
            price: 45000,
            image: Some("https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&h=240&q=80".to_string()),
        },
        NewProduct {
            user_id,
            name: "Recycled Polyester Blend".to_string(),
            description: Some("Eco-friendly recycled polyester blend for sustainable fashion".to_string()),
            price: 38000,
            image: Some("https://images.unsplash.com/photo-1606522754091-a3bbf9ad4cb3?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&h=240&q=80".to_string()),
        },
        NewProduct {
            user_id,
            name: "Hemp Textile".to_string(),
            description: Some("Natural hemp textile with excellent durability".to_string()),
            price: 52000,
            image: Some("https://images.unsplash.com/photo-1581783342308-f792dbdd27c5?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&h=240&q=80".to_string()),
        },
    ]
}

fn demo_suppliers() -> Vec<NewSupplier> {
    [
        ("EcoFibers Inc.", "Raw Materials", "Sustainable textile raw materials supplier", 20),
        ("GreenPackaging Co.", "Packaging", "Eco-friendly packaging solutions", 15),
        ("EthicalSource Logistics", "Logistics", "Ethical and sustainable logistics services", 10),
    ]
    .into_iter()
    .map(|(name, category, description, savings)| NewSupplier {
        name: name.to_string(),
        category: category.to_string(),
        description: Some(description.to_string()),
        cost_savings: Some(savings),
    })
    .collect()
}

fn demo_procurements(now: DateTime<Utc>) -> Vec<NewProcurement> {
    vec![
        NewProcurement {
            title: "Sustainable Textiles for Government Uniforms".to_string(),
            organization: "Ministry of Textiles".to_string(),
            description: "Seeking suppliers of sustainable textiles for government uniform program".to_string(),
            category: "Government".to_string(),
            due_date: now + Duration::days(15),
        },
        NewProcurement {
            title: "Eco-Friendly Packaging Materials".to_string(),
            organization: "FashionRetail Inc.".to_string(),
            description: "Looking for eco-friendly packaging for clothing line".to_string(),
            category: "Corporate".to_string(),
            due_date: now + Duration::days(30),
        },
    ]
}

fn demo_financial_offers() -> Vec<NewFinancialOffer> {
    [
        (OfferType::Loan, 50_000_000, 850, 24),
        (OfferType::InvoiceFinancing, 35_000_000, 800, 6),
        (OfferType::EquipmentLoan, 75_000_000, 900, 36),
    ]
    .into_iter()
    .map(|(kind, amount, interest_rate, term_months)| NewFinancialOffer {
        kind,
        amount,
        interest_rate,
        term_months,
    })
    .collect()
}

fn demo_forum_posts(user_id: Id) -> Vec<NewForumPost> {
    [
        (
            "Tips for EU Export Compliance",
            "I'm looking to export my textiles to the EU. What regulations should I be aware of?",
            ["Export", "Regulations"],
        ),
        (
            "How I secured my first corporate contract",
            "Sharing my experience securing a contract with a large corporation as a small business...",
            ["Success Story", "Procurement"],
        ),
        (
            "Digital marketing on a small budget",
            "What are your strategies for effective digital marketing with limited resources?",
            ["Marketing", "Digital"],
        ),
    ]
    .into_iter()
    .map(|(title, content, tags)| NewForumPost {
        user_id,
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    })
    .collect()
}

fn demo_learning_resources() -> Vec<NewLearningResource> {
    [
        (
            "Supply Chain Management for Small Businesses",
            ResourceType::Video,
            "Learn the basics of supply chain management tailored for small businesses",
            15,
            Level::Beginner,
        ),
        (
            "Guide to Digital Marketing for Product Visibility",
            ResourceType::Article,
            "Practical strategies to increase your product visibility online",
            10,
            Level::Intermediate,
        ),
        (
            "How to Navigate International Trade Regulations",
            ResourceType::Guide,
            "Comprehensive guide to international trade regulations for small businesses",
            25,
            Level::Advanced,
        ),
    ]
    .into_iter()
    .map(|(title, kind, description, duration, level)| NewLearningResource {
        title: title.to_string(),
        kind,
        description: description.to_string(),
        duration,
        level,
    })
    .collect()
}
