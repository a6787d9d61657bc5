//! Starter catalog
//!
//! Fills an empty `products` table with the demo assortment. Picture URIs are
//! built from a configured image base path, which is therefore required
//! whenever seeding runs.

use chrono::{Duration, Utc};
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;
use uuid::Uuid;

use crate::infrastructure::database::entities::product;
use crate::support::InfraError;

/// (name, description, price in minor units, picture file)
const STARTER_CATALOG: &[(&str, &str, i64, &str)] = &[
    (
        "Modern Watch",
        "Elegant men's watch with a black strap and LED display. Water resistant to 50 meters.",
        299_900,
        "watches_PNG9863-3949376704.png",
    ),
    (
        "Wireless Headphones",
        "Professional wireless headphones with active noise cancelling and 24 hours of battery life.",
        499_900,
        "Beats-by-Dre-Limited-Edition-Gloss-Gold-Headphones-and-Pill-2-studio-999965710.jpg",
    ),
    (
        "Smartphone",
        "Latest smartphone model with 6GB RAM, 128GB storage and a triple camera.",
        1_499_900,
        "4764970338_96037b36c3_b-1-2581187507.jpg",
    ),
    (
        "Coffee Machine",
        "Automatic coffee machine with a wide range of functions and settings.",
        899_900,
        "Krups_Nespresso_Prodigio_cafetera-4119988827.jpg",
    ),
    (
        "Handbag",
        "Elegant leather handbag with several pockets and a detachable strap.",
        399_900,
        "DSC_0073-2108993918.JPG",
    ),
    (
        "Double Bed",
        "Modern 200 x 180 cm double bed with storage space and mattress.",
        599_900,
        "ubytovani-usti-nad-labem-penzion-komtesa-Bianka-1.jpg",
    ),
    (
        "Power Bank",
        "High-capacity 20000mAh power bank with two USB ports.",
        129_900,
        "anker-powerbank-2649890983.jpg",
    ),
    (
        "High Heels",
        "Elegant black high heels with a comfortable insole and quality materials.",
        299_900,
        "podvazek-bile-boty-na-podpatku-70167993.jpg",
    ),
    (
        "Fridge Freezer",
        "Compact fridge with freezer and automatic defrost.",
        1_599_900,
        "Double-Door-Fridge-PNG-Download-Image-3854761405.png",
    ),
    (
        "Microwave Oven",
        "Microwave oven with touch controls and grill function.",
        399_900,
        "microwave_PNG15704-4137692812.png",
    ),
    (
        "Washing Machine",
        "Automatic washing machine with pre-wash and drying function.",
        2_499_900,
        "waschmaschine-von-galanz-4077569996.jpeg",
    ),
    (
        "LCD Television",
        "64'' 4K LCD television with HDR and Android TV.",
        3_499_900,
        "Full-HD-LED-TV-PNG-Download-Image-935071104.png",
    ),
];

/// Seeds the catalog on first start
pub struct InitialData {
    base_path: String,
}

impl InitialData {
    pub fn new(image_base_path: Option<&str>) -> Result<Self, InfraError> {
        match image_base_path {
            Some(path) if !path.trim().is_empty() => Ok(Self {
                base_path: path.to_string(),
            }),
            _ => Err(InfraError::Config(
                "image base path is not set (seed.image_base_path or DEVELOPMENT_IMAGE_PATH)"
                    .to_string(),
            )),
        }
    }

    pub fn image_url(&self, file_name: &str) -> String {
        format!("{}{}", self.base_path, file_name)
    }

    pub fn initial_products(&self) -> Vec<product::ActiveModel> {
        let base = Utc::now();
        STARTER_CATALOG
            .iter()
            .enumerate()
            .map(|(i, (name, description, price_cents, file))| product::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(name.to_string()),
                description: Set(description.to_string()),
                price_cents: Set(*price_cents),
                picture_uri: Set(self.image_url(file)),
                created_at: Set(base + Duration::milliseconds(i as i64)),
            })
            .collect()
    }

    /// Insert the starter catalog unless the table already has rows.
    /// Returns the number of inserted products.
    pub async fn initialize_database(&self, db: &DatabaseConnection) -> Result<u64, InfraError> {
        if product::Entity::find().count(db).await? > 0 {
            info!("Product catalog already populated, skipping seed");
            return Ok(0);
        }

        let products = self.initial_products();
        let inserted = products.len() as u64;
        product::Entity::insert_many(products).exec(db).await?;
        info!("Seeded {} products", inserted);
        Ok(inserted)
    }
}
