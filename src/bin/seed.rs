use landing_storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, create_pool, run_migrations},
};
use uuid::Uuid;

const COLORS: &[(&str, &str)] = &[
    ("Black", "#000000"),
    ("White", "#FFFFFF"),
    ("Gray", "#808080"),
    ("Navy", "#000080"),
    ("Red", "#FF0000"),
    ("Green", "#008000"),
    ("Blue", "#0000FF"),
    ("Yellow", "#FFFF00"),
    ("Beige", "#F5F5DC"),
    ("Brown", "#8B4513"),
];

const SIZE_CATEGORIES: &[(&str, &[&str])] = &[
    ("Clothing", &["XS", "S", "M", "L", "XL", "XXL"]),
    ("Shoes", &["36", "37", "38", "39", "40", "41", "42", "43", "44", "45"]),
    ("Rings", &["5", "6", "7", "8", "9", "10"]),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    let pool = create_pool(&config.database_url).await?;
    seed_colors(&pool).await?;
    seed_sizes(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_colors(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    for (position, (name, hex)) in COLORS.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO standard_colors (id, name, hex_code, sort_order)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (hex_code) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(*name)
        .bind(*hex)
        .bind(position as i32)
        .execute(pool)
        .await?;
    }

    println!("Seeded {} standard colors", COLORS.len());
    Ok(())
}

async fn seed_sizes(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    for (category_position, (category, labels)) in SIZE_CATEGORIES.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO size_categories (id, name, sort_order)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(*category)
        .bind(category_position as i32)
        .execute(pool)
        .await?;

        // Existing categories keep their id, so look it up again.
        let (category_id,): (Uuid,) =
            sqlx::query_as("SELECT id FROM size_categories WHERE name = $1")
                .bind(*category)
                .fetch_one(pool)
                .await?;

        for (position, label) in labels.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO standard_sizes (id, category_id, label, sort_order)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (category_id, label) DO NOTHING
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(category_id)
            .bind(*label)
            .bind(position as i32)
            .execute(pool)
            .await?;
        }
        println!("Ensured size category {category} ({} sizes)", labels.len());
    }
    Ok(())
}
