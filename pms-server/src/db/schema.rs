//! Schema bootstrap for the five entity tables
//!
//! Idempotent (`IF NOT EXISTS`); safe to run on every start. Dependent rows
//! cascade when their property or user is deleted.

use sqlx::PgPool;

use super::DbError;

/// Table definitions in dependency order.
const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL CHECK (role IN ('landlord', 'tenant', 'admin')),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "properties",
        r#"
        CREATE TABLE IF NOT EXISTS properties (
            property_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            location_address TEXT NOT NULL,
            location_latitude DOUBLE PRECISION NOT NULL,
            location_longitude DOUBLE PRECISION NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            type TEXT NOT NULL,
            size DOUBLE PRECISION NOT NULL,
            amenities TEXT,
            images TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "leases",
        r#"
        CREATE TABLE IF NOT EXISTS leases (
            lease_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            property_id UUID NOT NULL REFERENCES properties(property_id) ON DELETE CASCADE,
            tenant_id UUID NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            monthly_rent DOUBLE PRECISION NOT NULL,
            payment_frequency TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "maintenance_requests",
        r#"
        CREATE TABLE IF NOT EXISTS maintenance_requests (
            request_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            property_id UUID NOT NULL REFERENCES properties(property_id) ON DELETE CASCADE,
            tenant_id UUID NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
            description TEXT NOT NULL,
            status TEXT NOT NULL CHECK (status IN ('pending', 'completed')),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "reviews",
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            review_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            property_id UUID NOT NULL REFERENCES properties(property_id) ON DELETE CASCADE,
            user_id UUID NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
            rating DOUBLE PRECISION NOT NULL,
            comment TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
];

/// Foreign-key indexes, so cascades don't scan.
const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_leases_property ON leases(property_id)",
    "CREATE INDEX IF NOT EXISTS idx_leases_tenant ON leases(tenant_id)",
    "CREATE INDEX IF NOT EXISTS idx_maintenance_requests_property ON maintenance_requests(property_id)",
    "CREATE INDEX IF NOT EXISTS idx_maintenance_requests_tenant ON maintenance_requests(tenant_id)",
    "CREATE INDEX IF NOT EXISTS idx_reviews_property ON reviews(property_id)",
    "CREATE INDEX IF NOT EXISTS idx_reviews_user ON reviews(user_id)",
];

/// Create any missing tables and indexes.
pub async fn init(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Initializing schema...");

    for (table, ddl) in TABLES {
        tracing::debug!(table, "ensuring table");
        sqlx::query(ddl).execute(pool).await?;
    }

    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    tracing::info!(tables = TABLES.len(), "Schema ready");
    Ok(())
}

/// Names of the managed tables, in creation order.
pub fn table_names() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|(name, _)| *name)
}
