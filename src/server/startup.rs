use crate::server::{
    config::Config, error::AppError, metrics::Metrics, service::teacher::TeacherService,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so that the `teachers` and `attendances` tables
/// and their indexes exist. This function must complete successfully before the
/// application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the metrics registry with the teacher gauge seeded from the stored count.
pub async fn init_metrics(db: &sea_orm::DatabaseConnection) -> Result<Metrics, AppError> {
    let metrics = Metrics::new();

    let total = TeacherService::new(db).count().await?;
    metrics.set_teachers_total(total);

    tracing::debug!(teachers_total = total, "Seeded metrics");

    Ok(metrics)
}
