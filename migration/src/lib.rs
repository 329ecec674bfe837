pub use sea_orm_migration::prelude::*;

mod m20250903_000001_create_users;
mod m20250903_000002_create_logistic_entries;
mod m20250903_000003_create_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250903_000001_create_users::Migration),
            Box::new(m20250903_000002_create_logistic_entries::Migration),
            Box::new(m20250903_000003_create_logs::Migration),
        ]
    }
}
