use sea_query::{ColumnDef, Index, Table, TableCreateStatement, TableDropStatement};

use crate::table::MealPlanEntry;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MealPlanEntry::Table)
        .col(
            ColumnDef::new(MealPlanEntry::UserId)
                .string()
                .not_null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(MealPlanEntry::Date)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(MealPlanEntry::MealLabel)
                .string()
                .not_null()
                .string_len(16),
        )
        .col(
            ColumnDef::new(MealPlanEntry::RecipeId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(MealPlanEntry::Servings)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(MealPlanEntry::Calories).double().not_null())
        .col(ColumnDef::new(MealPlanEntry::Protein).double().not_null())
        .col(ColumnDef::new(MealPlanEntry::Fat).double().not_null())
        .col(ColumnDef::new(MealPlanEntry::Carbs).double().not_null())
        .primary_key(
            Index::create()
                .col(MealPlanEntry::UserId)
                .col(MealPlanEntry::Date)
                .col(MealPlanEntry::MealLabel)
                .col(MealPlanEntry::RecipeId),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MealPlanEntry::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
