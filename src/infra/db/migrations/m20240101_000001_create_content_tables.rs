//! Migration: Create the site content tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::Name).string_len(120).not_null().unique_key())
                    .col(ColumnDef::new(Services::Slug).string_len(140).not_null().unique_key())
                    .col(ColumnDef::new(Services::Description).text().not_null())
                    .col(ColumnDef::new(Services::Price).double().not_null().default(0.0))
                    .col(
                        ColumnDef::new(Services::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tickets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tickets::Name).string_len(120).not_null())
                    .col(ColumnDef::new(Tickets::Email).string_len(200).not_null())
                    .col(ColumnDef::new(Tickets::Subject).string_len(200).not_null())
                    .col(ColumnDef::new(Tickets::Message).text().not_null())
                    .col(
                        ColumnDef::new(Tickets::Status)
                            .string_len(40)
                            .not_null()
                            .default("open"),
                    )
                    .col(
                        ColumnDef::new(Tickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_email")
                    .table(Tickets::Table)
                    .col(Tickets::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(About::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(About::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(About::Content).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Leaders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Leaders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Leaders::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Leaders::Photo).string_len(255).null())
                    .col(ColumnDef::new(Leaders::Bio).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Resources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resources::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Resources::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Resources::Description).text().null())
                    .col(ColumnDef::new(Resources::Type).string_len(50).not_null())
                    .col(ColumnDef::new(Resources::Url).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Partners::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Partners::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Partners::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Partners::Logo).string_len(255).null())
                    .col(ColumnDef::new(Partners::Link).string_len(255).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Partners::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Resources::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Leaders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(About::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Services {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Price,
    CreatedAt,
}

#[derive(Iden)]
enum Tickets {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    Status,
    CreatedAt,
}

#[derive(Iden)]
enum About {
    Table,
    Id,
    Content,
}

#[derive(Iden)]
enum Leaders {
    Table,
    Id,
    Name,
    Photo,
    Bio,
}

#[derive(Iden)]
enum Resources {
    Table,
    Id,
    Title,
    Description,
    Type,
    Url,
}

#[derive(Iden)]
enum Partners {
    Table,
    Id,
    Name,
    Logo,
    Link,
}
