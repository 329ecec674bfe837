use sea_orm_migration::prelude::*;

use crate::m20250903_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LogisticEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LogisticEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LogisticEntries::UserId).string().not_null())
                    .col(ColumnDef::new(LogisticEntries::Date).string())
                    .col(ColumnDef::new(LogisticEntries::ExporterName).string().not_null())
                    .col(ColumnDef::new(LogisticEntries::InvoiceNo).string().not_null())
                    .col(ColumnDef::new(LogisticEntries::ContainerNo).string().not_null())
                    .col(ColumnDef::new(LogisticEntries::Size).string())
                    .col(ColumnDef::new(LogisticEntries::Line).string())
                    .col(ColumnDef::new(LogisticEntries::LineSeal).string())
                    .col(ColumnDef::new(LogisticEntries::CustomSealNo).string())
                    .col(ColumnDef::new(LogisticEntries::SbNo).string())
                    .col(ColumnDef::new(LogisticEntries::SbDate).string())
                    .col(ColumnDef::new(LogisticEntries::Pod).string())
                    .col(ColumnDef::new(LogisticEntries::Value).double().not_null().default(0))
                    .col(ColumnDef::new(LogisticEntries::Pkgs).integer().not_null().default(0))
                    .col(ColumnDef::new(LogisticEntries::Transporter).string().not_null())
                    .col(ColumnDef::new(LogisticEntries::VehicleNo).string())
                    .col(ColumnDef::new(LogisticEntries::ShippingBillNo).string())
                    .col(ColumnDef::new(LogisticEntries::ShippingBillDate).string())
                    .col(ColumnDef::new(LogisticEntries::Cha).string())
                    .col(ColumnDef::new(LogisticEntries::GstNo).string())
                    .col(ColumnDef::new(LogisticEntries::Port).string())
                    .col(ColumnDef::new(LogisticEntries::FactoryStuffing).string())
                    .col(ColumnDef::new(LogisticEntries::SealCharges).double().not_null().default(0))
                    .col(
                        ColumnDef::new(LogisticEntries::FumigationChargesKpcCare)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LogisticEntries::EmptySurveyReportMasterMarine)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(LogisticEntries::TransportCharges).double().not_null().default(0))
                    .col(
                        ColumnDef::new(LogisticEntries::HandlingChargesTransportBill)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(LogisticEntries::DetentionCharges).double().not_null().default(0))
                    .col(
                        ColumnDef::new(LogisticEntries::HandlingChargesNkYard)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LogisticEntries::ConcorFreightCharges)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LogisticEntries::ConcorHandlingCharges)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(LogisticEntries::GspFees).double().not_null().default(0))
                    .col(ColumnDef::new(LogisticEntries::ImagePath).string())
                    .col(ColumnDef::new(LogisticEntries::GspMakingCharges).double().not_null().default(0))
                    .col(ColumnDef::new(LogisticEntries::OutChargesHandling).double().not_null().default(0))
                    .col(ColumnDef::new(LogisticEntries::LabourCharges).double().not_null().default(0))
                    .col(ColumnDef::new(LogisticEntries::ExaminationCharges).double().not_null().default(0))
                    .col(
                        ColumnDef::new(LogisticEntries::DirectStuffingCharges)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(LogisticEntries::KslInvoice).string())
                    .col(ColumnDef::new(LogisticEntries::Remarks).string())
                    .col(ColumnDef::new(LogisticEntries::Status).string())
                    .col(ColumnDef::new(LogisticEntries::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_logistic_entries_user_id")
                            .from(LogisticEntries::Table, LogisticEntries::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_logistic_entries_created_at")
                    .table(LogisticEntries::Table)
                    .col(LogisticEntries::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogisticEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LogisticEntries {
    Table,
    Id,
    UserId,
    Date,
    ExporterName,
    InvoiceNo,
    ContainerNo,
    Size,
    Line,
    LineSeal,
    CustomSealNo,
    SbNo,
    SbDate,
    Pod,
    Value,
    Pkgs,
    Transporter,
    VehicleNo,
    ShippingBillNo,
    ShippingBillDate,
    Cha,
    GstNo,
    Port,
    FactoryStuffing,
    SealCharges,
    FumigationChargesKpcCare,
    EmptySurveyReportMasterMarine,
    TransportCharges,
    HandlingChargesTransportBill,
    DetentionCharges,
    HandlingChargesNkYard,
    ConcorFreightCharges,
    ConcorHandlingCharges,
    GspFees,
    ImagePath,
    GspMakingCharges,
    OutChargesHandling,
    LabourCharges,
    ExaminationCharges,
    DirectStuffingCharges,
    KslInvoice,
    Remarks,
    Status,
    CreatedAt,
}
