use sea_orm::entity::prelude::*;

/// SeaORM entity for the logistic_entries table
///
/// Identifying fields (exporter_name, invoice_no, container_no, transporter)
/// are required at creation; the descriptive and charge columns mirror the
/// shipment paperwork and default to empty/zero.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "logistic_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub date: Option<String>,
    pub exporter_name: String,
    pub invoice_no: String,
    pub container_no: String,
    pub size: Option<String>,
    pub line: Option<String>,
    pub line_seal: Option<String>,
    pub custom_seal_no: Option<String>,
    pub sb_no: Option<String>,
    pub sb_date: Option<String>,
    pub pod: Option<String>,
    pub value: f64,
    pub pkgs: i32,
    pub transporter: String,
    pub vehicle_no: Option<String>,
    pub shipping_bill_no: Option<String>,
    pub shipping_bill_date: Option<String>,
    pub cha: Option<String>,
    pub gst_no: Option<String>,
    pub port: Option<String>,
    pub factory_stuffing: Option<String>,
    pub seal_charges: f64,
    pub fumigation_charges_kpc_care: f64,
    pub empty_survey_report_master_marine: f64,
    pub transport_charges: f64,
    pub handling_charges_transport_bill: f64,
    pub detention_charges: f64,
    pub handling_charges_nk_yard: f64,
    pub concor_freight_charges: f64,
    pub concor_handling_charges: f64,
    pub gsp_fees: f64,
    pub image_path: Option<String>,
    pub gsp_making_charges: f64,
    pub out_charges_handling: f64,
    pub labour_charges: f64,
    pub examination_charges: f64,
    pub direct_stuffing_charges: f64,
    pub ksl_invoice: Option<String>,
    pub remarks: Option<String>,
    pub status: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
