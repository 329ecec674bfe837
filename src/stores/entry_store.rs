use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, Value,
};

use crate::errors::InternalError;
use crate::types::db::logistic_entry::{self, Entity as LogisticEntry};
use crate::types::db::user;
use crate::types::internal::entry_field::EntryField;

/// Field values for a new logistic entry, already validated by the service
///
/// Numeric columns default to zero when the payload omits them, matching how
/// the charge sheet is filled in over the entry's lifetime.
#[derive(Debug, Default)]
pub struct NewEntry {
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
}

/// EntryStore manages logistic entry rows in the database
pub struct EntryStore {
    db: DatabaseConnection,
}

impl EntryStore {
    /// Create a new EntryStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new entry and return its id
    pub async fn insert(&self, entry: NewEntry) -> Result<i64, InternalError> {
        let active = logistic_entry::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            user_id: Set(entry.user_id),
            date: Set(entry.date),
            exporter_name: Set(entry.exporter_name),
            invoice_no: Set(entry.invoice_no),
            container_no: Set(entry.container_no),
            size: Set(entry.size),
            line: Set(entry.line),
            line_seal: Set(entry.line_seal),
            custom_seal_no: Set(entry.custom_seal_no),
            sb_no: Set(entry.sb_no),
            sb_date: Set(entry.sb_date),
            pod: Set(entry.pod),
            value: Set(entry.value),
            pkgs: Set(entry.pkgs),
            transporter: Set(entry.transporter),
            vehicle_no: Set(entry.vehicle_no),
            shipping_bill_no: Set(entry.shipping_bill_no),
            shipping_bill_date: Set(entry.shipping_bill_date),
            cha: Set(entry.cha),
            gst_no: Set(entry.gst_no),
            port: Set(entry.port),
            factory_stuffing: Set(entry.factory_stuffing),
            seal_charges: Set(entry.seal_charges),
            fumigation_charges_kpc_care: Set(entry.fumigation_charges_kpc_care),
            empty_survey_report_master_marine: Set(entry.empty_survey_report_master_marine),
            transport_charges: Set(entry.transport_charges),
            handling_charges_transport_bill: Set(entry.handling_charges_transport_bill),
            detention_charges: Set(entry.detention_charges),
            handling_charges_nk_yard: Set(entry.handling_charges_nk_yard),
            concor_freight_charges: Set(entry.concor_freight_charges),
            concor_handling_charges: Set(entry.concor_handling_charges),
            gsp_fees: Set(entry.gsp_fees),
            image_path: Set(entry.image_path),
            gsp_making_charges: Set(entry.gsp_making_charges),
            out_charges_handling: Set(entry.out_charges_handling),
            labour_charges: Set(entry.labour_charges),
            examination_charges: Set(entry.examination_charges),
            direct_stuffing_charges: Set(entry.direct_stuffing_charges),
            ksl_invoice: Set(entry.ksl_invoice),
            remarks: Set(entry.remarks),
            status: Set(None),
            created_at: Set(Utc::now().timestamp()),
        };

        let result = LogisticEntry::insert(active)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_entry", e))?;

        Ok(result.last_insert_id)
    }

    /// List all entries, newest first, without creator identity
    pub async fn list(&self) -> Result<Vec<logistic_entry::Model>, InternalError> {
        LogisticEntry::find()
            .order_by_desc(logistic_entry::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_entries", e))
    }

    /// List all entries joined with their creating user, newest first
    pub async fn list_with_creators(
        &self,
    ) -> Result<Vec<(logistic_entry::Model, Option<user::Model>)>, InternalError> {
        LogisticEntry::find()
            .find_also_related(user::Entity)
            .order_by_desc(logistic_entry::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_entries_with_creators", e))
    }

    /// Apply the given field/value pairs to one entry
    ///
    /// Returns the number of affected rows; zero means the entry id does not
    /// exist. Callers must not pass an empty update set.
    pub async fn update_fields(
        &self,
        entry_id: i64,
        updates: Vec<(EntryField, Value)>,
    ) -> Result<u64, InternalError> {
        let mut statement = LogisticEntry::update_many().filter(logistic_entry::Column::Id.eq(entry_id));

        for (field, value) in updates {
            statement = statement.col_expr(field.column(), Expr::value(value));
        }

        let result = statement
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("update_entry", e))?;

        Ok(result.rows_affected)
    }

    /// Delete one entry; returns the number of affected rows
    pub async fn delete(&self, entry_id: i64) -> Result<u64, InternalError> {
        let result = LogisticEntry::delete_many()
            .filter(logistic_entry::Column::Id.eq(entry_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_entry", e))?;

        Ok(result.rows_affected)
    }
}
