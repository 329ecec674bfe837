use std::sync::Arc;

use crate::errors::entry::EntryError;
use crate::services::authorizer::{self, Action};
use crate::services::AuditLogger;
use crate::stores::entry_store::NewEntry;
use crate::stores::{EntryStore, FileStore};
use crate::types::dto::entries::{EntryResponse, UpdateEntryRequest};
use crate::types::internal::audit::LogAction;
use crate::types::internal::auth::Claims;
use crate::types::internal::role::Role;

/// Field values for a new entry as delivered by the transport layer
///
/// The identifying fields arrive as options so that this service owns the
/// required-field validation and its 400, rather than the form parser.
#[derive(Debug, Default)]
pub struct CreateEntryData {
    pub date: Option<String>,
    pub exporter_name: Option<String>,
    pub invoice_no: Option<String>,
    pub container_no: Option<String>,
    pub size: Option<String>,
    pub line: Option<String>,
    pub line_seal: Option<String>,
    pub custom_seal_no: Option<String>,
    pub sb_no: Option<String>,
    pub sb_date: Option<String>,
    pub pod: Option<String>,
    pub value: Option<f64>,
    pub pkgs: Option<i32>,
    pub transporter: Option<String>,
    pub vehicle_no: Option<String>,
    pub shipping_bill_no: Option<String>,
    pub shipping_bill_date: Option<String>,
    pub cha: Option<String>,
    pub gst_no: Option<String>,
    pub port: Option<String>,
    pub factory_stuffing: Option<String>,
    pub seal_charges: Option<f64>,
    pub fumigation_charges_kpc_care: Option<f64>,
    pub empty_survey_report_master_marine: Option<f64>,
    pub transport_charges: Option<f64>,
    pub handling_charges_transport_bill: Option<f64>,
    pub detention_charges: Option<f64>,
    pub handling_charges_nk_yard: Option<f64>,
    pub concor_freight_charges: Option<f64>,
    pub concor_handling_charges: Option<f64>,
    pub gsp_fees: Option<f64>,
    pub gsp_making_charges: Option<f64>,
    pub out_charges_handling: Option<f64>,
    pub labour_charges: Option<f64>,
    pub examination_charges: Option<f64>,
    pub direct_stuffing_charges: Option<f64>,
    pub ksl_invoice: Option<String>,
    pub remarks: Option<String>,
}

/// An uploaded container image
#[derive(Debug)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

/// Entry mutation pipeline
///
/// Every mutation runs the same fixed sequence: authorize the caller's role,
/// narrow the payload where the role requires it, write, then enqueue the
/// audit log. Authorization failures short-circuit before anything is
/// written, and a failed write skips the log.
pub struct EntryService {
    entry_store: Arc<EntryStore>,
    file_store: Arc<FileStore>,
    audit_logger: Arc<AuditLogger>,
}

impl EntryService {
    /// Create a new EntryService
    pub fn new(
        entry_store: Arc<EntryStore>,
        file_store: Arc<FileStore>,
        audit_logger: Arc<AuditLogger>,
    ) -> Self {
        Self {
            entry_store,
            file_store,
            audit_logger,
        }
    }

    /// Create a new entry, storing the uploaded image first when present
    pub async fn create(
        &self,
        claims: &Claims,
        data: CreateEntryData,
        image: Option<ImageUpload>,
    ) -> Result<i64, EntryError> {
        if !authorizer::can_perform(claims.role, Action::CreateEntry) {
            return Err(EntryError::access_denied());
        }

        let exporter_name = required(data.exporter_name)?;
        let invoice_no = required(data.invoice_no)?;
        let container_no = required(data.container_no)?;
        let transporter = required(data.transporter)?;

        let image_path = match image {
            Some(upload) => Some(self.file_store.store(&upload.bytes, &upload.file_name).await?),
            None => None,
        };

        let entry_id = self
            .entry_store
            .insert(NewEntry {
                user_id: claims.sub.clone(),
                date: data.date,
                exporter_name,
                invoice_no,
                container_no,
                size: data.size,
                line: data.line,
                line_seal: data.line_seal,
                custom_seal_no: data.custom_seal_no,
                sb_no: data.sb_no,
                sb_date: data.sb_date,
                pod: data.pod,
                value: data.value.unwrap_or(0.0),
                pkgs: data.pkgs.unwrap_or(0),
                transporter,
                vehicle_no: data.vehicle_no,
                shipping_bill_no: data.shipping_bill_no,
                shipping_bill_date: data.shipping_bill_date,
                cha: data.cha,
                gst_no: data.gst_no,
                port: data.port,
                factory_stuffing: data.factory_stuffing,
                seal_charges: data.seal_charges.unwrap_or(0.0),
                fumigation_charges_kpc_care: data.fumigation_charges_kpc_care.unwrap_or(0.0),
                empty_survey_report_master_marine: data
                    .empty_survey_report_master_marine
                    .unwrap_or(0.0),
                transport_charges: data.transport_charges.unwrap_or(0.0),
                handling_charges_transport_bill: data
                    .handling_charges_transport_bill
                    .unwrap_or(0.0),
                detention_charges: data.detention_charges.unwrap_or(0.0),
                handling_charges_nk_yard: data.handling_charges_nk_yard.unwrap_or(0.0),
                concor_freight_charges: data.concor_freight_charges.unwrap_or(0.0),
                concor_handling_charges: data.concor_handling_charges.unwrap_or(0.0),
                gsp_fees: data.gsp_fees.unwrap_or(0.0),
                image_path,
                gsp_making_charges: data.gsp_making_charges.unwrap_or(0.0),
                out_charges_handling: data.out_charges_handling.unwrap_or(0.0),
                labour_charges: data.labour_charges.unwrap_or(0.0),
                examination_charges: data.examination_charges.unwrap_or(0.0),
                direct_stuffing_charges: data.direct_stuffing_charges.unwrap_or(0.0),
                ksl_invoice: data.ksl_invoice,
                remarks: data.remarks,
            })
            .await?;

        self.audit_logger
            .record(&claims.sub, Some(entry_id), LogAction::Create, "Entry created");

        Ok(entry_id)
    }

    /// List entries; admin roles see creator identity joined in
    pub async fn list(&self, claims: &Claims) -> Result<Vec<EntryResponse>, EntryError> {
        if !authorizer::can_perform(claims.role, Action::ReadEntries) {
            return Err(EntryError::access_denied());
        }

        let entries = match claims.role {
            Role::SuperAdmin | Role::DevAdmin => self
                .entry_store
                .list_with_creators()
                .await?
                .into_iter()
                .map(|(entry, creator)| EntryResponse::from_model(entry, creator.as_ref()))
                .collect(),
            Role::User => self
                .entry_store
                .list()
                .await?
                .into_iter()
                .map(|entry| EntryResponse::from_model(entry, None))
                .collect(),
        };

        Ok(entries)
    }

    /// Update an entry, narrowing the payload to the caller's writable fields
    pub async fn update(
        &self,
        claims: &Claims,
        entry_id: i64,
        payload: UpdateEntryRequest,
    ) -> Result<(), EntryError> {
        if !authorizer::can_perform(claims.role, Action::UpdateEntry) {
            return Err(EntryError::access_denied());
        }

        let updates = authorizer::filter_entry_update(claims.role, payload.into_field_values());

        if updates.is_empty() {
            return Err(EntryError::no_valid_fields());
        }

        tracing::debug!(
            entry_id,
            fields = ?updates.iter().map(|(field, _)| field.as_str()).collect::<Vec<_>>(),
            "applying entry update"
        );

        let affected = self.entry_store.update_fields(entry_id, updates).await?;

        if affected == 0 {
            return Err(EntryError::not_found());
        }

        self.audit_logger
            .record(&claims.sub, Some(entry_id), LogAction::Update, "Entry updated");

        Ok(())
    }

    /// Delete an entry (SUPER_ADMIN only)
    pub async fn delete(&self, claims: &Claims, entry_id: i64) -> Result<(), EntryError> {
        if !authorizer::can_perform(claims.role, Action::DeleteEntry) {
            return Err(EntryError::access_denied());
        }

        let affected = self.entry_store.delete(entry_id).await?;

        if affected == 0 {
            return Err(EntryError::not_found());
        }

        self.audit_logger
            .record(&claims.sub, Some(entry_id), LogAction::Delete, "Entry deleted");

        Ok(())
    }
}

fn required(value: Option<String>) -> Result<String, EntryError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(EntryError::missing_required_fields()),
    }
}
