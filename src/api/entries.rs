use poem_openapi::param::Path;
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::BearerAuth;
use crate::errors::entry::EntryError;
use crate::services::entry_service::{CreateEntryData, ImageUpload};
use crate::services::{EntryService, TokenService};
use crate::types::dto::common::AckResponse;
use crate::types::dto::entries::{
    CreateEntryForm, CreateEntryResponse, EntryResponse, UpdateEntryRequest,
};

/// Logistic entry API endpoints
pub struct EntriesApi {
    token_service: Arc<TokenService>,
    entry_service: Arc<EntryService>,
}

impl EntriesApi {
    /// Create a new EntriesApi
    pub fn new(token_service: Arc<TokenService>, entry_service: Arc<EntryService>) -> Self {
        Self {
            token_service,
            entry_service,
        }
    }
}

/// API tags for entry endpoints
#[derive(Tags)]
enum EntryTags {
    /// Logistic entry endpoints
    Entries,
}

#[OpenApi]
impl EntriesApi {
    /// Create a logistic entry, optionally with a container image
    #[oai(path = "/entries", method = "post", tag = "EntryTags::Entries")]
    async fn create(
        &self,
        auth: BearerAuth,
        form: CreateEntryForm,
    ) -> Result<Json<CreateEntryResponse>, EntryError> {
        let claims = self.token_service.verify(&auth.0.token)?;

        let image = match form.image {
            Some(upload) => {
                let file_name = upload
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| "upload".to_string());
                let bytes = upload
                    .into_vec()
                    .await
                    .map_err(|e| EntryError::internal_error(format!("Failed to read upload: {}", e)))?;
                Some(ImageUpload { bytes, file_name })
            }
            None => None,
        };

        let data = CreateEntryData {
            date: form.date,
            exporter_name: form.exporter_name,
            invoice_no: form.invoice_no,
            container_no: form.container_no,
            size: form.size,
            line: form.line,
            line_seal: form.line_seal,
            custom_seal_no: form.custom_seal_no,
            sb_no: form.sb_no,
            sb_date: form.sb_date,
            pod: form.pod,
            value: form.value,
            pkgs: form.pkgs,
            transporter: form.transporter,
            vehicle_no: form.vehicle_no,
            shipping_bill_no: form.shipping_bill_no,
            shipping_bill_date: form.shipping_bill_date,
            cha: form.cha,
            gst_no: form.gst_no,
            port: form.port,
            factory_stuffing: form.factory_stuffing,
            seal_charges: form.seal_charges,
            fumigation_charges_kpc_care: form.fumigation_charges_kpc_care,
            empty_survey_report_master_marine: form.empty_survey_report_master_marine,
            transport_charges: form.transport_charges,
            handling_charges_transport_bill: form.handling_charges_transport_bill,
            detention_charges: form.detention_charges,
            handling_charges_nk_yard: form.handling_charges_nk_yard,
            concor_freight_charges: form.concor_freight_charges,
            concor_handling_charges: form.concor_handling_charges,
            gsp_fees: form.gsp_fees,
            gsp_making_charges: form.gsp_making_charges,
            out_charges_handling: form.out_charges_handling,
            labour_charges: form.labour_charges,
            examination_charges: form.examination_charges,
            direct_stuffing_charges: form.direct_stuffing_charges,
            ksl_invoice: form.ksl_invoice,
            remarks: form.remarks,
        };

        let entry_id = self.entry_service.create(&claims, data, image).await?;

        Ok(Json(CreateEntryResponse {
            message: "Entry created successfully".to_string(),
            entry_id,
        }))
    }

    /// List all entries; admin roles see creator identity
    #[oai(path = "/entries", method = "get", tag = "EntryTags::Entries")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<EntryResponse>>, EntryError> {
        let claims = self.token_service.verify(&auth.0.token)?;

        let entries = self.entry_service.list(&claims).await?;

        Ok(Json(entries))
    }

    /// Update an entry; USER-role callers may only touch the staff-editable
    /// fields
    #[oai(path = "/entries/:id", method = "put", tag = "EntryTags::Entries")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i64>,
        body: Json<UpdateEntryRequest>,
    ) -> Result<Json<AckResponse>, EntryError> {
        let claims = self.token_service.verify(&auth.0.token)?;

        self.entry_service.update(&claims, id.0, body.0).await?;

        Ok(Json(AckResponse {
            message: "Entry updated successfully".to_string(),
        }))
    }

    /// Delete an entry (SUPER_ADMIN only)
    #[oai(path = "/entries/:id", method = "delete", tag = "EntryTags::Entries")]
    async fn delete(
        &self,
        auth: BearerAuth,
        id: Path<i64>,
    ) -> Result<Json<AckResponse>, EntryError> {
        let claims = self.token_service.verify(&auth.0.token)?;

        self.entry_service.delete(&claims, id.0).await?;

        Ok(Json(AckResponse {
            message: "Entry deleted successfully".to_string(),
        }))
    }
}
