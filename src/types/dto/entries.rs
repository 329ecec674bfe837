use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};
use sea_orm::Value;
use serde::{Deserialize, Serialize};

use crate::types::db::{logistic_entry, user};
use crate::types::internal::entry_field::EntryField;

/// Multipart form for creating a logistic entry
///
/// Every descriptive field arrives as a text part; the container image, when
/// present, arrives as a file part. The identifying fields are validated by
/// the entry service, not here, so a missing one yields the service's own
/// 400 rather than a generic parse failure.
#[derive(Debug, Multipart)]
pub struct CreateEntryForm {
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

    /// Optional container image
    pub image: Option<Upload>,
}

/// Response model for entry creation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateEntryResponse {
    /// Success message
    pub message: String,

    /// Id of the created entry
    pub entry_id: i64,
}

/// Request model for updating a logistic entry
///
/// Only the fields present in the payload are written. For USER-role callers
/// the authorizer narrows the set to the staff-editable fields before any
/// write happens.
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct UpdateEntryRequest {
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
    pub status: Option<String>,
}

impl UpdateEntryRequest {
    /// Collect the fields actually present in the payload as typed
    /// field/value pairs, in declaration order
    pub fn into_field_values(self) -> Vec<(EntryField, Value)> {
        let mut fields: Vec<(EntryField, Value)> = Vec::new();

        fn push_str(out: &mut Vec<(EntryField, Value)>, field: EntryField, v: Option<String>) {
            if let Some(v) = v {
                out.push((field, v.into()));
            }
        }
        fn push_f64(out: &mut Vec<(EntryField, Value)>, field: EntryField, v: Option<f64>) {
            if let Some(v) = v {
                out.push((field, v.into()));
            }
        }

        push_str(&mut fields, EntryField::Date, self.date);
        push_str(&mut fields, EntryField::ExporterName, self.exporter_name);
        push_str(&mut fields, EntryField::InvoiceNo, self.invoice_no);
        push_str(&mut fields, EntryField::ContainerNo, self.container_no);
        push_str(&mut fields, EntryField::Size, self.size);
        push_str(&mut fields, EntryField::Line, self.line);
        push_str(&mut fields, EntryField::LineSeal, self.line_seal);
        push_str(&mut fields, EntryField::CustomSealNo, self.custom_seal_no);
        push_str(&mut fields, EntryField::SbNo, self.sb_no);
        push_str(&mut fields, EntryField::SbDate, self.sb_date);
        push_str(&mut fields, EntryField::Pod, self.pod);
        push_f64(&mut fields, EntryField::Value, self.value);
        if let Some(pkgs) = self.pkgs {
            fields.push((EntryField::Pkgs, pkgs.into()));
        }
        push_str(&mut fields, EntryField::Transporter, self.transporter);
        push_str(&mut fields, EntryField::VehicleNo, self.vehicle_no);
        push_str(&mut fields, EntryField::ShippingBillNo, self.shipping_bill_no);
        push_str(&mut fields, EntryField::ShippingBillDate, self.shipping_bill_date);
        push_str(&mut fields, EntryField::Cha, self.cha);
        push_str(&mut fields, EntryField::GstNo, self.gst_no);
        push_str(&mut fields, EntryField::Port, self.port);
        push_str(&mut fields, EntryField::FactoryStuffing, self.factory_stuffing);
        push_f64(&mut fields, EntryField::SealCharges, self.seal_charges);
        push_f64(
            &mut fields,
            EntryField::FumigationChargesKpcCare,
            self.fumigation_charges_kpc_care,
        );
        push_f64(
            &mut fields,
            EntryField::EmptySurveyReportMasterMarine,
            self.empty_survey_report_master_marine,
        );
        push_f64(&mut fields, EntryField::TransportCharges, self.transport_charges);
        push_f64(
            &mut fields,
            EntryField::HandlingChargesTransportBill,
            self.handling_charges_transport_bill,
        );
        push_f64(&mut fields, EntryField::DetentionCharges, self.detention_charges);
        push_f64(
            &mut fields,
            EntryField::HandlingChargesNkYard,
            self.handling_charges_nk_yard,
        );
        push_f64(
            &mut fields,
            EntryField::ConcorFreightCharges,
            self.concor_freight_charges,
        );
        push_f64(
            &mut fields,
            EntryField::ConcorHandlingCharges,
            self.concor_handling_charges,
        );
        push_f64(&mut fields, EntryField::GspFees, self.gsp_fees);
        push_f64(&mut fields, EntryField::GspMakingCharges, self.gsp_making_charges);
        push_f64(&mut fields, EntryField::OutChargesHandling, self.out_charges_handling);
        push_f64(&mut fields, EntryField::LabourCharges, self.labour_charges);
        push_f64(&mut fields, EntryField::ExaminationCharges, self.examination_charges);
        push_f64(
            &mut fields,
            EntryField::DirectStuffingCharges,
            self.direct_stuffing_charges,
        );
        push_str(&mut fields, EntryField::KslInvoice, self.ksl_invoice);
        push_str(&mut fields, EntryField::Remarks, self.remarks);
        push_str(&mut fields, EntryField::Status, self.status);

        fields
    }
}

/// Full entry view returned by the list endpoint
///
/// created_by_name / created_by_email are only populated for admin roles;
/// staff callers receive the entry without creator identity.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct EntryResponse {
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
    pub created_by_name: Option<String>,
    pub created_by_email: Option<String>,
}

impl EntryResponse {
    pub fn from_model(model: logistic_entry::Model, creator: Option<&user::Model>) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            exporter_name: model.exporter_name,
            invoice_no: model.invoice_no,
            container_no: model.container_no,
            size: model.size,
            line: model.line,
            line_seal: model.line_seal,
            custom_seal_no: model.custom_seal_no,
            sb_no: model.sb_no,
            sb_date: model.sb_date,
            pod: model.pod,
            value: model.value,
            pkgs: model.pkgs,
            transporter: model.transporter,
            vehicle_no: model.vehicle_no,
            shipping_bill_no: model.shipping_bill_no,
            shipping_bill_date: model.shipping_bill_date,
            cha: model.cha,
            gst_no: model.gst_no,
            port: model.port,
            factory_stuffing: model.factory_stuffing,
            seal_charges: model.seal_charges,
            fumigation_charges_kpc_care: model.fumigation_charges_kpc_care,
            empty_survey_report_master_marine: model.empty_survey_report_master_marine,
            transport_charges: model.transport_charges,
            handling_charges_transport_bill: model.handling_charges_transport_bill,
            detention_charges: model.detention_charges,
            handling_charges_nk_yard: model.handling_charges_nk_yard,
            concor_freight_charges: model.concor_freight_charges,
            concor_handling_charges: model.concor_handling_charges,
            gsp_fees: model.gsp_fees,
            image_path: model.image_path,
            gsp_making_charges: model.gsp_making_charges,
            out_charges_handling: model.out_charges_handling,
            labour_charges: model.labour_charges,
            examination_charges: model.examination_charges,
            direct_stuffing_charges: model.direct_stuffing_charges,
            ksl_invoice: model.ksl_invoice,
            remarks: model.remarks,
            status: model.status,
            created_at: model.created_at,
            created_by_name: creator.map(|u| u.name.clone()),
            created_by_email: creator.map(|u| u.email.clone()),
        }
    }
}
