use crate::types::db::logistic_entry;

/// Closed enumeration of the client-updatable `logistic_entries` columns
///
/// The update path maps payload keys onto this enum instead of matching raw
/// strings, so a typo cannot silently widen the writable-field surface.
/// `id`, `user_id`, `image_path` and `created_at` are deliberately absent -
/// they are never writable through an update payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
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
    GspMakingCharges,
    OutChargesHandling,
    LabourCharges,
    ExaminationCharges,
    DirectStuffingCharges,
    KslInvoice,
    Remarks,
    Status,
}

/// Fields a USER-role actor may modify on an existing entry
pub const STAFF_EDITABLE: [EntryField; 3] =
    [EntryField::Remarks, EntryField::VehicleNo, EntryField::Status];

impl EntryField {
    pub fn is_staff_editable(&self) -> bool {
        STAFF_EDITABLE.contains(self)
    }

    /// Corresponding entity column for dynamic update statements
    pub fn column(&self) -> logistic_entry::Column {
        use logistic_entry::Column;
        match self {
            Self::Date => Column::Date,
            Self::ExporterName => Column::ExporterName,
            Self::InvoiceNo => Column::InvoiceNo,
            Self::ContainerNo => Column::ContainerNo,
            Self::Size => Column::Size,
            Self::Line => Column::Line,
            Self::LineSeal => Column::LineSeal,
            Self::CustomSealNo => Column::CustomSealNo,
            Self::SbNo => Column::SbNo,
            Self::SbDate => Column::SbDate,
            Self::Pod => Column::Pod,
            Self::Value => Column::Value,
            Self::Pkgs => Column::Pkgs,
            Self::Transporter => Column::Transporter,
            Self::VehicleNo => Column::VehicleNo,
            Self::ShippingBillNo => Column::ShippingBillNo,
            Self::ShippingBillDate => Column::ShippingBillDate,
            Self::Cha => Column::Cha,
            Self::GstNo => Column::GstNo,
            Self::Port => Column::Port,
            Self::FactoryStuffing => Column::FactoryStuffing,
            Self::SealCharges => Column::SealCharges,
            Self::FumigationChargesKpcCare => Column::FumigationChargesKpcCare,
            Self::EmptySurveyReportMasterMarine => Column::EmptySurveyReportMasterMarine,
            Self::TransportCharges => Column::TransportCharges,
            Self::HandlingChargesTransportBill => Column::HandlingChargesTransportBill,
            Self::DetentionCharges => Column::DetentionCharges,
            Self::HandlingChargesNkYard => Column::HandlingChargesNkYard,
            Self::ConcorFreightCharges => Column::ConcorFreightCharges,
            Self::ConcorHandlingCharges => Column::ConcorHandlingCharges,
            Self::GspFees => Column::GspFees,
            Self::GspMakingCharges => Column::GspMakingCharges,
            Self::OutChargesHandling => Column::OutChargesHandling,
            Self::LabourCharges => Column::LabourCharges,
            Self::ExaminationCharges => Column::ExaminationCharges,
            Self::DirectStuffingCharges => Column::DirectStuffingCharges,
            Self::KslInvoice => Column::KslInvoice,
            Self::Remarks => Column::Remarks,
            Self::Status => Column::Status,
        }
    }

    /// Payload key for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::ExporterName => "exporter_name",
            Self::InvoiceNo => "invoice_no",
            Self::ContainerNo => "container_no",
            Self::Size => "size",
            Self::Line => "line",
            Self::LineSeal => "line_seal",
            Self::CustomSealNo => "custom_seal_no",
            Self::SbNo => "sb_no",
            Self::SbDate => "sb_date",
            Self::Pod => "pod",
            Self::Value => "value",
            Self::Pkgs => "pkgs",
            Self::Transporter => "transporter",
            Self::VehicleNo => "vehicle_no",
            Self::ShippingBillNo => "shipping_bill_no",
            Self::ShippingBillDate => "shipping_bill_date",
            Self::Cha => "cha",
            Self::GstNo => "gst_no",
            Self::Port => "port",
            Self::FactoryStuffing => "factory_stuffing",
            Self::SealCharges => "seal_charges",
            Self::FumigationChargesKpcCare => "fumigation_charges_kpc_care",
            Self::EmptySurveyReportMasterMarine => "empty_survey_report_master_marine",
            Self::TransportCharges => "transport_charges",
            Self::HandlingChargesTransportBill => "handling_charges_transport_bill",
            Self::DetentionCharges => "detention_charges",
            Self::HandlingChargesNkYard => "handling_charges_nk_yard",
            Self::ConcorFreightCharges => "concor_freight_charges",
            Self::ConcorHandlingCharges => "concor_handling_charges",
            Self::GspFees => "gsp_fees",
            Self::GspMakingCharges => "gsp_making_charges",
            Self::OutChargesHandling => "out_charges_handling",
            Self::LabourCharges => "labour_charges",
            Self::ExaminationCharges => "examination_charges",
            Self::DirectStuffingCharges => "direct_stuffing_charges",
            Self::KslInvoice => "ksl_invoice",
            Self::Remarks => "remarks",
            Self::Status => "status",
        }
    }
}
