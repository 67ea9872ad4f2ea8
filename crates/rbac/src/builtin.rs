//! Built-in clinic permission table

use crate::route_table::{RoutePermission, RouteTable};
use shared::{ActionVerb, Role};
use std::sync::{Arc, OnceLock};

use shared::ActionVerb::{Delete, Get, Patch, Post, Put};
use shared::Role::{Admin, Ceo, Doctor, Nurse, Pharmacist, Receptionist};

const EVERYONE: &[Role] = &Role::ALL;
const MANAGEMENT: &[Role] = &[Ceo, Admin];
const CLINICAL: &[Role] = &[Ceo, Admin, Doctor, Nurse];
const FRONT_DESK: &[Role] = &[Ceo, Admin, Doctor, Nurse, Receptionist];

fn route(path: &str, verb: ActionVerb, roles: &[Role], name: &str) -> RoutePermission {
    RoutePermission::new(path, verb, roles.iter().copied()).with_name(name)
}

/// The clinic's permission table, in declaration order.
///
/// `/patient/new` is declared after `/patient/:id` on purpose: it is only
/// reachable through the exact-path lookup.
pub fn clinic_permissions() -> Vec<RoutePermission> {
    vec![
        route("/dashboard", Get, EVERYONE, "Dashboard"),
        route("/profile", Get, EVERYONE, "My Profile"),
        route("/profile", Put, EVERYONE, "Update My Profile"),
        // Patients
        route("/patient", Get, FRONT_DESK, "Patient List"),
        route("/patient", Post, &[Ceo, Admin, Doctor, Receptionist], "Register Patient"),
        route("/patient/:id", Get, FRONT_DESK, "Patient Detail"),
        route("/patient/:id", Put, &[Ceo, Admin, Doctor, Receptionist], "Update Patient"),
        route("/patient/:id", Delete, MANAGEMENT, "Delete Patient")
            .with_description("Removes the patient record and its visit history"),
        route("/patient/new", Get, &[Ceo, Admin, Doctor, Receptionist], "New Patient Form"),
        route("/patient/:id/history", Get, CLINICAL, "Patient History"),
        // Examinations
        route("/examination", Get, CLINICAL, "Examinations"),
        route("/examination", Post, &[Admin, Doctor], "Start Examination"),
        route("/examination/:id", Get, CLINICAL, "Examination Detail"),
        route("/examination/:id", Put, &[Admin, Doctor], "Update Examination"),
        route("/diagnosis", Get, &[Ceo, Admin, Doctor], "Diagnoses"),
        route("/diagnosis", Post, &[Admin, Doctor], "Add Diagnosis"),
        // Pharmacy
        route("/prescription", Get, &[Ceo, Admin, Doctor, Pharmacist], "Prescriptions"),
        route("/prescription", Post, &[Doctor], "Write Prescription"),
        route("/prescription/:id", Get, &[Ceo, Admin, Doctor, Pharmacist], "Prescription Detail"),
        route("/prescription/:id", Patch, &[Doctor, Pharmacist], "Dispense Prescription"),
        route("/medication", Get, &[Ceo, Admin, Doctor, Nurse, Pharmacist], "Medications"),
        route("/medication", Post, &[Admin, Pharmacist], "Add Medication"),
        route("/medication/:id", Put, &[Admin, Pharmacist], "Update Medication"),
        route("/medication/:id", Delete, MANAGEMENT, "Delete Medication"),
        // Laboratory
        route("/lab-order", Get, CLINICAL, "Lab Orders"),
        route("/lab-order", Post, &[Doctor], "Order Lab Test"),
        route("/lab-order/:id/result", Get, CLINICAL, "Lab Results"),
        route("/lab-order/:id/result", Put, &[Admin, Doctor, Nurse], "Record Lab Result"),
        route("/analysis-parameter", Get, &[Ceo, Admin, Doctor], "Analysis Parameters"),
        route("/analysis-parameter", Post, MANAGEMENT, "Add Analysis Parameter"),
        // Radiology
        route("/radiology-order", Get, &[Ceo, Admin, Doctor], "Radiology Orders"),
        route("/radiology-order", Post, &[Doctor], "Order Imaging"),
        route("/radiology-order/:id/image", Get, &[Ceo, Admin, Doctor], "Radiology Images"),
        route("/radiology-order/:id/image", Post, &[Admin, Doctor], "Upload Radiology Image"),
        // Inpatient
        route("/inpatient/room", Get, FRONT_DESK, "Rooms"),
        route("/inpatient/room", Post, MANAGEMENT, "Add Room"),
        route("/inpatient/room/:roomId/bed", Get, FRONT_DESK, "Beds"),
        route("/inpatient/room/:roomId/bed/:bedId", Patch, &[Admin, Nurse, Receptionist], "Assign Bed"),
        // Billing
        route("/billing", Get, MANAGEMENT, "Invoices"),
        route("/billing", Post, &[Ceo, Admin, Receptionist], "Create Invoice"),
        route("/billing/:id", Get, &[Ceo, Admin, Receptionist], "Invoice Detail"),
        route("/billing/:id", Delete, &[Ceo], "Void Invoice"),
        route("/billing/:id/payment", Post, &[Ceo, Admin, Receptionist], "Record Payment"),
        route("/service", Get, &[Ceo, Admin, Doctor, Receptionist], "Services"),
        route("/service", Post, MANAGEMENT, "Add Service"),
        // Reports
        route("/report", Get, MANAGEMENT, "Reports"),
        route("/report/:kind", Get, MANAGEMENT, "Report"),
        // Administration
        route("/user", Get, MANAGEMENT, "Users"),
        route("/user", Post, MANAGEMENT, "Create User"),
        route("/user/:id", Put, MANAGEMENT, "Update User"),
        route("/user/:id", Delete, &[Ceo], "Delete User"),
    ]
}

impl RouteTable {
    /// Process-wide built-in clinic table, built on first use
    pub fn builtin() -> Arc<RouteTable> {
        static BUILTIN: OnceLock<Arc<RouteTable>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Arc::new(RouteTable::compile(clinic_permissions())))
            .clone()
    }
}
