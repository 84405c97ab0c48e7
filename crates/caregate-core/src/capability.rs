//! Capabilities and the fixed role-to-profile table.
//!
//! The table is the single authority for what a role may do. Call sites
//! must consult it (directly or through the capability query) instead of
//! re-deriving role checks inline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;

/// A named capability a role may hold.
///
/// The set is closed and the wire names are fixed; they must match the
/// keys callers probe through the capability query byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    CanViewAllPatients,
    CanViewAllDoctors,
    CanViewAllAppointments,
    CanViewFinancialData,
    CanViewPersonalInfo,
    CanViewMedicalHistory,
    CanViewSystemReports,
    CanManageUsers,
    CanManageAppointments,
    CanViewConfidentialNotes,
}

impl Capability {
    /// All capabilities, in table order.
    pub const ALL: [Capability; 10] = [
        Capability::CanViewAllPatients,
        Capability::CanViewAllDoctors,
        Capability::CanViewAllAppointments,
        Capability::CanViewFinancialData,
        Capability::CanViewPersonalInfo,
        Capability::CanViewMedicalHistory,
        Capability::CanViewSystemReports,
        Capability::CanManageUsers,
        Capability::CanManageAppointments,
        Capability::CanViewConfidentialNotes,
    ];

    /// The canonical wire name of this capability.
    pub const fn name(&self) -> &'static str {
        match self {
            Capability::CanViewAllPatients => "canViewAllPatients",
            Capability::CanViewAllDoctors => "canViewAllDoctors",
            Capability::CanViewAllAppointments => "canViewAllAppointments",
            Capability::CanViewFinancialData => "canViewFinancialData",
            Capability::CanViewPersonalInfo => "canViewPersonalInfo",
            Capability::CanViewMedicalHistory => "canViewMedicalHistory",
            Capability::CanViewSystemReports => "canViewSystemReports",
            Capability::CanManageUsers => "canManageUsers",
            Capability::CanManageAppointments => "canManageAppointments",
            Capability::CanViewConfidentialNotes => "canViewConfidentialNotes",
        }
    }

    /// Parse a capability by its wire name.
    ///
    /// Unknown names are `None`. Callers probing capability names defined
    /// elsewhere in the application must degrade to "not granted", never
    /// to an error.
    pub fn parse(name: &str) -> Option<Self> {
        Capability::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed set of capability flags held by one role.
///
/// Flags are mutually independent booleans. No flag is derived from
/// another, and every flag is listed explicitly for every role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityProfile {
    pub can_view_all_patients: bool,
    pub can_view_all_doctors: bool,
    pub can_view_all_appointments: bool,
    pub can_view_financial_data: bool,
    pub can_view_personal_info: bool,
    pub can_view_medical_history: bool,
    pub can_view_system_reports: bool,
    pub can_manage_users: bool,
    pub can_manage_appointments: bool,
    pub can_view_confidential_notes: bool,
}

impl CapabilityProfile {
    /// Profile for [`Role::Admin`]: every capability granted.
    pub const ADMIN: CapabilityProfile = CapabilityProfile {
        can_view_all_patients: true,
        can_view_all_doctors: true,
        can_view_all_appointments: true,
        can_view_financial_data: true,
        can_view_personal_info: true,
        can_view_medical_history: true,
        can_view_system_reports: true,
        can_manage_users: true,
        can_manage_appointments: true,
        can_view_confidential_notes: true,
    };

    /// Profile for [`Role::Doctor`]: clinical access to their own
    /// patients, appointment management, nothing financial or
    /// confidential.
    pub const DOCTOR: CapabilityProfile = CapabilityProfile {
        can_view_all_patients: false,
        can_view_all_doctors: false,
        can_view_all_appointments: false,
        can_view_financial_data: false,
        can_view_personal_info: true,
        can_view_medical_history: true,
        can_view_system_reports: false,
        can_manage_users: false,
        can_manage_appointments: true,
        can_view_confidential_notes: false,
    };

    /// Profile for [`Role::Patient`]: their own records, their own
    /// bills, and the public doctor listing.
    pub const PATIENT: CapabilityProfile = CapabilityProfile {
        can_view_all_patients: false,
        can_view_all_doctors: true,
        can_view_all_appointments: false,
        can_view_financial_data: true,
        can_view_personal_info: true,
        can_view_medical_history: true,
        can_view_system_reports: false,
        can_manage_users: false,
        can_manage_appointments: false,
        can_view_confidential_notes: false,
    };

    /// The all-false profile used for unknown or absent roles.
    pub const RESTRICTED: CapabilityProfile = CapabilityProfile {
        can_view_all_patients: false,
        can_view_all_doctors: false,
        can_view_all_appointments: false,
        can_view_financial_data: false,
        can_view_personal_info: false,
        can_view_medical_history: false,
        can_view_system_reports: false,
        can_manage_users: false,
        can_manage_appointments: false,
        can_view_confidential_notes: false,
    };

    /// Look up the profile for a role.
    ///
    /// Total: an unknown or absent role (`None`) maps to
    /// [`CapabilityProfile::RESTRICTED`] rather than failing.
    pub const fn for_role(role: Option<Role>) -> &'static CapabilityProfile {
        match role {
            Some(Role::Admin) => &CapabilityProfile::ADMIN,
            Some(Role::Doctor) => &CapabilityProfile::DOCTOR,
            Some(Role::Patient) => &CapabilityProfile::PATIENT,
            None => &CapabilityProfile::RESTRICTED,
        }
    }

    /// Whether this profile grants the given capability.
    pub const fn grants(&self, capability: Capability) -> bool {
        match capability {
            Capability::CanViewAllPatients => self.can_view_all_patients,
            Capability::CanViewAllDoctors => self.can_view_all_doctors,
            Capability::CanViewAllAppointments => self.can_view_all_appointments,
            Capability::CanViewFinancialData => self.can_view_financial_data,
            Capability::CanViewPersonalInfo => self.can_view_personal_info,
            Capability::CanViewMedicalHistory => self.can_view_medical_history,
            Capability::CanViewSystemReports => self.can_view_system_reports,
            Capability::CanManageUsers => self.can_manage_users,
            Capability::CanManageAppointments => self.can_manage_appointments,
            Capability::CanViewConfidentialNotes => self.can_view_confidential_notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup_is_total() {
        for role in [
            Some(Role::Admin),
            Some(Role::Doctor),
            Some(Role::Patient),
            None,
        ] {
            // Every lookup yields a profile with all ten flags resolvable.
            let profile = CapabilityProfile::for_role(role);
            for cap in Capability::ALL {
                let _ = profile.grants(cap);
            }
        }
    }

    #[test]
    fn test_unknown_role_is_all_false() {
        let profile = CapabilityProfile::for_role(Role::parse("superuser"));
        for cap in Capability::ALL {
            assert!(!profile.grants(cap), "{cap} must be denied for unknown role");
        }
    }

    #[test]
    fn test_admin_is_all_true() {
        let profile = CapabilityProfile::for_role(Some(Role::Admin));
        for cap in Capability::ALL {
            assert!(profile.grants(cap), "{cap} must be granted for admin");
        }
    }

    #[test]
    fn test_doctor_row_matches_table() {
        let p = CapabilityProfile::for_role(Some(Role::Doctor));
        assert!(!p.can_view_all_patients);
        assert!(!p.can_view_all_doctors);
        assert!(!p.can_view_all_appointments);
        assert!(!p.can_view_financial_data);
        assert!(p.can_view_personal_info);
        assert!(p.can_view_medical_history);
        assert!(!p.can_view_system_reports);
        assert!(!p.can_manage_users);
        assert!(p.can_manage_appointments);
        assert!(!p.can_view_confidential_notes);
    }

    #[test]
    fn test_patient_row_matches_table() {
        let p = CapabilityProfile::for_role(Some(Role::Patient));
        assert!(!p.can_view_all_patients);
        assert!(p.can_view_all_doctors);
        assert!(!p.can_view_all_appointments);
        assert!(p.can_view_financial_data);
        assert!(p.can_view_personal_info);
        assert!(p.can_view_medical_history);
        assert!(!p.can_view_system_reports);
        assert!(!p.can_manage_users);
        assert!(!p.can_manage_appointments);
        assert!(!p.can_view_confidential_notes);
    }

    #[test]
    fn test_capability_name_roundtrip() {
        for cap in Capability::ALL {
            assert_eq!(Capability::parse(cap.name()), Some(cap));
        }
    }

    #[test]
    fn test_capability_parse_is_exact() {
        assert_eq!(Capability::parse("canViewFinancialDatas"), None);
        assert_eq!(Capability::parse("canviewfinancialdata"), None);
        assert_eq!(Capability::parse(""), None);
    }

    #[test]
    fn test_profile_serializes_with_wire_names() {
        let json = serde_json::to_value(CapabilityProfile::ADMIN).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        let expected: Vec<&str> = Capability::ALL.iter().map(|c| c.name()).collect();
        for name in expected {
            assert!(keys.contains(&name), "missing key {name}");
        }
        assert_eq!(keys.len(), 10);
    }
}
