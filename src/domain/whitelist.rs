// ==========================================
// Placement Prep Portal - Access whitelist domain model
// ==========================================
// The persisted whitelist is the single source of elevated roles.
// Access checks look up the user_roles table by email; there is no
// process-wide list of privileged addresses.
// ==========================================

use crate::domain::types::{AuthProvider, UserRole};
use serde::{Deserialize, Serialize};

// ==========================================
// WhitelistEntry - one permitted user
// ==========================================
// Keyed by email; bulk uploads upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhitelistEntry {
    pub email: String,
    pub role: UserRole,
    pub auth_provider: AuthProvider,
    pub name: Option<String>,
}
