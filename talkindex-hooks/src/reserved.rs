use tracing::debug;

/// Appends the service account to the host's reserved user names.
///
/// Strictly additive: existing entries are left in place and in order, and
/// no deduplication happens here.
pub fn register_reserved_username(names: &mut Vec<String>, service_account: &str) {
    names.push(service_account.to_string());
    debug!(account = %service_account, total = names.len(), "Reserved service account name");
}
