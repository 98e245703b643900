use crate::scan::NetworkObservation;

/// External producer of local scan results.
///
/// Implementations wrap a platform scan utility or a simulator. They must
/// swallow their own failures and return an empty list instead of erroring;
/// the merger treats an empty scan as "no networks in range" and carries on.
pub trait ScanSource: Send + Sync {
    fn scan(&self) -> Vec<NetworkObservation>;
}
