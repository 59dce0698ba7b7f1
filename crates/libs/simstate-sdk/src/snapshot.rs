use crate::types::{RawSimSnapshot, SimCardRecord, SimStateSnapshot};

/// Map a raw native snapshot into the boundary result. Pure, no I/O.
///
/// Fields copy 1:1 — the phone-number redaction has already happened in the
/// query bridge. `active_sim_count` is taken from the mapped list length,
/// never computed independently, so the count invariant holds by
/// construction.
pub fn map_snapshot(raw: RawSimSnapshot) -> SimStateSnapshot {
    let sim_cards: Vec<SimCardRecord> =
        raw.subscriptions.into_iter().map(SimCardRecord::from).collect();
    SimStateSnapshot {
        sim_count: raw.slot_count,
        active_sim_count: sim_cards.len() as u32,
        sim_cards,
    }
}
