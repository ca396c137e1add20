// ── Detail correlation ──
//
// Per interface: fetch transceivers, then LLDP adjacencies, then join.
// The join is a cross-product of the two collections, not a keyed match.

use tracing::{debug, info};

use crate::error::{CoreError, QueryFailure, Stage};
use crate::model::{InterfacePair, NeighborRecord, OpticRecord, ReportRow};
use crate::policy::FailureLog;
use crate::source::FabricSource;

/// Pair every optic entry with every neighbor entry of one interface.
///
/// Produces `optics.len() * neighbors.len()` rows, optic-major; no rows
/// when either side is empty.
pub fn join(
    pair: &InterfacePair,
    optics: &[OpticRecord],
    neighbors: &[NeighborRecord],
) -> Vec<ReportRow> {
    optics
        .iter()
        .flat_map(|optic| {
            neighbors
                .iter()
                .map(move |neighbor| ReportRow::new(pair, optic, neighbor))
        })
        .collect()
}

/// Fetch and join optics and neighbors for each pair, in order.
///
/// The adjacency query for a pair is only sent once its optics query has
/// succeeded. A failure is handed to `log`; under fail-fast the whole pass
/// returns the error and no rows.
pub async fn correlate<S: FabricSource>(
    source: &S,
    pairs: &[InterfacePair],
    log: &mut FailureLog,
) -> Result<Vec<ReportRow>, CoreError> {
    let mut rows = Vec::new();

    for pair in pairs {
        let optics = match source.optics(pair).await {
            Ok(optics) => optics,
            Err(e) => {
                log.absorb(QueryFailure::new(Stage::Optics, format!("for {pair}"), &e))?;
                continue;
            }
        };

        let neighbors = match source.neighbors(pair).await {
            Ok(neighbors) => neighbors,
            Err(e) => {
                log.absorb(QueryFailure::new(Stage::Neighbors, format!("for {pair}"), &e))?;
                continue;
            }
        };

        debug!(
            %pair,
            optics = optics.len(),
            neighbors = neighbors.len(),
            "joined interface"
        );
        rows.extend(join(pair, &optics, &neighbors));
    }

    info!(rows = rows.len(), interfaces = pairs.len(), "correlation complete");
    Ok(rows)
}
