//! The PGN catalogue, grouped by subject

mod ais;
mod electrical;
mod engine;
mod environment;
mod fallback;
mod gnss;
mod iso;
mod j1939;
mod navigation;
mod network;
mod proprietary;
mod routes;
mod steering;

use super::builder::PgnSpec;

/// Every catalogue entry; the registry sorts them by PRN
pub(super) fn catalogue() -> impl Iterator<Item = &'static PgnSpec> {
    [
        fallback::PGNS,
        iso::PGNS,
        j1939::PGNS,
        network::PGNS,
        steering::PGNS,
        engine::PGNS,
        electrical::PGNS,
        navigation::PGNS,
        ais::PGNS,
        gnss::PGNS,
        routes::PGNS,
        environment::PGNS,
        proprietary::PGNS,
    ]
    .into_iter()
    .flatten()
}
