// geotopic: where is a topic being discussed?
//
// This is the library root. The engine is `geo` (geohash decoding),
// `hotspots` (search and aggregation) and `map` (renderer-ready points).
// `events`, `topics`, `config` and `output` support the command line tool.

pub mod config;
pub mod events;
pub mod geo;
pub mod hotspots;
pub mod map;
pub mod output;
pub mod topics;
