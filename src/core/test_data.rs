//! Shared fixture for unit tests

use crate::core::geo::Location;
use crate::core::record::BridgeRecord;
use crate::core::table::BridgeTable;

#[allow(clippy::too_many_arguments)]
fn bridge(
    id: u32,
    name: &str,
    highway: &str,
    location: (f64, f64),
    years: (&str, &str, &str),
    span_lengths: Vec<f64>,
    length: f64,
    last_inspected: &str,
    bcis: Vec<f64>,
) -> BridgeRecord {
    BridgeRecord {
        id,
        name: name.to_string(),
        highway: highway.to_string(),
        location: Location::from(location),
        year_built: years.0.to_string(),
        last_major_rehab: years.1.to_string(),
        last_minor_rehab: years.2.to_string(),
        num_spans: span_lengths.len() as u32,
        span_lengths,
        length,
        last_inspected: last_inspected.to_string(),
        bcis,
    }
}

/// Three bridges from the Ontario inventory: two neighbours on Highway 403
/// near Brantford and one on Highway 6 about 220 km north
pub fn three_bridges() -> BridgeTable {
    let records = vec![
        bridge(
            1,
            "Highway 24 Underpass at Highway 403",
            "403",
            (43.167233, -80.275567),
            ("1965", "2014", "2009"),
            vec![12.0, 19.0, 21.0, 12.0],
            65.0,
            "04/13/2012",
            vec![72.3, 69.5, 70.0, 70.3, 70.5, 70.7, 72.9],
        ),
        bridge(
            2,
            "WEST STREET UNDERPASS",
            "403",
            (43.164531, -80.251582),
            ("1963", "2014", "2007"),
            vec![12.2, 18.0, 18.0, 12.2],
            61.0,
            "04/13/2012",
            vec![71.5, 68.1, 69.0, 69.4, 69.4, 70.3, 73.3],
        ),
        bridge(
            3,
            "STOKES RIVER BRIDGE",
            "6",
            (45.036739, -81.33579),
            ("1958", "2013", ""),
            vec![16.0],
            18.4,
            "08/28/2013",
            vec![85.1, 67.8, 67.4, 69.2, 70.0, 70.5, 75.1, 90.1],
        ),
    ];

    BridgeTable::new(records).expect("fixture ids are contiguous")
}
