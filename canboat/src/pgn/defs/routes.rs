//! Route and waypoint database service

use crate::pgn::builder::*;
use crate::pgn::Transport;

pub(super) static PGNS: &[PgnSpec] = &[
    PgnSpec::new(
        "Route and WP Service - Database List",
        130064,
        Transport::Fast,
        &[
            simple("Start Database ID", 8),
            simple("nItems", 8),
            simple("Number of Databases Available", 8),
            simple("Database ID", 8),
            string_fix("Database Name", 8),
            time("Database Timestamp").desc("Seconds since midnight"),
            date("Database Datestamp").desc("Days since January 1, 1970"),
            simple("WP Position Resolution", 6),
            reserved(2),
            simple("Number of Routes in Database", 16),
            simple("Number of WPs in Database", 16),
            simple("Number of Bytes in Database", 16),
        ],
    )
    .repeating_to_end(9, 4),
    PgnSpec::new(
        "Route and WP Service - Route List",
        130065,
        Transport::Fast,
        &[
            simple("Start Route ID", 8),
            simple("nItems", 8),
            simple("Number of Routes in Database", 8),
            simple("Database ID", 8),
            simple("Route ID", 8),
            string_fix("Route Name", 8),
            reserved(4),
            simple("WP Identification Method", 2),
            simple("Route Status", 2),
        ],
    )
    .repeating_to_end(6, 4),
    PgnSpec::new(
        "Route and WP Service - Route/WP-List Attributes",
        130066,
        Transport::Fast,
        &[
            simple("Database ID", 8),
            simple("Route ID", 8),
            string_fix("Route/WP-List Name", 8),
            time("Route/WP-List Timestamp").desc("Seconds since midnight"),
            date("Route/WP-List Datestamp").desc("Days since January 1, 1970"),
            simple("Change at Last Timestamp", 8),
            simple("Number of WPs in the Route/WP-List", 16),
            simple("Critical supplementary parameters", 8),
            simple("Navigation Method", 2),
            simple("WP Identification Method", 2),
            simple("Route Status", 2),
            simple("XTE Limit for the Route", 16),
        ],
    ),
    PgnSpec::new(
        "Route and WP Service - Route - WP Name & Position",
        130067,
        Transport::Fast,
        &[
            simple("Start RPS#", 8),
            simple("nItems", 8),
            simple("Number of WPs in the Route/WP-List", 16),
            simple("Database ID", 8),
            simple("Route ID", 8),
            simple("WP ID", 8),
            string_fix("WP Name", 8),
            latitude_i32("WP Latitude"),
            longitude_i32("WP Longitude"),
        ],
    )
    .repeating_to_end(4, 6),
    PgnSpec::new(
        "Route and WP Service - Route - WP Name",
        130068,
        Transport::Fast,
        &[
            simple("Start RPS#", 8),
            simple("nItems", 8),
            simple("Number of WPs in the Route/WP-List", 16),
            simple("Database ID", 8),
            simple("Route ID", 8),
            simple("WP ID", 8),
            string_fix("WP Name", 8),
        ],
    )
    .repeating_to_end(2, 6),
    PgnSpec::new(
        "Route and WP Service - XTE Limit & Navigation Method",
        130069,
        Transport::Fast,
        &[
            simple("Start RPS#", 8),
            simple("nItems", 8),
            simple("Number of WPs with a specific XTE Limit or Nav. Method", 16),
            simple("Database ID", 8),
            simple("Route ID", 8),
            simple("RPS#", 8),
            simple("XTE limit in the leg after WP", 16),
            simple("Nav. Method in the leg after WP", 4),
            reserved(4),
        ],
    )
    .repeating_to_end(6, 4),
    PgnSpec::new(
        "Route and WP Service - WP Comment",
        130070,
        Transport::Fast,
        &[
            simple("Start ID", 8),
            simple("nItems", 8),
            simple("Number of WPs with Comments", 16),
            simple("Database ID", 8),
            simple("Route ID", 8),
            simple("WP ID / RPS#", 8),
            string_fix("Comment", 8),
        ],
    )
    .repeating_to_end(2, 6),
    PgnSpec::new(
        "Route and WP Service - Route Comment",
        130071,
        Transport::Fast,
        &[
            simple("Start Route ID", 8),
            simple("nItems", 8),
            simple("Number of Routes with Comments", 16),
            simple("Database ID", 8),
            simple("Route ID", 8),
            string_fix("Comment", 8),
        ],
    )
    .repeating_to_end(2, 5),
    PgnSpec::new(
        "Route and WP Service - Database Comment",
        130072,
        Transport::Fast,
        &[
            simple("Start Database ID", 8),
            simple("nItems", 8),
            simple("Number of Databases with Comments", 16),
            simple("Database ID", 8),
            string_fix("Comment", 8),
        ],
    )
    .repeating_to_end(2, 4),
    PgnSpec::new(
        "Route and WP Service - Radius of Turn",
        130073,
        Transport::Fast,
        &[
            simple("Start RPS#", 8),
            simple("nItems", 8),
            simple("Number of WPs with a specific Radius of Turn", 16),
            simple("Database ID", 8),
            simple("Route ID", 8),
            simple("RPS#", 8),
            simple("Radius of Turn", 16),
        ],
    )
    .repeating_to_end(2, 6),
    PgnSpec::new(
        "Route and WP Service - WP List - WP Name & Position",
        130074,
        Transport::Fast,
        &[
            simple("Start WP ID", 8),
            simple("nItems", 8),
            simple("Number of valid WPs in the WP-List", 16),
            simple("Database ID", 8),
            reserved(8),
            simple("WP ID", 8),
            string_fix("WP Name", 8),
            latitude_i32("WP Latitude"),
            longitude_i32("WP Longitude"),
        ],
    )
    .repeating_to_end(4, 6),
];
