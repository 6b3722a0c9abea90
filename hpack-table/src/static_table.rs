//! HPACK static table per RFC 7541 Appendix A, extended with the
//! placeholder and tracing entries every peer of this deployment shares.
//!
//! Indices 1-61 are the RFC entries. Indices 62-71 are empty placeholders
//! that reserve space, and 72-74 carry the distributed tracing identifiers.
//! The order is part of the wire contract.

use lazy_static::lazy_static;
use tracing::debug;

use crate::header_field::HeaderField;
use crate::table::HeaderFieldTable;

/// Number of entries in the static table.
pub const STATIC_TABLE_LEN: usize = 74;

/// Static table contents as (name, value) pairs, index 1 first.
pub static STATIC_ENTRIES: [(&str, &str); STATIC_TABLE_LEN] = [
    (":authority", ""),                             // 1
    (":method", "GET"),                             // 2
    (":method", "POST"),                            // 3
    (":path", "/"),                                 // 4
    (":path", "/index.html"),                       // 5
    (":scheme", "http"),                            // 6
    (":scheme", "https"),                           // 7
    (":status", "200"),                             // 8
    (":status", "204"),                             // 9
    (":status", "206"),                             // 10
    (":status", "304"),                             // 11
    (":status", "400"),                             // 12
    (":status", "404"),                             // 13
    (":status", "500"),                             // 14
    ("accept-charset", ""),                         // 15
    ("accept-encoding", "gzip, deflate"),           // 16
    ("accept-language", ""),                        // 17
    ("accept-ranges", ""),                          // 18
    ("accept", ""),                                 // 19
    ("access-control-allow-origin", ""),            // 20
    ("age", ""),                                    // 21
    ("allow", ""),                                  // 22
    ("authorization", ""),                          // 23
    ("cache-control", ""),                          // 24
    ("content-disposition", ""),                    // 25
    ("content-encoding", ""),                       // 26
    ("content-language", ""),                       // 27
    ("content-length", ""),                         // 28
    ("content-location", ""),                       // 29
    ("content-range", ""),                          // 30
    ("content-type", ""),                           // 31
    ("cookie", ""),                                 // 32
    ("date", ""),                                   // 33
    ("etag", ""),                                   // 34
    ("expect", ""),                                 // 35
    ("expires", ""),                                // 36
    ("from", ""),                                   // 37
    ("host", ""),                                   // 38
    ("if-match", ""),                               // 39
    ("if-modified-since", ""),                      // 40
    ("if-none-match", ""),                          // 41
    ("if-range", ""),                               // 42
    ("if-unmodified-since", ""),                    // 43
    ("last-modified", ""),                          // 44
    ("link", ""),                                   // 45
    ("location", ""),                               // 46
    ("max-forwards", ""),                           // 47
    ("proxy-authenticate", ""),                     // 48
    ("proxy-authorization", ""),                    // 49
    ("range", ""),                                  // 50
    ("referer", ""),                                // 51
    ("refresh", ""),                                // 52
    ("retry-after", ""),                            // 53
    ("server", ""),                                 // 54
    ("set-cookie", ""),                             // 55
    ("strict-transport-security", ""),              // 56
    ("transfer-encoding", ""),                      // 57
    ("user-agent", ""),                             // 58
    ("vary", ""),                                   // 59
    ("via", ""),                                    // 60
    ("www-authenticate", ""),                       // 61
    ("", ""),                                       // 62
    ("", ""),                                       // 63
    ("", ""),                                       // 64
    ("", ""),                                       // 65
    ("", ""),                                       // 66
    ("", ""),                                       // 67
    ("", ""),                                       // 68
    ("", ""),                                       // 69
    ("", ""),                                       // 70
    ("", ""),                                       // 71
    ("trace_id", ""),                               // 72
    ("span_id", ""),                                // 73
    ("parent_id", ""),                              // 74
];

lazy_static! {
    static ref STATIC_TABLE: HeaderFieldTable = build();
}

fn build() -> HeaderFieldTable {
    let table = HeaderFieldTable::new_static(STATIC_ENTRIES.iter().map(|&pair| pair.into()));
    debug!(entries = table.len(), "built static header field table");
    table
}

/// Returns the process-wide static table.
///
/// The table is built on first use and never mutated afterwards; the shared
/// reference can be handed to any number of connections and threads.
#[inline]
pub fn static_table() -> &'static HeaderFieldTable {
    &STATIC_TABLE
}
