use regex::Regex;
use std::sync::LazyLock;

/// Matches an upper-case letter starting a capitalized word (`AAb` shape).
static FIRST_CAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(.)([A-Z][a-z]+)").expect("valid regex"));

/// Matches a lower-case letter or digit followed by an upper-case letter (`aB` shape).
static ALL_CAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([a-z0-9])([A-Z])").expect("valid regex"));

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-zA-Z0-9]+").expect("valid regex"));

/// Converts an identifier to its lower-case, `_`-delimited form.
///
/// Camel-case boundaries are split first, then every run of non-alphanumeric
/// characters collapses to a single `_`. Splitting before collapsing keeps the
/// transform idempotent: its output contains no upper-case letters and no
/// repeated delimiters, so a second pass changes nothing.
///
/// ```
/// assert_eq!(std_util::str::snake_case("HTTPServerLog"), "http_server_log");
/// assert_eq!(std_util::str::snake_case("smart-meter v2"), "smart_meter_v2");
/// ```
pub fn snake_case(src: &str) -> String {
    let split = FIRST_CAP.replace_all(src, "${1}_${2}");
    let split = ALL_CAP.replace_all(&split, "${1}_${2}");
    NON_ALPHANUMERIC
        .replace_all(&split, "_")
        .to_lowercase()
}
