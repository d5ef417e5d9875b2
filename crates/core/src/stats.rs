//! Formatting rules for the dashboard statistics figures.

/// Volunteer availability value counted as active.
pub const VOLUNTEER_AVAILABLE: &str = "Available";

/// Fixed amount added to the available-volunteer count on the dashboard.
pub const VOLUNTEER_DISPLAY_OFFSET: i64 = 1200;

/// Totals at or above this are shown in thousands.
pub const RESOURCES_THOUSANDS_THRESHOLD: i64 = 1000;

/// Format the summed inventory quantity for display.
///
/// - below 1000: the plain integer (`"999"`)
/// - 1000 and above: thousands truncated to one decimal place with a `k+`
///   suffix (`1000` -> `"1.0k+"`, `4150` -> `"4.1k+"`)
///
/// Truncation keeps the figure a lower bound, which is what the `+` claims.
pub fn format_resources(total: i64) -> String {
    if total < RESOURCES_THOUSANDS_THRESHOLD {
        return total.to_string();
    }

    let tenths = total / 100;
    format!("{}.{}k+", tenths / 10, tenths % 10)
}

/// Volunteer figure shown on the dashboard for `available` volunteers.
pub fn display_volunteers(available: i64) -> i64 {
    available + VOLUNTEER_DISPLAY_OFFSET
}
