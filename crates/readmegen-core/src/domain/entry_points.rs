//! Conventional Python entry-point files.

/// Candidates in priority order.
pub const ENTRY_POINT_CANDIDATES: [&str; 5] =
    ["main.py", "app.py", "__main__.py", "cli.py", "run.py"];

/// The candidates for which `exists` holds, in priority order.
pub fn detect_entry_points(exists: impl Fn(&str) -> bool) -> Vec<String> {
    ENTRY_POINT_CANDIDATES
        .iter()
        .filter(|name| exists(name))
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_priority_order_regardless_of_discovery_order() {
        let present = ["run.py", "__main__.py", "main.py"];
        let found = detect_entry_points(|n| present.contains(&n));
        assert_eq!(found, vec!["main.py", "__main__.py", "run.py"]);
    }

    #[test]
    fn nothing_present_is_empty() {
        assert!(detect_entry_points(|_| false).is_empty());
    }
}
