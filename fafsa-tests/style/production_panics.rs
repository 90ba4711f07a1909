//! Production Panic Enforcement
//!
//! Library and binary code propagates errors with `?`. Panicking shortcuts
//! are only allowed inside `#[cfg(test)]` modules.

use crate::support::production_sources;

const FORBIDDEN: &[&str] = &[".unwrap()", ".expect(", "panic!("];

#[test]
fn test_no_panicking_shortcuts_in_production() {
    let mut violations = Vec::new();

    for file in production_sources() {
        for (index, line) in file.production.lines().enumerate() {
            let code = line.split("//").next().unwrap_or(line);
            if FORBIDDEN.iter().any(|pattern| code.contains(pattern)) {
                violations.push(format!(
                    "{}:{}: {}",
                    file.path.display(),
                    index + 1,
                    line.trim()
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "panicking shortcuts in production code:\n{}",
        violations.join("\n")
    );
}
