//! Dead Code Enforcement
//!
//! Production code must not silence the dead code lint; unused items are
//! deleted instead.

use crate::support::production_sources;

#[test]
fn test_no_dead_code_allowances_in_production() {
    let sources = production_sources();
    assert!(!sources.is_empty(), "no production sources found");

    let violations: Vec<String> = sources
        .iter()
        .flat_map(|file| {
            file.production
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains("#[allow(") && line.contains("dead_code"))
                .map(|(index, line)| {
                    format!("{}:{}: {}", file.path.display(), index + 1, line.trim())
                })
                .collect::<Vec<_>>()
        })
        .collect();

    assert!(
        violations.is_empty(),
        "dead code allowances in production code:\n{}",
        violations.join("\n")
    );
}
