//! CLI command implementations.
//!
//! These commands operate on a snapshot file directly, without starting
//! the server.

use std::path::Path;

use anyhow::Result;

use crate::menu::{TreeAudit, audit_items};
use crate::store::snapshot::read_snapshot;

/// Audit every menu in a snapshot and print a report.
///
/// Returns `true` when every menu can be served in nested form.
pub fn cmd_check(path: &Path, max_depth: usize) -> Result<bool> {
    let snapshot = read_snapshot(path)?;

    if snapshot.menus.is_empty() {
        println!("No menus found in {}.", path.display());
        return Ok(true);
    }

    println!(
        "{:<6} {:<24} {:>6} {:>6} {:>8} {:>6}  {}",
        "ID", "MENU", "ITEMS", "ROOTS", "ORPHANS", "DUPES", "STATUS"
    );
    println!("{}", "-".repeat(72));

    let mut all_buildable = true;
    for menu in &snapshot.menus {
        let audit = audit_items(&menu.items, max_depth);
        all_buildable &= audit.is_buildable();

        println!(
            "{:<6} {:<24} {:>6} {:>6} {:>8} {:>6}  {}",
            menu.id,
            menu.name,
            audit.items,
            audit.roots,
            audit.orphans.len(),
            audit.duplicate_ids.len(),
            describe(&audit)
        );
    }

    for (key, menu_id) in &snapshot.assignments {
        if *menu_id != 0 && !snapshot.menus.iter().any(|m| m.id == *menu_id) {
            println!("warning: location '{key}' is assigned to missing menu {menu_id}");
        }
    }

    Ok(all_buildable)
}

/// One-line status for an audit.
fn describe(audit: &TreeAudit) -> String {
    if let Some(error) = &audit.error {
        return format!("FAIL: {error}");
    }
    if audit.is_complete() {
        return "ok".to_string();
    }

    let ids: Vec<String> = audit.unreachable.iter().map(u64::to_string).collect();
    let mut status = format!(
        "ok, {} of {} items unreachable: {}",
        audit.items - audit.reachable,
        audit.items,
        ids.join(", ")
    );
    if !audit.orphans.is_empty() {
        let ids: Vec<String> = audit.orphans.iter().map(u64::to_string).collect();
        status.push_str(&format!(" (orphans: {})", ids.join(", ")));
    }
    status
}
