//! Non-interactive commands

use anyhow::Context;
use navgate_core::{
    permission_source_for, HistoryRouter, LoadedRegistry, NavigationGate, NavigationPayload,
    NavigationState, PayloadStore, RegistryDocument, RegistryHandle, Rejection,
};
use navgate_foundation::{GateSettings, PermissionTable};
use std::path::Path;
use std::sync::Arc;

/// `navgate check`
pub fn check(registry: &Path) -> anyhow::Result<()> {
    let loaded = load_registry(registry)?;

    println!("\n📋 Navigation Registry ({})\n", registry.display());
    println!("{:<20} {:<25} {:<10} {:<10} {:<12}", "Key", "Path", "Required", "Optional", "Permissions");
    println!("{}", "-".repeat(80));

    for key in loaded.registry.keys() {
        let Some(entry) = loaded.registry.get(&key) else {
            continue;
        };
        let permissions = if entry.requires_permissions() {
            entry.required_permissions().join(",")
        } else {
            "-".to_string()
        };
        println!(
            "{:<20} {:<25} {:<10} {:<10} {:<12}",
            key,
            entry.path(),
            entry.required().len(),
            entry.optional().len(),
            permissions
        );
    }

    println!(
        "\n✓ {} path(s), {} schema(s): {}",
        loaded.registry.len(),
        loaded.schemas.len(),
        loaded.schemas.ids().join(", ")
    );
    Ok(())
}

/// `navgate attempt`
///
/// `overlay` (permissions.json) wins over the registry's `permissionsByPath` per path.
/// Returns `Ok(false)` when the gate rejects the attempt.
pub fn attempt(
    registry: &Path,
    path_key: &str,
    payload: &Path,
    origin: Option<&str>,
    settings: GateSettings,
    overlay: PermissionTable,
) -> anyhow::Result<bool> {
    let loaded = load_registry(registry)?;
    let payload = load_payload(payload)?;

    let mut permissions = loaded.permissions;
    permissions.merge(overlay);

    let state = Arc::new(NavigationState::new());
    let router = Arc::new(HistoryRouter::new());
    let gate = NavigationGate::new(
        Arc::new(RegistryHandle::new(loaded.registry)),
        permission_source_for(&settings, permissions),
        state.clone(),
        router.clone(),
    )
    .with_settings(settings);

    match gate.attempt_from(origin, path_key, payload) {
        Ok(receipt) => {
            println!(
                "✓ {} → {} ({:.3} ms)",
                receipt.path_key,
                receipt.path,
                receipt.elapsed.as_secs_f64() * 1000.0
            );
            for warning in &receipt.optional_warnings {
                println!("  ! dropped optional {}", warning);
            }
            if let Some(committed) = state.get(&receipt.path) {
                println!("{}", serde_json::to_string_pretty(committed.as_ref())?);
            }
            Ok(true)
        }
        Err(rejection) => {
            println!("✗ [{}] {}", rejection.kind(), rejection);
            println!("  {}", rejection.user_message());
            if let Rejection::InvalidFields(failures) = &rejection {
                for failure in failures {
                    println!("  - {}", failure);
                }
            }
            Ok(false)
        }
    }
}

fn load_registry(path: &Path) -> anyhow::Result<LoadedRegistry> {
    RegistryDocument::load(path)
        .and_then(RegistryDocument::resolve)
        .with_context(|| format!("Failed to load registry {}", path.display()))
}

fn load_payload(path: &Path) -> anyhow::Result<NavigationPayload> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse payload {}", path.display()))
}
