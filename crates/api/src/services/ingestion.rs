//! Record Ingestion: insert catalog entries that are not stored yet.
//!
//! Existing entries are never modified. Each candidate is probed by id and
//! only inserted when the probe says it is absent, either with `Ok(None)` or
//! with a not-found error. Any other probe or insert failure is reported
//! after every candidate has been processed.

use std::collections::HashSet;
use std::future::Future;

use futures::future::join_all;
use pokedex_core::types::DbId;
use pokedex_db::models::pokemon::Pokemon;
use pokedex_db::store::CatalogStore;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::services::catalog::CatalogService;

/// Outcome of an ingestion run, by entry id.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub inserted: Vec<DbId>,
    pub skipped: Vec<DbId>,
}

enum Outcome {
    Inserted(DbId),
    Skipped(DbId),
}

/// Ingest `items` using the catalog's own id lookup as the existence probe.
pub async fn ingest(store: &dyn CatalogStore, items: Vec<Pokemon>) -> AppResult<IngestReport> {
    let catalog = CatalogService::new(store);
    create_if_absent(store, items, |id| async move {
        catalog.find_by_id(id).await.map(Some)
    })
    .await
}

/// Insert every item whose id `probe` reports as absent.
///
/// Items run concurrently. Repeated ids in `items` are inserted at most once
/// (first occurrence wins, later ones are reported as skipped).
pub async fn create_if_absent<P, Fut>(
    store: &dyn CatalogStore,
    items: Vec<Pokemon>,
    probe: P,
) -> AppResult<IngestReport>
where
    P: Fn(DbId) -> Fut,
    Fut: Future<Output = AppResult<Option<Pokemon>>>,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut report = IngestReport::default();
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.id) {
            unique.push(item);
        } else {
            tracing::warn!(id = item.id, "Duplicate id in ingestion input, skipping");
            report.skipped.push(item.id);
        }
    }

    let probe = &probe;
    let outcomes = join_all(unique.into_iter().map(|item| async move {
        match probe(item.id).await {
            Ok(Some(_)) => return Ok(Outcome::Skipped(item.id)),
            Ok(None) => {}
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        item.validate()?;
        let created = store.insert_pokemon(&item).await?;
        Ok::<_, AppError>(Outcome::Inserted(created.id))
    }))
    .await;

    let mut first_error = None;
    for outcome in outcomes {
        match outcome {
            Ok(Outcome::Inserted(id)) => report.inserted.push(id),
            Ok(Outcome::Skipped(id)) => report.skipped.push(id),
            Err(e) => {
                tracing::error!(error = %e, "Ingestion of catalog entry failed");
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e);
    }

    report.inserted.sort_unstable();
    report.skipped.sort_unstable();
    tracing::info!(
        inserted = report.inserted.len(),
        skipped = report.skipped.len(),
        "Ingestion complete",
    );
    Ok(report)
}
