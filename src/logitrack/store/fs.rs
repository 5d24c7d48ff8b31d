use super::{DataSource, Dataset};
use crate::error::{DashError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Reads each dataset from `<root>/<name>.json`.
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn dataset_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }
}

#[async_trait]
impl<T: Dataset> DataSource<T> for FileSource {
    async fn load(&self) -> Result<T> {
        let path = self.dataset_path(T::NAME);
        debug!(dataset = T::NAME, path = %path.display(), "loading file");

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| DashError::load(T::NAME, format!("{}: {}", path.display(), e)))?;

        let data: T = serde_json::from_str(&content).map_err(|e| {
            warn!(dataset = T::NAME, error = %e, "malformed dataset");
            DashError::invalid(T::NAME, e.to_string())
        })?;

        if let Err(e) = data.validate() {
            warn!(dataset = T::NAME, error = %e, "dataset failed validation");
            return Err(e);
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::metrics::FleetOverview;
    use crate::model::{OrderRecord, ShipmentRecord};
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, value: &impl serde::Serialize) {
        let content = serde_json::to_string_pretty(value).unwrap();
        std::fs::write(dir.path().join(name), content).unwrap();
    }

    #[tokio::test]
    async fn loads_records_from_json() {
        let dir = TempDir::new().unwrap();
        write(&dir, "orders.json", &fixtures::orders());

        let source = FileSource::new(dir.path());
        let orders: Vec<OrderRecord> = source.load().await.unwrap();
        assert_eq!(orders, fixtures::orders());
    }

    #[tokio::test]
    async fn missing_file_is_a_load_failure() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path());
        let result: Result<Vec<ShipmentRecord>> = source.load().await;
        match result {
            Err(DashError::LoadFailure { dataset, .. }) => assert_eq!(dataset, "shipments"),
            other => panic!("expected LoadFailure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_failure() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("shipments.json"), "[{\"id\": 1}]").unwrap();
        let source = FileSource::new(dir.path());
        let result: Result<Vec<ShipmentRecord>> = source.load().await;
        assert!(matches!(result, Err(DashError::ValidationFailure { .. })));
    }

    #[tokio::test]
    async fn unknown_status_label_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut value = serde_json::to_value(fixtures::shipments()).unwrap();
        value[0]["status"] = "Lost".into();
        write(&dir, "shipments.json", &value);

        let source = FileSource::new(dir.path());
        let result: Result<Vec<ShipmentRecord>> = source.load().await;
        assert!(matches!(result, Err(DashError::ValidationFailure { .. })));
    }

    #[tokio::test]
    async fn duplicate_id_is_a_validation_failure() {
        let dir = TempDir::new().unwrap();
        let mut shipments = fixtures::shipments();
        shipments[2].id = "SH001".into();
        write(&dir, "shipments.json", &shipments);

        let source = FileSource::new(dir.path());
        let result: Result<Vec<ShipmentRecord>> = source.load().await;
        assert!(matches!(result, Err(DashError::ValidationFailure { .. })));
    }

    #[tokio::test]
    async fn progress_over_100_is_a_validation_failure() {
        let dir = TempDir::new().unwrap();
        let mut shipments = fixtures::shipments();
        shipments[0].progress = 101;
        write(&dir, "shipments.json", &shipments);

        let source = FileSource::new(dir.path());
        let result: Result<Vec<ShipmentRecord>> = source.load().await;
        assert!(matches!(result, Err(DashError::ValidationFailure { .. })));
    }

    #[tokio::test]
    async fn loads_overview_datasets() {
        let dir = TempDir::new().unwrap();
        write(&dir, "fleet.json", &fixtures::fleet());
        let source = FileSource::new(dir.path());
        let fleet: FleetOverview = source.load().await.unwrap();
        assert_eq!(fleet.entries.len(), 4);
    }
}
