use super::backend::{FileStore, KeyValueStore};
use super::markdown::{self, ImportedPlant};
use crate::{
    care::{Clock, SystemClock},
    config::GardenConfig,
    error::{GardenError, Result},
    model::{CareRecord, GrowthMilestone, HealthStatus, NewPlant, Plant, PlantPatch},
    search::{self, SortKey},
    validation,
    weather::{self, MockWeatherProvider, Season, WeatherProvider, WeatherSnapshot},
};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const ID_PREFIX: &str = "plant-";
const ID_LENGTH: usize = 10;
const DEFAULT_STORAGE_KEY: &str = "gardenPlants";
const DEFAULT_MAX_PHOTO_BYTES: usize = 50_000;

/// The plant collection and everything that mutates it.
///
/// Every mutation persists the whole collection through the [`KeyValueStore`].
/// When persisting fails the in-memory change is kept and the error is returned.
pub struct PlantStore {
    backend: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    weather_provider: Box<dyn WeatherProvider>,
    storage_key: String,
    max_photo_bytes: usize,
    plants: Vec<Plant>,
    selected: HashSet<String>,
    search_query: String,
    weather: Option<WeatherSnapshot>,
    last_weather_update: Option<DateTime<Utc>>,
}

impl PlantStore {
    pub fn new(backend: Box<dyn KeyValueStore>, clock: Box<dyn Clock>) -> Self {
        Self {
            backend,
            clock,
            weather_provider: Box::new(MockWeatherProvider),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_photo_bytes: DEFAULT_MAX_PHOTO_BYTES,
            plants: Vec::new(),
            selected: HashSet::new(),
            search_query: String::new(),
            weather: None,
            last_weather_update: None,
        }
    }

    /// File-backed store for a project, using the wall clock.
    pub fn from_config(config: &GardenConfig, project_root: &Path) -> Self {
        let backend = FileStore::new(&config.data_path(project_root), config.garden.quota_bytes);
        Self::new(Box::new(backend), Box::new(SystemClock))
            .with_storage_key(&config.garden.storage_key)
            .with_max_photo_bytes(config.garden.max_photo_bytes)
    }

    pub fn with_storage_key(mut self, key: &str) -> Self {
        self.storage_key = key.to_string();
        self
    }

    pub fn with_max_photo_bytes(mut self, max_photo_bytes: usize) -> Self {
        self.max_photo_bytes = max_photo_bytes;
        self
    }

    pub fn with_weather_provider(mut self, provider: Box<dyn WeatherProvider>) -> Self {
        self.weather_provider = provider;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Replaces the collection with what the backend holds.
    ///
    /// Missing or unreadable data leaves the collection empty. Never fails.
    pub fn load(&mut self) -> usize {
        self.plants = match self.backend.get(&self.storage_key) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Plant>>(&json) {
                Ok(plants) => plants,
                Err(e) => {
                    tracing::warn!(error = %e, key = %self.storage_key, "Stored plant data is corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, key = %self.storage_key, "Failed to read stored plants, starting empty");
                Vec::new()
            }
        };
        self.prune_selection();
        tracing::debug!(count = self.plants.len(), "Loaded plants");
        self.plants.len()
    }

    /// Writes the collection under the storage key.
    ///
    /// Photos over the size limit are left out of the written copy. If the
    /// backend runs out of room the write is retried once without any photos,
    /// and `StorageQuotaExceeded` is returned even when that retry succeeds.
    pub fn persist(&mut self) -> Result<()> {
        let mut oversized = 0;
        let snapshot: Vec<Plant> = self
            .plants
            .iter()
            .map(|plant| {
                let mut copy = plant.clone();
                if copy
                    .photo
                    .as_ref()
                    .is_some_and(|photo| photo.len() > self.max_photo_bytes)
                {
                    copy.photo = None;
                    oversized += 1;
                }
                copy
            })
            .collect();
        if oversized > 0 {
            tracing::debug!(count = oversized, "Oversized photos kept in memory only");
        }

        let json = serde_json::to_string(&snapshot)?;
        match self.backend.set(&self.storage_key, &json) {
            Ok(()) => Ok(()),
            Err(GardenError::CapacityExceeded { size, limit }) => {
                let dropped_photos = self.plants.iter().filter(|p| p.photo.is_some()).count();
                tracing::warn!(size, limit, dropped_photos, "Storage quota exceeded, saving without photos");

                let stripped: Vec<Plant> = snapshot
                    .into_iter()
                    .map(|plant| plant.with_photo(None))
                    .collect();
                let json = serde_json::to_string(&stripped)?;
                self.backend.set(&self.storage_key, &json)?;
                Err(GardenError::StorageQuotaExceeded { dropped_photos })
            }
            Err(e) => Err(e),
        }
    }

    fn generate_id(&self) -> String {
        const ALPHABET: [char; 36] = [
            '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
            'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x',
            'y', 'z',
        ];
        loop {
            let id = format!(
                "{}{}",
                ID_PREFIX,
                nanoid::format(nanoid::rngs::default, &ALPHABET, ID_LENGTH)
            );
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn generate_entry_id() -> String {
        nanoid::nanoid!(12)
    }

    pub fn get(&self, id: &str) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Plant> {
        self.plants.iter_mut().find(|p| p.id == id)
    }

    /// All plants in insertion order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Same name, type and location, ignoring case. A missing location matches an empty one.
    pub fn find_duplicate(&self, candidate: &NewPlant) -> Option<&Plant> {
        let name = candidate.name.to_lowercase();
        let plant_type = candidate.plant_type.to_lowercase();
        let location = candidate.location.as_deref().unwrap_or("").to_lowercase();
        self.plants.iter().find(|p| {
            p.name.to_lowercase() == name
                && p.plant_type.to_lowercase() == plant_type
                && p.location_or_empty().to_lowercase() == location
        })
    }

    /// Adds a plant and returns its new id.
    pub fn add(&mut self, new_plant: NewPlant) -> Result<String> {
        let new_plant = new_plant.normalized();
        validation::validate_new_plant(&new_plant)?;
        if let Some(existing) = self.find_duplicate(&new_plant) {
            return Err(GardenError::DuplicateRecord {
                name: existing.name.clone(),
            });
        }

        let id = self.generate_id();
        tracing::info!(id = %id, name = %new_plant.name, "Adding plant");
        self.plants.push(new_plant.into_plant(id.clone()));
        self.persist()?;
        Ok(id)
    }

    /// Merges `patch` into the plant. Returns `false` when no such plant exists.
    pub fn update(&mut self, id: &str, patch: PlantPatch) -> Result<bool> {
        let patch = patch.normalized();
        validation::validate_patch(&patch)?;
        let Some(plant) = self.get_mut(id) else {
            return Ok(false);
        };
        tracing::info!(id = %id, "Updating plant");
        patch.apply(plant);
        self.persist()?;
        Ok(true)
    }

    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.plants.len();
        self.plants.retain(|p| p.id != id);
        if self.plants.len() == before {
            return Ok(false);
        }
        tracing::info!(id = %id, "Deleted plant");
        self.selected.remove(id);
        self.persist()?;
        Ok(true)
    }

    /// Marks the plant as cared for today.
    pub fn record_care(&mut self, id: &str) -> Result<bool> {
        let today = self.clock.today();
        let Some(plant) = self.get_mut(id) else {
            return Ok(false);
        };
        plant.last_care_date = Some(today);
        tracing::info!(id = %id, date = %today, "Recorded care");
        self.persist()?;
        Ok(true)
    }

    pub fn update_health(&mut self, id: &str, status: HealthStatus) -> Result<bool> {
        let Some(plant) = self.get_mut(id) else {
            return Ok(false);
        };
        plant.health_status = status;
        tracing::info!(id = %id, status = %status, "Updated health status");
        self.persist()?;
        Ok(true)
    }

    pub fn add_milestone(&mut self, id: &str, description: &str) -> Result<bool> {
        let description = description.trim();
        if description.is_empty() {
            return Err(GardenError::Validation(
                "Milestone description cannot be empty".to_string(),
            ));
        }
        let milestone = GrowthMilestone {
            id: Self::generate_entry_id(),
            date: self.clock.today(),
            description: description.to_string(),
            timestamp: self.clock.now(),
        };
        let Some(plant) = self.get_mut(id) else {
            return Ok(false);
        };
        plant.growth_milestones.push(milestone);
        tracing::info!(id = %id, "Added growth milestone");
        self.persist()?;
        Ok(true)
    }

    /// Appends a care history entry dated today; this also counts as care.
    pub fn add_care_record(&mut self, id: &str, care_type: &str, notes: &str) -> Result<bool> {
        let care_type = care_type.trim();
        if care_type.is_empty() {
            return Err(GardenError::Validation(
                "Care type cannot be empty".to_string(),
            ));
        }
        let today = self.clock.today();
        let record = CareRecord {
            id: Self::generate_entry_id(),
            date: today,
            care_type: care_type.to_string(),
            notes: notes.trim().to_string(),
            timestamp: self.clock.now(),
        };
        let Some(plant) = self.get_mut(id) else {
            return Ok(false);
        };
        plant.care_history.push(record);
        plant.last_care_date = Some(today);
        tracing::info!(id = %id, care_type = %care_type, "Added care record");
        self.persist()?;
        Ok(true)
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Plants matching the current search query.
    pub fn filtered_plants(&self) -> Vec<&Plant> {
        search::filter(&self.plants, &self.search_query)
    }

    pub fn sorted(&self, key: SortKey) -> Vec<&Plant> {
        search::sort_plants(&self.filtered_plants(), key, self.clock.today())
    }

    /// Plants whose next care date has passed.
    pub fn needing_attention(&self) -> Vec<&Plant> {
        let today = self.clock.today();
        self.plants
            .iter()
            .filter(|p| crate::care::needs_attention(p, today))
            .collect()
    }

    /// Flips selection of `id`. Unknown ids are ignored.
    pub fn toggle_selection(&mut self, id: &str) {
        if !self.selected.remove(id) && self.get(id).is_some() {
            self.selected.insert(id.to_string());
        }
    }

    /// Selects every plant in the current filtered view.
    pub fn select_all(&mut self) {
        let ids: Vec<String> = self.filtered_plants().iter().map(|p| p.id.clone()).collect();
        self.selected.extend(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Selected plants in collection order.
    pub fn selected(&self) -> Vec<&Plant> {
        self.plants
            .iter()
            .filter(|p| self.selected.contains(&p.id))
            .collect()
    }

    /// Deletes every selected plant and clears the selection. Returns how many were removed.
    pub fn delete_selected(&mut self) -> Result<usize> {
        if self.selected.is_empty() {
            return Ok(0);
        }
        let before = self.plants.len();
        let selected = std::mem::take(&mut self.selected);
        self.plants.retain(|p| !selected.contains(&p.id));
        let removed = before - self.plants.len();
        tracing::info!(count = removed, "Deleted selected plants");
        self.persist()?;
        Ok(removed)
    }

    fn prune_selection(&mut self) {
        let ids: HashSet<&str> = self.plants.iter().map(|p| p.id.as_str()).collect();
        self.selected.retain(|id| ids.contains(id.as_str()));
    }

    /// Imports every plant in a markdown export.
    ///
    /// Nothing is inserted unless the whole document parses. Imported plants
    /// skip duplicate detection.
    pub fn import_markdown(&mut self, content: &str) -> Result<usize> {
        let drafts: Vec<ImportedPlant> = markdown::parse_import(content)?;
        let count = drafts.len();
        for draft in drafts {
            let id = self.generate_id();
            self.plants.push(draft.into_plant(id));
        }
        tracing::info!(count, "Imported plants");
        self.persist()?;
        Ok(count)
    }

    pub async fn import_file(&mut self, path: &Path) -> Result<usize> {
        let bytes = tokio::fs::read(path).await?;
        let content = String::from_utf8(bytes).map_err(|_| {
            GardenError::InvalidImportFormat(
                "Invalid file content. Please provide a valid markdown file.".to_string(),
            )
        })?;
        self.import_markdown(&content)
    }

    pub fn render_export(&self) -> String {
        markdown::render_export(&self.plants, self.clock.today())
    }

    /// Writes `garden-export-<date>.md` into `dir` and returns its path.
    pub async fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(markdown::export_filename(self.clock.today()));
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&path, self.render_export()).await?;
        tracing::info!(path = %path.display(), count = self.plants.len(), "Exported plants");
        Ok(path)
    }

    /// Fetches current weather. A provider failure is logged and yields `None`;
    /// the previous snapshot is kept.
    pub fn refresh_weather(&mut self, location: &str) -> Option<&WeatherSnapshot> {
        match self.weather_provider.current(location) {
            Ok(snapshot) => {
                self.weather = Some(snapshot);
                self.last_weather_update = Some(self.clock.now());
                self.weather.as_ref()
            }
            Err(e) => {
                tracing::warn!(error = %e, location = %location, "Failed to fetch weather");
                None
            }
        }
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn last_weather_update(&self) -> Option<DateTime<Utc>> {
        self.last_weather_update
    }

    /// Care hints for the cached weather, empty when none has been fetched.
    pub fn care_adjustments(&self) -> Vec<&'static str> {
        self.weather
            .as_ref()
            .map(weather::care_adjustments)
            .unwrap_or_default()
    }

    pub fn season(&self) -> Season {
        Season::of(self.clock.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::care::FixedClock;
    use crate::model::CareSchedule;
    use crate::storage::backend::MemoryStore;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn store_with(backend: MemoryStore) -> PlantStore {
        PlantStore::new(Box::new(backend), Box::new(FixedClock::new(today())))
    }

    fn new_store() -> PlantStore {
        store_with(MemoryStore::default())
    }

    fn basil() -> NewPlant {
        NewPlant::new("Basil", "Sweet Basil", today() - Duration::days(20)).with_location("Kitchen")
    }

    struct FailingWeather;

    impl WeatherProvider for FailingWeather {
        fn current(&self, _location: &str) -> Result<WeatherSnapshot> {
            Err(GardenError::Weather("offline".to_string()))
        }
    }

    #[test]
    fn test_add_assigns_unique_stable_ids() {
        let mut store = new_store();
        let first = store.add(basil()).unwrap();
        let second = store
            .add(NewPlant::new("Mint", "Spearmint", today()))
            .unwrap();

        assert!(first.starts_with(ID_PREFIX));
        assert_ne!(first, second);

        let patch = PlantPatch {
            name: Some("Thai Basil".to_string()),
            ..Default::default()
        };
        assert!(store.update(&first, patch).unwrap());
        assert_eq!(store.get(&first).unwrap().name, "Thai Basil");
        assert_eq!(store.plants()[0].id, first);
    }

    #[test]
    fn test_add_sets_fresh_state() {
        let mut store = new_store();
        let id = store.add(basil().with_schedule(CareSchedule::Daily)).unwrap();
        let plant = store.get(&id).unwrap();

        assert_eq!(plant.last_care_date, None);
        assert_eq!(plant.health_status, HealthStatus::Healthy);
        assert!(plant.care_history.is_empty());
        assert!(plant.growth_milestones.is_empty());
        assert_eq!(plant.care_schedule, CareSchedule::Daily);
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut store = new_store();
        store.add(basil()).unwrap();

        let err = store
            .add(NewPlant::new("BASIL", "sweet basil", today()).with_location("kitchen"))
            .unwrap_err();
        match err {
            GardenError::DuplicateRecord { name } => assert_eq!(name, "Basil"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.plants().len(), 1);

        // Different location is a different plant
        store
            .add(NewPlant::new("Basil", "Sweet Basil", today()).with_location("Balcony"))
            .unwrap();
        assert_eq!(store.plants().len(), 2);
    }

    #[test]
    fn test_missing_location_matches_empty_location() {
        let mut store = new_store();
        store.add(NewPlant::new("Fern", "Boston Fern", today())).unwrap();
        assert!(
            store
                .find_duplicate(&NewPlant::new("fern", "boston fern", today()).with_location(""))
                .is_some()
        );
    }

    #[test]
    fn test_add_validates_input() {
        let mut store = new_store();
        assert!(matches!(
            store.add(NewPlant::new("  ", "Tomato", today())),
            Err(GardenError::Validation(_))
        ));
        assert!(store.plants().is_empty());
    }

    #[test]
    fn test_update_allows_duplicates_and_ignores_missing_ids() {
        let mut store = new_store();
        store.add(basil()).unwrap();
        let other = store
            .add(NewPlant::new("Mint", "Sweet Basil", today()).with_location("Kitchen"))
            .unwrap();

        let patch = PlantPatch {
            name: Some("Basil".to_string()),
            ..Default::default()
        };
        assert!(store.update(&other, patch.clone()).unwrap());
        assert!(!store.update("plant-missing", patch).unwrap());
    }

    #[test]
    fn test_delete_persists_and_prunes_selection() {
        let backend = MemoryStore::default();
        let mut store = store_with(backend);
        let id = store.add(basil()).unwrap();
        store.toggle_selection(&id);
        assert!(store.is_selected(&id));

        assert!(store.delete(&id).unwrap());
        assert!(!store.is_selected(&id));
        assert!(!store.delete(&id).unwrap());

        store.load();
        assert!(store.plants().is_empty());
    }

    #[test]
    fn test_load_roundtrip_and_corrupt_data() {
        let mut store = new_store();
        store.add(basil()).unwrap();
        assert_eq!(store.load(), 1);

        let mut corrupt = store_with(MemoryStore::default().with_entry(DEFAULT_STORAGE_KEY, "{not json"));
        assert_eq!(corrupt.load(), 0);

        let mut empty = new_store();
        assert_eq!(empty.load(), 0);
    }

    #[test]
    fn test_record_care_and_attention() {
        let mut store = new_store();
        let id = store.add(basil().with_schedule(CareSchedule::Daily)).unwrap();

        // Never cared for: not flagged
        assert!(store.needing_attention().is_empty());

        let patch = PlantPatch {
            last_care_date: Some(today() - Duration::days(3)),
            ..Default::default()
        };
        store.update(&id, patch).unwrap();
        assert_eq!(store.needing_attention().len(), 1);

        assert!(store.record_care(&id).unwrap());
        assert_eq!(store.get(&id).unwrap().last_care_date, Some(today()));
        assert!(store.needing_attention().is_empty());
    }

    #[test]
    fn test_history_entries() {
        let mut store = new_store();
        let id = store.add(basil()).unwrap();

        assert!(store.add_milestone(&id, "First true leaves").unwrap());
        assert!(store.add_care_record(&id, "fertilizing", "half strength").unwrap());
        assert!(store.update_health(&id, HealthStatus::Sick).unwrap());
        assert!(!store.add_milestone("nope", "x").unwrap());
        assert!(store.add_milestone(&id, "   ").is_err());

        let plant = store.get(&id).unwrap();
        assert_eq!(plant.growth_milestones[0].date, today());
        assert_eq!(plant.care_history[0].care_type, "fertilizing");
        assert_eq!(plant.care_history[0].notes, "half strength");
        assert_eq!(plant.last_care_date, Some(today()));
        assert_eq!(plant.health_status, HealthStatus::Sick);
    }

    #[test]
    fn test_select_all_and_delete_selected_on_filtered_view() {
        let mut store = new_store();
        for name in ["Cherry Tomato", "Roma Tomato", "Beefsteak Tomato"] {
            store.add(NewPlant::new(name, "Tomato", today())).unwrap();
        }
        store.add(NewPlant::new("Rosie", "Climbing Rose", today())).unwrap();

        store.set_search_query("tomato");
        assert_eq!(store.filtered_plants().len(), 3);
        store.select_all();
        assert_eq!(store.selected().len(), 3);

        assert_eq!(store.delete_selected().unwrap(), 3);
        assert!(store.selected().is_empty());
        assert!(store.filtered_plants().is_empty());
        assert_eq!(store.plants().len(), 1);
        assert_eq!(store.plants()[0].name, "Rosie");
    }

    #[test]
    fn test_toggle_selection() {
        let mut store = new_store();
        let id = store.add(basil()).unwrap();
        store.toggle_selection(&id);
        store.toggle_selection(&id);
        assert!(!store.is_selected(&id));

        store.toggle_selection("plant-unknown");
        assert!(store.selected().is_empty());
        assert_eq!(store.delete_selected().unwrap(), 0);
    }

    #[test]
    fn test_import_drops_malformed_section() {
        let mut store = new_store();
        let content = "## Sage\n- **Type:** Garden Sage\n- **Planted:** 2024-03-01\n\n## Broken\n- **Planted:** 2024-03-01\n";
        assert_eq!(store.import_markdown(content).unwrap(), 1);
        assert_eq!(store.plants().len(), 1);
        assert_eq!(store.plants()[0].name, "Sage");
    }

    #[test]
    fn test_failed_import_leaves_collection_unchanged() {
        let mut store = new_store();
        store.add(basil()).unwrap();

        assert!(matches!(
            store.import_markdown(""),
            Err(GardenError::InvalidImportFormat(_))
        ));
        assert!(matches!(
            store.import_markdown("## Nameless\n- **Notes:** nothing else\n"),
            Err(GardenError::NoValidRecords)
        ));
        assert_eq!(store.plants().len(), 1);
    }

    #[test]
    fn test_import_skips_duplicate_detection() {
        let mut store = new_store();
        store.add(basil()).unwrap();
        let exported = store.render_export();
        assert_eq!(store.import_markdown(&exported).unwrap(), 1);
        assert_eq!(store.plants().len(), 2);
        assert_ne!(store.plants()[0].id, store.plants()[1].id);
    }

    #[test]
    fn test_oversized_photo_is_not_persisted() {
        let mut store = new_store().with_max_photo_bytes(10);
        let small = store
            .add(NewPlant::new("Small", "Cactus", today()).with_photo("data:tiny"))
            .unwrap();
        let large = store
            .add(NewPlant::new("Large", "Cactus", today()).with_photo("data:this-one-is-big"))
            .unwrap();

        assert!(store.get(&large).unwrap().photo.is_some());
        store.load();
        assert_eq!(store.get(&small).unwrap().photo.as_deref(), Some("data:tiny"));
        assert_eq!(store.get(&large).unwrap().photo, None);
    }

    #[test]
    fn test_quota_exceeded_keeps_photos_in_memory() {
        let photo = "x".repeat(400);
        let mut store = store_with(MemoryStore::new(600));
        store.add(NewPlant::new("Fig", "Fiddle Leaf Fig", today())).unwrap();

        let result = store.add(NewPlant::new("Pothos", "Golden Pothos", today()).with_photo(photo.clone()));
        assert!(matches!(
            result,
            Err(GardenError::StorageQuotaExceeded { dropped_photos: 1 })
        ));

        // Kept in memory, with its photo
        assert_eq!(store.plants().len(), 2);
        assert_eq!(store.plants()[1].photo.as_deref(), Some(photo.as_str()));

        // Persisted without it
        store.load();
        assert_eq!(store.plants().len(), 2);
        assert!(store.plants().iter().all(|p| p.photo.is_none()));
    }

    #[test]
    fn test_weather_refresh() {
        let mut store = new_store();
        assert!(store.care_adjustments().is_empty());
        let snapshot = store.refresh_weather("auto").unwrap();
        assert_eq!(snapshot.location_name, "Your Location");
        assert!(store.last_weather_update().is_some());
        assert_eq!(store.season(), Season::Summer);

        let mut offline = store_with(MemoryStore::default()).with_weather_provider(Box::new(FailingWeather));
        assert!(offline.refresh_weather("auto").is_none());
        assert!(offline.weather().is_none());
    }

    #[tokio::test]
    async fn test_export_and_import_files() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut store = new_store();
        store.add(basil()).unwrap();

        let path = store.export_to_dir(temp_dir.path()).await.unwrap();
        assert_eq!(path.file_name().unwrap(), "garden-export-2024-06-15.md");

        let mut other = new_store();
        assert_eq!(other.import_file(&path).await.unwrap(), 1);
        assert_eq!(other.plants()[0].name, "Basil");
        assert_eq!(other.plants()[0].location.as_deref(), Some("Kitchen"));

        let binary = temp_dir.path().join("photo.bin");
        std::fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            other.import_file(&binary).await,
            Err(GardenError::InvalidImportFormat(_))
        ));
    }
}
