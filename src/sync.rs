//! # Companion Data Sync
//!
//! This module handles weather payloads pushed from the paired companion
//! device. The transport itself is opaque: it delivers batches of tagged
//! events and answers a one-time "list current items" query that lets a
//! freshly created face replay data it missed.
//!
//! ## Payload Schema
//! Items under the well-known path carry a key-value map:
//! - `minTemp`: string, formatted low temperature
//! - `maxTemp`: string, formatted high temperature
//! - `weatherId`: integer condition code, `0` when absent
//!
//! ## Replace, Not Merge
//! Every accepted item overwrites the whole [`WeatherState`]. A payload
//! missing `weatherId` resets the code to `0` (no icon) and missing
//! temperatures clear the range; nothing is carried over from the previous
//! payload.
//!
//! ## Error Handling
//! Malformed fields are defaulted one by one at extraction. Transport
//! failures surface as [`SyncError`] and the engine degrades to defaults.

use crate::WeatherState;
use log::debug;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors the sync transport can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The transport could not be reached
    #[error("connection failed: {0}")]
    Connection(String),

    /// An operation that needs a connection was attempted without one
    #[error("transport not connected")]
    NotConnected,

    /// The shared data layer could not be read
    #[error("data layer unavailable")]
    Unavailable,
}

/// Untyped payload of a data item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataMap(Map<String, Value>);

impl DataMap {
    /// Wrap a JSON object. Anything else yields an empty map.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => DataMap(map),
            _ => DataMap::default(),
        }
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(Value::as_str).map(str::to_string)
    }

    /// Integer under `key`, or `default` when absent, non-integer or out of range.
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.0
            .get(key)
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(default)
    }
}

/// A stored item in the companion data layer.
#[derive(Clone, Debug, PartialEq)]
pub struct DataItem {
    pub path: String,
    pub data: DataMap,
}

impl DataItem {
    pub fn new(path: impl Into<String>, data: DataMap) -> Self {
        DataItem {
            path: path.into(),
            data,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataEventKind {
    Changed,
    Deleted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataEvent {
    pub kind: DataEventKind,
    pub item: DataItem,
}

/// Events delivered together. Must be released back to the transport once
/// processed.
#[derive(Clone, Debug, PartialEq)]
pub struct EventBatch {
    pub id: u64,
    pub events: Vec<DataEvent>,
}

/// The companion data layer as seen from the watch.
pub trait SyncTransport {
    fn connect(&mut self) -> Result<(), SyncError>;

    /// Items currently stored, including ones delivered before this face existed.
    fn data_items(&mut self) -> Result<Vec<DataItem>, SyncError>;

    /// Acknowledge a processed batch.
    fn release(&mut self, batch_id: u64);

    fn disconnect(&mut self);

    fn is_connected(&self) -> bool;
}

/// Weather fields extracted from a data map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherPayload {
    pub min_temp: Option<String>,
    pub max_temp: Option<String>,
    pub weather_id: i32,
}

impl WeatherPayload {
    pub fn from_data_map(map: &DataMap) -> Self {
        WeatherPayload {
            min_temp: map.get_string("minTemp"),
            max_temp: map.get_string("maxTemp"),
            weather_id: map.get_int("weatherId", 0),
        }
    }
}

impl From<WeatherPayload> for WeatherState {
    fn from(payload: WeatherPayload) -> Self {
        WeatherState {
            min_temp: payload.min_temp,
            max_temp: payload.max_temp,
            condition_code: payload.weather_id,
        }
    }
}

/// Applies companion items under one path to the weather state.
#[derive(Clone, Debug)]
pub struct SyncIngestor {
    path: String,
}

impl SyncIngestor {
    pub fn new(path: impl Into<String>) -> Self {
        SyncIngestor { path: path.into() }
    }

    /// Apply one item. Returns false (state untouched) for foreign paths.
    pub fn process_item(&self, item: &DataItem, state: &mut WeatherState) -> bool {
        if item.path != self.path {
            return false;
        }

        *state = WeatherPayload::from_data_map(&item.data).into();

        debug!("weather update, minTemp: {:?}", state.min_temp);
        debug!("weather update, maxTemp: {:?}", state.max_temp);
        debug!("weather update, weatherId: {}", state.condition_code);
        true
    }

    /// Apply the CHANGED events of a live batch. Returns how many were applied.
    pub fn ingest_batch(&self, batch: &EventBatch, state: &mut WeatherState) -> usize {
        let mut applied = 0;
        for event in &batch.events {
            debug!("data changed: {} ({:?})", event.item.path, event.kind);
            if event.kind == DataEventKind::Changed && self.process_item(&event.item, state) {
                applied += 1;
            }
        }
        applied
    }

    /// Apply items returned by the startup list query.
    pub fn replay(&self, items: &[DataItem], state: &mut WeatherState) -> usize {
        let mut applied = 0;
        for item in items {
            debug!("replaying stored item: {}", item.path);
            if self.process_item(item, state) {
                applied += 1;
            }
        }
        applied
    }
}

/// Shared in-process store standing in for the companion data layer.
#[derive(Clone, Debug, Default)]
pub struct DataLayer {
    items: Arc<Mutex<BTreeMap<String, DataItem>>>,
    next_batch: Arc<AtomicU64>,
}

impl DataLayer {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> Result<Vec<DataItem>, SyncError> {
        let items = self.items.lock().map_err(|_| SyncError::Unavailable)?;
        Ok(items.values().cloned().collect())
    }

    fn store(&self, item: DataItem) -> Result<(), SyncError> {
        let mut items = self.items.lock().map_err(|_| SyncError::Unavailable)?;
        items.insert(item.path.clone(), item);
        Ok(())
    }

    fn remove(&self, path: &str) -> Result<Option<DataItem>, SyncError> {
        let mut items = self.items.lock().map_err(|_| SyncError::Unavailable)?;
        Ok(items.remove(path))
    }

    fn batch(&self, events: Vec<DataEvent>) -> EventBatch {
        EventBatch {
            id: self.next_batch.fetch_add(1, Ordering::Relaxed) + 1,
            events,
        }
    }
}

/// Phone side of the data layer: stores items and produces the batch the
/// watch should be handed.
#[derive(Clone, Debug)]
pub struct CompanionHandle {
    layer: DataLayer,
}

impl CompanionHandle {
    pub fn new(layer: DataLayer) -> Self {
        CompanionHandle { layer }
    }

    /// Store `item`, replacing any item at the same path.
    pub fn put(&self, item: DataItem) -> Result<EventBatch, SyncError> {
        self.layer.store(item.clone())?;
        Ok(self.layer.batch(vec![DataEvent {
            kind: DataEventKind::Changed,
            item,
        }]))
    }

    /// Remove the item at `path`; `None` if nothing was stored there.
    pub fn delete(&self, path: &str) -> Result<Option<EventBatch>, SyncError> {
        Ok(self.layer.remove(path)?.map(|item| {
            self.layer.batch(vec![DataEvent {
                kind: DataEventKind::Deleted,
                item,
            }])
        }))
    }
}

/// Watch side of an in-process [`DataLayer`].
#[derive(Debug)]
pub struct LocalTransport {
    layer: DataLayer,
    connected: bool,
    reachable: bool,
    released: Vec<u64>,
}

impl LocalTransport {
    pub fn new(layer: DataLayer) -> Self {
        LocalTransport {
            layer,
            connected: false,
            reachable: true,
            released: Vec::new(),
        }
    }

    /// A transport whose connection attempts always fail.
    pub fn unreachable(layer: DataLayer) -> Self {
        LocalTransport {
            reachable: false,
            ..Self::new(layer)
        }
    }

    /// Ids of batches released so far, in order.
    pub fn released(&self) -> &[u64] {
        &self.released
    }
}

impl SyncTransport for LocalTransport {
    fn connect(&mut self) -> Result<(), SyncError> {
        if !self.reachable {
            return Err(SyncError::Connection("companion unreachable".to_string()));
        }
        self.connected = true;
        Ok(())
    }

    fn data_items(&mut self) -> Result<Vec<DataItem>, SyncError> {
        if !self.connected {
            return Err(SyncError::NotConnected);
        }
        self.layer.items()
    }

    fn release(&mut self, batch_id: u64) {
        self.released.push(batch_id);
    }

    fn disconnect(&mut self) {
        self.connected = false;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
