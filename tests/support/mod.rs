// In-memory stand-in for the library backend. Stores each collection as
// raw JSON, assigns ids on creation and can be told to reject specific
// keys or to be unreachable for a number of reads.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use library_seed::api::{ApiError, LibraryApi};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[derive(Default)]
pub struct MemoryApi {
    collections: RefCell<HashMap<String, Vec<Value>>>,
    next_id: Cell<i64>,
    rejected: HashSet<String>,
    broken_paths: HashSet<String>,
    garbled_creates: bool,
    down_for: Cell<u32>,
    reads: Cell<u32>,
    posts: RefCell<Vec<(String, Value)>>,
}

#[allow(dead_code)]
impl MemoryApi {
    pub fn new() -> Self {
        MemoryApi {
            next_id: Cell::new(1),
            ..Default::default()
        }
    }

    pub fn with_record(self, path: &str, record: Value) -> Self {
        self.collections
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push(record);
        self
    }

    /// Creations whose body carries `key` in any field fail with 409.
    pub fn rejecting(mut self, key: &str) -> Self {
        self.rejected.insert(key.to_string());
        self
    }

    /// Every read of `path` fails.
    pub fn failing_path(mut self, path: &str) -> Self {
        self.broken_paths.insert(path.to_string());
        self
    }

    /// Every creation answers with a body that cannot be decoded.
    pub fn garbling_creates(mut self) -> Self {
        self.garbled_creates = true;
        self
    }

    /// The first `reads` reads fail as if the service were down.
    pub fn down_for(self, reads: u32) -> Self {
        self.down_for.set(reads);
        self
    }

    pub fn len(&self, path: &str) -> usize {
        self.collections.borrow().get(path).map_or(0, Vec::len)
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }

    pub fn posts(&self) -> Vec<(String, Value)> {
        self.posts.borrow().clone()
    }

    fn unavailable() -> ApiError {
        ApiError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "Service Unavailable".into(),
        }
    }
}

fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode {
        url: path.to_string(),
        reason: e.to_string(),
    })
}

impl LibraryApi for MemoryApi {
    fn fetch_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        self.reads.set(self.reads.get() + 1);
        let down = self.down_for.get();
        if down > 0 {
            self.down_for.set(down - 1);
            return Err(Self::unavailable());
        }
        if self.broken_paths.contains(path) {
            return Err(Self::unavailable());
        }
        let records = self
            .collections
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or_default();
        records.into_iter().map(|r| decode(path, r)).collect()
    }

    fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let mut record = serde_json::to_value(body).expect("sample serializes");
        self.posts.borrow_mut().push((path.to_string(), record.clone()));

        if self.garbled_creates {
            return Err(ApiError::Decode {
                url: path.to_string(),
                reason: "expected value at line 1 column 1".into(),
            });
        }

        let object = record.as_object_mut().expect("sample is a JSON object");
        let rejected = object
            .values()
            .filter_map(Value::as_str)
            .any(|v| self.rejected.contains(v));
        if rejected {
            return Err(ApiError::Status {
                status: StatusCode::CONFLICT,
                message: "Ya existe un registro con esa clave".into(),
            });
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        object.insert("id".into(), id.into());
        if let Some(total) = object.get("totalQuantity").cloned() {
            object.insert("availableQuantity".into(), total);
        }

        self.collections
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push(record.clone());
        decode(path, record)
    }
}
