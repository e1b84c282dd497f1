use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use painel_core::{PainelError, RawRecord, RecordSource, Table};

/// Instruction for how a fetch should behave for a given table.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Answer with these rows.
    Return(T),
    /// Answer with this error.
    Fail(PainelError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

#[derive(Default)]
struct TableScript {
    rules: HashMap<Table, MockBehavior<Vec<RawRecord>>>,
    calls: HashMap<Table, usize>,
}

/// Test-side handle that scripts per-table behavior and reads call counts.
#[derive(Clone)]
pub struct DynamicMockController {
    state: Arc<Mutex<TableScript>>,
}

impl DynamicMockController {
    /// Set the behavior for fetches of `table`.
    pub async fn set_behavior(&self, table: Table, behavior: MockBehavior<Vec<RawRecord>>) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(table, behavior);
    }

    /// Shorthand for `set_behavior(table, MockBehavior::Return(rows))`.
    pub async fn set_rows(&self, table: Table, rows: Vec<RawRecord>) {
        self.set_behavior(table, MockBehavior::Return(rows)).await;
    }

    /// Number of fetches of `table` so far.
    pub async fn calls(&self, table: Table) -> usize {
        let guard = self.state.lock().await;
        guard.calls.get(&table).copied().unwrap_or(0)
    }

    /// Clear all configured behaviors and call counters.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.calls.clear();
    }
}

/// A source that defers all behavior to an external controller.
///
/// Tables without a configured behavior report `TableNotFound`.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<TableScript>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn RecordSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(TableScript::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn RecordSource>, controller)
    }
}

#[async_trait]
impl RecordSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn fetch(&self, table: Table) -> Result<Vec<RawRecord>, PainelError> {
        // Count the call and snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            *guard.calls.entry(table).or_insert(0) += 1;
            guard.rules.get(&table).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(rows)) => Ok(rows),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(PainelError::table_not_found(table.as_str())),
        }
    }
}
