//! In-memory storage implementation for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// Mutable ledger state.
///
/// Users and the balance graph live behind one lock so every mutation
/// serializes against the whole graph.
#[derive(Debug, Default)]
struct LedgerState {
    users: HashMap<i64, User>,
    registration_order: Vec<i64>,
    /// creditor id -> debtor id -> amount owed to the creditor
    balances: HashMap<i64, HashMap<i64, f64>>,
}

/// In-memory storage implementation for testing and development
#[derive(Debug, Clone)]
pub struct MemoryStore {
    state: Arc<RwLock<LedgerState>>,
}

impl MemoryStore {
    /// Create a new memory store instance
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(LedgerState::default())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap();
        state.users.clear();
        state.registration_order.clear();
        state.balances.clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn save_user(&mut self, user: &User) -> LedgerResult<()> {
        let mut state = self.state.write().unwrap();
        if state.users.insert(user.id, user.clone()).is_none() {
            state.registration_order.push(user.id);
        }
        Ok(())
    }

    async fn get_user(&self, user_id: i64) -> LedgerResult<Option<User>> {
        Ok(self.state.read().unwrap().users.get(&user_id).cloned())
    }

    async fn list_users(&self) -> LedgerResult<Vec<User>> {
        let state = self.state.read().unwrap();
        let users = state
            .registration_order
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect();
        Ok(users)
    }

    async fn user_count(&self) -> LedgerResult<usize> {
        Ok(self.state.read().unwrap().users.len())
    }

    async fn get_balance(&self, creditor_id: i64, debtor_id: i64) -> LedgerResult<f64> {
        let state = self.state.read().unwrap();
        Ok(state
            .balances
            .get(&creditor_id)
            .and_then(|row| row.get(&debtor_id))
            .copied()
            .unwrap_or(0.0))
    }

    async fn set_balance(
        &mut self,
        creditor_id: i64,
        debtor_id: i64,
        amount: f64,
    ) -> LedgerResult<()> {
        let mut state = self.state.write().unwrap();
        state
            .balances
            .entry(creditor_id)
            .or_default()
            .insert(debtor_id, amount);
        Ok(())
    }

    async fn remove_balance(&mut self, creditor_id: i64, debtor_id: i64) -> LedgerResult<()> {
        let mut state = self.state.write().unwrap();
        if let Some(row) = state.balances.get_mut(&creditor_id) {
            row.remove(&debtor_id);
            if row.is_empty() {
                state.balances.remove(&creditor_id);
            }
        }
        Ok(())
    }

    async fn balances_owed_to(&self, creditor_id: i64) -> LedgerResult<Vec<OwedEntry>> {
        let state = self.state.read().unwrap();
        let mut entries: Vec<OwedEntry> = state
            .balances
            .get(&creditor_id)
            .map(|row| {
                row.iter()
                    .filter(|(_, amount)| **amount > 0.0)
                    .map(|(debtor_id, amount)| OwedEntry {
                        debtor_id: *debtor_id,
                        amount: *amount,
                    })
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by_key(|entry| entry.debtor_id);
        Ok(entries)
    }
}
