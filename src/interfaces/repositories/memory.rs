use std::sync::{atomic::AtomicU64, Arc};

use dashmap::DashMap;
use uuid::Uuid;

use crate::entities::{admin::AdminUser, contact::ContactMessage, project::Project};

/// A stored record plus its insertion sequence number. The sequence makes
/// list ordering total when `created_at` timestamps collide.
#[derive(Debug, Clone)]
pub(crate) struct Sequenced<T> {
    pub(crate) seq: u64,
    pub(crate) record: T,
}

/// In-memory catalog store. Distinct ids live in independent shards;
/// read-modify-write on one id happens under that entry's shard write
/// guard, so concurrent writers to the same record are serialized.
#[derive(Clone, Default)]
pub struct MemoryProjectRepo {
    pub(crate) records: Arc<DashMap<Uuid, Sequenced<Project>>>,
    pub(crate) seq: Arc<AtomicU64>,
}

#[derive(Clone, Default)]
pub struct MemoryContactRepo {
    pub(crate) records: Arc<DashMap<Uuid, Sequenced<ContactMessage>>>,
    pub(crate) seq: Arc<AtomicU64>,
}

#[derive(Clone, Default)]
pub struct MemoryAdminRepo {
    pub(crate) records: Arc<DashMap<String, AdminUser>>,
}
