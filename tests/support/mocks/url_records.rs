// tests/support/mocks/url_records.rs
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use storefront_seo::domain::errors::{DomainError, DomainResult};
use storefront_seo::domain::seo::{
    LanguageId, UrlRecord, UrlRecordChange, UrlRecordChangeSet, UrlRecordCollection, UrlRecordId,
    UrlRecordRepository,
};
use tokio::sync::Notify;

/// 呼び出し回数を記録するカウンタ
#[derive(Default)]
pub struct CallCounts {
    pub find_by_slugs: AtomicUsize,
    pub find_active: AtomicUsize,
    pub find_active_for_entities: AtomicUsize,
    pub load_scoped: AtomicUsize,
    pub save_all: AtomicUsize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.find_by_slugs.load(Ordering::SeqCst)
            + self.find_active.load(Ordering::SeqCst)
            + self.find_active_for_entities.load(Ordering::SeqCst)
            + self.load_scoped.load(Ordering::SeqCst)
            + self.save_all.load(Ordering::SeqCst)
    }
}

/// メモリ上の URL レコードリポジトリ。スラグの一意制約を模倣する。
pub struct InMemoryUrlRecordRepo {
    records: Mutex<Vec<UrlRecord>>,
    next_id: AtomicI64,
    pub calls: CallCounts,
    fail_saves: AtomicBool,
    block_saves: AtomicBool,
    save_started: Notify,
    release: Notify,
}

impl InMemoryUrlRecordRepo {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            calls: CallCounts::default(),
            fail_saves: AtomicBool::new(false),
            block_saves: AtomicBool::new(false),
            save_started: Notify::new(),
            release: Notify::new(),
        }
    }

    pub fn with_records(records: Vec<UrlRecord>) -> Self {
        let next = records.iter().map(|r| i64::from(r.id)).max().unwrap_or(0) + 1;
        let repo = Self::new();
        *repo.records.lock().unwrap() = records;
        repo.next_id.store(next, Ordering::SeqCst);
        repo
    }

    pub fn snapshot(&self) -> Vec<UrlRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn active_slug(&self, entity_id: i64, entity_name: &str) -> Option<String> {
        self.snapshot()
            .into_iter()
            .find(|r| r.is_active && r.entity_id == entity_id && r.entity_name == entity_name)
            .map(|r| r.slug)
    }

    pub fn count(&self, counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// 保存処理を解放されるまで停止させる
    pub fn set_block_saves(&self, block: bool) {
        self.block_saves.store(block, Ordering::SeqCst);
        if !block {
            self.release.notify_waiters();
        }
    }

    pub async fn wait_for_save_started(&self) {
        self.save_started.notified().await;
    }

    fn scoped(&self, pred: impl Fn(&UrlRecord) -> bool) -> Vec<UrlRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| pred(r))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl UrlRecordRepository for InMemoryUrlRecordRepo {
    async fn find_by_slugs(&self, slugs: &[String]) -> DomainResult<Vec<UrlRecord>> {
        self.calls.find_by_slugs.fetch_add(1, Ordering::SeqCst);
        let keys: HashSet<String> = slugs.iter().map(|s| s.to_lowercase()).collect();
        Ok(self.scoped(|r| keys.contains(&r.slug.to_lowercase())))
    }

    async fn find_active(
        &self,
        entity_id: i64,
        entity_name: &str,
        language_id: LanguageId,
    ) -> DomainResult<Option<UrlRecord>> {
        self.calls.find_active.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .scoped(|r| {
                r.is_active
                    && r.entity_id == entity_id
                    && r.entity_name.eq_ignore_ascii_case(entity_name)
                    && r.language_id == language_id
            })
            .into_iter()
            .next())
    }

    async fn find_active_for_entities(
        &self,
        entity_name: &str,
        entity_ids: &[i64],
        language_id: LanguageId,
    ) -> DomainResult<Vec<UrlRecord>> {
        self.calls.find_active_for_entities.fetch_add(1, Ordering::SeqCst);
        Ok(self.scoped(|r| {
            r.is_active
                && entity_ids.contains(&r.entity_id)
                && r.entity_name.eq_ignore_ascii_case(entity_name)
                && r.language_id == language_id
        }))
    }

    async fn load_scoped(
        &self,
        entity_name: &str,
        language_ids: &[LanguageId],
        entity_ids: &[i64],
    ) -> DomainResult<UrlRecordCollection> {
        self.calls.load_scoped.fetch_add(1, Ordering::SeqCst);
        let records = self.scoped(|r| {
            r.entity_name.eq_ignore_ascii_case(entity_name)
                && (language_ids.is_empty() || language_ids.contains(&r.language_id))
                && (entity_ids.is_empty() || entity_ids.contains(&r.entity_id))
        });
        Ok(UrlRecordCollection::new(entity_name, records))
    }

    async fn save_all(&self, changes: UrlRecordChangeSet) -> DomainResult<u64> {
        self.calls.save_all.fetch_add(1, Ordering::SeqCst);
        self.save_started.notify_one();
        if self.block_saves.load(Ordering::SeqCst) {
            self.release.notified().await;
        }
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }

        let mut records = self.records.lock().unwrap();
        let mut staged = records.clone();
        let mut affected = 0u64;
        for change in changes {
            match change {
                UrlRecordChange::Insert(new) => {
                    let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                    staged.push(UrlRecord {
                        id: UrlRecordId::new(id).unwrap(),
                        entity_id: new.entity_id,
                        entity_name: new.entity_name,
                        slug: new.slug,
                        language_id: new.language_id,
                        is_active: new.is_active,
                    });
                }
                UrlRecordChange::SetActive { id, is_active } => {
                    let record = staged
                        .iter_mut()
                        .find(|r| r.id == id)
                        .ok_or_else(|| DomainError::NotFound("url record not found".into()))?;
                    record.is_active = is_active;
                }
            }
            affected += 1;
        }

        let mut seen = HashSet::new();
        if !staged.iter().all(|r| seen.insert(r.slug.to_lowercase())) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        *records = staged;
        Ok(affected)
    }
}
