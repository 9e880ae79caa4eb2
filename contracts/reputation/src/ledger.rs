use crate::storage::Storage;
use crate::types::{Error, FeedbackRecord};
use soroban_sdk::{BytesN, Env, Vec};

/// Upper bound on records returned by one [`FeedbackLedger::list_page`] call,
/// keeping a page inside the per-transaction ledger read limit.
pub const MAX_PAGE_LEN: u32 = 50;

/// Append-only per-model log of admitted feedback. Records are never
/// rewritten or removed once appended.
pub struct FeedbackLedger;

impl FeedbackLedger {
    /// Stores `record` under the next sequential index for the model.
    pub fn append(env: &Env, model_id: &BytesN<32>, record: &FeedbackRecord) -> Result<u32, Error> {
        if !Storage::has_model(env, model_id) {
            return Err(Error::UnknownEntity);
        }
        let index = Storage::get_feedback_count(env, model_id);
        let next = index.checked_add(1).ok_or(Error::OutOfRange)?;
        Storage::set_feedback(env, model_id, index, record);
        Storage::set_feedback_count(env, model_id, next);
        Ok(index)
    }

    pub fn count(env: &Env, model_id: &BytesN<32>) -> Result<u32, Error> {
        if !Storage::has_model(env, model_id) {
            return Err(Error::UnknownEntity);
        }
        Ok(Storage::get_feedback_count(env, model_id))
    }

    pub fn get(env: &Env, model_id: &BytesN<32>, index: u32) -> Result<FeedbackRecord, Error> {
        if index >= Self::count(env, model_id)? {
            return Err(Error::IndexOutOfRange);
        }
        Storage::get_feedback(env, model_id, index).ok_or(Error::IndexOutOfRange)
    }

    /// All records for the model, oldest first. Large histories should be
    /// read with [`FeedbackLedger::list_page`] instead.
    pub fn list_all(env: &Env, model_id: &BytesN<32>) -> Result<Vec<FeedbackRecord>, Error> {
        let count = Self::count(env, model_id)?;
        Ok(Self::read_range(env, model_id, 0, count))
    }

    /// Up to `limit` records starting at index `start`, oldest first.
    /// `limit` is capped at [`MAX_PAGE_LEN`]; a `start` at or past the end
    /// yields an empty page, so callers resume from `start + page.len()`.
    pub fn list_page(
        env: &Env,
        model_id: &BytesN<32>,
        start: u32,
        limit: u32,
    ) -> Result<Vec<FeedbackRecord>, Error> {
        let count = Self::count(env, model_id)?;
        let end = start
            .saturating_add(limit.min(MAX_PAGE_LEN))
            .min(count);
        Ok(Self::read_range(env, model_id, start, end))
    }

    fn read_range(env: &Env, model_id: &BytesN<32>, start: u32, end: u32) -> Vec<FeedbackRecord> {
        let mut records = Vec::new(env);
        for index in start..end {
            if let Some(record) = Storage::get_feedback(env, model_id, index) {
                records.push_back(record);
            }
        }
        records
    }
}
