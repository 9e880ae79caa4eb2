use crate::types::{AutoScore, Config, DataKey, Error, FeedbackRecord, Model, ModelScores};
use soroban_sdk::{BytesN, Env};

pub struct Storage;

impl Storage {
    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn set_config(env: &Env, config: &Config) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn get_config(env: &Env) -> Result<Config, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    pub fn has_model(env: &Env, model_id: &BytesN<32>) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Model(model_id.clone()))
    }

    pub fn set_model(env: &Env, model_id: &BytesN<32>, model: &Model) {
        env.storage()
            .persistent()
            .set(&DataKey::Model(model_id.clone()), model);
    }

    pub fn get_model(env: &Env, model_id: &BytesN<32>) -> Result<Model, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Model(model_id.clone()))
            .ok_or(Error::UnknownEntity)
    }

    pub fn set_scores(env: &Env, model_id: &BytesN<32>, scores: &ModelScores) {
        env.storage()
            .persistent()
            .set(&DataKey::Scores(model_id.clone()), scores);
    }

    pub fn get_scores(env: &Env, model_id: &BytesN<32>) -> Result<ModelScores, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Scores(model_id.clone()))
            .ok_or(Error::UnknownEntity)
    }

    pub fn set_auto_score(env: &Env, model_id: &BytesN<32>, auto: &AutoScore) {
        env.storage()
            .persistent()
            .set(&DataKey::AutoScore(model_id.clone()), auto);
    }

    pub fn get_auto_score(env: &Env, model_id: &BytesN<32>) -> Option<AutoScore> {
        env.storage()
            .persistent()
            .get(&DataKey::AutoScore(model_id.clone()))
    }

    pub fn get_feedback_count(env: &Env, model_id: &BytesN<32>) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::FeedbackCount(model_id.clone()))
            .unwrap_or(0)
    }

    pub fn set_feedback_count(env: &Env, model_id: &BytesN<32>, count: u32) {
        env.storage()
            .persistent()
            .set(&DataKey::FeedbackCount(model_id.clone()), &count);
    }

    pub fn set_feedback(env: &Env, model_id: &BytesN<32>, index: u32, record: &FeedbackRecord) {
        env.storage()
            .persistent()
            .set(&DataKey::Feedback(model_id.clone(), index), record);
    }

    pub fn get_feedback(env: &Env, model_id: &BytesN<32>, index: u32) -> Option<FeedbackRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::Feedback(model_id.clone(), index))
    }
}
