#![no_std]
//! Model reputation registry.
//!
//! Each registered model carries two score sources: an automated score
//! posted by a single oracle identity, and human feedback that is only
//! admitted alongside a proof accepted by the configured verifier contract.
//! Reads blend both sources with the configured weights and subtract a
//! linear per-day decay measured from the model's last score mutation.

use soroban_sdk::{
    contract, contractimpl, log, symbol_short, xdr::ToXdr, Address, BytesN, Env, String, Symbol,
    Vec, U256,
};

#[cfg(test)]
extern crate std;

pub mod commitment;
pub mod ledger;
pub mod scoring;
mod storage;
pub mod types;
pub mod verifier;

use ledger::FeedbackLedger;
use storage::Storage;
use types::{
    AutoScore, Config, Error, FeedbackRecord, Model, ModelScores, Reputation, Weights,
};
use verifier::{Proof, PUBLIC_INPUT_LEN};

const EVT_INIT: Symbol = symbol_short!("init");
const EVT_MODEL: Symbol = symbol_short!("model");
const EVT_AUTO: Symbol = symbol_short!("auto");
const EVT_FEEDBACK: Symbol = symbol_short!("feedback");
const EVT_WEIGHTS: Symbol = symbol_short!("weights");
const EVT_DECAY: Symbol = symbol_short!("decay");
const EVT_ORACLE: Symbol = symbol_short!("oracle");
const EVT_VERIFIER: Symbol = symbol_short!("verifier");

#[contract]
pub struct ReputationContract;

#[contractimpl]
impl ReputationContract {
    // ───────────── INITIALIZATION ─────────────

    /// One-shot setup. Rejects weights or decay outside `[0, 10000]` and a
    /// zero bound as `InvalidConfig`.
    pub fn initialize(
        env: Env,
        admin: Address,
        oracle: Address,
        verifier: Address,
        bound: u32,
        human_weight_bp: u32,
        auto_weight_bp: u32,
        decay_bps_per_day: u32,
    ) -> Result<(), Error> {
        if Storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if bound == 0
            || !scoring::is_bp(human_weight_bp)
            || !scoring::is_bp(auto_weight_bp)
            || !scoring::is_bp(decay_bps_per_day)
        {
            return Err(Error::InvalidConfig);
        }

        let config = Config {
            admin: admin.clone(),
            oracle: oracle.clone(),
            verifier: verifier.clone(),
            bound,
            weights: Weights {
                human_weight_bp,
                auto_weight_bp,
            },
            decay_bps_per_day,
        };
        Storage::set_config(&env, &config);

        env.events()
            .publish((EVT_INIT, admin), (oracle, verifier, bound));
        Ok(())
    }

    // ───────────── REGISTRATION ─────────────

    pub fn register_model(
        env: Env,
        registrant: Address,
        model_id: BytesN<32>,
        name: String,
    ) -> Result<(), Error> {
        registrant.require_auth();
        Storage::get_config(&env)?;

        if Storage::has_model(&env, &model_id) {
            return Err(Error::AlreadyExists);
        }

        let now = env.ledger().timestamp();
        let model = Model {
            name: name.clone(),
            registrant: registrant.clone(),
            registered_at: now,
        };
        let scores = ModelScores {
            auto_score_bp: 0,
            human_sum_bp: 0,
            human_count: 0,
            revealed_count: 0,
            last_update: now,
        };
        Storage::set_model(&env, &model_id, &model);
        Storage::set_scores(&env, &model_id, &scores);

        env.events()
            .publish((EVT_MODEL, model_id), (registrant, name));
        Ok(())
    }

    // ───────────── ORACLE ─────────────

    /// Overwrites the model's automated score. Only the configured oracle
    /// may post; proofs are not involved on this path.
    pub fn post_auto_score(
        env: Env,
        oracle: Address,
        model_id: BytesN<32>,
        score_bp: u32,
        evidence_uri: String,
    ) -> Result<(), Error> {
        oracle.require_auth();
        let config = Storage::get_config(&env)?;
        if config.oracle != oracle {
            return Err(Error::Unauthorized);
        }
        if !scoring::is_bp(score_bp) {
            return Err(Error::OutOfRange);
        }

        let mut scores = Storage::get_scores(&env, &model_id)?;
        let now = env.ledger().timestamp();
        scores.auto_score_bp = score_bp;
        scores.last_update = now;

        Storage::set_scores(&env, &model_id, &scores);
        Storage::set_auto_score(
            &env,
            &model_id,
            &AutoScore {
                score_bp,
                evidence_uri: evidence_uri.clone(),
                posted_at: now,
            },
        );

        env.events()
            .publish((EVT_AUTO, model_id), (score_bp, evidence_uri));
        Ok(())
    }

    // ───────────── FEEDBACK SUBMISSION ─────────────

    /// Admits one human feedback submission and returns its ledger index.
    ///
    /// Checks run in order: input shape, bound in slot 0, reveal range,
    /// model existence, then the verifier call. Nothing is written until
    /// every check has passed; the ledger append and the aggregate update
    /// land in the same invocation.
    ///
    /// `revealed_score_bp` is `None` for a private submission: it is counted
    /// but does not move the human average.
    pub fn submit_feedback(
        env: Env,
        submitter: Address,
        model_id: BytesN<32>,
        proof: Proof,
        inputs: Vec<U256>,
        score_commitment: BytesN<32>,
        revealed_score_bp: Option<u32>,
    ) -> Result<u32, Error> {
        submitter.require_auth();
        let config = Storage::get_config(&env)?;

        if inputs.len() != PUBLIC_INPUT_LEN {
            log!(&env, "feedback rejected: malformed inputs", inputs.len());
            return Err(Error::MalformedInputs);
        }
        if inputs.get(0) != Some(U256::from_u32(&env, config.bound)) {
            log!(&env, "feedback rejected: bound mismatch", model_id);
            return Err(Error::BoundMismatch);
        }

        let now = env.ledger().timestamp();
        let mut scores = Storage::get_scores(&env, &model_id)?;
        scoring::record_human_feedback(&mut scores, revealed_score_bp, now)?;

        if !verifier::verify(&env, &config.verifier, &proof, &inputs) {
            log!(&env, "feedback rejected: invalid proof", model_id);
            return Err(Error::InvalidProof);
        }

        let record = FeedbackRecord {
            model_id: model_id.clone(),
            submitter: submitter.clone(),
            score_commitment: score_commitment.clone(),
            revealed: revealed_score_bp.is_some(),
            revealed_score_bp: revealed_score_bp.unwrap_or(0),
            timestamp: now,
            proof_ref: env.crypto().keccak256(&proof.to_xdr(&env)).into(),
        };
        let index = FeedbackLedger::append(&env, &model_id, &record)?;
        Storage::set_scores(&env, &model_id, &scores);

        env.events().publish(
            (EVT_FEEDBACK, model_id),
            (submitter, score_commitment, index),
        );
        Ok(index)
    }

    // ───────────── ADMIN ─────────────

    pub fn set_weights(
        env: Env,
        admin: Address,
        human_weight_bp: u32,
        auto_weight_bp: u32,
    ) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        if !scoring::is_bp(human_weight_bp) || !scoring::is_bp(auto_weight_bp) {
            return Err(Error::OutOfRange);
        }
        config.weights = Weights {
            human_weight_bp,
            auto_weight_bp,
        };
        Storage::set_config(&env, &config);

        env.events()
            .publish((EVT_WEIGHTS, admin), (human_weight_bp, auto_weight_bp));
        Ok(())
    }

    pub fn set_decay(env: Env, admin: Address, bps_per_day: u32) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        if !scoring::is_bp(bps_per_day) {
            return Err(Error::OutOfRange);
        }
        config.decay_bps_per_day = bps_per_day;
        Storage::set_config(&env, &config);

        env.events().publish((EVT_DECAY, admin), bps_per_day);
        Ok(())
    }

    /// Hands the oracle role to a new identity.
    pub fn set_oracle(env: Env, admin: Address, oracle: Address) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        config.oracle = oracle.clone();
        Storage::set_config(&env, &config);

        env.events().publish((EVT_ORACLE, admin), oracle);
        Ok(())
    }

    /// Points submissions at a different verifier contract.
    pub fn set_verifier(env: Env, admin: Address, verifier: Address) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        config.verifier = verifier.clone();
        Storage::set_config(&env, &config);

        env.events().publish((EVT_VERIFIER, admin), verifier);
        Ok(())
    }

    // ───────────── VIEWS ─────────────

    /// Blended, decayed reputation together with its two inputs.
    pub fn reputation_bp(env: Env, model_id: BytesN<32>) -> Result<Reputation, Error> {
        let config = Storage::get_config(&env)?;
        let scores = Storage::get_scores(&env, &model_id)?;

        let human_avg_bp = scoring::human_average_bp(scores.human_sum_bp, scores.revealed_count);
        let raw_bp = scoring::blend_bp(human_avg_bp, scores.auto_score_bp, &config.weights);
        let blended_bp = scoring::decay_bp(
            raw_bp,
            scores.last_update,
            env.ledger().timestamp(),
            config.decay_bps_per_day,
        );

        Ok(Reputation {
            blended_bp,
            human_avg_bp,
            auto_bp: scores.auto_score_bp,
        })
    }

    pub fn human_average_bp(env: Env, model_id: BytesN<32>) -> Result<u32, Error> {
        let scores = Storage::get_scores(&env, &model_id)?;
        Ok(scoring::human_average_bp(
            scores.human_sum_bp,
            scores.revealed_count,
        ))
    }

    pub fn get_scores(env: Env, model_id: BytesN<32>) -> Result<ModelScores, Error> {
        Storage::get_scores(&env, &model_id)
    }

    pub fn get_auto_score(env: Env, model_id: BytesN<32>) -> Option<AutoScore> {
        Storage::get_auto_score(&env, &model_id)
    }

    pub fn get_model(env: Env, model_id: BytesN<32>) -> Result<Model, Error> {
        Storage::get_model(&env, &model_id)
    }

    pub fn model_exists(env: Env, model_id: BytesN<32>) -> bool {
        Storage::has_model(&env, &model_id)
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        Storage::get_config(&env)
    }

    pub fn feedback_count(env: Env, model_id: BytesN<32>) -> Result<u32, Error> {
        FeedbackLedger::count(&env, &model_id)
    }

    pub fn get_feedback(env: Env, model_id: BytesN<32>, index: u32) -> Result<FeedbackRecord, Error> {
        FeedbackLedger::get(&env, &model_id, index)
    }

    pub fn list_feedback(env: Env, model_id: BytesN<32>) -> Result<Vec<FeedbackRecord>, Error> {
        FeedbackLedger::list_all(&env, &model_id)
    }

    /// One page of the feedback log; see `FeedbackLedger::list_page`.
    pub fn list_feedback_page(
        env: Env,
        model_id: BytesN<32>,
        start: u32,
        limit: u32,
    ) -> Result<Vec<FeedbackRecord>, Error> {
        FeedbackLedger::list_page(&env, &model_id, start, limit)
    }

    /// The commitment `submit_feedback` callers should send for `raw_score`.
    pub fn commit_score(env: Env, raw_score: u32) -> BytesN<32> {
        commitment::commit(&env, raw_score)
    }

    /// Checks a stored record's commitment against a claimed raw score.
    /// Read-only; the stored reveal is not affected by the outcome.
    pub fn open_commitment(
        env: Env,
        model_id: BytesN<32>,
        index: u32,
        raw_score: u32,
    ) -> Result<bool, Error> {
        let record = FeedbackLedger::get(&env, &model_id, index)?;
        Ok(commitment::open(&env, &record.score_commitment, raw_score))
    }

    pub fn rating_to_bp(_env: Env, rating: u32, scale_max: u32) -> Result<u32, Error> {
        scoring::rating_to_bp(rating, scale_max)
    }

    // ───────────── INTERNAL ─────────────

    fn require_admin(env: &Env, caller: &Address) -> Result<Config, Error> {
        caller.require_auth();
        let config = Storage::get_config(env)?;
        if config.admin != *caller {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }
}
