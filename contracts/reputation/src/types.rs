use soroban_sdk::{contracterror, contracttype, Address, BytesN, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidConfig = 3,
    UnknownEntity = 4,
    AlreadyExists = 5,
    Unauthorized = 6,
    OutOfRange = 7,
    BoundMismatch = 8,
    InvalidProof = 9,
    IndexOutOfRange = 10,
    MalformedInputs = 11,
}

/// A registered model. Immutable after registration.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    pub name: String,
    pub registrant: Address,
    pub registered_at: u64,
}

/// Per-model reputation state owned by the engine.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelScores {
    pub auto_score_bp: u32,
    pub human_sum_bp: u64,
    pub human_count: u32,
    pub revealed_count: u32,
    /// Decay anchor: registration time or the last score mutation.
    pub last_update: u64,
}

/// The oracle's latest post for a model, kept alongside its evidence link.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoScore {
    pub score_bp: u32,
    pub evidence_uri: String,
    pub posted_at: u64,
}

/// One admitted human feedback submission
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub model_id: BytesN<32>,
    pub submitter: Address,
    pub score_commitment: BytesN<32>,
    pub revealed: bool,
    /// Zero when the submitter kept the score private.
    pub revealed_score_bp: u32,
    pub timestamp: u64,
    /// keccak-256 of the XDR-encoded proof.
    pub proof_ref: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights {
    pub human_weight_bp: u32,
    pub auto_weight_bp: u32,
}

/// Contract configuration parameters
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub admin: Address,
    pub oracle: Address,
    pub verifier: Address,
    /// Value every proof must carry in public input slot 0.
    pub bound: u32,
    pub weights: Weights,
    pub decay_bps_per_day: u32,
}

/// Result of a reputation read, all values in basis points.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reputation {
    pub blended_bp: u32,
    pub human_avg_bp: u32,
    pub auto_bp: u32,
}

/// Storage keys for the contract data
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataKey {
    Config,
    Model(BytesN<32>),
    Scores(BytesN<32>),
    AutoScore(BytesN<32>),
    Feedback(BytesN<32>, u32),
    FeedbackCount(BytesN<32>),
}
