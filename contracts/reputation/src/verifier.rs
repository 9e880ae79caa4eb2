use soroban_sdk::{contractclient, contracttype, Address, Env, Vec, U256};

/// Number of public inputs every proof is checked against.
pub const PUBLIC_INPUT_LEN: u32 = 10;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct G1Point {
    pub x: U256,
    pub y: U256,
}

/// Element of the quadratic extension field, `c0 + c1 * u`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fp2 {
    pub c0: U256,
    pub c1: U256,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct G2Point {
    pub x: Fp2,
    pub y: Fp2,
}

/// Groth16 proof. Coordinates are carried as 256-bit integers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proof {
    pub a: G1Point,
    pub b: G2Point,
    pub c: G1Point,
}

/// Interface a deployed proof verifier contract must expose.
#[contractclient(name = "ProofVerifierClient")]
pub trait ProofVerifierInterface {
    /// Returns whether `proof` is valid for the given public inputs.
    ///
    /// # Parameters
    ///
    /// - `proof`: the Groth16 proof points
    /// - `inputs`: exactly [`PUBLIC_INPUT_LEN`] field elements; slot 0 holds
    ///   the protocol bound and slot 1 the score under proof
    fn verify_tx(env: Env, proof: Proof, inputs: Vec<U256>) -> bool;
}

/// Calls the configured verifier. A verifier that traps or returns a
/// malformed value counts as a rejection.
pub fn verify(env: &Env, verifier: &Address, proof: &Proof, inputs: &Vec<U256>) -> bool {
    let client = ProofVerifierClient::new(env, verifier);
    matches!(client.try_verify_tx(proof, inputs), Ok(Ok(true)))
}
