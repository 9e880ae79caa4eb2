#![no_std]
//! Stand-in proof verifier for development and test networks.
//!
//! Accepts every proof. It shares the `verify_tx` interface of a real
//! Groth16 verifier, so a deployment chooses between the two only through
//! the verifier address handed to the reputation contract.

use soroban_sdk::{contract, contractimpl, contracttype, Env, Vec, U256};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct G1Point {
    pub x: U256,
    pub y: U256,
}

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

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proof {
    pub a: G1Point,
    pub b: G2Point,
    pub c: G1Point,
}

#[contract]
pub struct AlwaysTrueVerifier;

#[contractimpl]
impl AlwaysTrueVerifier {
    pub fn verify_tx(_env: Env, _proof: Proof, _inputs: Vec<U256>) -> bool {
        true
    }
}
