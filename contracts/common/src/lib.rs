//! Shared access-control building blocks for the staking contracts.
//!
//! This crate provides:
//! - [`admin`] — single-administrator storage with a two-step handover.
//! - [`whitelist`] — an on-chain allowlist of addresses.
//!
//! Both modules only touch storage. Authentication (`require_auth`) and the
//! mapping of failures onto a contract's own error enum stay with the
//! calling contract.

#![no_std]

pub mod admin;
pub mod whitelist;
