//! Wire types shared between the product catalog client and its backend.

pub mod domain;
