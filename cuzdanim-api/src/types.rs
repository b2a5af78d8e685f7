//! Wire data model for the Cüzdanım API.
//!
//! Response payloads (`*Dto`-style types) spell enum values out as strings,
//! while request types send the backend's numeric enum discriminants; the
//! enums here cover the request side.

pub mod account;
pub mod auth;
pub mod budget;
pub mod category;
pub mod dashboard;
pub mod goal;
pub mod report;
pub mod transaction;

use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AccountType {
    BankAccount = 1,
    CreditCard = 2,
    Cash = 3,
    Wallet = 4,
    Investment = 5,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TransactionType {
    Income = 1,
    Expense = 2,
    Transfer = 3,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Currency {
    Try = 1,
    Usd = 2,
    Eur = 3,
    Gbp = 4,
    Gold = 5,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GoalStatus {
    Active = 1,
    Completed = 2,
    Cancelled = 3,
    Paused = 4,
}
