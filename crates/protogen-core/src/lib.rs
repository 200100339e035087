//! Protogen Core Types and Definitions
//!
//! This crate provides the foundational types shared by every stage of the
//! protogen pipeline. It includes:
//!
//! - **Data types**: The tagged property union ([`data_type::DataType`])
//! - **Definition**: The API description model ([`definition::Definition`])
//! - **Profile**: Resolved generation settings ([`profile::Profile`])
//! - **Code**: The block-structured text writer ([`code::CodeWriter`])

pub mod code;
pub mod data_type;
pub mod definition;
pub mod profile;
