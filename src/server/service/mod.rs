//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller and bot layers and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls and external services
//! - **Domain Models**: Working with domain models rather than entity models

pub mod announcement;
pub mod auth;
pub mod command;
pub mod faction;
