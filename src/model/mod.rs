//! Domain models for voice presence routing.
//!
//! These types sit between serenity's gateway models and the router. Handlers
//! convert gateway payloads into them at the bot boundary so the policy code works
//! with small, owned values that are cheap to build in tests.

pub mod command;
pub mod presence;

#[cfg(test)]
mod test;
