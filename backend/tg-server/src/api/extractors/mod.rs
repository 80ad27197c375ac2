pub mod admitted_identity;
