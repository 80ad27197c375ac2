pub mod tenant_gate;
