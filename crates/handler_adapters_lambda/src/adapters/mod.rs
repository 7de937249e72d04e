pub mod audit_sink;
