pub mod operation_flow;
pub mod wire_format;
