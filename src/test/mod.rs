mod config;
mod properties;
mod trace_store;
mod trace_validate;
