// Token acquisition lives here; the gate's allow-list lets it through.
pub mod auth;
