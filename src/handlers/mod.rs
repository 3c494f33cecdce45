// Handlers by security tier: public endpoints are reachable without a token,
// protected ones sit behind the token gate.
pub mod protected;
pub mod public;
