// Everything here runs behind the token gate; handlers can rely on the
// AuthUser extension being present.
pub mod form;
