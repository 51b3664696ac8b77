/// Application-level result. Typed failures live in each module's own error enum and
/// convert into this through `?`.
pub type Result<T = ()> = anyhow::Result<T>;
