/// List storage.
///
/// Defines the `List` type that backs `Value::List`: an ordered, growable,
/// exclusively owned sequence of values. Reads hand out references, writes
/// take ownership of the incoming value, and copying a list copies every
/// element recursively.
pub mod list;

pub mod core;
