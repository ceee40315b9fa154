/// Primary key type shared by catalog entries and users.
///
/// Catalog ids come from the source data set and are assigned by the
/// client, not by a database sequence.
pub type DbId = i64;
